//! Confirmation gate guarding destructive bulk deletion.

use serde::{Deserialize, Serialize};

/// Two-state guard in front of bulk delete: a delete request only arms the
/// gate; the store mutates on an explicit confirm, and a cancel disarms the
/// gate without touching the store. Transitions that do not apply (confirm or
/// cancel while idle, request while already pending) report `false` and leave
/// the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ConfirmationGate {
    #[default]
    Idle,
    PendingConfirmation,
}

impl ConfirmationGate {
    /// Arms the gate. Returns whether the transition happened.
    pub fn request(&mut self) -> bool {
        match self {
            ConfirmationGate::Idle => {
                *self = ConfirmationGate::PendingConfirmation;
                true
            }
            ConfirmationGate::PendingConfirmation => false,
        }
    }

    /// Disarms the gate for the confirm path. The caller applies the deletion
    /// side effect only when this returns `true`.
    pub fn confirm(&mut self) -> bool {
        match self {
            ConfirmationGate::PendingConfirmation => {
                *self = ConfirmationGate::Idle;
                true
            }
            ConfirmationGate::Idle => false,
        }
    }

    /// Disarms the gate without any side effect.
    pub fn cancel(&mut self) -> bool {
        match self {
            ConfirmationGate::PendingConfirmation => {
                *self = ConfirmationGate::Idle;
                true
            }
            ConfirmationGate::Idle => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ConfirmationGate::PendingConfirmation)
    }
}
