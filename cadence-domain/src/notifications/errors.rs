use thiserror::Error;

use crate::shared_types::NotificationId;

/// Errors of the notification center.
///
/// Mutation operations never fail — absent ids are benign no-ops — so the
/// variants here only cover construction time, where a seed provider can
/// break its contract.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The seed contained two notifications with the same id.
    #[error("Seed contains duplicate notification id '{0}'.")]
    DuplicateId(NotificationId),

    /// The seed provider itself failed to produce data.
    #[error("Seed provider error: {0}")]
    SeedProvider(String),
}
