//! Domain layer for the Cadence meetings dashboard.
//!
//! Two subsystems live here: the notifications drawer (store, filter engine,
//! selection bookkeeping, bulk-delete confirmation gate) and the meeting
//! schedule (day tabs, list filtering, pagination reveal, AI participation,
//! add-to-agenda acknowledgements). Both follow the same shape: a service
//! trait, a default implementation owning its state behind `RwLock`, and a
//! broadcast channel views subscribe to.

// Re-export core module
pub use cadence_core as core;

pub mod meetings;
pub mod notifications;
pub mod shared_types;

pub use meetings::{DefaultMeetingDirectory, MeetingDirectory, MeetingError, MeetingEvent};
pub use notifications::{
    DefaultNotificationCenter, NotificationCenter, NotificationError, NotificationEvent,
};
pub use shared_types::{DepartmentId, MeetingId, NotificationId};
