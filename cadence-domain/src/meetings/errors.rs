use thiserror::Error;

use crate::shared_types::MeetingId;

/// Errors of the meeting directory. Like the notification center, runtime
/// operations are no-op tolerant; only seed contract breaches surface.
#[derive(Debug, Error)]
pub enum MeetingError {
    /// The seed contained two meetings with the same id.
    #[error("Seed contains duplicate meeting id '{0}'.")]
    DuplicateId(MeetingId),

    /// The seed provider itself failed to produce data.
    #[error("Seed provider error: {0}")]
    SeedProvider(String),
}
