//! The notifications drawer: store, filter engine, selection bookkeeping and
//! the bulk-delete confirmation gate.
//!
//! State is memory-only and owned by one [`DefaultNotificationCenter`] per
//! enclosing page; views subscribe to its broadcast channel and read
//! [`DrawerSnapshot`]s.

pub mod errors;
pub mod events;
pub mod filter;
pub mod gate;
pub mod seed;
pub mod selection;
pub mod service;
pub mod types;

pub use errors::NotificationError;
pub use events::NotificationEvent;
pub use gate::ConfirmationGate;
pub use seed::{mock_notifications, NotificationSeed, NotificationSeedProvider, StaticSeedProvider};
pub use selection::SelectionSet;
pub use service::{DefaultNotificationCenter, DrawerSnapshot, NotificationCenter};
pub use types::{
    FilterCriteria, KindFilter, Notification, NotificationKind, NotificationPreferences,
    NotificationStats, StatusFilter,
};
