use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Creates a new id.
            ///
            /// # Panics
            ///
            /// Panics in debug builds if the provided id is empty.
            pub fn new(id: impl Into<String>) -> Self {
                let id_str = id.into();
                debug_assert!(!id_str.is_empty(), concat!(stringify!($name), " must not be empty"));
                Self(id_str)
            }

            /// Returns a string slice of the id.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self::new(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id.to_string())
            }
        }
    };
}

string_id! {
    /// Unique identifier of a notification record.
    NotificationId
}

string_id! {
    /// Unique identifier of a meeting (single or recurring).
    MeetingId
}

string_id! {
    /// Unique identifier of a department agenda.
    DepartmentId
}
