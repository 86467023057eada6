//! Strongly-typed ID wrappers for employees and leave records
//!
//! Using newtype wrappers prevents passing a leave id where an employee id is
//! expected (and vice versa) at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Number of hex characters shown in the short display form
const SHORT_LEN: usize = 8;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Check whether a user-supplied identifier refers to this ID.
            ///
            /// Accepts the full UUID, the short display form (`prefix-xxxxxxxx`)
            /// or the bare eight character short form.
            pub fn matches(&self, identifier: &str) -> bool {
                let identifier = identifier.trim();
                if identifier.is_empty() {
                    return false;
                }
                if let Ok(uuid) = Uuid::parse_str(identifier) {
                    return uuid == self.0;
                }
                let short = identifier.strip_prefix($display_prefix).unwrap_or(identifier);
                short.len() == SHORT_LEN
                    && self.0.to_string()[..SHORT_LEN].eq_ignore_ascii_case(short)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..SHORT_LEN])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(EmployeeId, "emp-");
define_id!(LeaveId, "lv-");
