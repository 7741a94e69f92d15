// crates/profile/src/domain/value_objects/record_id.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifiants BIGSERIAL des relations 1:N
macro_rules! record_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub fn from_raw(id: i64) -> Self {
                Self(id)
            }

            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(ImageId);
record_id!(LikeId);
record_id!(BlockId);
record_id!(ComplaintId);
