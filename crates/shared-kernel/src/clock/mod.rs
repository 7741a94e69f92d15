// crates/shared-kernel/src/clock/mod.rs

use chrono::{DateTime, Utc};

mod system;
#[cfg(any(test, feature = "test-utils"))]
mod fixed;

pub use system::SystemClock;
#[cfg(any(test, feature = "test-utils"))]
pub use fixed::FixedClock;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
