// crates/profile/src/application/ports/mod.rs

mod like_notifier;
mod object_store;

pub use like_notifier::{LikeNotifier, NewLikeNotification};
pub use object_store::ObjectStore;
