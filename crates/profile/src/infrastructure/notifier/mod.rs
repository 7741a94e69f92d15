// crates/profile/src/infrastructure/notifier/mod.rs

mod http_like_notifier;

pub use http_like_notifier::HttpLikeNotifier;
