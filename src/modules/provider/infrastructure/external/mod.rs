pub mod mangadex;
pub mod retry_util;

pub use mangadex::MangaDexClient;
pub use retry_util::{CommonHttpHandler, RetryConfig, RetryUtil};
