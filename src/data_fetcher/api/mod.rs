pub mod client;
pub mod http_client;
pub mod retry;
pub mod urls;
mod fetch_utils;
mod match_api;
mod orchestrator;

pub use client::RiotClient;
pub use http_client::create_http_client;
pub use retry::RetryPolicy;
pub use urls::*;
