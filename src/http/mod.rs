//! HTTP client layer — `CryptoHttp` over a pluggable `Transport`.

pub mod client;
pub mod retry;
pub mod transport;

pub use client::CryptoHttp;
pub use retry::{RetryConfig, RetryPolicy};
#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
pub use transport::{HttpRequest, HttpResponse, Method, RequestBody, Transport};
