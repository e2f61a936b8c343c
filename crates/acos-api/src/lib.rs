// acos-api: Async Rust client for the A10 Networks AXAPI v3 management API

pub mod auth;
pub mod client;
pub mod error;
pub mod slb;
pub mod system;
pub mod transport;

pub use auth::Credentials;
pub use client::AxapiClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
