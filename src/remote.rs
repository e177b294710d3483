//! HTTP access to the admin endpoints.

mod admin;
mod http_client;

pub use self::admin::*;
pub use self::http_client::HttpTransport;
