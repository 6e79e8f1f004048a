pub mod discovery;
pub mod http_api;

pub use discovery::{ConsulDiscovery, ServiceDiscovery};
pub use http_api::HttpTransport;
