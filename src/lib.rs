pub mod config;
pub mod http_client;
pub mod query_string;
pub mod request_executor;

pub use config::{ErrorCatalog, ErrorDescriptor};
pub use http_client::request::{RequestHeaders, RequestMethod};
pub use request_executor::{
    normalized_error::NormalizedError, request_executor::RequestExecutor,
    service_call::ServiceCall,
};
