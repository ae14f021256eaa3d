pub mod normalized_error;
#[allow(clippy::module_inception)]
pub mod request_executor;
pub mod response_shape;
pub mod service_call;
pub mod url;
