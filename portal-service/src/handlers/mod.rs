pub mod chat;
pub mod demo_requests;
pub mod health;
pub mod metrics;
pub mod root;
pub mod status;

pub use chat::chat_stream;
pub use demo_requests::{create_demo_request, list_demo_requests};
pub use health::{health_check, readiness_check};
pub use metrics::metrics_endpoint;
pub use root::root;
pub use status::{create_status_check, list_status_checks};
