pub mod chat;
pub mod demo_requests;
pub mod status;

pub use chat::ChatStreamRequest;
pub use demo_requests::{CreateDemoRequest, DemoRequestResponse, ListDemoRequestsParams};
pub use status::{CreateStatusCheck, StatusCheckResponse};
