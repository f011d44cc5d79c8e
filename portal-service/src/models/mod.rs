pub mod chat;
pub mod demo_request;
pub mod status_check;

pub use chat::ChatEvent;
pub use demo_request::DemoRequest;
pub use status_check::StatusCheck;
