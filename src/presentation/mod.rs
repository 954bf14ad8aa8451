// Presentation layer - HTTP state and handlers
pub mod app_state;
pub mod handlers;
pub mod request_body;
