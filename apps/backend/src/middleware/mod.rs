pub mod channel_guard;
pub mod request_trace;
pub mod structured_logger;

pub use channel_guard::ChannelGuard;
pub use request_trace::{RequestTrace, TraceId};
pub use structured_logger::StructuredLogger;
