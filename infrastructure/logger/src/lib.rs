mod subscriber;
mod tracing_logger;

pub use subscriber::init_subscriber;
pub use tracing_logger::TracingLogger;
