// Middleware module - contains observability and CORS configuration

pub mod cors;
pub mod observability;

// Re-export for convenience
pub use cors::{create_cors_layer, create_restricted_cors_layer};
pub use observability::{create_trace_layer, init_tracing};
