//! HTTP REST adapter
//!
//! Depends only on core/. Exposes the definitions API via the Axum
//! web framework.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use error::{ApiError, ApiReply};
pub use handlers::*;
pub use router::build_router;
