//! HTTP boundary for the mergelab profile service
//!
//! Thin axum handlers over `mergelab-service`:
//! - auth endpoints issuing `sid` session cookies
//! - the `/update-profile` attack surface and the `/admin` payoff gate
//! - `/search` default-merging, the guestbook, and uploads
//!
//! All state is built per process in [`state::AppState`]; tests construct
//! their own and drive the router directly with `tower::ServiceExt`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod session;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError};
pub use router::create_router;
pub use server::Server;
pub use state::AppState;
