//! Profile workflows and boundary collaborators for mergelab
//!
//! Everything the HTTP layer talks to lives here:
//! - [`profile::ProfileService`]: register, update, view, authorize
//! - [`session::SessionStore`]: bearer tokens for logged-in records
//! - [`auth::CredentialStore`]: password digests backing login
//! - [`messages::MessageBoard`]: the guestbook log
//! - [`files::FileStore`]: upload byte storage
//!
//! These types are transport-free; the HTTP crate wires them into routes.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod files;
pub mod messages;
pub mod profile;
pub mod session;

pub use auth::CredentialStore;
pub use files::{FileStore, StoredFile};
pub use messages::{Message, MessageBoard, RECENT_LIMIT};
pub use profile::{ProfileService, DEMO_RECORD};
pub use session::SessionStore;
