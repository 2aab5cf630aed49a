//! API request handlers

mod admin;
mod auth;
mod health;
mod messages;
mod profile;
mod search;
mod upload;

pub use admin::*;
pub use auth::*;
pub use health::*;
pub use messages::*;
pub use profile::*;
pub use search::*;
pub use upload::*;
