pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use error::{Result, RigError};
