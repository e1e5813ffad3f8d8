//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod answers;
pub mod auth;
pub mod comments;
pub mod friends;
pub mod health;
pub mod questions;
pub mod users;
