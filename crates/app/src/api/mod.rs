//! Thin wrappers over the admin REST backend. Every function takes the
//! session so requests carry the bearer token and expired sessions are
//! handled in one place.

mod client;

pub mod auth;
pub mod courts;
pub mod court_types;
pub mod firms;
pub mod users;

pub use client::Client;
