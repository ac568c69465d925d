//! Request-level authentication helpers.
//!
//! `AuthSession` wraps the session cookie's server-side state and `AuthGuard` resolves
//! the logged-in user and checks venue ownership before a controller acts.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
