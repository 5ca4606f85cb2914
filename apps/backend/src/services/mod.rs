//! Services backing the API routes.

pub mod sessions;
pub mod speech;
