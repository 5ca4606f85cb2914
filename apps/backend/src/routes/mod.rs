//! HTTP route handlers

pub mod practice;
pub mod speech;
pub mod words;
