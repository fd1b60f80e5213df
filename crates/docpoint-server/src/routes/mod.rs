//! API routes

pub mod extract;
pub mod health;
