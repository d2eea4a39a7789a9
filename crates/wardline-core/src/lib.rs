//! Shared plumbing for Wardline services: health endpoints, tracing setup,
//! and common tower layers. Business logic never lives here.

pub mod health;
pub mod middleware;
pub mod tracing;
