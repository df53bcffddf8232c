//! Shared ambient pieces for relmock services: tracing setup and the
//! request-id middleware. Behavioral code lives in the service crates.

pub mod middleware;
pub mod tracing;
