//! Pipeline entry point for the roster engine.
//!
//! This module wires the generator into the statistics aggregator and exposes
//! the JSON boundary: a `{count, age: {min, max}}` request in, a
//! [`Summary`](crate::models::Summary) out.

mod request;
mod runner;

pub use request::{AgeBoundsRequest, RosterRequest};
pub use runner::RosterService;
