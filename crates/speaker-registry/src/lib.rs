//! Conference speaker registration.
//!
//! The [`registration`] module holds the eligibility rules that decide whether a speaker
//! submission is accepted, the storage seam used to persist accepted speakers, and an HTTP
//! router that exposes the registration operation.

pub mod config;
pub mod error;
pub mod registration;
pub mod telemetry;
