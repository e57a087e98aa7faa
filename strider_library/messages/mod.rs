//! Message types for the STRIDER framework
//!
//! Standardized payloads used for communication between nodes. Boolean
//! control signals ride as plain `bool` payloads and need no wrapper type.

pub mod geometry;

pub use geometry::{Twist, Vector3};
