//! Standard library of messages and nodes for STRIDER
//!
//! - `messages`: typed payloads exchanged over topics
//! - `nodes`: reusable nodes built on `strider_core`

pub mod messages;
pub mod nodes;

pub use messages::{Twist, Vector3};
pub use nodes::VelocityBroadcasterNode;
