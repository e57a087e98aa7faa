//! Standard nodes built on `strider_core`

pub mod velocity_broadcaster_node;

pub use velocity_broadcaster_node::VelocityBroadcasterNode;
