//! # STRIDER Core
//!
//! The core runtime for the STRIDER robotics framework.
//!
//! STRIDER is a small in-process pub/sub runtime for robot control loops.
//! This crate provides the fundamental building blocks:
//!
//! - **Nodes**: Independent computational units driven by a scheduler
//! - **Communication**: Publisher-subscriber message passing over named topics
//! - **Memory**: Bounded in-process topic rings with per-subscriber cursors
//! - **Scheduling**: A cooperative tick loop with per-node rate control
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use strider_core::{Hub, Node, NodeInfo};
//!
//! struct ExampleNode {
//!     output: Hub<String>,
//! }
//!
//! impl Node for ExampleNode {
//!     fn name(&self) -> &'static str { "example" }
//!
//!     fn tick(&mut self, mut ctx: Option<&mut NodeInfo>) {
//!         let _ = self.output.send("Hello STRIDER!".into(), ctx.as_deref_mut());
//!     }
//! }
//! ```

pub mod communication;
pub mod core;
pub mod error;
pub mod memory;
pub mod scheduling;

// Re-export commonly used types for easy access
pub use crate::communication::Hub;
pub use crate::core::{LogSummary, Node, NodeConfig, NodeInfo, NodeState};
pub use crate::error::{StriderError, StriderResult};
pub use crate::scheduling::{PeriodicTimer, Scheduler};
