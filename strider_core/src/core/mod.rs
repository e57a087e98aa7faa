//! # Core types and traits for the STRIDER framework
//!
//! The fundamental building blocks of the runtime:
//!
//! - **Node**: The base trait for all computational units
//! - **NodeInfo**: Runtime context and logging utilities handed to nodes
//!
//! ## Node Lifecycle
//!
//! All nodes follow a consistent lifecycle:
//! 1. **Construction** - Node is created and opens its Hubs
//! 2. **Initialization** - `init()` is called once by the scheduler
//! 3. **Execution** - `tick()` is called repeatedly by the scheduler
//! 4. **Shutdown** - `shutdown()` is called once at cleanup

pub mod node;

pub use node::{LogSummary, Node, NodeConfig, NodeInfo, NodeMetrics, NodeState};
