//! # STRIDER - Small Topic-Routed In-process Dispatch Engine for Robots
//!
//! STRIDER provides a compact framework for building robot control loops in
//! Rust: typed pub/sub topics, a cooperative scheduler, and a standard
//! library of messages and nodes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use strider::prelude::*;
//!
//! pub struct MyNode {
//!     publisher: Hub<Twist>,
//! }
//!
//! impl Node for MyNode {
//!     fn name(&self) -> &'static str { "MyNode" }
//!
//!     fn tick(&mut self, _ctx: Option<&mut NodeInfo>) {
//!         // Node logic here
//!     }
//! }
//! ```

// Re-export core components
pub use strider_core::{self, *};

// Re-export standard library with alias
pub use strider_library as library;

/// The STRIDER prelude - everything you need to get started
pub mod prelude {
    // Core node types
    pub use strider_core::core::{Node, NodeConfig, NodeInfo, NodeState};

    // Communication types
    pub use strider_core::communication::Hub;

    // Scheduling
    pub use strider_core::scheduling::{PeriodicTimer, Scheduler};

    // Error types
    pub use strider_core::error::{StriderError, StriderResult};
    pub type Result<T> = StriderResult<T>;

    // Common std types
    pub use std::sync::{Arc, Mutex};
    pub use std::time::{Duration, Instant};

    // Common traits
    pub use serde::{Deserialize, Serialize};

    // Re-export anyhow for error handling
    pub use anyhow::{anyhow, bail, ensure, Context, Result as AnyResult};

    // Re-export all message types for convenience
    pub use strider_library::messages::*;
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get STRIDER version
pub fn version() -> &'static str {
    VERSION
}
