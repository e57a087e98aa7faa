//! # STRIDER Scheduling System
//!
//! A simple cooperative scheduler that orchestrates node execution:
//!
//! - **Scheduler**: owns registered nodes and drives the tick loop
//! - **Simple Priorities**: numeric priorities (0 = highest)
//! - **Per-Node Rates**: individual tick frequencies via `set_node_rate`
//! - **PeriodicTimer**: owned, cancellable periodic deadline for node logic
//!
//! ## Usage
//!
//! ```rust,ignore
//! use strider_core::Scheduler;
//!
//! let mut scheduler = Scheduler::new();
//! scheduler.add(Box::new(sensor_node), 0, Some(true));   // Enable logging
//! scheduler.add(Box::new(control_node), 10, Some(false)); // Disable logging
//! scheduler.run(); // Handles initialization automatically
//! ```

pub mod scheduler;
pub mod timer;

pub use scheduler::Scheduler;
pub use timer::PeriodicTimer;
