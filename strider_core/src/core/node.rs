use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

/// Trait for providing lightweight logging summaries of message types
///
/// Lets message types provide a compact string representation for logging
/// without cloning the payload.
pub trait LogSummary {
    /// Return a compact string representation suitable for logging
    fn log_summary(&self) -> String;
}

/// Node states for monitoring and lifecycle management
#[derive(Debug, Clone, PartialEq)]
pub enum NodeState {
    Uninitialized,
    Initializing,
    Running,
    Stopping,
    Stopped,
    Error(String),
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeState::Uninitialized => write!(f, "Uninitialized"),
            NodeState::Initializing => write!(f, "Initializing"),
            NodeState::Running => write!(f, "Running"),
            NodeState::Stopping => write!(f, "Stopping"),
            NodeState::Stopped => write!(f, "Stopped"),
            NodeState::Error(msg) => write!(f, "Error: {}", msg),
        }
    }
}

/// Configuration parameters for node behavior
#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        NodeConfig {
            enable_logging: true,
            log_level: "INFO".to_string(),
        }
    }
}

/// Performance metrics for node execution
#[derive(Debug, Clone, Default)]
pub struct NodeMetrics {
    pub total_ticks: u64,
    pub last_tick_duration_ms: f64,
    pub messages_sent: u64,
    pub messages_received: u64,
    pub uptime_seconds: f64,
}

/// Runtime context and information for STRIDER nodes
pub struct NodeInfo {
    name: String,
    node_id: String,
    instance_id: String,

    state: NodeState,
    previous_state: NodeState,
    state_change_time: Instant,

    config: NodeConfig,
    metrics: NodeMetrics,

    creation_time: Instant,
    tick_start_time: Option<Instant>,

    published_topics: HashMap<String, u64>,
    subscribed_topics: HashMap<String, u64>,
}

impl NodeInfo {
    pub fn new(node_name: String, logging_enabled: bool) -> Self {
        let now = Instant::now();
        let node_id = format!(
            "{}_{}",
            node_name,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis()
        );

        let config = NodeConfig {
            enable_logging: logging_enabled,
            ..Default::default()
        };

        Self {
            name: node_name,
            node_id,
            instance_id: uuid::Uuid::new_v4().to_string(),
            state: NodeState::Uninitialized,
            previous_state: NodeState::Uninitialized,
            state_change_time: now,
            config,
            metrics: NodeMetrics::default(),
            creation_time: now,
            tick_start_time: None,
            published_topics: HashMap::new(),
            subscribed_topics: HashMap::new(),
        }
    }

    // State management

    pub fn state(&self) -> &NodeState {
        &self.state
    }

    pub fn previous_state(&self) -> &NodeState {
        &self.previous_state
    }

    pub fn set_state(&mut self, new_state: NodeState) {
        if self.state != new_state {
            self.previous_state = self.state.clone();
            self.state = new_state;
            self.state_change_time = Instant::now();
        }
    }

    pub fn transition_to_error(&mut self, error_msg: String) {
        self.log_error(&error_msg);
        self.set_state(NodeState::Error(error_msg));
    }

    // Lifecycle

    pub fn initialize(&mut self) -> crate::error::StriderResult<()> {
        self.set_state(NodeState::Initializing);
        self.set_state(NodeState::Running);
        Ok(())
    }

    pub fn shutdown(&mut self) -> crate::error::StriderResult<()> {
        self.set_state(NodeState::Stopping);
        self.set_state(NodeState::Stopped);
        Ok(())
    }

    // Tick management

    pub fn start_tick(&mut self) {
        self.tick_start_time = Some(Instant::now());
    }

    pub fn record_tick(&mut self) {
        if let Some(start_time) = self.tick_start_time.take() {
            self.metrics.total_ticks += 1;
            self.metrics.last_tick_duration_ms = start_time.elapsed().as_millis() as f64;
            self.metrics.uptime_seconds = self.creation_time.elapsed().as_secs_f64();
        }
    }

    // Logging

    /// Log a publish with a pre-computed summary string.
    /// Used by `Hub::send()` to avoid needing the message after the move.
    pub fn log_pub_summary(&mut self, topic: &str, summary: &str) {
        if self.config.enable_logging {
            let now = chrono::Local::now();
            let tick_us = self.current_tick_us();
            // Cyan timestamp | Green tick time | Yellow node | Bold green PUB arrow | Magenta topic
            println!(
                "\x1b[36m[{}]\x1b[0m \x1b[32m[Tick: {}\u{3bc}s]\x1b[0m \x1b[33m{}\x1b[0m \x1b[1;32m--PUB-->\x1b[0m \x1b[35m'{}'\x1b[0m = {}",
                now.format("%H:%M:%S%.3f"),
                tick_us,
                self.name,
                topic,
                summary
            );
            use std::io::{self, Write};
            let _ = io::stdout().flush();
        }

        *self.published_topics.entry(topic.to_string()).or_insert(0) += 1;
        self.metrics.messages_sent += 1;
    }

    /// Log a receive with a pre-computed summary string.
    /// Used by `Hub::recv()`.
    pub fn log_sub_summary(&mut self, topic: &str, summary: &str) {
        if self.config.enable_logging {
            let now = chrono::Local::now();
            let tick_us = self.current_tick_us();
            // Cyan timestamp | Green tick time | Yellow node | Bold blue SUB arrow | Magenta topic
            println!(
                "\x1b[36m[{}]\x1b[0m \x1b[32m[Tick: {}\u{3bc}s]\x1b[0m \x1b[33m{}\x1b[0m \x1b[1;34m<--SUB--\x1b[0m \x1b[35m'{}'\x1b[0m = {}",
                now.format("%H:%M:%S%.3f"),
                tick_us,
                self.name,
                topic,
                summary
            );
            use std::io::{self, Write};
            let _ = io::stdout().flush();
        }

        *self.subscribed_topics.entry(topic.to_string()).or_insert(0) += 1;
        self.metrics.messages_received += 1;
    }

    pub fn log_info(&self, message: &str) {
        if self.config.enable_logging
            && (self.config.log_level == "INFO" || self.config.log_level == "DEBUG")
        {
            eprintln!(
                "\x1b[34m[INFO]\x1b[0m \x1b[33m[{}]\x1b[0m {}",
                self.name, message
            );
        }
    }

    pub fn log_warning(&self, message: &str) {
        if self.config.enable_logging {
            eprintln!(
                "\x1b[33m[WARN]\x1b[0m \x1b[33m[{}]\x1b[0m {}",
                self.name, message
            );
        }
    }

    pub fn log_error(&self, message: &str) {
        if self.config.enable_logging {
            eprintln!(
                "\x1b[31m[ERROR]\x1b[0m \x1b[33m[{}]\x1b[0m {}",
                self.name, message
            );
        }
    }

    pub fn log_debug(&self, message: &str) {
        if self.config.enable_logging && self.config.log_level == "DEBUG" {
            eprintln!(
                "\x1b[90m[DEBUG]\x1b[0m \x1b[33m[{}]\x1b[0m {}",
                self.name, message
            );
        }
    }

    fn current_tick_us(&self) -> u64 {
        self.tick_start_time
            .map(|start| start.elapsed().as_micros() as u64)
            .unwrap_or(0)
    }

    // Getters

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn node_id(&self) -> &str {
        &self.node_id
    }
    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }
    pub fn config(&self) -> &NodeConfig {
        &self.config
    }
    pub fn metrics(&self) -> &NodeMetrics {
        &self.metrics
    }
    pub fn published_topics(&self) -> &HashMap<String, u64> {
        &self.published_topics
    }
    pub fn subscribed_topics(&self) -> &HashMap<String, u64> {
        &self.subscribed_topics
    }
    pub fn uptime(&self) -> Duration {
        self.creation_time.elapsed()
    }
    pub fn time_in_current_state(&self) -> Duration {
        self.state_change_time.elapsed()
    }

    pub fn set_config(&mut self, config: NodeConfig) {
        self.config = config;
    }
}

/// Trait for STRIDER nodes with full lifecycle support
pub trait Node: Send {
    /// Get the node's name (must be unique)
    fn name(&self) -> &'static str;

    /// Initialize the node (called once at startup)
    fn init(&mut self, ctx: &mut NodeInfo) -> crate::error::StriderResult<()> {
        ctx.log_info("Node initialized successfully");
        Ok(())
    }

    /// Main execution loop (called repeatedly)
    fn tick(&mut self, ctx: Option<&mut NodeInfo>);

    /// Shutdown the node (called once at cleanup)
    fn shutdown(&mut self, ctx: &mut NodeInfo) -> crate::error::StriderResult<()> {
        ctx.log_info("Node shutdown successfully");
        Ok(())
    }
}

// LogSummary implementations for primitive types
impl LogSummary for f32 {
    fn log_summary(&self) -> String {
        format!("{:.3}", self)
    }
}

impl LogSummary for f64 {
    fn log_summary(&self) -> String {
        format!("{:.3}", self)
    }
}

impl LogSummary for i32 {
    fn log_summary(&self) -> String {
        self.to_string()
    }
}

impl LogSummary for i64 {
    fn log_summary(&self) -> String {
        self.to_string()
    }
}

impl LogSummary for u32 {
    fn log_summary(&self) -> String {
        self.to_string()
    }
}

impl LogSummary for u64 {
    fn log_summary(&self) -> String {
        self.to_string()
    }
}

impl LogSummary for usize {
    fn log_summary(&self) -> String {
        self.to_string()
    }
}

impl LogSummary for bool {
    fn log_summary(&self) -> String {
        self.to_string()
    }
}

impl LogSummary for String {
    fn log_summary(&self) -> String {
        self.clone()
    }
}
