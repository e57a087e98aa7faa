use crate::core::{Node, NodeInfo};
use crate::error::{StriderError, StriderResult};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Node registration info with lifecycle tracking and per-node rate control
struct RegisteredNode {
    node: Box<dyn Node>,
    priority: u32,
    initialized: bool,
    context: Option<NodeInfo>,
    rate_hz: Option<f64>, // Per-node rate control (None = use global scheduler rate)
    last_tick: Option<Instant>,
}

/// Central orchestrator: holds nodes, drives the tick loop.
pub struct Scheduler {
    nodes: Vec<RegisteredNode>,
    running: Arc<Mutex<bool>>,
    scheduler_name: String,
    tick_period: Duration,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            running: Arc::new(Mutex::new(true)),
            scheduler_name: "DefaultScheduler".to_string(),
            tick_period: Duration::from_millis(16), // ~60 Hz
        }
    }

    /// Set the scheduler name (chainable)
    pub fn name(mut self, name: &str) -> Self {
        self.scheduler_name = name.to_string();
        self
    }

    /// Set the global tick rate (chainable)
    pub fn with_rate_hz(mut self, rate_hz: f64) -> Self {
        if rate_hz > 0.0 {
            self.tick_period = Duration::from_secs_f64(1.0 / rate_hz);
        }
        self
    }

    /// Add a node with given priority (lower number = higher priority).
    /// If `logging_enabled` is `None`, logging defaults to false.
    pub fn add(
        &mut self,
        node: Box<dyn Node>,
        priority: u32,
        logging_enabled: Option<bool>,
    ) -> &mut Self {
        let node_name = node.name().to_string();
        let logging_enabled = logging_enabled.unwrap_or(false);
        let context = NodeInfo::new(node_name.clone(), logging_enabled);

        self.nodes.push(RegisteredNode {
            node,
            priority,
            initialized: false,
            context: Some(context),
            rate_hz: None,
            last_tick: None,
        });

        println!(
            "Added node '{}' with priority {} (logging: {})",
            node_name, priority, logging_enabled
        );

        self
    }

    /// Set per-node rate control (chainable)
    ///
    /// Lets individual nodes run at a frequency independent of the global
    /// scheduler rate. Nodes without a rate tick at the global frequency.
    pub fn set_node_rate(&mut self, name: &str, rate_hz: f64) -> &mut Self {
        for registered in self.nodes.iter_mut() {
            if registered.node.name() == name {
                registered.rate_hz = Some(rate_hz);
                registered.last_tick = Some(Instant::now());
                println!("Set node '{}' rate to {:.1} Hz", name, rate_hz);
                break;
            }
        }
        self
    }

    /// Check if the scheduler is running
    pub fn is_running(&self) -> bool {
        if let Ok(running) = self.running.lock() {
            *running
        } else {
            false
        }
    }

    /// Stop the scheduler
    pub fn stop(&self) {
        if let Ok(mut running) = self.running.lock() {
            *running = false;
        }
    }

    /// Main loop with automatic signal handling and cleanup
    pub fn run(&mut self) -> StriderResult<()> {
        self.run_with_filter(None, None)
    }

    /// Run all nodes for a specified duration, then shutdown gracefully
    pub fn run_for(&mut self, duration: Duration) -> StriderResult<()> {
        self.run_with_filter(None, Some(duration))
    }

    /// Tick specific nodes by name (runs continuously with the specified nodes)
    pub fn tick(&mut self, node_names: &[&str]) -> StriderResult<()> {
        self.run_with_filter(Some(node_names), None)
    }

    /// Run specific nodes for a specified duration, then shutdown gracefully
    pub fn tick_for(&mut self, node_names: &[&str], duration: Duration) -> StriderResult<()> {
        self.run_with_filter(Some(node_names), Some(duration))
    }

    /// Internal method to run the scheduler with optional node filtering and duration
    fn run_with_filter(
        &mut self,
        node_filter: Option<&[&str]>,
        duration: Option<Duration>,
    ) -> StriderResult<()> {
        let rt = tokio::runtime::Runtime::new().map_err(|e| {
            StriderError::Internal(format!("Failed to create tokio runtime: {}", e))
        })?;

        rt.block_on(async {
            let start_time = Instant::now();

            // Set up signal handling
            let running = self.running.clone();
            if let Err(e) = ctrlc::set_handler(move || {
                eprintln!(
                    "{}",
                    "\nCtrl+C received! Shutting down STRIDER scheduler...".red()
                );
                if let Ok(mut r) = running.lock() {
                    *r = false;
                }
            }) {
                eprintln!("Warning: Failed to set signal handler: {}", e);
            }

            // Tick in priority order (0 = highest)
            self.nodes.sort_by_key(|registered| registered.priority);

            // Initialize nodes
            for registered in self.nodes.iter_mut() {
                let node_name = registered.node.name();
                let should_run = node_filter.is_none_or(|filter| filter.contains(&node_name));

                if should_run && !registered.initialized {
                    if let Some(ref mut ctx) = registered.context {
                        match registered.node.init(ctx) {
                            Ok(()) => {
                                let _ = ctx.initialize();
                                registered.initialized = true;
                                println!("Initialized node '{}'", node_name);
                            }
                            Err(e) => {
                                println!("Failed to initialize node '{}': {}", node_name, e);
                                ctx.transition_to_error(format!("Initialization failed: {}", e));
                            }
                        }
                    }
                }
            }

            self.write_registry();

            // Main tick loop
            while self.is_running() {
                if let Some(max_duration) = duration {
                    if start_time.elapsed() >= max_duration {
                        println!("Scheduler reached time limit of {:?}", max_duration);
                        break;
                    }
                }

                for registered in self.nodes.iter_mut() {
                    let node_name = registered.node.name();
                    let should_run =
                        node_filter.is_none_or(|filter| filter.contains(&node_name));
                    if !should_run || !registered.initialized {
                        continue;
                    }

                    // Per-node rate gating
                    if let Some(rate_hz) = registered.rate_hz {
                        let interval = Duration::from_secs_f64(1.0 / rate_hz);
                        if let Some(last) = registered.last_tick {
                            if last.elapsed() < interval {
                                continue;
                            }
                        }
                        registered.last_tick = Some(Instant::now());
                    }

                    if let Some(ctx) = registered.context.as_mut() {
                        ctx.start_tick();
                    }
                    registered.node.tick(registered.context.as_mut());
                    if let Some(ctx) = registered.context.as_mut() {
                        ctx.record_tick();
                    }
                }

                tokio::time::sleep(self.tick_period).await;
            }

            // Shutdown nodes
            for registered in self.nodes.iter_mut() {
                let node_name = registered.node.name();
                let should_run = node_filter.is_none_or(|filter| filter.contains(&node_name));

                if should_run && registered.initialized {
                    if let Some(ref mut ctx) = registered.context {
                        let _ = ctx.shutdown();
                        match registered.node.shutdown(ctx) {
                            Ok(()) => println!("Shutdown node '{}' successfully", node_name),
                            Err(e) => println!("Error shutting down node '{}': {}", node_name, e),
                        }
                    }
                }
            }

            self.cleanup_registry();
            println!("Scheduler shutdown complete");
        });

        Ok(())
    }

    /// Get the names of all registered nodes
    pub fn get_node_list(&self) -> Vec<String> {
        self.nodes
            .iter()
            .map(|registered| registered.node.name().to_string())
            .collect()
    }

    // Best-effort registry snapshot for external monitoring. Never allowed
    // to take down the control loop.

    fn registry_path(&self) -> PathBuf {
        PathBuf::from("/dev/shm/strider").join(format!("{}.json", std::process::id()))
    }

    fn write_registry(&self) {
        let dir = PathBuf::from("/dev/shm/strider");
        if std::fs::create_dir_all(&dir).is_err() {
            return;
        }

        let nodes: Vec<serde_json::Value> = self
            .nodes
            .iter()
            .map(|registered| {
                serde_json::json!({
                    "name": registered.node.name(),
                    "priority": registered.priority,
                    "state": registered
                        .context
                        .as_ref()
                        .map(|ctx| ctx.state().to_string())
                        .unwrap_or_default(),
                    "instance_id": registered
                        .context
                        .as_ref()
                        .map(|ctx| ctx.instance_id().to_string())
                        .unwrap_or_default(),
                })
            })
            .collect();

        let registry = serde_json::json!({
            "scheduler": self.scheduler_name,
            "pid": std::process::id(),
            "nodes": nodes,
        });

        let _ = std::fs::write(self.registry_path(), registry.to_string());
    }

    fn cleanup_registry(&self) {
        let _ = std::fs::remove_file(self.registry_path());
    }
}
