//! Velocity Broadcaster - constant cruise command publisher
//!
//! Publishes a fixed (0.5, 0.1) velocity command on /cmd_vel every 200ms.
//! Send `true` on /kill to stop it (one zero command is emitted), `true`
//! on /resume to restart it.
//!
//! Usage:
//!   cargo run -p velocity_broadcaster

use strider::library::nodes::VelocityBroadcasterNode;
use strider::prelude::*;

fn main() -> AnyResult<()> {
    println!("=== STRIDER Velocity Broadcaster ===");
    println!("Topics:");
    println!("  /cmd_vel - cruise command, every 200ms while running");
    println!("  /kill    - send true to stop the broadcast");
    println!("  /resume  - send true to restart it");
    println!("====================================\n");

    let mut scheduler = Scheduler::new().name("VelocityBroadcasterScheduler");

    let node =
        VelocityBroadcasterNode::new().context("failed to create velocity broadcaster node")?;
    scheduler.add(Box::new(node), 0, Some(true));

    println!("Starting scheduler... (Press Ctrl+C to stop)\n");
    let _ = scheduler.run();

    println!("\nVelocity broadcaster shutdown complete.");
    Ok(())
}
