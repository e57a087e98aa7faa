//! Velocity Broadcaster Node - Constant cruise command publisher
//!
//! Publishes a fixed velocity command on a periodic timer and reacts to two
//! boolean control channels: a kill signal stops the broadcast and sends a
//! single zero command, a resume signal restarts it.

use crate::messages::Twist;
use std::time::Duration;
use strider_core::{Hub, Node, NodeInfo, PeriodicTimer, StriderResult};

/// Broadcasts a constant cruise command while running.
///
/// The broadcast state is carried by the timer handle: `Some` while
/// running, `None` while stopped. Cancellation is idempotent - a kill
/// signal received while already stopped does nothing, so at most one
/// zero command is sent per stop.
pub struct VelocityBroadcasterNode {
    cmd_vel_pub: Hub<Twist>,
    kill_sub: Hub<bool>,
    resume_sub: Hub<bool>,
    timer: Option<PeriodicTimer>,
    period: Duration,
}

impl VelocityBroadcasterNode {
    /// Forward speed of the cruise command, m/s
    pub const CRUISE_LINEAR: f64 = 0.5;
    /// Rotational speed of the cruise command, rad/s
    pub const CRUISE_ANGULAR: f64 = 0.1;
    /// Interval between cruise commands
    pub const PUBLISH_PERIOD: Duration = Duration::from_millis(200);

    const CHANNEL_DEPTH: usize = 10;

    /// Create a broadcaster on the standard topics
    pub fn new() -> StriderResult<Self> {
        Self::new_with_topics("/cmd_vel", "/kill", "/resume")
    }

    /// Create with custom topic names
    pub fn new_with_topics(
        cmd_vel_topic: &str,
        kill_topic: &str,
        resume_topic: &str,
    ) -> StriderResult<Self> {
        Ok(Self {
            cmd_vel_pub: Hub::new_with_capacity(cmd_vel_topic, Self::CHANNEL_DEPTH)?,
            kill_sub: Hub::new_with_capacity(kill_topic, Self::CHANNEL_DEPTH)?,
            resume_sub: Hub::new_with_capacity(resume_topic, Self::CHANNEL_DEPTH)?,
            timer: Some(PeriodicTimer::new(Self::PUBLISH_PERIOD)),
            period: Self::PUBLISH_PERIOD,
        })
    }

    /// Change the publish interval. An active timer is re-armed with the
    /// new period; a stopped broadcaster picks it up on resume.
    pub fn set_period(&mut self, period: Duration) {
        self.period = period;
        if self.timer.is_some() {
            self.timer = Some(PeriodicTimer::new(period));
        }
    }

    /// Whether the periodic broadcast is currently active
    pub fn is_broadcasting(&self) -> bool {
        self.timer.is_some()
    }

    fn handle_kill(&mut self, mut ctx: Option<&mut NodeInfo>) {
        // Idempotent: only an active timer transitions to stopped.
        if self.timer.take().is_none() {
            return;
        }

        if let Some(ctx) = ctx.as_deref_mut() {
            ctx.log_info("Kill signal received, stopping the broadcast");
        }

        let _ = self.cmd_vel_pub.send(Twist::zero(), ctx.as_deref_mut());

        if let Some(ctx) = ctx.as_deref_mut() {
            ctx.log_info(&format!(
                "Published zero velocity to '{}'",
                self.cmd_vel_pub.topic_name()
            ));
        }
    }

    fn handle_resume(&mut self, mut ctx: Option<&mut NodeInfo>) {
        if self.timer.is_some() {
            if let Some(ctx) = ctx.as_deref_mut() {
                ctx.log_info("Resume signal received but broadcast is already running, ignoring");
            }
            return;
        }

        self.timer = Some(PeriodicTimer::new(self.period));
        if let Some(ctx) = ctx.as_deref_mut() {
            ctx.log_info("Resume signal received, restarting the broadcast");
        }
    }
}

impl Node for VelocityBroadcasterNode {
    fn name(&self) -> &'static str {
        "VelocityBroadcasterNode"
    }

    fn init(&mut self, ctx: &mut NodeInfo) -> StriderResult<()> {
        ctx.log_info(&format!(
            "Broadcasting ({:.1}, {:.1}) on '{}' every {}ms",
            Self::CRUISE_LINEAR,
            Self::CRUISE_ANGULAR,
            self.cmd_vel_pub.topic_name(),
            self.period.as_millis()
        ));
        ctx.log_info(&format!(
            "Listening on '{}' and '{}'",
            self.kill_sub.topic_name(),
            self.resume_sub.topic_name()
        ));
        Ok(())
    }

    fn tick(&mut self, mut ctx: Option<&mut NodeInfo>) {
        // Control signals first, publish phase last. False payloads are
        // silently ignored on both channels.
        while let Some(stop) = self.kill_sub.recv(ctx.as_deref_mut()) {
            if stop {
                self.handle_kill(ctx.as_deref_mut());
            }
        }

        while let Some(go) = self.resume_sub.recv(ctx.as_deref_mut()) {
            if go {
                self.handle_resume(ctx.as_deref_mut());
            }
        }

        if let Some(timer) = self.timer.as_mut() {
            if timer.poll() {
                let cmd = Twist::forward(Self::CRUISE_LINEAR, Self::CRUISE_ANGULAR);
                let _ = self.cmd_vel_pub.send(cmd, ctx.as_deref_mut());
            }
        }
    }

    fn shutdown(&mut self, ctx: &mut NodeInfo) -> StriderResult<()> {
        ctx.log_info("Velocity broadcaster shutting down");
        Ok(())
    }
}
