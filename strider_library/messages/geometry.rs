use serde::{Deserialize, Serialize};
use strider_core::LogSummary;

/// 3D vector with double precision components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[repr(C)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

// Enable zero-copy serialization with bytemuck
unsafe impl bytemuck::Pod for Vector3 {}
unsafe impl bytemuck::Zeroable for Vector3 {}

/// Velocity command message for robot control
///
/// Standard payload of a `cmd_vel` channel: `linear.x` is the forward
/// speed in m/s and `angular.z` the rotational speed in rad/s. Planar
/// platforms leave every other component at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[repr(C)]
pub struct Twist {
    pub linear: Vector3,
    pub angular: Vector3,
}

impl Twist {
    pub fn new(linear: Vector3, angular: Vector3) -> Self {
        Self { linear, angular }
    }

    /// Planar drive command: forward speed plus turn rate, other components zero
    pub fn forward(linear_x: f64, angular_z: f64) -> Self {
        Self {
            linear: Vector3::new(linear_x, 0.0, 0.0),
            angular: Vector3::new(0.0, 0.0, angular_z),
        }
    }

    /// Zero velocity command (stop)
    pub fn zero() -> Self {
        Self::default()
    }
}

// Enable zero-copy serialization with bytemuck
unsafe impl bytemuck::Pod for Twist {}
unsafe impl bytemuck::Zeroable for Twist {}

impl LogSummary for Twist {
    fn log_summary(&self) -> String {
        format!(
            "linear.x={:.3}, angular.z={:.3}",
            self.linear.x, self.angular.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_forward_sets_only_planar_components() {
        let cmd = Twist::forward(0.5, 0.1);
        assert_relative_eq!(cmd.linear.x, 0.5);
        assert_relative_eq!(cmd.angular.z, 0.1);
        assert_relative_eq!(cmd.linear.y, 0.0);
        assert_relative_eq!(cmd.linear.z, 0.0);
        assert_relative_eq!(cmd.angular.x, 0.0);
        assert_relative_eq!(cmd.angular.y, 0.0);
    }

    #[test]
    fn test_zero_is_default() {
        let cmd = Twist::zero();
        assert_eq!(cmd, Twist::default());
        assert_relative_eq!(cmd.linear.x, 0.0);
        assert_relative_eq!(cmd.angular.z, 0.0);
    }

    #[test]
    fn test_log_summary_reports_planar_components() {
        let cmd = Twist::forward(0.5, 0.1);
        assert_eq!(cmd.log_summary(), "linear.x=0.500, angular.z=0.100");
    }

    #[test]
    fn test_bytemuck_traits() {
        let cmd = Twist::forward(1.0, 2.0);
        let bytes: &[u8] = bytemuck::bytes_of(&cmd);
        assert_eq!(bytes.len(), 48);
    }
}
