//! Damped spring used to animate the selector between items.
//!
//! The model is a plain mass-spring-damper integrated with semi-implicit
//! Euler steps, one step per animation frame. With a damping ratio of 1 the
//! spring is critically damped and reaches its target without overshoot.

use std::time::Duration;

/// Animation frames per second.
pub const FPS: u32 = 60;

/// Nominal length of an animated selector transition.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

/// Damping ratio of the selector spring. 1.0 is critical damping.
pub const DEFAULT_DAMPING_RATIO: f64 = 1.0;

// Below this distance (cells) and speed (cells per second) the spring rests.
const REST_DISTANCE: f64 = 0.25;
const REST_SPEED: f64 = 5.0;

/// Returns the stiffness that makes a critically damped spring settle in
/// roughly `duration`.
///
/// A critically damped spring with angular frequency `w` is within a few
/// percent of its target after `6 / w` seconds.
pub fn stiffness_for(duration: Duration) -> f64 {
    let secs = duration.as_secs_f64();
    if secs <= 0.0 {
        return 0.0;
    }
    let omega = 6.0 / secs;
    omega * omega
}

/// Duration of one animation frame.
pub fn frame_duration() -> Duration {
    Duration::from_nanos(1_000_000_000 / FPS as u64)
}

/// A one-dimensional spring tracking a target value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    /// A spring at rest at `value`.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
        }
    }

    /// Jumps to `value` and stops all motion.
    pub fn snap_to(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Moves the rest point without changing the current value.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Advances the spring by `dt` seconds.
    ///
    /// A stiffness of zero means "no animation" and snaps to the target.
    pub fn step(&mut self, dt: f64, stiffness: f64, damping_ratio: f64) {
        let dt = dt.clamp(0.0, 0.05);
        if stiffness <= 0.0 {
            self.snap_to(self.target);
            return;
        }

        let damping = 2.0 * damping_ratio.max(0.0) * stiffness.sqrt();
        let displacement = self.value - self.target;
        let acceleration = -stiffness * displacement - damping * self.velocity;

        self.velocity += acceleration * dt;
        self.value += self.velocity * dt;

        if !self.is_animating() {
            self.snap_to(self.target);
        }
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value the spring is heading to.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Whether the spring is still away from its rest point.
    pub fn is_animating(&self) -> bool {
        (self.value - self.target).abs() >= REST_DISTANCE || self.velocity.abs() >= REST_SPEED
    }

    /// Current value rounded to the nearest cell, never negative.
    pub fn cells(&self) -> usize {
        self.value.round().max(0.0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, frames: u32) {
        let dt = 1.0 / FPS as f64;
        let k = stiffness_for(DEFAULT_DURATION);
        for _ in 0..frames {
            spring.step(dt, k, DEFAULT_DAMPING_RATIO);
        }
    }

    #[test]
    fn test_new_spring_is_at_rest() {
        let s = Spring::new(4.0);
        assert!(!s.is_animating());
        assert_eq!(s.cells(), 4);
    }

    #[test]
    fn test_set_target_starts_animation() {
        let mut s = Spring::new(0.0);
        s.set_target(20.0);
        assert!(s.is_animating());
        assert_eq!(s.value(), 0.0);
        assert_eq!(s.target(), 20.0);
    }

    #[test]
    fn test_settles_within_nominal_duration() {
        let mut s = Spring::new(0.0);
        s.set_target(40.0);
        // Well past the nominal 0.3s; the tail below a quarter cell is snapped.
        run(&mut s, 40);
        assert!(!s.is_animating());
        assert_eq!(s.value(), 40.0);
    }

    #[test]
    fn test_critical_damping_does_not_overshoot() {
        let mut s = Spring::new(0.0);
        s.set_target(30.0);
        let dt = 1.0 / FPS as f64;
        let k = stiffness_for(DEFAULT_DURATION);
        for _ in 0..60 {
            s.step(dt, k, DEFAULT_DAMPING_RATIO);
            assert!(s.value() <= 30.0 + REST_DISTANCE);
        }
    }

    #[test]
    fn test_zero_stiffness_snaps() {
        let mut s = Spring::new(0.0);
        s.set_target(12.0);
        s.step(1.0 / FPS as f64, 0.0, DEFAULT_DAMPING_RATIO);
        assert_eq!(s.value(), 12.0);
        assert!(!s.is_animating());
    }

    #[test]
    fn test_stiffness_for_zero_duration() {
        assert_eq!(stiffness_for(Duration::ZERO), 0.0);
        assert!(stiffness_for(DEFAULT_DURATION) > 0.0);
    }

    #[test]
    fn test_cells_never_negative() {
        let s = Spring::new(-3.2);
        assert_eq!(s.cells(), 0);
    }
}
