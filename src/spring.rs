//! Damped harmonic oscillator used for every animated transition on the
//! page: the pill indicator slides on one, carousel cards ease their
//! emphasis on another.

/// Physical parameters of a spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

const MAX_SUBSTEP: f64 = 1.0 / 240.0;
const MAX_FRAME: f64 = 1.0 / 30.0;
const REST_DELTA: f64 = 0.01;
const REST_SPEED: f64 = 0.01;

#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
    primed: bool,
}

impl Spring {
    /// A spring with no position yet. The first target it receives is
    /// taken as-is instead of animating from zero.
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
            primed: false,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_primed(&self) -> bool {
        self.primed
    }

    pub fn set_target(&mut self, target: f64) {
        if !self.primed {
            self.snap(target);
            return;
        }
        self.target = target;
    }

    fn snap(&mut self, value: f64) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
        self.primed = true;
    }

    pub fn is_settled(&self) -> bool {
        (self.position - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    /// Advance the simulation by `dt` seconds and return the new position.
    ///
    /// Long frames (tab in background, debugger pause) are capped so the
    /// spring never jumps past its target in a single step.
    pub fn step(&mut self, dt: f64) -> f64 {
        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
            return self.position;
        }

        let mut remaining = dt.clamp(0.0, MAX_FRAME);
        let SpringConfig { stiffness, damping, mass } = self.config;
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let force = -stiffness * (self.position - self.target) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
        }
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CARD_SPRING, INDICATOR_SPRING};

    fn run_until_settled(spring: &mut Spring) -> usize {
        let mut frames = 0;
        while !spring.is_settled() && frames < 10_000 {
            spring.step(1.0 / 60.0);
            frames += 1;
        }
        frames
    }

    #[test]
    fn first_target_snaps() {
        let mut spring = Spring::new(INDICATOR_SPRING);
        spring.set_target(140.0);
        assert_eq!(spring.position(), 140.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn converges_to_new_target() {
        let mut spring = Spring::new(INDICATOR_SPRING);
        spring.set_target(0.0);
        spring.set_target(200.0);

        let first = spring.step(1.0 / 60.0);
        assert!(first > 0.0 && first < 200.0, "moves gradually, got {first}");

        let frames = run_until_settled(&mut spring);
        assert!(frames < 120, "took {frames} frames");
        assert_eq!(spring.position(), 200.0);
    }

    #[test]
    fn retargeting_mid_flight_keeps_motion_continuous() {
        let mut spring = Spring::new(INDICATOR_SPRING);
        spring.set_target(0.0);
        spring.set_target(300.0);
        for _ in 0..5 {
            spring.step(1.0 / 60.0);
        }
        let before = spring.position();
        spring.set_target(50.0);
        let after = spring.step(1.0 / 60.0);
        assert!((after - before).abs() < 60.0, "jumped from {before} to {after}");
    }

    #[test]
    fn long_frames_are_capped() {
        let mut spring = Spring::new(CARD_SPRING);
        spring.set_target(0.0);
        spring.set_target(1.0);
        let position = spring.step(5.0);
        assert!(position < 1.0);
    }
}
