//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position in view space (pixels). x grows rightward, y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in view space (pixels/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// The fixed viewport the simulation plays in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current frame number (increments by 1 each simulated frame).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another position in pixels.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Angle toward another position in radians (0 = rightward, clockwise
    /// with y-down screen coordinates).
    pub fn angle_to(&self, other: &Position) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Velocity of the given magnitude along an angle.
    pub fn from_angle(angle: f64, speed: f64) -> Self {
        Self {
            x: angle.cos() * speed,
            y: angle.sin() * speed,
        }
    }

    /// Speed magnitude (pixels/s).
    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Viewport {
    /// The point raiders converge on: the middle of the keep's gate.
    pub fn gate_center(&self) -> Position {
        Position::new(
            self.width / 2.0,
            crate::constants::KEEP_Y + crate::constants::KEEP_HEIGHT / 2.0,
        )
    }
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
