use serde::{Deserialize, Serialize};

use crate::math::Vector;

/// Point mass - a plain value, replaced (never mutated) every tick
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vector,
    pub velocity: Vector,
    /// Must be non-zero; it divides the applied force
    pub mass: f64,
}

impl Particle {
    /// Particle at rest with unit mass
    pub fn new(position: Vector) -> Self {
        Self {
            position,
            velocity: Vector::ZERO,
            mass: 1.0,
        }
    }

    pub fn with_velocity(self, velocity: Vector) -> Self {
        Self { velocity, ..self }
    }

    pub fn with_mass(self, mass: f64) -> Self {
        Self { mass, ..self }
    }

    /// Advance one step under `force` using semi-implicit Euler:
    /// velocity is updated first (and optionally clamped), then position
    /// moves by the *new* velocity.
    pub fn apply_force(&self, force: Vector, delta_time: f64, max_velocity: Option<f64>) -> Particle {
        let acceleration = force / self.mass;
        let mut velocity = self.velocity + acceleration * delta_time;
        if let Some(max) = max_velocity {
            velocity = velocity.limit(max);
        }
        let position = self.position + velocity * delta_time;

        Particle {
            position,
            velocity,
            mass: self.mass,
        }
    }
}

impl Default for Particle {
    fn default() -> Self {
        Self::new(Vector::ZERO)
    }
}

/// Free-function form of [`Particle::apply_force`] with a unit timestep
pub fn apply_force(particle: &Particle, force: Vector) -> Particle {
    particle.apply_force(force, 1.0, None)
}
