//! ParticleSystem - steps a whole swarm of point masses per frame
//!
//! Flowfield and boid-style sketches move hundreds of particles under the
//! same rule. Every particle is independent within a step, so with the
//! `parallel` feature the update fans out over rayon's pool.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::settings::PhysicsSettings;
use crate::math::Vector;
use crate::physics::particle::Particle;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;

pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

pub struct ParticleSystem {
    particles: Vec<Particle>,
    settings: PhysicsSettings,
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl ParticleSystem {
    pub fn new(settings: PhysicsSettings) -> Self {
        Self {
            particles: Vec::new(),
            settings,
            perf_enabled: false,
            perf_stats: PerfStats::default(),
        }
    }

    pub fn settings(&self) -> &PhysicsSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: PhysicsSettings) {
        self.settings = settings;
    }

    pub fn spawn(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Spawn at rest with the configured default mass
    pub fn spawn_at(&mut self, position: Vector) {
        let mass = self.settings.mass;
        self.spawn(Particle::new(position).with_mass(mass));
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Advance every particle by one tick under the force `force_for` returns
    pub fn step<F>(&mut self, force_for: F)
    where
        F: Fn(&Particle) -> Vector + Sync + Send,
    {
        let timer = if self.perf_enabled { Some(PerfTimer::start()) } else { None };

        let dt = self.settings.delta_time;
        let max_velocity = self.settings.max_velocity;

        #[cfg(feature = "parallel")]
        {
            self.particles
                .par_iter_mut()
                .for_each(|p| *p = p.apply_force(force_for(p), dt, max_velocity));
        }

        #[cfg(not(feature = "parallel"))]
        {
            for p in self.particles.iter_mut() {
                *p = p.apply_force(force_for(p), dt, max_velocity);
            }
        }

        if let Some(timer) = timer {
            self.perf_stats.step_ms = timer.elapsed_ms();
            self.perf_stats.particles_processed = self.particles.len() as u32;
            self.perf_stats.steps_total += 1;
        }
    }

    /// `(x, y)` of every particle, in spawn order
    pub fn positions(&self) -> Vec<(f64, f64)> {
        self.particles.iter().map(|p| p.position.to_tuple()).collect()
    }

    /// Interleaved `[x0, y0, x1, y1, ...]` for typed-array hand-off
    pub fn positions_flat(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.particles.len() * 2);
        for p in &self.particles {
            out.push(p.position.x);
            out.push(p.position.y);
        }
        out
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
        if !enabled {
            self.perf_stats.reset();
        }
    }

    pub fn perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new(PhysicsSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(dt: f64, max_velocity: Option<f64>) -> PhysicsSettings {
        PhysicsSettings { delta_time: dt, max_velocity, mass: 1.0 }
    }

    #[test]
    fn step_matches_individual_apply_force() {
        let mut system = ParticleSystem::new(settings(0.5, Some(2.0)));
        let seeds: Vec<Particle> = (0..64)
            .map(|i| {
                let f = i as f64;
                Particle::new(Vector::new(f, -f))
                    .with_velocity(Vector::new(f * 0.1, 1.0))
                    .with_mass(1.0 + f * 0.25)
            })
            .collect();
        for p in &seeds {
            system.spawn(*p);
        }

        let force = |p: &Particle| Vector::new(-p.position.y, p.position.x) * 0.01;
        system.step(force);

        for (after, before) in system.particles().iter().zip(seeds.iter()) {
            assert_eq!(*after, before.apply_force(force(before), 0.5, Some(2.0)));
        }
    }

    #[test]
    fn spawn_at_uses_configured_mass() {
        let mut system = ParticleSystem::new(PhysicsSettings { mass: 4.0, ..settings(1.0, None) });
        system.spawn_at(Vector::new(1.0, 2.0));
        system.step(|_| Vector::new(8.0, 0.0));
        let p = system.particles()[0];
        assert_eq!(p.mass, 4.0);
        assert_eq!(p.velocity, Vector::new(2.0, 0.0));
        assert_eq!(p.position, Vector::new(3.0, 2.0));
    }

    #[test]
    fn positions_flat_is_interleaved() {
        let mut system = ParticleSystem::default();
        system.spawn_at(Vector::new(1.0, 2.0));
        system.spawn_at(Vector::new(3.0, 4.0));
        assert_eq!(system.positions(), vec![(1.0, 2.0), (3.0, 4.0)]);
        assert_eq!(system.positions_flat(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn perf_stats_only_recorded_when_enabled() {
        let mut system = ParticleSystem::default();
        system.spawn_at(Vector::ZERO);
        system.step(|_| Vector::ZERO);
        assert_eq!(system.perf_stats().steps_total(), 0);

        system.enable_perf_metrics(true);
        system.step(|_| Vector::ZERO);
        system.step(|_| Vector::ZERO);
        let stats = system.perf_stats();
        assert_eq!(stats.steps_total(), 2);
        assert_eq!(stats.particles_processed(), 1);
        assert!(stats.step_ms() >= 0.0);

        system.enable_perf_metrics(false);
        assert_eq!(system.perf_stats().steps_total(), 0);
    }

    #[test]
    fn empty_system_steps_cleanly() {
        let mut system = ParticleSystem::default();
        assert!(system.is_empty());
        system.step(|_| Vector::new(1.0, 1.0));
        assert_eq!(system.len(), 0);
    }
}
