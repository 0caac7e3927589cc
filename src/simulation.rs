use num_traits::AsPrimitive;

use crate::error::Result;
use crate::params::Params;
use crate::particle::Particle;

/// Owns the particle set and drives the solver one frame at a time.
pub struct Simulation<Real> {
    pub particles: Vec<Particle<Real>>,
    pub params: Params<Real>,
    rng: rand::rngs::StdRng,
    num_steps: usize,
}

impl<Real> Simulation<Real>
    where Real: nalgebra::RealField + Copy,
          f64: AsPrimitive<Real>,
          rand::distributions::Standard: rand::prelude::Distribution<Real>
{
    /// Empty simulation. `seed` drives the wall jitter and [`Self::add_random`].
    pub fn new(params: Params<Real>, seed: u64) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            particles: vec!(),
            params,
            rng: rand::SeedableRng::seed_from_u64(seed),
            num_steps: 0,
        })
    }

    pub fn add_random(&mut self, num_particles: usize) {
        crate::particle::add_random(&mut self.particles, num_particles, &mut self.rng);
    }

    pub fn step(&mut self) -> Result<()> {
        crate::solver::step(&mut self.particles, &self.params, &mut self.rng)?;
        self.num_steps += 1;
        Ok(())
    }

    pub fn run(&mut self, num_steps: usize) -> Result<()> {
        log::debug!("running {} steps on {} particles", num_steps, self.particles.len());
        for _ in 0..num_steps {
            self.step()?;
        }
        log::debug!("{} steps done", self.num_steps);
        Ok(())
    }

    /// Number of committed steps
    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    pub fn positions(&self) -> Vec<nalgebra::Vector2::<Real>> {
        self.particles.iter().map(|p| p.x).collect()
    }
}
