//! Position Based Fluids (Macklin & Müller 2013), one Jacobi sweep per sub-phase.
//!
//! Every phase visits all particles before the next phase starts and only
//! writes to the particle it visits, so a phase reads the state the previous
//! phase left behind.

use num_traits::AsPrimitive;

use crate::error::{Error, Result};
use crate::kernel::{poly6, spiky_gradient};
use crate::params::{BoundaryTest, Params};
use crate::particle::Particle;

/// Integrate gravity and predict positions
pub fn predict<Real>(
    particles: &mut [Particle<Real>],
    gravity: &nalgebra::Vector2::<Real>,
    dt: Real)
    where Real: nalgebra::RealField + Copy
{
    for p in particles.iter_mut() {
        p.v += gravity.scale(dt);
        p.x_new = p.x + p.v.scale(dt);
    }
}

/// Brute-force O(n^2) neighbor search on the predicted positions
pub fn find_neighbors<Real>(
    particles: &mut [Particle<Real>],
    h: Real)
    where Real: nalgebra::RealField + Copy
{
    for ip in 0..particles.len() {
        let xi = particles[ip].x_new;
        let neighbors: Vec<usize> = particles.iter().enumerate()
            .filter(|(_, q)| {
                let d = (xi - q.x_new).norm();
                d > Real::zero() && d < h
            })
            .map(|(jp, _)| jp)
            .collect();
        particles[ip].neighbors = neighbors;
    }
}

pub fn compute_densities<Real>(
    particles: &mut [Particle<Real>],
    h: Real)
    where Real: nalgebra::RealField + Copy,
          f64: AsPrimitive<Real>
{
    for ip in 0..particles.len() {
        let p = &particles[ip];
        let mut rho = Real::zero();
        for &jp in p.neighbors.iter() {
            rho += poly6(&p.x_new, &particles[jp].x_new, h);
        }
        particles[ip].density = rho;
    }
}

pub fn compute_lambdas<Real>(
    particles: &mut [Particle<Real>],
    params: &Params<Real>)
    where Real: nalgebra::RealField + Copy,
          f64: AsPrimitive<Real>
{
    let h = params.kernel_radius;
    let rest_density = params.rest_density;
    for ip in 0..particles.len() {
        let p = &particles[ip];
        let constraint = p.density / rest_density - Real::one();
        let mut grad_sum_sq = Real::zero();
        let mut grad_i = nalgebra::Vector2::<Real>::zeros();
        for &jp in p.neighbors.iter() {
            let grad = spiky_gradient(&p.x_new, &particles[jp].x_new, h).unscale(rest_density);
            grad_sum_sq += grad.norm_squared();
            grad_i += grad;
        }
        // gradient with respect to the particle itself
        grad_sum_sq += grad_i.norm_squared();
        particles[ip].lambda = -constraint / (grad_sum_sq + params.epsilon);
    }
}

pub fn compute_position_deltas<Real>(
    particles: &mut [Particle<Real>],
    params: &Params<Real>)
    where Real: nalgebra::RealField + Copy,
          f64: AsPrimitive<Real>
{
    let h = params.kernel_radius;
    for ip in 0..particles.len() {
        let p = &particles[ip];
        let mut delta = nalgebra::Vector2::<Real>::zeros();
        for &jp in p.neighbors.iter() {
            let q = &particles[jp];
            delta += spiky_gradient(&p.x_new, &q.x_new, h).scale(p.lambda + q.lambda);
        }
        particles[ip].dx = delta.unscale(params.rest_density);
    }
}

pub fn apply_position_deltas<Real>(particles: &mut [Particle<Real>])
    where Real: nalgebra::RealField + Copy
{
    for p in particles.iter_mut() {
        p.x_new += p.dx;
    }
}

/// Push particles that left the unit square back to just inside the wall.
///
/// The reset coordinate is `jitter * rand` away from the wall so that
/// particles reset in the same step do not stack on top of each other.
pub fn constrain_to_domain<Real, R>(
    particles: &mut [Particle<Real>],
    jitter: Real,
    test: BoundaryTest,
    rng: &mut R)
    where Real: nalgebra::RealField + Copy,
          R: rand::Rng,
          rand::distributions::Standard: rand::prelude::Distribution<Real>
{
    let one = Real::one();
    for p in particles.iter_mut() {
        let x = match test {
            BoundaryTest::Committed => p.x,
            BoundaryTest::Predicted => p.x_new,
        };
        if x.x > one {
            p.x_new.x = one - jitter * rng.gen::<Real>();
        }
        if x.x < Real::zero() {
            p.x_new.x = jitter * rng.gen::<Real>();
        }
        if x.y < Real::zero() {
            p.x_new.y = jitter * rng.gen::<Real>();
        }
        if x.y > one {
            p.x_new.y = one - jitter * rng.gen::<Real>();
        }
    }
}

pub fn commit<Real>(particles: &mut [Particle<Real>])
    where Real: nalgebra::RealField + Copy
{
    for p in particles.iter_mut() {
        p.x = p.x_new;
    }
}

/// Advance all particles by one time step.
///
/// Invalid `params` are rejected before any particle is touched. On
/// `Error::NonFinite` the step has already been committed: `x` holds the
/// corrected positions, including the non-finite one.
pub fn step<Real, R>(
    particles: &mut [Particle<Real>],
    params: &Params<Real>,
    rng: &mut R) -> Result<()>
    where Real: nalgebra::RealField + Copy,
          f64: AsPrimitive<Real>,
          R: rand::Rng,
          rand::distributions::Standard: rand::prelude::Distribution<Real>
{
    params.validate()?;
    predict(particles, &params.gravity, params.dt);
    find_neighbors(particles, params.kernel_radius);
    for _iter in 0..params.solver_iterations {
        compute_densities(particles, params.kernel_radius);
        compute_lambdas(particles, params);
        compute_position_deltas(particles, params);
        apply_position_deltas(particles);
        constrain_to_domain(particles, params.boundary_jitter, params.boundary_test, rng);
    }
    commit(particles);
    if let Some(ip) = particles.iter().position(|p| !p.x.x.is_finite() || !p.x.y.is_finite()) {
        return Err(Error::NonFinite { index: ip });
    }
    if log::log_enabled!(log::Level::Trace) && !particles.is_empty() {
        let mut density_sum = Real::zero();
        let mut lambda_max = Real::zero();
        for p in particles.iter() {
            density_sum += p.density;
            lambda_max = lambda_max.max(p.lambda.abs());
        }
        let num_particles: Real = (particles.len() as f64).as_();
        log::trace!("mean density {:?}, max |lambda| {:?}", density_sum / num_particles, lambda_max);
    }
    Ok(())
}
