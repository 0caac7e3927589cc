use num_traits::AsPrimitive;

#[derive(Debug, Clone)]
pub struct Particle<Real> {
    /// Position committed at the end of the last step
    pub x: nalgebra::Vector2::<Real>,
    /// Velocity
    pub v: nalgebra::Vector2::<Real>,
    /// Predicted position, corrected during the solver iterations
    pub x_new: nalgebra::Vector2::<Real>,
    /// Position correction of the current iteration
    pub dx: nalgebra::Vector2::<Real>,
    /// Indices of the particles within the kernel radius of `x_new`
    pub neighbors: Vec<usize>,
    /// SPH density estimate
    pub density: Real,
    /// Lagrange multiplier of the density constraint
    pub lambda: Real,
}

impl<Real> Particle<Real>
where Real: nalgebra::RealField + Copy
{
    pub fn new(x_: nalgebra::Vector2::<Real>) -> Self {
        Self {
            x: x_,
            v: nalgebra::Vector2::<Real>::zeros(),
            x_new: x_,
            dx: nalgebra::Vector2::<Real>::zeros(),
            neighbors: vec!(),
            density: Real::zero(),
            lambda: Real::zero(),
        }
    }
}

/// Seed particles uniformly in the unit square
pub fn add_random<Real, R>(
    particles: &mut Vec<Particle<Real>>,
    num_particles: usize,
    rng: &mut R)
    where R: rand::Rng,
          rand::distributions::Standard: rand::prelude::Distribution<Real>,
          Real: nalgebra::RealField + Copy
{
    particles.reserve(num_particles);
    for _i in 0..num_particles {
        let x: Real = rng.gen::<Real>();
        let y: Real = rng.gen::<Real>();
        particles.push(Particle::new(nalgebra::Vector2::<Real>::new(x, y)));
    }
}

/// Seed particles on a regular lattice covering the rectangle `[min, max]`
pub fn add_block<Real>(
    particles: &mut Vec<Particle<Real>>,
    min: nalgebra::Vector2::<Real>,
    max: nalgebra::Vector2::<Real>,
    spacing: Real)
    where Real: nalgebra::RealField + Copy + AsPrimitive<usize>,
          usize: AsPrimitive<Real>
{
    assert!(spacing > Real::zero());
    let nx: usize = ((max.x - min.x) / spacing).floor().as_() + 1;
    let ny: usize = ((max.y - min.y) / spacing).floor().as_() + 1;
    for iy in 0..ny {
        for ix in 0..nx {
            let p = nalgebra::Vector2::<Real>::new(
                min.x + ix.as_() * spacing,
                min.y + iy.as_() * spacing);
            particles.push(Particle::new(p));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Real = f64;
    type Vector = nalgebra::Vector2<Real>;

    #[test]
    fn new_particle_is_at_rest() {
        let p = Particle::new(Vector::new(0.2, 0.3));
        assert_eq!(p.x, p.x_new);
        assert_eq!(p.v, Vector::zeros());
        assert!(p.neighbors.is_empty());
        assert_eq!(p.density, 0.);
        assert_eq!(p.lambda, 0.);
    }

    #[test]
    fn random_particles_lie_in_unit_square() {
        let mut rng: rand::rngs::StdRng = rand::SeedableRng::from_seed([13_u8; 32]);
        let mut particles = Vec::<Particle<Real>>::new();
        add_random(&mut particles, 50, &mut rng);
        assert_eq!(particles.len(), 50);
        for p in &particles {
            assert!((0. ..1.).contains(&p.x.x) && (0. ..1.).contains(&p.x.y));
        }
    }

    #[test]
    fn block_is_a_lattice() {
        let mut particles = Vec::<Particle<Real>>::new();
        add_block(&mut particles, Vector::new(0.1, 0.1), Vector::new(0.3, 0.2), 0.05);
        // floor(0.2/0.05)+1 = 5 columns, floor(0.1/0.05)+1 = 3 rows, up to rounding
        assert!(particles.len() >= 4 * 2 && particles.len() <= 5 * 3);
        assert_eq!(particles[0].x, Vector::new(0.1, 0.1));
        assert!((particles[1].x - particles[0].x - Vector::new(0.05, 0.)).norm() < 1e-12);
    }
}
