//! 2D Position Based Fluids on the unit square

pub mod error;
pub mod kernel;
pub mod params;
pub mod particle;
pub mod simulation;
pub mod solver;

pub use error::{Error, Result};
pub use params::{BoundaryTest, Params};
pub use particle::Particle;
pub use simulation::Simulation;
