use num_traits::AsPrimitive;

use crate::error::{Error, Result};

/// Which position decides that a particle left the unit domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryTest {
    /// Test the position committed at the end of the previous step.
    /// A particle is pulled back one step after it escaped.
    #[default]
    Committed,
    /// Test the in-progress predicted position.
    Predicted,
}

/// Simulation constants, fixed for the lifetime of a run.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default, bound(deserialize = "Real: nalgebra::RealField + Copy + serde::Deserialize<'de>, f64: num_traits::AsPrimitive<Real>"))]
pub struct Params<Real> {
    /// Time step
    pub dt: Real,
    /// Number of Jacobi sweeps per step
    pub solver_iterations: usize,
    pub rest_density: Real,
    /// Support radius `h` of both kernels
    pub kernel_radius: Real,
    /// Regularization added to the lambda denominator
    pub epsilon: Real,
    pub gravity: nalgebra::Vector2::<Real>,
    /// Maximum inward offset of a particle reset at the wall
    pub boundary_jitter: Real,
    pub boundary_test: BoundaryTest,
}

impl<Real> Default for Params<Real>
    where Real: nalgebra::RealField + Copy,
          f64: AsPrimitive<Real>
{
    fn default() -> Self {
        Self {
            dt: (1_f64 / 60_f64).as_(),
            solver_iterations: 10,
            rest_density: 1000_f64.as_(),
            kernel_radius: 0.1_f64.as_(),
            epsilon: 500_f64.as_(),
            gravity: nalgebra::Vector2::<Real>::new(Real::zero(), (-9.8_f64).as_()),
            boundary_jitter: 0.001_f64.as_(),
            boundary_test: BoundaryTest::Committed,
        }
    }
}

impl<Real> Params<Real>
    where Real: nalgebra::RealField + Copy,
          f64: AsPrimitive<Real>
{
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("dt", self.dt),
            ("rest_density", self.rest_density),
            ("kernel_radius", self.kernel_radius),
            ("epsilon", self.epsilon)];
        for (name, value) in positive {
            if !value.is_finite() || value <= Real::zero() {
                return Err(Error::InvalidParam(
                    format!("{} must be finite and > 0, got {:?}", name, value)));
            }
        }
        if !self.gravity.x.is_finite() || !self.gravity.y.is_finite() {
            return Err(Error::InvalidParam(
                format!("gravity must be finite, got {:?}", self.gravity)));
        }
        if !self.boundary_jitter.is_finite()
            || self.boundary_jitter < Real::zero()
            || self.boundary_jitter >= Real::one() {
            return Err(Error::InvalidParam(
                format!("boundary_jitter must lie in [0, 1), got {:?}", self.boundary_jitter)));
        }
        Ok(())
    }
}

impl<Real> Params<Real>
    where Real: nalgebra::RealField + Copy + serde::de::DeserializeOwned,
          f64: AsPrimitive<Real>
{
    /// Parse from JSON. Missing fields keep their default value.
    pub fn from_json(s: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(s)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_path(path: &std::path::Path) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Self::from_json(&s)
    }
}
