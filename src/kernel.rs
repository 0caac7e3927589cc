//! SPH smoothing kernels in 2D (Müller et al. 2003)

use num_traits::AsPrimitive;

/// Poly6 density kernel `315/(64 pi h^9) (h^2 - |r|^2)^3` with `r = pi - pj`.
///
/// Zero outside the support radius. Neighbor lists are fixed for a whole step,
/// so a listed neighbor may have drifted beyond `h` by a later iteration.
pub fn poly6<Real>(
    pi: &nalgebra::Vector2::<Real>,
    pj: &nalgebra::Vector2::<Real>,
    h: Real) -> Real
    where Real: nalgebra::RealField + Copy,
          f64: AsPrimitive<Real>
{
    let r2 = (pi - pj).norm_squared();
    if r2 >= h * h {
        return Real::zero();
    }
    let coeff = 315_f64.as_() / (64_f64.as_() * Real::pi() * h.powi(9));
    coeff * (h * h - r2).powi(3)
}

/// Gradient of the spiky kernel with respect to `pi`.
///
/// Returns zero for coincident points and outside the support radius.
pub fn spiky_gradient<Real>(
    pi: &nalgebra::Vector2::<Real>,
    pj: &nalgebra::Vector2::<Real>,
    h: Real) -> nalgebra::Vector2::<Real>
    where Real: nalgebra::RealField + Copy,
          f64: AsPrimitive<Real>
{
    let r = pi - pj;
    let d = r.norm();
    if d > h || d == Real::zero() {
        return nalgebra::Vector2::<Real>::zeros();
    }
    let a = h * h - d * d;
    let coeff = -(45_f64.as_() / (Real::pi() * h.powi(6))) * a * a / d;
    debug_assert!(coeff.is_finite(), "spiky gradient not finite");
    if !coeff.is_finite() {
        log::error!("spiky gradient not finite: r={:?} h={:?}", r, h);
        return nalgebra::Vector2::<Real>::zeros();
    }
    r.scale(coeff)
}
