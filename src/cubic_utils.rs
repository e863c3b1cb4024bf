/// Cubic polynomial utilities: Bezier power-basis coefficients and real root solving
use crate::errors::GeometryError;

/// Power-basis coefficients `[a3, a2, a1, a0]` of `a3·t³ + a2·t² + a1·t + a0`
pub type CubicCoefficients<T> = [T; 4];

fn lit<T: num_traits::Float>(v: f64) -> T {
    T::from(v).unwrap_or_else(T::nan)
}

/// Convert one axis of a cubic Bezier (Bernstein basis) to power-basis coefficients
///
/// # Arguments
/// * `p0`..`p3` - The same coordinate (x or y) of the four control points
pub fn bezier_coeffs<T>(p0: T, p1: T, p2: T, p3: T) -> CubicCoefficients<T>
where
    T: num_traits::Float,
{
    let three = lit::<T>(3.0);
    let six = lit::<T>(6.0);
    [
        -p0 + three * p1 - three * p2 + p3,
        three * p0 - six * p1 + three * p2,
        -three * p0 + three * p1,
        p0,
    ]
}

/// Up to three real roots of a cubic, each restricted to `[0, 1]`.
///
/// A `None` slot means "no root": complex, out of range, or NaN. Slots are
/// not sorted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicRoots<T> {
    slots: [Option<T>; 3],
}

impl<T: num_traits::Float> CubicRoots<T> {
    pub fn slots(&self) -> &[Option<T>; 3] {
        &self.slots
    }

    /// Only the roots that survived filtering, in slot order
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.slots.iter().filter_map(|slot| *slot)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

/// Solve `a3·t³ + a2·t² + a1·t + a0 = 0` with the trigonometric/Cardano method
/// and keep only real roots inside `[0, 1]`.
///
/// Roots of a complex-conjugate pair are discarded whenever their imaginary
/// part is non-zero, with no tolerance at all. Near a repeated real root,
/// rounding noise can make that part tiny but non-zero and the pair is lost.
///
/// `a3` must be non-zero and finite, otherwise the equation is not a cubic and
/// a [`GeometryError::Domain`] is returned.
pub fn solve_cubic<T>(a3: T, a2: T, a1: T, a0: T) -> Result<CubicRoots<T>, GeometryError>
where
    T: num_traits::Float,
{
    if a3 == T::zero() || !a3.is_finite() {
        return Err(GeometryError::domain(format!(
            "leading cubic coefficient must be finite and non-zero, got {:?}",
            a3.to_f64()
        )));
    }

    let two = lit::<T>(2.0);
    let three = lit::<T>(3.0);
    let nine = lit::<T>(9.0);

    // Normalize to t³ + A·t² + B·t + C
    let a = a2 / a3;
    let b = a1 / a3;
    let c = a0 / a3;

    let q = (three * b - a.powi(2)) / nine;
    let r = (nine * a * b - lit::<T>(27.0) * c - two * a.powi(3)) / lit::<T>(54.0);
    let discriminant = q.powi(3) + r.powi(2);

    let shift = -a / three;
    let mut roots: [T; 3];

    if discriminant >= T::zero() {
        // one real root plus a pair that is either complex or repeated
        let sqrt_d = discriminant.sqrt();
        let s = signed_cbrt(r + sqrt_d);
        let t = signed_cbrt(r - sqrt_d);

        let real_part = shift - (s + t) / two;
        roots = [shift + s + t, real_part, real_part];

        let imaginary = (three.sqrt() * (s - t) / two).abs();
        if imaginary != T::zero() {
            roots[1] = T::nan();
            roots[2] = T::nan();
        }
    } else {
        // three distinct real roots
        let theta = (r / (-q.powi(3)).sqrt()).acos();
        let magnitude = two * (-q).sqrt();
        let tau = lit::<T>(std::f64::consts::TAU);
        roots = [
            magnitude * (theta / three).cos() + shift,
            magnitude * ((theta + tau) / three).cos() + shift,
            magnitude * ((theta + two * tau) / three).cos() + shift,
        ];
    }

    let mut slots = [None; 3];
    for (slot, root) in slots.iter_mut().zip(roots) {
        if root >= T::zero() && root <= T::one() {
            *slot = Some(root);
        }
    }

    Ok(CubicRoots { slots })
}

/// `sign(v)·|v|^(1/3)`
fn signed_cbrt<T: num_traits::Float>(v: T) -> T {
    let magnitude = v.abs().powf(T::one() / lit::<T>(3.0));
    if v < T::zero() {
        -magnitude
    } else if v > T::zero() {
        magnitude
    } else {
        T::zero()
    }
}
