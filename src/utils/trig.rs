//! Polynomial sine/cosine for per-pixel coordinate maps
//!
//! Accurate to roughly 0.06 over the whole circle, which is well below a
//! pixel for radii used in ring unwrapping.

/// Single-precision pi as used by the approximation
#[allow(clippy::approx_constant)]
pub const FLOAT_PI: f32 = 3.141592;

const B: f32 = 1.2732; // 4 / pi
const C: f32 = -0.4053; // -4 / pi^2

/// Wrap `x` into `[-pi, pi]`
fn wrap(mut x: f32) -> f32 {
    while x < -FLOAT_PI {
        x += 2.0 * FLOAT_PI;
    }
    while x > FLOAT_PI {
        x -= 2.0 * FLOAT_PI;
    }
    x
}

/// Parabolic approximation of `sin(x)`
pub fn fast_sin(x: f32) -> f32 {
    let x = wrap(x);
    B * x + C * x * x.abs()
}

/// Parabolic approximation of `cos(x)`
pub fn fast_cos(x: f32) -> f32 {
    fast_sin(x + FLOAT_PI / 2.0)
}
