//! 3D Cartesian vector support for the simulation core
//!
//! All kinematic and field quantities are `nalgebra` vectors:
//! - `Vec3` is the working type, a plain `Vector3<f64>` value
//! - `from_components` builds a `Vec3` from raw coordinate lists
//! - `unit_or_zero` implements the degenerate unit-vector policy
//!
//! `Vec3` is `Copy`, so assignment always copies and no two owners ever share
//! backing storage. Scaling has a pure form (`Vec3::scale`) and an in-place
//! form (`Vec3::scale_mut`); addition, subtraction, `dot`, `cross` and `norm`
//! come from `nalgebra` and never mutate their operands.

use nalgebra::Vector3;

use crate::error::SimulationError;

pub type Vec3 = Vector3<f64>;

/// Magnitudes at or below this have no usable direction
pub const UNIT_EPS: f64 = 1e-34;

/// Build a `Vec3` from a raw coordinate list
/// - length 3 maps componentwise,
/// - length 2 sets z = 0,
/// - any other length is an [`SimulationError::InvalidComponents`] error
pub fn from_components(raw: &[f64]) -> Result<Vec3, SimulationError> {
    match raw {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        [x, y] => Ok(Vec3::new(*x, *y, 0.0)),
        _ => Err(SimulationError::InvalidComponents { got: raw.len() }),
    }
}

/// Unit vector in the direction of `v`, or the zero vector when the
/// magnitude is at most [`UNIT_EPS`]. A degenerate direction has no defined
/// unit form, so this is a policy, not an error.
pub fn unit_or_zero(v: &Vec3) -> Vec3 {
    let mag = v.norm();
    if mag > UNIT_EPS {
        v / mag
    } else {
        Vec3::zeros()
    }
}
