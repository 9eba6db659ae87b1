//! Rotation math shared by the turntable interpolator.

use crate::foundation::core::{DMat3, DMat4, DVec3};
use crate::foundation::error::{TurntableError, TurntableResult};

/// Axes shorter than this are treated as zero.
pub const AXIS_EPSILON: f64 = 1e-12;

/// Parametric family of affine rotations about a fixed axis through a pivot point.
///
/// Built once from an axis and a pivot; [`AxisRotation::at`] then yields the 4x4 transform
/// for any angle using Rodrigues' rotation formula. The value is immutable, so sampling it
/// repeatedly or from several threads is fine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRotation {
    axis: DVec3,
    k: DMat3,
    kk: DMat3,
    to_pivot: DMat4,
    from_pivot: DMat4,
}

impl AxisRotation {
    /// Build a rotation family about `axis` (any non-zero length) through `pivot`.
    pub fn new(axis: DVec3, pivot: DVec3) -> TurntableResult<Self> {
        let len = axis.length();
        if !len.is_finite() || len < AXIS_EPSILON {
            return Err(TurntableError::degenerate_axis(format!(
                "rotation axis {axis} has no usable direction"
            )));
        }
        let a = axis / len;

        // Skew-symmetric cross-product matrix, column-major.
        let k = DMat3::from_cols(
            DVec3::new(0.0, a.z, -a.y),
            DVec3::new(-a.z, 0.0, a.x),
            DVec3::new(a.y, -a.x, 0.0),
        );

        let to_pivot = DMat4::from_translation(pivot);
        Ok(Self {
            axis: a,
            k,
            kk: k * k,
            to_pivot,
            from_pivot: to_pivot.inverse(),
        })
    }

    /// Unit-length rotation axis.
    pub fn axis(&self) -> DVec3 {
        self.axis
    }

    /// Pivot point the rotation is taken about.
    pub fn pivot(&self) -> DVec3 {
        self.to_pivot.w_axis.truncate()
    }

    /// Affine transform rotating by `angle` radians (right-handed about the axis).
    pub fn at(&self, angle: f64) -> DMat4 {
        let (sin, cos) = angle.sin_cos();
        let r = DMat3::IDENTITY + self.k * sin + self.kk * (1.0 - cos);
        self.to_pivot * DMat4::from_mat3(r) * self.from_pivot
    }
}

/// Apply a 4x4 affine transform to a point in homogeneous coordinates.
pub fn transform_point(m: &DMat4, p: DVec3) -> DVec3 {
    let h = *m * p.extend(1.0);
    h.truncate() / h.w
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
