//! Turntable camera animation: orbit a fixed focal point about a fixed axis.

use std::f64::consts::TAU;

use crate::camera::handle::CameraHandle;
use crate::camera::state::CameraState;
use crate::foundation::core::DVec3;
use crate::foundation::error::TurntableResult;
use crate::foundation::math::{AxisRotation, transform_point};

/// Pure `t -> CameraState` mapping for a turntable orbit.
///
/// `t = 0..=1` spins the camera `turns` times around the initial focal point about `axis`.
/// Fractional turns give a partial revolution and negative turns reverse the direction. `t` is
/// never clamped: values outside `[0, 1]` extrapolate with the same `2π·t·turns` angle.
///
/// When the initial position coincides with the focal point the orbit has zero radius: the eye
/// stays put and only the up vector rotates. That is accepted as-is rather than reported.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurntableInterpolator {
    focal_point: DVec3,
    position: DVec3,
    view_up: DVec3,
    view_angle: f64,
    turns: f64,
    rotation: AxisRotation,
}

impl TurntableInterpolator {
    /// Capture `initial` and build the rotation about `axis` through its focal point.
    ///
    /// Fails with [`TurntableError::DegenerateAxis`](crate::TurntableError::DegenerateAxis)
    /// when `axis` has no usable direction.
    pub fn new(initial: CameraState, axis: DVec3, turns: f64) -> TurntableResult<Self> {
        let rotation = AxisRotation::new(axis, initial.focal_point)?;
        Ok(Self {
            focal_point: initial.focal_point,
            position: initial.position,
            view_up: initial.view_up,
            view_angle: initial.view_angle,
            turns,
            rotation,
        })
    }

    /// Number of revolutions over `t = 0..=1`.
    pub fn turns(&self) -> f64 {
        self.turns
    }

    /// Rotation angle in radians at `t`.
    pub fn angle_at(&self, t: f64) -> f64 {
        TAU * t * self.turns
    }

    /// Camera pose at normalized time `t`.
    ///
    /// The focal point is returned as captured rather than pushed through the rotation: the pivot
    /// is a fixed point of every rotation in the family, and the rotated value would only differ
    /// by rounding. This keeps the focal point bit-for-bit equal across all samples.
    pub fn sample(&self, t: f64) -> CameraState {
        let m = self.rotation.at(self.angle_at(t));
        let position = transform_point(&m, self.position);
        // Rotate the point one up-unit above the eye, then re-derive the direction.
        let view_up = transform_point(&m, self.position + self.view_up) - position;

        CameraState {
            position,
            focal_point: self.focal_point,
            view_up,
            view_angle: self.view_angle,
        }
    }
}

/// Drives a live camera along a turntable orbit.
///
/// The camera pose and up axis are read once, in [`TurntableDriver::new`]. Every
/// [`TurntableDriver::apply`] writes the pose for `t` computed from that fixed initial pose, so
/// repeated or out-of-order calls never accumulate.
pub struct TurntableDriver<H> {
    handle: H,
    interpolator: TurntableInterpolator,
}

impl<H: CameraHandle> TurntableDriver<H> {
    /// Capture the handle's current pose and up axis.
    pub fn new(handle: H, turns: f64) -> TurntableResult<Self> {
        let axis = handle.up_axis()?;
        let interpolator = TurntableInterpolator::new(handle.camera_state(), axis, turns)?;
        tracing::debug!(turns, %axis, "turntable driver ready");
        Ok(Self {
            handle,
            interpolator,
        })
    }

    /// Move the live camera to the pose at `t`.
    pub fn apply(&mut self, t: f64) {
        self.handle.set_camera_state(self.interpolator.sample(t));
    }

    /// The captured interpolator.
    pub fn interpolator(&self) -> &TurntableInterpolator {
        &self.interpolator
    }

    /// Borrow the driven handle.
    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// Mutably borrow the driven handle.
    pub fn handle_mut(&mut self) -> &mut H {
        &mut self.handle
    }

    /// Release the handle.
    pub fn into_inner(self) -> H {
        self.handle
    }
}

impl<H> std::fmt::Debug for TurntableDriver<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurntableDriver")
            .field("interpolator", &self.interpolator)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/turntable.rs"]
mod tests;
