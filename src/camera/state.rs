use crate::foundation::core::DVec3;
use crate::foundation::error::{TurntableError, TurntableResult};

/// Full camera pose.
///
/// Serialized with the field names used by the camera metadata JSON that viewers embed into
/// screenshots (`position`, `focalPoint`, `viewUp`, `viewAngle`), vectors as `[x, y, z]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraState {
    /// Eye position.
    pub position: DVec3,
    /// Point the camera looks at; turntable rotation pivots here.
    pub focal_point: DVec3,
    /// Up direction. Not required to be unit length.
    pub view_up: DVec3,
    /// Vertical view angle in degrees, must be positive.
    pub view_angle: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: DVec3::Z,
            focal_point: DVec3::ZERO,
            view_up: DVec3::Y,
            view_angle: 30.0,
        }
    }
}

impl CameraState {
    /// Build a camera state and validate it.
    pub fn new(
        position: DVec3,
        focal_point: DVec3,
        view_up: DVec3,
        view_angle: f64,
    ) -> TurntableResult<Self> {
        let state = Self {
            position,
            focal_point,
            view_up,
            view_angle,
        };
        state.validate()?;
        Ok(state)
    }

    /// Check that all components are finite and `view_angle > 0`.
    pub fn validate(&self) -> TurntableResult<()> {
        if !(self.position.is_finite() && self.focal_point.is_finite() && self.view_up.is_finite())
        {
            return Err(TurntableError::validation(
                "camera position/focal point/view up must be finite",
            ));
        }
        if !(self.view_angle.is_finite() && self.view_angle > 0.0) {
            return Err(TurntableError::validation(format!(
                "camera view angle must be positive, got {}",
                self.view_angle
            )));
        }
        Ok(())
    }

    /// Parse camera metadata JSON, e.g. the `camera` entry saved alongside a screenshot.
    pub fn from_json(s: &str) -> TurntableResult<Self> {
        let state: Self = serde_json::from_str(s)
            .map_err(|e| TurntableError::serde(format!("invalid camera metadata: {e}")))?;
        state.validate()?;
        Ok(state)
    }

    /// Serialize to the camera metadata JSON form accepted by [`CameraState::from_json`].
    pub fn to_json(&self) -> TurntableResult<String> {
        serde_json::to_string(self).map_err(|e| TurntableError::serde(e.to_string()))
    }

    /// Distance between the eye and the focal point.
    pub fn orbit_radius(&self) -> f64 {
        self.position.distance(self.focal_point)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/state.rs"]
mod tests;
