use std::str::FromStr;

use crate::camera::state::CameraState;
use crate::foundation::core::DVec3;
use crate::foundation::error::{TurntableError, TurntableResult};

/// Live camera owned by a scene/render engine.
///
/// This is the only view of the engine the turntable driver needs: read and write the current
/// pose, and read the scene's configured up axis.
pub trait CameraHandle {
    /// Current camera pose.
    fn camera_state(&self) -> CameraState;

    /// Replace the current camera pose.
    fn set_camera_state(&mut self, state: CameraState);

    /// Scene up axis used as the turntable rotation axis.
    fn up_axis(&self) -> TurntableResult<DVec3>;
}

impl<T: CameraHandle + ?Sized> CameraHandle for &mut T {
    fn camera_state(&self) -> CameraState {
        (**self).camera_state()
    }

    fn set_camera_state(&mut self, state: CameraState) {
        (**self).set_camera_state(state);
    }

    fn up_axis(&self) -> TurntableResult<DVec3> {
        (**self).up_axis()
    }
}

/// Signed principal axis written as `"+y"`, `"-Z"`, `"x"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UpDirection {
    /// Principal axis index: 0 = X, 1 = Y, 2 = Z.
    pub axis: u8,
    /// `true` for the negative direction.
    pub negative: bool,
}

impl UpDirection {
    /// `+Y`, the usual default scene up direction.
    pub const PLUS_Y: Self = Self {
        axis: 1,
        negative: false,
    };

    /// Unit vector for this direction.
    pub fn to_vec3(self) -> DVec3 {
        let v = match self.axis {
            0 => DVec3::X,
            1 => DVec3::Y,
            _ => DVec3::Z,
        };
        if self.negative { -v } else { v }
    }
}

impl Default for UpDirection {
    fn default() -> Self {
        Self::PLUS_Y
    }
}

impl FromStr for UpDirection {
    type Err = TurntableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            Some(_) => (false, s),
            None => {
                return Err(TurntableError::degenerate_axis("up direction is unset"));
            }
        };
        let axis = match rest {
            "x" | "X" => 0,
            "y" | "Y" => 1,
            "z" | "Z" => 2,
            _ => {
                return Err(TurntableError::degenerate_axis(format!(
                    "unrecognized up direction '{s}'"
                )));
            }
        };
        Ok(Self { axis, negative })
    }
}

impl TryFrom<String> for UpDirection {
    type Error = TurntableError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<UpDirection> for String {
    fn from(d: UpDirection) -> Self {
        d.to_string()
    }
}

impl std::fmt::Display for UpDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.negative { '-' } else { '+' };
        let axis = ['X', 'Y', 'Z'][usize::from(self.axis.min(2))];
        write!(f, "{sign}{axis}")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/handle.rs"]
mod tests;
