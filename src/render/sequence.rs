use crate::camera::handle::CameraHandle;
use crate::camera::turntable::TurntableDriver;
use crate::foundation::error::TurntableResult;
use crate::render::frame::{FrameRenderer, RawImage};

/// Number of frames in a clip of `duration_secs` at `fps`.
pub fn frame_count(fps: f64, duration_secs: f64) -> usize {
    let n = (fps * duration_secs).round();
    if n.is_finite() && n > 0.0 { n as usize } else { 0 }
}

/// Lazy, single-pass sequence of turntable frames.
///
/// Frame `i` of `count` moves the engine camera to `t = i / count` and renders it, so the last
/// frame stops one step short of the starting pose and the clip loops seamlessly. Nothing is
/// rendered until the iterator is advanced. A render error is yielded once and ends the
/// sequence.
pub struct TurntableFrames<E> {
    driver: TurntableDriver<E>,
    next: usize,
    count: usize,
    done: bool,
}

impl<E: CameraHandle + FrameRenderer> TurntableFrames<E> {
    /// Wrap an already-built driver.
    pub fn new(driver: TurntableDriver<E>, count: usize) -> Self {
        Self {
            driver,
            next: 0,
            count,
            done: false,
        }
    }

    /// Release the engine, leaving its camera at the last rendered pose.
    pub fn into_inner(self) -> E {
        self.driver.into_inner()
    }
}

impl<E: CameraHandle + FrameRenderer> Iterator for TurntableFrames<E> {
    type Item = TurntableResult<RawImage>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.next >= self.count {
            return None;
        }
        let t = self.next as f64 / self.count as f64;
        self.next += 1;

        self.driver.apply(t);
        let frame = self.driver.handle_mut().render_to_image();
        if frame.is_err() {
            self.done = true;
        }
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let left = self.count.saturating_sub(self.next);
        (0, Some(left))
    }
}

/// Orbit `engine`'s camera `turns` times about its up axis, lazily rendering `count` frames.
///
/// The camera pose and up axis are captured here; errors in the axis surface immediately.
pub fn render_turntable_frames<E: CameraHandle + FrameRenderer>(
    engine: E,
    turns: f64,
    count: usize,
) -> TurntableResult<TurntableFrames<E>> {
    Ok(TurntableFrames::new(TurntableDriver::new(engine, turns)?, count))
}

#[cfg(test)]
#[path = "../../tests/unit/render/sequence.rs"]
mod tests;
