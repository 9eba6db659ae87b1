//! Turntable camera paths and raw-frame video export.
//!
//! The crate has two independent halves:
//!
//! 1. **Camera paths**: [`TurntableInterpolator`] maps a normalized time `t` to a [`CameraState`]
//!    orbiting the initial focal point about an arbitrary axis, any (fractional or negative)
//!    number of turns. [`TurntableDriver`] applies those poses to a live [`CameraHandle`].
//! 2. **Export**: [`image_sequence_to_video`] and [`encode_raw`] stream raw RGB24 frames into the
//!    system `ffmpeg` through its stdin, one frame at a time.
//!
//! A typical export renders frames lazily with [`render_turntable_frames`] and feeds the
//! resulting iterator to [`try_image_sequence_to_video`]:
//!
//! ```no_run
//! # use turntable::*;
//! # fn run(engine: impl CameraHandle + FrameRenderer) -> TurntableResult<()> {
//! let frames = render_turntable_frames(engine, 1.0, frame_count(30.0, 5.0))?;
//! try_image_sequence_to_video(frames, 30.0, "turntable.mp4", &EncodeOptions::mp4(8))?;
//! # Ok(())
//! # }
//! ```
//!
//! Rendering itself is out of scope: engines plug in through [`CameraHandle`] and
//! [`FrameRenderer`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod camera;
mod encode;
mod foundation;
mod render;

pub use camera::handle::{CameraHandle, UpDirection};
pub use camera::state::CameraState;
pub use camera::turntable::{TurntableDriver, TurntableInterpolator};
pub use encode::ffmpeg::{
    IMAGE_SEQUENCE_VFLIP, RAW_VFLIP, encode_raw, ensure_parent_dir, ffmpeg_args,
    image_sequence_to_video, is_ffmpeg_on_path, try_encode_raw, try_image_sequence_to_video,
};
pub use encode::options::{
    DEFAULT_CRF, EncodeOptions, Loglevel, SUPPORTED_PIX_FMTS, mp4_output_args, webm_output_args,
};
pub use encode::session::EncoderSession;
pub use foundation::core::{DMat4, DVec3, Resolution};
pub use foundation::error::{TurntableError, TurntableResult};
pub use foundation::math::{AXIS_EPSILON, AxisRotation, transform_point};
pub use render::frame::{FrameRenderer, RAW_CHANNELS, RawImage, raw_frame_len};
pub use render::sequence::{TurntableFrames, frame_count, render_turntable_frames};
