use std::ffi::OsString;
use std::path::Path;

use crate::encode::options::EncodeOptions;
use crate::encode::session::EncoderSession;
use crate::foundation::core::Resolution;
use crate::foundation::error::{TurntableError, TurntableResult};
use crate::render::frame::RawImage;

/// Default vertical flip for [`image_sequence_to_video`].
pub const IMAGE_SEQUENCE_VFLIP: bool = true;
/// Default vertical flip for [`encode_raw`].
pub const RAW_VFLIP: bool = false;

/// Build the encoder argument list (program name excluded).
///
/// Shape: `-f rawvideo -pix_fmt <fmt> -s <W>x<H> -r <fps> -i - [-vf vflip] <output args>
/// -loglevel <level> <out_path> -y`.
pub fn ffmpeg_args(
    resolution: Resolution,
    fps: f64,
    out_path: &Path,
    opts: &EncodeOptions,
    vflip: bool,
) -> Vec<OsString> {
    let (w, h) = resolution;
    let size = format!("{w}x{h}");
    let rate = fps.to_string();
    let mut args: Vec<OsString> = [
        "-f",
        "rawvideo",
        "-pix_fmt",
        opts.pix_fmt.as_str(),
        "-s",
        size.as_str(),
        // For rawvideo input, `-r` before `-i` sets the input frame rate.
        "-r",
        rate.as_str(),
        "-i",
        "-",
    ]
    .into_iter()
    .map(OsString::from)
    .collect();

    if vflip {
        args.extend(["-vf", "vflip"].map(OsString::from));
    }
    args.extend(opts.output_args.iter().map(OsString::from));
    args.push("-loglevel".into());
    args.push(opts.loglevel.to_string().into());
    args.push(out_path.as_os_str().to_owned());
    args.push("-y".into());
    args
}

/// Encode a sequence of rendered images to a video file.
///
/// The first image fixes the resolution. Rows are flipped vertically unless
/// [`EncodeOptions::vflip`] says otherwise.
pub fn image_sequence_to_video<I>(
    images: I,
    fps: f64,
    out_path: impl AsRef<Path>,
    opts: &EncodeOptions,
) -> TurntableResult<()>
where
    I: IntoIterator<Item = RawImage>,
{
    try_image_sequence_to_video(
        images.into_iter().map(Ok::<_, TurntableError>),
        fps,
        out_path,
        opts,
    )
}

/// [`image_sequence_to_video`] for producers that can fail mid-sequence.
///
/// A producer error aborts the export: the encoder input is closed, the process is waited on and
/// the error is returned as-is.
pub fn try_image_sequence_to_video<I, E>(
    images: I,
    fps: f64,
    out_path: impl AsRef<Path>,
    opts: &EncodeOptions,
) -> TurntableResult<()>
where
    I: IntoIterator<Item = Result<RawImage, E>>,
    E: Into<TurntableError>,
{
    let mut images = images.into_iter();
    let first = images
        .next()
        .ok_or(TurntableError::EmptySequence)?
        .map_err(Into::<TurntableError>::into)?;
    let resolution = first.resolution();
    let vflip = opts.vflip.unwrap_or(IMAGE_SEQUENCE_VFLIP);
    stream_frames(first, images, resolution, fps, out_path.as_ref(), opts, vflip)
}

/// Encode raw frame payloads of a known resolution to a video file.
///
/// Each payload must be exactly `width * height * 3` bytes. Sizes are not checked here; a
/// mismatch makes the encoder fail. Rows are not flipped unless [`EncodeOptions::vflip`] asks for
/// it.
pub fn encode_raw<I, B>(
    frames: I,
    resolution: Resolution,
    fps: f64,
    out_path: impl AsRef<Path>,
    opts: &EncodeOptions,
) -> TurntableResult<()>
where
    I: IntoIterator<Item = B>,
    B: AsRef<[u8]>,
{
    try_encode_raw(
        frames.into_iter().map(Ok::<_, TurntableError>),
        resolution,
        fps,
        out_path,
        opts,
    )
}

/// [`encode_raw`] for producers that can fail mid-sequence.
pub fn try_encode_raw<I, B, E>(
    frames: I,
    resolution: Resolution,
    fps: f64,
    out_path: impl AsRef<Path>,
    opts: &EncodeOptions,
) -> TurntableResult<()>
where
    I: IntoIterator<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: Into<TurntableError>,
{
    let mut frames = frames.into_iter();
    let first = frames
        .next()
        .ok_or(TurntableError::EmptySequence)?
        .map_err(Into::<TurntableError>::into)?;
    let vflip = opts.vflip.unwrap_or(RAW_VFLIP);
    stream_frames(first, frames, resolution, fps, out_path.as_ref(), opts, vflip)
}

#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(
        width = resolution.0,
        height = resolution.1,
        fps = fps,
        vflip = vflip,
        out = %out_path.display()
    )
)]
fn stream_frames<B, E>(
    first: B,
    rest: impl Iterator<Item = Result<B, E>>,
    resolution: Resolution,
    fps: f64,
    out_path: &Path,
    opts: &EncodeOptions,
    vflip: bool,
) -> TurntableResult<()>
where
    B: AsRef<[u8]>,
    E: Into<TurntableError>,
{
    if resolution.0 == 0 || resolution.1 == 0 {
        return Err(TurntableError::validation(
            "encode width/height must be non-zero",
        ));
    }
    if !(fps.is_finite() && fps > 0.0) {
        return Err(TurntableError::validation(format!(
            "encode fps must be positive, got {fps}"
        )));
    }
    opts.validate()?;
    ensure_parent_dir(out_path)?;

    let args = ffmpeg_args(resolution, fps, out_path, opts, vflip);
    let mut session = EncoderSession::spawn(&opts.ffmpeg_executable, &args)?;

    // Pull the next frame only after the previous one is flushed.
    for frame in std::iter::once(Ok(first)).chain(rest) {
        let frame = frame.map_err(Into::<TurntableError>::into)?;
        session.write_frame(frame.as_ref())?;
    }

    tracing::debug!(frames = session.frames_written(), "all frames written");
    session.finish()
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> TurntableResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    std::process::Command::new("ffmpeg")
        .arg("-version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
