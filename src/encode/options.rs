use std::path::PathBuf;
use std::str::FromStr;

use crate::foundation::error::{TurntableError, TurntableResult};

/// Raw input pixel formats that match the packed 3-bytes-per-pixel frame layout.
pub const SUPPORTED_PIX_FMTS: &[&str] = &["rgb24", "bgr24"];

/// Default constant rate factor for the presets (lower is higher quality).
pub const DEFAULT_CRF: u32 = 8;

/// `ffmpeg -loglevel` value, either a named level or a raw number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Loglevel {
    /// Show nothing at all.
    Quiet,
    /// Only unrecoverable errors that make the process abort.
    Panic,
    /// Only fatal errors.
    Fatal,
    /// All errors, including recoverable ones.
    #[default]
    Error,
    /// Warnings and errors.
    Warning,
    /// Informative messages.
    Info,
    /// Like `info`, but more verbose.
    Verbose,
    /// Everything, including debugging information.
    Debug,
    /// Extremely verbose.
    Trace,
    /// Numeric level as understood by `ffmpeg`.
    Level(i32),
}

impl Loglevel {
    fn name(self) -> Option<&'static str> {
        Some(match self {
            Self::Quiet => "quiet",
            Self::Panic => "panic",
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Verbose => "verbose",
            Self::Debug => "debug",
            Self::Trace => "trace",
            Self::Level(_) => return None,
        })
    }
}

impl std::fmt::Display for Loglevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Level(n) => write!(f, "{n}"),
            named => f.write_str(named.name().unwrap_or_default()),
        }
    }
}

impl FromStr for Loglevel {
    type Err = TurntableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "quiet" => Self::Quiet,
            "panic" => Self::Panic,
            "fatal" => Self::Fatal,
            "error" => Self::Error,
            "warning" => Self::Warning,
            "info" => Self::Info,
            "verbose" => Self::Verbose,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            other => Self::Level(other.parse().map_err(|_| {
                TurntableError::validation(format!("unknown ffmpeg loglevel '{s}'"))
            })?),
        })
    }
}

impl TryFrom<String> for Loglevel {
    type Error = TurntableError;

    fn try_from(s: String) -> Result<Self, TurntableError> {
        s.parse()
    }
}

impl From<Loglevel> for String {
    fn from(level: Loglevel) -> Self {
        level.to_string()
    }
}

/// `ffmpeg` output arguments for H.264 in an `.mp4` container.
pub fn mp4_output_args(crf: u32) -> Vec<String> {
    [
        "-profile:v",
        "main",
        "-c:v",
        "libx264",
        "-pix_fmt",
        "yuv420p",
        "-crf",
    ]
    .into_iter()
    .map(String::from)
    .chain([crf.to_string()])
    .collect()
}

/// `ffmpeg` output arguments for VP9 in a `.webm` container (constant quality mode).
pub fn webm_output_args(crf: u32) -> Vec<String> {
    ["-c:v", "libvpx-vp9", "-pix_fmt", "yuv420p", "-crf"]
        .into_iter()
        .map(String::from)
        .chain([crf.to_string(), "-b:v".to_owned(), "0".to_owned()])
        .collect()
}

/// Options for encoding a raw frame stream with `ffmpeg`.
///
/// Deserializes from partial JSON; missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// Codec/quality arguments placed between the input and `-loglevel`.
    pub output_args: Vec<String>,
    /// Encoder program, looked up on `PATH` when not a path.
    pub ffmpeg_executable: PathBuf,
    /// Encoder verbosity.
    pub loglevel: Loglevel,
    /// Raw input pixel format, one of [`SUPPORTED_PIX_FMTS`].
    pub pix_fmt: String,
    /// Flip rows vertically. `None` uses the entry point's default (`true` for image sequences,
    /// `false` for raw bytes).
    pub vflip: Option<bool>,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self::mp4(DEFAULT_CRF)
    }
}

impl EncodeOptions {
    /// Default options: H.264 `.mp4` with [`DEFAULT_CRF`].
    pub fn new() -> Self {
        Self::default()
    }

    /// H.264 `.mp4` preset.
    pub fn mp4(crf: u32) -> Self {
        Self::with_args(mp4_output_args(crf))
    }

    /// VP9 `.webm` preset.
    pub fn webm(crf: u32) -> Self {
        Self::with_args(webm_output_args(crf))
    }

    fn with_args(output_args: Vec<String>) -> Self {
        Self {
            output_args,
            ffmpeg_executable: PathBuf::from("ffmpeg"),
            loglevel: Loglevel::default(),
            pix_fmt: "rgb24".to_owned(),
            vflip: None,
        }
    }

    /// Replace the codec/quality arguments.
    pub fn with_output_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.output_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Use a different encoder program.
    pub fn with_ffmpeg_executable(mut self, exe: impl Into<PathBuf>) -> Self {
        self.ffmpeg_executable = exe.into();
        self
    }

    /// Set the encoder verbosity.
    pub fn with_loglevel(mut self, loglevel: Loglevel) -> Self {
        self.loglevel = loglevel;
        self
    }

    /// Set the raw input pixel format.
    pub fn with_pix_fmt(mut self, pix_fmt: impl Into<String>) -> Self {
        self.pix_fmt = pix_fmt.into();
        self
    }

    /// Force vertical flipping on or off.
    pub fn with_vflip(mut self, vflip: bool) -> Self {
        self.vflip = Some(vflip);
        self
    }

    /// Parse options from JSON.
    pub fn from_json(s: &str) -> TurntableResult<Self> {
        let opts: Self = serde_json::from_str(s)
            .map_err(|e| TurntableError::serde(format!("invalid encode options: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Check the options against the raw frame contract.
    pub fn validate(&self) -> TurntableResult<()> {
        if !SUPPORTED_PIX_FMTS.contains(&self.pix_fmt.as_str()) {
            return Err(TurntableError::validation(format!(
                "unsupported raw pixel format '{}' (expected one of {:?})",
                self.pix_fmt, SUPPORTED_PIX_FMTS
            )));
        }
        if self.ffmpeg_executable.as_os_str().is_empty() {
            return Err(TurntableError::validation("ffmpeg executable must be set"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/options.rs"]
mod tests;
