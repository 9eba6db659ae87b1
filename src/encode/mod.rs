pub(crate) mod ffmpeg;
pub(crate) mod options;
pub(crate) mod session;
