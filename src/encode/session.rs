use std::ffi::OsStr;
use std::io::Write as _;
use std::path::Path;
use std::process::{Child, ChildStdin, Command, ExitStatus, Stdio};

use crate::foundation::error::{TurntableError, TurntableResult};

/// One running encoder process fed through its stdin.
///
/// The session owns the child for its whole lifetime. [`EncoderSession::finish`] closes stdin
/// and waits for the exit status; if the session is dropped instead (a frame producer failed, a
/// write broke, the caller bailed out) `Drop` does the same, so the process is always waited on
/// exactly once and never left orphaned.
pub struct EncoderSession {
    program: String,
    child: Option<Child>,
    stdin: Option<ChildStdin>,
    frames_written: u64,
}

impl EncoderSession {
    /// Spawn `program` with `args`, stdin piped, stdout discarded, stderr inherited.
    pub fn spawn<I, S>(program: &Path, args: I) -> TurntableResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let name = program.display().to_string();
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| {
                TurntableError::encoder_process(format!(
                    "failed to spawn '{name}' (is it installed and on PATH?): {e}"
                ))
            })?;

        let stdin = match child.stdin.take() {
            Some(stdin) => stdin,
            None => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(TurntableError::encoder_process(format!(
                    "failed to open '{name}' stdin (unexpected)"
                )));
            }
        };

        tracing::debug!(program = %name, pid = child.id(), "encoder spawned");
        Ok(Self {
            program: name,
            child: Some(child),
            stdin: Some(stdin),
            frames_written: 0,
        })
    }

    /// Write one frame and flush it before returning.
    ///
    /// Blocks while the encoder is not keeping up. A closed pipe surfaces as
    /// [`TurntableError::BrokenPipe`].
    pub fn write_frame(&mut self, frame: &[u8]) -> TurntableResult<()> {
        let Some(stdin) = self.stdin.as_mut() else {
            return Err(TurntableError::encoder_process(format!(
                "'{}' input is already closed",
                self.program
            )));
        };

        stdin
            .write_all(frame)
            .and_then(|()| stdin.flush())
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::BrokenPipe => TurntableError::BrokenPipe(e),
                _ => TurntableError::Other(anyhow::Error::new(e).context(format!(
                    "failed to write frame {} to '{}'",
                    self.frames_written, self.program
                ))),
            })?;

        self.frames_written += 1;
        Ok(())
    }

    /// Number of frames written so far.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// OS process id of the encoder, until it has been waited on.
    pub fn id(&self) -> Option<u32> {
        self.child.as_ref().map(Child::id)
    }

    /// `true` until the input stream has been closed.
    pub fn is_input_open(&self) -> bool {
        self.stdin.is_some()
    }

    /// Close the input stream, wait for the encoder and check its exit status.
    pub fn finish(mut self) -> TurntableResult<()> {
        let status = self.close_and_wait()?;
        tracing::debug!(
            program = %self.program,
            frames = self.frames_written,
            %status,
            "encoder finished"
        );
        if !status.success() {
            return Err(TurntableError::encoder_process(format!(
                "'{}' exited with status {status}",
                self.program
            )));
        }
        Ok(())
    }

    fn close_and_wait(&mut self) -> TurntableResult<ExitStatus> {
        drop(self.stdin.take());
        let mut child = self.child.take().ok_or_else(|| {
            TurntableError::encoder_process(format!("'{}' was already waited on", self.program))
        })?;
        child.wait().map_err(|e| {
            TurntableError::encoder_process(format!(
                "failed to wait for '{}' to finish: {e}",
                self.program
            ))
        })
    }
}

impl Drop for EncoderSession {
    fn drop(&mut self) {
        if self.child.is_none() {
            return;
        }
        match self.close_and_wait() {
            Ok(status) => tracing::warn!(
                program = %self.program,
                frames = self.frames_written,
                %status,
                "encoder session aborted"
            ),
            Err(e) => tracing::warn!(program = %self.program, error = %e, "encoder cleanup failed"),
        }
    }
}

impl std::fmt::Debug for EncoderSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncoderSession")
            .field("program", &self.program)
            .field("pid", &self.id())
            .field("input_open", &self.is_input_open())
            .field("frames_written", &self.frames_written)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/session.rs"]
mod tests;
