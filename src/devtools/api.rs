//! # API Layer
//!
//! [`DevTools`] is the facade every front-end goes through. It owns the input
//! resolver and the writer that plays the role of stdout, so the CLI wires it to
//! the real process streams while tests wire it to in-memory fakes.
//!
//! Each operation takes a [`CancelToken`] by value. The token is checked
//! between stages (after input is resolved and before anything is written).

use crate::cancel::CancelToken;
use crate::commands::base64::{self, Mode};
use crate::commands::uuid::{self, Entropy, UuidVersion};
use crate::error::{DevToolsError, Result};
use crate::input::{ClipboardSource, InputResolver, StdinSource};
use crate::output::write_output;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Base64Request {
    pub mode: Mode,
    pub text: Option<String>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UuidRequest {
    pub version: UuidVersion,
    pub entropy: Entropy,
}

pub struct DevTools<S, C, W> {
    input: InputResolver<S, C>,
    stdout: W,
}

impl<S: StdinSource, C: ClipboardSource, W: Write> DevTools<S, C, W> {
    pub fn new(stdin: S, clipboard: C, stdout: W) -> Self {
        Self {
            input: InputResolver::new(stdin, clipboard),
            stdout,
        }
    }

    pub fn base64(&mut self, request: &Base64Request, cancel: CancelToken) -> Result<()> {
        let (origin, input) = self
            .input
            .resolve(request.text.as_deref(), request.input.as_deref())?;
        log::debug!("read {} bytes from {:?}", input.len(), origin);
        ensure_active(&cancel)?;

        let output = base64::run(request.mode, &input)?;
        ensure_active(&cancel)?;

        write_output(request.output.as_deref(), &output, &mut self.stdout)
    }

    pub fn uuid(&mut self, request: &UuidRequest, cancel: CancelToken) -> Result<()> {
        log::debug!("generating {:?} uuid from {:?}", request.version, request.entropy);
        let mut rng = uuid::random_source(request.entropy);
        let id = uuid::generate(request.version, rng.as_mut(), uuid::unix_millis_now())?;
        ensure_active(&cancel)?;

        let line = format!("{}\n", id.hyphenated());
        write_output(None, line.as_bytes(), &mut self.stdout)
    }

    pub fn into_stdout(self) -> W {
        self.stdout
    }
}

fn ensure_active(cancel: &CancelToken) -> Result<()> {
    if cancel.is_cancelled() {
        return Err(DevToolsError::Cancelled);
    }
    Ok(())
}
