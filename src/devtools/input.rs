//! Input resolution for commands that transform bytes.
//!
//! Sources are tried in a fixed order and the first one that applies wins:
//!
//! 1. explicit text
//! 2. a file path
//! 3. standard input, when it is redirected (pipe or file, not a character device)
//! 4. the system clipboard, when it is not empty
//!
//! Standard input and the clipboard sit behind the [`StdinSource`] and
//! [`ClipboardSource`] traits so the resolver can be exercised without a
//! terminal or a desktop session.

use crate::error::{DevToolsError, Result};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

pub trait StdinSource {
    /// Whether standard input is connected to something other than a
    /// character device (a terminal, `/dev/null`).
    fn is_redirected(&self) -> io::Result<bool>;

    fn read_all(&mut self) -> io::Result<Vec<u8>>;
}

pub trait ClipboardSource {
    fn read_text(&mut self) -> Result<String>;
}

/// Where resolved input came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOrigin {
    Text,
    File(PathBuf),
    Stdin,
    Clipboard,
}

/// The standard input of the running process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessStdin;

impl StdinSource for ProcessStdin {
    #[cfg(unix)]
    fn is_redirected(&self) -> io::Result<bool> {
        use std::os::unix::fs::FileTypeExt;

        let metadata = fs::metadata("/dev/stdin")?;
        Ok(!metadata.file_type().is_char_device())
    }

    #[cfg(not(unix))]
    fn is_redirected(&self) -> io::Result<bool> {
        use std::io::IsTerminal;

        Ok(!io::stdin().is_terminal())
    }

    fn read_all(&mut self) -> io::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        io::stdin().lock().read_to_end(&mut buffer)?;
        Ok(buffer)
    }
}

pub struct InputResolver<S, C> {
    stdin: S,
    clipboard: C,
}

impl<S: StdinSource, C: ClipboardSource> InputResolver<S, C> {
    pub fn new(stdin: S, clipboard: C) -> Self {
        Self { stdin, clipboard }
    }

    /// Returns the input bytes and their origin. Empty `text` or `path` values
    /// count as absent.
    pub fn resolve(
        &mut self,
        text: Option<&str>,
        path: Option<&Path>,
    ) -> Result<(InputOrigin, Vec<u8>)> {
        if let Some(text) = text.filter(|t| !t.is_empty()) {
            return Ok((InputOrigin::Text, text.as_bytes().to_vec()));
        }

        if let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) {
            let content = fs::read(path).map_err(|source| DevToolsError::ReadFile {
                path: path.to_path_buf(),
                source,
            })?;
            return Ok((InputOrigin::File(path.to_path_buf()), content));
        }

        if self
            .stdin
            .is_redirected()
            .map_err(DevToolsError::StatStdin)?
        {
            let content = self.stdin.read_all().map_err(DevToolsError::ReadStdin)?;
            return Ok((InputOrigin::Stdin, content));
        }

        let clipboard = self.clipboard.read_text()?;
        if !clipboard.is_empty() {
            return Ok((InputOrigin::Clipboard, clipboard.into_bytes()));
        }

        Err(DevToolsError::NoInput)
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use super::*;

    #[derive(Debug, Default)]
    pub struct FakeStdin {
        pub redirected: bool,
        pub content: Vec<u8>,
        pub fail_stat: bool,
        pub fail_read: bool,
        pub reads: usize,
    }

    impl FakeStdin {
        pub fn terminal() -> Self {
            Self::default()
        }

        pub fn piped(content: &[u8]) -> Self {
            Self {
                redirected: true,
                content: content.to_vec(),
                ..Self::default()
            }
        }
    }

    impl StdinSource for FakeStdin {
        fn is_redirected(&self) -> io::Result<bool> {
            if self.fail_stat {
                return Err(io::Error::new(io::ErrorKind::Other, "bad descriptor"));
            }
            Ok(self.redirected)
        }

        fn read_all(&mut self) -> io::Result<Vec<u8>> {
            self.reads += 1;
            if self.fail_read {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
            }
            Ok(self.content.clone())
        }
    }

    #[derive(Debug, Default)]
    pub struct FakeClipboard {
        pub content: String,
        pub fail: bool,
        pub reads: usize,
    }

    impl FakeClipboard {
        pub fn with(content: &str) -> Self {
            Self {
                content: content.to_string(),
                ..Self::default()
            }
        }

        pub fn broken() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }
    }

    impl ClipboardSource for FakeClipboard {
        fn read_text(&mut self) -> Result<String> {
            self.reads += 1;
            if self.fail {
                return Err(DevToolsError::Clipboard("no clipboard owner".to_string()));
            }
            Ok(self.content.clone())
        }
    }
}
