use crate::error::{DevToolsError, Result};
use crate::input::ClipboardSource;
use std::process::{Command, Output};

/// The desktop clipboard, read through the platform's command-line tools.
/// - macOS: pbpaste
/// - Linux: xclip, xsel or wl-paste, whichever is installed
/// - Windows: powershell Get-Clipboard
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSource for SystemClipboard {
    fn read_text(&mut self) -> Result<String> {
        get_from_clipboard()
    }
}

pub fn get_from_clipboard() -> Result<String> {
    #[cfg(target_os = "macos")]
    {
        get_macos()
    }

    #[cfg(target_os = "linux")]
    {
        get_linux()
    }

    #[cfg(target_os = "windows")]
    {
        get_windows()
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        Err(DevToolsError::Clipboard(
            "clipboard not supported on this platform".to_string(),
        ))
    }
}

#[cfg(target_os = "macos")]
fn get_macos() -> Result<String> {
    let output = Command::new("pbpaste")
        .output()
        .map_err(|e| DevToolsError::Clipboard(format!("failed to execute pbpaste: {}", e)))?;

    clipboard_text("pbpaste", output)
}

#[cfg(target_os = "linux")]
fn get_linux() -> Result<String> {
    const READERS: [(&str, &[&str]); 3] = [
        ("xclip", &["-selection", "clipboard", "-o"]),
        ("xsel", &["--clipboard", "--output"]),
        ("wl-paste", &["--no-newline"]),
    ];

    let mut last_failure = None;
    for (program, args) in READERS {
        match Command::new(program).args(args).output() {
            Ok(output) if output.status.success() => {
                log::debug!("read clipboard with {}", program);
                return clipboard_text(program, output);
            }
            Ok(_) => last_failure = Some(format!("{} exited with error", program)),
            Err(e) => log::debug!("{} unavailable: {}", program, e),
        }
    }

    Err(DevToolsError::Clipboard(last_failure.unwrap_or_else(|| {
        "failed to execute xclip, xsel or wl-paste. Install one of them.".to_string()
    })))
}

#[cfg(target_os = "windows")]
fn get_windows() -> Result<String> {
    let output = Command::new("powershell")
        .args(["-NoProfile", "-Command", "Get-Clipboard -Raw"])
        .output()
        .map_err(|e| DevToolsError::Clipboard(format!("failed to execute powershell: {}", e)))?;

    clipboard_text("powershell", output)
}

fn clipboard_text(program: &str, output: Output) -> Result<String> {
    if !output.status.success() {
        return Err(DevToolsError::Clipboard(format!(
            "{} exited with error",
            program
        )));
    }

    String::from_utf8(output.stdout)
        .map_err(|e| DevToolsError::Clipboard(format!("invalid UTF-8 in clipboard: {}", e)))
}
