// src/clipboard.rs

use std::io::Write as _;
use std::process::{Command, Stdio};

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};

/// One way of getting text onto the clipboard.
pub trait ClipboardWriter {
    fn label(&self) -> &'static str;
    fn write(&self, text: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied { via: &'static str },
    /// Every writer failed; the value comes back for manual copying.
    Manual(String),
}

/// Tries each writer in order. Never fails: exhausting the chain yields
/// `Manual` with the original text.
pub fn copy_text(writers: &[&dyn ClipboardWriter], text: &str) -> CopyOutcome {
    for writer in writers {
        match writer.write(text) {
            Ok(()) => {
                tracing::debug!(via = writer.label(), "copied to clipboard");
                return CopyOutcome::Copied {
                    via: writer.label(),
                };
            }
            Err(err) => {
                tracing::debug!(via = writer.label(), %err, "clipboard writer failed");
            }
        }
    }
    CopyOutcome::Manual(text.to_owned())
}

/// Default chain: the platform clipboard tool, then an OSC 52 escape.
pub fn copy_with_defaults(text: &str) -> CopyOutcome {
    copy_text(&[&SystemClipboard, &Osc52Clipboard], text)
}

/// Platform clipboard tool, fed over stdin.
pub struct SystemClipboard;

impl SystemClipboard {
    fn candidates() -> &'static [&'static [&'static str]] {
        #[cfg(target_os = "macos")]
        return &[&["pbcopy"]];
        #[cfg(target_os = "windows")]
        return &[&["clip"]];
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        return &[&["wl-copy"], &["xclip", "-selection", "clipboard"]];
    }

    fn pipe_to(argv: &[&str], text: &str) -> anyhow::Result<()> {
        let mut child = Command::new(argv[0])
            .args(&argv[1..])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        child
            .stdin
            .take()
            .ok_or_else(|| anyhow::anyhow!("no stdin handle for {}", argv[0]))?
            .write_all(text.as_bytes())?;
        let status = child.wait()?;
        anyhow::ensure!(status.success(), "{} exited with {status}", argv[0]);
        Ok(())
    }
}

impl ClipboardWriter for SystemClipboard {
    fn label(&self) -> &'static str {
        "system clipboard"
    }

    fn write(&self, text: &str) -> anyhow::Result<()> {
        let mut last_err = None;
        for argv in Self::candidates() {
            match Self::pipe_to(argv, text) {
                Ok(()) => return Ok(()),
                Err(err) => last_err = Some(err),
            }
        }
        Err(last_err.unwrap_or_else(|| anyhow::anyhow!("no clipboard tool available")))
    }
}

/// OSC 52: asks the hosting terminal to set the clipboard. Works over SSH
/// where no local tool does.
pub struct Osc52Clipboard;

impl ClipboardWriter for Osc52Clipboard {
    fn label(&self) -> &'static str {
        "terminal (OSC 52)"
    }

    fn write(&self, text: &str) -> anyhow::Result<()> {
        let mut out = std::io::stdout().lock();
        write!(out, "\x1b]52;c;{}\x07", BASE64_STANDARD.encode(text))?;
        out.flush()?;
        Ok(())
    }
}
