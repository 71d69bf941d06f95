//! Destinations for the finished export buffer.
//!
//! [`SystemClipboard`] pipes the text into whatever clipboard command the
//! platform provides. [`FileSink`] and [`WriterSink`] cover runs without a
//! clipboard, and [`MemorySink`] keeps the text for the caller.

use crate::error::TreeclipError;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
#[cfg(feature = "logging")]
use tracing;

/// Accepts the final export text.
pub trait ClipboardSink {
    fn accept(&mut self, text: &str) -> Result<(), TreeclipError>;

    /// Where accepted text ends up, for the completion notice.
    fn destination(&self) -> String;
}

/// Clipboard commands, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardProvider {
    Tmux,
    MacOS,
    Wsl,
    Wayland,
    Xsel,
    Xclip,
    Termux,
}

impl ClipboardProvider {
    fn command(self) -> (&'static str, Vec<&'static str>) {
        match self {
            Self::Tmux => ("tmux", vec!["load-buffer", "-w", "-"]),
            Self::MacOS => ("pbcopy", vec![]),
            Self::Wsl => ("clip.exe", vec![]),
            Self::Wayland => ("wl-copy", vec![]),
            Self::Xsel => ("xsel", vec!["-b", "-i"]),
            Self::Xclip => ("xclip", vec!["-selection", "clipboard", "-in"]),
            Self::Termux => ("termux-clipboard-set", vec![]),
        }
    }

    /// Providers usable on this machine, most preferred first.
    pub fn detect() -> Vec<ClipboardProvider> {
        let mut providers = Vec::with_capacity(3);
        if env::var_os("TMUX").is_some() && command_exists("tmux") {
            providers.push(Self::Tmux);
        }
        let candidates: &[ClipboardProvider] = if cfg!(target_os = "macos") {
            &[Self::MacOS]
        } else if cfg!(target_os = "windows") || env::var_os("WSL_DISTRO_NAME").is_some() {
            &[Self::Wsl]
        } else if cfg!(target_os = "android") {
            &[Self::Termux]
        } else {
            &[Self::Wayland, Self::Xsel, Self::Xclip]
        };
        for provider in candidates {
            let (cmd, _) = provider.command();
            if command_exists(cmd) {
                providers.push(*provider);
            }
        }
        providers
    }
}

/// Whether `command` is an existing file in one of the `PATH` directories.
pub fn command_exists(command: &str) -> bool {
    env::var_os("PATH")
        .map(|paths| env::split_paths(&paths).any(|dir| dir.join(command).is_file()))
        .unwrap_or(false)
}

/// The system clipboard, reached through an external command.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    provider: ClipboardProvider,
}

impl SystemClipboard {
    pub fn new(provider: ClipboardProvider) -> Self {
        Self { provider }
    }

    /// Picks the most preferred provider available here.
    pub fn detect() -> Result<Self, TreeclipError> {
        let provider = ClipboardProvider::detect()
            .into_iter()
            .next()
            .ok_or(TreeclipError::NoClipboard)?;
        #[cfg(feature = "logging")]
        tracing::debug!("Using clipboard provider {:?}", provider);
        Ok(Self::new(provider))
    }

    pub fn provider(&self) -> ClipboardProvider {
        self.provider
    }
}

impl ClipboardSink for SystemClipboard {
    fn accept(&mut self, text: &str) -> Result<(), TreeclipError> {
        let (cmd, args) = self.provider.command();
        execute_clipboard_command(cmd, &args, text)
    }

    fn destination(&self) -> String {
        "the clipboard".to_string()
    }
}

/// Spawns `cmd`, writes `text` to its stdin and waits for it to exit.
///
/// The child is always waited on, including when the write fails.
fn execute_clipboard_command(cmd: &str, args: &[&str], text: &str) -> Result<(), TreeclipError> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .spawn()
        .map_err(|e| TreeclipError::Clipboard(format!("failed to spawn {}: {}", cmd, e)))?;
    // Dropping stdin at the end of the match lets the command see end of input.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin not captured")),
    };
    let status = child
        .wait()
        .map_err(|e| TreeclipError::Clipboard(format!("failed to wait for {}: {}", cmd, e)))?;
    written.map_err(|e| TreeclipError::Clipboard(format!("failed to write to {}: {}", cmd, e)))?;
    if status.success() {
        Ok(())
    } else {
        Err(TreeclipError::Clipboard(format!(
            "{} exited with status: {}",
            cmd, status
        )))
    }
}

/// Writes the text to a file, replacing its contents.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ClipboardSink for FileSink {
    fn accept(&mut self, text: &str) -> Result<(), TreeclipError> {
        fs::write(&self.path, text).map_err(|e| TreeclipError::io(&self.path, e))
    }

    fn destination(&self) -> String {
        self.path.display().to_string()
    }
}

/// Writes the text to any [`Write`], such as stdout.
pub struct WriterSink<W> {
    writer: W,
    label: String,
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), "stdout")
    }
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, label: impl Into<String>) -> Self {
        Self {
            writer,
            label: label.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ClipboardSink for WriterSink<W> {
    fn accept(&mut self, text: &str) -> Result<(), TreeclipError> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(TreeclipError::Terminal)
    }

    fn destination(&self) -> String {
        self.label.clone()
    }
}

/// Keeps the last accepted text in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub text: Option<String>,
}

impl ClipboardSink for MemorySink {
    fn accept(&mut self, text: &str) -> Result<(), TreeclipError> {
        self.text = Some(text.to_string());
        Ok(())
    }

    fn destination(&self) -> String {
        "memory".to_string()
    }
}
