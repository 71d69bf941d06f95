//! # Treeclip
//!
//! `treeclip` walks a directory tree, skips binary files, and concatenates the
//! relative path and content of every text file into one buffer meant for the
//! clipboard. A preview pass counts the files first so that large exports can
//! be confirmed before any content is gathered.
//!
//! The file system, the operator and the clipboard are reached through the
//! [`FileNode`], [`Notifier`] and [`ClipboardSink`] traits. The crate ships
//! implementations of each for the local machine.
//!
//! # Features
//!
//! - `logging` (default): Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use treeclip::{ExportOptionsBuilder, FsNode, NonInteractive, SystemClipboard, run_export};
//!
//! let root = FsNode::open("src").expect("Failed to open directory");
//! let options = ExportOptionsBuilder::new().max_files(500).build();
//! let mut notifier = NonInteractive::new(true);
//! let mut clipboard = SystemClipboard::detect().expect("No clipboard available");
//!
//! let outcome = run_export(&root, "/home/me/project", &options, &mut notifier, &mut clipboard)
//!     .expect("Export failed");
//! println!("{:?}", outcome);
//! ```
//!
//! The two passes are also available on their own:
//!
//! ```
//! use treeclip::{Aggregate, ExportOptions, MemNode, collect_stats, export_tree};
//!
//! let root = MemNode::dir("/proj", vec![MemNode::file("/proj/a.txt", "hello")]);
//! let options = ExportOptions::default();
//!
//! assert_eq!(collect_stats(&root, &options), Aggregate::new(1, 5));
//! let result = export_tree(&root, "/proj", &options);
//! assert_eq!(result.buffer.as_text(), "File: a.txt\nhello\n\n");
//! ```

mod detect;
mod engine;
mod error;
mod node;
mod notify;
mod options;
mod orchestrator;
pub mod report;
mod sink;
mod types;

pub use detect::{is_binary, is_binary_node, is_binary_with};
pub use engine::{collect_stats, export_tree, strip_base_prefix};
pub use error::TreeclipError;
pub use node::{FileNode, FsNode, MemNode};
pub use notify::{NonInteractive, Notifier, TerminalNotifier};
pub use options::{BinaryDetection, BinaryMarker, ExportLimits, ExportOptions, ExportOptionsBuilder};
pub use orchestrator::{ExportOutcome, exceeds_limits, run_export};
pub use sink::{
    ClipboardProvider, ClipboardSink, FileSink, MemorySink, SystemClipboard, WriterSink,
    command_exists,
};
pub use types::{Aggregate, ExportBuffer, ExportResult, Segment};
