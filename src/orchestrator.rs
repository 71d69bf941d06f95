//! Preview, confirm, export, hand off.

use crate::engine::{collect_stats, export_tree};
use crate::error::TreeclipError;
use crate::node::FileNode;
use crate::notify::Notifier;
use crate::options::{ExportLimits, ExportOptions};
use crate::sink::ClipboardSink;
use crate::types::Aggregate;
#[cfg(feature = "logging")]
use tracing;

/// How a [`run_export`] call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The buffer went to the sink. Holds the totals of the export pass.
    Exported(Aggregate),
    /// The operator declined. Holds the preview that was shown.
    Declined(Aggregate),
}

/// Whether a preview is large enough to ask the operator first.
pub fn exceeds_limits(preview: &Aggregate, limits: &ExportLimits) -> bool {
    preview.count > limits.max_files || preview.size_kb() > limits.max_kb
}

/// Exports the text files under `root` to `sink`.
///
/// A preview pass counts the files first; if it exceeds the configured limits
/// the notifier must confirm before anything is exported. The export pass
/// reads every file again, so its totals can differ from the preview when
/// files change in between.
///
/// # Errors
///
/// Fails before any traversal if `root` is not a directory or `base_path` is
/// empty, and afterwards only if the notifier or the sink fails.
pub fn run_export<N, T, S>(
    root: &N,
    base_path: &str,
    options: &ExportOptions,
    notifier: &mut T,
    sink: &mut S,
) -> Result<ExportOutcome, TreeclipError>
where
    N: FileNode,
    T: Notifier + ?Sized,
    S: ClipboardSink + ?Sized,
{
    if !root.is_directory() {
        return Err(TreeclipError::InvalidPath(format!(
            "{} is not a directory",
            root.path().display()
        )));
    }
    if base_path.is_empty() {
        return Err(TreeclipError::InvalidPath("base path is empty".to_string()));
    }

    let preview = collect_stats(root, options);
    #[cfg(feature = "logging")]
    tracing::info!(
        files = preview.count,
        bytes = preview.total_bytes,
        "Preview of {}",
        root.path().display()
    );
    if exceeds_limits(&preview, &options.limits)
        && !notifier.confirm_large_export(&preview, &options.limits)?
    {
        #[cfg(feature = "logging")]
        tracing::info!("Export declined");
        return Ok(ExportOutcome::Declined(preview));
    }

    let result = export_tree(root, base_path, options);
    sink.accept(&result.buffer.as_text())?;
    notifier.export_completed(&result.stats, &sink.destination())?;
    #[cfg(feature = "logging")]
    tracing::info!(
        files = result.stats.count,
        bytes = result.stats.total_bytes,
        "Exported to {}",
        sink.destination()
    );
    Ok(ExportOutcome::Exported(result.stats))
}
