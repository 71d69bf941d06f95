use crate::detect::{is_binary_node, is_binary_with};
use crate::node::FileNode;
use crate::options::{BinaryMarker, ExportOptions};
use crate::types::{Aggregate, ExportBuffer, ExportResult, Segment};
#[cfg(feature = "logging")]
use tracing;
/// Depth-first walk over the leaf files below a root, on an explicit stack.
///
/// Children are visited in listed order and a subdirectory is finished
/// before its next sibling, the same order as the recursive descent.
struct Walker<N> {
    stack: Vec<N>,
}
impl<N: FileNode> Walker<N> {
    fn new(root: &N) -> Self {
        Self {
            stack: vec![root.clone()],
        }
    }
}
impl<N: FileNode> Iterator for Walker<N> {
    type Item = N;
    fn next(&mut self) -> Option<N> {
        while let Some(node) = self.stack.pop() {
            if !node.is_directory() {
                return Some(node);
            }
            match node.children() {
                Ok(children) => self.stack.extend(children.into_iter().rev()),
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!(
                        "Cannot list {}, skipping directory: {}",
                        node.path().display(),
                        _e
                    );
                }
            }
        }
        None
    }
}
/// Strips `base + "/"` from the front of `path`. Returns `path` unchanged if
/// it does not start with that prefix.
pub fn strip_base_prefix<'a>(path: &'a str, base: &str) -> &'a str {
    let prefix = format!("{}/", base);
    path.strip_prefix(prefix.as_str()).unwrap_or(path)
}
/// Counts the non-binary files below `root` and sums their lengths.
pub fn collect_stats<N: FileNode>(root: &N, options: &ExportOptions) -> Aggregate {
    #[cfg(feature = "logging")]
    tracing::debug!("Collecting stats under {}", root.path().display());
    Walker::new(root)
        .map(|file| {
            if is_binary_node(&file, options.binary_detection) {
                Aggregate::ZERO
            } else {
                Aggregate::file(file.length())
            }
        })
        .sum()
}
/// Builds the export buffer for every file below `root`.
///
/// Headers carry the file path with `base_path_prefix` stripped. Files that
/// are binary or cannot be read leave a marker and are not counted.
pub fn export_tree<N: FileNode>(
    root: &N,
    base_path_prefix: &str,
    options: &ExportOptions,
) -> ExportResult {
    #[cfg(feature = "logging")]
    tracing::debug!("Exporting {}", root.path().display());
    let mut buffer = ExportBuffer::new();
    let mut stats = Aggregate::ZERO;
    for file in Walker::new(root) {
        let (segment, contribution) = export_file(&file, base_path_prefix, options);
        if let Some(segment) = segment {
            buffer.push(segment);
        }
        stats += contribution;
    }
    ExportResult { buffer, stats }
}
fn export_file<N: FileNode>(
    file: &N,
    base_path_prefix: &str,
    options: &ExportOptions,
) -> (Option<Segment>, Aggregate) {
    let read_error = || Segment::ReadError { name: file.name() };
    let bytes = match file.read_bytes() {
        Ok(bytes) => bytes,
        Err(_e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("{}", _e);
            return (Some(read_error()), Aggregate::ZERO);
        }
    };
    if is_binary_with(&bytes, options.binary_detection) {
        #[cfg(feature = "logging")]
        tracing::debug!("Binary file detected: {}", file.path().display());
        let segment = match options.binary_marker {
            BinaryMarker::ReadError => Some(read_error()),
            BinaryMarker::Distinct => Some(Segment::Binary { name: file.name() }),
            BinaryMarker::Omit => None,
        };
        return (segment, Aggregate::ZERO);
    }
    let Some(path) = file.path().to_str() else {
        #[cfg(feature = "logging")]
        tracing::debug!("Path is not valid UTF-8: {}", file.path().display());
        return (Some(read_error()), Aggregate::ZERO);
    };
    let relative_path = strip_base_prefix(path, base_path_prefix).to_string();
    let content = String::from_utf8_lossy(&bytes).into_owned();
    let size = content.len() as u64;
    (
        Some(Segment::File {
            relative_path,
            content,
        }),
        Aggregate::file(size),
    )
}
