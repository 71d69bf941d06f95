//! Binary content detection.

use crate::node::FileNode;
use crate::options::BinaryDetection;
#[cfg(feature = "logging")]
use tracing;

/// Returns `true` if `content` holds a control byte that plain text never
/// carries.
///
/// Tab, line feed and the `0x0B..=0x0D` block (vertical tab, form feed,
/// carriage return) are allowed; every other byte below `0x20` marks the
/// content as binary. Bytes are compared unsigned, so UTF-8 multi-byte
/// sequences are never flagged.
pub fn is_binary(content: &[u8]) -> bool {
    content.iter().any(|&b| b < 0x09 || (b > 0x0D && b < 0x20))
}

/// Classifies `content` with the given strategy.
pub fn is_binary_with(content: &[u8], detection: BinaryDetection) -> bool {
    match detection {
        BinaryDetection::ControlBytes => is_binary(content),
        BinaryDetection::Inspector => content_inspector::inspect(content).is_binary(),
        BinaryDetection::None => false,
    }
}

/// Reads `node` and classifies its content. Unreadable files count as binary.
pub fn is_binary_node<N: FileNode>(node: &N, detection: BinaryDetection) -> bool {
    match node.read_bytes() {
        Ok(bytes) => is_binary_with(&bytes, detection),
        Err(_e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Treating unreadable file as binary: {}", _e);
            true
        }
    }
}
