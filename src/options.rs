use serde::{Deserialize, Serialize};
/// How file content is classified as binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BinaryDetection {
    /// Any control byte outside tab, line feed and `0x0B..=0x0D`.
    #[default]
    ControlBytes,
    /// `content_inspector` over the whole content.
    Inspector,
    /// Never binary. Unreadable files are still skipped.
    None,
}
/// What the exporter writes for a file classified as binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BinaryMarker {
    /// `Error reading file: <name>`, same as a genuine read failure.
    #[default]
    ReadError,
    /// `Skipped binary file: <name>`.
    Distinct,
    /// Nothing.
    Omit,
}
/// Preview thresholds above which the operator is asked before exporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportLimits {
    pub max_files: u64,
    pub max_kb: f64,
}
impl Default for ExportLimits {
    fn default() -> Self {
        Self {
            max_files: 100,
            max_kb: 1000.0,
        }
    }
}
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportOptions {
    pub binary_detection: BinaryDetection,
    pub binary_marker: BinaryMarker,
    pub limits: ExportLimits,
}
#[derive(Debug, Default)]
pub struct ExportOptionsBuilder {
    options: ExportOptions,
}
impl ExportOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn binary_marker(mut self, marker: BinaryMarker) -> Self {
        self.options.binary_marker = marker;
        self
    }
    pub fn max_files(mut self, count: u64) -> Self {
        self.options.limits.max_files = count;
        self
    }
    pub fn max_kb(mut self, kb: f64) -> Self {
        self.options.limits.max_kb = kb;
        self
    }
    pub fn build(self) -> ExportOptions {
        self.options
    }
}
