use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Count and total byte size of the text files in a subtree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Aggregate {
    /// Number of files.
    pub count: u64,
    /// Sum of their sizes in bytes.
    pub total_bytes: u64,
}

impl Aggregate {
    pub const ZERO: Aggregate = Aggregate {
        count: 0,
        total_bytes: 0,
    };

    pub fn new(count: u64, total_bytes: u64) -> Self {
        Self { count, total_bytes }
    }

    /// A single file of `bytes` bytes.
    pub fn file(bytes: u64) -> Self {
        Self::new(1, bytes)
    }

    /// Total size in kilobytes (1 KB = 1024 bytes).
    pub fn size_kb(&self) -> f64 {
        self.total_bytes as f64 / 1024.0
    }

    /// Total size in kilobytes rounded to a whole number, halves away from zero.
    pub fn rounded_kb(&self) -> u64 {
        self.size_kb().round() as u64
    }
}

impl Add for Aggregate {
    type Output = Aggregate;
    fn add(self, rhs: Aggregate) -> Aggregate {
        Aggregate {
            count: self.count + rhs.count,
            total_bytes: self.total_bytes + rhs.total_bytes,
        }
    }
}

impl AddAssign for Aggregate {
    fn add_assign(&mut self, rhs: Aggregate) {
        *self = *self + rhs;
    }
}

impl Sum for Aggregate {
    fn sum<I: Iterator<Item = Aggregate>>(iter: I) -> Aggregate {
        iter.fold(Aggregate::ZERO, Add::add)
    }
}

/// One piece of the export buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// An exported text file.
    File {
        /// Path relative to the base path.
        relative_path: String,
        /// Decoded content.
        content: String,
    },
    /// A file that could not be read, or a binary file when markers are not
    /// distinguished.
    ReadError { name: String },
    /// A binary file, when binary files are reported separately.
    Binary { name: String },
}

impl Segment {
    /// Appends the textual form of this segment to `out`.
    pub fn write_to(&self, out: &mut String) {
        match self {
            Segment::File {
                relative_path,
                content,
            } => {
                out.push_str("File: ");
                out.push_str(relative_path);
                out.push('\n');
                out.push_str(content);
                out.push_str("\n\n");
            }
            Segment::ReadError { name } => {
                out.push_str("Error reading file: ");
                out.push_str(name);
                out.push_str("\n\n");
            }
            Segment::Binary { name } => {
                out.push_str("Skipped binary file: ");
                out.push_str(name);
                out.push_str("\n\n");
            }
        }
    }
}

/// Ordered, append-only export output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportBuffer {
    segments: Vec<Segment>,
}

impl ExportBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Renders all segments in order.
    pub fn as_text(&self) -> String {
        let mut out = String::with_capacity(1024);
        for segment in &self.segments {
            segment.write_to(&mut out);
        }
        out
    }
}

/// The result of an export pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    /// Rendered segments, one per visited file.
    pub buffer: ExportBuffer,
    /// Count and size of the files whose content was exported.
    pub stats: Aggregate,
}
