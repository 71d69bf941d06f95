//! File tree abstraction walked by the collector and the exporter.
//!
//! [`FileNode`] is the narrow interface the core needs from a file system.
//! [`FsNode`] reads the real file system; [`MemNode`] holds a tree in memory.

use crate::error::TreeclipError;
use ignore::WalkBuilder;
use std::fs;
use std::io;
use std::mem;
use std::path::{Path, PathBuf};
use std::sync::Arc;
#[cfg(feature = "logging")]
use tracing;

/// A directory or a leaf file.
pub trait FileNode: Clone {
    fn is_directory(&self) -> bool;

    /// Children in listed order. Empty for leaf files.
    fn children(&self) -> Result<Vec<Self>, TreeclipError>;

    /// Length in bytes. Zero for directories.
    fn length(&self) -> u64;

    /// Absolute path of the node.
    fn path(&self) -> &Path;

    /// Last path component.
    fn name(&self) -> String {
        self.path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Full byte content. Fails for directories.
    fn read_bytes(&self) -> Result<Vec<u8>, TreeclipError>;
}

/// A node on the local file system.
///
/// Symlinks to directories are followed unless the target is a directory
/// already open above the link, which would loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsNode {
    path: PathBuf,
    is_dir: bool,
    len: u64,
    /// Canonical paths of this directory and every directory above it.
    /// Empty for files.
    chain: Vec<PathBuf>,
}

impl FsNode {
    /// Resolves `path` to an absolute, canonical node.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TreeclipError> {
        let path = path.as_ref();
        let path = fs::canonicalize(path).map_err(|e| TreeclipError::io(path, e))?;
        let metadata = fs::metadata(&path).map_err(|e| TreeclipError::io(&path, e))?;
        let is_dir = metadata.is_dir();
        Ok(Self {
            len: if is_dir { 0 } else { metadata.len() },
            chain: if is_dir { vec![path.clone()] } else { Vec::new() },
            is_dir,
            path,
        })
    }
}

impl FileNode for FsNode {
    fn is_directory(&self) -> bool {
        self.is_dir
    }

    fn children(&self) -> Result<Vec<Self>, TreeclipError> {
        if !self.is_dir {
            return Ok(Vec::new());
        }
        let mut builder = WalkBuilder::new(&self.path);
        builder
            .standard_filters(false)
            .max_depth(Some(1))
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        let mut children = Vec::new();
        for result in builder.build() {
            let entry = result.map_err(|e| TreeclipError::Walk(e.to_string()))?;
            if entry.depth() == 0 {
                continue;
            }
            let file_type = entry.file_type();
            let is_link = file_type.is_some_and(|t| t.is_symlink());
            let is_dir = if is_link {
                entry.path().is_dir()
            } else {
                file_type.is_some_and(|t| t.is_dir())
            };
            if !is_dir {
                // Follows symlinks so a linked file reports its target's length.
                let len = fs::metadata(entry.path()).map(|m| m.len()).unwrap_or(0);
                children.push(FsNode {
                    path: entry.into_path(),
                    is_dir,
                    len,
                    chain: Vec::new(),
                });
                continue;
            }
            let real = if is_link {
                match fs::canonicalize(entry.path()) {
                    Ok(real) => real,
                    Err(_e) => {
                        #[cfg(feature = "logging")]
                        tracing::warn!("Cannot resolve {}: {}", entry.path().display(), _e);
                        continue;
                    }
                }
            } else {
                // The parent is canonical, so a plain subdirectory is too.
                self.chain
                    .last()
                    .map(|parent| parent.join(entry.file_name()))
                    .unwrap_or_else(|| entry.path().to_path_buf())
            };
            if self.chain.contains(&real) {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping cyclic link {}", entry.path().display());
                continue;
            }
            let mut chain = self.chain.clone();
            chain.push(real);
            children.push(FsNode {
                path: entry.into_path(),
                is_dir,
                len: 0,
                chain,
            });
        }
        Ok(children)
    }

    fn length(&self) -> u64 {
        self.len
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn read_bytes(&self) -> Result<Vec<u8>, TreeclipError> {
        fs::read(&self.path).map_err(|e| TreeclipError::io(&self.path, e))
    }
}

#[derive(Debug, Clone)]
enum MemKind {
    Dir(Arc<Vec<MemNode>>),
    Unlistable,
    File(Arc<[u8]>),
    Unreadable(u64),
}

/// An in-memory node, for callers that already hold the content.
#[derive(Debug, Clone)]
pub struct MemNode {
    path: PathBuf,
    kind: MemKind,
}

impl MemNode {
    pub fn dir(path: impl Into<PathBuf>, children: Vec<MemNode>) -> Self {
        Self {
            path: path.into(),
            kind: MemKind::Dir(Arc::new(children)),
        }
    }

    /// A directory whose children can never be listed.
    pub fn unlistable(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: MemKind::Unlistable,
        }
    }

    pub fn file(path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        let content: Vec<u8> = content.into();
        Self {
            path: path.into(),
            kind: MemKind::File(Arc::from(content)),
        }
    }

    /// A file of `len` bytes whose reads always fail.
    pub fn unreadable(path: impl Into<PathBuf>, len: u64) -> Self {
        Self {
            path: path.into(),
            kind: MemKind::Unreadable(len),
        }
    }
}

// Tears nested directories down on a heap stack; the derived drop recurses
// once per level and overflows on deep trees.
impl Drop for MemNode {
    fn drop(&mut self) {
        let MemKind::Dir(children) = &mut self.kind else {
            return;
        };
        let Some(children) = Arc::get_mut(children) else {
            return;
        };
        let mut stack = mem::take(children);
        while let Some(mut node) = stack.pop() {
            if let MemKind::Dir(children) = &mut node.kind {
                if let Some(children) = Arc::get_mut(children) {
                    stack.append(children);
                }
            }
        }
    }
}

impl FileNode for MemNode {
    fn is_directory(&self) -> bool {
        matches!(self.kind, MemKind::Dir(_) | MemKind::Unlistable)
    }

    fn children(&self) -> Result<Vec<Self>, TreeclipError> {
        match &self.kind {
            MemKind::Dir(children) => Ok(children.as_ref().clone()),
            MemKind::Unlistable => Err(TreeclipError::Walk(format!(
                "cannot list {}",
                self.path.display()
            ))),
            _ => Ok(Vec::new()),
        }
    }

    fn length(&self) -> u64 {
        match &self.kind {
            MemKind::Dir(_) | MemKind::Unlistable => 0,
            MemKind::File(content) => content.len() as u64,
            MemKind::Unreadable(len) => *len,
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn read_bytes(&self) -> Result<Vec<u8>, TreeclipError> {
        match &self.kind {
            MemKind::File(content) => Ok(content.to_vec()),
            MemKind::Dir(_) | MemKind::Unlistable => Err(TreeclipError::io(
                &self.path,
                io::Error::new(io::ErrorKind::IsADirectory, "is a directory"),
            )),
            MemKind::Unreadable(_) => Err(TreeclipError::io(
                &self.path,
                io::Error::new(io::ErrorKind::PermissionDenied, "unreadable"),
            )),
        }
    }
}
