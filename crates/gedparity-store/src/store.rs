//! Filesystem snapshot store.

use std::fs;
use std::path::{Path, PathBuf};

use bytesize::ByteSize;
use path_clean::PathClean;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use walkdir::WalkDir;

use crate::errors::{StoreError, StoreResult};
use crate::text::decode_dropping_invalid;

const INDEX_FILE: &str = "index.json";

/// One stored snapshot, as recorded in the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    /// Relative slash path under the store root.
    pub name: String,
    /// Size in bytes as stored.
    pub bytes: u64,
    /// sha256 of the stored bytes, lowercase hex.
    pub digest: String,
}

impl SnapshotEntry {
    /// Human-readable size, e.g. `1.2 kB`.
    pub fn human_size(&self) -> String {
        ByteSize::b(self.bytes).to_string()
    }
}

/// Manifest of all snapshots in a store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotIndex {
    /// Unix timestamp of index generation.
    pub generated_at: i64,
    pub entries: Vec<SnapshotEntry>,
}

/// Directory tree of golden-reference documents.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    root: PathBuf,
}

impl SnapshotStore {
    /// Open a store at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|_| StoreError::RootUnavailable(root.clone()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write a snapshot, creating parent directories as needed.
    pub fn write(&self, name: &str, text: &str) -> StoreResult<()> {
        let path = self.resolve(name)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, text.as_bytes())?;
        Ok(())
    }

    /// Read a snapshot as text, dropping undecodable bytes.
    ///
    /// A missing snapshot is [`StoreError::NotFound`], never an opaque I/O
    /// error.
    pub fn read(&self, name: &str) -> StoreResult<String> {
        let path = self.resolve(name)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(decode_dropping_invalid(&bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn exists(&self, name: &str) -> bool {
        self.resolve(name).map(|p| p.is_file()).unwrap_or(false)
    }

    /// List all snapshots, sorted by name.
    ///
    /// Deterministic: the same tree always lists in the same order,
    /// regardless of directory iteration order.
    pub fn list(&self) -> StoreResult<Vec<SnapshotEntry>> {
        let mut entries = Vec::new();
        for item in WalkDir::new(&self.root).follow_links(false) {
            let item = item.map_err(|e| {
                StoreError::Io(
                    e.into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("filesystem loop")),
                )
            })?;
            if !item.file_type().is_file() {
                continue;
            }
            let rel = item
                .path()
                .strip_prefix(&self.root)
                .expect("walkdir yields paths under root");
            let name = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            if name == INDEX_FILE {
                continue;
            }
            let bytes = fs::read(item.path())?;
            entries.push(SnapshotEntry {
                name,
                bytes: bytes.len() as u64,
                digest: hex::encode(Sha256::digest(&bytes)),
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Build the index manifest for the current store contents.
    pub fn index(&self) -> StoreResult<SnapshotIndex> {
        Ok(SnapshotIndex {
            generated_at: time::OffsetDateTime::now_utc().unix_timestamp(),
            entries: self.list()?,
        })
    }

    /// Build the index and write it to `index.json` under the root.
    pub fn write_index(&self) -> StoreResult<SnapshotIndex> {
        let index = self.index()?;
        let json = serde_json::to_string_pretty(&index)?;
        fs::write(self.root.join(INDEX_FILE), json)?;
        Ok(index)
    }

    /// Validate and resolve a snapshot name to an on-disk path.
    ///
    /// Names are relative slash paths; anything absolute or escaping the
    /// root is rejected before touching the filesystem.
    fn resolve(&self, name: &str) -> StoreResult<PathBuf> {
        if name.is_empty() || name == INDEX_FILE {
            return Err(StoreError::InvalidName(name.to_string()));
        }
        let cleaned = Path::new(name).clean();
        if cleaned.is_absolute()
            || cleaned
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir))
            || cleaned == Path::new(".")
        {
            return Err(StoreError::InvalidName(name.to_string()));
        }
        Ok(self.root.join(cleaned))
    }
}
