use crate::digest::Digest;
use crate::error::{Error, Result};
use crate::filemode::FileMode;

/// One row of a directory listing: a mode, a path segment, and the
/// identifier of the blob or tree it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    mode: FileMode,
    name: String,
    oid: Digest,
}

impl TreeEntry {
    pub fn new(mode: FileMode, name: String, oid: Digest) -> Self {
        Self { mode, name, oid }
    }

    pub fn mode(&self) -> FileMode {
        self.mode
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn oid(&self) -> &Digest {
        &self.oid
    }
}

/// A directory listing. Entry order is part of the object's identity: the
/// encoded entries are concatenated in order and hashed, so two trees with
/// the same entries in different orders would have different identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    /// Build a tree from unordered entries. Entries are sorted by plain byte
    /// order of their names; names must be unique within one tree.
    ///
    /// Note that git proper sorts directories as if their name carried a
    /// trailing `/`. This store uses the plain rule everywhere, so the two
    /// disagree on a tree containing both `foo-bar` and a directory `foo`.
    pub fn new(mut entries: Vec<TreeEntry>) -> Result<Self> {
        entries.sort_unstable_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));

        for pair in entries.windows(2) {
            if pair[0].name == pair[1].name {
                return Err(Error::InvalidArgument(format!(
                    "duplicate tree entry name: '{}'",
                    pair[0].name
                )));
            }
        }

        Ok(Self { entries })
    }

    /// Entries in stored order.
    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    /// Encode the entry stream: per entry, `"<mode> <name>\0"` followed by
    /// the 20 raw identifier bytes.
    pub fn encode_entries(&self) -> Vec<u8> {
        let mut data = Vec::new();
        for entry in &self.entries {
            data.extend_from_slice(format!("{:o}", entry.mode).as_bytes());
            data.push(b' ');
            data.extend_from_slice(entry.name.as_bytes());
            data.push(b'\0');
            data.extend_from_slice(&*entry.oid);
        }
        data
    }

    /// Parse an entry stream with no object header. Stored order is
    /// preserved; entries are not re-sorted.
    pub fn parse_entries(mut bytes: &[u8]) -> Result<Self> {
        let mut entries = Vec::new();

        while !bytes.is_empty() {
            let space_idx = memchr::memchr(b' ', bytes).ok_or_else(|| {
                Error::MalformedObject("truncated tree entry: no space after mode".to_owned())
            })?;
            let mode = FileMode::from_octal(&bytes[..space_idx])?;

            let rest = &bytes[space_idx + 1..];
            let nul_idx = memchr::memchr(b'\0', rest).ok_or_else(|| {
                Error::MalformedObject("truncated tree entry: no NUL after name".to_owned())
            })?;
            let name = std::str::from_utf8(&rest[..nul_idx])
                .map_err(|_| {
                    Error::MalformedObject("invalid utf-8 in tree entry name".to_owned())
                })?
                .to_owned();
            if name.is_empty() || name.contains('/') {
                return Err(Error::MalformedObject(format!(
                    "invalid tree entry name: '{name}'"
                )));
            }

            let rest = &rest[nul_idx + 1..];
            if rest.len() < 20 {
                return Err(Error::MalformedObject(
                    "truncated tree entry: short object id".to_owned(),
                ));
            }
            let oid = Digest(rest[..20].try_into().unwrap());

            entries.push(TreeEntry { mode, name, oid });
            bytes = &rest[20..];
        }

        Ok(Self { entries })
    }
}
