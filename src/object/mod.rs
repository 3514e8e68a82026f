//! The three object kinds and their canonical byte encoding.
//!
//! Every object is hashed and stored as `"<kind> <payload-len>\0<payload>"`.
//! Encoding is pure and deterministic: the same object always produces the
//! same bytes, and therefore the same identifier.

pub mod blob;
pub mod commit;
pub mod tree;

pub use blob::Blob;
pub use commit::{Commit, Signature, Timestamp};
pub use tree::{Tree, TreeEntry};

use crate::digest::Digest;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Blob,
    Tree,
    Commit,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Blob => "blob",
            Kind::Tree => "tree",
            Kind::Commit => "commit",
        }
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        match bytes {
            b"blob" => Ok(Kind::Blob),
            b"tree" => Ok(Kind::Tree),
            b"commit" => Ok(Kind::Commit),
            _ => Err(Error::MalformedObject(format!(
                "unknown object kind: '{}'",
                String::from_utf8_lossy(bytes)
            ))),
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    Blob(Blob),
    Tree(Tree),
    Commit(Commit),
}

impl Object {
    pub fn kind(&self) -> Kind {
        match self {
            Object::Blob(_) => Kind::Blob,
            Object::Tree(_) => Kind::Tree,
            Object::Commit(_) => Kind::Commit,
        }
    }

    /// The object's payload: the bytes after the header in the canonical
    /// encoding.
    pub fn payload(&self) -> Vec<u8> {
        match self {
            Object::Blob(blob) => blob.data().to_vec(),
            Object::Tree(tree) => tree.encode_entries(),
            Object::Commit(commit) => commit.text().into_bytes(),
        }
    }

    /// The canonical encoding `"<kind> <len>\0<payload>"`. These are the
    /// exact bytes that are hashed and (compressed) stored.
    pub fn encode(&self) -> Vec<u8> {
        let payload = self.payload();
        let mut formatted = Vec::with_capacity(payload.len() + 16);
        formatted.extend_from_slice(self.kind().as_str().as_bytes());
        formatted.push(b' ');
        formatted.extend_from_slice(payload.len().to_string().as_bytes());
        formatted.push(b'\0');
        formatted.extend_from_slice(&payload);
        formatted
    }

    /// The object's identifier: the digest of its canonical encoding.
    pub fn id(&self) -> Digest {
        Digest::new(&self.encode())
    }

    /// Decode a full object, header included.
    ///
    /// To parse a tree payload that has already been stripped of its header,
    /// use [`Tree::parse_entries`] instead.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let (kind, payload) = split_header(bytes)?;
        match kind {
            Kind::Blob => Ok(Object::Blob(Blob::new(payload.to_vec()))),
            Kind::Tree => Ok(Object::Tree(Tree::parse_entries(payload)?)),
            Kind::Commit => Ok(Object::Commit(Commit::parse(payload)?)),
        }
    }
}

/// Split and validate the `"<kind> <len>\0"` header, returning the kind and
/// the payload. The declared length must match the remaining byte count.
pub fn split_header(bytes: &[u8]) -> Result<(Kind, &[u8])> {
    let space_idx = memchr::memchr(b' ', bytes)
        .ok_or_else(|| Error::MalformedObject("no space in object header".to_owned()))?;
    let nul_idx = memchr::memchr(b'\0', bytes)
        .ok_or_else(|| Error::MalformedObject("no NUL in object header".to_owned()))?;
    if nul_idx < space_idx {
        return Err(Error::MalformedObject(
            "NUL before space in object header".to_owned(),
        ));
    }

    let kind = Kind::from_bytes(&bytes[..space_idx])?;

    let len: usize = std::str::from_utf8(&bytes[space_idx + 1..nul_idx])
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| Error::MalformedObject("invalid length in object header".to_owned()))?;

    let payload = &bytes[nul_idx + 1..];
    if payload.len() != len {
        return Err(Error::MalformedObject(format!(
            "object header declares {len} payload bytes, found {}",
            payload.len()
        )));
    }

    Ok((kind, payload))
}
