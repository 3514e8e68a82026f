use std::fmt::Display;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::bytes::Regex;

use crate::digest::Digest;
use crate::error::{Error, Result};

/// A commit timestamp: unix seconds plus the `±HHMM` offset git renders
/// after it.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Timestamp {
    pub unix: u64,
    pub offset: i64,
}

impl Timestamp {
    pub fn now() -> Self {
        let now = chrono::offset::Local::now();
        let unix = now
            .timestamp()
            .try_into()
            .expect("Time should be positive");
        let offset_seconds = now.offset().local_minus_utc() as i64;
        let offset = (offset_seconds / 3600) * 100 + (offset_seconds % 3600) / 60;

        Self { unix, offset }
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}{:04}",
            self.unix,
            if self.offset.is_negative() { '-' } else { '+' },
            self.offset.abs()
        )
    }
}

/// Authorship: `<name> <<email>> <unix-seconds> <±HHMM>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    pub email: String,
    pub when: Timestamp,
}

impl Signature {
    pub fn new(name: String, email: String) -> Self {
        Self {
            name,
            email,
            when: Timestamp::now(),
        }
    }

    /// Parse an `author` or `committer` line.
    ///
    /// ## Example
    /// `author Jamie Quigley <jamie@quigley.xyz> 1658312219 +0100`
    fn parse(bytes: &[u8]) -> Result<Self> {
        static REGEX: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"^(?:author|committer) (.+) <(\S+)> (\d+) ([+-]\d{4})$").unwrap()
        });

        let malformed = || {
            Error::MalformedObject(format!(
                "invalid signature line: '{}'",
                String::from_utf8_lossy(bytes)
            ))
        };

        let groups = REGEX.captures(bytes).ok_or_else(malformed)?;

        let text = |i| std::str::from_utf8(&groups[i]).map_err(|_| malformed());
        let name = text(1)?.to_owned();
        let email = text(2)?.to_owned();
        let unix = text(3)?.parse().map_err(|_| malformed())?;
        let offset = text(4)?.parse().map_err(|_| malformed())?;

        Ok(Self {
            name,
            email,
            when: Timestamp { unix, offset },
        })
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}> {}", self.name, self.email, self.when)
    }
}

/// A commit: one tree, zero or more parents, authorship, and a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    tree: Digest,
    parents: Vec<Digest>,
    author: Signature,
    committer: Signature,
    message: String,
}

impl Commit {
    /// Assemble a commit. The committer duplicates the author; the message
    /// is stored newline-terminated, as it appears in the payload.
    pub fn new(tree: Digest, parents: Vec<Digest>, author: Signature, message: &str) -> Self {
        let mut message = message.to_owned();
        if !message.ends_with('\n') {
            message.push('\n');
        }
        let committer = author.clone();

        Self {
            tree,
            parents,
            author,
            committer,
            message,
        }
    }

    pub fn tree(&self) -> &Digest {
        &self.tree
    }

    pub fn parents(&self) -> &[Digest] {
        &self.parents
    }

    pub fn author(&self) -> &Signature {
        &self.author
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The commit's payload text. Parent lines appear in caller-supplied
    /// order; a blank line separates the headers from the message.
    pub fn text(&self) -> String {
        let mut text = format!("tree {:x}\n", self.tree);
        for parent in &self.parents {
            text.push_str(&format!("parent {parent:x}\n"));
        }
        text.push_str(&format!("author {}\n", self.author));
        text.push_str(&format!("committer {}\n", self.committer));
        text.push('\n');
        text.push_str(&self.message);
        text
    }

    /// Parse a decompressed commit payload.
    ///
    /// ## Example
    /// ```text
    /// tree 090c4c5dd61d2e84c832c4cd306b66bf2fabc1f5
    /// parent e6a49274aa0893ce2e2928589100387aee220c5b
    /// author Jamie Quigley <jamie@quigley.xyz> 1658312219 +0100
    /// committer Jamie Quigley <jamie@quigley.xyz> 1658312219 +0100
    ///
    /// Some commit message.
    /// ```
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        static TREE_REGEX: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^tree [0-9a-f]{40}$").unwrap());
        static PARENT_REGEX: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^parent [0-9a-f]{40}$").unwrap());

        fn malformed(what: &str) -> Error {
            Error::MalformedObject(format!("commit: {what}"))
        }

        let mut lines = bytes.split(|&b| b == b'\n');

        let tree = {
            let line = lines.next().ok_or_else(|| malformed("empty payload"))?;
            if !TREE_REGEX.is_match(line) {
                return Err(malformed("missing or invalid tree line"));
            }
            id_at(line, "tree ".len())?
        };

        let mut parents = Vec::new();
        let author = {
            let line = loop {
                let line = lines
                    .next()
                    .ok_or_else(|| malformed("ends before author line"))?;
                if PARENT_REGEX.is_match(line) {
                    parents.push(id_at(line, "parent ".len())?);
                } else {
                    break line;
                }
            };
            Signature::parse(line)?
        };
        let committer = Signature::parse(
            lines
                .next()
                .ok_or_else(|| malformed("ends before committer line"))?,
        )?;

        match lines.next() {
            Some(b"") => {}
            _ => return Err(malformed("no blank line between headers and message")),
        }

        let message = lines.collect::<Vec<_>>().join(&b"\n"[..]);
        let message = String::from_utf8(message)
            .map_err(|_| malformed("invalid utf-8 in message"))?;

        Ok(Self {
            tree,
            parents,
            author,
            committer,
            message,
        })
    }
}

/// Extract the 40-hex identifier that starts at `prefix` in a header line.
fn id_at(line: &[u8], prefix: usize) -> Result<Digest> {
    let hex = std::str::from_utf8(&line[prefix..])
        .map_err(|_| Error::MalformedObject("invalid utf-8 in commit header".to_owned()))?;
    Digest::from_str(hex)
        .map_err(|_| Error::MalformedObject("invalid object id in commit header".to_owned()))
}
