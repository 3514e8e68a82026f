use crate::error::{Error, Result};

/// A tree entry's mode, as git encodes it: octal, no leading zero.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct FileMode(pub u32);

impl FileMode {
    pub const DIRECTORY: FileMode = FileMode(0o040000);
    pub const EXECUTABLE: FileMode = FileMode(0o100755);
    pub const REGULAR: FileMode = FileMode(0o100644);

    /// Pick the entry mode for a regular file from its `st_mode`. Anything
    /// with the owner-executable bit set is stored as 100755, everything else
    /// as 100644.
    pub fn for_file(st_mode: u32) -> Self {
        if st_mode & libc::S_IXUSR != 0 {
            Self::EXECUTABLE
        } else {
            Self::REGULAR
        }
    }

    pub fn is_tree(self) -> bool {
        self == Self::DIRECTORY
    }

    /// Parse the octal mode field of a tree entry. Only the three modes this
    /// store writes are accepted.
    pub fn from_octal(bytes: &[u8]) -> Result<Self> {
        let mode = std::str::from_utf8(bytes)
            .ok()
            .and_then(|s| u32::from_str_radix(s, 8).ok())
            .ok_or_else(|| {
                Error::MalformedObject(format!(
                    "invalid tree entry mode: '{}'",
                    String::from_utf8_lossy(bytes)
                ))
            })?;
        match mode {
            0o100644 => Ok(Self::REGULAR),
            0o100755 => Ok(Self::EXECUTABLE),
            0o040000 => Ok(Self::DIRECTORY),
            _ => Err(Error::MalformedObject(format!(
                "unsupported tree entry mode: {mode:o}"
            ))),
        }
    }
}

impl std::fmt::Octal for FileMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:o}", self.0)
    }
}

impl std::fmt::Debug for FileMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FileMode({:o})", self.0)
    }
}
