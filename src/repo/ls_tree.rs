use crate::digest::Digest;
use crate::error::{Error, Result};
use crate::object::{Kind, Object};

impl super::Repo {
    /// Render a tree's entries for display, one row per entry, in stored
    /// order. `name_only` yields just the names; otherwise rows are
    /// `"<mode> <blob|tree> <40-hex>\t<name>"`.
    pub fn ls_tree(&self, oid: &Digest, name_only: bool) -> Result<Vec<String>> {
        let tree = match self.database.load(oid)? {
            Object::Tree(tree) => tree,
            other => {
                return Err(Error::InvalidArgument(format!(
                    "not a tree: {oid:x} is a {}",
                    other.kind()
                )))
            }
        };

        let rows = tree
            .entries()
            .iter()
            .map(|entry| {
                if name_only {
                    entry.name().to_owned()
                } else {
                    let kind = if entry.mode().is_tree() {
                        Kind::Tree
                    } else {
                        Kind::Blob
                    };
                    format!(
                        "{:o} {kind} {:x}\t{}",
                        entry.mode(),
                        entry.oid(),
                        entry.name()
                    )
                }
            })
            .collect();

        Ok(rows)
    }
}
