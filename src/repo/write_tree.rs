use std::os::unix::prelude::MetadataExt;

use camino::Utf8Path;
use tracing::*;

use crate::digest::Digest;
use crate::error::Result;
use crate::filemode::FileMode;
use crate::object::{Blob, Object, Tree, TreeEntry};

impl super::Repo {
    /// Store `dir` and everything under it as tree and blob objects,
    /// returning the root tree's identifier.
    ///
    /// The walk is a post-order recursion: each subdirectory's tree is built
    /// and stored before the entry referencing it. A directory with no
    /// eligible children still yields a valid, empty tree. The repository
    /// metadata directory is excluded; symbolic links and other non-regular
    /// files are skipped.
    pub fn write_tree(&self, dir: &Utf8Path) -> Result<Digest> {
        trace!(path = %dir, "Building tree");
        let mut entries = Vec::new();

        for child in dir.read_dir_utf8()? {
            let child = child?;
            let name = child.file_name().to_owned();
            if name == ".git" {
                continue;
            }

            let file_type = child.file_type()?;
            if file_type.is_dir() {
                let oid = self.write_tree(child.path())?;
                entries.push(TreeEntry::new(FileMode::DIRECTORY, name, oid));
            } else if file_type.is_file() {
                let data = std::fs::read(child.path())?;
                let oid = self.database.store(&Object::Blob(Blob::new(data)))?;
                let mode = FileMode::for_file(child.metadata()?.mode());
                entries.push(TreeEntry::new(mode, name, oid));
            } else {
                trace!(path = %child.path(), "Skipping non-regular file");
            }
        }

        let tree = Tree::new(entries)?;
        self.database.store(&Object::Tree(tree))
    }
}
