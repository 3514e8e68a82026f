use tracing::*;

use crate::digest::Digest;
use crate::error::{Error, Result};
use crate::object::{Commit, Object, Signature};

impl super::Repo {
    /// Assemble and store a commit referencing `tree`, with `parents` in the
    /// supplied order, returning the commit's identifier.
    pub fn commit_tree(
        &self,
        tree: Digest,
        parents: Vec<Digest>,
        message: &str,
        author: Signature,
    ) -> Result<Digest> {
        if message.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "commit message must not be empty".to_owned(),
            ));
        }

        trace!(tree = %tree.short(), parents = parents.len(), "Creating commit");
        let commit = Commit::new(tree, parents, author, message);
        self.database.store(&Object::Commit(commit))
    }
}
