mod commit_tree;
mod ls_tree;
mod write_tree;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::*;

use crate::database::Database;
use crate::error::{Error, Result};

/// The branch HEAD points at after `init`.
pub const DEFAULT_BRANCH: &str = "main";

#[derive(Debug)]
pub struct Repo {
    dir: Utf8PathBuf,
    pub database: Database,
}

impl Repo {
    /// Create the repository scaffolding: `.git/objects`, `.git/refs`, and a
    /// HEAD pointing at the default branch. Re-initialising an existing
    /// repository does nothing.
    pub fn init(path: &Utf8Path) -> Result<()> {
        trace!(%path, "Initialising repo");
        let git_dir = path.join(".git");
        if git_dir.exists() {
            warn!("Repo already exists, init will do nothing");
            return Ok(());
        }

        for dir in ["objects", "refs"] {
            let dir = git_dir.join(dir);
            trace!(path = %dir, "Creating directory");
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(
            git_dir.join("HEAD"),
            format!("ref: refs/heads/{DEFAULT_BRANCH}\n"),
        )?;

        Ok(())
    }

    pub fn open(dir: Utf8PathBuf) -> Result<Self> {
        let git_dir = dir.join(".git");
        if !git_dir.is_dir() {
            return Err(Error::InvalidArgument(format!("not a repository: {dir}")));
        }
        trace!(path = %dir, "Opened repo");

        let database = Database::new(git_dir);
        Ok(Self { dir, database })
    }

    pub fn workdir(&self) -> &Utf8Path {
        &self.dir
    }
}
