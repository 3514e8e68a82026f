mod init;

use camino::Utf8PathBuf;
use tempdir::TempDir;

use crate::repo::Repo;
use crate::Result;

pub const AUTHOR_NAME: &str = "Example Author";
pub const AUTHOR_EMAIL: &str = "author@example.com";

/// Create fixture files under `$root`. Each file's contents are its own
/// path followed by ` contents\n`, so distinct paths always produce
/// distinct blobs.
#[macro_export]
macro_rules! testfiles {
    ($root:expr, [$($path:expr),* $(,)?]) => {{
        use std::io::Write;
        $({
            let path = $root.join($path);
            std::fs::create_dir_all(path.parent().unwrap())?;
            writeln!(std::fs::File::create(&path)?, concat!($path, " contents"))?;
        })*
    }};
}

/// An initialised repository in a fresh temporary directory. The returned
/// `TempDir` must be kept alive for as long as the repo is used.
pub fn init_repo() -> Result<(TempDir, Repo)> {
    let root = TempDir::new("casket-test")?;
    let dir = Utf8PathBuf::from_path_buf(root.path().to_owned()).unwrap();
    Repo::init(&dir)?;
    let repo = Repo::open(dir)?;
    Ok((root, repo))
}
