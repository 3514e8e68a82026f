use camino::Utf8PathBuf;
use tempdir::TempDir;

use crate::repo::{Repo, DEFAULT_BRANCH};
use crate::{Error, Result};

#[test]
fn test_init_creates_scaffolding() -> Result<()> {
    let (root, _repo) = super::init_repo()?;

    let git_dir = root.path().join(".git");
    assert!(git_dir.join("objects").is_dir());
    assert!(git_dir.join("refs").is_dir());
    assert_eq!(
        std::fs::read_to_string(git_dir.join("HEAD"))?,
        format!("ref: refs/heads/{DEFAULT_BRANCH}\n")
    );

    Ok(())
}

#[test]
fn test_reinit_is_a_noop() -> Result<()> {
    let (root, _repo) = super::init_repo()?;
    let dir = Utf8PathBuf::from_path_buf(root.path().to_owned()).unwrap();

    Repo::init(&dir)?;
    assert!(root.path().join(".git/objects").is_dir());

    Ok(())
}

#[test]
fn test_open_requires_a_repository() -> Result<()> {
    let root = TempDir::new("casket-test")?;
    let dir = Utf8PathBuf::from_path_buf(root.path().to_owned()).unwrap();

    let err = Repo::open(dir).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));

    Ok(())
}
