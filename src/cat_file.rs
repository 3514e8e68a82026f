use std::io::Write;
use std::process::exit;

use crate::interface::CatFile;
use crate::object::Object;
use crate::repo::Repo;
use crate::Result;

pub fn handle(repo: &Repo, args: &CatFile) -> Result<()> {
    match args {
        CatFile::Exists { object } => {
            if repo.database.exists(object) {
                match repo.database.load(object) {
                    Ok(_) => Ok(()),
                    Err(_) => {
                        eprintln!("Object is corrupt: {object:x}");
                        exit(1);
                    }
                }
            } else {
                eprintln!("Object does not exist: {object:x}");
                exit(1);
            }
        }
        CatFile::PrettyPrint { object } => {
            match repo.database.load(object)? {
                // blob contents are opaque bytes, written out verbatim
                Object::Blob(blob) => std::io::stdout().write_all(blob.data())?,
                Object::Tree(_) => {
                    for row in repo.ls_tree(object, false)? {
                        println!("{row}");
                    }
                }
                Object::Commit(commit) => print!("{}", commit.text()),
            }
            Ok(())
        }
        CatFile::Type { object } => {
            println!("{}", repo.database.load(object)?.kind());
            Ok(())
        }
        CatFile::Size { object } => {
            println!("{}", repo.database.load(object)?.payload().len());
            Ok(())
        }
    }
}
