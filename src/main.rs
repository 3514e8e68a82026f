#[cfg(test)]
mod test;

mod cat_file;
mod database;
mod digest;
mod error;
mod filemode;
mod interface;
mod object;
mod repo;
mod util;

use color_eyre::eyre::Context;

pub use crate::error::{Error, Result};

use crate::interface::*;
use crate::object::{Blob, Object, Signature};
use crate::repo::Repo;

use camino::Utf8PathBuf;
use clap::Parser;
use once_cell::sync::Lazy;
use tracing_subscriber::prelude::*;

static ARGS: Lazy<Opt> = Lazy::new(Opt::parse);

fn main() -> color_eyre::Result<()> {
    color_eyre::install().unwrap();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    Lazy::force(&ARGS);

    let path = match ARGS.path {
        Some(ref path) => path
            .canonicalize_utf8()
            .wrap_err(format!("Directory not found: '{path}'"))?,
        None => Utf8PathBuf::try_from(std::env::current_dir()?)?.canonicalize_utf8()?,
    };

    if matches!(ARGS.command, Command::Init) {
        Repo::init(&path)?;
        return Ok(());
    }

    let repo = Repo::open(path)?;

    match &ARGS.command {
        Command::Init => unreachable!(),
        Command::HashObject { write, file } => {
            let data = std::fs::read(repo.workdir().join(file))?;
            let blob = Object::Blob(Blob::new(data));
            let oid = if *write {
                repo.database.store(&blob)?
            } else {
                blob.id()
            };
            println!("{oid:x}");
        }
        Command::CatFile(args) => cat_file::handle(&repo, args)?,
        Command::WriteTree => {
            let oid = repo.write_tree(repo.workdir())?;
            println!("{oid:x}");
        }
        Command::LsTree { name_only, object } => {
            for row in repo.ls_tree(object, *name_only)? {
                println!("{row}");
            }
        }
        Command::CommitTree {
            tree,
            parents,
            message,
            author_name,
            author_email,
        } => {
            let author = Signature::new(author_name.clone(), author_email.clone());
            let oid = repo.commit_tree(tree.clone(), parents.clone(), message, author)?;
            println!("{oid:x}");
        }
    }
    Ok(())
}
