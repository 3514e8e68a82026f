use camino::Utf8PathBuf;
use clap::Parser;
use clap::Subcommand;

use crate::digest::Digest;

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Create an empty repository
    Init,

    /// Compute the object id of a file, optionally writing the blob to the
    /// database
    HashObject {
        /// Write the blob to the database, not just compute its id
        #[clap(short, long)]
        write: bool,

        file: Utf8PathBuf,
    },

    #[clap(subcommand)]
    CatFile(CatFile),

    /// Store the working directory as tree objects and print the root
    /// tree's id
    WriteTree,

    /// List the entries of a tree object
    LsTree {
        /// Print only entry names
        #[clap(long)]
        name_only: bool,

        #[clap(value_name = "object")]
        object: Digest,
    },

    /// Create a commit object referencing a tree
    CommitTree {
        #[clap(value_name = "tree")]
        tree: Digest,

        /// Parent commit ids, in order
        #[clap(short, long = "parent", value_name = "object")]
        parents: Vec<Digest>,

        #[clap(short, long, env = "CASKET_COMMIT_MESSAGE")]
        message: String,

        #[clap(long, env = "CASKET_AUTHOR_NAME")]
        author_name: String,

        #[clap(long, env = "CASKET_AUTHOR_EMAIL")]
        author_email: String,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum CatFile {
    /// Exit with status `ExitCode::SUCCESS` if `object` exists and is a
    /// valid object. If `object` is of an invalid format, exit with status
    /// `ExitCode::FAILURE`, and print an error to stderr.
    #[clap(short_flag = 'e')]
    Exists {
        #[clap(value_name = "object")]
        object: Digest,
    },

    /// Pretty-print the contents of `object` based on its type
    #[clap(short_flag = 'p')]
    PrettyPrint {
        #[clap(value_name = "object")]
        object: Digest,
    },

    /// Print the type of `object` to stdout
    #[clap(short_flag = 't')]
    Type {
        #[clap(value_name = "object")]
        object: Digest,
    },

    /// Print the payload size of `object` to stdout
    #[clap(short_flag = 's')]
    Size {
        #[clap(value_name = "object")]
        object: Digest,
    },
}

#[derive(Debug, Parser)]
pub struct Opt {
    #[clap(subcommand)]
    pub command: Command,

    /// The path to be used.
    #[clap(short)]
    pub path: Option<Utf8PathBuf>,
}
