use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "contacts", version)]
#[command(about = "Keep a contact book in a JSON file", long_about = None)]
#[command(subcommand_required = true, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Exit with an error when the data file cannot be loaded or saved
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// The data file name
        filename: PathBuf,

        /// The contact's family
        #[arg(short = 'f', long)]
        family: String,

        /// The contact's name (`-na` works too)
        #[arg(long)]
        name: String,

        /// The contact's phone number
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        number: i64,

        /// The contact's date of birth
        #[arg(short = 'b', long)]
        born: String,
    },

    /// Display all contacts
    Display {
        /// The data file name
        filename: PathBuf,
    },

    /// Select the contacts with a given family
    Select {
        /// The data file name
        filename: PathBuf,

        /// The required family
        #[arg(short = 'F', long, alias = "familys")]
        family: Option<String>,
    },
}

impl Commands {
    pub fn filename(&self) -> &Path {
        match self {
            Commands::Add { filename, .. }
            | Commands::Display { filename }
            | Commands::Select { filename, .. } => filename,
        }
    }
}

pub fn parse_cli() -> Cli {
    Cli::parse_from(normalize_args(std::env::args_os()))
}

/// Rewrites the two-letter `-na` flag, which clap cannot express as a short
/// option, to `--name`. Arguments after `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    passthrough = true;
                    arg
                }
                Some("-na") => OsString::from("--name"),
                Some(s) if s.starts_with("-na=") => OsString::from(format!("--name={}", &s[4..])),
                _ => arg,
            }
        })
        .collect()
}
