use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::storage::StorageClient;

use super::{
    context::CliContext,
    prompts::Prompt,
    session::{self, SessionOutcome},
};

#[derive(Parser, Debug, Clone, Default)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    author = "WangErxi",
    about = "Rename the files of a folder to a sequential scheme ({base}{n}.{ext})",
    after_help = "Any value not given as a flag is asked for interactively; enter q to cancel."
)]
pub struct Args {
    /// Folder whose entries are renamed
    #[arg(value_name = "FOLDER")]
    pub folder: Option<String>,

    /// Folder whose entries are renamed (same as the positional argument)
    #[arg(long = "folder", value_name = "FOLDER", conflicts_with = "folder")]
    pub folder_flag: Option<String>,

    /// New name base; entries become {base}{n}.{ext}
    #[arg(short = 'b', long = "base", value_name = "BASE")]
    pub base: Option<String>,

    /// Extension to match, without the leading period
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    pub ext: Option<String>,

    /// Answer the confirmation prompt with yes
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Index given to the first renamed entry
    #[arg(long, value_name = "N")]
    pub start: Option<u64>,

    /// Process entries sorted by name instead of listing order
    #[arg(long)]
    pub sort: bool,

    /// Override the settings file path
    #[arg(long, value_name = "PATH", env = "SEQRENAME_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable interactive prompts (fail fast when input is required)
    #[arg(long)]
    pub non_interactive: bool,

    /// Log debug output to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// A value the session collects, by flag or by prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Folder,
    Base,
    Extension,
    Confirm,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Folder => "Folder path",
            Field::Base => "file rename base",
            Field::Extension => "file extension (w/o period)",
            Field::Confirm => "continue? [y or n]",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Field::Folder => "FOLDER or --folder",
            Field::Base => "--base",
            Field::Extension => "--ext",
            Field::Confirm => "--yes",
        }
    }
}

pub async fn run(args: Args) -> Result<SessionOutcome> {
    run_with_prompt(args, None, &mut io::stdout()).await
}

pub async fn run_with_prompt(
    args: Args,
    prompt: Option<Prompt>,
    out: &mut dyn Write,
) -> Result<SessionOutcome> {
    let prompt = prompt.unwrap_or_else(|| Prompt::new(!args.non_interactive));

    let mut ctx = CliContext::from_args(args, prompt, StorageClient::local())?;
    session::execute(&mut ctx, out).await
}
