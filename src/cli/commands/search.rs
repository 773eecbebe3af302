//! Search command - find notes by text, optionally narrowed by tags.

use anyhow::Result;

use crate::cli::format::print_notes;
use crate::cli::OutputFormat;
use denden_ink::config::Config;
use denden_ink::input::parse_tag_args;
use denden_ink::storage::{Database, NoteRepository};

/// Arguments for the search command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    ink search parser              Notes containing 'parser'\n    \
    ink search parser bug          ...that are also tagged #bug\n    \
    ink search \"\" bug urgent       Notes tagged both #bug and #urgent")]
pub struct Args {
    /// Text to look for (case-sensitive substring)
    pub query: String,

    /// Tags every result must carry
    #[arg(value_name = "TAG")]
    pub tags: Vec<String>,

    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Executes the search command.
pub fn run(args: Args, config: &Config) -> Result<()> {
    let db = Database::open_default(config)?;

    let tags = parse_tag_args(&args.tags);
    let notes = db.search(&args.query, &tags);

    print_notes(&notes, args.format)
}
