use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::commands;
use denden_ink::config::Config;
use denden_ink::storage::NoteKind;

/// The main CLI command line interface.
#[derive(Parser)]
#[command(name = "ink")]
#[command(version)]
#[command(about = "Den Den Ink - quick notes from the command line 🐌")]
#[command(long_about = "Den Den Ink stores short notes with #tags in a local SQLite file.\n\
    Programming notes also remember the directory, last edited file,\n\
    and git branch/commit they were written in.")]
#[command(args_conflicts_with_subcommands = true)]
#[command(after_help = "EXAMPLES:\n    \
    ink \"buy milk\" '#errands'       Save a general note\n    \
    ink p \"cache is stale\" '#bug'   Save a programming note\n    \
    ink search cache bug            Search text, requiring tag #bug\n    \
    ink list                        Show recent notes\n    \
    ink list errands                Show notes tagged #errands\n    \
    ink stats                       Show statistics\n\n\
    Quote #tags in your shell, or it may treat them as comments.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Note text for a general note; words starting with # become tags
    #[arg(value_name = "NOTE")]
    words: Vec<String>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Save a programming note with directory and git metadata
    #[command(visible_alias = "prog")]
    P(commands::add::Args),

    /// Search note text, optionally requiring tags
    #[command(long_about = "Finds notes whose text contains the query (case-sensitive).\n\
        When tags are given, a note must carry every one of them.")]
    Search(commands::search::Args),

    /// List recent notes, or all notes with a tag
    List(commands::list::Args),

    /// Show note statistics
    #[command(long_about = "Shows the total number of notes, the most used tags,\n\
        the directories with the most programming notes, and recent\n\
        daily activity.")]
    Stats(commands::stats::Args),

    /// Show configuration and file locations
    Config,

    /// Generate shell completion scripts
    Completions(commands::completions::Args),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "denden_ink=debug,ink=debug"
    } else {
        "denden_ink=warn,ink=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Some(Commands::Completions(args)) = &cli.command {
        commands::completions::generate_completions(&mut Cli::command(), args.shell);
        return Ok(());
    }

    let config = Config::load()?;

    match cli.command {
        Some(Commands::P(args)) => commands::add::run(&args.words, NoteKind::Programming, &config),
        Some(Commands::Search(args)) => commands::search::run(args, &config),
        Some(Commands::List(args)) => commands::list::run(args, &config),
        Some(Commands::Stats(args)) => commands::stats::run(args, &config),
        Some(Commands::Config) => commands::config::run(&config),
        Some(Commands::Completions(_)) => Ok(()),
        None if cli.words.is_empty() => {
            Cli::command().print_help()?;
            std::process::exit(1);
        }
        None => commands::add::run(&cli.words, NoteKind::General, &config),
    }
}
