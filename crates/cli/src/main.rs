mod cmd;
mod completions;
mod logging;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::engine::ArgValueCompleter;
use clap_complete::env::CompleteEnv;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mdtag", version, about = "Find, open, and search markdown notes by tag")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    /// Log debug output to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search notes by tag
    #[command(alias = "s")]
    Search(SearchArgs),

    /// List files and folders in the vault
    #[command(alias = "ls")]
    List(ListArgs),

    /// Open a note in the vault app or an editor
    #[command(alias = "o")]
    Open(OpenArgs),

    /// Create today's daily note if needed, then open it
    #[command(alias = "d")]
    Daily(DailyArgs),

    /// Make a profile the one used when --profile is not given
    #[command(alias = "sd")]
    SetDefault(SetDefaultArgs),

    /// Validate configuration and print resolved settings
    Doctor,
}

#[derive(Debug, Args)]
#[command(after_help = "\
Formats:
  names      Matching notes, one per line
  locations  Note and line of the first match (default)
  lines      Every matching line, with --context lines around it
  blocks     The paragraph around every inline match

Examples:
  mdtag search programming
  mdtag search programming --format names
  mdtag search daily --format lines -c 2
  mdtag search work -s -l frontmatter")]
pub struct SearchArgs {
    /// Tag to search for; a leading `#` is ignored
    #[arg(add = ArgValueCompleter::new(completions::complete_tags))]
    pub tag: String,

    /// Output format: names, locations, lines, blocks
    #[arg(short, long)]
    pub format: Option<String>,

    /// Where the tag must appear: all, frontmatter, inline
    #[arg(short, long)]
    pub location: Option<String>,

    /// Also match subtags (`work` finds `work/meetings`)
    #[arg(short, long)]
    pub subtags: bool,

    /// Context lines around each match (lines format)
    #[arg(short, long)]
    pub context: Option<usize>,

    /// Open the note when there is exactly one result
    #[arg(short, long)]
    pub open: bool,

    /// Open a single result in the editor instead of the vault app
    #[arg(short, long)]
    pub editor: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Folder inside the vault; defaults to the vault root
    pub path: Option<String>,
}

#[derive(Debug, Args)]
pub struct OpenArgs {
    /// Note path relative to the vault root
    #[arg(add = ArgValueCompleter::new(completions::complete_notes))]
    pub note: String,

    /// Heading to jump to
    #[arg(long)]
    pub section: Option<String>,

    /// Open in the editor instead of the vault app
    #[arg(short, long)]
    pub editor: bool,
}

#[derive(Debug, Args)]
pub struct DailyArgs {
    /// Open in the editor instead of the vault app
    #[arg(short, long)]
    pub editor: bool,

    /// Only create the note and print its path
    #[arg(long, conflicts_with = "editor")]
    pub no_open: bool,
}

#[derive(Debug, Args)]
pub struct SetDefaultArgs {
    /// Profile name from the config file
    pub profile: String,
}

fn main() {
    CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let profile = cli.profile.as_deref();

    match cli.command {
        Commands::Search(args) => cmd::search::run(config, profile, cli.verbose, args),
        Commands::List(args) => cmd::list::run(config, profile, cli.verbose, args),
        Commands::Open(args) => cmd::open::run(config, profile, cli.verbose, args),
        Commands::Daily(args) => cmd::daily::run(config, profile, cli.verbose, args),
        Commands::SetDefault(args) => cmd::set_default::run(config, &args.profile),
        Commands::Doctor => cmd::doctor::run(config, profile, cli.verbose),
    }
}
