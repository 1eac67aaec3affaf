use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use log::info;
use nwkit::parse_newick_file;
use std::path::PathBuf;

/// Output to print for the parsed (and possibly rewritten) tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Newick,
    Ascii,
    Both,
}

/// Parse a Newick tree, optionally collapse and binarize it, and print it.
#[derive(Debug, Parser)]
#[command(name = "nwkit", version, about)]
struct Cli {
    /// File containing a single Newick string
    file: PathBuf,

    /// Contract nodes with exactly one child
    #[arg(long)]
    collapse: bool,

    /// Resolve polytomies into binary branching (after collapsing)
    #[arg(long)]
    binarize: bool,

    /// What to print
    #[arg(long, value_enum, default_value_t = OutputFormat::Both)]
    format: OutputFormat,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut tree = parse_newick_file(&cli.file)
        .with_context(|| format!("Failed to parse {}", cli.file.display()))?;
    info!(
        "Parsed {} with {} nodes and {} leaves",
        cli.file.display(),
        tree.num_nodes(),
        tree.num_leaves()
    );

    if cli.collapse {
        tree.remove_redundant_nodes()
            .context("Failed to remove redundant nodes")?;
    }
    if cli.binarize {
        tree.resolve_polytomies();
    }

    if matches!(cli.format, OutputFormat::Newick | OutputFormat::Both) {
        println!("{}", tree.to_newick());
    }
    if matches!(cli.format, OutputFormat::Ascii | OutputFormat::Both) {
        for line in tree.ascii_art() {
            println!("{line}");
        }
    }

    Ok(())
}
