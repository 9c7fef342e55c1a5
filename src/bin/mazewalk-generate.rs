use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

/// Generate a maze description JSON.
#[derive(Parser, Debug)]
#[command(name = "mazewalk-generate", version)]
struct Cli {
    /// Output maze JSON.
    #[arg(long, default_value = "maze.json")]
    out: PathBuf,

    /// Maze width in cells.
    #[arg(long, default_value_t = 10)]
    width: u32,

    /// Maze height in cells.
    #[arg(long, default_value_t = 10)]
    height: u32,

    /// RNG seed; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let grid = mazewalk::generate(mazewalk::GeneratorOpts {
        width: cli.width,
        height: cli.height,
        seed: cli.seed,
    })?;
    grid.save(&cli.out)
        .with_context(|| format!("write maze '{}'", cli.out.display()))?;

    eprintln!("wrote {}", cli.out.display());
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
