use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};

/// Solve a maze and render every step as a numbered PNG frame.
#[derive(Parser, Debug)]
#[command(name = "mazewalk-solve", version)]
struct Cli {
    /// Input maze JSON.
    #[arg(long, default_value = "maze.json")]
    maze: PathBuf,

    /// Output directory for frames; cleared before rendering.
    #[arg(long, default_value = "output")]
    out_dir: PathBuf,

    /// Side length of each square frame in pixels.
    #[arg(long, default_value_t = 1080)]
    size: u32,

    /// Maximum number of solver steps, teleports included (default: width * height).
    #[arg(long)]
    step_limit: Option<u64>,

    /// Backend to use.
    #[arg(long, value_enum, default_value_t = BackendChoice::Cpu)]
    backend: BackendChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BackendChoice {
    Cpu,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let grid = mazewalk::Grid::from_path(&cli.maze)
        .with_context(|| format!("load maze '{}'", cli.maze.display()))?;

    let settings = mazewalk::RenderSettings::default().with_size(cli.size);
    let kind = match cli.backend {
        BackendChoice::Cpu => mazewalk::BackendKind::Cpu,
    };
    let mut backend = mazewalk::create_backend(kind, &settings)?;

    let mut sink = mazewalk::PngSequenceSink::new(mazewalk::PngSequenceOpts {
        dir: cli.out_dir.clone(),
        ..mazewalk::PngSequenceOpts::default()
    });

    let opts = mazewalk::SessionOpts {
        solve: mazewalk::SolveOpts {
            step_limit: cli.step_limit,
        },
    };
    let stats = mazewalk::render_solve(&grid, backend.as_mut(), &mut sink, &opts)
        .context("solve and render")?;

    eprintln!(
        "wrote {} frames to {} ({} moves, {} backtracks, {} of {} cells visited)",
        sink.frames_written(),
        sink.dir().display(),
        stats.moves,
        stats.backtracks,
        stats.cells_visited,
        grid.cell_count()
    );
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
