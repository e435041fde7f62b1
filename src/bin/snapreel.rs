use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(
    name = "snapreel",
    version,
    about = "Synthesize an animation-ready scene sequence for one play"
)]
struct Cli {
    /// Game id (positive integer).
    game_id: Option<String>,

    /// Play id within the game (positive integer).
    play_id: Option<String>,

    /// Directory holding games.csv, plays.csv, players.csv and tracking_week_<N>.csv.
    #[arg(long, default_value = "./data/kaggle")]
    data_dir: PathBuf,

    /// Lookup-table JSON (entity groups, team colors); built-in defaults when omitted.
    #[arg(long)]
    tables: Option<PathBuf>,

    /// Write the scene sequence as JSON.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Write the Plotly figure as JSON.
    #[arg(long)]
    figure: Option<PathBuf>,

    /// Write a standalone HTML page playing the figure.
    #[arg(long)]
    html: Option<PathBuf>,

    /// Enable sample-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Raise log verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let selection = snapreel::Selection::parse(cli.game_id.as_deref(), cli.play_id.as_deref())?;
    let tables = match &cli.tables {
        Some(path) => snapreel::LookupTables::from_path(path)
            .with_context(|| format!("load lookup tables '{}'", path.display()))?,
        None => snapreel::LookupTables::default(),
    };
    let source = snapreel::CsvDirectory::new(&cli.data_dir);
    let opts = snapreel::SynthOpts {
        parallel: cli.parallel,
        threads: cli.threads,
    };

    let seq = snapreel::animate_play(&source, selection, &tables, &opts).with_context(|| {
        format!(
            "animate game {} play {} from '{}'",
            selection.game_id,
            selection.play_id,
            cli.data_dir.display()
        )
    })?;
    eprintln!(
        "game {} play {}: {} scenes, line set at {}",
        selection.game_id,
        selection.play_id,
        seq.len(),
        seq.line_set
    );

    if let Some(out) = &cli.out {
        snapreel::write_json(&seq, out)?;
        eprintln!("wrote {}", out.display());
    }

    if cli.figure.is_some() || cli.html.is_some() {
        let fig = snapreel::PlotlyFigure::from_sequence(&seq)?;
        if let Some(path) = &cli.figure {
            fig.write_json(path)?;
            eprintln!("wrote {}", path.display());
        }
        if let Some(path) = &cli.html {
            let page_title = format!("Game {} Play {}", selection.game_id, selection.play_id);
            fig.write_html(path, &page_title)?;
            eprintln!("wrote {}", path.display());
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
