use std::path::PathBuf;

use clap::{ArgAction, Parser};
use pixel_reveal::{BuildConfig, BuiltPage};

#[derive(Parser, Debug)]
#[command(name = "pixel-reveal", version)]
/// Assemble the pixel reveal page from the SVGs in a directory.
///
/// With no arguments, reads the stock asset names from the current directory and writes
/// `pixel-reveal.html` next to them.
struct Cli {
    /// Directory holding the input SVGs. Relative paths in the config resolve against it.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// JSON build config. Missing fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output HTML path, relative to the root.
    #[arg(long)]
    out: Option<String>,

    /// Build and report without writing the page.
    #[arg(long)]
    dry_run: bool,

    /// Parse-check every fragment as SVG and abort on the first one that fails.
    #[arg(long)]
    validate: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut cfg = match &cli.config {
        Some(path) => BuildConfig::load(path)?,
        None => BuildConfig::default(),
    };
    if let Some(out) = cli.out {
        cfg.output = out;
    }
    if cli.validate {
        cfg.validate_svg = true;
    }

    let page = pixel_reveal::build_page(&cfg, &cli.root)?;
    if cli.dry_run {
        print_report(&page, &cfg);
        return Ok(());
    }

    pixel_reveal::write_page(&page)?;
    println!(
        "Wrote {} ({} rects across logo + two figures, sha256 {}).",
        page.output_path.display(),
        page.total_rects(),
        page.sha256_hex()
    );
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn print_report(page: &BuiltPage, cfg: &BuildConfig) {
    println!("dry run: {} not written", page.output_path.display());
    for f in &page.fragments {
        let prolog = if f.stripped_prolog {
            " (xml declaration stripped)"
        } else {
            ""
        };
        println!("  {:<12} {:>6} rects{prolog}", f.role.name(), f.rects);
    }
    println!("  total        {:>6} rects", page.total_rects());
    println!(
        "  reveal       {} ms after a {} ms settle, {:?}",
        cfg.reveal.duration_ms, cfg.reveal.settle_ms, cfg.reveal.ease
    );
    if let Some(gap) = page.schedule.mean_interval_ms() {
        println!("  interval     {gap:.3} ms mean between reveals");
    }
    println!("  html         {} bytes, sha256 {}", page.html.len(), page.sha256_hex());
}
