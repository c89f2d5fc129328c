use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

/// Render a JSON scene description into a raster image.
#[derive(Parser, Debug)]
#[command(name = "figura", version)]
struct Cli {
    /// Input JSON file describing the image.
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Save the image to this file (PNG).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Echo the parsed document (sorted keys) to stdout before rendering.
    #[arg(long)]
    print_json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = figura::RunConfig::new(&cli.input)
        .with_output(cli.output.clone())
        .with_print_document(cli.print_json);

    let image = figura::run(&config, std::io::stdout().lock())
        .with_context(|| format!("render scene '{}'", cli.input.display()))?;

    match &cli.output {
        Some(out) => eprintln!("wrote {}", out.display()),
        None => eprintln!(
            "rendered {}x{} (pass --output to save a PNG)",
            image.width(),
            image.height()
        ),
    }
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
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
