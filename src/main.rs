mod error;
mod highlight;
mod reviews;
mod settings;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use settings::Settings;

#[derive(Parser)]
#[command(
    name = "review_highlights",
    about = "Print the most buzzword-dense sentences from a file of reviews"
)]
struct Cli {
    /// Text file with one review per line
    input: PathBuf,

    /// Number of highlights to print (negative prints none)
    #[arg(allow_negative_numbers = true)]
    max: i64,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = Settings::load();
    info!(?settings, input = %cli.input.display(), max = cli.max, "starting");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&cli, &settings, &mut out)?;
    out.flush().context("writing highlights")?;
    Ok(())
}

fn run<W: Write>(cli: &Cli, settings: &Settings, out: &mut W) -> anyhow::Result<usize> {
    let reviews = reviews::read_reviews(&cli.input)
        .with_context(|| format!("loading reviews from {}", cli.input.display()))?;
    let max = usize::try_from(cli.max).unwrap_or(0);
    let highlights = highlight::review_highlights(&reviews, max, settings);
    write_highlights(out, &highlights).context("writing highlights")?;
    Ok(highlights.len())
}

fn write_highlights<W: Write>(out: &mut W, highlights: &[String]) -> io::Result<()> {
    for h in highlights {
        writeln!(out, "{}", h)?;
        writeln!(out)?;
    }
    Ok(())
}
