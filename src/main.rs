use clap::Parser;
use std::path::PathBuf;

mod condense;
mod week;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "weekly-condenser")]
#[command(about = "Combine daily notes into one file per completed week", long_about = None)]
struct Cli {
    /// Directory holding the daily `<YYYY-MM-DD>.md` notes.
    target_dir: PathBuf,

    /// Directory the `Week-of-*.md` files are written to.
    output_dir: PathBuf,

    /// Pass the literal `clean` to delete originals after combining.
    mode: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let clean = cli.mode.as_deref() == Some("clean");
    let today = chrono::Local::now().date_naive();

    condense::condense_all_weeks(&cli.target_dir, &cli.output_dir, clean, today)
}
