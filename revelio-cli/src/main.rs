//! revelio CLI
//!
//! Inspects a Hogwarts Legacy save file and reports which collectibles are
//! still missing, grouped by region, with detection of two known
//! save-corruption bugs.

mod error;
mod report;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use error::CliError;
use revelio_catalog::load_collectibles;
use revelio_lib::scan_save;

#[derive(Parser)]
#[command(name = "revelio")]
#[command(about = "Find missing Hogwarts Legacy collectibles in a save file", long_about = None)]
struct Cli {
    /// The .sav file to examine (prompts when omitted)
    file: Option<PathBuf>,

    /// Collectible dataset (defaults to collectibles.json beside the executable)
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let catalog_path = cli.catalog.unwrap_or_else(default_catalog_path);
    let catalog = load_collectibles(&catalog_path)?;
    log::debug!("loaded {} catalog entries", catalog.len());

    let save_path = match cli.file {
        Some(path) => path,
        None => prompt_for_path()?,
    };

    let save = std::fs::read(&save_path).map_err(|e| {
        let path = save_path.display().to_string();
        if e.kind() == std::io::ErrorKind::NotFound {
            CliError::SaveNotFound { path }
        } else {
            CliError::SaveRead { path, source: e }
        }
    })?;

    let scan = scan_save(&save, &catalog).map_err(|source| CliError::Unreadable {
        path: save_path.display().to_string(),
        source,
    })?;

    report::render(&scan);
    Ok(())
}

/// The dataset ships next to the binary; fall back to the working
/// directory when running from a build tree.
fn default_catalog_path() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let candidate = dir.join("collectibles.json");
            if candidate.exists() {
                return candidate;
            }
        }
    }
    PathBuf::from("collectibles.json")
}

/// Ask for the save path on stdin, stripping surrounding quotes that
/// drag-and-drop tends to add.
fn prompt_for_path() -> Result<PathBuf, CliError> {
    print!(".sav file path: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let mut path = line.trim();
    if path.len() >= 2 && path.starts_with('"') && path.ends_with('"') {
        path = &path[1..path.len() - 1];
    }
    Ok(PathBuf::from(path))
}
