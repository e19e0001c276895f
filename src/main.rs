// SPDX-License-Identifier: PMPL-1.0-or-later

//! rpy-deepl: fill empty Ren'Py translation strings via the DeepL API.

use anyhow::Result;
use clap::Parser;
use rpy_deepl::batch::{self, BatchConfig};
use rpy_deepl::deepl::DeepLClient;
use rpy_deepl::lang;
use rpy_deepl::types::Formality;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rpy-deepl")]
#[command(version)]
#[command(about = "Fill empty Ren'Py translation strings via the DeepL API")]
struct Cli {
    /// Target language: spelled-out name ("german") or DeepL code ("DE")
    #[arg(value_name = "LANGUAGE", default_value = "german")]
    language: String,

    /// Translate every language subdirectory under the base path
    #[arg(long)]
    all: bool,

    /// Formality setting passed to DeepL
    #[arg(long, value_enum, default_value = "default")]
    formality: FormalityArg,

    /// Base translations directory
    #[arg(long, default_value = "game/tl", value_name = "DIR")]
    base_dir: PathBuf,

    /// Write a JSON run report to this path
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormalityArg {
    Default,
    More,
    Less,
}

impl From<FormalityArg> for Formality {
    fn from(arg: FormalityArg) -> Self {
        match arg {
            FormalityArg::Default => Formality::Default,
            FormalityArg::More => Formality::More,
            FormalityArg::Less => Formality::Less,
        }
    }
}

fn main() -> Result<()> {
    // Pick up DEEPL_API_KEY from .env if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let target_lang = lang::resolve_target_lang(&cli.language);

    // Fails fast on a missing credential, before touching any files.
    let client = DeepLClient::from_env(&target_lang, cli.formality.into())?;

    let config = BatchConfig {
        base_dir: cli.base_dir,
        language: cli.language.to_lowercase(),
        target_lang,
        all: cli.all,
    };

    let report = batch::run(&config, &client)?;
    batch::print_summary(&report);

    if let Some(report_path) = cli.report {
        batch::write_report(&report, &report_path)?;
        println!("Report saved to: {}", report_path.display());
    }

    Ok(())
}
