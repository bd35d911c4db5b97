// readme2txt: renders README.md into the plain-text README.txt.
//
// Run without arguments from the repository root; paths, base URL and wrap
// width can be overridden on the command line.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use readme2txt::ConverterConfig;
use readme2txt::utils::{DEFAULT_BASE_URL, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_WORDWRAP};

#[derive(Parser, Debug)]
#[command(name = "readme2txt", version, about)]
struct Cli {
    /// Markdown source to read
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Text file to write (overwritten)
    #[arg(default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Repository blob URL prefixed to site-relative links and images
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Wrap column for running text
    #[arg(long, default_value_t = DEFAULT_WORDWRAP, conflicts_with = "no_wordwrap")]
    wordwrap: usize,

    /// Do not wrap running text
    #[arg(long)]
    no_wordwrap: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = ConverterConfig::builder()
        .input_path(cli.input)
        .output_path(cli.output)
        .base_url(cli.base_url)
        .wordwrap((!cli.no_wordwrap).then_some(cli.wordwrap))
        .build()?;

    match readme2txt::run(&config) {
        Ok(path) => {
            println!("{} was saved!", path.display());
            Ok(())
        }
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
