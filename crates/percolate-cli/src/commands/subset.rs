use crate::cli::SubsetArgs;
use crate::config::build_subset_config;
use crate::error::{CliError, Result};
use percolate::engine::config::SubsetConfig;
use percolate::workflows;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use tracing::info;

pub fn run(args: SubsetArgs) -> Result<()> {
    let config = build_subset_config(&args)?;
    let reader = open_input(config.input.as_deref())?;
    sample_tokens(&config.core_config, reader, io::stdout().lock())
}

/// Opens `path`, or standard input when no path is configured.
fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            info!("Reading tokens from {:?}", path);
            let file = File::open(path).map_err(|e| CliError::FileParsing {
                path: path.to_path_buf(),
                source: e.into(),
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => {
            info!("Reading tokens from standard input...");
            Ok(Box::new(io::stdin().lock()))
        }
    }
}

fn sample_tokens<B: BufRead, W: Write>(config: &SubsetConfig, reader: B, writer: W) -> Result<()> {
    let written = workflows::subset::run(config, reader, writer)?;
    info!("Wrote {} token(s).", written);
    Ok(())
}
