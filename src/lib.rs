extern crate parser;
extern crate logger;

use std::{fs::File, io::{self, Write, BufWriter}, path::Path};

use parser::{Cli, Format};
use pedigree::{Pedigree, pedigree_parser};
use inference::{EnumerationEngine, EngineOptions, InheritanceTables, ModelParams, Posterior};
use located_error::prelude::*;

#[macro_use]
extern crate log;

mod error;
pub use error::PresentError;

/// Resolve model parameters: defaults, overridden by the `--params` file, then by `--mutation-rate`.
pub fn model_params(cli: &Cli) -> Result<ModelParams> {
    let mut params = match &cli.params {
        Some(path) => ModelParams::from_yaml(path)?,
        None       => ModelParams::default(),
    };
    if let Some(rate) = cli.mutation_rate {
        params = params.with_mutation_rate(rate);
    }
    Ok(params)
}

/// Enumerate every world of `pedigree` and compute the posterior of each individual.
pub fn infer(pedigree: &Pedigree, tables: &InheritanceTables, options: EngineOptions) -> Result<Posterior> {
    EnumerationEngine::new(pedigree, tables)?
        .with_options(options)
        .run()
        .loc("While enumerating worlds")
}

/// Write `posterior` into `writer`, using the requested `format`.
pub fn present<W: Write>(posterior: &Posterior, format: Format, mut writer: W) -> Result<()> {
    match format {
        Format::Text => write!(writer, "{posterior}").map_err(PresentError::Io)?,
        Format::Yaml => serde_yaml::to_writer(&mut writer, posterior).map_err(PresentError::Serialize)?,
    }
    writer.flush().map_err(PresentError::Io)?;
    Ok(())
}

fn present_to(posterior: &Posterior, format: Format, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            info!("Writing results to {}", path.display());
            let file = File::create(path)
                .map_err(PresentError::Io)
                .with_loc(|| format!("While creating {}", path.display()))?;
            present(posterior, format, BufWriter::new(file))
        },
        None => present(posterior, format, io::stdout().lock()),
    }
}

pub fn run(cli: Cli) -> Result<()> {
    // ----------------------------- Build the inheritance and emission tables.
    let params = model_params(&cli)?;
    let tables = InheritanceTables::new(&params)?;

    // ----------------------------- Load the pedigree.
    info!("Loading pedigree from {}...", cli.pedigree.display());
    let pedigree = pedigree_parser(&cli.pedigree)?;
    debug!("Pedigree:\n{pedigree}");

    // ----------------------------- Run the enumeration.
    let options = EngineOptions {
        threads   : cli.threads,
        max_worlds: cli.max_worlds,
        progress  : logger::Logger::progress_bar(0, "Enumerating worlds"),
    };
    let posterior = infer(&pedigree, &tables, options)?;

    // ----------------------------- Present.
    present_to(&posterior, cli.format, cli.output.as_deref())
        .loc("While presenting results")
}
