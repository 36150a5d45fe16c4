use clap::Parser;
use located_error::prelude::*;

use super::Fixture;

/// Builds and runs a `heredity` command line against a copy of a `tests/test-data/` pedigree.
#[derive(Debug, Default)]
pub struct HeredityRunnerBuilder {
    pedigree     : Option<String>,
    params       : Option<String>,
    mutation_rate: Option<f64>,
    threads      : Option<usize>,
    max_worlds   : Option<u64>,
    format       : Option<parser::Format>,
}

impl HeredityRunnerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pedigree(mut self, pedigree: &str) -> Self {
        self.pedigree = Some(format!("pedigree/{pedigree}"));
        self
    }

    pub fn set_params(mut self, params: &str) -> Self {
        self.params = Some(format!("params/{params}"));
        self
    }

    pub fn set_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = Some(rate);
        self
    }

    pub fn set_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn set_max_worlds(mut self, max_worlds: u64) -> Self {
        self.max_worlds = Some(max_worlds);
        self
    }

    pub fn set_format(mut self, format: parser::Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn build(self) -> Result<HeredityRunner> {
        let pedigree = Fixture::copy(self.pedigree.as_deref().context("Missing pedigree")?);
        let params   = self.params.as_deref().map(Fixture::copy);
        let output   = Fixture::output(match self.format {
            Some(parser::Format::Yaml) => "heredity-output.yaml",
            _                          => "heredity-output.txt",
        });

        let mut args = vec!["heredity".to_string(), pedigree.to_string(), "--output".to_string(), output.to_string()];
        if let Some(params) = &params {
            args.extend(["--params".to_string(), params.to_string()]);
        }
        if let Some(rate) = self.mutation_rate {
            args.extend(["--mutation-rate".to_string(), rate.to_string()]);
        }
        if let Some(threads) = self.threads {
            args.extend(["--threads".to_string(), threads.to_string()]);
        }
        if let Some(max_worlds) = self.max_worlds {
            args.extend(["--max-worlds".to_string(), max_worlds.to_string()]);
        }
        if let Some(format) = self.format {
            args.extend(["--format".to_string(), format.to_string()]);
        }

        let cli = parser::Cli::try_parse_from(&args)?;
        Ok(HeredityRunner{cli, _pedigree: pedigree, _params: params, output})
    }
}

pub struct HeredityRunner {
    cli      : parser::Cli,
    _pedigree: Fixture,
    _params  : Option<Fixture>,
    output   : Fixture,
}

impl HeredityRunner {
    /// Run `heredity_rs::run()` and return the output file.
    pub fn run(self) -> Result<Fixture> {
        heredity_rs::run(self.cli)?;
        Ok(self.output)
    }
}
