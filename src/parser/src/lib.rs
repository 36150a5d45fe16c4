use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
    fmt::{self, Display, Formatter},
};

use located_error::prelude::*;

use clap::{Parser, ArgEnum};
use serde::{Serialize, Deserialize};
use log::debug;

mod error;
pub use error::ParserError;

#[derive(Parser, Debug, Serialize, Deserialize)]
#[clap(name="heredity", author, version, about, long_about = None)]
/// heredity-rs: exact inference of inherited gene and trait distributions across a pedigree.
///
/// Computes the posterior probability that every member of a pedigree carries 0, 1 or 2 copies
/// of a gene, and exhibits the associated trait, given the traits observed in their relatives.
pub struct Cli {
    ///Set the verbosity level (-v -vv -vvv)
    ///
    /// Set the verbosity level of this program. Multiple levels allowed {n}
    ///
    /// -v: Info  |  -vv: Debug  | -vvv: Trace {n}
    ///
    /// Note that the program will still output warnings by default, even when this flag is off.
    /// Use The --quiet/-q to disable them
    #[clap(short='v', long, parse(from_occurrences))]
    pub verbose: u8,

    /// Disable warnings.
    ///
    /// By default, warnings are emmited and redirected to the console, even when verbose mode is off.
    /// Use this argument to disable this. Only errors will be displayed.
    #[clap(short='q', long)]
    pub quiet: bool,

    /// Input pedigree file.
    ///
    /// Comma-separated file, with a header naming the columns 'name,mother,father,trait' (in any order).{n}
    /// - 'mother' and 'father' must either both be empty (founder), or both name another individual of the file.{n}
    /// - 'trait' is '1' (exhibits the trait), '0' (does not), or empty (unknown).{n}
    /// Blank lines and '#' comments are ignored.
    #[clap(parse(try_from_os_str=valid_input_file))]
    pub pedigree: PathBuf,

    /// Model parameters file (.yaml).
    ///
    /// Overrides the default gene prior, trait probabilities and mutation rate. Missing fields
    /// keep their default value. Example:{n}
    /// gene_prior: {zero: 0.96, one: 0.03, two: 0.01}{n}
    /// trait_given_gene: {zero: 0.01, one: 0.56, two: 0.65}{n}
    /// mutation_rate: 0.01
    #[clap(short='p', long, parse(try_from_os_str=valid_input_file))]
    pub params: Option<PathBuf>,

    /// Probability that a transmitted gene copy mutates into the other type.
    ///
    /// Takes precedence over the mutation rate of the --params file. Must lie within [0, 1]
    #[clap(short='m', long, parse(try_from_str=parse_probability))]
    pub mutation_rate: Option<f64>,

    /// Number of worker threads.
    ///
    /// With a single thread, worlds are enumerated sequentially, and probabilities are always summed
    /// in the same order.
    #[clap(short='@', long, default_value("1"), parse(try_from_str=parse_threads))]
    pub threads: usize,

    /// Refuse to run if the number of worlds to enumerate exceeds this value.
    ///
    /// A pedigree of n individuals, u of which have an unknown trait, spans 2^u * 3^n worlds.
    #[clap(long)]
    pub max_worlds: Option<u64>,

    /// Output format.
    #[clap(short='f', long, arg_enum, default_value("text"))]
    pub format: Format,

    /// Write results to this file instead of the standard output.
    #[clap(short='o', long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Verbosity level forwarded to `logger::Logger::init()`. Warnings are displayed unless `--quiet`.
    pub fn verbosity(&self) -> u8 {
        if self.quiet {0} else {self.verbose.saturating_add(1)}
    }

    /// Serialize command line arguments into a `.yaml` string, and log it.
    ///
    /// # Errors
    /// Sends an unrecoverable error if `serde_yaml` fails to parse `Self` to a string.
    pub fn serialize(&self) -> Result<String> {
        let serialized = serde_yaml::to_string(&self)
            .map_err(ParserError::Serialize)
            .loc("While serializing command line arguments")?;
        debug!("\n---- Command line args ----\n{}\n---", serialized);
        Ok(serialized)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ArgEnum, Serialize, Deserialize)]
pub enum Format {
    Text,
    Yaml,
}

impl Default for Format {
    fn default() -> Self {Self::Text}
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

fn valid_input_file(s: &OsStr) -> Result<PathBuf> {
    let path = Path::new(s);
    let loc_msg = "While checking for file validity";
    if ! path.exists() {
        return Err(ParserError::MissingFile(path.display().to_string())).loc(loc_msg)
    }
    if ! path.is_file() {
        return Err(ParserError::NotAFile(path.display().to_string())).loc(loc_msg)
    }
    Ok(PathBuf::from(s))
}

fn parse_probability(s: &str) -> Result<f64> {
    use ParserError::ParseRatio;
    const MIN: f64 = 0.0;
    const MAX: f64 = 1.0;

    let value = s.parse::<f64>().with_loc(|| format!("While parsing {s}"))?;
    match (MIN..=MAX).contains(&value) {
        true  => Ok(value),
        false => Err(anyhow!(ParseRatio(MIN, MAX))).with_loc(|| format!("While parsing {s}"))
    }
}

fn parse_threads(s: &str) -> Result<usize> {
    let threads = s.parse::<usize>().with_loc(|| format!("While parsing {s}"))?;
    match threads {
        0 => Err(anyhow!(ParserError::NonPositive("threads"))),
        n => Ok(n),
    }
}
