use log::{debug, info, warn};
use indicatif::ProgressBar;
use rayon::prelude::*;

use located_error::prelude::*;
use pedigree::Pedigree;

use crate::{Accumulator, InferenceError, InheritanceTables, Posterior, World, joint_probability};

mod partitions;
pub use partitions::GenePartitions;

mod assignments;
pub use assignments::TraitAssignments;

/// Largest population for which `3^n` gene partitions fit within a `u64`.
pub const MAX_INDIVIDUALS: usize = 40;

/// Number of individuals (lowest pedigree indices first) whose gene counts vary within a single job.
const CHUNK_DEPTH: usize = 6;

/// Enumeration runtime options.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Number of worker threads. `1` runs the enumeration on the calling thread.
    pub threads   : usize,
    /// Refuse to enumerate more than this many worlds.
    pub max_worlds: Option<u64>,
    /// Progress bar, incremented once per completed job.
    pub progress  : Option<ProgressBar>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self{threads: 1, max_worlds: None, progress: None}
    }
}

/// Split of the world space into `masks x chunks` jobs. Each job covers a single trait
/// assignment and `chunk_len` consecutive gene partitions.
#[derive(Debug, Clone, Copy)]
struct JobLayout {
    masks    : u64,
    chunks   : u64,
    chunk_len: u64,
}

impl JobLayout {
    fn jobs(&self) -> u64 {
        self.masks * self.chunks
    }
}

/// Exhaustive enumeration of every world consistent with a pedigree's observed traits.
///
/// Worlds are visited by iterating over the `2^u` trait assignments of the `u` individuals with
/// an unknown trait, and over the `3^n` gene partitions of all `n` individuals. The joint
/// probability of each world is accumulated into per-person marginals, which are normalized once
/// every world has been visited.
///
/// # Usage
/// ```
/// use inference::{EnumerationEngine, InheritanceTables};
/// use pedigree::PedigreeBuilder;
///
/// let mut builder = PedigreeBuilder::new();
/// builder.add_person("Harry", None, Some(true)).unwrap();
/// let pedigree = builder.build().unwrap();
///
/// let tables = InheritanceTables::default();
/// let posterior = EnumerationEngine::new(&pedigree, &tables).unwrap().run().unwrap();
/// assert_eq!(posterior.get("Harry").unwrap().traits().get(true), 1.0);
/// ```
#[derive(Debug)]
pub struct EnumerationEngine<'a> {
    pedigree   : &'a Pedigree,
    tables     : &'a InheritanceTables,
    assignments: TraitAssignments,
    options    : EngineOptions,
}

impl<'a> EnumerationEngine<'a> {
    /// # Errors
    /// - `InferenceError::PopulationTooLarge` if the pedigree contains more than `MAX_INDIVIDUALS`.
    pub fn new(pedigree: &'a Pedigree, tables: &'a InheritanceTables) -> Result<Self> {
        if pedigree.len() > MAX_INDIVIDUALS {
            return Err(InferenceError::PopulationTooLarge{people: pedigree.len(), max: MAX_INDIVIDUALS})
                .loc("While initializing the enumeration engine")
        }
        Ok(Self{pedigree, tables, assignments: TraitAssignments::new(pedigree), options: EngineOptions::default()})
    }

    #[must_use]
    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    /// Number of evidence-consistent worlds: `2^u * 3^n`
    pub fn world_count(&self) -> u128 {
        let partitions = 3u128.pow(self.pedigree.len() as u32);
        (1u128 << self.assignments.unknown()) * partitions
    }

    fn layout(&self) -> JobLayout {
        let n = self.pedigree.len();
        let chunk_len = 3u64.pow(n.min(CHUNK_DEPTH) as u32);
        let chunks = 3u64.pow((n - n.min(CHUNK_DEPTH)) as u32);
        let masks = 1u64 << self.assignments.unknown();
        JobLayout{masks, chunks, chunk_len}
    }

    /// Enumerate every world and return the normalized posterior of each individual.
    ///
    /// # Errors
    /// - `InferenceError::TooManyWorlds` if the world count exceeds `EngineOptions::max_worlds`
    ///   (or `u64::MAX`).
    /// - `InferenceError::BuildThreadPool` if the worker threads cannot be spawned.
    /// - `InferenceError::ImpossibleEvidence` if no world carries any probability mass.
    pub fn run(&self) -> Result<Posterior> {
        let worlds = self.world_count();
        let limit = self.options.max_worlds.unwrap_or(u64::MAX);
        if worlds > u128::from(limit) {
            return Err(InferenceError::TooManyWorlds{worlds, limit})
                .loc("While checking the size of the enumeration")
        }

        let layout = self.layout();
        let threads = self.options.threads.max(1);
        info!("Enumerating {worlds} worlds ({} individuals, {} unknown traits) using {threads} thread(s)...",
            self.pedigree.len(), self.assignments.unknown()
        );
        debug!("Job layout: {layout:?}");

        if let Some(pb) = &self.options.progress {
            pb.set_length(layout.jobs());
        }

        let accumulator = match threads {
            1 => self.sequential(layout),
            _ => self.parallel(layout, threads)?,
        };

        if let Some(pb) = &self.options.progress {
            pb.finish_and_clear();
        }

        if u128::from(accumulator.worlds()) != worlds {
            warn!("Visited {} worlds out of {worlds}.", accumulator.worlds());
        }
        accumulator.finalize(self.pedigree)
    }

    fn sequential(&self, layout: JobLayout) -> Accumulator {
        let mut accumulator = Accumulator::zeroed(self.pedigree.len());
        let mut traits = Vec::with_capacity(self.pedigree.len());
        for job in 0..layout.jobs() {
            self.run_job(job, layout, &mut traits, &mut accumulator);
        }
        accumulator
    }

    fn parallel(&self, layout: JobLayout, threads: usize) -> Result<Accumulator> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(InferenceError::BuildThreadPool)
            .loc("While preparing the enumeration")?;

        let n = self.pedigree.len();
        let accumulator = pool.install(|| {
            (0..layout.jobs()).into_par_iter()
                .fold(
                    || (Accumulator::zeroed(n), Vec::with_capacity(n)),
                    |(mut accumulator, mut traits), job| {
                        self.run_job(job, layout, &mut traits, &mut accumulator);
                        (accumulator, traits)
                    }
                )
                .map(|(accumulator, _)| accumulator)
                .reduce(|| Accumulator::zeroed(n), Accumulator::merge)
        });
        Ok(accumulator)
    }

    /// Visit every world of a single job. `traits` is a scratch buffer.
    fn run_job(&self, job: u64, layout: JobLayout, traits: &mut Vec<bool>, accumulator: &mut Accumulator) {
        let (mask, chunk) = (job / layout.chunks, job % layout.chunks);
        self.assignments.fill(mask, traits);

        let mut partitions = GenePartitions::range(self.pedigree.len(), chunk * layout.chunk_len, layout.chunk_len);
        while let Some(genes) = partitions.next_partition() {
            let world = World::new(genes, traits);
            let p = joint_probability(self.pedigree, self.tables, &world);
            accumulator.update(&world, p);
        }

        if let Some(pb) = &self.options.progress {
            pb.inc(1);
        }
    }
}
