/*! Corpus reorganization pipeline

Reads the whole csv, rebuilds sentences, splits them randomly and writes the dev then the train file.
Any error stops the run: there is no cleanup, so a failure while writing the train file leaves a complete dev file behind.
!*/
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Config;
use crate::error::Error;
use crate::io::{reader, writer};
use crate::processing::{group, parse_records, split, Sentence};

use super::pipeline::Pipeline;

/// Counts gathered during a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub nb_records: usize,
    pub nb_sentences: usize,
    pub nb_tokens: usize,
    pub nb_dev: usize,
    pub nb_train: usize,
}

pub struct Reorganizer {
    config: Config,
}

impl Reorganizer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the pipeline, drawing splits from the provided rng.
    pub fn run_with_rng<R>(&self, rng: &mut R) -> Result<Summary, Error>
    where
        R: Rng + ?Sized,
    {
        let content = reader::read_source(self.config.src())?;

        let records = parse_records(&content)?;
        let sentences = group(&records);
        let nb_tokens: usize = sentences.iter().map(Sentence::len).sum();
        info!(
            "parsed {} records into {} sentences",
            records.len(),
            sentences.len()
        );

        let nb_sentences = sentences.len();
        let lines = sentences.iter().map(Sentence::to_line);
        let partition = split(lines, self.config.dev_ratio(), rng);

        let nb_dev = writer::write_lines(self.config.dev(), &partition.dev)?;
        let nb_train = writer::write_lines(self.config.train(), &partition.train)?;

        let summary = Summary {
            nb_records: records.len(),
            nb_sentences,
            nb_tokens,
            nb_dev,
            nb_train,
        };
        info!(
            "done: {} dev sentences, {} train sentences",
            summary.nb_dev, summary.nb_train
        );
        debug!("{:#?}", summary);

        Ok(summary)
    }
}

impl Pipeline<Summary> for Reorganizer {
    fn run(&self) -> Result<Summary, Error> {
        match self.config.seed() {
            Some(seed) => {
                info!("using seed {}", seed);
                self.run_with_rng(&mut StdRng::seed_from_u64(seed))
            }
            None => self.run_with_rng(&mut rand::thread_rng()),
        }
    }
}
