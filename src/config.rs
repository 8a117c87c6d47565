/*! Run configuration.

Paths and the split ratio are fixed for the binary (see [Config::default]),
but are kept as explicit values so that the pipeline can be pointed elsewhere
and made deterministic in tests.
!*/
use std::path::{Path, PathBuf};

pub const DEFAULT_SRC: &str = "data/penn.csv";
pub const DEFAULT_DEV: &str = "data/penn-dev.txt";
pub const DEFAULT_TRAIN: &str = "data/penn-training.txt";

/// Probability for a sentence to land in the dev set.
pub const DEFAULT_DEV_RATIO: f64 = 0.2;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    src: PathBuf,
    dev: PathBuf,
    train: PathBuf,
    dev_ratio: f64,
    seed: Option<u64>,
}

impl Config {
    pub fn new(src: PathBuf, dev: PathBuf, train: PathBuf) -> Self {
        Self::default().with_paths(src, dev, train)
    }

    /// Replace source and destinations, keeping ratio and seed.
    pub fn with_paths(mut self, src: PathBuf, dev: PathBuf, train: PathBuf) -> Self {
        self.src = src;
        self.dev = dev;
        self.train = train;
        self
    }

    /// Use a seeded rng instead of the thread rng.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_dev_ratio(mut self, dev_ratio: f64) -> Self {
        self.dev_ratio = dev_ratio;
        self
    }

    /// Get a reference to the config's source file.
    pub fn src(&self) -> &Path {
        &self.src
    }

    /// Get a reference to the config's dev destination.
    pub fn dev(&self) -> &Path {
        &self.dev
    }

    /// Get a reference to the config's train destination.
    pub fn train(&self) -> &Path {
        &self.train
    }

    pub fn dev_ratio(&self) -> f64 {
        self.dev_ratio
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src: PathBuf::from(DEFAULT_SRC),
            dev: PathBuf::from(DEFAULT_DEV),
            train: PathBuf::from(DEFAULT_TRAIN),
            dev_ratio: DEFAULT_DEV_RATIO,
            seed: None,
        }
    }
}
