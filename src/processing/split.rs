/*! Random dev/train splitting

Each item is drawn independently: no guarantee is made on the actual ratio, only on its expectation.
Order is kept within each part.
!*/
use log::debug;
use rand::Rng;

/// Items of a corpus, split in two parts.
#[derive(Debug, PartialEq, Eq)]
pub struct Partition<T> {
    pub dev: Vec<T>,
    pub train: Vec<T>,
}

impl<T> Partition<T> {
    /// total number of items.
    pub fn len(&self) -> usize {
        self.dev.len() + self.train.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dev.is_empty() && self.train.is_empty()
    }
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self {
            dev: Vec::new(),
            train: Vec::new(),
        }
    }
}

/// Route each item to dev if a uniform draw in `[0, 1)` is below `dev_ratio`, to train otherwise.
pub fn split<T, I, R>(items: I, dev_ratio: f64, rng: &mut R) -> Partition<T>
where
    I: IntoIterator<Item = T>,
    R: Rng + ?Sized,
{
    let mut partition = Partition::default();
    for item in items {
        let draw: f64 = rng.gen();
        if draw < dev_ratio {
            partition.dev.push(item);
        } else {
            partition.train.push(item);
        }
    }

    debug!(
        "split {} items: {} dev, {} train",
        partition.len(),
        partition.dev.len(),
        partition.train.len()
    );
    partition
}
