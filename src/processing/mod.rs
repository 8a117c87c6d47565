/*! Content processing

Turns csv records into sentences and splits them into dev and train parts.
!*/
pub mod record;
pub mod sentence;
pub mod split;

pub use record::{parse_records, Record};
pub use sentence::{group, Sentence, SentenceGrouper};
pub use split::{split, Partition};
