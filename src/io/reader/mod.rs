/*! Corpus reading utilities

The source csv is read whole, while generated sentence files can be iterated on with [SentenceReader].
!*/
mod textreader;

pub use textreader::{parse_sentence, read_sentences, read_source, SentenceReader};
