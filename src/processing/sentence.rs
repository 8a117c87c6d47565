/*! Sentence reconstruction

Records are grouped into sentences using their marker: a non-empty marker closes the sentence being built
(if any) and opens a new one.
!*/
use std::fmt;

use itertools::Itertools;

use super::record::Record;

/// Separates a word from its tag in a token.
pub const TAG_DELIMITER: char = '=';
/// Separates tokens in a sentence line.
pub const TOKEN_DELIMITER: char = ' ';

/// An ordered sequence of `(word, tag)` pairs.
///
/// Displays as a line of `word=tag` tokens separated by spaces, without line terminator.
/// There's no escaping: a word or tag containing `=` or a space won't be read back properly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sentence<'a> {
    tokens: Vec<(&'a str, &'a str)>,
}

impl<'a> Sentence<'a> {
    pub fn new(tokens: Vec<(&'a str, &'a str)>) -> Self {
        Self { tokens }
    }

    pub fn push(&mut self, word: &'a str, tag: &'a str) {
        self.tokens.push((word, tag));
    }

    pub fn tokens(&self) -> &[(&'a str, &'a str)] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Serialize into a sentence line.
    pub fn to_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Sentence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; 4];
        let sep: &str = TOKEN_DELIMITER.encode_utf8(&mut buf);
        let tokens = self.tokens.iter().format_with(sep, |(word, tag), g| {
            g(&format_args!("{}{}{}", word, TAG_DELIMITER, tag))
        });
        write!(f, "{}", tokens)
    }
}

/// Incremental sentence builder.
#[derive(Debug, Default)]
pub struct SentenceGrouper<'a> {
    current: Sentence<'a>,
}

impl<'a> SentenceGrouper<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, returning the previous sentence if the record starts a new one.
    pub fn push(&mut self, record: &Record<'a>) -> Option<Sentence<'a>> {
        let done = if record.starts_sentence() && !self.current.is_empty() {
            Some(std::mem::take(&mut self.current))
        } else {
            None
        };

        self.current.push(record.word(), record.tag());
        done
    }

    /// Get the last sentence, if there's one.
    pub fn finish(self) -> Option<Sentence<'a>> {
        if self.current.is_empty() {
            None
        } else {
            Some(self.current)
        }
    }
}

/// Group records into sentences, keeping record order.
pub fn group<'a, 'r, I>(records: I) -> Vec<Sentence<'a>>
where
    I: IntoIterator<Item = &'r Record<'a>>,
    'a: 'r,
{
    let mut grouper = SentenceGrouper::new();
    let mut sentences: Vec<Sentence<'a>> = records
        .into_iter()
        .filter_map(|record| grouper.push(record))
        .collect();

    if let Some(last) = grouper.finish() {
        sentences.push(last);
    }

    sentences
}
