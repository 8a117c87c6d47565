/*! Csv record parsing

Each line of the source file is `marker,word,tag,extra`, where `marker` is empty
when the word continues the current sentence.
Words may contain commas: the word is everything between the first comma and the last two ones.

The only line this doesn't work for is a comma tagged as a comma, which is quoted in the source
and is matched literally (see [COMMA_LINE]).
!*/
use crate::error::Error;

/// Line of a comma word, tagged as a comma.
pub const COMMA_LINE: &str = r#",",",",",O"#;

const FIELD_SEP: char = ',';

/// A parsed line, borrowing from the source text.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Record<'a> {
    marker: &'a str,
    word: &'a str,
    tag: &'a str,
}

impl<'a> Record<'a> {
    pub fn new(marker: &'a str, word: &'a str, tag: &'a str) -> Self {
        Self { marker, word, tag }
    }

    /// Parse a single line. `line_nb` (1-based) is only used for error reporting.
    ///
    /// The trailing line terminator (`\n` or `\r\n`) is optional.
    pub fn parse(line: &'a str, line_nb: usize) -> Result<Self, Error> {
        let stripped = strip_terminator(line);

        if stripped == COMMA_LINE {
            return Ok(Self::new("", ",", ","));
        }

        let malformed = || Error::MalformedRecord {
            line: line_nb,
            content: stripped.to_string(),
        };

        let (marker, rest) = stripped.split_once(FIELD_SEP).ok_or_else(malformed)?;

        // rsplitn yields fields from the right: extra, tag, word.
        let mut fields = rest.rsplitn(3, FIELD_SEP);
        let _extra = fields.next().ok_or_else(malformed)?;
        let tag = fields.next().ok_or_else(malformed)?;
        let word = fields.next().ok_or_else(malformed)?;

        Ok(Self::new(marker, word, tag))
    }

    /// true if the record starts a new sentence.
    pub fn starts_sentence(&self) -> bool {
        !self.marker.is_empty()
    }

    pub fn marker(&self) -> &'a str {
        self.marker
    }

    pub fn word(&self) -> &'a str {
        self.word
    }

    pub fn tag(&self) -> &'a str {
        self.tag
    }
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Parse every line of `content`, in order.
///
/// Fails on the first malformed line.
pub fn parse_records(content: &str) -> Result<Vec<Record<'_>>, Error> {
    content
        .split_inclusive('\n')
        .enumerate()
        .map(|(idx, line)| Record::parse(line, idx + 1))
        .collect()
}
