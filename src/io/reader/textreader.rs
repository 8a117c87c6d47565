/*! Reading facilities

Reads the source csv in one go, and reads generated sentence files back.

[SentenceReader] implements [Iterator], yielding a `(word, tag)` sequence per non-empty line.
!*/
use std::{
    fs::File,
    io::{BufRead, BufReader, Lines, Read},
    path::{Path, PathBuf},
};

use log::info;

use crate::error::Error;
use crate::processing::sentence::{TAG_DELIMITER, TOKEN_DELIMITER};

/// Read the whole source file into memory.
pub fn read_source(src: &Path) -> Result<String, Error> {
    info!("reading {:?}", src);
    let content = std::fs::read_to_string(src)?;
    Ok(content)
}

/// Split a sentence line into `(word, tag)` pairs.
///
/// Tokens are separated by single spaces and the tag is what follows the *last* `=`,
/// so that words containing `=` keep them.
pub fn parse_sentence(line: &str) -> Result<Vec<(&str, &str)>, Error> {
    line.split(TOKEN_DELIMITER)
        .map(|token| {
            token
                .rsplit_once(TAG_DELIMITER)
                .ok_or_else(|| Error::MalformedToken(token.to_string()))
        })
        .collect()
}

/// Reader that yields parsed sentences, one per non-empty line.
#[derive(Debug)]
pub struct SentenceReader<T> {
    path: PathBuf,
    lines: Lines<BufReader<T>>,
}

impl SentenceReader<File> {
    pub fn new(src: &Path) -> Result<Self, Error> {
        let f = File::open(src)?;
        Ok(Self {
            path: src.to_path_buf(),
            lines: BufReader::new(f).lines(),
        })
    }
}

impl<T> SentenceReader<T> {
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl<T> Iterator for SentenceReader<T>
where
    T: Read,
{
    type Item = Result<Vec<(String, String)>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            let line = match line {
                Ok(l) => l,
                Err(e) => return Some(Err(Error::Io(e))),
            };

            // tolerate CRLF and blank lines
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }

            let parsed = parse_sentence(line).map(|pairs| {
                pairs
                    .into_iter()
                    .map(|(w, t)| (w.to_string(), t.to_string()))
                    .collect()
            });
            return Some(parsed);
        }
        None
    }
}

/// Read every sentence of a generated file.
pub fn read_sentences(src: &Path) -> Result<Vec<Vec<(String, String)>>, Error> {
    let reader = SentenceReader::new(src)?;
    info!("reading sentences from {:?}", reader.path());
    reader.collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let s = parse_sentence("The=DT dog=NN barks=VBZ").unwrap();
        assert_eq!(s, vec![("The", "DT"), ("dog", "NN"), ("barks", "VBZ")]);
    }

    #[test]
    fn parse_last_delimiter() {
        let s = parse_sentence("a=b=NN ,=,").unwrap();
        assert_eq!(s, vec![("a=b", "NN"), (",", ",")]);
    }

    #[test]
    fn parse_missing_delimiter() {
        match parse_sentence("The=DT dog") {
            Err(Error::MalformedToken(t)) => assert_eq!(t, "dog"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dev.txt");
        std::fs::write(&path, "a=b=NN ,=,\nIt=PRP\n").unwrap();

        let reader = SentenceReader::new(&path).unwrap();
        assert_eq!(reader.path(), &path);

        let sentences = read_sentences(&path).unwrap();
        assert_eq!(
            sentences,
            vec![
                vec![
                    ("a=b".to_string(), "NN".to_string()),
                    (",".to_string(), ",".to_string())
                ],
                vec![("It".to_string(), "PRP".to_string())],
            ]
        );
    }

    #[test]
    fn test_iter() {
        let content = std::io::Cursor::new("The=DT dog=NN\n\nIt=PRP runs=VBZ\r\n");
        let reader = SentenceReader {
            path: PathBuf::new(), //empty, for testing
            lines: BufReader::new(content).lines(),
        };

        let expected = vec![
            vec![("The", "DT"), ("dog", "NN")],
            vec![("It", "PRP"), ("runs", "VBZ")],
        ];

        assert_eq!(reader.path(), &PathBuf::new());
        let result: Vec<_> = reader.map(Result::unwrap).collect();
        assert_eq!(result.len(), expected.len());
        for (res, exp) in result.iter().zip(expected.iter()) {
            let res: Vec<(&str, &str)> =
                res.iter().map(|(w, t)| (w.as_str(), t.as_str())).collect();
            assert_eq!(&res, exp);
        }
    }
}
