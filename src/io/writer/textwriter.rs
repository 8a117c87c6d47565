//! Sentence file writer.
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Writes one sentence per line, terminating each one with `\n`.
///
/// The destination is truncated on creation.
pub struct TextWriter {
    dst: PathBuf,
    text: BufWriter<File>,
    nb_lines: usize,
}

impl TextWriter {
    /// Create (or truncate) the file at `dst`.
    pub fn new(dst: &Path) -> Result<Self, Error> {
        info!("creating {:?}", dst);
        let text = File::create(dst)?;
        Ok(Self {
            dst: dst.to_path_buf(),
            text: BufWriter::new(text),
            nb_lines: 0,
        })
    }

    /// Write a single line. `line` must not contain a line terminator.
    pub fn write_line(&mut self, line: &str) -> Result<(), Error> {
        self.text.write_all(line.as_bytes())?;
        self.text.write_all(b"\n")?;
        self.nb_lines += 1;
        Ok(())
    }

    /// Flush and close the file, returning the number of written lines.
    pub fn close(mut self) -> Result<usize, Error> {
        self.text.flush()?;
        debug!("wrote {} lines to {:?}", self.nb_lines(), self.dst);
        Ok(self.nb_lines)
    }

    pub fn nb_lines(&self) -> usize {
        self.nb_lines
    }
}

/// Write all `lines` in order into `dst`, overwriting it.
pub fn write_lines<I, S>(dst: &Path, lines: I) -> Result<usize, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut writer = TextWriter::new(dst)?;
    for line in lines {
        writer.write_line(line.as_ref())?;
    }
    writer.close()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let nb = write_lines(&path, ["The=DT dog=NN", "It=PRP"]).unwrap();
        assert_eq!(nb, 2);

        let result = std::fs::read_to_string(&path).unwrap();
        assert_eq!(result, "The=DT dog=NN\nIt=PRP\n");
    }

    #[test]
    fn count_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let mut tw = TextWriter::new(&path).unwrap();
        assert_eq!(tw.nb_lines(), 0);
        tw.write_line("The=DT").unwrap();
        tw.write_line("It=PRP").unwrap();
        assert_eq!(tw.nb_lines(), 2);
        assert_eq!(tw.close().unwrap(), 2);
    }

    #[test]
    fn overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "previous content that is longer\n").unwrap();

        write_lines(&path, ["a=DT"]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a=DT\n");
    }

    #[test]
    fn empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let nb = write_lines(&path, Vec::<String>::new()).unwrap();
        assert_eq!(nb, 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn unwritable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        assert!(matches!(write_lines(&path, ["a=DT"]), Err(Error::Io(_))));
    }
}
