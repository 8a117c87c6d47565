/*!
# Sentence file writing

[TextWriter] writes newline-terminated sentence lines into a single, truncated file.
!*/
mod textwriter;

pub use textwriter::{write_lines, TextWriter};
