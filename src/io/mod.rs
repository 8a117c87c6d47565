/*!
# IO utilities

Loading of the source csv, saving of sentence files, and reading of those files back.
!*/
pub mod reader;
pub mod writer;
