//! # penn-split
//!
//! Reorganizes a POS-tagged corpus (`data/penn.csv`, one `marker,word,tag,extra` record per line)
//! into sentence-per-line files of `word=tag` tokens, randomly split between
//! `data/penn-dev.txt` (about 20% of sentences) and `data/penn-training.txt`.
//!
//! There are no arguments: run it from the directory containing `data/`.
//! Logging is controlled by `RUST_LOG`.
//!
//! ```sh
//! RUST_LOG=info penn-split
//! ```
use penn_split::config::Config;
use penn_split::error::Error;
use penn_split::pipeline::pipeline::Pipeline;
use penn_split::pipeline::Reorganizer;

#[macro_use]
extern crate log;

fn main() -> Result<(), Error> {
    env_logger::init();

    let reorganizer = Reorganizer::new(Config::default());
    debug!("config\n{:#?}", reorganizer.config());

    let summary = reorganizer.run()?;
    info!(
        "{} sentences ({} tokens) written",
        summary.nb_sentences, summary.nb_tokens
    );
    Ok(())
}
