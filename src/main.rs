//! # Spinneret
//!
//! Spinneret converts an XML corpus of records (id, language-tagged titles,
//! abstracts made of sentences) into one minimal XLIFF 1.0 document per
//! record, ready for a translation workflow.
//!
//! ## Getting started
//!
//! ```sh
//! spinneret 0.1.0
//! corpus to XLIFF conversion tool.
//!
//! USAGE:
//!     spinneret <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     check      Parse a corpus and report record/title/sentence counts
//!     convert    Convert a corpus into per-record XLIFF files
//!     dedup      Remove duplicate line pairs from a line-aligned bilingual corpus
//!     help       Prints this message or the help of the given subcommand(s)
//! ```
use structopt::StructOpt;

#[macro_use]
extern crate log;

use spinneret::error;
use spinneret::filtering::SourceLanguage;
use spinneret::pipelines::{Pipeline, XliffExport};
use spinneret::processing;
use spinneret::xliff::UnitIdGenerator;

mod cli;

fn main() -> Result<(), error::Error> {
    env_logger::init();

    let opt = cli::Spinneret::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Spinneret::Convert(c) => {
            let pipeline = XliffExport::new(
                c.src,
                c.dst,
                SourceLanguage::default(),
                UnitIdGenerator::new(&c.prefix),
            );
            let written = pipeline.run()?;
            info!("done, {} files written", written);
        }
        cli::Spinneret::Check(c) => {
            let report = processing::check(&c.src)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        cli::Spinneret::Dedup(d) => {
            let report = processing::dedup(&d.l1, &d.l2)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    };
    Ok(())
}
