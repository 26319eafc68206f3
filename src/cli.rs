//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "spinneret", about = "corpus to XLIFF conversion tool.")]
/// Holds every command that is callable by the `spinneret` command.
pub enum Spinneret {
    #[structopt(about = "Convert a corpus into per-record XLIFF files")]
    Convert(Convert),
    #[structopt(about = "Parse a corpus and report record/title/sentence counts")]
    Check(Check),
    #[structopt(about = "Remove duplicate line pairs from a line-aligned bilingual corpus")]
    Dedup(Dedup),
}

#[derive(Debug, StructOpt)]
/// Convert command and parameters.
pub struct Convert {
    #[structopt(parse(from_os_str), help = "corpus file location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination of xliff files")]
    pub dst: PathBuf,
    #[structopt(
        long = "prefix",
        default_value = "unit-",
        help = "prefix of generated trans-unit ids"
    )]
    pub prefix: String,
}

#[derive(Debug, StructOpt)]
/// Check command and parameters.
pub struct Check {
    #[structopt(parse(from_os_str), help = "corpus file location")]
    pub src: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Dedup command and parameters.
pub struct Dedup {
    #[structopt(parse(from_os_str), help = "L1 side of the corpus")]
    pub l1: PathBuf,
    #[structopt(parse(from_os_str), help = "L2 side of the corpus")]
    pub l2: PathBuf,
}
