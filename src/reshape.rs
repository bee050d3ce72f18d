use log::{debug, info};

use ballot_parser::{run_ballots, MalformedDescriptorFault, RunSummary};
use snafu::{prelude::*, Snafu};

use crate::reshape::config::ReshapeConfig;

pub mod config;
pub mod io_tsv;

#[derive(Debug, Snafu)]
pub enum ReshapeError {
    #[snafu(display("Error opening input file {path}"))]
    OpeningInput { source: csv::Error, path: String },
    #[snafu(display("Error reading line {lineno} of the input"))]
    TsvLineParse { source: csv::Error, lineno: usize },
    #[snafu(display("Line {lineno} has {num_fields} fields, at least {expected} are required"))]
    TsvLineTooShort {
        lineno: usize,
        num_fields: usize,
        expected: usize,
    },
    #[snafu(display("Error creating output file {path}"))]
    CreatingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error writing to {path}"))]
    WritingOutput { source: csv::Error, path: String },
    #[snafu(display("Error flushing {path}"))]
    FlushingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Malformed ballot, the input must be fixed before running again"))]
    MalformedDescriptor { source: MalformedDescriptorFault },
}

pub type ReshapeResult<T> = Result<T, ReshapeError>;

/// Reads all the ballots, parses them, and writes the selections.
///
/// Nothing is written if one of the ballots cannot be parsed.
pub fn run_reshape(config: &ReshapeConfig) -> ReshapeResult<RunSummary> {
    info!("config: {:?}", config);

    let ballots = io_tsv::read_tsv_ballots(config)?;
    info!(
        "run_reshape: read {} ballots from {:?}",
        ballots.len(),
        config.input_path
    );

    let (records, summary) = run_ballots(ballots).context(MalformedDescriptorSnafu {})?;
    debug!("run_reshape: summary: {:?}", summary);

    io_tsv::write_tsv_records(config, &records)?;
    info!(
        "run_reshape: wrote {} records to {:?}",
        records.len(),
        config.output_path
    );
    Ok(summary)
}
