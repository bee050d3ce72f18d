// Primitives for reading and writing TSV files.

use std::fs::File;
use std::io;

use ballot_parser::{RawBallot, SelectionRecord};
use serde::Serialize;

use crate::reshape::{config::ReshapeConfig, *};

/// The columns of a submission, in the order of the survey export.
const TIMESTAMP_IDX: usize = 0;
const FIRST_TEAM_IDX: usize = 1;
const SECOND_TEAM_IDX: usize = 2;
// The fourth column (comments) is never read.
const MIN_INPUT_FIELDS: usize = 3;

pub const OUTPUT_HEADER: [&str; 5] = ["timestamp", "player", "team", "role", "selection"];

// Field order must follow OUTPUT_HEADER.
#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    timestamp: &'a str,
    player: &'a str,
    team: &'a str,
    role: &'a str,
    selection: &'static str,
}

impl<'a> From<&'a SelectionRecord> for OutputRow<'a> {
    fn from(r: &'a SelectionRecord) -> Self {
        OutputRow {
            timestamp: &r.timestamp,
            player: &r.handle,
            team: &r.group_code,
            role: &r.role_tag,
            selection: r.category.label(),
        }
    }
}

pub fn read_tsv_ballots(cfs: &ReshapeConfig) -> ReshapeResult<Vec<RawBallot>> {
    let (records, row_offset) = get_records(cfs)?;

    let mut res: Vec<RawBallot> = Vec::new();
    for (idx, line_r) in records.enumerate() {
        let line = line_r.context(TsvLineParseSnafu {
            lineno: idx + row_offset + 1,
        })?;
        // Blank lines are skipped by the reader, so the position is more accurate than the index.
        let lineno = line
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + row_offset + 1);
        debug!("read_tsv_ballots: lineno: {:?} row: {:?}", lineno, line);

        if line.len() < MIN_INPUT_FIELDS {
            return TsvLineTooShortSnafu {
                lineno,
                num_fields: line.len(),
                expected: MIN_INPUT_FIELDS,
            }
            .fail();
        }

        res.push(RawBallot {
            lineno,
            timestamp: line[TIMESTAMP_IDX].to_string(),
            first_selection_text: line[FIRST_TEAM_IDX].to_string(),
            second_selection_text: line[SECOND_TEAM_IDX].to_string(),
        });
    }
    Ok(res)
}

fn get_records(cfs: &ReshapeConfig) -> ReshapeResult<(csv::StringRecordsIntoIter<File>, usize)> {
    let rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_path(&cfs.input_path)
        .context(OpeningInputSnafu {
            path: &cfs.input_path,
        })?;
    let mut records = rdr.into_records();
    // The header is dropped without looking at its content.
    if let Some(header) = records.next() {
        let header = header.context(TsvLineParseSnafu { lineno: 1usize })?;
        debug!("read_tsv_ballots: header: {:?}", header);
    }
    Ok((records, 1))
}

pub fn write_tsv_records(cfs: &ReshapeConfig, records: &[SelectionRecord]) -> ReshapeResult<()> {
    let path = cfs.output_path.as_str();
    if cfs.writes_to_stdout() {
        write_records(io::stdout().lock(), path, records)
    } else {
        let file = File::create(path).context(CreatingOutputSnafu { path })?;
        write_records(file, path, records)
    }
}

fn write_records<W: io::Write>(
    wtr: W,
    path: &str,
    records: &[SelectionRecord],
) -> ReshapeResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(wtr);
    // Written by hand: serde only writes a header with the first row, and there may be none.
    writer
        .write_record(OUTPUT_HEADER)
        .context(WritingOutputSnafu { path })?;
    for r in records {
        writer
            .serialize(OutputRow::from(r))
            .context(WritingOutputSnafu { path })?;
    }
    writer.flush().context(FlushingOutputSnafu { path })?;
    Ok(())
}
