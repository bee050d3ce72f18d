mod config;
pub mod descriptor;
pub mod manual;

use log::{debug, info};

use std::collections::HashSet;

pub use crate::config::*;
use crate::descriptor::parse_descriptor;

/// Separator between the descriptors of a category.
pub const SELECTION_SEPARATOR: &str = ", ";

// The descriptors of one category, in input order.
// An empty text gives a single empty descriptor, which marks a blank category.
fn split_selection(text: &str) -> Vec<&str> {
    text.split(SELECTION_SEPARATOR).collect()
}

/// Parses one ballot into its selection records.
///
/// The ballot is spoiled if any descriptor appears, verbatim, in both
/// categories. In that case no record is produced, even for the descriptors
/// that are not duplicated.
///
/// A category is skipped if it was left blank. Otherwise every descriptor in
/// it must follow the grammar, or the whole ballot fails with a
/// [MalformedDescriptorFault].
pub fn parse_ballot(ballot: &RawBallot) -> Result<BallotOutcome, MalformedDescriptorFault> {
    let first = split_selection(&ballot.first_selection_text);
    let second = split_selection(&ballot.second_selection_text);

    let first_set: HashSet<&str> = first.iter().cloned().collect();
    let double_votes: Vec<&str> = second
        .iter()
        .filter(|d| first_set.contains(*d))
        .cloned()
        .collect();
    if !double_votes.is_empty() {
        info!(
            "parse_ballot: line {}: spoiled ballot, double votes: {:?}",
            ballot.lineno, double_votes
        );
        return Ok(BallotOutcome::Spoiled);
    }

    let mut records: Vec<SelectionRecord> = Vec::new();
    for (category, selection, text) in [
        (Category::First, &first, &ballot.first_selection_text),
        (Category::Second, &second, &ballot.second_selection_text),
    ] {
        // Only the first element decides if the whole category is blank.
        if let Some(d) = selection.first() {
            if d.is_empty() {
                continue;
            }
        }
        for d in selection.iter() {
            let parsed = parse_descriptor(d).map_err(|field| MalformedDescriptorFault {
                lineno: ballot.lineno,
                category,
                descriptor: d.to_string(),
                field,
                selection_text: text.clone(),
            })?;
            records.push(SelectionRecord {
                timestamp: ballot.timestamp.clone(),
                handle: parsed.handle,
                group_code: parsed.group_code,
                role_tag: parsed.role_tag,
                category,
            });
        }
    }

    debug!(
        "parse_ballot: line {}: {} records",
        ballot.lineno,
        records.len()
    );
    Ok(BallotOutcome::Parsed(records))
}

/// Parses a sequence of ballots, in order.
///
/// Returns all the records of the accepted ballots and the counters for the run.
/// The first malformed descriptor stops the run.
pub fn run_ballots<I>(
    ballots: I,
) -> Result<(Vec<SelectionRecord>, RunSummary), MalformedDescriptorFault>
where
    I: IntoIterator<Item = RawBallot>,
{
    let mut summary = RunSummary::default();
    let mut all_records: Vec<SelectionRecord> = Vec::new();
    for ballot in ballots {
        let outcome = parse_ballot(&ballot)?;
        summary.record(&outcome);
        if let BallotOutcome::Parsed(records) = outcome {
            all_records.extend(records);
        }
    }
    info!(
        "run_ballots: processed {} ballots: {:?}",
        summary.total_submissions(),
        summary
    );
    Ok((all_records, summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn ballot(first: &str, second: &str) -> RawBallot {
        RawBallot {
            lineno: 2,
            timestamp: "2019/05/01 12:00:00".to_string(),
            first_selection_text: first.to_string(),
            second_selection_text: second.to_string(),
        }
    }

    fn record(
        handle: &str,
        group_code: &str,
        role_tag: &str,
        category: Category,
    ) -> SelectionRecord {
        SelectionRecord {
            timestamp: "2019/05/01 12:00:00".to_string(),
            handle: handle.to_string(),
            group_code: group_code.to_string(),
            role_tag: role_tag.to_string(),
            category,
        }
    }

    fn parsed(first: &str, second: &str) -> Vec<SelectionRecord> {
        match parse_ballot(&ballot(first, second)) {
            Ok(BallotOutcome::Parsed(records)) => records,
            x => panic!("expected a parsed ballot, got {:?}", x),
        }
    }

    #[test]
    fn single_selection() {
        init();
        assert_eq!(
            parsed("ABC - Foo (DPS)", ""),
            vec![record("Foo", "ABC", "DPS", Category::First)]
        );
    }

    #[test]
    fn identical_entries_spoil() {
        init();
        assert_eq!(
            parse_ballot(&ballot("ABC - Foo (DPS)", "ABC - Foo (DPS)")),
            Ok(BallotOutcome::Spoiled)
        );
    }

    #[test]
    fn one_overlap_spoils_everything() {
        init();
        assert_eq!(
            parse_ballot(&ballot(
                "ABC - Foo (DPS), XYZ - Bar (TANK)",
                "QRS - Baz (SUPP), XYZ - Bar (TANK)"
            )),
            Ok(BallotOutcome::Spoiled)
        );
    }

    #[test]
    fn overlap_is_exact_string_equality() {
        init();
        // Same entity, different text: not a double vote.
        let records = parsed("ABC - Foo (DPS)", "ABC - Foo  (DPS)");
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn overlap_checked_before_grammar() {
        init();
        assert_eq!(
            parse_ballot(&ballot("not a descriptor", "not a descriptor")),
            Ok(BallotOutcome::Spoiled)
        );
    }

    #[test]
    fn blank_second_category() {
        init();
        assert_eq!(
            parsed("ABC - Foo (DPS), XYZ - Bar (TANK/SUPP)", ""),
            vec![
                record("Foo", "ABC", "DPS", Category::First),
                record("Bar", "XYZ", "TANK/SUPP", Category::First),
            ]
        );
    }

    #[test]
    fn blank_first_category() {
        init();
        assert_eq!(
            parsed("", "XYZ - Bar (TANK)"),
            vec![record("Bar", "XYZ", "TANK", Category::Second)]
        );
    }

    #[test]
    fn fully_blank_ballot_is_spoiled() {
        init();
        assert_eq!(parse_ballot(&ballot("", "")), Ok(BallotOutcome::Spoiled));
    }

    #[test]
    fn first_category_before_second() {
        init();
        assert_eq!(
            parsed(
                "ABC - Foo (DPS), XYZ - Bar (TANK)",
                "QRS - Baz (SUPP), ABC - Qux (DPS)"
            ),
            vec![
                record("Foo", "ABC", "DPS", Category::First),
                record("Bar", "XYZ", "TANK", Category::First),
                record("Baz", "QRS", "SUPP", Category::Second),
                record("Qux", "ABC", "DPS", Category::Second),
            ]
        );
    }

    #[test]
    fn missing_role_tag_is_fatal() {
        init();
        let fault = parse_ballot(&ballot(
            "XYZ - Bar (TANK)",
            "ABC - Foo (DPS), ABC - Foo ",
        ))
        .unwrap_err();
        assert_eq!(
            fault,
            MalformedDescriptorFault {
                lineno: 2,
                category: Category::Second,
                descriptor: "ABC - Foo ".to_string(),
                field: DescriptorField::RoleTag,
                selection_text: "ABC - Foo (DPS), ABC - Foo ".to_string(),
            }
        );
    }

    #[test]
    fn descriptor_without_role_is_fatal() {
        init();
        assert!(parse_ballot(&ballot("ABC - Foo", "")).is_err());
    }

    #[test]
    fn inner_empty_descriptor_is_fatal() {
        init();
        let fault =
            parse_ballot(&ballot("ABC - Foo (DPS), ", "XYZ - Bar (TANK)")).unwrap_err();
        assert_eq!(fault.category, Category::First);
        assert_eq!(fault.descriptor, "");
        assert_eq!(fault.field, DescriptorField::GroupCode);
    }

    #[test]
    fn inner_empty_descriptor_overlaps_blank_category() {
        init();
        // The trailing empty descriptor matches the blank second category.
        assert_eq!(
            parse_ballot(&ballot("ABC - Foo (DPS), ", "")),
            Ok(BallotOutcome::Spoiled)
        );
    }

    #[test]
    fn run_counts() {
        init();
        let ballots = vec![
            ballot("ABC - Foo (DPS), XYZ - Bar (TANK)", "QRS - Baz (SUPP)"),
            ballot("ABC - Foo (DPS)", "ABC - Foo (DPS)"),
            ballot("", "XYZ - Bar (TANK)"),
        ];
        let (records, summary) = run_ballots(ballots).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(
            summary,
            RunSummary {
                submissions_accepted: 2,
                submissions_spoiled: 1,
                records_emitted: 4,
            }
        );
        assert_eq!(summary.total_submissions(), 3);
        assert_eq!(
            summary.to_string(),
            "4 votes cast over 2 submissions 1 ballots were spoiled (double votes)"
        );
    }

    #[test]
    fn run_stops_at_first_fault() {
        init();
        let mut bad = ballot("ABC - Foo (dps)", "");
        bad.lineno = 3;
        let ballots = vec![ballot("ABC - Foo (DPS)", ""), bad];
        let fault = run_ballots(ballots).unwrap_err();
        assert_eq!(fault.lineno, 3);
        assert_eq!(fault.field, DescriptorField::RoleTag);
    }
}
