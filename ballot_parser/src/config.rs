// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// One survey submission, as read from a row of the export.
///
/// The selection texts are kept exactly as they were read: the parser
/// relies on exact string equality between the two categories.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RawBallot {
    /// The row of this ballot in the source file, starting at 1 with the header.
    pub lineno: usize,
    pub timestamp: String,
    pub first_selection_text: String,
    /// May be empty if the respondent skipped the second category.
    pub second_selection_text: String,
}

/// The two categories a selection can be made in.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub enum Category {
    First,
    Second,
}

impl Category {
    /// The token used for this category in the long-format output.
    pub fn label(&self) -> &'static str {
        match self {
            Category::First => "first_team",
            Category::Second => "second_team",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ******** Output data structures *********

/// One normalized output row: a single entity selected in a single category.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SelectionRecord {
    pub timestamp: String,
    pub handle: String,
    pub group_code: String,
    pub role_tag: String,
    pub category: Category,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum BallotOutcome {
    /// The same descriptor appears in both categories. The whole ballot is discarded.
    Spoiled,
    /// All the selections of the ballot, first category before second category.
    Parsed(Vec<SelectionRecord>),
}

/// Counters accumulated over a whole run.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct RunSummary {
    pub submissions_accepted: u64,
    pub submissions_spoiled: u64,
    pub records_emitted: u64,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &BallotOutcome) {
        match outcome {
            BallotOutcome::Spoiled => {
                self.submissions_spoiled += 1;
            }
            BallotOutcome::Parsed(records) => {
                self.submissions_accepted += 1;
                self.records_emitted += records.len() as u64;
            }
        }
    }

    pub fn total_submissions(&self) -> u64 {
        self.submissions_accepted + self.submissions_spoiled
    }
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} votes cast over {} submissions {} ballots were spoiled (double votes)",
            self.records_emitted, self.submissions_accepted, self.submissions_spoiled
        )
    }
}

// ********* Errors **********

/// The part of a descriptor that could not be extracted.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum DescriptorField {
    GroupCode,
    Handle,
    RoleTag,
}

impl Display for DescriptorField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DescriptorField::GroupCode => "group code",
            DescriptorField::Handle => "handle",
            DescriptorField::RoleTag => "role tag",
        };
        write!(f, "{}", s)
    }
}

/// A descriptor in a ballot does not follow the expected grammar.
///
/// This is not recoverable: the input is either corrupted or its format
/// changed, and no output should be trusted until it is fixed.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct MalformedDescriptorFault {
    pub lineno: usize,
    pub category: Category,
    pub descriptor: String,
    pub field: DescriptorField,
    /// The full text of the category the descriptor was found in.
    pub selection_text: String,
}

impl Error for MalformedDescriptorFault {}

impl Display for MalformedDescriptorFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line {}: cannot find the {} of {:?} in {} selection {:?}",
            self.lineno, self.field, self.descriptor, self.category, self.selection_text
        )
    }
}
