use clap::Parser;

/// Reshapes a survey export of two-category ballots into one row per selection.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) The tab-separated export of the survey. The first row is a header and is skipped.
    #[clap(value_parser)]
    pub input: String,

    /// (file path or '-') The tab-separated file to write the selections to. '-' writes
    /// to the standard output.
    #[clap(value_parser)]
    pub output: String,
}
