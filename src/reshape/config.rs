use crate::args::Args;

/// Special output path for the standard output.
pub const STDOUT_PATH: &str = "-";

/// Everything a run needs to know, passed explicitly to the driver.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ReshapeConfig {
    pub input_path: String,
    pub output_path: String,
}

impl ReshapeConfig {
    pub fn new(input_path: &str, output_path: &str) -> ReshapeConfig {
        ReshapeConfig {
            input_path: input_path.to_string(),
            output_path: output_path.to_string(),
        }
    }

    pub fn writes_to_stdout(&self) -> bool {
        self.output_path == STDOUT_PATH
    }
}

impl From<&Args> for ReshapeConfig {
    fn from(args: &Args) -> Self {
        ReshapeConfig::new(&args.input, &args.output)
    }
}
