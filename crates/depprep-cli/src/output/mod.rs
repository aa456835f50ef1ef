//! Output formatting module.

mod formatter;
mod human;
mod json;

pub use formatter::JsonOutput;
pub use formatter::OutputFormatter;
pub use formatter::Status;

use crate::cli::OutputArgs;
use human::HumanFormatter;
use json::JsonFormatter;

/// Creates an output formatter based on CLI flags
pub fn create_formatter(args: &OutputArgs) -> Box<dyn OutputFormatter> {
    if args.json {
        Box::new(JsonFormatter)
    } else {
        Box::new(HumanFormatter::new(args.verbose, args.quiet))
    }
}
