mod args;
mod hint;

pub use args::ReportArgs;
pub use hint::{config_error_hint, print_config_error};
