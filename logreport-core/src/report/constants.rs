/// Size of every ranked view in the report (addresses, longest requests).
pub const TOP_N: usize = 3;

pub const LOG_EXTENSION: &str = "log";
pub const LOG_GLOB: &str = "*.log";

pub const DEFAULT_LOG_FILE: &str = "access.log";
pub const DEFAULT_LOG_FOLDER: &str = "./";
pub const DEFAULT_REPORT_PATH: &str = "report.json";

pub const REPORT_JSON_INDENT: &[u8] = b"    ";
