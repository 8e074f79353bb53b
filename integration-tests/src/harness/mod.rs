mod fixtures;
pub mod tracing;

pub use fixtures::{ReportRun, fixture_path};
pub use self::tracing::{CapturedEvent, init_test_tracing};
