pub mod cli;
pub mod conf;
pub mod input;
pub mod logging;
pub mod report;
