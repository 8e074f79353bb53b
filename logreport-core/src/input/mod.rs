mod lines;

pub use lines::LogLines;
