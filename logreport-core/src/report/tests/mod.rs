mod duration_tests;
mod parse_tests;
