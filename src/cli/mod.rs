/// Classify one request read from standard input
pub mod predict;
