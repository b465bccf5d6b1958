/// Presentation helpers for the command-line reports

pub mod display;
