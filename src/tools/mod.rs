//! Tool implementations shared by the CLI and the stdio server

pub mod search;
pub mod stats;
pub mod watch;

#[cfg(test)]
mod tools_argument_tests;
