#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The command-line surface of the solver binary.

pub(crate) mod cli;
