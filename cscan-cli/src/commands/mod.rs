//! Command modules for the cscan CLI.
//!
//! Each subcommand lives in its own file. Shared scanning and printing is in
//! [`common`].

pub mod common;

pub mod demo;
pub mod lex;

pub use demo::run_demo;
pub use lex::{run_lex, LexArgs};
