//! Terminal host pieces for the to-do table: a ureq transport, a file-backed
//! view and the command prompt.

pub mod commands;
pub mod repl;
pub mod transport;
pub mod view;
