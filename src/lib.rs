// lib.rs

pub mod completion;
pub mod errors;
pub mod history;
pub mod parser;
pub mod repl;
pub mod util;
