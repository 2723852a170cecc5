pub mod ast;
pub mod parser;
pub mod server;

pub use ast::*;
pub use parser::{build_quicklist, extract_blocks};
