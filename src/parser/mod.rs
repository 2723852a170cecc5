pub mod extract;
pub mod hierarchy;
pub mod utils;

pub use extract::*;
pub use hierarchy::*;
