mod macros;
mod objects;

pub use objects::*;
