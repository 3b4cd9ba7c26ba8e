pub mod evaluation;

pub use evaluation::*;
