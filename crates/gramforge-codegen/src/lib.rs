#![warn(missing_debug_implementations, rust_2018_idioms)]

pub mod emit;
pub mod error;
pub mod recursion;

pub use emit::{CodegenOptions, compile};
pub use error::CodegenError;
