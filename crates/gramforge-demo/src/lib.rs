#![warn(missing_debug_implementations, rust_2018_idioms)]

//! Two grammars compiled at build time by `gramforge-codegen` and pulled in
//! verbatim: `binary` is the `E -> '0' | '1' E` scenario, `arithmetic` adds
//! nested non-terminals and multi-symbol alternatives.

pub mod binary {
    include!(concat!(env!("OUT_DIR"), "/binary_engine.rs"));
}

pub mod arithmetic {
    include!(concat!(env!("OUT_DIR"), "/arithmetic_engine.rs"));
}
