#![warn(missing_debug_implementations, rust_2018_idioms)]

//! Runtime support consumed by the engine sources that `gramforge-codegen`
//! emits: the Grammar IR (§3), the caller-owned Derivation Buffer (§3/§4.2),
//! the PRNG contract (§2), the per-grammar [`facade::Engine`] trait and the
//! facade functions built on it (§6), and the error taxonomy (§7).
//!
//! This crate never allocates on the hot path and holds no long-lived
//! process state outside the optional [`ffi`] shim.

pub mod error;
pub mod facade;
pub mod grammar;
pub mod rng;
pub mod sequence;

#[cfg(feature = "ffi")]
pub mod ffi;
