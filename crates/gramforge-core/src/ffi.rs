//! The one process-wide-state shim in the workspace.
//!
//! Every safe API threads a [`crate::rng::Prng`] handle explicitly. Drivers
//! that can only hold a C function pointer (spec §6's `seed_generator`
//! contract, modeled on the libFuzzer custom-mutator ABI) need somewhere to
//! keep that handle between calls; this module is that somewhere, gated
//! behind the `ffi` feature so a pure-Rust consumer never pays for it.

use std::sync::{Mutex, OnceLock};

use crate::rng::{DeterministicPrng, Prng};

static GLOBAL_PRNG: OnceLock<Mutex<DeterministicPrng>> = OnceLock::new();

fn cell() -> &'static Mutex<DeterministicPrng> {
    GLOBAL_PRNG.get_or_init(|| Mutex::new(DeterministicPrng::from_seed(0)))
}

/// Re-seeds the process-wide PRNG used by the C-ABI shim. Corresponds to
/// spec §6's `seed_generator(seed)`.
pub fn seed_generator(seed: u64) {
    *cell().lock().expect("global prng mutex poisoned") = DeterministicPrng::from_seed(seed);
}

/// Runs `f` with exclusive access to the process-wide PRNG.
pub fn with_global_prng<R>(f: impl FnOnce(&mut dyn Prng) -> R) -> R {
    let mut guard = cell().lock().expect("global prng mutex poisoned");
    f(&mut *guard)
}
