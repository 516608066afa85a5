use std::path::PathBuf;

use anyhow::Context;
use gramforge_core::rng::DeterministicPrng;
use tracing::info;

use super::{GlobalOptions, demo_engine::DemoGrammar, derivation_io};

/// Drives a bundled demo grammar's generator/mutator (spec §6's
/// `mutate_sequence`, `len = 0` meaning "generate from scratch") and prints
/// the resulting derivation and its serialization.
#[derive(Debug, clap::Parser)]
pub(super) struct GenerateCommand {
    /// Which bundled demo grammar to drive.
    #[clap(long, value_enum, default_value = "binary")]
    grammar: DemoGrammar,

    /// Seed for the deterministic PRNG (spec §6 `seed_generator`).
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Derivation buffer capacity (spec §3 `cap`).
    #[clap(long, default_value_t = 4096)]
    capacity: usize,

    /// Output byte budget used to preview the serialized form.
    #[clap(long, default_value_t = 65536)]
    out_capacity: usize,

    /// Write the derivation (one alternative index per line) to this file.
    #[clap(long, short)]
    output: Option<PathBuf>,
}

impl GenerateCommand {
    pub(super) fn run(self, _global_options: GlobalOptions) -> anyhow::Result<()> {
        let grammar = self.grammar;
        let mut rng = DeterministicPrng::from_seed(self.seed);
        let mut buf = vec![0usize; self.capacity];
        let len = grammar.mutate(&mut buf, 0, &mut rng);
        let derivation = &buf[..len];

        let mut out = vec![0u8; self.out_capacity];
        let outcome = grammar.serialize(derivation, &mut out);
        info!(
            seed = self.seed,
            derivation_len = len,
            capacity_exhausted = len == self.capacity,
            bytes_written = outcome.bytes_written,
            complete = outcome.complete,
            "generated derivation"
        );
        println!("{}", String::from_utf8_lossy(&out[..outcome.bytes_written]));

        if let Some(output) = &self.output {
            derivation_io::write(output, derivation).context("writing derivation file")?;
        }
        Ok(())
    }
}
