use std::{io::Write, path::PathBuf};

use anyhow::Context;
use tracing::info;

use super::{GlobalOptions, demo_engine::DemoGrammar, derivation_io};

/// Renders a derivation file to bytes against a bundled demo grammar — the
/// print-loop path of the reference prototype's AFL `main.c`, without AFL
/// itself (spec.md's Non-goals exclude the AFL/libFuzzer harness, not a
/// plain reproduce/print path).
#[derive(Debug, clap::Parser)]
pub(super) struct SerializeCommand {
    /// Which bundled demo grammar the derivation was produced against.
    #[clap(long, value_enum, default_value = "binary")]
    grammar: DemoGrammar,

    /// Path to a derivation file (one alternative index per line).
    #[clap(long, short)]
    derivation: PathBuf,

    /// Output byte budget (spec §4.4 `out_len`).
    #[clap(long, default_value_t = 65536)]
    out_capacity: usize,

    /// Write the serialized bytes here instead of stdout.
    #[clap(long, short)]
    output: Option<PathBuf>,
}

impl SerializeCommand {
    pub(super) fn run(self, _global_options: GlobalOptions) -> anyhow::Result<()> {
        let derivation = derivation_io::read(&self.derivation)?;
        let mut out = vec![0u8; self.out_capacity];
        let outcome = self.grammar.serialize(&derivation, &mut out);
        if !outcome.complete {
            tracing::warn!(
                bytes_written = outcome.bytes_written,
                "output truncated: out_capacity was too small for a complete serialization"
            );
        }
        info!(bytes_written = outcome.bytes_written, complete = outcome.complete, "serialized derivation");

        let bytes = &out[..outcome.bytes_written];
        match &self.output {
            Some(path) => {
                std::fs::write(path, bytes).with_context(|| format!("writing serialized output to {}", path.display()))?;
            }
            None => {
                std::io::stdout().write_all(bytes).context("writing serialized output to stdout")?;
            }
        }
        Ok(())
    }
}
