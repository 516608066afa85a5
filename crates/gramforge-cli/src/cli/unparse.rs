use std::{fs, path::PathBuf};

use anyhow::Context;
use tracing::info;

use super::{GlobalOptions, demo_engine::DemoGrammar, derivation_io};

/// Reconstructs a derivation from a byte string against a bundled demo
/// grammar (spec §4.5/§6 `unparse_sequence`).
#[derive(Debug, clap::Parser)]
pub(super) struct UnparseCommand {
    /// Which bundled demo grammar to recognize against.
    #[clap(long, value_enum, default_value = "binary")]
    grammar: DemoGrammar,

    /// Path to the raw bytes to unparse.
    #[clap(long, short)]
    input: PathBuf,

    /// Derivation buffer capacity (spec §3 `cap`).
    #[clap(long, default_value_t = 4096)]
    capacity: usize,

    /// Write the recovered derivation (one alternative index per line) here.
    #[clap(long, short)]
    output: Option<PathBuf>,
}

impl UnparseCommand {
    pub(super) fn run(self, _global_options: GlobalOptions) -> anyhow::Result<()> {
        let input = fs::read(&self.input).with_context(|| format!("reading input file {}", self.input.display()))?;
        let mut buf = vec![0usize; self.capacity];
        let len = self.grammar.unparse(&mut buf, &input);
        if len == 0 {
            anyhow::bail!("input does not belong to the grammar (or the derivation buffer is too small)");
        }
        let derivation = &buf[..len];
        info!(derivation_len = len, "unparsed input");

        match &self.output {
            Some(path) => derivation_io::write(path, derivation)?,
            None => println!("{}", derivation.iter().map(|step| step.to_string()).collect::<Vec<_>>().join("\n")),
        }
        Ok(())
    }
}
