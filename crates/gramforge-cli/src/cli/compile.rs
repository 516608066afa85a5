use std::{fs, path::PathBuf};

use anyhow::Context;
use gramforge_codegen::{CodegenOptions, compile};
use gramforge_core::grammar::Grammar;
use tracing::info;

use super::GlobalOptions;

/// Reads a grammar IR file and writes the engine source `gramforge-codegen`
/// compiles it to (spec §4.1: "Input: Grammar IR. Output: a self-contained
/// engine source module").
#[derive(Debug, clap::Parser)]
pub(super) struct CompileCommand {
    /// Path to the grammar IR, serialized as JSON (`gramforge_core::grammar::Grammar`).
    #[clap(long, short)]
    grammar: PathBuf,

    /// Path the generated Rust source module is written to.
    #[clap(long, short)]
    output: PathBuf,

    /// Name given to the generated `Engine` struct.
    #[clap(long, default_value = "CompiledGrammar")]
    engine_name: String,

    /// Additionally emit the `#[no_mangle] extern "C"` libFuzzer-shaped shim.
    #[clap(long)]
    ffi: bool,
}

impl CompileCommand {
    pub(super) fn run(self, _global_options: GlobalOptions) -> anyhow::Result<()> {
        let text = fs::read_to_string(&self.grammar)
            .with_context(|| format!("reading grammar file {}", self.grammar.display()))?;
        let grammar: Grammar = serde_json::from_str(&text).context("parsing grammar JSON")?;

        let options = CodegenOptions {
            engine_name: self.engine_name,
            include_ffi_shim: self.ffi,
        };
        let source = compile(&grammar, &options).context("compiling grammar to engine source")?;

        if let Some(parent) = self.output.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).context("creating output directory")?;
        }
        fs::write(&self.output, source)
            .with_context(|| format!("writing engine source to {}", self.output.display()))?;
        info!(
            non_terminals = grammar.rules().len(),
            output = %self.output.display(),
            "compiled grammar to engine source"
        );
        Ok(())
    }
}
