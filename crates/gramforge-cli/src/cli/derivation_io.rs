use std::{fs, path::Path};

use anyhow::Context;

/// The on-disk text format for a derivation: one alternative-index integer
/// per line. There's no binary wire format to match here (spec §6's "wire
/// format" is the in-memory machine-word array the libFuzzer harness mutates
/// directly); this is purely a human-readable convenience for the CLI.
pub(super) fn read(path: &Path) -> anyhow::Result<Vec<usize>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading derivation file {}", path.display()))?;
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.trim()
                .parse::<usize>()
                .with_context(|| format!("parsing derivation line {line:?}"))
        })
        .collect()
}

pub(super) fn write(path: &Path, derivation: &[usize]) -> anyhow::Result<()> {
    let text = derivation.iter().map(|step| step.to_string()).collect::<Vec<_>>().join("\n");
    fs::write(path, text).with_context(|| format!("writing derivation file {}", path.display()))
}
