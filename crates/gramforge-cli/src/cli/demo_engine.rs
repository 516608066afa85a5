use gramforge_core::{facade::SerializeOutcome, rng::Prng};
use gramforge_demo::{arithmetic, binary};

/// Selects which of `gramforge-demo`'s build-time-compiled engines a smoke-test
/// subcommand drives. Both are grammars from spec.md §8's scenario family:
/// `binary` is `E -> '0' | '1' E`, `arithmetic` adds nested non-terminals and
/// multi-symbol alternatives.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub(crate) enum DemoGrammar {
    Binary,
    Arithmetic,
}

impl DemoGrammar {
    pub(crate) fn mutate(self, buf: &mut [usize], len: usize, rng: &mut dyn Prng) -> usize {
        match self {
            Self::Binary => binary::mutate_sequence(buf, len, rng),
            Self::Arithmetic => arithmetic::mutate_sequence(buf, len, rng),
        }
    }

    pub(crate) fn serialize(self, seq: &[usize], out: &mut [u8]) -> SerializeOutcome {
        match self {
            Self::Binary => binary::serialize_sequence(seq, out),
            Self::Arithmetic => arithmetic::serialize_sequence(seq, out),
        }
    }

    pub(crate) fn unparse(self, seq_buf: &mut [usize], input: &[u8]) -> usize {
        match self {
            Self::Binary => binary::unparse_sequence(seq_buf, input),
            Self::Arithmetic => arithmetic::unparse_sequence(seq_buf, input),
        }
    }
}
