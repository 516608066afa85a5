use crate::{rng::Prng, sequence::DerivationBuffer};

/// The three engine procedures the code generator emits for a grammar's
/// entry-point non-terminal (spec §6). A compiled grammar module implements
/// this once, at its entry point; every other non-terminal's `generate_N` /
/// `serialize_N` / `unparse_N` is a private helper reached only through it.
pub trait Engine {
    /// Extends (or, with `cursor == 0` and `len == 0`, creates from scratch)
    /// the derivation starting at the entry point. Returns `false` only on
    /// capacity exhaustion (spec §4.3).
    fn generate_entry(buf: &mut DerivationBuffer<'_>, cursor: &mut usize, rng: &mut dyn Prng) -> bool;

    /// Renders the sub-derivation starting at `seq[*cursor]` to `out`,
    /// returning the number of bytes written and whether every terminal fit
    /// in `out`, and advancing `*cursor` past every step it consumed, even
    /// steps whose terminal didn't fit (spec §4.4).
    fn serialize_entry(seq: &[usize], cursor: &mut usize, out: &mut [u8]) -> (usize, bool);

    /// Recognizes a prefix of `input[*cursor..]` belonging to the entry
    /// point, recording the derivation into `buf` and advancing `*cursor`
    /// past the bytes consumed (spec §4.5).
    fn unparse_entry(buf: &mut DerivationBuffer<'_>, input: &[u8], cursor: &mut usize) -> bool;
}

/// The outcome of [`serialize_sequence`]: the Open Question in spec §9
/// ("Consumers may want an explicit incomplete flag") resolved by adding
/// `complete` alongside the byte count the source contract returns alone.
/// `complete` is false exactly when some terminal didn't fit in `out`, not
/// merely when the output buffer happened to run out at the very end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOutcome {
    pub bytes_written: usize,
    pub complete: bool,
}

/// `mutate_sequence` of spec §6: treats `buf[0..len)` as a preserved prefix
/// (`len == 0` means "generate from scratch"), replays it, and extends the
/// derivation by sampling from `rng` for every position beyond it. Returns
/// the new derivation length.
///
/// A `len` greater than `buf.len()` (ill-formed input, spec §9's open
/// question) is clamped to capacity rather than rejected.
pub fn mutate_sequence<E: Engine>(buf: &mut [usize], len: usize, rng: &mut dyn Prng) -> usize {
    if buf.is_empty() {
        return 0;
    }
    let mut sequence = DerivationBuffer::new(buf, len);
    let mut cursor = 0usize;
    // Failure means capacity exhaustion; the buffer still holds a valid
    // prefix (spec §4.3 "Failure policy"), which is exactly what we return.
    let _ = E::generate_entry(&mut sequence, &mut cursor, rng);
    sequence.len()
}

/// `serialize_sequence` of spec §6: a pure function of `(seq, out)` that
/// never consults randomness. Stops cleanly on output-capacity exhaustion.
///
/// An empty `out` is not itself a failure: a non-empty `seq` whose chosen
/// alternative is symbol-less (spec §3 allows empty alternatives) serializes
/// to zero bytes and is still `complete`, so only an empty `seq` short-
/// circuits here — everything else goes through `E::serialize_entry`, which
/// is what actually decides `complete` against what `out` could hold.
pub fn serialize_sequence<E: Engine>(seq: &[usize], out: &mut [u8]) -> SerializeOutcome {
    if seq.is_empty() {
        return SerializeOutcome {
            bytes_written: 0,
            complete: true,
        };
    }
    let mut cursor = 0usize;
    let (bytes_written, complete) = E::serialize_entry(seq, &mut cursor, out);
    SerializeOutcome {
        bytes_written,
        complete,
    }
}

/// `unparse_sequence` of spec §6: reconstructs a derivation from `input`
/// into `seq_buf`, returning its length, or `0` on failure or empty input.
pub fn unparse_sequence<E: Engine>(seq_buf: &mut [usize], input: &[u8]) -> usize {
    if seq_buf.is_empty() || input.is_empty() {
        return 0;
    }
    let mut sequence = DerivationBuffer::new(seq_buf, 0);
    let mut cursor = 0usize;
    if !E::unparse_entry(&mut sequence, input, &mut cursor) {
        return 0;
    }
    sequence.len()
}
