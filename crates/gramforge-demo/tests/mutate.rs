use gramforge_core::rng::DeterministicPrng;
use gramforge_demo::binary;

/// Mutation as truncate-and-replay: keeping a prefix of a previous derivation
/// and re-running the generator from there must leave that prefix untouched.
#[test]
fn mutation_preserves_the_retained_prefix() {
    let mut rng = DeterministicPrng::from_seed(11);
    let mut buf = [0usize; 4096];

    let initial_len = binary::mutate_sequence(&mut buf, 0, &mut rng);
    let preserved = buf[..initial_len].to_vec();

    let half = initial_len / 2;
    let mutated_len = binary::mutate_sequence(&mut buf, half, &mut rng);

    assert_eq!(
        buf[..half],
        preserved[..half],
        "the retained prefix must be replayed verbatim, not resampled"
    );
    assert!(mutated_len >= half);
}

/// Repeatedly halving `len` and re-running the generator (the C prototype's
/// `test_mutate.c` loop) must keep producing valid sequences.
#[test]
fn repeated_halving_keeps_producing_valid_output() {
    let mut rng = DeterministicPrng::from_seed(23);
    let mut buf = [0usize; 4096];
    let mut len = binary::mutate_sequence(&mut buf, 0, &mut rng);

    for _ in 0..3 {
        len = binary::mutate_sequence(&mut buf, len / 2, &mut rng);
        let mut out = [0u8; 8192];
        let outcome = binary::serialize_sequence(&buf[..len], &mut out);
        assert!(outcome.complete);
        assert!(outcome.bytes_written > 0);
    }
}
