use gramforge_core::rng::DeterministicPrng;
use gramforge_demo::binary;

/// Every string the binary grammar (`E -> '0' | '1' E`) can generate is of
/// the form `1*0`: zero or more `1`s followed by exactly one `0`.
fn assert_is_binary_language(bytes: &[u8]) {
    assert!(!bytes.is_empty(), "generated output must not be empty");
    let (ones, last) = bytes.split_at(bytes.len() - 1);
    assert!(ones.iter().all(|&b| b == b'1'), "prefix must be all '1'");
    assert_eq!(last, b"0", "output must end in '0'");
}

#[test]
fn generation_is_sound() {
    let mut rng = DeterministicPrng::from_seed(1);
    let mut buf = [0usize; 64];
    let len = binary::mutate_sequence(&mut buf, 0, &mut rng);
    assert!(len > 0);

    let mut out = [0u8; 256];
    let outcome = binary::serialize_sequence(&buf[..len], &mut out);
    assert!(outcome.complete);
    assert_is_binary_language(&out[..outcome.bytes_written]);
}

#[test]
fn same_seed_generates_the_same_sequence() {
    let mut buf_a = [0usize; 64];
    let mut buf_b = [0usize; 64];
    let len_a = binary::mutate_sequence(&mut buf_a, 0, &mut DeterministicPrng::from_seed(7));
    let len_b = binary::mutate_sequence(&mut buf_b, 0, &mut DeterministicPrng::from_seed(7));
    assert_eq!(len_a, len_b);
    assert_eq!(buf_a[..len_a], buf_b[..len_b]);
}

#[test]
fn generation_never_exceeds_capacity() {
    let mut rng = DeterministicPrng::from_seed(3);
    let mut buf = [0usize; 4];
    let len = binary::mutate_sequence(&mut buf, 0, &mut rng);
    assert!(len <= buf.len());
}
