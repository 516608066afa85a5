use gramforge_demo::{arithmetic, binary};

#[test]
fn unparse_recognizes_a_member_of_the_binary_language() {
    let mut seq = [0usize; 16];
    let len = binary::unparse_sequence(&mut seq, b"110");
    assert_eq!(len, 3);
    assert_eq!(&seq[..len], &[1, 1, 0]);
}

#[test]
fn unparse_rejects_a_non_member_of_the_binary_language() {
    let mut seq = [0usize; 16];
    let len = binary::unparse_sequence(&mut seq, b"12");
    assert_eq!(len, 0);
}

#[test]
fn unparse_rejects_empty_input() {
    let mut seq = [0usize; 16];
    let len = binary::unparse_sequence(&mut seq, b"");
    assert_eq!(len, 0);
}

#[test]
fn unparse_rejects_a_zero_capacity_buffer() {
    let mut seq: [usize; 0] = [];
    let len = binary::unparse_sequence(&mut seq, b"0");
    assert_eq!(len, 0);
}

#[test]
fn arithmetic_unparse_recognizes_a_parenthesized_term() {
    let mut seq = [0usize; 64];
    let len = arithmetic::unparse_sequence(&mut seq, b"(x)");
    assert!(len > 0);
}

#[test]
fn arithmetic_unparse_rejects_input_starting_with_an_operator() {
    let mut seq = [0usize; 64];
    let len = arithmetic::unparse_sequence(&mut seq, b"+x");
    assert_eq!(len, 0);
}

#[test]
fn arithmetic_unparse_rejects_unbalanced_parentheses() {
    let mut seq = [0usize; 64];
    let len = arithmetic::unparse_sequence(&mut seq, b"(x");
    assert_eq!(len, 0);
}
