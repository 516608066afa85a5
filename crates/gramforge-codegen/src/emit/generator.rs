use gramforge_core::grammar::{Alternative, Symbol};

use super::ids::NonTerminalIds;

/// Emits `generate_nt{id}` for one non-terminal (spec §4.3).
///
/// Every emitted body is built on [`DerivationBuffer::choose`], the
/// centralized replay-or-decide helper the Design Notes recommend: it
/// replays `buf[cursor]` when a prefix is being preserved, or samples and
/// pushes a fresh choice otherwise, and the generated `match` only has to
/// dispatch on whichever alternative `choose` returned.
pub fn emit_generate(id: usize, name: &str, alternatives: &[Alternative], ids: &NonTerminalIds) -> String {
    let k = alternatives.len();
    let mut arms = String::new();
    for (j, alt) in alternatives.iter().enumerate() {
        let mut body = String::new();
        for symbol in alt.symbols() {
            if let Symbol::NonTerminal(target) = symbol {
                let target_id = ids.id_of(target);
                body.push_str(&format!(
                    "            if !generate_nt{target_id}(buf, cursor, rng) {{\n                return false;\n            }}\n"
                ));
            }
        }
        arms.push_str(&format!("        {j} => {{\n{body}            true\n        }}\n"));
    }
    format!(
        r#"/// `<{name}>`
fn generate_nt{id}(buf: &mut DerivationBuffer<'_>, cursor: &mut usize, rng: &mut dyn Prng) -> bool {{
    let k = NonZeroUsize::new({k}).expect("non-terminal <{name}> has at least one alternative");
    let Some(j) = buf.choose(cursor, k, rng) else {{
        return false;
    }};
    match j {{
{arms}        _ => unreachable!("codegen invariant: alternative index < {k} for <{name}>"),
    }}
}}

"#
    )
}
