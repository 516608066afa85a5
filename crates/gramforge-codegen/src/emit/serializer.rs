use gramforge_core::grammar::{Alternative, Symbol};

use super::{ids::NonTerminalIds, terminals::TerminalTable};

/// Emits `serialize_nt{id}` for one non-terminal (spec §4.4).
///
/// A terminal that doesn't fit in the remaining output budget stops the
/// *whole* alternative immediately — no more of its symbols are emitted,
/// matching the reference template's `goto end` rather than skipping just
/// that one terminal. The labeled block below is the allocation-free stand-in
/// for that `goto`.
///
/// The reference template only returns bytes written; `*cursor` advances
/// past a step even when its terminal didn't fit in the budget, so cursor
/// position alone can't tell a caller whether output was truncated. The
/// emitted function additionally returns that truncation bit so
/// `gramforge_core::facade::SerializeOutcome.complete` can mean what it says.
pub fn emit_serialize(
    id: usize,
    name: &str,
    alternatives: &[Alternative],
    ids: &NonTerminalIds,
    terminals: &TerminalTable,
) -> String {
    let mut arms = String::new();
    for (j, alt) in alternatives.iter().enumerate() {
        let mut body = String::new();
        for symbol in alt.symbols() {
            match symbol {
                Symbol::NonTerminal(target) => {
                    let target_id = ids.id_of(target);
                    body.push_str(&format!(
                        "                let (n, child_fit) = serialize_nt{target_id}(seq, cursor, out);\n                written += n;\n                out = &mut out[n..];\n                if !child_fit {{\n                    fit = false;\n                    break 'alt;\n                }}\n"
                    ));
                }
                Symbol::Terminal(term) => {
                    let idx = terminals.index_of(term.as_bytes());
                    let len = term.as_bytes().len();
                    body.push_str(&format!(
                        "                if out.len() < {len} {{\n                    fit = false;\n                    break 'alt;\n                }}\n                out[..{len}].copy_from_slice(TERMINALS[{idx}]);\n                out = &mut out[{len}..];\n                written += {len};\n"
                    ));
                }
            }
        }
        arms.push_str(&format!("            {j} => {{\n{body}            }}\n"));
    }
    format!(
        r#"/// `<{name}>`
fn serialize_nt{id}(seq: &[usize], cursor: &mut usize, out: &mut [u8]) -> (usize, bool) {{
    if *cursor >= seq.len() {{
        return (0, true);
    }}
    let j = seq[*cursor];
    *cursor += 1;
    let mut out: &mut [u8] = out;
    let mut written = 0usize;
    let mut fit = true;
    'alt: {{
        match j {{
{arms}            _ => unreachable!("codegen invariant: alternative index < k for <{name}>"),
        }}
    }}
    (written, fit)
}}

"#
    )
}
