use gramforge_core::grammar::{Alternative, Symbol};

use super::{ids::NonTerminalIds, terminals::TerminalTable};

/// Emits `unparse_nt{id}` for one non-terminal (spec §4.5): a top-down
/// recognizer with bounded backtracking, trying alternatives in grammar
/// order and committing the first one that matches.
///
/// The slot at `seq_idx` is claimed before any alternative is attempted so
/// that nested recursive calls record their own choices at the positions a
/// matching `generate_N` / `serialize_N` pass would visit them at. A failed
/// attempt restores `len` back down to `seq_idx + 1`, erasing whatever the
/// failed attempt's own child recursions claimed, before the next
/// alternative is tried.
pub fn emit_unparse(
    id: usize,
    name: &str,
    alternatives: &[Alternative],
    ids: &NonTerminalIds,
    terminals: &TerminalTable,
) -> String {
    let mut attempts = String::new();
    for (j, alt) in alternatives.iter().enumerate() {
        let mut body = String::new();
        for symbol in alt.symbols() {
            match symbol {
                Symbol::Terminal(term) => {
                    let idx = terminals.index_of(term.as_bytes());
                    let len = term.as_bytes().len();
                    body.push_str(&format!(
                        "                if input.len() < tmp_cursor + {len} || &input[tmp_cursor..tmp_cursor + {len}] != TERMINALS[{idx}] {{\n                    break 'attempt false;\n                }}\n                tmp_cursor += {len};\n"
                    ));
                }
                Symbol::NonTerminal(target) => {
                    let target_id = ids.id_of(target);
                    body.push_str(&format!(
                        "                if !unparse_nt{target_id}(buf, input, &mut tmp_cursor) {{\n                    break 'attempt false;\n                }}\n"
                    ));
                }
            }
        }
        attempts.push_str(&format!(
            r#"        {{
            let mut tmp_cursor = *cursor;
            let matched = 'attempt: {{
{body}                true
            }};
            if matched {{
                *cursor = tmp_cursor;
                buf.write(seq_idx, {j});
                return true;
            }}
            buf.set_len(seq_idx + 1);
        }}
"#
        ));
    }
    format!(
        r#"/// `<{name}>`
fn unparse_nt{id}(buf: &mut DerivationBuffer<'_>, input: &[u8], cursor: &mut usize) -> bool {{
    let Some(seq_idx) = buf.claim() else {{
        return false;
    }};
{attempts}        buf.set_len(seq_idx);
    false
}}

"#
    )
}
