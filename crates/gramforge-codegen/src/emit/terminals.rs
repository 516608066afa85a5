use gramforge_core::grammar::{Grammar, Symbol};
use indexmap::IndexSet;

/// Deduplicates terminal byte content across the whole grammar so each
/// distinct terminal is emitted exactly once as read-only data (spec §4.1).
#[derive(Debug)]
pub struct TerminalTable {
    entries: IndexSet<Vec<u8>>,
}

impl TerminalTable {
    pub fn new(grammar: &Grammar) -> Self {
        let mut entries = IndexSet::new();
        for alt in grammar.rules().values().flatten() {
            for symbol in alt.symbols() {
                if let Symbol::Terminal(term) = symbol {
                    entries.insert(term.as_bytes().to_vec());
                }
            }
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index_of(&self, bytes: &[u8]) -> usize {
        self.entries
            .get_index_of(bytes)
            .unwrap_or_else(|| panic!("terminal {bytes:?} was not registered during construction"))
    }

    /// Renders the `TERMINALS` const the emitted module's `serialize_N` /
    /// `unparse_N` functions index into. Terminals of length 1, 2, 4, 8 are
    /// plain byte-array literals; the target compiler is expected to
    /// specialize the resulting bounded-size copy/compare (spec §4.1).
    pub fn render_const(&self) -> String {
        let mut out = String::from("const TERMINALS: &[&[u8]] = &[\n");
        for bytes in &self.entries {
            out.push_str(&format!(
                "    {}, // {:?}\n",
                byte_array_literal(bytes),
                String::from_utf8_lossy(bytes)
            ));
        }
        out.push_str("];\n\n");
        out
    }
}

fn byte_array_literal(bytes: &[u8]) -> String {
    let items = bytes
        .iter()
        .map(|b| format!("0x{b:02x}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("&[{items}]")
}

#[cfg(test)]
mod tests {
    use gramforge_core::grammar::{Alternative, Terminal};
    use indexmap::IndexMap;

    use super::*;

    #[test]
    fn dedups_identical_terminals() {
        let rules = IndexMap::from([(
            "E".to_owned(),
            vec![
                Alternative::new(vec![Symbol::Terminal(Terminal::new(*b"x"))]),
                Alternative::new(vec![Symbol::Terminal(Terminal::new(*b"x"))]),
                Alternative::new(vec![Symbol::Terminal(Terminal::new(*b"y"))]),
            ],
        )]);
        let grammar = Grammar::new("E", rules);
        let table = TerminalTable::new(&grammar);
        assert_eq!(table.entries.len(), 2);
        assert_eq!(table.index_of(b"x"), table.index_of(b"x"));
        assert_ne!(table.index_of(b"x"), table.index_of(b"y"));
    }
}
