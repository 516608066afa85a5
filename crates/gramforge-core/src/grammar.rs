use core::fmt;
use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GrammarError;

/// A fixed, non-empty byte sequence contributed verbatim to the output.
///
/// Terminal content is immutable; the code generator embeds it once as
/// read-only data and every alternative that uses it refers to the same copy.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[display("\"{}\"", String::from_utf8_lossy(_0).escape_default())]
pub struct Terminal(pub Vec<u8>);

impl Terminal {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// One element of an alternative: either a literal [`Terminal`] or a
/// [`Symbol::NonTerminal`] reference to another rule by name.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Symbol {
    Terminal(Terminal),
    #[display("<{_0}>")]
    NonTerminal(String),
}

/// One production of a non-terminal: an ordered, possibly empty, list of
/// symbols visited left-to-right.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    symbols: Vec<Symbol>,
}

impl Alternative {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Display for Alternative {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.symbols.is_empty() {
            write!(f, "\u{03b5}")
        } else {
            write!(f, "{}", self.symbols.iter().format(" "))
        }
    }
}

impl FromIterator<Symbol> for Alternative {
    fn from_iter<T: IntoIterator<Item = Symbol>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A normalized, closed context-free grammar.
///
/// Rules are stored in an [`IndexMap`] so that non-terminal iteration order
/// (and therefore the alternative-index wire encoding of §3) is stable and
/// reproducible across runs, matching insertion order from the source
/// grammar file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grammar {
    entry_point: String,
    rules: IndexMap<String, Vec<Alternative>>,
}

impl Grammar {
    pub fn new(entry_point: impl Into<String>, rules: IndexMap<String, Vec<Alternative>>) -> Self {
        Self {
            entry_point: entry_point.into(),
            rules,
        }
    }

    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    pub fn rules(&self) -> &IndexMap<String, Vec<Alternative>> {
        &self.rules
    }

    pub fn alternatives(&self, non_terminal: &str) -> Option<&[Alternative]> {
        self.rules.get(non_terminal).map(Vec::as_slice)
    }

    /// Checks closure (every reference resolves) and that the entry point and
    /// every non-terminal has at least one alternative. Does not attempt to
    /// prove the grammar terminates (§3: "the code generator is not required
    /// to verify this").
    pub fn validate(&self) -> Result<(), GrammarError> {
        if self.rules.is_empty() {
            return Err(GrammarError::EmptyGrammar);
        }
        if !self.rules.contains_key(&self.entry_point) {
            return Err(GrammarError::UnknownEntryPoint {
                name: self.entry_point.clone(),
            });
        }
        for (name, alts) in &self.rules {
            if alts.is_empty() {
                return Err(GrammarError::NoAlternatives { name: name.clone() });
            }
        }
        for alt in self.rules.values().flatten() {
            for symbol in alt.symbols() {
                if let Symbol::NonTerminal(name) = symbol
                    && !self.rules.contains_key(name)
                {
                    return Err(GrammarError::MissingRule { name: name.clone() });
                }
            }
        }
        debug!(non_terminals = self.rules.len(), entry_point = %self.entry_point, "grammar validated");
        Ok(())
    }
}

impl Display for Grammar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Entry point: <{}>", self.entry_point)?;
        for (name, alts) in &self.rules {
            writeln!(f, "<{}> ::=\n    {}\n", name, alts.iter().format("\n  | "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary_grammar() -> Grammar {
        // E -> '0' | '1' E
        let rules = IndexMap::from([(
            "E".to_owned(),
            vec![
                Alternative::new(vec![Symbol::Terminal(Terminal::new(*b"0"))]),
                Alternative::new(vec![
                    Symbol::Terminal(Terminal::new(*b"1")),
                    Symbol::NonTerminal("E".to_owned()),
                ]),
            ],
        )]);
        Grammar::new("E", rules)
    }

    #[test]
    fn validates_closed_grammar() {
        binary_grammar().validate().expect("grammar is closed");
    }

    #[test]
    fn rejects_missing_rule() {
        let rules = IndexMap::from([(
            "E".to_owned(),
            vec![Alternative::new(vec![Symbol::NonTerminal("F".to_owned())])],
        )]);
        let grammar = Grammar::new("E", rules);
        assert!(matches!(
            grammar.validate(),
            Err(GrammarError::MissingRule { name }) if name == "F"
        ));
    }

    #[test]
    fn rejects_unknown_entry_point() {
        let rules = IndexMap::from([(
            "E".to_owned(),
            vec![Alternative::new(vec![Symbol::Terminal(Terminal::new(*b"0"))])],
        )]);
        let grammar = Grammar::new("START", rules);
        assert!(matches!(
            grammar.validate(),
            Err(GrammarError::UnknownEntryPoint { name }) if name == "START"
        ));
    }

    #[test]
    fn rejects_rule_with_no_alternatives() {
        let rules = IndexMap::from([("E".to_owned(), vec![])]);
        let grammar = Grammar::new("E", rules);
        assert!(matches!(
            grammar.validate(),
            Err(GrammarError::NoAlternatives { name }) if name == "E"
        ));
    }
}
