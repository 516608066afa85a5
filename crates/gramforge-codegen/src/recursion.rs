use std::collections::HashSet;

use gramforge_core::grammar::{Grammar, Symbol};
use tracing::trace;

use crate::error::CodegenError;

/// Refuses left-recursive grammars instead of emitting an unparser that
/// cannot terminate (spec §4.5 "Left-recursion would cause non-termination",
/// §9's open question, decided in DESIGN.md).
///
/// A non-terminal N is left-recursive if some chain of alternatives whose
/// *first* symbol is a non-terminal reference leads back to N without ever
/// passing through a terminal. An alternative whose first symbol is a
/// terminal (e.g. `E -> '1' E`) never contributes to such a chain, even
/// though `E` appears later in the same alternative.
pub fn check_not_left_recursive(grammar: &Grammar) -> Result<(), CodegenError> {
    for origin in grammar.rules().keys() {
        let mut visited = HashSet::new();
        if reaches_origin(grammar, origin, origin, &mut visited) {
            return Err(CodegenError::LeftRecursive {
                name: origin.clone(),
            });
        }
    }
    trace!(non_terminals = grammar.rules().len(), "no left recursion found");
    Ok(())
}

fn reaches_origin<'g>(
    grammar: &'g Grammar,
    origin: &str,
    current: &'g str,
    visited: &mut HashSet<&'g str>,
) -> bool {
    if !visited.insert(current) {
        return false;
    }
    let Some(alternatives) = grammar.alternatives(current) else {
        return false;
    };
    for alt in alternatives {
        let Some(Symbol::NonTerminal(next)) = alt.symbols().first() else {
            continue;
        };
        if next == origin || reaches_origin(grammar, origin, next, visited) {
            return true;
        }
    }
    false
}
