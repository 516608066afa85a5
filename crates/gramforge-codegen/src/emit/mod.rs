mod ffi_shim;
mod generator;
mod ids;
mod serializer;
mod terminals;
mod unparser;

use gramforge_core::grammar::Grammar;
use ids::NonTerminalIds;
use terminals::TerminalTable;
use tracing::info;

use crate::{error::CodegenError, recursion::check_not_left_recursive};

/// Knobs for [`compile`]. The name the generated `Engine` struct is given
/// must be a valid, unqualified Rust type identifier.
#[derive(Debug, Clone)]
pub struct CodegenOptions {
    pub engine_name: String,
    pub include_ffi_shim: bool,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            engine_name: "CompiledGrammar".to_owned(),
            include_ffi_shim: false,
        }
    }
}

/// Compiles `grammar` into a self-contained Rust source module implementing
/// the three specialized engines of spec §4 plus the public facade of §6
/// (spec §4.1: "Input: Grammar IR. Output: a self-contained engine source
/// module exposing the facade").
///
/// The caller is expected to write the result to a file under `OUT_DIR` from
/// a `build.rs` and `include!` it, the way `gramforge-demo` does.
pub fn compile(grammar: &Grammar, options: &CodegenOptions) -> Result<String, CodegenError> {
    grammar.validate()?;
    check_not_left_recursive(grammar)?;

    let ids = NonTerminalIds::new(grammar);
    let terminal_table = TerminalTable::new(grammar);
    let entry_id = ids.id_of(grammar.entry_point());
    let engine_name = &options.engine_name;

    let mut source = String::new();
    source.push_str("// This file is generated by gramforge-codegen. Do not edit by hand.\n");
    source.push_str("#![allow(dead_code, clippy::all)]\n\n");
    source.push_str("use core::num::NonZeroUsize;\n");
    source.push_str("use gramforge_core::{facade::Engine, rng::Prng, sequence::DerivationBuffer};\n\n");

    source.push_str(&terminal_table.render_const());

    source.push_str(&format!("#[derive(Debug)]\npub struct {engine_name};\n\n"));
    source.push_str(&format!(
        r#"impl Engine for {engine_name} {{
    fn generate_entry(buf: &mut DerivationBuffer<'_>, cursor: &mut usize, rng: &mut dyn Prng) -> bool {{
        generate_nt{entry_id}(buf, cursor, rng)
    }}

    fn serialize_entry(seq: &[usize], cursor: &mut usize, out: &mut [u8]) -> (usize, bool) {{
        serialize_nt{entry_id}(seq, cursor, out)
    }}

    fn unparse_entry(buf: &mut DerivationBuffer<'_>, input: &[u8], cursor: &mut usize) -> bool {{
        unparse_nt{entry_id}(buf, input, cursor)
    }}
}}

"#
    ));

    source.push_str(&format!(
        r#"pub fn mutate_sequence(buf: &mut [usize], len: usize, rng: &mut dyn Prng) -> usize {{
    gramforge_core::facade::mutate_sequence::<{engine_name}>(buf, len, rng)
}}

pub fn serialize_sequence(seq: &[usize], out: &mut [u8]) -> gramforge_core::facade::SerializeOutcome {{
    gramforge_core::facade::serialize_sequence::<{engine_name}>(seq, out)
}}

pub fn unparse_sequence(seq_buf: &mut [usize], input: &[u8]) -> usize {{
    gramforge_core::facade::unparse_sequence::<{engine_name}>(seq_buf, input)
}}

"#
    ));

    for (name, id) in ids.names_in_order() {
        let alternatives = grammar
            .alternatives(name)
            .expect("every id came from a grammar rule");
        source.push_str(&generator::emit_generate(id, name, alternatives, &ids));
        source.push_str(&serializer::emit_serialize(id, name, alternatives, &ids, &terminal_table));
        source.push_str(&unparser::emit_unparse(id, name, alternatives, &ids, &terminal_table));
    }

    if options.include_ffi_shim {
        source.push_str(&ffi_shim::emit_ffi_shim(engine_name));
    }

    info!(
        engine_name,
        non_terminals = ids.len(),
        terminals = terminal_table.len(),
        ffi = options.include_ffi_shim,
        "compiled grammar to engine source"
    );
    Ok(source)
}

#[cfg(test)]
mod tests {
    use gramforge_core::grammar::{Alternative, Symbol, Terminal};
    use indexmap::IndexMap;

    use super::*;

    fn binary_grammar() -> Grammar {
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
    fn compiles_binary_grammar_to_source_containing_every_operation() {
        let grammar = binary_grammar();
        let options = CodegenOptions {
            engine_name: "BinaryEngine".to_owned(),
            include_ffi_shim: true,
        };
        let source = compile(&grammar, &options).expect("grammar compiles");
        assert!(source.contains("struct BinaryEngine"));
        assert!(source.contains("fn generate_nt0"));
        assert!(source.contains("fn serialize_nt0"));
        assert!(source.contains("fn unparse_nt0"));
        assert!(source.contains("pub fn mutate_sequence"));
        assert!(source.contains("pub fn serialize_sequence"));
        assert!(source.contains("pub fn unparse_sequence"));
        assert!(source.contains("pub mod ffi"));
        assert!(source.contains("TERMINALS"));
    }

    #[test]
    fn omits_ffi_shim_by_default() {
        let grammar = binary_grammar();
        let options = CodegenOptions::default();
        let source = compile(&grammar, &options).expect("grammar compiles");
        assert!(!source.contains("pub mod ffi"));
    }

    #[test]
    fn rejects_left_recursive_grammar() {
        let rules = IndexMap::from([(
            "E".to_owned(),
            vec![
                Alternative::new(vec![
                    Symbol::NonTerminal("E".to_owned()),
                    Symbol::Terminal(Terminal::new(*b"+")),
                ]),
                Alternative::new(vec![Symbol::Terminal(Terminal::new(*b"0"))]),
            ],
        )]);
        let grammar = Grammar::new("E", rules);
        let err = compile(&grammar, &CodegenOptions::default()).unwrap_err();
        assert!(matches!(err, CodegenError::LeftRecursive { name } if name == "E"));
    }

    #[test]
    fn rejects_invalid_grammar() {
        let rules = IndexMap::from([(
            "E".to_owned(),
            vec![Alternative::new(vec![Symbol::NonTerminal("Missing".to_owned())])],
        )]);
        let grammar = Grammar::new("E", rules);
        let err = compile(&grammar, &CodegenOptions::default()).unwrap_err();
        assert!(matches!(err, CodegenError::Grammar(_)));
    }
}
