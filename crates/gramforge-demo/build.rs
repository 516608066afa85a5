use std::{env, fs, path::Path};

use gramforge_codegen::{CodegenOptions, compile};
use gramforge_core::grammar::Grammar;

/// One grammar checked into `grammars/`, compiled to `$OUT_DIR/{module}.rs`
/// and pulled in by `src/lib.rs` via `include!`.
struct Entry {
    grammar_file: &'static str,
    module_file: &'static str,
    engine_name: &'static str,
}

const ENTRIES: &[Entry] = &[
    Entry {
        grammar_file: "binary.json",
        module_file: "binary_engine.rs",
        engine_name: "BinaryEngine",
    },
    Entry {
        grammar_file: "arithmetic.json",
        module_file: "arithmetic_engine.rs",
        engine_name: "ArithmeticEngine",
    },
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR");
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("cargo sets CARGO_MANIFEST_DIR");
    let grammars_dir = Path::new(&manifest_dir).join("grammars");

    println!("cargo:rerun-if-changed={}", grammars_dir.display());

    for entry in ENTRIES {
        let grammar_path = grammars_dir.join(entry.grammar_file);
        println!("cargo:rerun-if-changed={}", grammar_path.display());

        let text = fs::read_to_string(&grammar_path)
            .unwrap_or_else(|e| panic!("reading {}: {e}", grammar_path.display()));
        let grammar: Grammar = serde_json::from_str(&text)
            .unwrap_or_else(|e| panic!("parsing {}: {e}", grammar_path.display()));

        let options = CodegenOptions {
            engine_name: entry.engine_name.to_owned(),
            include_ffi_shim: false,
        };
        let source = compile(&grammar, &options)
            .unwrap_or_else(|e| panic!("compiling {}: {e}", grammar_path.display()));

        let out_path = Path::new(&out_dir).join(entry.module_file);
        fs::write(&out_path, source)
            .unwrap_or_else(|e| panic!("writing {}: {e}", out_path.display()));
    }
}
