use gramforge_core::error::GrammarError;

/// Errors raised while compiling a grammar into engine source (spec §4.1).
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    /// Spec §4.5/§9's open question, decided: refuse rather than emit an
    /// unparser that can never terminate.
    #[error(
        "non-terminal <{name}> is left-recursive: an alternative's first symbol reaches <{name}> again without consuming a terminal"
    )]
    LeftRecursive { name: String },
}
