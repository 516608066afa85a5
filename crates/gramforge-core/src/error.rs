/// Errors detected while constructing or validating a [`crate::grammar::Grammar`].
///
/// These are all author-time mistakes (spec §3: "the Grammar IR is closed");
/// a validated grammar can never raise them again at generation time.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("the grammar has no rules")]
    EmptyGrammar,

    #[error("entry point <{name}> has no rule")]
    UnknownEntryPoint { name: String },

    #[error("non-terminal <{name}> has no alternatives")]
    NoAlternatives { name: String },

    #[error("missing rule for non-terminal <{name}>")]
    MissingRule { name: String },
}
