use gramforge_core::grammar::Grammar;
use indexmap::IndexMap;

/// Assigns each non-terminal a dense integer id in grammar iteration order.
/// This id is the alternative-index wire encoding's counterpart for the
/// *non-terminal* axis: it names the `generate_nt{id}` / `serialize_nt{id}`
/// / `unparse_nt{id}` function triple emitted for it.
#[derive(Debug)]
pub struct NonTerminalIds {
    name_to_id: IndexMap<String, usize>,
}

impl NonTerminalIds {
    pub fn new(grammar: &Grammar) -> Self {
        let name_to_id = grammar
            .rules()
            .keys()
            .enumerate()
            .map(|(id, name)| (name.clone(), id))
            .collect();
        Self { name_to_id }
    }

    /// Looks up the id for `name`. Panics if `name` isn't a rule of the
    /// grammar this table was built from — callable only after
    /// `Grammar::validate` has proven every reference resolves.
    pub fn id_of(&self, name: &str) -> usize {
        *self
            .name_to_id
            .get(name)
            .unwrap_or_else(|| panic!("non-terminal <{name}> has no assigned id"))
    }

    pub fn len(&self) -> usize {
        self.name_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_id.is_empty()
    }

    pub fn names_in_order(&self) -> impl Iterator<Item = (&str, usize)> {
        self.name_to_id.iter().map(|(name, &id)| (name.as_str(), id))
    }
}
