use std::collections::HashSet;

use nodetag_core::SymbolSpace;

/// One named symbol recognised in an input stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagSymbol {
    pub name: String,
    pub space: SymbolSpace,
    /// Position within its space, in extraction order.
    pub ordinal: usize,
}

/// Ordered, duplicate-free symbols of a single space.
#[derive(Debug, Clone)]
pub struct SymbolList {
    space: SymbolSpace,
    symbols: Vec<TagSymbol>,
    seen: HashSet<String>,
}

impl SymbolList {
    pub fn new(space: SymbolSpace) -> Self {
        Self {
            space,
            symbols: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Append `name` unless it is already present; returns whether it was added.
    pub fn push(&mut self, name: &str) -> bool {
        if !self.seen.insert(name.to_string()) {
            tracing::debug!(space = %self.space, name, "skipping repeated symbol");
            return false;
        }
        let ordinal = self.symbols.len();
        tracing::debug!(space = %self.space, name, ordinal, "recognised symbol");
        self.symbols.push(TagSymbol {
            name: name.to_string(),
            space: self.space,
            ordinal,
        });
        true
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TagSymbol> {
        self.symbols.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(|symbol| symbol.name.as_str())
    }
}

impl<'a> IntoIterator for &'a SymbolList {
    type Item = &'a TagSymbol;
    type IntoIter = std::slice::Iter<'a, TagSymbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}
