//! Symbol spaces and their numeric ranges.

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::{NodeTag, PRODUCTION_BASE, TOKEN_BASE};

/// The space a tag value belongs to.
///
/// Spaces iterate in ascending anchor order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum SymbolSpace {
    Token,
    Production,
    AstNode,
}

impl SymbolSpace {
    /// Anchor value of the first symbol in this space.
    pub const fn base(self) -> NodeTag {
        match self {
            SymbolSpace::Token => TOKEN_BASE,
            SymbolSpace::Production | SymbolSpace::AstNode => PRODUCTION_BASE,
        }
    }
}

/// A contiguous block of tag values: `[base, base + count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolRange {
    pub base: NodeTag,
    pub count: usize,
}

impl SymbolRange {
    pub const fn new(base: NodeTag, count: usize) -> Self {
        Self { base, count }
    }

    /// One past the last assigned value.
    pub const fn end(&self) -> NodeTag {
        self.base + self.count as NodeTag
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub const fn contains(&self, tag: NodeTag) -> bool {
        tag >= self.base && tag < self.end()
    }

    /// Tag value of the symbol at `ordinal`, if the range holds one.
    pub const fn value_of(&self, ordinal: usize) -> Option<NodeTag> {
        if ordinal < self.count {
            Some(self.base + ordinal as NodeTag)
        } else {
            None
        }
    }
}

/// Token and production ranges of one grammar.
///
/// AST tags have no range here: their values belong to the host's AST enum.
/// Every value at or above the AST anchor that no production holds is taken to
/// be an AST tag, which is how generated dispatchers route nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagSpaces {
    pub tokens: SymbolRange,
    pub productions: SymbolRange,
}

impl TagSpaces {
    pub const fn new(tokens: usize, productions: usize) -> Self {
        Self {
            tokens: SymbolRange::new(SymbolSpace::Token.base(), tokens),
            productions: SymbolRange::new(SymbolSpace::Production.base(), productions),
        }
    }

    /// Whether `tag` lies in `space`.
    pub const fn contains(&self, space: SymbolSpace, tag: NodeTag) -> bool {
        match space {
            SymbolSpace::Token => self.tokens.contains(tag),
            SymbolSpace::Production => self.productions.contains(tag),
            SymbolSpace::AstNode => tag >= SymbolSpace::AstNode.base(),
        }
    }

    /// Report which space `tag` falls in.
    ///
    /// Productions and AST tags share an anchor; values assigned to a
    /// production report `Production`.
    pub fn classify(&self, tag: NodeTag) -> Option<SymbolSpace> {
        SymbolSpace::iter().find(|&space| self.contains(space, tag))
    }
}
