//! Runtime support shared by the nodetag generator and the code it emits.
//!
//! Tag values partition into two disjoint numeric spaces:
//!
//! - tokens, starting at [`TOKEN_BASE`] (bison numbers its first token 258,
//!   everything below is a single-character or control code);
//! - grammar productions and AST tags, starting at [`PRODUCTION_BASE`].
//!
//! Generated visitors and symbol tables depend on the constants, the
//! [`TreeNode`] trait and the [`TreePrint`] trait defined here.

pub mod node;
pub mod printer;
pub mod space;

pub use node::{Node, TreeNode};
pub use printer::TreePrint;
pub use space::{SymbolRange, SymbolSpace, TagSpaces};

/// Integer discriminant identifying the concrete kind of a tree node.
pub type NodeTag = u32;

/// First tag value handed out to lexical tokens.
pub const TOKEN_BASE: NodeTag = 258;

/// First tag value of the production / AST space.
///
/// Any tag below this value is treated as a token by generated dispatchers.
pub const PRODUCTION_BASE: NodeTag = 1000;

/// Largest number of tokens that fit below [`PRODUCTION_BASE`].
pub const MAX_TOKENS: usize = (PRODUCTION_BASE - TOKEN_BASE) as usize;
