//! A small statement language wired to generated visitors and tag tables.
//!
//! `build.rs` runs the generator over `src/ast.rs` and `grammar/parse.y`; the
//! modules below include its output.

pub mod ast;
pub mod stats;

pub mod grammar_symbols {
    //! Grammar symbols of `grammar/parse.y`.
    include!(concat!(env!("OUT_DIR"), "/grammar_symbols.rs"));
}

pub mod ast_tags {
    //! Names of AST tags, falling back to grammar symbols.
    include!(concat!(env!("OUT_DIR"), "/ast_tags.rs"));
}

pub mod ast_visitor {
    //! The AST visitor trait and its default walks.
    include!(concat!(env!("OUT_DIR"), "/ast_visitor.rs"));
    include!(concat!(env!("OUT_DIR"), "/ast_visitor_walk.rs"));
}

pub use ast::AstNodeTag;
pub use ast_tags::{AstTreePrint, ast_tag_name};
pub use ast_visitor::AstVisitor;
pub use grammar_symbols::{GrammarSymbol, ParseTreePrint, grammar_symbol_name};
pub use stats::{ProgramStats, collect_stats};
