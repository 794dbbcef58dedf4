use nodetag_core::{MAX_TOKENS, PRODUCTION_BASE, TOKEN_BASE, TagSpaces};
use nodetag_error::{Error, Result};

/// Compute the `{base, count}` records of the token and production spaces.
///
/// Fails when the tokens would run into `PRODUCTION_BASE`, since a token value
/// could then equal a production value. AST tags take no part: the host's
/// enum already fixes their values.
pub fn assign_ranges(tokens: usize, productions: usize) -> Result<TagSpaces> {
    if tokens > MAX_TOKENS {
        return Err(Error::range_overflow(format!(
            "{tokens} tokens do not fit between {TOKEN_BASE} and {PRODUCTION_BASE}"
        ))
        .with_operation("ranges::assign_ranges")
        .with_context("tokens", tokens.to_string())
        .with_context("limit", MAX_TOKENS.to_string()));
    }

    let spaces = TagSpaces::new(tokens, productions);
    tracing::debug!(
        token_base = spaces.tokens.base,
        token_end = spaces.tokens.end(),
        production_base = spaces.productions.base,
        production_end = spaces.productions.end(),
        "assigned tag ranges"
    );
    Ok(spaces)
}
