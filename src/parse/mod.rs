pub mod ast;
mod lexer;
mod parser;

pub use lexer::TokenKind;
pub use parser::{ParseError, ParseErrorKind, Parser};

#[cfg(feature = "logging")]
use log::trace;

/// Removes every whitespace character; whitespace never separates tokens.
pub fn normalize(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Parses a dice expression such as `"2d10 + d6 - 7 + 2"` into its signed nodes.
///
/// Positions in a returned [ParseError] refer to the normalized input.
pub fn parse(s: &str) -> Result<ast::Expression, ParseError> {
    let normalized = normalize(s);
    let result = Parser::new(&normalized).parse();

    #[cfg(feature = "logging")]
    {
        trace!("parsed {:?} as {:?}", normalized, result);
    }

    result
}
