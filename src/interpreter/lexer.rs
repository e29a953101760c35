use logos::Logos;

/// Represents a lexical unit of an expression line.
///
/// The evaluator drives the lexer one token at a time while it computes, so a
/// `Token` never outlives the frame that consumed it and no token list is
/// built.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token<'src> {
    /// Integer literal tokens, such as `42`. Literals that do not fit in an
    /// `i64` are lexing errors.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice())]
    Identifier(&'src str),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any other single non-blank character: the arithmetic operators, `=`,
    /// and everything the evaluator will reject.
    #[regex(r"[^ \t\r\n\f\v0-9a-zA-Z_()]", parse_symbol)]
    Symbol(char),
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\n\f\v]+", logos::skip)]
    Ignored,
}

impl Token<'_> {
    /// Returns `true` if this token is the given symbol.
    #[must_use]
    pub fn is_symbol(&self, symbol: char) -> bool {
        matches!(self, Token::Symbol(c) if *c == symbol)
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: The lexer positioned on a run of ASCII digits.
///
/// # Returns
/// - `Some(i64)`: The parsed value if it fits.
/// - `None`: If the literal overflows `i64`.
fn parse_integer<'src>(lex: &logos::Lexer<'src, Token<'src>>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Extracts the single character of a symbol token.
///
/// # Parameters
/// - `lex`: The lexer positioned on a one-character symbol slice.
///
/// # Returns
/// - `Some(char)`: The symbol.
/// - `None`: Never for a slice matched by the symbol pattern.
fn parse_symbol<'src>(lex: &logos::Lexer<'src, Token<'src>>) -> Option<char> {
    lex.slice().chars().next()
}
