pub type Result<T> = std::result::Result<T, ParseError>;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ParseError {
    UnterminatedQuote,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ParseError::UnterminatedQuote => {
                write!(f, "syntax error: unterminated quote")
            }
        }
    }
}
