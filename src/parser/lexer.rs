use super::errors::{ParseError, Result};

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
enum TokenizeState {
    Unquoted,
    Escaped,
    SingleQuoted,
    DoubleQuoted,
    DoubleQuotedEscaped,
}

// Splits one input line into argv, honoring quotes and escapes.
// tokenize("echo 'a b' c") -> ["echo", "a b", "c"]
//
// Single quotes take everything literally, including backslashes. Inside
// double quotes a backslash only escapes `\` and `"`; before any other
// character both are kept. A bare trailing backslash escapes nothing and
// is dropped.
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    use TokenizeState::*;
    let mut argv = Vec::new();
    let mut arg = String::new();
    // An empty pair of quotes still opens an argument
    let mut started = false;
    let mut state = Unquoted;
    for c in line.chars() {
        state = match (state, c) {
            (Unquoted, '\\') => Escaped,
            (Unquoted, '\'') => {
                started = true;
                SingleQuoted
            }
            (Unquoted, '"') => {
                started = true;
                DoubleQuoted
            }
            (Unquoted, c) if c.is_whitespace() => {
                if !arg.is_empty() {
                    argv.push(arg.clone());
                    arg.clear();
                    started = false;
                }
                Unquoted
            }
            (Unquoted, _) | (Escaped, _) => {
                started = true;
                arg.push(c);
                Unquoted
            }
            (SingleQuoted, '\'') => Unquoted,
            (SingleQuoted, _) => {
                arg.push(c);
                SingleQuoted
            }
            (DoubleQuoted, '"') => Unquoted,
            (DoubleQuoted, '\\') => DoubleQuotedEscaped,
            (DoubleQuoted, _) | (DoubleQuotedEscaped, '"') | (DoubleQuotedEscaped, '\\') => {
                arg.push(c);
                DoubleQuoted
            }
            (DoubleQuotedEscaped, _) => {
                arg.push('\\');
                arg.push(c);
                DoubleQuoted
            }
        };
    }

    match state {
        Unquoted | Escaped => {
            if !arg.is_empty() || started {
                argv.push(arg);
            }
            Ok(argv)
        }
        _ => Err(ParseError::UnterminatedQuote),
    }
}
