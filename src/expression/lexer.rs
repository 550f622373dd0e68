//! Tokenizer for expression text.

use super::errors::ExpressionError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Num(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    OParen,
    CParen,
}

/// Splits expression text into tokens.
///
/// ├ numbers     : decimal literals with optional fraction and exponent part
/// ├ identifiers : ascii-alphabetic runs (`x`, `pi`, `e`, function names)
/// └ operators   : `+ - * / ^ ( )`
///
/// An exponent suffix (`e`/`E`) is only consumed when followed by a digit or
/// a signed digit, so `2*e` still lexes as the constant `e`.
pub(crate) fn tokenize(text: &str) -> Result<Vec<Token>, ExpressionError> {
    if text.trim().is_empty() {
        return Err(ExpressionError::Empty);
    }

    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        match ch {
            c if c.is_whitespace() => i += 1,
            '+' => { tokens.push(Token::Plus);   i += 1; }
            '-' => { tokens.push(Token::Minus);  i += 1; }
            '*' => { tokens.push(Token::Star);   i += 1; }
            '/' => { tokens.push(Token::Slash);  i += 1; }
            '^' => { tokens.push(Token::Caret);  i += 1; }
            '(' => { tokens.push(Token::OParen); i += 1; }
            ')' => { tokens.push(Token::CParen); i += 1; }

            c if c.is_ascii_digit() || c == '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                // optional exponent part: e[+-]?digits
                if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                    let mut j = i + 1;
                    if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
                        j += 1;
                    }
                    if j < chars.len() && chars[j].is_ascii_digit() {
                        i = j;
                        while i < chars.len() && chars[i].is_ascii_digit() {
                            i += 1;
                        }
                    }
                }

                let text: String = chars[start..i].iter().collect();
                let value = text
                    .parse::<f64>()
                    .map_err(|_| ExpressionError::MalformedNumber { text: text.clone() })?;
                tokens.push(Token::Num(value));
            }

            c if c.is_ascii_alphabetic() => {
                let start = i;
                while i < chars.len() && chars[i].is_ascii_alphabetic() {
                    i += 1;
                }
                tokens.push(Token::Ident(chars[start..i].iter().collect()));
            }

            c => return Err(ExpressionError::UnexpectedChar { ch: c, at: i }),
        }
    }

    Ok(tokens)
}
