//! Restricted literal parser for STEP record payloads.
//!
//! Record payloads are tuple-style literals of quoted strings, numbers,
//! and nested parenthesized groups. Because the payload comes from an
//! externally supplied file, decoding must not go through any general
//! expression evaluator; this parser accepts only the literal grammar
//! and fails closed on anything else.
//!
//! Grouping follows tuple-literal semantics: a parenthesized group with
//! exactly one element and no comma is plain grouping and collapses to
//! its element (`('Author')` is the string `Author`), while a group with
//! commas is a tuple.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum LiteralError {
    #[error("unexpected character '{ch}' at offset {pos}")]
    UnexpectedChar { pos: usize, ch: char },

    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("trailing input at offset {pos}")]
    TrailingInput { pos: usize },

    #[error("invalid numeric literal '{text}'")]
    InvalidNumber { text: String },
}

/// A decoded payload value
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    /// Numeric literals are kept verbatim; nothing downstream does
    /// arithmetic on them
    Num(String),
    Tuple(Vec<Literal>),
}

impl Literal {
    /// Flatten one level: a tuple yields its elements, anything else
    /// yields itself
    pub fn flatten(self) -> Vec<Literal> {
        match self {
            Literal::Tuple(items) => items,
            other => vec![other],
        }
    }

    /// Render to the raw field value stored in the result mapping.
    /// Strings render to their content; tuples that survive flattening
    /// keep a tuple-style display form.
    pub fn render(&self) -> String {
        match self {
            Literal::Str(s) => s.clone(),
            Literal::Num(n) => n.clone(),
            Literal::Tuple(_) => self.repr(),
        }
    }

    fn repr(&self) -> String {
        match self {
            Literal::Str(s) => format!("'{}'", s.replace('\'', "''")),
            Literal::Num(n) => n.clone(),
            Literal::Tuple(items) => {
                let inner: Vec<String> = items.iter().map(Literal::repr).collect();
                format!("({})", inner.join(", "))
            }
        }
    }
}

/// Parse a complete payload into a single literal value.
/// Trailing non-whitespace input is an error.
pub fn parse_literal(input: &str) -> Result<Literal, LiteralError> {
    let mut parser = Parser { input, pos: 0 };
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if parser.pos < input.len() {
        return Err(LiteralError::TrailingInput { pos: parser.pos });
    }
    Ok(value)
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(ch) if ch.is_whitespace()) {
            self.bump();
        }
    }

    fn parse_value(&mut self) -> Result<Literal, LiteralError> {
        self.skip_whitespace();
        match self.peek() {
            Some('\'') => self.parse_string(),
            Some('(') => self.parse_group(),
            Some(ch) if ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.') => {
                self.parse_number()
            }
            Some(ch) => Err(LiteralError::UnexpectedChar { pos: self.pos, ch }),
            None => Err(LiteralError::UnexpectedEnd),
        }
    }

    fn parse_string(&mut self) -> Result<Literal, LiteralError> {
        self.bump(); // opening quote
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(LiteralError::UnterminatedString),
                Some('\'') => {
                    // STEP doubles the quote to embed an apostrophe
                    if self.peek() == Some('\'') {
                        self.bump();
                        out.push('\'');
                    } else {
                        return Ok(Literal::Str(out));
                    }
                }
                Some('\\') => match self.bump() {
                    None => return Err(LiteralError::UnterminatedString),
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some(other) => out.push(other),
                },
                Some(ch) => out.push(ch),
            }
        }
    }

    fn parse_group(&mut self) -> Result<Literal, LiteralError> {
        self.bump(); // opening parenthesis
        let mut elements = Vec::new();
        let mut saw_comma = false;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(')') => {
                    self.bump();
                    break;
                }
                None => return Err(LiteralError::UnexpectedEnd),
                _ => {}
            }
            elements.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump();
                    saw_comma = true;
                }
                Some(')') => {
                    self.bump();
                    break;
                }
                Some(ch) => return Err(LiteralError::UnexpectedChar { pos: self.pos, ch }),
                None => return Err(LiteralError::UnexpectedEnd),
            }
        }

        if elements.len() == 1 && !saw_comma {
            // Plain grouping, not a one-tuple
            Ok(elements.remove(0))
        } else {
            Ok(Literal::Tuple(elements))
        }
    }

    fn parse_number(&mut self) -> Result<Literal, LiteralError> {
        let start = self.pos;
        while matches!(
            self.peek(),
            Some(ch) if ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | 'e' | 'E')
        ) {
            self.bump();
        }
        let text = &self.input[start..self.pos];
        if text.parse::<f64>().is_err() {
            return Err(LiteralError::InvalidNumber {
                text: text.to_string(),
            });
        }
        Ok(Literal::Num(text.to_string()))
    }
}
