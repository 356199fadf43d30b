//! Host literal notation
//!
//! Attribute values are reported as text in the host orchestrator's literal
//! notation (`'text'`, `None`, `True`, `['a', 'b']`, `{'k': 1}`). A few of
//! them are needed back as typed values, so this module also decodes string
//! and string-collection literals.

use serde_json::Value;
use thiserror::Error;

/// Literal for an absent value
pub const NONE: &str = "None";

/// A literal that could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot decode literal {input:?}: {reason}")]
pub struct DecodeError {
    pub input: String,
    pub reason: String,
}

impl DecodeError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Renders a value in literal notation
pub fn render(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

/// Quotes a string the way the host's `repr` does
///
/// Single quotes are preferred; double quotes are used when the text
/// contains a single quote and no double quote.
pub fn quote(s: &str) -> String {
    let delim = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(delim);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str(NONE),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => out.push_str(&quote(s)),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&quote(key));
                out.push_str(": ");
                write_value(out, item);
            }
            out.push('}');
        }
    }
}

/// Decodes a single quoted string literal
///
/// Text that is not quoted at all is returned unchanged.
pub fn decode_str(input: &str) -> Result<String, DecodeError> {
    let trimmed = input.trim();
    if !trimmed.starts_with(['\'', '"']) {
        return Ok(trimmed.to_string());
    }

    let mut parser = Parser::new(input, trimmed);
    let value = parser.string()?;
    parser.skip_ws();
    if !parser.at_end() {
        return Err(DecodeError::new(input, "trailing characters after string"));
    }
    Ok(value)
}

/// Decodes a list, tuple or set literal of strings into an ordered sequence
///
/// # Example
/// ```
/// use lineage_backend::literal::decode_str_list;
///
/// assert_eq!(decode_str_list("['a', 'b']").unwrap(), vec!["a", "b"]);
/// assert!(decode_str_list("set()").unwrap().is_empty());
/// ```
pub fn decode_str_list(input: &str) -> Result<Vec<String>, DecodeError> {
    let trimmed = input.trim();
    if trimmed == "set()" {
        return Ok(Vec::new());
    }

    let mut parser = Parser::new(input, trimmed);
    let close = match parser.bump() {
        Some('[') => ']',
        Some('(') => ')',
        Some('{') => '}',
        _ => return Err(DecodeError::new(input, "expected a list, tuple or set")),
    };

    let mut items = Vec::new();
    loop {
        parser.skip_ws();
        if parser.eat(close) {
            break;
        }
        items.push(parser.string()?);
        parser.skip_ws();
        if parser.eat(',') {
            continue;
        }
        if parser.eat(close) {
            break;
        }
        return Err(DecodeError::new(input, format!("expected ',' or '{}'", close)));
    }

    parser.skip_ws();
    if !parser.at_end() {
        return Err(DecodeError::new(input, "trailing characters after collection"));
    }
    Ok(items)
}

struct Parser<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, text: &'a str) -> Self {
        Self {
            input,
            chars: text.chars().peekable(),
        }
    }

    fn bump(&mut self) -> Option<char> {
        self.chars.next()
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.chars.peek() == Some(&expected) {
            self.chars.next();
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) {
        while self.chars.peek().is_some_and(|c| c.is_whitespace()) {
            self.chars.next();
        }
    }

    fn at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn string(&mut self) -> Result<String, DecodeError> {
        let delim = match self.bump() {
            Some(c @ ('\'' | '"')) => c,
            _ => return Err(DecodeError::new(self.input, "expected a quoted string")),
        };

        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(DecodeError::new(self.input, "unterminated string")),
                Some(c) if c == delim => return Ok(out),
                Some('\\') => match self.bump() {
                    Some('n') => out.push('\n'),
                    Some('r') => out.push('\r'),
                    Some('t') => out.push('\t'),
                    Some(c) => out.push(c),
                    None => return Err(DecodeError::new(self.input, "unterminated escape")),
                },
                Some(c) => out.push(c),
            }
        }
    }
}
