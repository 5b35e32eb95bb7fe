use std::fmt;

use crate::dsl::lexer::Pos;

/// A parse error from the attribute DSL.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError(pub String);

impl ParseError {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// An error prefixed with `line:col:`.
    pub(crate) fn at(pos: Pos, msg: impl fmt::Display) -> Self {
        Self(format!("{}:{}: {}", pos.line, pos.col, msg))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "attribute parse error: {}", self.0)
    }
}

impl std::error::Error for ParseError {}

/// An attribute whose value has the wrong shape.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeError {
    pub key: String,
    pub expected: &'static str,
}

impl fmt::Display for AttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "attribute `{}` expects {}", self.key, self.expected)
    }
}

impl std::error::Error for AttributeError {}

impl From<AttributeError> for ParseError {
    fn from(e: AttributeError) -> Self {
        ParseError(e.to_string())
    }
}
