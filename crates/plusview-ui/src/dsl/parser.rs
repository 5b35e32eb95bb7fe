use std::iter::Peekable;
use std::vec::IntoIter;

use crate::dsl::ast::{Attr, Node, Value};
use crate::dsl::error::ParseError;
use crate::dsl::lexer::{tokenize, Pos, Spanned, Token};

/// Recursive-descent parser over a token stream.
///
/// Grammar:
///
/// ```text
/// document := node EOF
/// node     := IDENT ( '[' ( attr ( ',' attr )* ','? )? ']' )?
/// attr     := IDENT '=' ( STR | NUMBER | IDENT )
/// ```
pub struct Parser {
    tokens: Peekable<IntoIter<Spanned>>,
    last: Pos,
}

impl Parser {
    pub fn new(tokens: Vec<Spanned>) -> Self {
        Self { tokens: tokens.into_iter().peekable(), last: Pos { line: 1, col: 1 } }
    }

    fn peek(&mut self) -> &Token {
        self.tokens.peek().map_or(&Token::Eof, |s| &s.token)
    }

    fn next(&mut self) -> (Token, Pos) {
        match self.tokens.next() {
            Some(Spanned { token, pos }) => {
                self.last = pos;
                (token, pos)
            }
            None => (Token::Eof, self.last),
        }
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == expected {
            self.next();
            true
        } else {
            false
        }
    }

    fn unexpected<T>(what: &str, got: Token, pos: Pos) -> Result<T, ParseError> {
        Err(ParseError::at(pos, format!("expected {what}, got {got:?}")))
    }

    pub fn parse_document(&mut self) -> Result<Node, ParseError> {
        let node = self.parse_node()?;
        match self.next() {
            (Token::Eof, _) => Ok(node),
            (tok, pos) => Self::unexpected("end of input", tok, pos),
        }
    }

    fn parse_node(&mut self) -> Result<Node, ParseError> {
        let widget = match self.next() {
            (Token::Ident(name), _) => name,
            (tok, pos) => return Self::unexpected("widget name", tok, pos),
        };

        let mut attrs = Vec::new();
        if self.eat(&Token::LBracket) {
            while !self.eat(&Token::RBracket) {
                attrs.push(self.parse_attr()?);
                if !self.eat(&Token::Comma) && self.peek() != &Token::RBracket {
                    let (tok, pos) = self.next();
                    return Self::unexpected("`,` or `]`", tok, pos);
                }
            }
        }

        Ok(Node { widget, attrs })
    }

    fn parse_attr(&mut self) -> Result<Attr, ParseError> {
        let key = match self.next() {
            (Token::Ident(key), _) => key,
            (tok, pos) => return Self::unexpected("attribute name", tok, pos),
        };
        match self.next() {
            (Token::Eq, _) => {}
            (tok, pos) => return Self::unexpected("`=`", tok, pos),
        }
        let value = match self.next() {
            (Token::Str(s), _) => Value::Str(s),
            (Token::Number(n), _) => Value::Number(n),
            (Token::Ident(s), _) => Value::Ident(s),
            (tok, pos) => return Self::unexpected("a value", tok, pos),
        };
        Ok(Attr { key, value })
    }
}

/// Parses a single widget declaration.
pub fn parse_str(src: &str) -> Result<Node, ParseError> {
    Parser::new(tokenize(src)?).parse_document()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_with_attrs() {
        let node = parse_str("ImageViewPlus [default_drawable=12, scale_type=top_crop,]").unwrap();
        assert_eq!(node.widget, "ImageViewPlus");
        assert_eq!(node.attrs.len(), 2);
        assert_eq!(node.attr("default_drawable"), Some(&Value::Number(12.0)));
        assert_eq!(node.attr("scale_type"), Some(&Value::Ident("top_crop".into())));
        assert_eq!(node.attr("missing"), None);
    }

    #[test]
    fn bare_node_and_empty_list() {
        assert!(parse_str("ImageViewPlus").unwrap().attrs.is_empty());
        assert!(parse_str("ImageViewPlus []").unwrap().attrs.is_empty());
    }

    #[test]
    fn last_duplicate_wins() {
        let node = parse_str("V [a=1, a=2]").unwrap();
        assert_eq!(node.attr("a"), Some(&Value::Number(2.0)));
    }

    #[test]
    fn malformed() {
        for src in ["", "V [a 1]", "V [a=1 b=2]", "V [a=]", "V [a=1", "V W", "[a=1]", "V [,]"] {
            assert!(parse_str(src).is_err(), "{src:?} should not parse");
        }
    }

    #[test]
    fn errors_carry_position() {
        let err = parse_str("V [a=1,\n   b 2]").unwrap_err();
        assert!(err.0.starts_with("2:6:"), "{}", err.0);
    }
}
