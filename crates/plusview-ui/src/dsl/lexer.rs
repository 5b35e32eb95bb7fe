use std::iter::Peekable;
use std::str::CharIndices;

use crate::dsl::error::ParseError;

/// Lexical token kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Ident(String),
    Str(String),
    Number(f64),
    LBracket,
    RBracket,
    Comma,
    Eq,
    Eof,
}

/// 1-based source position.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Pos {
    pub line: u32,
    pub col: u32,
}

/// A token and where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub pos: Pos,
}

/// Splits attribute source into [`Spanned`] tokens, ending with `Eof`.
pub fn tokenize(src: &str) -> Result<Vec<Spanned>, ParseError> {
    let mut lexer = Lexer { src, chars: src.char_indices().peekable(), line: 1, col: 1 };
    let mut out = Vec::new();
    loop {
        let spanned = lexer.next_token()?;
        let done = spanned.token == Token::Eof;
        out.push(spanned);
        if done {
            return Ok(out);
        }
    }
}

struct Lexer<'s> {
    src: &'s str,
    chars: Peekable<CharIndices<'s>>,
    line: u32,
    col: u32,
}

impl<'s> Lexer<'s> {
    fn pos(&self) -> Pos {
        Pos { line: self.line, col: self.col }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// Byte offset of the next char (or end of input).
    fn offset(&mut self) -> usize {
        self.chars.peek().map_or(self.src.len(), |&(i, _)| i)
    }

    fn bump(&mut self) -> Option<char> {
        let (_, c) = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    fn bump_while(&mut self, pred: impl Fn(char) -> bool) -> &'s str {
        let start = self.offset();
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
        let end = self.offset();
        let src = self.src;
        &src[start..end]
    }

    fn rest(&mut self) -> &'s str {
        let at = self.offset();
        let src = self.src;
        &src[at..]
    }

    fn skip_trivia(&mut self) {
        loop {
            self.bump_while(char::is_whitespace);
            if !self.rest().starts_with("//") {
                return;
            }
            self.bump_while(|c| c != '\n');
        }
    }

    fn next_token(&mut self) -> Result<Spanned, ParseError> {
        self.skip_trivia();
        let pos = self.pos();

        let token = match self.peek() {
            None => Token::Eof,
            Some(c) => match c {
                '[' | ']' | ',' | '=' => {
                    self.bump();
                    match c {
                        '[' => Token::LBracket,
                        ']' => Token::RBracket,
                        ',' => Token::Comma,
                        _ => Token::Eq,
                    }
                }
                '"' => self.string(pos)?,
                c if c.is_ascii_digit() || c == '-' => self.number(pos)?,
                c if c.is_alphabetic() || c == '_' => {
                    let word = self.bump_while(|c| c.is_alphanumeric() || c == '_' || c == '.');
                    Token::Ident(word.to_string())
                }
                other => return Err(ParseError::at(pos, format!("unexpected character {other:?}"))),
            },
        };

        Ok(Spanned { token, pos })
    }

    fn string(&mut self, start: Pos) -> Result<Token, ParseError> {
        self.bump();
        let mut s = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(Token::Str(s)),
                Some('\\') => match self.bump() {
                    Some(c) => s.push(c),
                    None => break,
                },
                Some(c) => s.push(c),
                None => break,
            }
        }
        Err(ParseError::at(start, "unterminated string literal"))
    }

    fn number(&mut self, start: Pos) -> Result<Token, ParseError> {
        // Resource ids are usually written in hex.
        if self.rest().starts_with("0x") {
            self.bump();
            self.bump();
            let digits = self.bump_while(|c| c.is_ascii_hexdigit());
            return u32::from_str_radix(digits, 16)
                .map(|v| Token::Number(f64::from(v)))
                .map_err(|_| ParseError::at(start, format!("invalid hex number 0x{digits:?}")));
        }

        let text = self.bump_while(|c| c.is_ascii_digit() || c == '.' || c == '-');
        text.parse::<f64>()
            .map(Token::Number)
            .map_err(|_| ParseError::at(start, format!("invalid number {text:?}")))
    }
}
