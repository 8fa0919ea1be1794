/*!
# Trivia-preserving tokenizer

Splits source text into raw tokens, attaching every run of whitespace and
every comment as leading trivia of the token that follows. The concatenation
of all trivia and token texts reproduces the input byte-for-byte.
*/

use crate::core::TextSpan;
use crate::syntax::{TriviaKind, TriviaPiece};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawTokenKind {
    Identifier,
    Number,
    StringLit,
    Punct,
    Eof,
}

/// One raw token with the trivia collected in front of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub kind: RawTokenKind,
    pub text: String,
    pub span: TextSpan,
    pub leading: Vec<TriviaPiece>,
}

impl RawToken {
    pub fn is_eof(&self) -> bool {
        self.kind == RawTokenKind::Eof
    }
}

/// Tokenize `text`. The returned stream always ends with an `Eof` token
/// carrying any trailing trivia.
pub fn tokenize(text: &str) -> Vec<RawToken> {
    Lexer::new(text).run()
}

struct Lexer<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, bytes: text.as_bytes(), pos: 0 }
    }

    fn run(mut self) -> Vec<RawToken> {
        let mut tokens = Vec::new();
        loop {
            let leading = self.collect_trivia();
            if self.pos >= self.bytes.len() {
                tokens.push(RawToken {
                    kind: RawTokenKind::Eof,
                    text: String::new(),
                    span: TextSpan::empty_at(self.pos as u32),
                    leading,
                });
                return tokens;
            }
            let start = self.pos;
            let kind = self.scan_token();
            tokens.push(RawToken {
                kind,
                text: self.text[start..self.pos].to_string(),
                span: TextSpan::new(start as u32, self.pos as u32),
                leading,
            });
        }
    }

    fn collect_trivia(&mut self) -> Vec<TriviaPiece> {
        let mut pieces = Vec::new();
        loop {
            let start = self.pos;
            match self.peek() {
                Some(b) if b.is_ascii_whitespace() => {
                    while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
                        self.pos += 1;
                    }
                    pieces.push(self.trivia_piece(TriviaKind::Whitespace, start));
                }
                Some(b'/') if self.peek_at(1) == Some(b'/') => {
                    while !matches!(self.peek(), None | Some(b'\n')) {
                        self.pos += 1;
                    }
                    pieces.push(self.trivia_piece(TriviaKind::LineComment, start));
                }
                Some(b'/') if self.peek_at(1) == Some(b'*') => {
                    self.pos += 2;
                    // Unterminated block comments run to end of input.
                    while self.pos < self.bytes.len() {
                        if self.peek() == Some(b'*') && self.peek_at(1) == Some(b'/') {
                            self.pos += 2;
                            break;
                        }
                        self.pos += 1;
                    }
                    pieces.push(self.trivia_piece(TriviaKind::BlockComment, start));
                }
                _ => return pieces,
            }
        }
    }

    fn trivia_piece(&self, kind: TriviaKind, start: usize) -> TriviaPiece {
        TriviaPiece::new(
            kind,
            &self.text[start..self.pos],
            TextSpan::new(start as u32, self.pos as u32),
        )
    }

    fn scan_token(&mut self) -> RawTokenKind {
        let b = self.bytes[self.pos];
        if b == b'_' || b.is_ascii_alphabetic() {
            while matches!(self.peek(), Some(c) if c == b'_' || c.is_ascii_alphanumeric()) {
                self.pos += 1;
            }
            RawTokenKind::Identifier
        } else if b.is_ascii_digit() {
            while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == b'.') {
                self.pos += 1;
            }
            RawTokenKind::Number
        } else if b == b'"' || b == b'\'' {
            let quote = b;
            self.pos += 1;
            while let Some(c) = self.peek() {
                self.pos += 1;
                if c == b'\\' {
                    if self.pos < self.bytes.len() {
                        self.pos += 1;
                    }
                } else if c == quote {
                    break;
                }
            }
            RawTokenKind::StringLit
        } else {
            // Punctuation is lexed one char at a time; multi-char operators
            // are recognized by the extractor where it matters. Non-ASCII
            // bytes advance by whole code points.
            let len = self.text[self.pos..]
                .chars()
                .next()
                .map(char::len_utf8)
                .unwrap_or(1);
            self.pos += len;
            RawTokenKind::Punct
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }
}
