/*!
# Construct extractor

Recognizes the two candidate constructs in a raw token stream and builds the
document snapshot. This is a reference tree provider, not a general parser:
it tracks bracket nesting and a handful of context cues, which is enough to
tell tuple literals apart from invocations and anonymous-object creations
apart from ordinary initializer blocks.

Context cues:
- `(` opens a tuple-literal candidate unless it directly follows an
  identifier, `)` or `]` (an invocation or element access). Keyword callers
  like `return (…)` still count as tuple positions. A candidate must contain
  at least two elements to be a tuple literal.
- `{` opens an anonymous-object candidate only when it directly follows the
  `new` keyword with no type name in between.
*/

use crate::syntax::{
    DocumentSnapshot, ExplicitName, ExprKind, Expression, NameableConstruct, Token,
};

use super::lexer::{tokenize, RawToken, RawTokenKind};

/// Identifier-like tokens after which `(` still opens an expression position.
const TUPLE_POSITION_KEYWORDS: &[&str] = &[
    "return", "yield", "await", "in", "case", "else", "do", "when",
];

/// Parse `text` into an immutable snapshot.
pub fn parse_document(file: impl Into<String>, text: &str) -> DocumentSnapshot {
    let tokens = tokenize(text);
    let mut extractor = Extractor { tokens: &tokens, pos: 0, constructs: Vec::new() };
    extractor.run();
    DocumentSnapshot::new(file, text, extractor.constructs)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupKind {
    TupleCandidate,
    AnonymousObject,
    Opaque,
}

struct Extractor<'t> {
    tokens: &'t [RawToken],
    pos: usize,
    constructs: Vec<NameableConstruct>,
}

impl<'t> Extractor<'t> {
    fn run(&mut self) {
        while !self.cur().is_eof() {
            if is_open_bracket(self.cur()) {
                self.parse_group();
            } else {
                self.pos += 1;
            }
        }
    }

    /// Called with the cursor on an opening bracket; consumes through the
    /// matching closer and records any constructs found inside.
    fn parse_group(&mut self) {
        let kind = self.classify_group();
        let closer = match self.cur().text.as_str() {
            "(" => ")",
            "{" => "}",
            _ => "]",
        };
        self.pos += 1;

        let mut elements: Vec<ExplicitName> = Vec::new();
        loop {
            let cur = self.cur();
            if cur.is_eof() {
                break;
            }
            if is_close_bracket(cur) {
                // Mismatched closers also end the group; the stream is not
                // guaranteed to be well formed.
                let matched = cur.text == closer;
                if matched {
                    self.pos += 1;
                }
                break;
            }
            elements.push(self.parse_element(kind));
            if self.cur().text == "," {
                self.pos += 1;
            }
        }

        match kind {
            // A parenthesized single expression is not a tuple literal.
            GroupKind::TupleCandidate if elements.len() >= 2 => {
                self.constructs
                    .extend(elements.into_iter().map(NameableConstruct::TupleElement));
            }
            GroupKind::AnonymousObject => {
                self.constructs
                    .extend(elements.into_iter().map(NameableConstruct::AnonymousMember));
            }
            _ => {}
        }
    }

    /// Decide what the bracket at the cursor opens, from the token before it.
    fn classify_group(&self) -> GroupKind {
        let prev = self.pos.checked_sub(1).map(|i| &self.tokens[i]);
        match self.cur().text.as_str() {
            "(" => {
                let call_like = match prev {
                    Some(p) if p.kind == RawTokenKind::Identifier => {
                        !TUPLE_POSITION_KEYWORDS.contains(&p.text.as_str())
                    }
                    Some(p) => p.text == ")" || p.text == "]",
                    None => false,
                };
                if call_like {
                    GroupKind::Opaque
                } else {
                    GroupKind::TupleCandidate
                }
            }
            "{" => match prev {
                Some(p) if p.kind == RawTokenKind::Identifier && p.text == "new" => {
                    GroupKind::AnonymousObject
                }
                _ => GroupKind::Opaque,
            },
            _ => GroupKind::Opaque,
        }
    }

    /// One comma-separated element: an optional `name <sep>` prefix followed
    /// by an expression running to the next `,` or closer at this depth.
    fn parse_element(&mut self, group: GroupKind) -> ExplicitName {
        let name_sep = match group {
            GroupKind::TupleCandidate => self.try_name_prefix(":"),
            GroupKind::AnonymousObject => self.try_name_prefix("="),
            GroupKind::Opaque => None,
        };

        let expr = self.parse_expression();
        match name_sep {
            Some((name, separator)) => ExplicitName::named(name, separator, expr),
            None => ExplicitName::unnamed(expr),
        }
    }

    /// Recognize `identifier <sep>` at the cursor and consume it.
    fn try_name_prefix(&mut self, sep: &str) -> Option<(Token, Token)> {
        let name = self.cur();
        if name.kind != RawTokenKind::Identifier {
            return None;
        }
        let sep_tok = self.tokens.get(self.pos + 1)?;
        if sep_tok.text != sep {
            return None;
        }
        // Reject `==` and `=>`: a lone `=` only separates when nothing glues
        // onto it.
        if sep == "=" {
            if let Some(after) = self.tokens.get(self.pos + 2) {
                if after.leading.is_empty() && (after.text == "=" || after.text == ">") {
                    return None;
                }
            }
        }
        let name_token =
            Token::new(name.text.clone(), name.span).with_leading(name.leading.clone());
        let sep_token =
            Token::new(sep_tok.text.clone(), sep_tok.span).with_leading(sep_tok.leading.clone());
        self.pos += 2;
        Some((name_token, sep_token))
    }

    /// Consume one element expression. An identifier or `a.b.c` chain that
    /// fills the whole element yields an inferable shape; everything else is
    /// opaque. Nested groups are recursed into so constructs inside them are
    /// still found.
    fn parse_expression(&mut self) -> Expression {
        let first = self.cur().clone();
        let leading = first.leading.clone();
        let start = first.span.start;

        if first.kind == RawTokenKind::Identifier {
            let mut segments = vec![first.text.clone()];
            let mut end = first.span.end;
            self.pos += 1;
            while self.cur().text == "."
                && self
                    .tokens
                    .get(self.pos + 1)
                    .map(|t| t.kind == RawTokenKind::Identifier)
                    .unwrap_or(false)
            {
                let ident = &self.tokens[self.pos + 1];
                segments.push(ident.text.clone());
                end = ident.span.end;
                self.pos += 2;
            }

            if self.at_element_end() {
                let span = crate::core::TextSpan::new(start, end);
                let kind = match segments.split_last() {
                    Some((name, [])) => ExprKind::Identifier { name: name.clone() },
                    Some((name, path)) => {
                        ExprKind::MemberAccess { path: path.join("."), name: name.clone() }
                    }
                    None => ExprKind::Other,
                };
                return Expression::new(kind, span).with_leading(leading);
            }

            // The chain continues into a call, operator, or anything else:
            // the element expression as a whole is not inferable.
            let end = self.skip_rest_of_element(end);
            return Expression::new(ExprKind::Other, crate::core::TextSpan::new(start, end))
                .with_leading(leading);
        }

        let end = self.skip_rest_of_element(start);
        Expression::new(ExprKind::Other, crate::core::TextSpan::new(start, end))
            .with_leading(leading)
    }

    /// Consume tokens until the element ends, recursing into nested groups.
    /// Returns the end offset of the last consumed token.
    fn skip_rest_of_element(&mut self, mut end: u32) -> u32 {
        loop {
            let cur = self.cur();
            if cur.is_eof() || self.at_element_end() {
                return end;
            }
            if is_open_bracket(cur) {
                let close_hint = self.tokens[self.pos].span.end;
                self.parse_group();
                // parse_group left the cursor past the closer (or at EOF).
                end = self
                    .pos
                    .checked_sub(1)
                    .map(|i| self.tokens[i].span.end)
                    .unwrap_or(close_hint);
            } else {
                end = cur.span.end;
                self.pos += 1;
            }
        }
    }

    fn at_element_end(&self) -> bool {
        let cur = self.cur();
        cur.is_eof() || cur.text == "," || is_close_bracket(cur)
    }

    fn cur(&self) -> &RawToken {
        // The stream always ends with Eof, so pos is clamped to the last
        // token rather than running off the slice.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }
}

fn is_open_bracket(token: &RawToken) -> bool {
    matches!(token.text.as_str(), "(" | "{" | "[")
}

fn is_close_bracket(token: &RawToken) -> bool {
    matches!(token.text.as_str(), ")" | "}" | "]")
}
