use crate::diagnostics::{Diagnostic, DiagnosticKind, SourceSpan};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keyword {
    None,
    True,
    False,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    Number,
    String,
    Keyword(Keyword),
    LParen,
    RParen,
    Comma,
    Dot,
    Unknown,
    Eof,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: SourceSpan,
}

pub struct Lexer<'a> {
    source: &'a str,
    chars: std::str::CharIndices<'a>,
    current: usize,
    peeked: Option<(usize, char)>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices(),
            current: 0,
            peeked: None,
        }
    }

    fn bump(&mut self) -> Option<(usize, char)> {
        let next = if let Some((idx, ch)) = self.peeked.take() {
            Some((idx, ch))
        } else {
            self.chars.next()
        };
        if let Some((idx, ch)) = next {
            self.current = idx + ch.len_utf8();
            Some((idx, ch))
        } else {
            None
        }
    }

    fn peek(&mut self) -> Option<(usize, char)> {
        if self.peeked.is_none() {
            self.peeked = self.chars.next();
        }
        self.peeked
    }

    fn collect_while<F>(&mut self, mut predicate: F)
    where
        F: FnMut(char) -> bool,
    {
        while let Some((_, ch)) = self.peek() {
            if predicate(ch) {
                self.bump();
            } else {
                break;
            }
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some((_, ch)) = self.peek() {
            if ch.is_whitespace() {
                self.bump();
            } else if ch == '#' {
                while let Some((_, ch)) = self.bump() {
                    if ch == '\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    fn identifier_or_keyword(&mut self, start: usize) -> Token {
        self.collect_while(|ch| ch.is_alphanumeric() || ch == '_');
        let end = self.current;
        let lexeme = self.source[start..end].to_string();
        let kind = keyword_for(&lexeme).unwrap_or(TokenKind::Identifier);
        Token {
            kind,
            lexeme,
            span: SourceSpan { start, end },
        }
    }

    fn number_literal(&mut self, start: usize) -> Token {
        self.collect_while(|ch| ch.is_ascii_digit() || ch == '_');
        let end = self.current;
        Token {
            kind: TokenKind::Number,
            lexeme: self.source[start..end].to_string(),
            span: SourceSpan { start, end },
        }
    }

    fn string_literal(&mut self, start: usize, quote: char) -> Result<Token, Diagnostic> {
        let mut end = self.current;
        let mut value = String::new();
        while let Some((idx, ch)) = self.bump() {
            end = idx + ch.len_utf8();
            match ch {
                '\\' => {
                    if let Some((_, esc)) = self.bump() {
                        end = idx + 1 + esc.len_utf8();
                        match esc {
                            'n' => value.push('\n'),
                            'r' => value.push('\r'),
                            't' => value.push('\t'),
                            other => value.push(other),
                        }
                    } else {
                        break;
                    }
                }
                '\n' => break,
                ch if ch == quote => {
                    return Ok(Token {
                        kind: TokenKind::String,
                        lexeme: value,
                        span: SourceSpan { start, end },
                    });
                }
                _ => value.push(ch),
            }
        }
        Err(
            Diagnostic::new(DiagnosticKind::Lexer, "unterminated string literal")
                .with_span(SourceSpan { start, end }),
        )
    }

    fn simple_token(&mut self, start: usize, kind: TokenKind) -> Token {
        let end = self.current;
        Token {
            kind,
            lexeme: self.source[start..end].to_string(),
            span: SourceSpan { start, end },
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, Diagnostic> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace_and_comments();
            let (start, ch) = match self.bump() {
                Some(pair) => pair,
                None => {
                    tokens.push(Token {
                        kind: TokenKind::Eof,
                        lexeme: String::new(),
                        span: SourceSpan {
                            start: self.current,
                            end: self.current,
                        },
                    });
                    break;
                }
            };

            let token = match ch {
                'a'..='z' | 'A'..='Z' | '_' => self.identifier_or_keyword(start),
                '0'..='9' => self.number_literal(start),
                '"' | '\'' => self.string_literal(start, ch)?,
                '(' => self.simple_token(start, TokenKind::LParen),
                ')' => self.simple_token(start, TokenKind::RParen),
                ',' => self.simple_token(start, TokenKind::Comma),
                '.' => self.simple_token(start, TokenKind::Dot),
                _ => self.simple_token(start, TokenKind::Unknown),
            };
            tokens.push(token);
        }
        Ok(tokens)
    }
}

fn keyword_for(ident: &str) -> Option<TokenKind> {
    let keyword = match ident {
        "None" => Keyword::None,
        "True" => Keyword::True,
        "False" => Keyword::False,
        _ => return None,
    };
    Some(TokenKind::Keyword(keyword))
}
