use crate::{
    ast::{Expr, ExprKind, Line, Literal},
    diagnostics::{Diagnostic, DiagnosticKind, SourceSpan},
    lexer::{Keyword, Lexer, Token, TokenKind},
};

pub fn parse_line(source: &str) -> Result<Line, Diagnostic> {
    let tokens = Lexer::new(source).tokenize()?;
    Parser::new(tokens).parse_line()
}

struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    fn parse_line(&mut self) -> Result<Line, Diagnostic> {
        if self.is_at_end() {
            return Ok(Line { expr: None });
        }
        let expr = self.parse_expression()?;
        if let Some(token) = self.peek() {
            if token.kind != TokenKind::Eof {
                return Err(self.error(token, "unexpected trailing input"));
            }
        }
        Ok(Line { expr: Some(expr) })
    }

    fn parse_expression(&mut self) -> Result<Expr, Diagnostic> {
        self.parse_call()
    }

    fn parse_call(&mut self) -> Result<Expr, Diagnostic> {
        let mut expr = self.parse_primary()?;
        loop {
            if self.matches(TokenKind::LParen) {
                let mut args = Vec::new();
                if !self.check(TokenKind::RParen) {
                    loop {
                        args.push(self.parse_expression()?);
                        if !self.matches(TokenKind::Comma) || self.check(TokenKind::RParen) {
                            break;
                        }
                    }
                }
                let paren = self.consume(TokenKind::RParen, "expected `)` after arguments")?;
                expr = Expr {
                    span: SourceSpan {
                        start: expr.span.start,
                        end: paren.span.end,
                    },
                    kind: ExprKind::Call {
                        callee: Box::new(expr),
                        args,
                    },
                };
            } else if self.matches(TokenKind::Dot) {
                let ident = self.consume_identifier("expected attribute name after `.`")?;
                expr = Expr {
                    span: SourceSpan {
                        start: expr.span.start,
                        end: ident.span.end,
                    },
                    kind: ExprKind::Attribute {
                        target: Box::new(expr),
                        name: ident.lexeme.clone(),
                    },
                };
            } else {
                break;
            }
        }
        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expr, Diagnostic> {
        let Some(token) = self.peek() else {
            return Err(self.error_eof("unexpected end of expression"));
        };
        match &token.kind {
            TokenKind::Keyword(keyword) => {
                let literal = match keyword {
                    Keyword::None => Literal::None,
                    Keyword::True => Literal::Bool(true),
                    Keyword::False => Literal::Bool(false),
                };
                let tok = self.advance();
                Ok(Expr {
                    span: tok.span,
                    kind: ExprKind::Literal(literal),
                })
            }
            TokenKind::Number => {
                let tok = self.advance();
                let value = tok
                    .lexeme
                    .replace('_', "")
                    .parse()
                    .map_err(|_| self.error(&tok, "integer literal out of range"))?;
                Ok(Expr {
                    span: tok.span,
                    kind: ExprKind::Literal(Literal::Int(value)),
                })
            }
            TokenKind::String => {
                let tok = self.advance();
                Ok(Expr {
                    span: tok.span,
                    kind: ExprKind::Literal(Literal::Str(tok.lexeme.clone())),
                })
            }
            TokenKind::Identifier => {
                let tok = self.advance();
                Ok(Expr {
                    span: tok.span,
                    kind: ExprKind::Name(tok.lexeme.clone()),
                })
            }
            TokenKind::LParen => {
                let lparen = self.advance();
                let inner = self.parse_expression()?;
                let rparen = self.consume(TokenKind::RParen, "expected `)` after expression")?;
                Ok(Expr {
                    span: SourceSpan {
                        start: lparen.span.start,
                        end: rparen.span.end,
                    },
                    kind: ExprKind::Group(Box::new(inner)),
                })
            }
            TokenKind::Eof => Err(self.error(token, "unexpected end of expression")),
            _ => Err(self.error(token, "unexpected token in expression")),
        }
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn consume(&mut self, kind: TokenKind, message: &str) -> Result<Token, Diagnostic> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self
                .peek()
                .map(|tok| self.error(tok, message))
                .unwrap_or_else(|| self.error_eof(message)))
        }
    }

    fn consume_identifier(&mut self, message: &str) -> Result<Token, Diagnostic> {
        self.consume(TokenKind::Identifier, message)
    }

    fn check(&self, kind: TokenKind) -> bool {
        if let Some(token) = self.peek() {
            token.kind == kind
        } else {
            false
        }
    }

    fn advance(&mut self) -> Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous().clone()
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek().map(|t| &t.kind), Some(TokenKind::Eof) | None)
    }

    fn error(&self, token: &Token, message: &str) -> Diagnostic {
        Diagnostic::new(DiagnosticKind::Parser, message.to_string()).with_span(token.span)
    }

    fn error_eof(&self, message: &str) -> Diagnostic {
        Diagnostic::new(DiagnosticKind::Parser, message.to_string())
    }
}
