//! Expression grammar.

use amsl_ir::{ensure_sufficient_stack, Expr, ExprKind, Span, Token, TokenKind};

use crate::{Cursor, ParseError};

/// Recursive-descent parser over a token slice.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse one expression and require that it consumes every token.
    pub fn parse_program(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_required("a program expression")?;
        if let Some(token) = self.cursor.peek() {
            return Err(ParseError::TrailingTokens {
                found: token.kind.describe(),
                span: token.span,
                position: self.cursor.position(),
            });
        }
        Ok(expr)
    }

    /// Parse one expression. `Ok(None)` is the empty statement `;`.
    pub fn parse_expr(&mut self) -> Result<Option<Expr>, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> Result<Option<Expr>, ParseError> {
        let position = self.cursor.position();
        let token = self.cursor.advance("an expression")?;
        let span = token.span;

        let kind = match &token.kind {
            TokenKind::Int(value) => ExprKind::Int(*value),
            TokenKind::Str(value) => ExprKind::Str(value.clone()),
            TokenKind::Sym(sym) => match sym.as_str() {
                ";" => return Ok(None),
                "{" => return self.parse_list(span).map(Some),
                "@" => return self.parse_call(span).map(Some),
                "let" => return self.parse_let(span).map(Some),
                "apply" => return self.parse_apply(span).map(Some),
                "}" | ")" => return Err(ParseError::unexpected(token, position, "an expression")),
                _ => ExprKind::VarRef(sym.clone()),
            },
        };
        Ok(Some(Expr::new(kind, span)))
    }

    /// Parse an expression where `;` is not acceptable.
    fn parse_required(&mut self, expected: &'static str) -> Result<Expr, ParseError> {
        match self.parse_expr()? {
            Some(expr) => Ok(expr),
            None => Err(ParseError::ExpectedExpression {
                expected,
                span: self.cursor.previous_span(),
            }),
        }
    }

    /// Expressions up to the closing symbol `close`, dropping empty
    /// statements. Returns the items and the span of the closer.
    fn parse_until(
        &mut self,
        close: &str,
        expected: &'static str,
    ) -> Result<(Vec<Expr>, Span), ParseError> {
        let mut items = Vec::new();
        loop {
            if self.cursor.eat_sym(close) {
                return Ok((items, self.cursor.previous_span()));
            }
            if self.cursor.is_at_end() {
                return Err(ParseError::UnexpectedEof {
                    expected,
                    span: self.cursor.end_span(),
                });
            }
            if let Some(item) = self.parse_expr()? {
                items.push(item);
            }
        }
    }

    /// `{ expr* }`; the `{` is already consumed.
    fn parse_list(&mut self, open: Span) -> Result<Expr, ParseError> {
        let (items, close) = self.parse_until("}", "`}` to close the list")?;
        Ok(Expr::new(ExprKind::List(items), open.merge(close)))
    }

    /// `@ name ( expr* )`; the `@` is already consumed.
    fn parse_call(&mut self, at: Span) -> Result<Expr, ParseError> {
        let (name, _) = self.cursor.expect_name("a function name after `@`")?;
        self.cursor
            .expect_sym("(", "`(` after the function name")?;
        let (args, close) = self.parse_until(")", "`)` to close the argument list")?;
        Ok(Expr::new(ExprKind::Call { name, args }, at.merge(close)))
    }

    /// `let name [: type] [= init]`; the `let` is already consumed.
    fn parse_let(&mut self, start: Span) -> Result<Expr, ParseError> {
        let (name, _) = self.cursor.expect_name("a variable name after `let`")?;

        let ty = if self.cursor.eat_sym(":") {
            Some(self.cursor.expect_name("a type name after `:`")?.0)
        } else {
            None
        };

        let init = if self.cursor.eat_sym("=") {
            Some(Box::new(self.parse_required("an initializer after `=`")?))
        } else {
            None
        };

        let span = start.merge(self.cursor.previous_span());
        Ok(Expr::new(ExprKind::VarDecl { name, ty, init }, span))
    }

    /// `apply lhs [= | ,] rhs`; the `apply` is already consumed.
    fn parse_apply(&mut self, start: Span) -> Result<Expr, ParseError> {
        let lhs = self.parse_required("an assignment target after `apply`")?;
        if !self.cursor.eat_sym("=") {
            self.cursor.eat_sym(",");
        }
        let rhs = self.parse_required("a value to assign")?;
        let span = start.merge(rhs.span);
        Ok(Expr::new(
            ExprKind::Assign {
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            },
            span,
        ))
    }
}
