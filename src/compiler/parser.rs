use crate::compiler::ast::{AssignOp, BinaryOp, Expr, Lit, Stmt, UnaryOp};
use crate::compiler::error::CompileError;
use crate::compiler::lexer::{Token, TokenKind, lex};
use crate::compiler::vocabulary;

pub(crate) fn parse_program(src: &str) -> Result<Vec<Stmt>, CompileError> {
    let tokens = lex(src)?;
    let mut p = Parser {
        src,
        tokens,
        pos: 0,
    };
    let body = p.parse_block()?;
    if p.peek().kind != TokenKind::Eof {
        return Err(p.unexpected("end of program"));
    }
    Ok(body)
}

/// A parsed line item; `else` lines are attached to the preceding `if` by [`attach`].
enum Parsed {
    Stmt(Stmt),
    Else {
        cond: Option<Expr>,
        body: Vec<Stmt>,
        offset: usize,
    },
}

struct Parser<'a> {
    src: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn bump(&mut self) -> Token {
        let t = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        t
    }

    fn error(&self, offset: usize, message: impl Into<String>) -> CompileError {
        CompileError::at(self.src, offset, message)
    }

    fn unexpected(&self, what: &str) -> CompileError {
        let t = self.peek();
        self.error(
            t.span.start,
            format!("expected {what}, found {}", describe(&t.kind)),
        )
    }

    fn consume(&mut self, kind: &TokenKind) -> bool {
        if &self.peek().kind == kind {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<(), CompileError> {
        if self.consume(&kind) {
            Ok(())
        } else {
            Err(self.unexpected(what))
        }
    }

    fn at_word(&self, word: &str) -> bool {
        matches!(&self.peek().kind, TokenKind::Ident(s) if s == word)
    }

    fn at_line_end(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::Newline | TokenKind::Eof | TokenKind::Dedent
        )
    }

    fn parse_block(&mut self) -> Result<Vec<Stmt>, CompileError> {
        let mut items = Vec::new();
        loop {
            match self.peek().kind {
                TokenKind::Eof | TokenKind::Dedent => return Ok(items),
                TokenKind::Newline => {
                    self.bump();
                }
                TokenKind::Indent => {
                    return Err(self.error(self.peek().span.start, "unexpected indentation"));
                }
                _ => {
                    for parsed in self.parse_line()? {
                        attach(&mut items, parsed, self.src)?;
                    }
                }
            }
        }
    }

    /// `;`-separated statements up to the end of the line, newline included.
    fn parse_line(&mut self) -> Result<Vec<Parsed>, CompileError> {
        let mut out = Vec::new();
        loop {
            match self.peek().kind {
                TokenKind::Semi => {
                    self.bump();
                    continue;
                }
                TokenKind::Newline => {
                    self.bump();
                    return Ok(out);
                }
                TokenKind::Eof | TokenKind::Dedent => return Ok(out),
                _ => {}
            }

            let (parsed, line_done) = self.parse_statement()?;
            out.push(parsed);
            if line_done {
                return Ok(out);
            }
            if !(self.at_line_end() || self.peek().kind == TokenKind::Semi) {
                return Err(self.unexpected("end of statement"));
            }
        }
    }

    /// Returns the statement and whether it already consumed the rest of its line.
    fn parse_statement(&mut self) -> Result<(Parsed, bool), CompileError> {
        let tok = self.peek().clone();
        let offset = tok.span.start;

        if let TokenKind::Ident(name) = &tok.kind {
            match name.as_str() {
                "repeat" => {
                    self.bump();
                    let count = self.parse_expr()?;
                    self.expect(TokenKind::Arrow, "'->' after repeat count")?;
                    let body = self.parse_body()?;
                    return Ok((Parsed::Stmt(Stmt::Repeat { count, body }), true));
                }
                "if" => {
                    self.bump();
                    let (cond, then_body) = self.parse_conditional()?;
                    let stmt = Stmt::If {
                        cond,
                        then_body,
                        else_body: None,
                    };
                    return Ok((Parsed::Stmt(stmt), true));
                }
                "else" => {
                    self.bump();
                    let (cond, body) = if self.at_word("if") {
                        self.bump();
                        let (cond, body) = self.parse_conditional()?;
                        (Some(cond), body)
                    } else {
                        self.consume(&TokenKind::Arrow);
                        (None, self.parse_body()?)
                    };
                    return Ok((Parsed::Else { cond, body, offset }, true));
                }
                _ => {}
            }

            if let Some(op) = self.tokens.get(self.pos + 1).and_then(|t| assign_op(&t.kind)) {
                if vocabulary::is_keyword(name) {
                    return Err(self.error(offset, format!("cannot assign to keyword '{name}'")));
                }
                self.bump();
                self.bump();
                let value = self.parse_expr()?;
                let stmt = Stmt::Assign {
                    target: name.clone(),
                    op,
                    value,
                    offset,
                };
                return Ok((Parsed::Stmt(stmt), false));
            }

            if let Some(op) = self.tokens.get(self.pos + 1).and_then(|t| step_op(&t.kind)) {
                if vocabulary::is_keyword(name) {
                    return Err(self.error(offset, format!("cannot assign to keyword '{name}'")));
                }
                self.bump();
                self.bump();
                let stmt = Stmt::Assign {
                    target: name.clone(),
                    op,
                    value: Expr::Lit(Lit::Num(1.0)),
                    offset,
                };
                return Ok((Parsed::Stmt(stmt), false));
            }

            if !vocabulary::is_keyword(name) && self.implicit_args_follow(self.pos) {
                self.bump();
                let args = self.parse_implicit_args()?;
                let call = Expr::Call {
                    func: name.clone(),
                    args,
                    offset,
                };
                return Ok((Parsed::Stmt(Stmt::Expr(call)), false));
            }
        }

        let expr = match self.parse_expr()? {
            Expr::Ident { name, offset } if vocabulary::is_callable(&name) => Expr::Call {
                func: name,
                args: Vec::new(),
                offset,
            },
            other => other,
        };
        Ok((Parsed::Stmt(Stmt::Expr(expr)), false))
    }

    fn parse_conditional(&mut self) -> Result<(Expr, Vec<Stmt>), CompileError> {
        let cond = self.parse_expr()?;
        if !self.consume(&TokenKind::Arrow) && !self.at_line_end() {
            return Err(self.unexpected("'->' or end of line after condition"));
        }
        let body = self.parse_body()?;
        Ok((cond, body))
    }

    /// Body after `->`: the rest of the line, or an indented block on the following lines.
    fn parse_body(&mut self) -> Result<Vec<Stmt>, CompileError> {
        if self.at_line_end() {
            self.consume(&TokenKind::Newline);
            if !self.consume(&TokenKind::Indent) {
                return Ok(Vec::new());
            }
            let body = self.parse_block()?;
            self.consume(&TokenKind::Dedent);
            return Ok(body);
        }

        let mut body = Vec::new();
        for parsed in self.parse_line()? {
            attach(&mut body, parsed, self.src)?;
        }
        Ok(body)
    }

    /// Whether the token after the identifier at `ident_pos` starts a parenthesis-free
    /// argument list, as in `box 1, 2` or `rotate -time`.
    fn implicit_args_follow(&self, ident_pos: usize) -> bool {
        let (Some(ident), Some(next)) = (self.tokens.get(ident_pos), self.tokens.get(ident_pos + 1))
        else {
            return false;
        };
        let gap = next.span.start > ident.span.end;
        match &next.kind {
            TokenKind::Number(_) | TokenKind::Str(_) | TokenKind::Bang => true,
            TokenKind::Ident(w) => {
                !matches!(w.as_str(), "and" | "or" | "else" | "if" | "repeat")
            }
            TokenKind::LParen => gap,
            TokenKind::Minus | TokenKind::Plus => {
                gap && self
                    .tokens
                    .get(ident_pos + 2)
                    .is_some_and(|t| t.span.start == next.span.end)
            }
            _ => false,
        }
    }

    fn parse_implicit_args(&mut self) -> Result<Vec<Expr>, CompileError> {
        let mut args = vec![self.parse_expr()?];
        while self.consume(&TokenKind::Comma) {
            args.push(self.parse_expr()?);
        }
        Ok(args)
    }

    fn parse_expr(&mut self) -> Result<Expr, CompileError> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> Result<Expr, CompileError> {
        let mut e = self.parse_and()?;
        while self.consume(&TokenKind::OrOr) || self.consume_word("or") {
            let r = self.parse_and()?;
            e = binary(BinaryOp::Or, e, r);
        }
        Ok(e)
    }

    fn parse_and(&mut self) -> Result<Expr, CompileError> {
        let mut e = self.parse_equality()?;
        while self.consume(&TokenKind::AndAnd) || self.consume_word("and") {
            let r = self.parse_equality()?;
            e = binary(BinaryOp::And, e, r);
        }
        Ok(e)
    }

    fn consume_word(&mut self, word: &str) -> bool {
        if self.at_word(word) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn parse_equality(&mut self) -> Result<Expr, CompileError> {
        let mut e = self.parse_comparison()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::EqEq => BinaryOp::Eq,
                TokenKind::Ne => BinaryOp::Ne,
                _ => break,
            };
            self.bump();
            let r = self.parse_comparison()?;
            e = binary(op, e, r);
        }
        Ok(e)
    }

    fn parse_comparison(&mut self) -> Result<Expr, CompileError> {
        let mut e = self.parse_term()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Lt => BinaryOp::Lt,
                TokenKind::Le => BinaryOp::Le,
                TokenKind::Gt => BinaryOp::Gt,
                TokenKind::Ge => BinaryOp::Ge,
                _ => break,
            };
            self.bump();
            let r = self.parse_term()?;
            e = binary(op, e, r);
        }
        Ok(e)
    }

    fn parse_term(&mut self) -> Result<Expr, CompileError> {
        let mut e = self.parse_factor()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.bump();
            let r = self.parse_factor()?;
            e = binary(op, e, r);
        }
        Ok(e)
    }

    fn parse_factor(&mut self) -> Result<Expr, CompileError> {
        let mut e = self.parse_unary()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                TokenKind::Percent => BinaryOp::Mod,
                _ => break,
            };
            self.bump();
            let r = self.parse_unary()?;
            e = binary(op, e, r);
        }
        Ok(e)
    }

    fn parse_unary(&mut self) -> Result<Expr, CompileError> {
        if self.consume(&TokenKind::Minus) {
            let e = self.parse_unary()?;
            return Ok(Expr::Unary {
                op: UnaryOp::Neg,
                expr: Box::new(e),
            });
        }
        if self.consume(&TokenKind::Plus) {
            return self.parse_unary();
        }
        if self.consume(&TokenKind::Bang) || self.consume_word("not") {
            let e = self.parse_unary()?;
            return Ok(Expr::Unary {
                op: UnaryOp::Not,
                expr: Box::new(e),
            });
        }
        self.parse_call()
    }

    fn parse_call(&mut self) -> Result<Expr, CompileError> {
        let ident_pos = self.pos;
        let (name, offset) = match self.parse_primary()? {
            Expr::Ident { name, offset } => (name, offset),
            other => return Ok(other),
        };

        let ident_end = self.tokens[ident_pos].span.end;
        if self.peek().kind == TokenKind::LParen && self.peek().span.start == ident_end {
            self.bump();
            let args = self.parse_paren_args()?;
            return Ok(Expr::Call {
                func: name,
                args,
                offset,
            });
        }
        if vocabulary::is_callable(&name) && self.implicit_args_follow(ident_pos) {
            let args = self.parse_implicit_args()?;
            return Ok(Expr::Call {
                func: name,
                args,
                offset,
            });
        }
        Ok(Expr::Ident { name, offset })
    }

    fn parse_paren_args(&mut self) -> Result<Vec<Expr>, CompileError> {
        let mut args = Vec::new();
        if self.consume(&TokenKind::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.parse_expr()?);
            if self.consume(&TokenKind::Comma) {
                continue;
            }
            self.expect(TokenKind::RParen, "')' after arguments")?;
            return Ok(args);
        }
    }

    fn parse_primary(&mut self) -> Result<Expr, CompileError> {
        let t = self.peek().clone();
        let e = match t.kind {
            TokenKind::Number(v) => Expr::Lit(Lit::Num(v)),
            TokenKind::Str(s) => Expr::Lit(Lit::Str(s)),
            TokenKind::Ident(s) => match s.as_str() {
                "true" => Expr::Lit(Lit::Bool(true)),
                "false" => Expr::Lit(Lit::Bool(false)),
                w if vocabulary::is_keyword(w) => {
                    return Err(self.error(t.span.start, format!("unexpected keyword '{w}'")));
                }
                _ => Expr::Ident {
                    name: s,
                    offset: t.span.start,
                },
            },
            TokenKind::LParen => {
                self.bump();
                let e = self.parse_expr()?;
                self.expect(TokenKind::RParen, "')'")?;
                return Ok(e);
            }
            _ => return Err(self.unexpected("expression")),
        };
        self.bump();
        Ok(e)
    }
}

fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}

fn assign_op(kind: &TokenKind) -> Option<AssignOp> {
    match kind {
        TokenKind::Assign => Some(AssignOp::Set),
        TokenKind::PlusAssign => Some(AssignOp::Add),
        TokenKind::MinusAssign => Some(AssignOp::Sub),
        TokenKind::StarAssign => Some(AssignOp::Mul),
        TokenKind::SlashAssign => Some(AssignOp::Div),
        _ => None,
    }
}

/// `x++` and `x--` as statements step the variable by one.
fn step_op(kind: &TokenKind) -> Option<AssignOp> {
    match kind {
        TokenKind::PlusPlus => Some(AssignOp::Add),
        TokenKind::MinusMinus => Some(AssignOp::Sub),
        _ => None,
    }
}

fn attach(items: &mut Vec<Stmt>, parsed: Parsed, src: &str) -> Result<(), CompileError> {
    match parsed {
        Parsed::Stmt(stmt) => {
            items.push(stmt);
            Ok(())
        }
        Parsed::Else { cond, body, offset } => {
            let tail = match cond {
                Some(cond) => vec![Stmt::If {
                    cond,
                    then_body: body,
                    else_body: None,
                }],
                None => body,
            };
            let attached = match items.last_mut() {
                Some(Stmt::If { else_body, .. }) => attach_else(else_body, tail).is_ok(),
                _ => false,
            };
            if attached {
                Ok(())
            } else {
                Err(CompileError::at(src, offset, "else without a matching if"))
            }
        }
    }
}

/// Walks an `else if` chain down to the first open `else`.
fn attach_else(slot: &mut Option<Vec<Stmt>>, tail: Vec<Stmt>) -> Result<(), Vec<Stmt>> {
    match slot {
        None => {
            *slot = Some(tail);
            Ok(())
        }
        Some(body) => match body.as_mut_slice() {
            [Stmt::If { else_body, .. }] => attach_else(else_body, tail),
            _ => Err(tail),
        },
    }
}

fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Ident(s) => format!("'{s}'"),
        TokenKind::Number(v) => format!("number {v}"),
        TokenKind::Str(_) => "string".to_owned(),
        TokenKind::Newline => "end of line".to_owned(),
        TokenKind::Indent => "indentation".to_owned(),
        TokenKind::Dedent => "end of block".to_owned(),
        TokenKind::Eof => "end of program".to_owned(),
        other => format!("{other:?}"),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compiler/parser.rs"]
mod tests;
