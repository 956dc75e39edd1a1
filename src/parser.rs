//! Tree provider: turns raw build-script text into a [`SyntaxTree`].
//!
//! The grammar is the Groovy-flavoured subset that build scripts actually
//! use for declarations: method calls (parenthesized, command form, and
//! trailing-closure form), named arguments, string/number constants, list
//! and map literals, and property assignments. Everything else is lexed and
//! consumed but collapses to opaque nodes — surface diversity is routine
//! input, not an error. Only structurally broken scripts (unterminated
//! strings or comments, unbalanced delimiters) fail the parse.

use crate::ast::{Block, CallArgs, Expr, MapEntry, Stmt, SyntaxTree};
use crate::error::ParseError;

/// Parse one build script. Deterministic; a failure is final for the file.
pub fn parse(script: &str) -> Result<SyntaxTree, ParseError> {
    let tokens = lex(script)?;
    let mut parser = Parser { tokens, pos: 0 };
    let statements = parser.statements(false, 1)?;
    Ok(SyntaxTree { statements })
}

#[derive(Debug, Clone, PartialEq)]
enum Tok {
    Ident(String),
    Str { text: String, interpolated: bool },
    Number(String),
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Colon,
    Dot,
    Assign,
    Newline,
    Other,
}

struct Token {
    tok: Tok,
    line: usize,
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn lex(src: &str) -> Result<Vec<Token>, ParseError> {
    let chars: Vec<char> = src.chars().collect();
    let mut out = Vec::new();
    let mut i = 0;
    let mut line = 1;

    while i < chars.len() {
        let c = chars[i];
        match c {
            ' ' | '\t' | '\r' => i += 1,
            '\n' => {
                out.push(Token { tok: Tok::Newline, line });
                line += 1;
                i += 1;
            }
            ';' => {
                out.push(Token { tok: Tok::Newline, line });
                i += 1;
            }
            '/' if chars.get(i + 1) == Some(&'/') => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
            }
            '/' if chars.get(i + 1) == Some(&'*') => {
                let start = line;
                i += 2;
                loop {
                    if i >= chars.len() {
                        return Err(ParseError::UnterminatedComment { line: start });
                    }
                    if chars[i] == '\n' {
                        line += 1;
                    } else if chars[i] == '*' && chars.get(i + 1) == Some(&'/') {
                        i += 2;
                        break;
                    }
                    i += 1;
                }
            }
            '\'' | '"' => {
                let quote = c;
                let start = line;
                let mut text = String::new();
                let mut interpolated = false;
                i += 1;
                loop {
                    if i >= chars.len() {
                        return Err(ParseError::UnterminatedString { line: start });
                    }
                    let s = chars[i];
                    if s == quote {
                        i += 1;
                        break;
                    }
                    if s == '\\' && i + 1 < chars.len() {
                        let escaped = chars[i + 1];
                        text.push(match escaped {
                            'n' => '\n',
                            't' => '\t',
                            'r' => '\r',
                            other => other,
                        });
                        i += 2;
                        continue;
                    }
                    if s == '\n' {
                        line += 1;
                    }
                    // Both `${expr}` and bare `$name` make a GString; an
                    // escaped `\$` never reaches here.
                    if quote == '"'
                        && s == '$'
                        && chars
                            .get(i + 1)
                            .is_some_and(|&n| n == '{' || is_ident_start(n))
                    {
                        interpolated = true;
                    }
                    text.push(s);
                    i += 1;
                }
                out.push(Token {
                    tok: Tok::Str { text, interpolated },
                    line: start,
                });
            }
            c if c.is_ascii_digit() => {
                let mut text = String::new();
                while i < chars.len() && chars[i].is_ascii_digit() {
                    text.push(chars[i]);
                    i += 1;
                }
                if chars.get(i) == Some(&'.')
                    && chars.get(i + 1).is_some_and(|d| d.is_ascii_digit())
                {
                    text.push('.');
                    i += 1;
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        text.push(chars[i]);
                        i += 1;
                    }
                }
                out.push(Token {
                    tok: Tok::Number(text),
                    line,
                });
            }
            c if is_ident_start(c) => {
                let mut text = String::new();
                while i < chars.len() && is_ident_part(chars[i]) {
                    text.push(chars[i]);
                    i += 1;
                }
                out.push(Token {
                    tok: Tok::Ident(text),
                    line,
                });
            }
            '=' => {
                if chars.get(i + 1) == Some(&'=') {
                    out.push(Token { tok: Tok::Other, line });
                    i += 2;
                } else {
                    out.push(Token { tok: Tok::Assign, line });
                    i += 1;
                }
            }
            '{' => {
                out.push(Token { tok: Tok::LBrace, line });
                i += 1;
            }
            '}' => {
                out.push(Token { tok: Tok::RBrace, line });
                i += 1;
            }
            '(' => {
                out.push(Token { tok: Tok::LParen, line });
                i += 1;
            }
            ')' => {
                out.push(Token { tok: Tok::RParen, line });
                i += 1;
            }
            '[' => {
                out.push(Token { tok: Tok::LBracket, line });
                i += 1;
            }
            ']' => {
                out.push(Token { tok: Tok::RBracket, line });
                i += 1;
            }
            ',' => {
                out.push(Token { tok: Tok::Comma, line });
                i += 1;
            }
            ':' => {
                out.push(Token { tok: Tok::Colon, line });
                i += 1;
            }
            '.' => {
                out.push(Token { tok: Tok::Dot, line });
                i += 1;
            }
            _ => {
                out.push(Token { tok: Tok::Other, line });
                i += 1;
            }
        }
    }

    Ok(out)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Tok> {
        self.tokens.get(self.pos).map(|t| &t.tok)
    }

    fn peek_at(&self, n: usize) -> Option<&Tok> {
        self.tokens.get(self.pos + n).map(|t| &t.tok)
    }

    fn line(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map_or(1, |t| t.line)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn skip_newlines(&mut self) {
        while matches!(self.peek(), Some(Tok::Newline)) {
            self.advance();
        }
    }

    /// Parse statements up to end of input, or to the closing `}` of a block.
    fn statements(&mut self, in_block: bool, open_line: usize) -> Result<Vec<Stmt>, ParseError> {
        let mut out = Vec::new();
        loop {
            self.skip_newlines();
            match self.peek() {
                None => {
                    if in_block {
                        return Err(ParseError::UnexpectedEof {
                            context: "closure",
                            line: open_line,
                        });
                    }
                    return Ok(out);
                }
                Some(Tok::RBrace) => {
                    if in_block {
                        self.advance();
                        return Ok(out);
                    }
                    return Err(ParseError::UnmatchedDelimiter {
                        delimiter: '}',
                        line: self.line(),
                    });
                }
                Some(_) => out.push(self.statement()?),
            }
        }
    }

    fn statement(&mut self) -> Result<Stmt, ParseError> {
        match self.peek() {
            Some(Tok::Ident(name)) if name == "return" => {
                self.advance();
                if matches!(self.peek(), None | Some(Tok::Newline) | Some(Tok::RBrace)) {
                    return Ok(Stmt::Return(Expr::Opaque));
                }
                let expr = match self.peek() {
                    Some(Tok::Ident(_)) => self.statement_expr()?,
                    _ => self.value_expr()?,
                };
                self.end_statement()?;
                Ok(Stmt::Return(expr))
            }
            Some(Tok::Ident(_)) => {
                let expr = self.statement_expr()?;
                self.end_statement()?;
                Ok(Stmt::Expression(expr))
            }
            Some(Tok::Str { .. }) | Some(Tok::Number(_)) | Some(Tok::LBracket) => {
                let expr = self.value_expr()?;
                self.end_statement()?;
                Ok(Stmt::Expression(expr))
            }
            Some(_) => {
                self.skip_statement()?;
                Ok(Stmt::Opaque)
            }
            None => Ok(Stmt::Opaque),
        }
    }

    /// Identifier-led statement expression: assignment, block call,
    /// parenthesized call, or command-form call.
    fn statement_expr(&mut self) -> Result<Expr, ParseError> {
        let mut chain = Vec::new();
        if let Some(Tok::Ident(name)) = self.peek() {
            chain.push(name.clone());
            self.advance();
        }
        while matches!(self.peek(), Some(Tok::Dot))
            && matches!(self.peek_at(1), Some(Tok::Ident(_)))
        {
            self.advance();
            if let Some(Tok::Ident(name)) = self.peek() {
                chain.push(name.clone());
                self.advance();
            }
        }

        match self.peek() {
            Some(Tok::Assign) => {
                self.advance();
                let mut value = self.value_expr()?;
                // More tokens before the statement ends mean the assigned
                // value is a larger expression; what was parsed is only its
                // left operand, which must not pass for the whole value.
                if !matches!(self.peek(), None | Some(Tok::Newline) | Some(Tok::RBrace)) {
                    value = Expr::Opaque;
                }
                let name = chain.pop().unwrap_or_default();
                let owner = if chain.is_empty() {
                    None
                } else {
                    Some(chain.join("."))
                };
                Ok(Expr::AttributeAccess {
                    owner,
                    name,
                    value: Box::new(value),
                })
            }
            Some(Tok::LBrace) => {
                let block = self.closure()?;
                Ok(Expr::MethodCall {
                    name: chain.pop().unwrap_or_default(),
                    args: CallArgs::List(vec![Expr::Closure(block)]),
                })
            }
            Some(Tok::LParen) => {
                let mut args = self.paren_args()?;
                if matches!(self.peek(), Some(Tok::LBrace)) {
                    let block = self.closure()?;
                    match &mut args {
                        CallArgs::List(v) | CallArgs::Tuple(v) => v.push(Expr::Closure(block)),
                    }
                }
                Ok(Expr::MethodCall {
                    name: chain.pop().unwrap_or_default(),
                    args,
                })
            }
            Some(Tok::Str { .. })
            | Some(Tok::Number(_))
            | Some(Tok::Ident(_))
            | Some(Tok::LBracket) => {
                let args = self.command_args()?;
                Ok(Expr::MethodCall {
                    name: chain.pop().unwrap_or_default(),
                    args,
                })
            }
            // Bare identifier, property read, or an operator expression the
            // grammar does not model; trailing tokens are consumed by
            // end_statement.
            _ => Ok(Expr::Opaque),
        }
    }

    /// `( ... )` argument list. Named arguments collect into one map literal
    /// wrapped in a tuple, matching how the script language passes them.
    fn paren_args(&mut self) -> Result<CallArgs, ParseError> {
        let open_line = self.line();
        self.advance(); // (
        let mut named: Vec<MapEntry> = Vec::new();
        let mut positional: Vec<Expr> = Vec::new();

        loop {
            self.skip_newlines();
            match self.peek() {
                None => {
                    return Err(ParseError::UnexpectedEof {
                        context: "argument list",
                        line: open_line,
                    });
                }
                Some(Tok::RParen) => {
                    self.advance();
                    break;
                }
                Some(Tok::Comma) => self.advance(),
                Some(Tok::LBrace) => {
                    let block = self.closure()?;
                    positional.push(Expr::Closure(block));
                }
                Some(_) => self.argument(&mut named, &mut positional)?,
            }
        }

        Ok(Self::assemble_args(named, positional))
    }

    /// Command-form argument list (`implementation 'a:b:c'`), terminated by
    /// end of line or the enclosing block's `}`. A comma at end of line
    /// continues the list on the next line.
    fn command_args(&mut self) -> Result<CallArgs, ParseError> {
        let mut named: Vec<MapEntry> = Vec::new();
        let mut positional: Vec<Expr> = Vec::new();

        loop {
            match self.peek() {
                None | Some(Tok::Newline) | Some(Tok::RBrace) | Some(Tok::RParen)
                | Some(Tok::RBracket) => break,
                Some(Tok::Comma) => {
                    self.advance();
                    self.skip_newlines();
                }
                Some(Tok::LBrace) => {
                    let block = self.closure()?;
                    positional.push(Expr::Closure(block));
                }
                Some(_) => self.argument(&mut named, &mut positional)?,
            }
        }

        Ok(Self::assemble_args(named, positional))
    }

    fn assemble_args(named: Vec<MapEntry>, positional: Vec<Expr>) -> CallArgs {
        if named.is_empty() {
            CallArgs::List(positional)
        } else {
            let mut args = vec![Expr::MapLiteral(named)];
            args.extend(positional);
            CallArgs::Tuple(args)
        }
    }

    /// One argument: either a `key: value` named entry or a positional
    /// expression. Always consumes at least one token.
    fn argument(
        &mut self,
        named: &mut Vec<MapEntry>,
        positional: &mut Vec<Expr>,
    ) -> Result<(), ParseError> {
        let key = match (self.peek(), self.peek_at(1)) {
            (Some(Tok::Ident(name)), Some(Tok::Colon)) => Some(name.clone()),
            (Some(Tok::Str { text, .. }), Some(Tok::Colon)) => Some(text.clone()),
            _ => None,
        };

        if let Some(key) = key {
            self.advance(); // key
            self.advance(); // :
            self.skip_newlines();
            let value = self.value_expr()?;
            named.push(MapEntry {
                key: Expr::Constant(key),
                value,
            });
        } else {
            let value = self.value_expr()?;
            positional.push(value);
        }
        Ok(())
    }

    /// Single expression in value position.
    fn value_expr(&mut self) -> Result<Expr, ParseError> {
        match self.peek() {
            Some(Tok::Str { text, interpolated }) => {
                let expr = if *interpolated {
                    // Interpolated strings have no static text.
                    Expr::Opaque
                } else {
                    Expr::Constant(text.clone())
                };
                self.advance();
                Ok(expr)
            }
            Some(Tok::Number(text)) => {
                let expr = Expr::Constant(text.clone());
                self.advance();
                Ok(expr)
            }
            Some(Tok::LBracket) => self.bracket_literal(),
            Some(Tok::LBrace) => Ok(Expr::Closure(self.closure()?)),
            Some(Tok::Ident(_)) => {
                let mut chain = Vec::new();
                if let Some(Tok::Ident(name)) = self.peek() {
                    chain.push(name.clone());
                    self.advance();
                }
                while matches!(self.peek(), Some(Tok::Dot))
                    && matches!(self.peek_at(1), Some(Tok::Ident(_)))
                {
                    self.advance();
                    if let Some(Tok::Ident(name)) = self.peek() {
                        chain.push(name.clone());
                        self.advance();
                    }
                }
                if matches!(self.peek(), Some(Tok::LParen)) {
                    let mut args = self.paren_args()?;
                    if matches!(self.peek(), Some(Tok::LBrace)) {
                        let block = self.closure()?;
                        match &mut args {
                            CallArgs::List(v) | CallArgs::Tuple(v) => {
                                v.push(Expr::Closure(block))
                            }
                        }
                    }
                    Ok(Expr::MethodCall {
                        name: chain.pop().unwrap_or_default(),
                        args,
                    })
                } else {
                    // Variable or property reference: no static text.
                    Ok(Expr::Opaque)
                }
            }
            Some(_) => {
                self.advance();
                Ok(Expr::Opaque)
            }
            None => Ok(Expr::Opaque),
        }
    }

    /// `[a, b]` list literal or `[k: v]` map literal; `[]` is an empty list
    /// and `[:]` an empty map.
    fn bracket_literal(&mut self) -> Result<Expr, ParseError> {
        let open_line = self.line();
        self.advance(); // [
        self.skip_newlines();

        if matches!(self.peek(), Some(Tok::Colon)) && matches!(self.peek_at(1), Some(Tok::RBracket))
        {
            self.advance();
            self.advance();
            return Ok(Expr::MapLiteral(Vec::new()));
        }

        let is_map = matches!(
            (self.peek(), self.peek_at(1)),
            (Some(Tok::Ident(_)), Some(Tok::Colon))
                | (Some(Tok::Str { .. }), Some(Tok::Colon))
                | (Some(Tok::Number(_)), Some(Tok::Colon))
        );

        let mut entries: Vec<MapEntry> = Vec::new();
        let mut items: Vec<Expr> = Vec::new();

        loop {
            self.skip_newlines();
            match self.peek() {
                None => {
                    return Err(ParseError::UnexpectedEof {
                        context: "collection literal",
                        line: open_line,
                    });
                }
                Some(Tok::RBracket) => {
                    self.advance();
                    break;
                }
                Some(Tok::Comma) => self.advance(),
                Some(_) => {
                    if is_map {
                        let key = match (self.peek(), self.peek_at(1)) {
                            (Some(Tok::Ident(name)), Some(Tok::Colon)) => Some(name.clone()),
                            (Some(Tok::Str { text, .. }), Some(Tok::Colon)) => Some(text.clone()),
                            (Some(Tok::Number(text)), Some(Tok::Colon)) => Some(text.clone()),
                            _ => None,
                        };
                        if let Some(key) = key {
                            self.advance();
                            self.advance();
                            self.skip_newlines();
                            let value = self.value_expr()?;
                            entries.push(MapEntry {
                                key: Expr::Constant(key),
                                value,
                            });
                        } else {
                            // Entry without a key in a map literal: consume
                            // and drop.
                            self.value_expr()?;
                        }
                    } else {
                        let item = self.value_expr()?;
                        items.push(item);
                    }
                }
            }
        }

        if is_map {
            Ok(Expr::MapLiteral(entries))
        } else {
            Ok(Expr::ListLiteral(items))
        }
    }

    fn closure(&mut self) -> Result<Block, ParseError> {
        let open_line = self.line();
        self.advance(); // {
        let statements = self.statements(true, open_line)?;
        Ok(Block { statements })
    }

    /// Consume to the end of the current statement, keeping delimiters
    /// balanced. The enclosing block's `}` is left for the block loop.
    fn skip_statement(&mut self) -> Result<(), ParseError> {
        let mut stack: Vec<(char, usize)> = Vec::new();
        loop {
            let line = self.line();
            match self.peek() {
                None => {
                    if let Some((delimiter, open_line)) = stack.pop() {
                        return Err(ParseError::UnexpectedEof {
                            context: match delimiter {
                                '(' => "argument list",
                                '[' => "collection literal",
                                _ => "closure",
                            },
                            line: open_line,
                        });
                    }
                    return Ok(());
                }
                Some(Tok::Newline) if stack.is_empty() => {
                    self.advance();
                    return Ok(());
                }
                Some(Tok::LParen) => {
                    stack.push(('(', line));
                    self.advance();
                }
                Some(Tok::LBracket) => {
                    stack.push(('[', line));
                    self.advance();
                }
                Some(Tok::LBrace) => {
                    stack.push(('{', line));
                    self.advance();
                }
                Some(Tok::RParen) | Some(Tok::RBracket) | Some(Tok::RBrace) => {
                    let closer = match self.peek() {
                        Some(Tok::RParen) => ')',
                        Some(Tok::RBracket) => ']',
                        _ => '}',
                    };
                    match stack.pop() {
                        Some((opener, _))
                            if matches!(
                                (opener, closer),
                                ('(', ')') | ('[', ']') | ('{', '}')
                            ) =>
                        {
                            self.advance();
                        }
                        // Enclosing block's closer ends the statement.
                        None if closer == '}' => return Ok(()),
                        _ => {
                            return Err(ParseError::UnmatchedDelimiter {
                                delimiter: closer,
                                line,
                            });
                        }
                    }
                }
                Some(_) => self.advance(),
            }
        }
    }

    fn end_statement(&mut self) -> Result<(), ParseError> {
        match self.peek() {
            None | Some(Tok::RBrace) => Ok(()),
            Some(Tok::Newline) => {
                self.advance();
                Ok(())
            }
            // Trailing tokens the grammar does not model; consume them.
            Some(_) => self.skip_statement(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call<'a>(stmt: &'a Stmt) -> (&'a str, &'a CallArgs) {
        match stmt.inner() {
            Some(Expr::MethodCall { name, args }) => (name.as_str(), args),
            other => panic!("expected method call, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_command_call_with_constant() {
        let tree = parse("implementation 'org.a:lib:1.0'\n").unwrap();
        assert_eq!(tree.statements.len(), 1);
        let (name, args) = call(&tree.statements[0]);
        assert_eq!(name, "implementation");
        assert_eq!(
            args,
            &CallArgs::List(vec![Expr::Constant("org.a:lib:1.0".into())])
        );
    }

    #[test]
    fn test_parse_named_arguments_lower_to_tuple_with_map() {
        let tree = parse("implementation group: 'org.a', name: 'lib', version: '1.0'").unwrap();
        let (_, args) = call(&tree.statements[0]);
        match args {
            CallArgs::Tuple(items) => {
                assert_eq!(items.len(), 1);
                match &items[0] {
                    Expr::MapLiteral(entries) => {
                        assert_eq!(entries.len(), 3);
                        assert_eq!(entries[0].key, Expr::Constant("group".into()));
                        assert_eq!(entries[0].value, Expr::Constant("org.a".into()));
                    }
                    other => panic!("expected map literal, got {:?}", other),
                }
            }
            other => panic!("expected tuple args, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_block_call_wraps_closure() {
        let tree = parse("dependencies {\n    implementation 'a:b:c'\n}\n").unwrap();
        let (name, args) = call(&tree.statements[0]);
        assert_eq!(name, "dependencies");
        match args {
            CallArgs::List(items) => match &items[0] {
                Expr::Closure(block) => assert_eq!(block.statements.len(), 1),
                other => panic!("expected closure, got {:?}", other),
            },
            other => panic!("expected list args, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_assignment_to_attribute_access() {
        let tree = parse("group = 'org.example'\nproject.version = '2.1'\n").unwrap();
        match tree.statements[0].inner() {
            Some(Expr::AttributeAccess { owner, name, value }) => {
                assert_eq!(owner, &None);
                assert_eq!(name, "group");
                assert_eq!(**value, Expr::Constant("org.example".into()));
            }
            other => panic!("expected attribute access, got {:?}", other),
        }
        match tree.statements[1].inner() {
            Some(Expr::AttributeAccess { owner, name, .. }) => {
                assert_eq!(owner.as_deref(), Some("project"));
                assert_eq!(name, "version");
            }
            other => panic!("expected attribute access, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_list_literal_argument() {
        let tree = parse("implementation ['a:b:1', 'c:d:2']").unwrap();
        let (_, args) = call(&tree.statements[0]);
        match args {
            CallArgs::List(items) => {
                assert_eq!(items.len(), 1);
                assert!(matches!(&items[0], Expr::ListLiteral(l) if l.len() == 2));
            }
            other => panic!("expected list args, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_return_statement() {
        let tree = parse("{ return 'a:b:c' }");
        // A bare closure statement is not ident-led; it parses as opaque.
        assert!(tree.is_ok());

        let tree = parse("dependencies {\n    return\n}").unwrap();
        let (_, args) = call(&tree.statements[0]);
        match args {
            CallArgs::List(items) => match &items[0] {
                Expr::Closure(block) => {
                    assert_eq!(block.statements[0], Stmt::Return(Expr::Opaque));
                }
                other => panic!("expected closure, got {:?}", other),
            },
            other => panic!("expected list args, got {:?}", other),
        }
    }

    #[test]
    fn test_interpolated_string_is_opaque() {
        let tree = parse(r#"implementation "org.a:lib:${libVersion}""#).unwrap();
        let (_, args) = call(&tree.statements[0]);
        assert_eq!(args, &CallArgs::List(vec![Expr::Opaque]));
    }

    #[test]
    fn test_bare_dollar_interpolation_is_opaque() {
        let tree = parse(r#"implementation "org.a:lib:$libVersion""#).unwrap();
        let (_, args) = call(&tree.statements[0]);
        assert_eq!(args, &CallArgs::List(vec![Expr::Opaque]));
    }

    #[test]
    fn test_escaped_dollar_stays_constant() {
        let tree = parse(r#"implementation "org.a:lib:\$snapshot""#).unwrap();
        let (_, args) = call(&tree.statements[0]);
        assert_eq!(
            args,
            &CallArgs::List(vec![Expr::Constant("org.a:lib:$snapshot".into())])
        );
    }

    #[test]
    fn test_assignment_with_operator_expression_is_opaque() {
        let tree = parse("version = '1.0' + suffix\n").unwrap();
        match tree.statements[0].inner() {
            Some(Expr::AttributeAccess { name, value, .. }) => {
                assert_eq!(name, "version");
                assert_eq!(**value, Expr::Opaque);
            }
            other => panic!("expected attribute access, got {:?}", other),
        }
    }

    #[test]
    fn test_comments_and_blank_lines_ignored() {
        let tree = parse("// header\n\n/* block\n comment */\nversion '1.0'\n").unwrap();
        assert_eq!(tree.statements.len(), 1);
    }

    #[test]
    fn test_blank_script_parses_empty() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("   \n\t\n").unwrap().is_empty());
        assert!(parse("// only a comment\n").unwrap().is_empty());
    }

    #[test]
    fn test_unterminated_string_fails() {
        assert!(matches!(
            parse("implementation 'org.a:lib"),
            Err(ParseError::UnterminatedString { .. })
        ));
    }

    #[test]
    fn test_unterminated_comment_fails() {
        assert!(matches!(
            parse("/* never closed"),
            Err(ParseError::UnterminatedComment { .. })
        ));
    }

    #[test]
    fn test_unbalanced_braces_fail() {
        assert!(matches!(
            parse("dependencies {\n    implementation 'a:b:c'\n"),
            Err(ParseError::UnexpectedEof { .. })
        ));
        assert!(matches!(
            parse("}\n"),
            Err(ParseError::UnmatchedDelimiter { delimiter: '}', .. })
        ));
    }

    #[test]
    fn test_unrecognized_statements_degrade_to_opaque() {
        let tree = parse("-> weird ++ tokens\nversion '1.0'\n").unwrap();
        assert_eq!(tree.statements.len(), 2);
        assert_eq!(tree.statements[0], Stmt::Opaque);
        assert!(matches!(tree.statements[1], Stmt::Expression(_)));
    }

    #[test]
    fn test_multiline_named_arguments() {
        let script = "implementation group: 'org.a',\n    name: 'lib',\n    version: '1.0'\n";
        let tree = parse(script).unwrap();
        let (_, args) = call(&tree.statements[0]);
        match args {
            CallArgs::Tuple(items) => {
                assert!(matches!(&items[0], Expr::MapLiteral(e) if e.len() == 3));
            }
            other => panic!("expected tuple args, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_call_argument_stays_structured() {
        let tree = parse("api project(':core')\n").unwrap();
        let (_, args) = call(&tree.statements[0]);
        match args {
            CallArgs::List(items) => {
                assert!(matches!(&items[0], Expr::MethodCall { name, .. } if name == "project"));
            }
            other => panic!("expected list args, got {:?}", other),
        }
    }
}
