//! Tree-node model for parsed build scripts.
//!
//! A closed set of node kinds: everything the extractor recognizes is an
//! explicit variant, and every surface form outside that set collapses to
//! `Opaque` at parse time instead of being probed dynamically later.

/// One parsed build script. A blank or comment-only script yields an empty
/// statement list.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxTree {
    pub statements: Vec<Stmt>,
}

impl SyntaxTree {
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// Statement wrapper. Only the two shapes with an inner expression are
/// distinguished; anything else is `Opaque` and carries nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(Expr),
    Return(Expr),
    Opaque,
}

impl Stmt {
    /// The inner expression of a recognized wrapper shape.
    pub fn inner(&self) -> Option<&Expr> {
        match self {
            Stmt::Expression(e) | Stmt::Return(e) => Some(e),
            Stmt::Opaque => None,
        }
    }
}

/// Ordered statement list forming a closure body.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

/// Expression node kinds relevant to extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `name(args)`, `name args` or `name { ... }`.
    MethodCall { name: String, args: CallArgs },
    /// A string literal.
    Constant(String),
    /// `{ ... }`.
    Closure(Block),
    /// `[k: v, ...]`.
    MapLiteral(Vec<MapEntry>),
    /// `[a, b, ...]`.
    ListLiteral(Vec<Expr>),
    /// A property assignment such as `group = '...'` or
    /// `project.version = '...'`; carries the assigned value.
    AttributeAccess {
        owner: Option<String>,
        name: String,
        value: Box<Expr>,
    },
    /// Anything the grammar does not model (identifiers, arithmetic,
    /// interpolated strings, ...).
    Opaque,
}

impl Expr {
    /// Flat text of the node, where one exists. Only constants carry text;
    /// variable references and other shapes yield `None` so their fields
    /// stay unset instead of being guessed.
    pub fn text(&self) -> Option<&str> {
        match self {
            Expr::Constant(s) => Some(s),
            _ => None,
        }
    }
}

/// Call argument shapes. Named arguments arrive as a tuple holding one map
/// literal; positional arguments arrive as a plain list.
#[derive(Debug, Clone, PartialEq)]
pub enum CallArgs {
    List(Vec<Expr>),
    Tuple(Vec<Expr>),
}

/// One `key: value` pair of a map literal.
#[derive(Debug, Clone, PartialEq)]
pub struct MapEntry {
    pub key: Expr,
    pub value: Expr,
}
