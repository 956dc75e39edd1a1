//! Extraction core: walks one parsed build script and recovers the declared
//! dependencies and project coordinates.
//!
//! The walk is a pure recursive descent threading an accumulator value
//! through and back out; nothing is shared or mutated across files. Scope is
//! a flat notion: any `dependencies` call carrying a single closure has its
//! block statements handed to the matcher, and statements anywhere else are
//! never matched, however their enclosing closures are named.

use std::path::Path;

use crate::ast::{Block, CallArgs, Expr, MapEntry, Stmt, SyntaxTree};
use crate::models::{GradleDependency, GradleProject, ProjectId};

/// Callee name that activates the dependency scope.
const DEPENDENCIES_BLOCK: &str = "dependencies";

/// Per-file accumulator: identity fields collected from attribute accesses
/// (last write wins, document order) and matched records in encounter order.
#[derive(Debug, Default)]
struct Collected {
    group: Option<String>,
    version: Option<String>,
    dependencies: Vec<GradleDependency>,
}

/// Extract one project record from a parsed build script.
///
/// Returns `None` for a blank script (explicit absence, not an error).
/// Unrecognized shapes never fail the extraction; they simply contribute
/// nothing.
pub fn extract(tree: &SyntaxTree, source_path: &Path) -> Option<GradleProject> {
    if tree.is_empty() {
        return None;
    }

    let mut collected = Collected::default();
    for stmt in &tree.statements {
        collected = walk_stmt(stmt, collected);
    }

    Some(GradleProject {
        id: ProjectId {
            group: collected.group,
            // No rule ever populates the project name; see DESIGN.md.
            name: None,
            version: collected.version,
        },
        path: source_path.to_path_buf(),
        dependencies: collected.dependencies,
    })
}

fn walk_stmt(stmt: &Stmt, acc: Collected) -> Collected {
    match stmt.inner() {
        Some(expr) => walk_expr(expr, acc),
        None => acc,
    }
}

fn walk_expr(expr: &Expr, mut acc: Collected) -> Collected {
    match expr {
        Expr::MethodCall { name, args } => {
            if name == DEPENDENCIES_BLOCK {
                if let Some(block) = closure_body(args) {
                    for stmt in &block.statements {
                        if let Some(dep) = match_dependency(stmt) {
                            acc.dependencies.push(dep);
                        }
                    }
                }
            }
            walk_args(args, acc)
        }
        Expr::AttributeAccess { name, value, .. } => {
            if let Some(text) = value.text() {
                match name.as_str() {
                    "group" => acc.group = Some(text.to_string()),
                    "version" => acc.version = Some(text.to_string()),
                    _ => {}
                }
            }
            walk_expr(value, acc)
        }
        Expr::Closure(block) => walk_block(block, acc),
        Expr::MapLiteral(entries) => {
            for MapEntry { key, value } in entries {
                acc = walk_expr(key, acc);
                acc = walk_expr(value, acc);
            }
            acc
        }
        Expr::ListLiteral(items) => {
            for item in items {
                acc = walk_expr(item, acc);
            }
            acc
        }
        Expr::Constant(_) | Expr::Opaque => acc,
    }
}

fn walk_args(args: &CallArgs, mut acc: Collected) -> Collected {
    let (CallArgs::List(items) | CallArgs::Tuple(items)) = args;
    for item in items {
        acc = walk_expr(item, acc);
    }
    acc
}

fn walk_block(block: &Block, mut acc: Collected) -> Collected {
    for stmt in &block.statements {
        acc = walk_stmt(stmt, acc);
    }
    acc
}

/// The block to scan, if the call's arguments are a single closure.
fn closure_body(args: &CallArgs) -> Option<&Block> {
    match args {
        CallArgs::List(items) => match items.as_slice() {
            [Expr::Closure(block)] => Some(block),
            _ => None,
        },
        CallArgs::Tuple(_) => None,
    }
}

/// Try to recognize one dependency declaration in a block statement.
///
/// The inner expression must be a method call; its name is accepted
/// unconditionally and never lands in the record. Two argument shapes
/// match: a single `group:name:version` constant, and a named-argument map.
fn match_dependency(stmt: &Stmt) -> Option<GradleDependency> {
    let Some(Expr::MethodCall { args, .. }) = stmt.inner() else {
        return None;
    };

    match args {
        CallArgs::List(items) => match items.as_slice() {
            [Expr::Constant(text)] => dependency_from_constant(text),
            _ => None,
        },
        CallArgs::Tuple(items) => match items.as_slice() {
            [Expr::MapLiteral(entries)] => Some(dependency_from_map(entries)),
            _ => None,
        },
    }
}

/// `"group:name:version"` — exactly three colon-separated fields, or nothing.
fn dependency_from_constant(text: &str) -> Option<GradleDependency> {
    let pieces: Vec<&str> = text.split(':').collect();
    if pieces.len() != 3 {
        return None;
    }
    Some(GradleDependency::new(
        Some(pieces[0].to_string()),
        Some(pieces[1].to_string()),
        Some(pieces[2].to_string()),
    ))
}

/// `group:`, `name:`, `version:` entries, each optional; absent keys leave
/// their field unset.
fn dependency_from_map(entries: &[MapEntry]) -> GradleDependency {
    let mut group = None;
    let mut name = None;
    let mut version = None;

    for MapEntry { key, value } in entries {
        let (Some(key), Some(value)) = (key.text(), value.text()) else {
            continue;
        };
        match key {
            "group" => group = Some(value.to_string()),
            "name" => name = Some(value.to_string()),
            "version" => version = Some(value.to_string()),
            _ => {}
        }
    }

    GradleDependency::new(group, name, version)
}
