use std::fmt::Display;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Node Kinds
///
/// Every syntactic construct is a [`Node`] labelled with one of these kinds.
/// The evaluator dispatches purely on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Prog,
    Block,
    Let,
    Dim,
    If,
    ElseIf,
    Else,
    While,
    Delete,
    Expr,
    VarPath,
    Identifier,
    Number,
    StrLit,
    ObjLit,
    /// Binary operator; always exactly two children
    Operator,
}

impl NodeKind {
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::Prog => "prog",
            NodeKind::Block => "block",
            NodeKind::Let => "let",
            NodeKind::Dim => "dim",
            NodeKind::If => "if",
            NodeKind::ElseIf => "elseif",
            NodeKind::Else => "else",
            NodeKind::While => "while",
            NodeKind::Delete => "delete",
            NodeKind::Expr => "expr",
            NodeKind::VarPath => "varpath",
            NodeKind::Identifier => "identifier",
            NodeKind::Number => "number",
            NodeKind::StrLit => "strlit",
            NodeKind::ObjLit => "objlit",
            NodeKind::Operator => "operator",
        }
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Node
///
/// A labelled tree node: kind, optional literal text and ordered children.
/// A node exclusively owns its children.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub text: Option<String>,
    pub children: Vec<Node>,
    /// Source position of the first token of the construct
    pub position: Position,
}

impl Node {
    pub fn new(kind: NodeKind, position: Position) -> Self {
        Node {
            kind,
            text: None,
            children: vec![],
            position,
        }
    }

    pub fn with_text(kind: NodeKind, text: impl Into<String>, position: Position) -> Self {
        Node {
            kind,
            text: Some(text.into()),
            children: vec![],
            position,
        }
    }

    /// Builds an operator node over its two operands.
    pub fn operator(operator: impl Into<String>, left: Node, right: Node) -> Self {
        Node {
            kind: NodeKind::Operator,
            text: Some(operator.into()),
            position: left.position,
            children: vec![left, right],
        }
    }

    pub fn push(&mut self, child: Node) -> &mut Node {
        self.children.push(child);
        self
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Returns the child at `index`, or a malformed-node error naming this kind.
    pub fn child(&self, index: usize) -> Result<&Node, Error> {
        self.children.get(index).ok_or_else(|| {
            Error::new(
                ErrorImpl::MalformedNode {
                    kind: self.kind.to_string(),
                },
                self.position,
            )
        })
    }

    /// Compact single-line rendering, e.g. `(let a (- b (- c d)))`.
    pub fn to_sexpr(&self) -> String {
        match self.kind {
            NodeKind::Identifier | NodeKind::Number => self.text().to_string(),
            NodeKind::StrLit => format!("{:?}", self.text()),
            NodeKind::ObjLit => String::from("{}"),
            NodeKind::VarPath => self
                .children
                .iter()
                .map(|c| c.text())
                .collect::<Vec<_>>()
                .join("."),
            NodeKind::Expr if self.children.len() == 1 => self.children[0].to_sexpr(),
            _ => {
                let head = match self.kind {
                    NodeKind::Operator => self.text().to_string(),
                    _ => self.kind.to_string(),
                };
                let mut parts = vec![head];
                parts.extend(self.children.iter().map(|c| c.to_sexpr()));
                format!("({})", parts.join(" "))
            }
        }
    }

    fn fmt_indented(&self, f: &mut std::fmt::Formatter<'_>, indent: usize) -> std::fmt::Result {
        write!(f, "{}{}", "  ".repeat(indent), self.kind)?;
        if let Some(text) = &self.text {
            write!(f, " :: {}", text)?;
        }
        writeln!(f)?;

        for child in &self.children {
            child.fmt_indented(f, indent + 1)?;
        }

        Ok(())
    }
}

/// Multi-line tree dump, one `kind :: text` line per node.
impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_indented(f, 0)
    }
}
