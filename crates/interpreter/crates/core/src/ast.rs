//! AST node types consumed by the evaluator.
//!
//! Nodes are supplied externally; this crate has no STIMPL parser. The
//! `serde` derives give a JSON wire format so a producer can hand a
//! program to the evaluator as a file rather than build a [Node] tree
//! in-process.

use serde::{Deserialize, Serialize};

/// A variable reference, as it appears on the left-hand side of an
/// [Node::Assign].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub variable_name: String,
}

/// A STIMPL AST node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Node {
    /// The Unit literal.
    Ren,
    IntLiteral {
        literal: i64,
    },
    FloatingPointLiteral {
        literal: f64,
    },
    StringLiteral {
        literal: String,
    },
    BooleanLiteral {
        literal: bool,
    },
    Print {
        to_print: Box<Node>,
    },
    Sequence {
        exprs: Vec<Node>,
    },
    Program {
        exprs: Vec<Node>,
    },
    Variable {
        variable_name: String,
    },
    Assign {
        variable: Variable,
        value: Box<Node>,
    },
    Add {
        left: Box<Node>,
        right: Box<Node>,
    },
    Subtract {
        left: Box<Node>,
        right: Box<Node>,
    },
    Multiply {
        left: Box<Node>,
        right: Box<Node>,
    },
    Divide {
        left: Box<Node>,
        right: Box<Node>,
    },
    And {
        left: Box<Node>,
        right: Box<Node>,
    },
    Or {
        left: Box<Node>,
        right: Box<Node>,
    },
    Not {
        expr: Box<Node>,
    },
    If {
        condition: Box<Node>,
        true_branch: Box<Node>,
        false_branch: Box<Node>,
    },
    Lt {
        left: Box<Node>,
        right: Box<Node>,
    },
    Lte {
        left: Box<Node>,
        right: Box<Node>,
    },
    Gt {
        left: Box<Node>,
        right: Box<Node>,
    },
    Gte {
        left: Box<Node>,
        right: Box<Node>,
    },
    Eq {
        left: Box<Node>,
        right: Box<Node>,
    },
    Ne {
        left: Box<Node>,
        right: Box<Node>,
    },
    While {
        condition: Box<Node>,
        body: Box<Node>,
    },
}
