//! `stimpl_core` provides the evaluator for STIMPL, a tiny
//! expression-oriented imperative language with strict, monomorphic
//! dynamic type checking.
//!
//! This crate has no STIMPL parser: an AST is always supplied by the
//! caller, typically deserialized from the JSON wire format these types
//! derive support for. The main entry point is [evaluate], which maps a
//! single AST node and an [Env] to a `(value, type, environment)`
//! triple.
//!
//! # Example
//!
//! ```
//! use stimpl_core::{Env, Node, Variable, evaluate};
//!
//! let program = Node::Program {
//!     exprs: vec![
//!         Node::Assign {
//!             variable: Variable { variable_name: "x".to_string() },
//!             value: Box::new(Node::IntLiteral { literal: 42 }),
//!         },
//!         Node::Variable { variable_name: "x".to_string() },
//!     ],
//! };
//! let (value, ty, _env) = evaluate(&program, Env::empty()).unwrap();
//! ```

mod ast;
mod environment;
mod error;
mod evaluator;
mod types;

pub use ast::{Node, Variable};
pub use environment::Env;
pub use error::EvalError;
pub use evaluator::evaluate;
pub use types::{Type, Value};
