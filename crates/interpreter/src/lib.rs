//! Interpreter layer for the `stimpl` application.
//!
//! This module loads a program from the JSON wire format, deserializes
//! it into a [stimpl_core::Node], and drives the evaluator, wrapping I/O,
//! deserialization, and evaluation failures into a single
//! [InterpreterError].

use stimpl_core::{EvalError, Env, Node, Type, Value, evaluate};
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Errors that can occur while loading and running a program.
#[derive(Debug, Error)]
pub enum InterpreterError {
    /// The program file could not be read.
    #[error("Could not read program file: {0}")]
    Io(#[from] std::io::Error),

    /// The program's JSON does not decode to a valid AST node.
    #[error("Could not parse program: {0}")]
    Parse(#[from] serde_json::Error),

    /// Evaluation failed.
    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),
}

/// The result of running a complete program.
#[derive(Debug)]
pub struct RunResult {
    pub value: Value,
    pub ty: Type,
    pub env: Env,
}

/// Parses `source` as a single AST node and evaluates it against an
/// empty environment.
#[instrument(skip(source))]
pub fn run_str(source: &str) -> Result<RunResult, InterpreterError> {
    debug!("Deserializing program from {} bytes of JSON", source.len());
    let program: Node = serde_json::from_str(source)?;

    info!("Evaluating program");
    let (value, ty, env) = evaluate(&program, Env::empty())?;
    info!("Evaluation complete, result type: {}", ty);

    Ok(RunResult { value, ty, env })
}

/// Reads a program from `path` and evaluates it.
#[instrument]
pub fn run_file(path: &std::path::Path) -> Result<RunResult, InterpreterError> {
    debug!("Reading program from {:?}", path);
    let source = std::fs::read_to_string(path)?;
    run_str(&source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_a_simple_program() {
        let json = r#"{
            "kind": "Program",
            "exprs": [
                {"kind": "Assign", "variable": {"variable_name": "x"}, "value": {"kind": "IntLiteral", "literal": 3}},
                {"kind": "Variable", "variable_name": "x"}
            ]
        }"#;
        let result = run_str(json).unwrap();
        assert_eq!(result.value, Value::IntV(3));
        assert_eq!(result.ty, Type::Integer);
        assert_eq!(result.env.get("x"), Some((Value::IntV(3), Type::Integer)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = run_str("{not json").unwrap_err();
        assert!(matches!(err, InterpreterError::Parse(_)));
    }

    #[test]
    fn unknown_node_kind_is_a_parse_error() {
        let err = run_str(r#"{"kind": "Frobnicate"}"#).unwrap_err();
        assert!(matches!(err, InterpreterError::Parse(_)));
    }

    #[test]
    fn evaluation_failures_propagate() {
        let json = r#"{"kind": "Variable", "variable_name": "missing"}"#;
        let err = run_str(json).unwrap_err();
        assert!(matches!(err, InterpreterError::Eval(EvalError::UnboundVariable(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = run_file(std::path::Path::new("/nonexistent/path.json")).unwrap_err();
        assert!(matches!(err, InterpreterError::Io(_)));
    }
}
