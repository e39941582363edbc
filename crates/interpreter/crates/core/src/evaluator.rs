//! Tree-walking evaluator.
//!
//! [evaluate] maps a single AST node and an environment to a
//! `(value, type, environment)` triple. Every sub-evaluation threads the
//! environment it returns into the next sub-evaluation; nothing is
//! shared through interior mutability.

use crate::ast::Node;
use crate::environment::Env;
use crate::error::EvalError;
use crate::types::{Type, Value};
use std::cmp::Ordering;

/// Evaluates a single AST node against `env`.
pub fn evaluate(node: &Node, env: Env) -> Result<(Value, Type, Env), EvalError> {
    match node {
        Node::Ren => Ok((Value::UnitV, Type::Unit, env)),
        Node::IntLiteral { literal } => Ok((Value::IntV(*literal), Type::Integer, env)),
        Node::FloatingPointLiteral { literal } => {
            Ok((Value::FloatV(*literal), Type::FloatingPoint, env))
        }
        Node::StringLiteral { literal } => {
            Ok((Value::StringV(literal.clone()), Type::String, env))
        }
        Node::BooleanLiteral { literal } => Ok((Value::BoolV(*literal), Type::Boolean, env)),

        Node::Print { to_print } => eval_print(to_print, env),

        Node::Sequence { exprs } | Node::Program { exprs } => eval_sequence(exprs, env),

        Node::Variable { variable_name } => env
            .get(variable_name)
            .map(|(v, t)| (v, t, env.clone()))
            .ok_or_else(|| EvalError::UnboundVariable(variable_name.clone())),

        Node::Assign { variable, value } => eval_assign(&variable.variable_name, value, env),

        Node::Add { left, right } => eval_arith(ArithOp::Add, left, right, env),
        Node::Subtract { left, right } => eval_arith(ArithOp::Subtract, left, right, env),
        Node::Multiply { left, right } => eval_arith(ArithOp::Multiply, left, right, env),
        Node::Divide { left, right } => eval_arith(ArithOp::Divide, left, right, env),

        Node::And { left, right } => eval_logical(LogicalOp::And, left, right, env),
        Node::Or { left, right } => eval_logical(LogicalOp::Or, left, right, env),

        Node::Not { expr } => eval_not(expr, env),

        Node::If {
            condition,
            true_branch,
            false_branch,
        } => eval_if(condition, true_branch, false_branch, env),

        Node::Lt { left, right } => eval_cmp(CmpOp::Lt, left, right, env),
        Node::Lte { left, right } => eval_cmp(CmpOp::Lte, left, right, env),
        Node::Gt { left, right } => eval_cmp(CmpOp::Gt, left, right, env),
        Node::Gte { left, right } => eval_cmp(CmpOp::Gte, left, right, env),
        Node::Eq { left, right } => eval_cmp(CmpOp::Eq, left, right, env),
        Node::Ne { left, right } => eval_cmp(CmpOp::Ne, left, right, env),

        Node::While { condition, body } => eval_while(condition, body, env),
    }
}

fn eval_print(to_print: &Node, env: Env) -> Result<(Value, Type, Env), EvalError> {
    let (v, t, env) = evaluate(to_print, env)?;
    if t == Type::Unit {
        println!("Unit");
    } else {
        println!("{}", v);
    }
    Ok((v, t, env))
}

fn eval_sequence(exprs: &[Node], env: Env) -> Result<(Value, Type, Env), EvalError> {
    let mut value = Value::UnitV;
    let mut ty = Type::Unit;
    let mut env = env;
    for expr in exprs {
        let (v, t, e) = evaluate(expr, env)?;
        value = v;
        ty = t;
        env = e;
    }
    Ok((value, ty, env))
}

fn eval_assign(name: &str, value: &Node, env: Env) -> Result<(Value, Type, Env), EvalError> {
    let (v, t, env) = evaluate(value, env)?;
    if let Some((_, existing_type)) = env.get(name)
        && existing_type != t
    {
        return Err(EvalError::AssignmentTypeMismatch {
            existing_type,
            new_type: t,
        });
    }
    let env = env.set(name, v.clone(), t);
    Ok((v, t, env))
}

#[derive(Clone, Copy)]
enum ArithOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ArithOp {
    fn name(self) -> &'static str {
        match self {
            ArithOp::Add => "Add",
            ArithOp::Subtract => "Subtract",
            ArithOp::Multiply => "Multiply",
            ArithOp::Divide => "Divide",
        }
    }
}

fn eval_arith(
    op: ArithOp,
    left: &Node,
    right: &Node,
    env: Env,
) -> Result<(Value, Type, Env), EvalError> {
    let (lv, lt, env) = evaluate(left, env)?;
    let (rv, rt, env) = evaluate(right, env)?;
    if lt != rt {
        return Err(EvalError::OperandTypeMismatch {
            op: op.name(),
            left_type: lt,
            right_type: rt,
        });
    }

    let result = match (op, lv, rv) {
        (ArithOp::Add, Value::IntV(a), Value::IntV(b)) => Value::IntV(a + b),
        (ArithOp::Add, Value::FloatV(a), Value::FloatV(b)) => Value::FloatV(a + b),
        (ArithOp::Add, Value::StringV(a), Value::StringV(b)) => Value::StringV(a + &b),

        (ArithOp::Subtract, Value::IntV(a), Value::IntV(b)) => Value::IntV(a - b),
        (ArithOp::Subtract, Value::FloatV(a), Value::FloatV(b)) => Value::FloatV(a - b),

        (ArithOp::Multiply, Value::IntV(a), Value::IntV(b)) => Value::IntV(a * b),
        (ArithOp::Multiply, Value::FloatV(a), Value::FloatV(b)) => Value::FloatV(a * b),

        (ArithOp::Divide, Value::IntV(a), Value::IntV(b)) => {
            if b == 0 {
                return Err(EvalError::DivisionByZero);
            }
            Value::IntV(floor_div(a, b))
        }
        (ArithOp::Divide, Value::FloatV(a), Value::FloatV(b)) => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Value::FloatV(a / b)
        }

        (_, lv, _) => {
            return Err(EvalError::UnsupportedOperandType {
                op: op.name(),
                ty: lv.type_of(),
            });
        }
    };

    let ty = result.type_of();
    Ok((result, ty, env))
}

/// Floor division: rounds the quotient toward negative infinity, unlike
/// Rust's default truncation toward zero.
fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    let r = a % b;
    if r != 0 && (r < 0) != (b < 0) {
        q - 1
    } else {
        q
    }
}

#[derive(Clone, Copy)]
enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    fn name(self) -> &'static str {
        match self {
            LogicalOp::And => "And",
            LogicalOp::Or => "Or",
        }
    }
}

fn eval_logical(
    op: LogicalOp,
    left: &Node,
    right: &Node,
    env: Env,
) -> Result<(Value, Type, Env), EvalError> {
    // Both sides are evaluated unconditionally: STIMPL's And/Or are not
    // short-circuiting, so side effects on the right always occur.
    let (lv, lt, env) = evaluate(left, env)?;
    let (rv, rt, env) = evaluate(right, env)?;

    if lt != Type::Boolean || rt != Type::Boolean {
        return Err(EvalError::OperandTypeMismatch {
            op: op.name(),
            left_type: lt,
            right_type: rt,
        });
    }
    let (Value::BoolV(l), Value::BoolV(r)) = (lv, rv) else {
        unreachable!("type check above guarantees both operands are boolean");
    };

    let result = match op {
        LogicalOp::And => l && r,
        LogicalOp::Or => l || r,
    };
    Ok((Value::BoolV(result), Type::Boolean, env))
}

fn eval_not(expr: &Node, env: Env) -> Result<(Value, Type, Env), EvalError> {
    let (v, t, env) = evaluate(expr, env)?;
    match v {
        Value::BoolV(b) => Ok((Value::BoolV(!b), Type::Boolean, env)),
        _ => Err(EvalError::UnsupportedOperandType { op: "Not", ty: t }),
    }
}

fn eval_if(
    condition: &Node,
    true_branch: &Node,
    false_branch: &Node,
    env: Env,
) -> Result<(Value, Type, Env), EvalError> {
    let (cv, ct, env) = evaluate(condition, env)?;
    if ct != Type::Boolean {
        return Err(EvalError::NonBooleanCondition {
            context: "If",
            ty: ct,
        });
    }
    if matches!(cv, Value::BoolV(true)) {
        evaluate(true_branch, env)
    } else {
        evaluate(false_branch, env)
    }
}

#[derive(Clone, Copy)]
enum CmpOp {
    Lt,
    Lte,
    Gt,
    Gte,
    Eq,
    Ne,
}

impl CmpOp {
    fn name(self) -> &'static str {
        match self {
            CmpOp::Lt => "Lt",
            CmpOp::Lte => "Lte",
            CmpOp::Gt => "Gt",
            CmpOp::Gte => "Gte",
            CmpOp::Eq => "Eq",
            CmpOp::Ne => "Ne",
        }
    }

    fn apply(self, ordering: Ordering) -> bool {
        match self {
            CmpOp::Lt => ordering == Ordering::Less,
            CmpOp::Lte => ordering != Ordering::Greater,
            CmpOp::Gt => ordering == Ordering::Greater,
            CmpOp::Gte => ordering != Ordering::Less,
            CmpOp::Eq => ordering == Ordering::Equal,
            CmpOp::Ne => ordering != Ordering::Equal,
        }
    }

    /// Unit has no natural order; every comparison against Unit is
    /// decided by this fixed table instead.
    fn unit_result(self) -> bool {
        matches!(self, CmpOp::Lte | CmpOp::Gte | CmpOp::Eq)
    }
}

fn eval_cmp(
    op: CmpOp,
    left: &Node,
    right: &Node,
    env: Env,
) -> Result<(Value, Type, Env), EvalError> {
    let (lv, lt, env) = evaluate(left, env)?;
    let (rv, rt, env) = evaluate(right, env)?;
    if lt != rt {
        return Err(EvalError::OperandTypeMismatch {
            op: op.name(),
            left_type: lt,
            right_type: rt,
        });
    }

    let result = match (lv, rv) {
        (Value::UnitV, Value::UnitV) => op.unit_result(),
        (Value::IntV(a), Value::IntV(b)) => op.apply(a.cmp(&b)),
        (Value::FloatV(a), Value::FloatV(b)) => op.apply(a.total_cmp(&b)),
        (Value::BoolV(a), Value::BoolV(b)) => op.apply(a.cmp(&b)),
        (Value::StringV(a), Value::StringV(b)) => op.apply(a.cmp(&b)),
        (lv, _) => {
            return Err(EvalError::UnsupportedOperandType {
                op: op.name(),
                ty: lv.type_of(),
            });
        }
    };
    Ok((Value::BoolV(result), Type::Boolean, env))
}

fn eval_while(condition: &Node, body: &Node, env: Env) -> Result<(Value, Type, Env), EvalError> {
    let mut env = env;
    loop {
        let (cv, ct, next_env) = evaluate(condition, env)?;
        env = next_env;
        if ct != Type::Boolean {
            return Err(EvalError::NonBooleanCondition {
                context: "While",
                ty: ct,
            });
        }
        if !matches!(cv, Value::BoolV(true)) {
            break;
        }
        let (_, _, next_env) = evaluate(body, env)?;
        env = next_env;
    }
    Ok((Value::BoolV(false), Type::Boolean, env))
}
