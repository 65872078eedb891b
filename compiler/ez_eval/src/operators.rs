//! Binary operators and coercions on runtime values.
//!
//! Operands arrive already widened to a common representation, so each arm
//! only handles same-typed pairs. Integer arithmetic wraps at 32 bits.

use ez_ir::{Coercion, Operator, StrHandle, StringTable};

use crate::errors::{division_by_zero, invalid_operator, type_mismatch};
use crate::format::{format_bool, format_real};
use crate::{EvalError, EvalResult, Value};

/// Apply `op` to `left` and `right`.
///
/// `line` only locates a division by zero. `Assign` is a statement and is
/// rejected here.
pub fn evaluate_binary(
    op: Operator,
    left: Value,
    right: Value,
    strings: &mut StringTable,
    line: u32,
) -> EvalResult<Value> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(op, a, b, line),
        (Value::Real(a), Value::Real(b)) => eval_real_binary(op, a, b),
        (Value::Bool(a), Value::Bool(b)) => eval_bool_binary(op, a, b),
        (Value::Str(a), Value::Str(b)) => eval_str_binary(op, a, b, strings),
        _ => Err(type_mismatch(left.ty(), right.ty())),
    }
}

fn eval_int_binary(op: Operator, a: i32, b: i32, line: u32) -> EvalResult<Value> {
    Ok(match op {
        Operator::Plus => Value::Int(a.wrapping_add(b)),
        Operator::Minus => Value::Int(a.wrapping_sub(b)),
        Operator::Times => Value::Int(a.wrapping_mul(b)),
        Operator::Divide if b == 0 => return Err(division_by_zero(line)),
        Operator::Divide => Value::Int(a.wrapping_div(b)),
        Operator::LessThan => Value::Bool(a < b),
        Operator::Equal => Value::Bool(a == b),
        Operator::Assign => return Err(invalid_operator(op, ez_ir::Type::Int)),
    })
}

#[allow(
    clippy::float_cmp,
    reason = "real equality is exact comparison of the stored values"
)]
fn eval_real_binary(op: Operator, a: f32, b: f32) -> EvalResult<Value> {
    Ok(match op {
        Operator::Plus => Value::Real(a + b),
        Operator::Minus => Value::Real(a - b),
        Operator::Times => Value::Real(a * b),
        Operator::Divide => Value::Real(a / b),
        Operator::LessThan => Value::Bool(a < b),
        Operator::Equal => Value::Bool(a == b),
        Operator::Assign => return Err(invalid_operator(op, ez_ir::Type::Real)),
    })
}

/// `+` on booleans is logical or, `<` orders false before true.
fn eval_bool_binary(op: Operator, a: bool, b: bool) -> EvalResult<Value> {
    match op {
        Operator::Plus => Ok(Value::Bool(a || b)),
        Operator::LessThan => Ok(Value::Bool(!a && b)),
        Operator::Equal => Ok(Value::Bool(a == b)),
        Operator::Minus | Operator::Times | Operator::Divide | Operator::Assign => {
            Err(invalid_operator(op, ez_ir::Type::Bool))
        }
    }
}

fn eval_str_binary(
    op: Operator,
    a: StrHandle,
    b: StrHandle,
    strings: &mut StringTable,
) -> EvalResult<Value> {
    match op {
        Operator::Plus => {
            let joined = [resolve(strings, a)?, resolve(strings, b)?].concat();
            Ok(Value::Str(strings.intern_owned(joined)))
        }
        Operator::LessThan => {
            let less = resolve(strings, a)?.as_bytes() < resolve(strings, b)?.as_bytes();
            Ok(Value::Bool(less))
        }
        Operator::Equal => Ok(Value::Bool(resolve(strings, a)? == resolve(strings, b)?)),
        Operator::Minus | Operator::Times | Operator::Divide | Operator::Assign => {
            Err(invalid_operator(op, ez_ir::Type::Str))
        }
    }
}

/// Convert `value` from the coercion's source type to its target type.
///
/// Conversions to string intern the rendered text.
pub fn coerce(coercion: Coercion, value: Value, strings: &mut StringTable) -> EvalResult<Value> {
    #[allow(
        clippy::cast_precision_loss,
        reason = "int -> real widening rounds like a C int-to-float conversion"
    )]
    let converted = match (coercion, value) {
        (Coercion::BoolToInt, Value::Bool(b)) => Value::Int(i32::from(b)),
        (Coercion::BoolToReal, Value::Bool(b)) => Value::Real(f32::from(u8::from(b))),
        (Coercion::BoolToStr, Value::Bool(b)) => Value::Str(strings.intern(format_bool(b))),
        (Coercion::IntToReal, Value::Int(i)) => Value::Real(i as f32),
        (Coercion::IntToStr, Value::Int(i)) => Value::Str(strings.intern_owned(i.to_string())),
        (Coercion::RealToStr, Value::Real(r)) => Value::Str(strings.intern_owned(format_real(r))),
        _ => return Err(type_mismatch(coercion.source(), value.ty())),
    };
    Ok(converted)
}

/// Text of a string handle.
pub fn resolve(strings: &StringTable, handle: StrHandle) -> EvalResult<&str> {
    strings.get(handle).ok_or(EvalError::UnknownString(handle))
}
