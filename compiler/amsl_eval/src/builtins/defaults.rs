//! The standard builtins.

use std::io::BufRead;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::{BuiltinRegistry, EvalError, SharedPrintHandler, Value};

pub(super) fn install(registry: &mut BuiltinRegistry, print: &SharedPrintHandler) {
    let out = SharedPrintHandler::clone(print);
    registry.register("print", move |args| {
        out.write(&joined(args))
            .map_err(|e| EvalError::io("print", &e))?;
        Ok(Value::Unit)
    });

    let out = SharedPrintHandler::clone(print);
    registry.register("println", move |args| {
        let mut line = joined(args);
        line.push('\n');
        out.write(&line).map_err(|e| EvalError::io("println", &e))?;
        Ok(Value::Unit)
    });

    registry.register("squared", |args| {
        arity("squared", args, 1)?;
        let n = int_arg("squared", args, 0)?;
        n.checked_mul(n)
            .map(Value::Int)
            .ok_or_else(|| overflow("squared"))
    });

    registry.register("add", arithmetic("add", i64::checked_add));
    registry.register("sub", arithmetic("sub", i64::checked_sub));
    registry.register("mul", arithmetic("mul", i64::checked_mul));
    registry.register("div", arithmetic("div", i64::checked_div));
    registry.register("rem", arithmetic("rem", i64::checked_rem));

    registry.register("concat", |args| Ok(Value::Str(joined(args))));

    registry.register("readline", |args| {
        arity("readline", args, 0)?;
        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| EvalError::io("readline", &e))?;
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Value::Str(line))
    });

    registry.register("now_ms", |args| {
        arity("now_ms", args, 0)?;
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| EvalError::Io {
                name: "now_ms".into(),
                message: e.to_string(),
            })?;
        i64::try_from(elapsed.as_millis())
            .map(Value::Int)
            .map_err(|_| overflow("now_ms"))
    });

    registry.register("sleep_ms", |args| {
        arity("sleep_ms", args, 1)?;
        let ms = int_arg("sleep_ms", args, 0)?;
        let ms = u64::try_from(ms).map_err(|_| EvalError::WrongArgType {
            name: "sleep_ms".into(),
            position: 1,
            expected: "a non-negative int",
            found: "negative int",
        })?;
        std::thread::sleep(Duration::from_millis(ms));
        Ok(Value::Unit)
    });
}

/// Display forms of `args`, with no separator.
fn joined(args: &[Value]) -> String {
    args.iter().map(ToString::to_string).collect()
}

fn arity(name: &str, args: &[Value], expected: usize) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(EvalError::arity(name, expected, args.len()))
    }
}

fn int_arg(name: &str, args: &[Value], index: usize) -> Result<i64, EvalError> {
    let value = &args[index];
    value.as_int().ok_or_else(|| EvalError::WrongArgType {
        name: name.to_owned(),
        position: index + 1,
        expected: "an int",
        found: value.type_name(),
    })
}

fn overflow(name: &str) -> EvalError {
    EvalError::IntegerOverflow {
        name: name.to_owned(),
    }
}

/// Two-int builtin over a checked operation. A zero divisor is reported
/// as such for `div` and `rem`; any other `None` is overflow.
fn arithmetic(
    name: &'static str,
    op: fn(i64, i64) -> Option<i64>,
) -> impl Fn(&[Value]) -> Result<Value, EvalError> {
    move |args: &[Value]| {
        arity(name, args, 2)?;
        let lhs = int_arg(name, args, 0)?;
        let rhs = int_arg(name, args, 1)?;
        if rhs == 0 && matches!(name, "div" | "rem") {
            return Err(EvalError::DivisionByZero {
                name: name.to_owned(),
            });
        }
        op(lhs, rhs).map(Value::Int).ok_or_else(|| overflow(name))
    }
}
