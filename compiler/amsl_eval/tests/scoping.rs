//! Source-level scoping: the resolver's slot numbering and the executor's
//! frames have to agree for these programs to produce the right values.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use amsl_eval::{BuiltinRegistry, EvalError, Executor, PrintHandler, Value};
use pretty_assertions::assert_eq;

fn run(source: &str) -> (Result<Value, EvalError>, String) {
    let tokens = amsl_lexer::lex(source).expect("lex");
    let ast = amsl_parse::parse(&tokens).expect("parse");
    let resolved = amsl_resolve::resolve(&ast).expect("resolve");

    let print = PrintHandler::buffer();
    let registry = BuiltinRegistry::with_defaults(print.clone());
    let result = Executor::new(&registry).execute(&resolved);
    (result, print.output())
}

fn value(source: &str) -> Value {
    run(source).0.expect("execute")
}

#[test]
fn shadowing() {
    assert_eq!(value("{ let x = 1; let x = 2; x }"), Value::Int(2));
}

#[test]
fn inner_block_does_not_leak() {
    assert_eq!(value("{ let x = 1; { let x = 99; } x }"), Value::Int(1));
}

#[test]
fn assignment() {
    assert_eq!(value("{ let x = 1; apply x 5; x }"), Value::Int(5));
    assert_eq!(value("{ let x = 1; apply x = 6; x }"), Value::Int(6));
    assert_eq!(value("{ let x = 1; apply x, 7; x }"), Value::Int(7));
}

#[test]
fn assignment_through_a_block() {
    assert_eq!(value("{ let x = 1; apply { x } 5; x }"), Value::Int(5));

    let (result, output) = run(r#"{ let x = 1; apply { @print("hi") x } 5; x }"#);
    assert_eq!(result, Ok(Value::Int(5)));
    assert_eq!(output, "hi");

    assert_eq!(value("{ let x = 1; apply { let y = 2; x } 3; x }"), Value::Int(3));
}

#[test]
fn chained_assignment() {
    assert_eq!(value("{ let x = 1; apply apply x 2 7 }"), Value::Int(7));
    assert_eq!(value("{ let x = 1; apply apply x 2 7; x }"), Value::Int(7));
}

#[test]
fn block_target_must_end_in_a_variable() {
    let (result, _) = run("{ let x = 1; apply { x 2 } 5 }");
    assert_eq!(
        result,
        Err(EvalError::InvalidAssignmentTarget {
            found: "integer literal"
        })
    );
}

#[test]
fn initializer_sees_the_outer_binding() {
    assert_eq!(value("{ let x = 1; let x = @add(x 1); x }"), Value::Int(2));
}

#[test]
fn arguments_see_enclosing_declarations() {
    assert_eq!(
        value("{ let a = 6; let b = 7; { let c = 1; @mul(a b) } }"),
        Value::Int(42)
    );
}

#[test]
fn blocks_inside_arguments() {
    assert_eq!(
        value("{ let a = 1; @add({ let t = 10; @add(t a) } a) }"),
        Value::Int(12)
    );
}

#[test]
fn printing() {
    let (result, output) = run(r#"{ let name = "amsl"; @println("hi " name "!") }"#);
    assert_eq!(result, Ok(Value::Unit));
    assert_eq!(output, "hi amsl!\n");
}

#[test]
fn squared_builtin() {
    assert_eq!(value("{ let n = 0x0c; @squared(n) }"), Value::Int(144));
}

#[test]
fn counter_in_nested_frames() {
    let source = "
        {
            let count: int;
            { apply count @add(count 1) }
            { let count = 100; }
            apply count @add(count 1);
            @concat(\"count=\" count)
        }
    ";
    assert_eq!(value(source), Value::from("count=2"));
}

#[test]
fn runtime_error_surfaces() {
    let (result, _) = run("{ @div(1 0) }");
    assert_eq!(result, Err(EvalError::DivisionByZero { name: "div".into() }));
}
