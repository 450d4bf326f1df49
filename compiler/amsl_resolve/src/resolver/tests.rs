use super::*;
use amsl_ir::Span;
use pretty_assertions::assert_eq;

fn ast(source: &str) -> Expr {
    let tokens = amsl_lexer::lex(source).unwrap_or_else(|e| panic!("lex failed: {e}"));
    amsl_parse::parse(&tokens).unwrap_or_else(|e| panic!("parse failed: {e}"))
}

fn resolve_src(source: &str) -> Result<ResolvedExpr, ResolveError> {
    Resolver::new().resolve(&ast(source))
}

fn shape(source: &str) -> String {
    resolve_src(source)
        .unwrap_or_else(|e| panic!("resolve failed for {source:?}: {e}"))
        .to_string()
}

fn unresolved(source: &str) -> String {
    match resolve_src(source) {
        Err(ResolveError::Unresolved { name, .. }) => name,
        other => panic!("expected an unresolved variable in {source:?}, got {other:?}"),
    }
}

#[test]
fn later_declaration_shadows_earlier() {
    assert_eq!(
        shape("{ let x = 1; let x = 2; x }"),
        "List[VarDecl(x = Int(1)), VarDecl(x = Int(2)), Slot(0)]"
    );
}

#[test]
fn index_counts_back_from_latest() {
    assert_eq!(
        shape("{ let x = 1; let y = 2; let z = 3; x }"),
        "List[VarDecl(x = Int(1)), VarDecl(y = Int(2)), VarDecl(z = Int(3)), Slot(2)]"
    );
}

#[test]
fn inner_block_does_not_leak() {
    assert_eq!(
        shape("{ let x = 1; { let x = 99; } x }"),
        "List[VarDecl(x = Int(1)), List[VarDecl(x = Int(99))], Slot(0)]"
    );
}

#[test]
fn outer_names_are_offset_by_inner_declarations() {
    assert_eq!(
        shape("{ let a = 1; let b = 2; { let c = 3; a } }"),
        "List[VarDecl(a = Int(1)), VarDecl(b = Int(2)), List[VarDecl(c = Int(3)), Slot(2)]]"
    );
}

#[test]
fn reference_before_declaration_fails() {
    assert_eq!(unresolved("{ x; let x = 1 }"), "x");
}

#[test]
fn initializer_cannot_see_its_own_name() {
    assert_eq!(unresolved("let x = x"), "x");
    assert_eq!(unresolved("{ let x = x }"), "x");
}

#[test]
fn initializer_sees_the_previous_binding_of_the_same_name() {
    assert_eq!(
        shape("{ let x = 1; let x = x; x }"),
        "List[VarDecl(x = Int(1)), VarDecl(x = Slot(0)), Slot(0)]"
    );
}

#[test]
fn call_arguments_see_enclosing_declarations() {
    assert_eq!(
        shape("{ let a = 1; let b = 2; @add(a b) }"),
        "List[VarDecl(a = Int(1)), VarDecl(b = Int(2)), Call(add, [Slot(1), Slot(0)])]"
    );
}

#[test]
fn call_arguments_do_not_see_each_other() {
    assert_eq!(unresolved("{ @print(let t = 1 t) }"), "t");
}

#[test]
fn declarations_inside_an_argument_stay_inside() {
    assert_eq!(
        shape("{ let a = 1; @print({ let t = 2; @add(t a) }) }"),
        "List[VarDecl(a = Int(1)), Call(print, [List[VarDecl(t = Int(2)), Call(add, [Slot(0), Slot(1)])]])]"
    );
}

#[test]
fn declarations_inside_an_initializer_stay_inside() {
    assert_eq!(unresolved("{ let a = { let b = 1; b }; b }"), "b");
    assert_eq!(unresolved("{ let a = let b = 1; b }"), "b");
}

#[test]
fn assignment_operands() {
    assert_eq!(
        shape("{ let x = 1; apply x 5; x }"),
        "List[VarDecl(x = Int(1)), Assign(Slot(0), Int(5)), Slot(0)]"
    );
    assert_eq!(
        shape("{ let x = 1; let y = 2; apply x y }"),
        "List[VarDecl(x = Int(1)), VarDecl(y = Int(2)), Assign(Slot(1), Slot(0))]"
    );
}

#[test]
fn unknown_variable_is_an_error_with_span() {
    assert_eq!(
        resolve_src("{ y }"),
        Err(ResolveError::Unresolved {
            name: "y".into(),
            span: Span::new(2, 3),
        })
    );
}

#[test]
fn top_level_declaration_has_no_scope() {
    assert!(matches!(
        resolve_src("let x = 1"),
        Err(ResolveError::DeclarationOutsideBlock { .. })
    ));
}

#[test]
fn callee_names_are_not_checked() {
    assert_eq!(shape("{ @no_such_builtin() }"), "List[Call(no_such_builtin, [])]");
}

#[test]
fn type_annotations_pass_through() {
    assert_eq!(
        shape("{ let n: int; let s: str = \"a\"; n }"),
        r#"List[VarDecl(n: int), VarDecl(s: str = Str("a")), Slot(1)]"#
    );
}

#[test]
fn scope_stack_is_empty_afterwards() {
    let mut resolver = Resolver::new();
    assert!(resolver.resolve(&ast("{ let a = 1; { a } }")).is_ok());
    assert!(resolver.resolve(&ast("{ let a = 1; { b } }")).is_err());

    // A leftover scope would accept a root declaration.
    assert!(matches!(
        resolver.resolve(&ast("let a = 1")),
        Err(ResolveError::DeclarationOutsideBlock { .. })
    ));
}

#[test]
fn deeply_nested_blocks() {
    let depth = 5_000;
    let source = format!("{{ let x = 1; {}x{} }}", "{ ".repeat(depth), " }".repeat(depth));
    let resolved = resolve_src(&source).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(resolved.node_count(), depth + 4);
}
