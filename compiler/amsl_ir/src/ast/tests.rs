use super::*;
use pretty_assertions::assert_eq;

fn e(kind: ExprKind) -> Expr {
    Expr::new(kind, Span::DUMMY)
}

#[test]
fn display_nested_tree() {
    let tree = e(ExprKind::List(vec![
        e(ExprKind::VarDecl {
            name: "x".into(),
            ty: Some("int".into()),
            init: Some(Box::new(e(ExprKind::Int(1)))),
        }),
        e(ExprKind::Call {
            name: "println".into(),
            args: vec![e(ExprKind::VarRef("x".into())), e(ExprKind::Str("!".into()))],
        }),
        e(ExprKind::Assign {
            lhs: Box::new(e(ExprKind::VarRef("x".into()))),
            rhs: Box::new(e(ExprKind::Int(2))),
        }),
    ]));

    assert_eq!(
        tree.to_string(),
        r#"List[VarDecl(x: int = Int(1)), Call(println, [VarRef(x), Str("!")]), Assign(VarRef(x), Int(2))]"#
    );
}

#[test]
fn bare_declaration_display() {
    let decl = e(ExprKind::VarDecl {
        name: "y".into(),
        ty: None,
        init: None,
    });
    assert_eq!(decl.to_string(), "VarDecl(y)");
    assert_eq!(decl.kind.name(), "declaration");
}

#[test]
fn equality_includes_spans() {
    let a = Expr::new(ExprKind::Int(1), Span::new(0, 1));
    let b = Expr::new(ExprKind::Int(1), Span::new(4, 5));
    assert_ne!(a, b);
    assert_eq!(a.kind, b.kind);
}
