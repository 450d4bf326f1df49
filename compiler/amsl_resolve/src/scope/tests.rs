use super::*;

#[test]
fn latest_declaration_wins_within_a_scope() {
    let mut scope = Scope::new();
    scope.declare("x");
    scope.declare("y");
    scope.declare("x");
    assert_eq!(scope.position_from_end("x"), Some(0));
    assert_eq!(scope.position_from_end("y"), Some(1));
    assert_eq!(scope.position_from_end("z"), None);
}

#[test]
fn index_counts_skipped_scopes() {
    let mut stack = ScopeStack::new();
    stack.push();
    assert!(stack.declare("a"));
    assert!(stack.declare("b"));
    stack.push();
    stack.push();
    assert!(stack.declare("c"));

    // innermost: [c], empty, outer: [a, b]
    assert_eq!(stack.lookup("c"), Some(Slot::new(0)));
    assert_eq!(stack.lookup("b"), Some(Slot::new(1)));
    assert_eq!(stack.lookup("a"), Some(Slot::new(2)));
    assert_eq!(stack.scopes.len(), 3);
}

#[test]
fn inner_scope_shadows_outer() {
    let mut stack = ScopeStack::new();
    stack.push();
    assert!(stack.declare("x"));
    stack.push();
    assert!(stack.declare("x"));
    assert_eq!(stack.lookup("x"), Some(Slot::new(0)));
    stack.pop();
    assert_eq!(stack.lookup("x"), Some(Slot::new(0)));
    assert_eq!(stack.scopes.len(), 1);
}

#[test]
fn pop_forgets_declarations() {
    let mut stack = ScopeStack::new();
    stack.push();
    stack.push();
    assert!(stack.declare("tmp"));
    stack.pop();
    assert_eq!(stack.lookup("tmp"), None);
}

#[test]
fn declare_without_scope_fails() {
    let mut stack = ScopeStack::new();
    assert!(!stack.declare("x"));
    assert_eq!(stack.lookup("x"), None);
}
