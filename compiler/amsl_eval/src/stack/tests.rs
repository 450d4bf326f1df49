use super::*;
use pretty_assertions::assert_eq;

fn stack_of(values: &[i64]) -> SlotStack {
    let mut stack = SlotStack::new();
    for &v in values {
        stack.push(Value::Int(v));
    }
    stack
}

#[test]
fn slots_count_from_the_top() {
    let stack = stack_of(&[10, 20, 30]);
    assert_eq!(stack.get(Slot::new(0)), Ok(&Value::Int(30)));
    assert_eq!(stack.get(Slot::new(2)), Ok(&Value::Int(10)));
}

#[test]
fn out_of_range() {
    let stack = stack_of(&[10]);
    assert_eq!(
        stack.get(Slot::new(1)),
        Err(EvalError::SlotOutOfRange { slot: 1, depth: 1 })
    );
    assert_eq!(
        SlotStack::new().get(Slot::new(usize::MAX)),
        Err(EvalError::SlotOutOfRange {
            slot: usize::MAX,
            depth: 0
        })
    );
}

#[test]
fn truncate_to_mark_drops_the_frame() {
    let mut stack = stack_of(&[1]);
    let mark = stack.mark();
    stack.push(Value::Int(2));
    stack.push(Value::Int(3));
    assert_eq!(stack.depth(), 3);
    stack.truncate(mark);
    assert_eq!(stack.depth(), 1);
    assert_eq!(stack.get(Slot::new(0)), Ok(&Value::Int(1)));
}

#[test]
fn write_through_position() {
    let mut stack = stack_of(&[1, 2]);
    let position = stack.position(Slot::new(1));
    assert_eq!(position, Ok(0));
    assert_eq!(stack.set(0, Value::from("one")), Ok(()));
    assert_eq!(stack.get(Slot::new(1)), Ok(&Value::from("one")));
    assert_eq!(stack.get(Slot::new(0)), Ok(&Value::Int(2)));
}

#[test]
fn positions_survive_later_pushes() {
    let mut stack = stack_of(&[1]);
    let position = stack.position(Slot::new(0));
    stack.push(Value::Int(2));
    assert_eq!(position, Ok(0));
    assert_eq!(stack.get(Slot::new(1)), Ok(&Value::Int(1)));
}

#[test]
fn set_out_of_range() {
    let mut stack = stack_of(&[1]);
    assert_eq!(
        stack.set(1, Value::Unit),
        Err(EvalError::SlotOutOfRange { slot: 1, depth: 1 })
    );
}
