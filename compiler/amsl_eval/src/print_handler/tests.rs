use super::*;
use pretty_assertions::assert_eq;

#[test]
fn buffer_captures_writes_in_order() {
    let handler = PrintHandler::buffer();
    assert!(handler.write("hello").is_ok());
    assert!(handler.write(" world\n").is_ok());
    assert_eq!(handler.output(), "hello world\n");
}

#[test]
fn clones_share_one_buffer() {
    let handler = PrintHandler::buffer();
    let writer = Arc::clone(&handler);
    assert!(writer.write("shared").is_ok());
    assert_eq!(handler.output(), "shared");
}
