use super::*;

#[test]
fn display_matches_variant_name() {
    assert_eq!(ErrorCode::E2001.to_string(), "E2001");
    assert_eq!(format!("{:?}", ErrorCode::E3004), ErrorCode::E3004.as_str());
}

#[test]
fn internal_codes() {
    assert!(ErrorCode::E9001.is_internal());
    assert!(!ErrorCode::E6001.is_internal());
}

#[test]
fn decode_codes() {
    assert!(ErrorCode::E3008.is_decode_error());
    assert!(!ErrorCode::E1001.is_decode_error());
}
