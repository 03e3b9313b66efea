use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::W0001.as_str(), "W0001");
}

#[test]
fn test_phases() {
    assert!(ErrorCode::E0004.is_lexer_error());
    assert!(ErrorCode::W0001.is_lexer_error());
    assert!(!ErrorCode::E0004.is_parser_error());

    assert!(ErrorCode::E1003.is_parser_error());
    assert!(ErrorCode::W1001.is_parser_error());

    assert!(ErrorCode::E2001.is_trivia_error());
    assert!(!ErrorCode::E2001.is_lexer_error());
}

#[test]
fn test_default_severity() {
    assert_eq!(ErrorCode::E1001.default_severity(), Severity::Error);
    assert_eq!(ErrorCode::W1001.default_severity(), Severity::Warning);
    assert!(ErrorCode::W1001.is_warning());
    assert!(!ErrorCode::E2002.is_warning());
}
