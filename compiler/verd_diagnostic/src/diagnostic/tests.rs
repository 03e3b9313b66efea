use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_diagnostic_builder() {
    let diag = DiagnosticInfo::error(ErrorCode::E1001)
        .at(4, 3)
        .with_arg("`;`")
        .with_arg("`)`");

    assert_eq!(diag.code, ErrorCode::E1001);
    assert!(diag.is_error());
    assert!(!diag.is_warning());
    assert_eq!(diag.offset, 4);
    assert_eq!(diag.width, 3);
    assert_eq!(diag.end(), 7);
    assert_eq!(diag.args, vec!["`;`".to_string(), "`)`".to_string()]);
}

#[test]
fn test_new_uses_code_severity() {
    assert_eq!(DiagnosticInfo::new(ErrorCode::E0001).severity, Severity::Error);
    assert_eq!(DiagnosticInfo::new(ErrorCode::W1001).severity, Severity::Warning);
    assert!(DiagnosticInfo::warning(ErrorCode::E2002).is_warning());
}

#[test]
fn test_severity_order() {
    assert!(Severity::Error > Severity::Warning);
    assert!(Severity::Warning > Severity::Info);
    assert!(Severity::Info > Severity::Hidden);
}

#[test]
fn test_display() {
    let diag = DiagnosticInfo::error(ErrorCode::E1003).at(10, 1).with_arg("(");
    assert_eq!(diag.to_string(), "error[E1003] @10+1: (");

    let bare = DiagnosticInfo::new(ErrorCode::W0001).at(0, 2);
    assert_eq!(bare.to_string(), "warning[W0001] @0+2");
}

#[test]
fn test_end_saturates() {
    let diag = DiagnosticInfo::new(ErrorCode::E0002).at(u32::MAX - 1, 10);
    assert_eq!(diag.end(), u32::MAX);
}
