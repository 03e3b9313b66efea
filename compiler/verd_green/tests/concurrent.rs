//! Independent walks over one shared tree from many threads.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use rayon::prelude::*;
use verd_green::{DiagnosticInfo, ErrorCode, GreenNode, SyntaxKind};

fn statement(index: u32) -> Arc<GreenNode> {
    let name = GreenNode::token(SyntaxKind::Ident, "x");
    let name = if index % 7 == 0 {
        name.with_diagnostics([DiagnosticInfo::error(ErrorCode::E1004).at(index, 1)])
    } else {
        name
    };
    let semicolon = if index % 5 == 0 {
        GreenNode::missing_token(SyntaxKind::Semicolon)
            .with_diagnostics([DiagnosticInfo::warning(ErrorCode::W1001).at(index, 0)])
    } else {
        GreenNode::token(SyntaxKind::Semicolon, ";")
    };
    Arc::new(GreenNode::branch(
        SyntaxKind::ExprStmt,
        [Some(Arc::new(name)), Some(Arc::new(semicolon))],
    ))
}

#[test]
fn test_parallel_walks_agree() {
    let root = GreenNode::branch(SyntaxKind::Block, (0..2_000).map(|i| Some(statement(i))));

    let sequential: Vec<DiagnosticInfo> = root.all_diagnostics().iter().cloned().collect();
    assert!(!sequential.is_empty());

    let walks: Vec<Vec<DiagnosticInfo>> = (0..16)
        .into_par_iter()
        .map(|_| root.all_diagnostics().iter().cloned().collect())
        .collect();

    for walk in walks {
        assert_eq!(walk, sequential);
    }
}

#[test]
fn test_parallel_search() {
    let roots: Vec<GreenNode> = (0..64)
        .map(|seed| GreenNode::branch(SyntaxKind::Block, (seed..seed + 5).map(|i| Some(statement(i)))))
        .collect();

    let with_errors = roots.par_iter().filter(|root| root.has_errors()).count();
    let expected = roots
        .iter()
        .filter(|root| root.all_diagnostics().any(DiagnosticInfo::is_error))
        .count();
    assert_eq!(with_errors, expected);
}
