//! Syntax kinds.

/// Kind of a green node, with a category range layout:
///
/// | Range   | Category   |
/// |---------|------------|
/// | 0-99    | Tokens     |
/// | 100-149 | Trivia     |
/// | 150-199 | Lists      |
/// | 200+    | Nodes      |
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u16)]
pub enum SyntaxKind {
    // === Tokens (0-99) ===
    Ident = 0,
    IntLiteral = 1,
    StringLiteral = 2,

    Plus = 10,
    Minus = 11,
    Star = 12,
    Slash = 13,
    Eq = 14,
    Semicolon = 15,
    Comma = 16,
    OpenParen = 17,
    CloseParen = 18,
    OpenBrace = 19,
    CloseBrace = 20,

    FnKw = 40,
    LetKw = 41,
    ReturnKw = 42,

    EndOfFile = 99,

    // === Trivia (100-149) ===
    Whitespace = 100,
    EndOfLine = 101,
    LineComment = 102,
    BlockComment = 103,
    DocComment = 104,
    /// Tokens the parser skipped while recovering.
    SkippedTokens = 105,

    // === Lists (150-199) ===
    List = 150,

    // === Nodes (200+) ===
    SourceFile = 200,
    FnDecl = 201,
    ParamList = 202,
    Block = 203,
    LetStmt = 204,
    ExprStmt = 205,
    ReturnStmt = 206,
    BinaryExpr = 207,
    ParenExpr = 208,
    NameExpr = 209,
    LiteralExpr = 210,
    CallExpr = 211,
    ArgList = 212,
}

impl SyntaxKind {
    #[inline]
    pub const fn is_token(self) -> bool {
        (self as u16) < 100
    }

    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self as u16, 100..=149)
    }

    #[inline]
    pub const fn is_list(self) -> bool {
        matches!(self as u16, 150..=199)
    }

    #[inline]
    pub const fn is_node(self) -> bool {
        (self as u16) >= 200
    }
}
