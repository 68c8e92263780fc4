pub mod expr;
pub mod stmt;
pub mod types;
pub mod visitor;

// 重新导出核心类型，方便外部直接使用 waddle_syntax::ast::Expr 等
pub use crate::lexer::{SourceToken, Span};
pub use expr::{
    Atom, BinaryExpr, BinaryOperator, BoolLiteral, Expr, Identifier, IntegerLiteral,
    InvocationExpr, LogicalOp, ProductOp, RelationalOp, StringLiteral, TermOp,
};
pub use stmt::{AssignStmt, DeclStmt, IfStmt, InvocationStmt, PrintStmt, ReturnStmt, Stmt};
pub use types::TypeSyntax;
pub use visitor::{Accept, Visitor};

/// 所有语法树节点都锚定在解析它时读到的第一个 token 上
pub trait Node {
    fn anchor(&self) -> &SourceToken;

    fn span(&self) -> Span {
        self.anchor().span.clone()
    }
}

/// 整个编译单元，空文件的锚点是 Eof token
///
/// 节点只能通过 `new` 构造，字段对外只读：
///
/// ```
/// use waddle_syntax::ast::{Node, Program, SourceToken};
/// use waddle_syntax::lexer::Token;
///
/// let program = Program::new(SourceToken::new(Token::Eof, 0..0), Vec::new());
/// assert!(program.functions().is_empty());
/// assert_eq!(program.span(), 0..0);
/// ```
///
/// ```compile_fail
/// use waddle_syntax::ast::{Program, SourceToken};
/// use waddle_syntax::lexer::Token;
///
/// let program = Program {
///     anchor: SourceToken::new(Token::Eof, 0..0),
///     functions: Vec::new(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub(crate) anchor: SourceToken,
    pub(crate) functions: Vec<FunctionDecl>,
}

impl Program {
    pub fn new(anchor: SourceToken, functions: Vec<FunctionDecl>) -> Self {
        Self { anchor, functions }
    }

    pub fn functions(&self) -> &[FunctionDecl] {
        &self.functions
    }
}

// 函数定义: fn add(a: int, b: int) -> int { ... }
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub(crate) anchor: SourceToken,
    pub(crate) name: String,
    pub(crate) parameters: Vec<ParameterDecl>,
    pub(crate) return_type: Option<TypeSyntax>, // None 表示没有返回值
    pub(crate) body: Block,
}

impl FunctionDecl {
    pub fn new(
        anchor: SourceToken,
        name: impl Into<String>,
        parameters: Vec<ParameterDecl>,
        return_type: Option<TypeSyntax>,
        body: Block,
    ) -> Self {
        Self {
            anchor,
            name: name.into(),
            parameters,
            return_type,
            body,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[ParameterDecl] {
        &self.parameters
    }

    pub fn return_type(&self) -> Option<&TypeSyntax> {
        self.return_type.as_ref()
    }

    pub fn body(&self) -> &Block {
        &self.body
    }
}

// 形参: a: int
// 也用在 var 声明里
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDecl {
    pub(crate) anchor: SourceToken,
    pub(crate) name: String,
    pub(crate) ty: TypeSyntax,
}

impl ParameterDecl {
    pub fn new(anchor: SourceToken, name: impl Into<String>, ty: TypeSyntax) -> Self {
        Self {
            anchor,
            name: name.into(),
            ty,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &TypeSyntax {
        &self.ty
    }
}

// 块: { ... }，可以为空
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub(crate) anchor: SourceToken,
    pub(crate) statements: Vec<Stmt>,
}

impl Block {
    pub fn new(anchor: SourceToken, statements: Vec<Stmt>) -> Self {
        Self { anchor, statements }
    }

    pub fn statements(&self) -> &[Stmt] {
        &self.statements
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

macro_rules! anchored {
    ($($node:ty),* $(,)?) => {
        $(
            impl Node for $node {
                fn anchor(&self) -> &SourceToken {
                    &self.anchor
                }
            }
        )*
    };
}

anchored!(
    Program,
    FunctionDecl,
    ParameterDecl,
    Block,
    TypeSyntax,
    ReturnStmt,
    IfStmt,
    AssignStmt,
    PrintStmt,
    DeclStmt,
    InvocationStmt,
    InvocationExpr,
    IntegerLiteral,
    BoolLiteral,
    StringLiteral,
    Identifier,
);
