use crate::ast::expr::{Expr, InvocationExpr};
use crate::ast::visitor::{Accept, Visitor};
use crate::ast::{Block, Node, ParameterDecl};
use crate::lexer::SourceToken;

// 语句：出现在函数体内部
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    // 返回: return x + 1;
    Return(ReturnStmt),

    // 单分支条件: if x > 5 { ... } (Waddle 没有 else)
    If(IfStmt),

    // 赋值: x = x + 1;
    Assign(AssignStmt),

    // 打印: print("x =", x);
    Print(PrintStmt),

    // 声明并初始化: var x: int = 1;
    Decl(DeclStmt),

    // 调用语句: log(x); 结果被丢弃
    Invocation(InvocationStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub(crate) anchor: SourceToken,
    pub(crate) value: Expr,
}

impl ReturnStmt {
    pub fn new(anchor: SourceToken, value: Expr) -> Self {
        Self { anchor, value }
    }

    pub fn value(&self) -> &Expr {
        &self.value
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub(crate) anchor: SourceToken,
    pub(crate) condition: Expr,
    pub(crate) body: Block,
}

impl IfStmt {
    pub fn new(anchor: SourceToken, condition: Expr, body: Block) -> Self {
        Self {
            anchor,
            condition,
            body,
        }
    }

    pub fn condition(&self) -> &Expr {
        &self.condition
    }

    pub fn body(&self) -> &Block {
        &self.body
    }
}

/// 赋值语句
///
/// `anchor` 是目标标识符的 token，`target` 保存同一个名字，
/// 名字是否已声明由后续的名称解析负责。
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub(crate) anchor: SourceToken,
    pub(crate) target: String,
    pub(crate) equals: SourceToken,
    pub(crate) value: Expr,
}

impl AssignStmt {
    pub fn new(
        anchor: SourceToken,
        target: impl Into<String>,
        equals: SourceToken,
        value: Expr,
    ) -> Self {
        Self {
            anchor,
            target: target.into(),
            equals,
            value,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// `=` token
    pub fn equals(&self) -> &SourceToken {
        &self.equals
    }

    pub fn value(&self) -> &Expr {
        &self.value
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub(crate) anchor: SourceToken,
    pub(crate) arguments: Vec<Expr>,
}

impl PrintStmt {
    pub fn new(anchor: SourceToken, arguments: Vec<Expr>) -> Self {
        Self { anchor, arguments }
    }

    pub fn arguments(&self) -> &[Expr] {
        &self.arguments
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeclStmt {
    pub(crate) anchor: SourceToken,
    pub(crate) variable: ParameterDecl,
    pub(crate) value: Expr,
}

impl DeclStmt {
    pub fn new(anchor: SourceToken, variable: ParameterDecl, value: Expr) -> Self {
        Self {
            anchor,
            variable,
            value,
        }
    }

    pub fn variable(&self) -> &ParameterDecl {
        &self.variable
    }

    pub fn value(&self) -> &Expr {
        &self.value
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvocationStmt {
    pub(crate) anchor: SourceToken,
    pub(crate) call: InvocationExpr,
}

impl InvocationStmt {
    pub fn new(anchor: SourceToken, call: InvocationExpr) -> Self {
        Self { anchor, call }
    }

    pub fn call(&self) -> &InvocationExpr {
        &self.call
    }
}

impl Node for Stmt {
    fn anchor(&self) -> &SourceToken {
        match self {
            Stmt::Return(s) => &s.anchor,
            Stmt::If(s) => &s.anchor,
            Stmt::Assign(s) => &s.anchor,
            Stmt::Print(s) => &s.anchor,
            Stmt::Decl(s) => &s.anchor,
            Stmt::Invocation(s) => &s.anchor,
        }
    }
}

impl Accept for Stmt {
    fn accept<S, R, V>(&self, visitor: &mut V, state: &mut S) -> R
    where
        V: Visitor<S, R> + ?Sized,
    {
        match self {
            Stmt::Return(s) => visitor.visit_return(s, state),
            Stmt::If(s) => visitor.visit_if(s, state),
            Stmt::Assign(s) => visitor.visit_assign(s, state),
            Stmt::Print(s) => visitor.visit_print(s, state),
            Stmt::Decl(s) => visitor.visit_decl(s, state),
            Stmt::Invocation(s) => visitor.visit_invocation_stmt(s, state),
        }
    }
}

macro_rules! stmt_from {
    ($($node:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$node> for Stmt {
                fn from(node: $node) -> Self {
                    Stmt::$variant(node)
                }
            }
        )*
    };
}

stmt_from!(
    ReturnStmt => Return,
    IfStmt => If,
    AssignStmt => Assign,
    PrintStmt => Print,
    DeclStmt => Decl,
    InvocationStmt => Invocation,
);
