//! Visitor - 语法树遍历协议
//!
//! 双重分派：节点通过 [`Accept::accept`] 选中自己那一类的 `visit_*` 方法，
//! pass 在方法里决定是否、以何种顺序继续访问子节点。协议本身不做任何隐式递归。
//!
//! 泛型 S: 遍历时传递的状态 (符号表、输出缓冲区……)
//! 泛型 R: 每个节点的返回值 (Result)
//!
//! 所有方法都没有默认实现，漏写任何一个都会编译失败：
//!
//! ```compile_fail
//! use waddle_syntax::ast::*;
//!
//! struct Incomplete;
//!
//! // 缺少 visit_identifier
//! impl Visitor<(), ()> for Incomplete {
//!     fn visit_program(&mut self, _: &Program, _: &mut ()) {}
//!     fn visit_function(&mut self, _: &FunctionDecl, _: &mut ()) {}
//!     fn visit_type(&mut self, _: &TypeSyntax, _: &mut ()) {}
//!     fn visit_parameter(&mut self, _: &ParameterDecl, _: &mut ()) {}
//!     fn visit_block(&mut self, _: &Block, _: &mut ()) {}
//!     fn visit_return(&mut self, _: &ReturnStmt, _: &mut ()) {}
//!     fn visit_if(&mut self, _: &IfStmt, _: &mut ()) {}
//!     fn visit_assign(&mut self, _: &AssignStmt, _: &mut ()) {}
//!     fn visit_print(&mut self, _: &PrintStmt, _: &mut ()) {}
//!     fn visit_decl(&mut self, _: &DeclStmt, _: &mut ()) {}
//!     fn visit_invocation_stmt(&mut self, _: &InvocationStmt, _: &mut ()) {}
//!     fn visit_term(&mut self, _: &BinaryExpr<TermOp>, _: &mut ()) {}
//!     fn visit_product(&mut self, _: &BinaryExpr<ProductOp>, _: &mut ()) {}
//!     fn visit_relational(&mut self, _: &BinaryExpr<RelationalOp>, _: &mut ()) {}
//!     fn visit_logical(&mut self, _: &BinaryExpr<LogicalOp>, _: &mut ()) {}
//!     fn visit_invocation(&mut self, _: &InvocationExpr, _: &mut ()) {}
//!     fn visit_integer(&mut self, _: &IntegerLiteral, _: &mut ()) {}
//!     fn visit_bool(&mut self, _: &BoolLiteral, _: &mut ()) {}
//!     fn visit_string(&mut self, _: &StringLiteral, _: &mut ()) {}
//! }
//! ```

use super::*;

pub trait Visitor<S, R> {
    // 访问程序
    fn visit_program(&mut self, program: &Program, state: &mut S) -> R;

    // 访问声明
    fn visit_function(&mut self, function: &FunctionDecl, state: &mut S) -> R;
    fn visit_type(&mut self, ty: &TypeSyntax, state: &mut S) -> R;
    fn visit_parameter(&mut self, parameter: &ParameterDecl, state: &mut S) -> R;
    fn visit_block(&mut self, block: &Block, state: &mut S) -> R;

    // 访问语句
    fn visit_return(&mut self, stmt: &ReturnStmt, state: &mut S) -> R;
    fn visit_if(&mut self, stmt: &IfStmt, state: &mut S) -> R;
    fn visit_assign(&mut self, stmt: &AssignStmt, state: &mut S) -> R;
    fn visit_print(&mut self, stmt: &PrintStmt, state: &mut S) -> R;
    fn visit_decl(&mut self, stmt: &DeclStmt, state: &mut S) -> R;
    fn visit_invocation_stmt(&mut self, stmt: &InvocationStmt, state: &mut S) -> R;

    // 访问二元表达式
    fn visit_term(&mut self, expr: &BinaryExpr<TermOp>, state: &mut S) -> R;
    fn visit_product(&mut self, expr: &BinaryExpr<ProductOp>, state: &mut S) -> R;
    fn visit_relational(&mut self, expr: &BinaryExpr<RelationalOp>, state: &mut S) -> R;
    fn visit_logical(&mut self, expr: &BinaryExpr<LogicalOp>, state: &mut S) -> R;

    // 访问原子表达式
    fn visit_invocation(&mut self, expr: &InvocationExpr, state: &mut S) -> R;
    fn visit_integer(&mut self, lit: &IntegerLiteral, state: &mut S) -> R;
    fn visit_bool(&mut self, lit: &BoolLiteral, state: &mut S) -> R;
    fn visit_string(&mut self, lit: &StringLiteral, state: &mut S) -> R;
    fn visit_identifier(&mut self, ident: &Identifier, state: &mut S) -> R;

    /// `node.accept(self, state)` 的简写，方便在 handler 里访问子节点
    fn visit<N>(&mut self, node: &N, state: &mut S) -> R
    where
        N: Accept + ?Sized,
        Self: Sized,
    {
        node.accept(self, state)
    }
}

/// 分派入口：把节点交给 visitor 中与其具体类型对应的方法
pub trait Accept {
    fn accept<S, R, V>(&self, visitor: &mut V, state: &mut S) -> R
    where
        V: Visitor<S, R> + ?Sized;
}

macro_rules! accept {
    ($($node:ty => $method:ident),* $(,)?) => {
        $(
            impl Accept for $node {
                fn accept<S, R, V>(&self, visitor: &mut V, state: &mut S) -> R
                where
                    V: Visitor<S, R> + ?Sized,
                {
                    visitor.$method(self, state)
                }
            }
        )*
    };
}

accept!(
    Program => visit_program,
    FunctionDecl => visit_function,
    TypeSyntax => visit_type,
    ParameterDecl => visit_parameter,
    Block => visit_block,
    ReturnStmt => visit_return,
    IfStmt => visit_if,
    AssignStmt => visit_assign,
    PrintStmt => visit_print,
    DeclStmt => visit_decl,
    InvocationStmt => visit_invocation_stmt,
    InvocationExpr => visit_invocation,
    IntegerLiteral => visit_integer,
    BoolLiteral => visit_bool,
    StringLiteral => visit_string,
    Identifier => visit_identifier,
);

// Box<Expr> 直接转发，handler 里可以写 expr.left.accept(..)
impl<T: Accept + ?Sized> Accept for Box<T> {
    fn accept<S, R, V>(&self, visitor: &mut V, state: &mut S) -> R
    where
        V: Visitor<S, R> + ?Sized,
    {
        (**self).accept(visitor, state)
    }
}
