use crate::ast::visitor::{Accept, Visitor};
use crate::ast::Node;
use crate::lexer::SourceToken;
use std::fmt::{self, Debug, Display};

// 表达式：四种二元表达式 + 原子
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    // 加减: a + b, a - b
    Term(BinaryExpr<TermOp>),

    // 乘除: a * b, a / b
    Product(BinaryExpr<ProductOp>),

    // 比较: a == b, a < b
    Relational(BinaryExpr<RelationalOp>),

    // 逻辑: a && b, a || b
    Logical(BinaryExpr<LogicalOp>),

    // 字面量、变量、函数调用
    Atom(Atom),
}

// 原子表达式：叶子节点或调用节点
#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    // 函数调用: add(1, 2)
    Invocation(InvocationExpr),
    Integer(IntegerLiteral),
    Bool(BoolLiteral),
    String(StringLiteral),
    // 变量使用: x, count
    Identifier(Identifier),
}

/// 二元表达式，运算符的取值范围由 `Op` 决定
///
/// 四种二元表达式共用这一个结构，`BinaryExpr<TermOp>` 里永远不会出现 `Times`。
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr<Op> {
    pub(crate) anchor: SourceToken,
    pub(crate) left: Box<Expr>,
    pub(crate) right: Box<Expr>,
    pub(crate) op: Op,
}

impl<Op: BinaryOperator> BinaryExpr<Op> {
    pub fn new(anchor: SourceToken, left: Expr, right: Expr, op: Op) -> Self {
        Self {
            anchor,
            left: Box::new(left),
            right: Box::new(right),
            op,
        }
    }

    pub fn left(&self) -> &Expr {
        &self.left
    }

    pub fn right(&self) -> &Expr {
        &self.right
    }

    pub fn op(&self) -> Op {
        self.op
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvocationExpr {
    pub(crate) anchor: SourceToken,
    pub(crate) callee: String,
    pub(crate) arguments: Vec<Expr>,
}

impl InvocationExpr {
    pub fn new(anchor: SourceToken, callee: impl Into<String>, arguments: Vec<Expr>) -> Self {
        Self {
            anchor,
            callee: callee.into(),
            arguments,
        }
    }

    pub fn callee(&self) -> &str {
        &self.callee
    }

    pub fn arguments(&self) -> &[Expr] {
        &self.arguments
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub(crate) anchor: SourceToken,
    pub(crate) value: i64,
}

impl IntegerLiteral {
    pub fn new(anchor: SourceToken, value: i64) -> Self {
        Self { anchor, value }
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoolLiteral {
    pub(crate) anchor: SourceToken,
    pub(crate) value: bool,
}

impl BoolLiteral {
    pub fn new(anchor: SourceToken, value: bool) -> Self {
        Self { anchor, value }
    }

    pub fn value(&self) -> bool {
        self.value
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub(crate) anchor: SourceToken,
    pub(crate) value: String,
}

impl StringLiteral {
    pub fn new(anchor: SourceToken, value: impl Into<String>) -> Self {
        Self {
            anchor,
            value: value.into(),
        }
    }

    /// 转义已还原的字符串内容
    pub fn value(&self) -> &str {
        &self.value
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub(crate) anchor: SourceToken,
    pub(crate) name: String,
}

impl Identifier {
    pub fn new(anchor: SourceToken, name: impl Into<String>) -> Self {
        Self {
            anchor,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

// ============ 运算符 ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermOp {
    Plus,
    Minus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductOp {
    Times,
    Divide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationalOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    And,
    Or,
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::TermOp {}
    impl Sealed for super::ProductOp {}
    impl Sealed for super::RelationalOp {}
    impl Sealed for super::LogicalOp {}
}

/// 二元运算符的取值域
///
/// 只有本模块中的四个枚举实现了它，外部无法新增运算符域。
pub trait BinaryOperator: sealed::Sealed + Copy + Eq + Debug + Display + Sized {
    /// 源码中的写法
    fn symbol(self) -> &'static str;

    /// 把二元节点包装成对应的 `Expr` 变体
    fn into_expr(expr: BinaryExpr<Self>) -> Expr;

    /// 分派到该运算符域对应的 visitor 方法
    fn dispatch<S, R, V>(expr: &BinaryExpr<Self>, visitor: &mut V, state: &mut S) -> R
    where
        V: Visitor<S, R> + ?Sized;
}

impl BinaryOperator for TermOp {
    fn symbol(self) -> &'static str {
        match self {
            TermOp::Plus => "+",
            TermOp::Minus => "-",
        }
    }

    fn into_expr(expr: BinaryExpr<Self>) -> Expr {
        Expr::Term(expr)
    }

    fn dispatch<S, R, V>(expr: &BinaryExpr<Self>, visitor: &mut V, state: &mut S) -> R
    where
        V: Visitor<S, R> + ?Sized,
    {
        visitor.visit_term(expr, state)
    }
}

impl BinaryOperator for ProductOp {
    fn symbol(self) -> &'static str {
        match self {
            ProductOp::Times => "*",
            ProductOp::Divide => "/",
        }
    }

    fn into_expr(expr: BinaryExpr<Self>) -> Expr {
        Expr::Product(expr)
    }

    fn dispatch<S, R, V>(expr: &BinaryExpr<Self>, visitor: &mut V, state: &mut S) -> R
    where
        V: Visitor<S, R> + ?Sized,
    {
        visitor.visit_product(expr, state)
    }
}

impl BinaryOperator for RelationalOp {
    fn symbol(self) -> &'static str {
        match self {
            RelationalOp::Eq => "==",
            RelationalOp::Ne => "!=",
            RelationalOp::Gt => ">",
            RelationalOp::Ge => ">=",
            RelationalOp::Lt => "<",
            RelationalOp::Le => "<=",
        }
    }

    fn into_expr(expr: BinaryExpr<Self>) -> Expr {
        Expr::Relational(expr)
    }

    fn dispatch<S, R, V>(expr: &BinaryExpr<Self>, visitor: &mut V, state: &mut S) -> R
    where
        V: Visitor<S, R> + ?Sized,
    {
        visitor.visit_relational(expr, state)
    }
}

impl BinaryOperator for LogicalOp {
    fn symbol(self) -> &'static str {
        match self {
            LogicalOp::And => "&&",
            LogicalOp::Or => "||",
        }
    }

    fn into_expr(expr: BinaryExpr<Self>) -> Expr {
        Expr::Logical(expr)
    }

    fn dispatch<S, R, V>(expr: &BinaryExpr<Self>, visitor: &mut V, state: &mut S) -> R
    where
        V: Visitor<S, R> + ?Sized,
    {
        visitor.visit_logical(expr, state)
    }
}

macro_rules! display_by_symbol {
    ($($op:ty),*) => {
        $(
            impl Display for $op {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.symbol())
                }
            }
        )*
    };
}

display_by_symbol!(TermOp, ProductOp, RelationalOp, LogicalOp);

// ============ Node / Accept ============

impl Node for Expr {
    fn anchor(&self) -> &SourceToken {
        match self {
            Expr::Term(e) => &e.anchor,
            Expr::Product(e) => &e.anchor,
            Expr::Relational(e) => &e.anchor,
            Expr::Logical(e) => &e.anchor,
            Expr::Atom(atom) => atom.anchor(),
        }
    }
}

impl Node for Atom {
    fn anchor(&self) -> &SourceToken {
        match self {
            Atom::Invocation(e) => &e.anchor,
            Atom::Integer(e) => &e.anchor,
            Atom::Bool(e) => &e.anchor,
            Atom::String(e) => &e.anchor,
            Atom::Identifier(e) => &e.anchor,
        }
    }
}

impl<Op: BinaryOperator> Node for BinaryExpr<Op> {
    fn anchor(&self) -> &SourceToken {
        &self.anchor
    }
}

impl Accept for Expr {
    fn accept<S, R, V>(&self, visitor: &mut V, state: &mut S) -> R
    where
        V: Visitor<S, R> + ?Sized,
    {
        match self {
            Expr::Term(e) => e.accept(visitor, state),
            Expr::Product(e) => e.accept(visitor, state),
            Expr::Relational(e) => e.accept(visitor, state),
            Expr::Logical(e) => e.accept(visitor, state),
            Expr::Atom(atom) => atom.accept(visitor, state),
        }
    }
}

impl Accept for Atom {
    fn accept<S, R, V>(&self, visitor: &mut V, state: &mut S) -> R
    where
        V: Visitor<S, R> + ?Sized,
    {
        match self {
            Atom::Invocation(e) => visitor.visit_invocation(e, state),
            Atom::Integer(e) => visitor.visit_integer(e, state),
            Atom::Bool(e) => visitor.visit_bool(e, state),
            Atom::String(e) => visitor.visit_string(e, state),
            Atom::Identifier(e) => visitor.visit_identifier(e, state),
        }
    }
}

impl<Op: BinaryOperator> Accept for BinaryExpr<Op> {
    fn accept<S, R, V>(&self, visitor: &mut V, state: &mut S) -> R
    where
        V: Visitor<S, R> + ?Sized,
    {
        Op::dispatch(self, visitor, state)
    }
}

// ============ From ============

impl<Op: BinaryOperator> From<BinaryExpr<Op>> for Expr {
    fn from(expr: BinaryExpr<Op>) -> Self {
        Op::into_expr(expr)
    }
}

impl From<Atom> for Expr {
    fn from(atom: Atom) -> Self {
        Expr::Atom(atom)
    }
}

macro_rules! atom_from {
    ($($node:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$node> for Atom {
                fn from(node: $node) -> Self {
                    Atom::$variant(node)
                }
            }

            impl From<$node> for Expr {
                fn from(node: $node) -> Self {
                    Expr::Atom(Atom::$variant(node))
                }
            }
        )*
    };
}

atom_from!(
    InvocationExpr => Invocation,
    IntegerLiteral => Integer,
    BoolLiteral => Bool,
    StringLiteral => String,
    Identifier => Identifier,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Token;

    fn tok(token: Token, start: usize) -> SourceToken {
        SourceToken::new(token, start..start + 1)
    }

    #[test]
    fn test_operator_symbols() {
        assert_eq!(TermOp::Minus.symbol(), "-");
        assert_eq!(ProductOp::Divide.to_string(), "/");
        assert_eq!(RelationalOp::Ge.to_string(), ">=");
        assert_eq!(RelationalOp::Ne.symbol(), "!=");
        assert_eq!(LogicalOp::Or.to_string(), "||");
    }

    #[test]
    fn test_binary_into_expr_picks_variant() {
        let one = IntegerLiteral::new(tok(Token::Int(1), 0), 1);
        let two = IntegerLiteral::new(tok(Token::Int(2), 4), 2);

        let sum: Expr = BinaryExpr::new(
            one.anchor.clone(),
            one.clone().into(),
            two.clone().into(),
            TermOp::Plus,
        )
        .into();
        assert!(matches!(sum, Expr::Term(BinaryExpr { op: TermOp::Plus, .. })));

        let cmp: Expr =
            BinaryExpr::new(one.anchor.clone(), one.into(), two.into(), RelationalOp::Lt).into();
        assert!(matches!(cmp, Expr::Relational(_)));
    }

    #[test]
    fn test_expr_anchor() {
        let x = Identifier::new(tok(Token::Ident("x".into()), 3), "x");
        let expr: Expr = x.clone().into();
        assert_eq!(expr.anchor(), &x.anchor);
        assert_eq!(expr.span(), 3..4);
    }
}
