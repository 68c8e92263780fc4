//! Expression Parser
//!
//! 表达式解析，优先级从低到高: || → && → 比较 → 加减 → 乘除 → 原子

use super::helpers::{ident_parser, token};
use crate::ast::*;
use crate::lexer::Token;
use chumsky::prelude::*;

pub type ParserError = Simple<Token>;

/// 带着"第一个被读到的 token"的表达式
///
/// 括号不产生节点，但 `(a + b) * c` 的锚点必须是 `(`，所以要单独记录。
#[derive(Debug, Clone)]
struct Operand {
    first: SourceToken,
    expr: Expr,
}

impl Operand {
    fn leaf(expr: Expr) -> Self {
        Self {
            first: expr.anchor().clone(),
            expr,
        }
    }
}

fn binary<Op: BinaryOperator>(lhs: Operand, op: Op, rhs: Operand) -> Operand {
    let expr: Expr = BinaryExpr::new(lhs.first.clone(), lhs.expr, rhs.expr, op).into();
    Operand {
        first: lhs.first,
        expr,
    }
}

/// 解析表达式 (公共接口)
pub fn expr_parser() -> impl Parser<Token, Expr, Error = ParserError> + Clone {
    operand_parser().map(|operand| operand.expr)
}

/// 解析函数调用: callee(arg1, arg2)
///
/// 函数名的解析器由调用方给出，语句和表达式里的报错标签不同。
pub fn invocation_parser<'a>(
    callee: impl Parser<Token, (SourceToken, String), Error = ParserError> + Clone + 'a,
    expr: impl Parser<Token, Expr, Error = ParserError> + Clone + 'a,
) -> impl Parser<Token, InvocationExpr, Error = ParserError> + Clone + 'a {
    callee
        .then(
            expr.separated_by(just(Token::Comma))
                .delimited_by(just(Token::LParen), just(Token::RParen)),
        )
        .map(|((anchor, callee), arguments)| InvocationExpr::new(anchor, callee, arguments))
}

fn operand_parser() -> impl Parser<Token, Operand, Error = ParserError> + Clone {
    recursive(|operand| {
        let expr = operand.clone().map(|o: Operand| o.expr);

        // 只给原子的第一个 token 打标签，括号和参数里的错误保留自己的期望
        let name = ident_parser().labelled("expression");

        // 函数调用要排在标识符前面
        let invocation =
            invocation_parser(name.clone(), expr).map(|call| Operand::leaf(call.into()));

        let integer = select! { Token::Int(value) => value }
            .map_with_span(|value, span| {
                let tok = SourceToken::new(Token::Int(value), span);
                Operand::leaf(IntegerLiteral::new(tok, value).into())
            })
            .labelled("expression");

        let boolean = select! {
            Token::True => true,
            Token::False => false,
        }
        .map_with_span(|value, span| {
            let tok = if value { Token::True } else { Token::False };
            Operand::leaf(BoolLiteral::new(SourceToken::new(tok, span), value).into())
        })
        .labelled("expression");

        let string = select! { Token::String(text) => text }
            .map_with_span(|text: String, span| {
                let tok = SourceToken::new(Token::String(text.clone()), span);
                Operand::leaf(StringLiteral::new(tok, text).into())
            })
            .labelled("expression");

        let identifier =
            name.map(|(anchor, name)| Operand::leaf(Identifier::new(anchor, name).into()));

        let paren = token(Token::LParen)
            .labelled("expression")
            .then(operand.clone())
            .then_ignore(just(Token::RParen))
            .map(|(open, inner): (SourceToken, Operand)| Operand {
                first: open,
                expr: inner.expr,
            });

        let atom = choice((invocation, integer, boolean, string, identifier, paren)).boxed();

        // Product: *, /
        let product = atom
            .clone()
            .then(
                select! {
                    Token::Star => ProductOp::Times,
                    Token::Slash => ProductOp::Divide,
                }
                .then(atom)
                .repeated(),
            )
            .foldl(|lhs, (op, rhs)| binary(lhs, op, rhs))
            .boxed();

        // Term: +, -
        let term = product
            .clone()
            .then(
                select! {
                    Token::Plus => TermOp::Plus,
                    Token::Minus => TermOp::Minus,
                }
                .then(product)
                .repeated(),
            )
            .foldl(|lhs, (op, rhs)| binary(lhs, op, rhs))
            .boxed();

        // Relational: 不可结合，a < b < c 需要加括号
        let relational = term
            .clone()
            .then(
                select! {
                    Token::EqEq => RelationalOp::Eq,
                    Token::NotEq => RelationalOp::Ne,
                    Token::Gt => RelationalOp::Gt,
                    Token::Geq => RelationalOp::Ge,
                    Token::Lt => RelationalOp::Lt,
                    Token::Leq => RelationalOp::Le,
                }
                .then(term)
                .or_not(),
            )
            .map(|(lhs, rest)| match rest {
                Some((op, rhs)) => binary(lhs, op, rhs),
                None => lhs,
            })
            .boxed();

        // Logical And: &&
        let logical_and = relational
            .clone()
            .then(just(Token::And).to(LogicalOp::And).then(relational).repeated())
            .foldl(|lhs, (op, rhs)| binary(lhs, op, rhs))
            .boxed();

        // Logical Or: ||
        logical_and
            .clone()
            .then(just(Token::Or).to(LogicalOp::Or).then(logical_and).repeated())
            .foldl(|lhs, (op, rhs)| binary(lhs, op, rhs))
            .boxed()
    })
}
