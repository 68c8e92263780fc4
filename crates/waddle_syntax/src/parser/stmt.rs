//! Statement Parser
//!
//! 语句解析：var 声明、print、if、return、赋值、调用语句

use super::expr::{expr_parser, invocation_parser};
use super::helpers::{block_parser, name_parser, param_parser, token};
use crate::ast::*;
use crate::lexer::Token;
use chumsky::prelude::*;

pub type ParserError = Simple<Token>;

/// 解析语句 (公共接口)
pub fn stmt_parser() -> impl Parser<Token, Stmt, Error = ParserError> + Clone {
    recursive(|stmt| {
        let block = block_parser(stmt);

        // 变量声明: var x: int = 1;
        let decl = token(Token::Var)
            .then(param_parser())
            .then_ignore(just(Token::Eq))
            .then(expr_parser())
            .then_ignore(just(Token::Semicolon))
            .map(|((anchor, variable), value)| Stmt::Decl(DeclStmt::new(anchor, variable, value)));

        // Print: print(a, b);
        let print = token(Token::Print)
            .then(
                expr_parser()
                    .separated_by(just(Token::Comma))
                    .delimited_by(just(Token::LParen), just(Token::RParen)),
            )
            .then_ignore(just(Token::Semicolon))
            .map(|(anchor, arguments)| Stmt::Print(PrintStmt::new(anchor, arguments)));

        // If (没有 else)
        let if_stmt = token(Token::If)
            .then(expr_parser())
            .then(block)
            .map(|((anchor, condition), body)| Stmt::If(IfStmt::new(anchor, condition, body)));

        // Return
        let ret = token(Token::Return)
            .then(expr_parser())
            .then_ignore(just(Token::Semicolon))
            .map(|(anchor, value)| Stmt::Return(ReturnStmt::new(anchor, value)));

        // 赋值语句: x = 10;
        let assign = name_parser()
            .then(token(Token::Eq))
            .then(expr_parser())
            .then_ignore(just(Token::Semicolon))
            .map(|(((anchor, target), equals), value)| {
                Stmt::Assign(AssignStmt::new(anchor, target, equals, value))
            });

        // 调用语句: log(x);
        let call = invocation_parser(name_parser(), expr_parser())
            .then_ignore(just(Token::Semicolon))
            .map(|call| Stmt::Invocation(InvocationStmt::new(call.anchor.clone(), call)));

        choice((decl, print, if_stmt, ret, assign, call)).boxed()
    })
}
