//! Declaration Parser
//!
//! 函数声明: fn add(a: int, b: int) -> int { ... }

use super::helpers::{block_parser, name_parser, param_parser, token, type_parser};
use super::stmt::stmt_parser;
use crate::ast::*;
use crate::lexer::Token;
use chumsky::prelude::*;

pub type ParserError = Simple<Token>;

/// 解析函数声明 (公共接口)
pub fn function_parser() -> impl Parser<Token, FunctionDecl, Error = ParserError> + Clone {
    token(Token::Fn)
        .then(name_parser())
        .then(
            param_parser()
                .separated_by(just(Token::Comma))
                .delimited_by(just(Token::LParen), just(Token::RParen)),
        )
        // 返回类型可省略
        .then(just(Token::Arrow).ignore_then(type_parser()).or_not())
        .then(block_parser(stmt_parser()))
        .map(
            |((((anchor, (_, name)), parameters), return_type), body)| {
                FunctionDecl::new(anchor, name, parameters, return_type, body)
            },
        )
}
