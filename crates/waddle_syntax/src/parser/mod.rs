//! Parser Module
//!
//! chumsky 组合子实现的 Waddle parser，自底向上构造语法树

pub mod decl;
pub mod expr;
pub mod helpers;
pub mod stmt;

use crate::ast::Program;
use crate::lexer::{SourceToken, Token};
use chumsky::prelude::*;
use chumsky::Stream;
use helpers::token;

pub type ParserError = Simple<Token>;

/// 主入口：解析整个程序
///
/// 输入必须以 `Token::Eof` 结尾（`lexer::tokenize` 会补上）。
pub fn program_parser() -> impl Parser<Token, Program, Error = ParserError> {
    decl::function_parser()
        .repeated()
        .then(token(Token::Eof))
        .then_ignore(end())
        .map(|(functions, eof)| {
            // 空文件锚定在 Eof 上
            let anchor = functions
                .first()
                .map(|f| f.anchor.clone())
                .unwrap_or(eof);
            Program::new(anchor, functions)
        })
}

/// 解析 token 流，span 使用源码中的字节偏移
pub fn parse(tokens: Vec<SourceToken>) -> Result<Program, Vec<ParserError>> {
    let end = tokens.last().map(|t| t.span.end).unwrap_or(0);
    let stream = Stream::from_iter(end..end, tokens.into_iter().map(|t| (t.token, t.span)));
    program_parser().parse(stream)
}
