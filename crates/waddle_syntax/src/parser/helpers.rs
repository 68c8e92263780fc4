//! Parser Helper Functions
//!
//! 辅助解析函数：锚点 token、标识符、类型、形参、代码块

use crate::ast::{Block, ParameterDecl, Stmt, TypeSyntax};
use crate::lexer::{SourceToken, Token};
use chumsky::prelude::*;

pub type ParserError = Simple<Token>;

/// 匹配指定 token，并连同位置一起返回，用作节点锚点
pub fn token(expected: Token) -> impl Parser<Token, SourceToken, Error = ParserError> + Clone {
    just(expected).map_with_span(SourceToken::new)
}

/// 解析标识符，返回 (锚点, 名字)
///
/// 不带标签，表达式里的标识符由调用方标成 "expression"。
#[allow(clippy::result_large_err)]
pub fn ident_parser() -> impl Parser<Token, (SourceToken, String), Error = ParserError> + Clone {
    select! { Token::Ident(ident) => ident }.map_with_span(|ident: String, span| {
        (SourceToken::new(Token::Ident(ident.clone()), span), ident)
    })
}

/// 声明位置上的名字：函数名、形参名、赋值目标、调用语句的函数名
pub fn name_parser() -> impl Parser<Token, (SourceToken, String), Error = ParserError> + Clone {
    ident_parser().labelled("identifier")
}

/// 解析类型: int | bool | string
#[allow(clippy::result_large_err)]
pub fn type_parser() -> impl Parser<Token, TypeSyntax, Error = ParserError> + Clone {
    select! {
        tok @ (Token::TypeInt | Token::TypeBool | Token::TypeString) => tok,
    }
    .map_with_span(|tok, span| TypeSyntax::new(SourceToken::new(tok, span)))
    .labelled("type")
}

/// 解析形参: name: type
pub fn param_parser() -> impl Parser<Token, ParameterDecl, Error = ParserError> + Clone {
    name_parser()
        .then_ignore(just(Token::Colon))
        .then(type_parser())
        .map(|((anchor, name), ty)| ParameterDecl::new(anchor, name, ty))
}

/// 解析代码块: { stmt* }
pub fn block_parser<'a>(
    stmt: impl Parser<Token, Stmt, Error = ParserError> + Clone + 'a,
) -> impl Parser<Token, Block, Error = ParserError> + Clone + 'a {
    token(Token::LBrace)
        .then(stmt.repeated())
        .then_ignore(just(Token::RBrace))
        .map(|(anchor, statements)| Block::new(anchor, statements))
}
