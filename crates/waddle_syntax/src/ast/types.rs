use crate::lexer::{SourceToken, Token};
use std::fmt::{self, Display};

/// 类型引用: int, bool, string
///
/// 只记录类型 token 本身，类型是否存在由后续阶段检查。
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSyntax {
    pub(crate) anchor: SourceToken,
}

impl TypeSyntax {
    pub fn new(type_token: SourceToken) -> Self {
        Self { anchor: type_token }
    }

    /// 类型 token（即锚点 token）
    pub fn type_token(&self) -> &Token {
        &self.anchor.token
    }

    /// 类型在源码中的写法
    pub fn type_name(&self) -> String {
        self.anchor.token.lexeme()
    }
}

impl Display for TypeSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}
