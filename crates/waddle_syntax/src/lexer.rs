//! Lexer - 词法分析
//!
//! 基于 logos 的状态机词法分析器。语法树节点通过 [`SourceToken`] 锚定到
//! 起始 token 上，供后续阶段报告源码位置。

use logos::Logos;
use std::fmt;
use thiserror::Error;

/// 源码位置范围 (字节偏移: 0..5)
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)] // chumsky 的 Simple<Token> 需要 Eq + Hash
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    // --- 关键字 (Keywords) ---
    #[token("fn")]
    Fn,
    #[token("var")]
    Var,
    #[token("if")]
    If,
    #[token("return")]
    Return,
    #[token("print")]
    Print,

    // 字面量关键字
    #[token("true")]
    True,
    #[token("false")]
    False,

    // --- 基础类型关键字 ---
    #[token("int")]
    TypeInt,
    #[token("bool")]
    TypeBool,
    #[token("string")]
    TypeString,

    // --- 符号 (Symbols) ---
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    Leq,
    #[token(">=")]
    Geq,

    #[token("&&")]
    And,
    #[token("||")]
    Or,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("->")]
    Arrow,

    // --- 复杂数据 (Data) ---
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),

    // 溢出 i64 时回调返回 None，logos 会把它当成错误
    #[regex(r"[0-9]+", |lex| lex.slice().parse().ok())]
    Int(i64),

    #[regex(r#""([^"\\]|\\["\\nrt0])*""#, |lex| unescape(lex.slice()))]
    String(String),

    #[regex(r"//[^\n]*", logos::skip)]
    Comment,

    // 由 tokenize 在末尾补上，logos 不会产生它
    Eof,
}

/// 去掉引号并处理转义序列
fn unescape(slice: &str) -> String {
    let inner = &slice[1..slice.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some('0') => out.push('\0'),
                Some(o) => out.push(o),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

impl Token {
    /// token 在源码中的写法（数据类 token 返回其内容）
    pub fn lexeme(&self) -> String {
        let fixed = match self {
            Token::Fn => "fn",
            Token::Var => "var",
            Token::If => "if",
            Token::Return => "return",
            Token::Print => "print",
            Token::True => "true",
            Token::False => "false",
            Token::TypeInt => "int",
            Token::TypeBool => "bool",
            Token::TypeString => "string",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::Slash => "/",
            Token::Eq => "=",
            Token::EqEq => "==",
            Token::NotEq => "!=",
            Token::Lt => "<",
            Token::Gt => ">",
            Token::Leq => "<=",
            Token::Geq => ">=",
            Token::And => "&&",
            Token::Or => "||",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::LBrace => "{",
            Token::RBrace => "}",
            Token::Comma => ",",
            Token::Colon => ":",
            Token::Semicolon => ";",
            Token::Arrow => "->",
            Token::Comment => "//",
            Token::Eof => "",
            Token::Ident(name) => return name.clone(),
            Token::Int(value) => return value.to_string(),
            Token::String(text) => return format!("{:?}", text),
        };
        fixed.to_string()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Eof => write!(f, "end of file"),
            Token::Ident(name) => write!(f, "identifier `{}`", name),
            Token::Int(value) => write!(f, "integer `{}`", value),
            Token::String(text) => write!(f, "string {:?}", text),
            other => write!(f, "`{}`", other.lexeme()),
        }
    }
}

/// 带位置的 token，语法树节点的锚点
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceToken {
    pub token: Token,
    pub span: Span,
}

impl SourceToken {
    pub fn new(token: Token, span: Span) -> Self {
        Self { token, span }
    }
}

impl fmt::Display for SourceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}..{}", self.token, self.span.start, self.span.end)
    }
}

/// 词法错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised input `{text}` at {span:?}")]
pub struct LexError {
    pub span: Span,
    pub text: String,
}

/// 把源码切分为 token 流，末尾总是一个 `Token::Eof`
pub fn tokenize(source: &str) -> Result<Vec<SourceToken>, LexError> {
    let mut tokens = Vec::new();
    for (result, span) in Token::lexer(source).spanned() {
        match result {
            Ok(token) => tokens.push(SourceToken::new(token, span)),
            Err(()) => {
                return Err(LexError {
                    text: source[span.clone()].to_string(),
                    span,
                })
            }
        }
    }

    let end = source.len();
    tokens.push(SourceToken::new(Token::Eof, end..end));
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.token)
            .collect()
    }

    #[test]
    fn test_lexer_basic() {
        let code = "var a: int = 10 + 20;";
        let mut lexer = Token::lexer(code);

        assert_eq!(lexer.next(), Some(Ok(Token::Var)));
        assert_eq!(lexer.next(), Some(Ok(Token::Ident("a".to_string()))));
        assert_eq!(lexer.next(), Some(Ok(Token::Colon)));
        assert_eq!(lexer.next(), Some(Ok(Token::TypeInt)));
        assert_eq!(lexer.next(), Some(Ok(Token::Eq)));
        assert_eq!(lexer.next(), Some(Ok(Token::Int(10))));
        assert_eq!(lexer.next(), Some(Ok(Token::Plus)));
        assert_eq!(lexer.next(), Some(Ok(Token::Int(20))));
        assert_eq!(lexer.next(), Some(Ok(Token::Semicolon)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_tokenize_appends_eof() {
        let tokens = tokenize("fn").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], SourceToken::new(Token::Fn, 0..2));
        assert_eq!(tokens[1], SourceToken::new(Token::Eof, 2..2));

        let empty = tokenize("").unwrap();
        assert_eq!(empty, vec![SourceToken::new(Token::Eof, 0..0)]);
    }

    #[test]
    fn test_operators_longest_match() {
        assert_eq!(
            kinds("<= >= == != -> && || < > = -"),
            vec![
                Token::Leq,
                Token::Geq,
                Token::EqEq,
                Token::NotEq,
                Token::Arrow,
                Token::And,
                Token::Or,
                Token::Lt,
                Token::Gt,
                Token::Eq,
                Token::Minus,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_minus_is_not_part_of_int() {
        assert_eq!(
            kinds("1-2"),
            vec![Token::Int(1), Token::Minus, Token::Int(2), Token::Eof]
        );
    }

    #[test]
    fn test_keywords_vs_identifiers() {
        assert_eq!(
            kinds("fn fnord printer print"),
            vec![
                Token::Fn,
                Token::Ident("fnord".to_string()),
                Token::Ident("printer".to_string()),
                Token::Print,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(
            kinds(r#""a\n\"b\"""#),
            vec![Token::String("a\n\"b\"".to_string()), Token::Eof]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            kinds("return // the answer\n42;"),
            vec![Token::Return, Token::Int(42), Token::Semicolon, Token::Eof]
        );
    }

    #[test]
    fn test_unknown_character() {
        let err = tokenize("var x = 1 # 2;").unwrap_err();
        assert_eq!(err.text, "#");
        assert_eq!(err.span, 10..11);
    }

    #[test]
    fn test_integer_overflow_is_an_error() {
        let err = tokenize("99999999999999999999").unwrap_err();
        assert_eq!(err.span, 0..20);
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::Plus.to_string(), "`+`");
        assert_eq!(Token::Ident("x".into()).to_string(), "identifier `x`");
        assert_eq!(Token::Eof.to_string(), "end of file");
        assert_eq!(Token::String("hi".into()).lexeme(), "\"hi\"");
    }
}
