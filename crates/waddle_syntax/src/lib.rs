//! Waddle Syntax
//!
//! Waddle 前端的语法层：token、语法树、遍历协议、parser 与源码打印。
//!
//! # 核心类型
//!
//! - [`ast::Program`] 等节点 - 构造后不可变，每个节点锚定在起始 token 上
//! - [`ast::Visitor`] / [`ast::Accept`] - 双重分派的遍历协议
//! - [`lexer::tokenize`] / [`parser::parse`] - 生产者
//! - [`printer::to_source`] - 基于遍历协议的消费者
//!
//! # 示例
//!
//! ```rust
//! use waddle_syntax::{lexer, parser, printer};
//!
//! let tokens = lexer::tokenize("fn main() { return 0; }").unwrap();
//! let program = parser::parse(tokens).unwrap();
//!
//! assert_eq!(program.functions()[0].name(), "main");
//! assert_eq!(printer::to_source(&program), "fn main() {\n    return 0;\n}\n");
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod printer;

pub use lexer::{SourceToken, Span, Token};
