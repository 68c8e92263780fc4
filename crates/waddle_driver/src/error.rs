//! Compilation Errors
//!
//! 驱动层的错误类型，集成统一诊断系统

use chumsky::error::SimpleReason;
use thiserror::Error;
use waddle_diagnostics::{Diagnostic, DiagnosticSink, Emitter, Suggestion};
use waddle_syntax::lexer::{LexError, Token};
use waddle_syntax::parser::ParserError;

/// 前端错误
#[derive(Debug, Error)]
pub enum CompileError {
    /// 词法错误
    #[error("Lexical error: {0}")]
    LexError(#[from] LexError),

    /// 语法错误（chumsky 可能一次报告多个）
    #[error("Parse errors:\n{}", format_parse_errors(.0))]
    ParseErrors(Vec<ParserError>),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CompileError {
    /// 转换为诊断列表并收集到 DiagnosticSink
    pub fn collect_to_sink(&self, sink: &mut DiagnosticSink, file_path: Option<&str>) {
        let mut add_diag = |diag: Diagnostic| match file_path {
            Some(path) => sink.add(diag.with_file(path)),
            None => sink.add(diag),
        };

        match self {
            CompileError::LexError(err) => {
                add_diag(
                    Diagnostic::error(format!("unrecognised input `{}`", err.text))
                        .span(err.span.clone())
                        .with_label("not a Waddle token"),
                );
            }
            CompileError::ParseErrors(errors) => {
                for err in errors {
                    add_diag(parse_diagnostic(err));
                }
            }
            CompileError::IoError(err) => {
                add_diag(Diagnostic::error(format!("IO error: {}", err)));
            }
        }
    }

    /// 使用统一诊断系统输出错误，有源码时带上源码片段
    pub fn emit(&self, emitter: &Emitter, file_path: Option<&str>, source: Option<&str>) {
        let mut sink = DiagnosticSink::new();
        self.collect_to_sink(&mut sink, file_path);

        match source {
            Some(src) => {
                for diag in sink.diagnostics() {
                    emitter.emit_with_source(diag, src);
                }
            }
            None => emitter.emit_all(sink.diagnostics()),
        }
    }
}

/// chumsky 错误 → 诊断
///
/// `select!` 匹配的 token 不会出现在期望列表里，所以解析器的标签
/// (expression / identifier / type) 排在具体 token 前面一起列出。
pub fn parse_diagnostic(err: &ParserError) -> Diagnostic {
    let found = err
        .found()
        .map_or_else(|| Token::Eof.to_string(), |tok| tok.to_string());

    let mut expected: Vec<String> = err
        .expected()
        .map(|tok| match tok {
            Some(tok) => tok.to_string(),
            None => Token::Eof.to_string(),
        })
        .collect();
    expected.sort();
    expected.dedup();
    if let Some(label) = err.label() {
        expected.insert(0, label.to_string());
    }

    let diag = match err.reason() {
        SimpleReason::Unclosed { span, delimiter } => {
            Diagnostic::error(format!("unclosed delimiter {}", delimiter))
                .span(err.span())
                .with_label(format!("found {}", found))
                .with_note(format!("delimiter opened at {}..{}", span.start, span.end))
        }
        SimpleReason::Custom(message) => Diagnostic::error(message.clone()).span(err.span()),
        SimpleReason::Unexpected => {
            let label = match expected.as_slice() {
                [] => "unexpected token".to_string(),
                [one] => format!("expected {}", one),
                many => format!("expected one of {}", many.join(", ")),
            };
            Diagnostic::error(format!("unexpected {}", found))
                .span(err.span())
                .with_label(label)
        }
    };

    if err.expected().any(|tok| tok == &Some(Token::Semicolon)) {
        diag.with_suggestion(Suggestion::new("statements end with `;`").with_replacement(";"))
    } else {
        diag
    }
}

fn format_parse_errors(errors: &[ParserError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let diag = parse_diagnostic(e);
            let at = e.span();
            format!("  {}. {} at {}..{}", i + 1, diag.message, at.start, at.end)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// 编译结果类型
pub type CompileResult<T> = Result<T, CompileError>;
