//! Diagnostic - 诊断信息
//!
//! 一条编译器诊断（错误、警告等），通过 builder 方法逐步补全

use crate::level::DiagnosticLevel;
use crate::span::Span;

/// 修复建议
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub message: String,
    /// 建议插入或替换的文本
    pub replacement: Option<String>,
}

impl Suggestion {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            replacement: None,
        }
    }

    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = Some(replacement.into());
        self
    }
}

/// 诊断信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    /// 主要消息
    pub message: String,
    /// 源码位置（可选）
    pub span: Option<Span>,
    /// 所在文件
    pub file: Option<String>,
    /// 标在源码片段上的短消息
    pub label: Option<String>,
    pub notes: Vec<String>,
    pub suggestions: Vec<Suggestion>,
}

impl Diagnostic {
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: None,
            file: None,
            label: None,
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Info, message)
    }

    pub fn note(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Note, message)
    }

    /// 设置位置信息
    pub fn span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// 设置文件路径
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestions.push(suggestion);
        self
    }

    /// 添加简单建议（仅消息）
    pub fn suggest(self, message: impl Into<String>) -> Self {
        self.with_suggestion(Suggestion::new(message))
    }

    /// `file:start..end` 形式的位置描述
    pub fn location(&self) -> Option<String> {
        match (&self.file, &self.span) {
            (Some(file), Some(span)) => Some(format!("{}:{}..{}", file, span.start, span.end)),
            (Some(file), None) => Some(file.clone()),
            (None, Some(span)) => Some(format!("{}..{}", span.start, span.end)),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_creation() {
        let diag = Diagnostic::error("unexpected `}`")
            .span(21..22)
            .with_label("expected `;`")
            .with_note("statements end with `;`")
            .suggest("insert `;`");

        assert_eq!(diag.level, DiagnosticLevel::Error);
        assert_eq!(diag.message, "unexpected `}`");
        assert_eq!(diag.span, Some(21..22));
        assert_eq!(diag.label.as_deref(), Some("expected `;`"));
        assert_eq!(diag.notes, vec!["statements end with `;`".to_string()]);
        assert_eq!(diag.suggestions[0].message, "insert `;`");
        assert!(diag.suggestions[0].replacement.is_none());
    }

    #[test]
    fn test_different_levels() {
        assert_eq!(Diagnostic::error("e").level, DiagnosticLevel::Error);
        assert_eq!(Diagnostic::warning("w").level, DiagnosticLevel::Warning);
        assert_eq!(Diagnostic::info("i").level, DiagnosticLevel::Info);
        assert_eq!(Diagnostic::note("n").level, DiagnosticLevel::Note);
    }

    #[test]
    fn test_suggestion_replacement() {
        let diag = Diagnostic::error("missing semicolon")
            .with_suggestion(Suggestion::new("insert `;`").with_replacement(";"));
        assert_eq!(diag.suggestions[0].replacement.as_deref(), Some(";"));
    }

    #[test]
    fn test_location() {
        assert_eq!(Diagnostic::error("x").location(), None);
        assert_eq!(
            Diagnostic::error("x").span(3..5).location(),
            Some("3..5".to_string())
        );
        assert_eq!(
            Diagnostic::error("x").with_file("a.wd").location(),
            Some("a.wd".to_string())
        );
        assert_eq!(
            Diagnostic::error("x").span(3..5).with_file("a.wd").location(),
            Some("a.wd:3..5".to_string())
        );
    }
}
