//! DiagnosticLevel - 诊断级别

use ariadne::{Color, ReportKind};
use colored::*;
use std::fmt;

/// 诊断级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticLevel {
    /// 错误 - 输入无法继续处理
    Error,
    Warning,
    Info,
    /// 注释 - 补充说明
    Note,
}

impl DiagnosticLevel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Note => "note",
        }
    }

    /// 终端输出用的带颜色名称
    pub fn colored_name(&self) -> ColoredString {
        match self {
            Self::Error => self.name().red().bold(),
            Self::Warning => self.name().yellow().bold(),
            Self::Info => self.name().blue().bold(),
            Self::Note => self.name().bright_black().bold(),
        }
    }

    /// 对应的 ariadne 报告类型
    pub fn report_kind(&self) -> ReportKind<'static> {
        match self {
            Self::Error => ReportKind::Error,
            Self::Warning => ReportKind::Warning,
            Self::Info => ReportKind::Advice,
            Self::Note => ReportKind::Custom("Note", Color::Cyan),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_name() {
        assert_eq!(DiagnosticLevel::Error.name(), "error");
        assert_eq!(DiagnosticLevel::Warning.name(), "warning");
        assert_eq!(DiagnosticLevel::Info.name(), "info");
        assert_eq!(DiagnosticLevel::Note.name(), "note");
    }

    #[test]
    fn test_is_error() {
        assert!(DiagnosticLevel::Error.is_error());
        assert!(!DiagnosticLevel::Warning.is_error());
        assert!(!DiagnosticLevel::Note.is_error());
    }

    #[test]
    fn test_report_kind() {
        assert!(matches!(DiagnosticLevel::Error.report_kind(), ReportKind::Error));
        assert!(matches!(DiagnosticLevel::Info.report_kind(), ReportKind::Advice));
        assert!(matches!(
            DiagnosticLevel::Note.report_kind(),
            ReportKind::Custom("Note", _)
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", DiagnosticLevel::Error), "error");
        assert_eq!(format!("{}", DiagnosticLevel::Warning), "warning");
    }
}
