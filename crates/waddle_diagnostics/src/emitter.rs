//! Emitter - 诊断输出器
//!
//! 两种输出形式：
//! - 没有源码时，按行输出级别、位置、注释和建议（`colored`）
//! - 有源码时，用 ariadne 渲染带源码片段的报告
//!
//! 所有输出都写到 stderr，`render*` 方法返回同样的文本方便测试。

use crate::diagnostic::Diagnostic;
use crate::span::SpanExt;
use ariadne::{Color, Config, IndexType, Label, Report, Source};
use colored::*;
use std::fmt::Write as _;

/// 没有文件名时 ariadne 报告里显示的源 id
const ANONYMOUS_SOURCE: &str = "<input>";

#[derive(Debug, Clone)]
pub struct Emitter {
    use_colors: bool,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// 输出单个诊断
    pub fn emit(&self, diagnostic: &Diagnostic) {
        eprint!("{}", self.render(diagnostic));
    }

    /// 输出所有诊断，诊断之间空一行
    pub fn emit_all(&self, diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics {
            self.emit(diagnostic);
            eprintln!();
        }
    }

    /// 带源码片段输出
    pub fn emit_with_source(&self, diagnostic: &Diagnostic, source: &str) {
        eprint!("{}", self.render_with_source(diagnostic, source));
    }

    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        if self.use_colors {
            self.render_colored(diagnostic)
        } else {
            self.render_plain(diagnostic)
        }
    }

    fn render_colored(&self, diagnostic: &Diagnostic) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}: {}",
            diagnostic.level.colored_name(),
            diagnostic.message.bold()
        );

        if let Some(location) = diagnostic.location() {
            let _ = writeln!(out, "  {} {}", "-->".blue().bold(), location);
        }
        if let Some(label) = &diagnostic.label {
            let _ = writeln!(out, "  {} {}", "|".blue().bold(), label);
        }

        for note in &diagnostic.notes {
            let _ = writeln!(
                out,
                "  {} {}",
                "=".blue().bold(),
                format!("note: {}", note).bright_black()
            );
        }

        for suggestion in &diagnostic.suggestions {
            let _ = writeln!(
                out,
                "  {} {}",
                "=".green().bold(),
                format!("help: {}", suggestion.message).green()
            );
            if let Some(replacement) = &suggestion.replacement {
                let _ = writeln!(out, "        try: {}", replacement.green().italic());
            }
        }
        out
    }

    fn render_plain(&self, diagnostic: &Diagnostic) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}: {}", diagnostic.level, diagnostic.message);

        if let Some(location) = diagnostic.location() {
            let _ = writeln!(out, "  --> {}", location);
        }
        if let Some(label) = &diagnostic.label {
            let _ = writeln!(out, "  | {}", label);
        }
        for note in &diagnostic.notes {
            let _ = writeln!(out, "  = note: {}", note);
        }
        for suggestion in &diagnostic.suggestions {
            let _ = writeln!(out, "  = help: {}", suggestion.message);
            if let Some(replacement) = &suggestion.replacement {
                let _ = writeln!(out, "        try: {}", replacement);
            }
        }
        out
    }

    /// 用 ariadne 渲染带源码片段的报告
    ///
    /// 没有 span 的诊断无处标注，退回到普通输出。
    pub fn render_with_source(&self, diagnostic: &Diagnostic, source: &str) -> String {
        let Some(span) = &diagnostic.span else {
            return self.render(diagnostic);
        };

        let id = diagnostic
            .file
            .clone()
            .unwrap_or_else(|| ANONYMOUS_SOURCE.to_string());
        let span = span.fit_to(source);

        let label_color = if diagnostic.level.is_error() {
            Color::Red
        } else {
            Color::Yellow
        };
        let mut label = Label::new((id.clone(), span.clone())).with_color(label_color);
        if let Some(text) = &diagnostic.label {
            label = label.with_message(text);
        }

        let mut report = Report::<(String, std::ops::Range<usize>)>::build(
            diagnostic.level.report_kind(),
            id.clone(),
            span.start,
        )
        .with_config(
            Config::default()
                .with_color(self.use_colors)
                .with_index_type(IndexType::Byte),
        )
        .with_message(&diagnostic.message)
        .with_label(label);

        if !diagnostic.notes.is_empty() {
            report = report.with_note(diagnostic.notes.join("\n"));
        }
        if !diagnostic.suggestions.is_empty() {
            let help = diagnostic
                .suggestions
                .iter()
                .map(|s| match &s.replacement {
                    Some(replacement) => format!("{} (try: {})", s.message, replacement),
                    None => s.message.clone(),
                })
                .collect::<Vec<_>>()
                .join("\n");
            report = report.with_help(help);
        }

        let mut buffer = Vec::new();
        if report
            .finish()
            .write((id, Source::from(source.to_string())), &mut buffer)
            .is_err()
        {
            return self.render(diagnostic);
        }
        String::from_utf8_lossy(&buffer).into_owned()
    }
}
