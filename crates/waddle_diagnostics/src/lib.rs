//! Waddle Diagnostics
//!
//! 编译器前端的诊断系统：收集错误，并按终端或源码片段的形式输出。
//!
//! # 核心类型
//!
//! - [`Diagnostic`] - 诊断信息主体
//! - [`DiagnosticLevel`] - 诊断级别（Error/Warning/Info/Note）
//! - [`DiagnosticSink`] - 诊断收集器
//! - [`Emitter`] - 诊断输出器
//! - [`Span`] - 源码位置信息
//!
//! # 示例
//!
//! ```rust
//! use waddle_diagnostics::{Diagnostic, DiagnosticSink, Emitter};
//!
//! let source = "fn main() { return 1 }";
//! let mut sink = DiagnosticSink::new();
//!
//! sink.add(
//!     Diagnostic::error("unexpected `}`")
//!         .span(21..22)
//!         .with_file("main.wd")
//!         .with_label("expected `;` here")
//!         .suggest("end the statement with `;`"),
//! );
//!
//! assert!(sink.has_errors());
//! let report = Emitter::without_colors().render_with_source(&sink.diagnostics()[0], source);
//! assert!(report.contains("main.wd"));
//! assert!(report.contains("expected `;` here"));
//! ```

pub mod diagnostic;
pub mod emitter;
pub mod level;
pub mod sink;
pub mod span;

// 重新导出核心类型
pub use diagnostic::{Diagnostic, Suggestion};
pub use emitter::Emitter;
pub use level::DiagnosticLevel;
pub use sink::DiagnosticSink;
pub use span::{Span, SpanExt};
