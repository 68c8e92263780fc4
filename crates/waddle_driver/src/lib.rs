//! Waddle Compiler Driver
//!
//! 串联前端各阶段：读文件 → 词法分析 → 语法分析 → 语法树上的 pass

pub mod error;
pub mod outline;

pub use error::{parse_diagnostic, CompileError, CompileResult};
pub use outline::{outline, FunctionOutline};

use std::path::{Path, PathBuf};
use tracing::{debug, info};
use waddle_syntax::ast::Program;
use waddle_syntax::lexer::{tokenize, SourceToken};
use waddle_syntax::parser::parse;
use waddle_syntax::printer::to_source;

/// 解析好的源文件
#[derive(Debug, Clone)]
pub struct ParsedFile {
    pub path: PathBuf,
    pub source: String,
    pub program: Program,
}

/// 词法分析
pub fn lex_source(source: &str) -> CompileResult<Vec<SourceToken>> {
    let tokens = tokenize(source)?;
    debug!(tokens = tokens.len(), "lexed source");
    Ok(tokens)
}

/// 解析源代码
///
/// # Example
/// ```
/// use waddle_driver::parse_source;
///
/// let program = parse_source("fn main() { return 0; }").unwrap();
/// assert_eq!(program.functions()[0].name(), "main");
/// ```
pub fn parse_source(source: &str) -> CompileResult<Program> {
    let tokens = lex_source(source)?;
    let program = parse(tokens).map_err(CompileError::ParseErrors)?;
    debug!(functions = program.functions().len(), "parsed program");
    Ok(program)
}

/// 读取并解析文件
pub fn parse_file(path: impl AsRef<Path>) -> CompileResult<ParsedFile> {
    let path = path.as_ref();
    info!(path = %path.display(), "parsing file");

    let source = std::fs::read_to_string(path)?;
    let program = parse_source(&source)?;
    Ok(ParsedFile {
        path: path.to_path_buf(),
        source,
        program,
    })
}

/// 解析后按规范格式重新输出
pub fn format_source(source: &str) -> CompileResult<String> {
    Ok(to_source(&parse_source(source)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_source_ends_with_eof() {
        let tokens = lex_source("fn").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].span, 2..2);
    }

    #[test]
    fn test_lex_error() {
        match lex_source("fn main() { return 1 # 2; }") {
            Err(CompileError::LexError(err)) => {
                assert_eq!(err.text, "#");
                assert_eq!(err.span, 21..22);
            }
            other => panic!("Expected LexError, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_error() {
        let result = parse_source("fn main() { return 1 }");
        assert!(matches!(result, Err(CompileError::ParseErrors(ref errors)) if !errors.is_empty()));
    }

    #[test]
    fn test_format_source() {
        assert_eq!(
            format_source("fn main(){return 0;}").unwrap(),
            "fn main() {\n    return 0;\n}\n"
        );
    }
}
