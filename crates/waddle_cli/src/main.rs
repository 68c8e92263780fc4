use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::fs;
use tracing::{debug, info, Level};
use waddle_diagnostics::Emitter;
use waddle_driver::{lex_source, outline, parse_source, CompileError};
use waddle_syntax::ast::Program;
use waddle_syntax::printer::to_source;

#[derive(Parser, Debug)]
#[command(name = "waddlec")]
#[command(about = "Waddle 前端工具 - 词法、语法树、格式化、检查", version)]
struct Cli {
    /// 关闭彩色输出
    #[arg(long, global = true)]
    no_color: bool,

    /// 日志详细程度 (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 输出 token 流
    Tokens {
        /// 输入文件
        input: String,
    },

    /// 输出语法树
    Ast {
        /// 输入文件
        input: String,
    },

    /// 按规范格式重新输出源码
    Fmt {
        /// 输入文件
        input: String,

        /// 直接写回输入文件
        #[arg(short, long)]
        write: bool,
    },

    /// 检查语法并列出函数概要
    Check {
        /// 输入文件
        input: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, !cli.no_color);

    if cli.no_color {
        colored::control::set_override(false);
    }
    let emitter = Emitter::with_colors(!cli.no_color);
    debug!(command = ?cli.command, "starting");

    match cli.command {
        Commands::Tokens { input } => cmd_tokens(&input, &emitter),
        Commands::Ast { input } => cmd_ast(&input, &emitter),
        Commands::Fmt { input, write } => cmd_fmt(&input, write, &emitter)?,
        Commands::Check { input } => cmd_check(&input, &emitter),
    }

    Ok(())
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// 日志写到 stderr，不和命令输出混在一起
fn init_logging(verbose: u8, ansi: bool) {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(log_level(verbose))
        .with_ansi(ansi)
        .with_writer(std::io::stderr)
        .init();
}

/// 输出诊断后以退出码 1 结束，有源码时带上源码片段
fn fail(err: &CompileError, input: &str, source: Option<&str>, emitter: &Emitter) -> ! {
    err.emit(emitter, Some(input), source);
    eprintln!("❌ {} 处理失败", input);
    std::process::exit(1);
}

/// 只读一次文件，诊断里的源码片段和 span 来自同一份内容
fn read_or_exit(input: &str, emitter: &Emitter) -> String {
    info!(path = input, "reading file");
    match fs::read_to_string(input) {
        Ok(source) => source,
        Err(err) => fail(&CompileError::from(err), input, None, emitter),
    }
}

fn parse_or_exit(input: &str, emitter: &Emitter) -> (String, Program) {
    let source = read_or_exit(input, emitter);
    match parse_source(&source) {
        Ok(program) => (source, program),
        Err(err) => fail(&err, input, Some(&source), emitter),
    }
}

/// token 命令
fn cmd_tokens(input: &str, emitter: &Emitter) {
    let source = read_or_exit(input, emitter);
    let tokens = match lex_source(&source) {
        Ok(tokens) => tokens,
        Err(err) => fail(&err, input, Some(&source), emitter),
    };

    for token in tokens {
        println!("{}", token);
    }
}

/// 语法树命令
fn cmd_ast(input: &str, emitter: &Emitter) {
    let (_, program) = parse_or_exit(input, emitter);
    println!("{:#?}", program);
}

/// 格式化命令
fn cmd_fmt(input: &str, write: bool, emitter: &Emitter) -> Result<()> {
    let (source, program) = parse_or_exit(input, emitter);
    let formatted = to_source(&program);

    if !write {
        print!("{}", formatted);
    } else if formatted != source {
        fs::write(input, formatted)?;
        println!("✅ 已格式化 {}", input);
    } else {
        println!("✅ {} 无需改动", input);
    }
    Ok(())
}

/// 检查命令
fn cmd_check(input: &str, emitter: &Emitter) {
    println!("🔍 检查 {} ...", input);

    let (_, program) = parse_or_exit(input, emitter);
    for function in outline(&program) {
        println!(
            "  {}  ({} 条语句, {}..{})",
            function.signature, function.statements, function.span.start, function.span.end
        );
    }
    println!("✅ 无错误");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["waddlec", "check", "main.wd", "-vv", "--no-color"]).unwrap();
        assert!(cli.no_color);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Check { ref input } if input == "main.wd"));
    }

    #[test]
    fn test_fmt_write_flag() {
        let cli = Cli::try_parse_from(["waddlec", "fmt", "-w", "main.wd"]).unwrap();
        assert!(matches!(cli.command, Commands::Fmt { write: true, .. }));
    }

    #[test]
    fn test_missing_input_is_rejected() {
        assert!(Cli::try_parse_from(["waddlec", "ast"]).is_err());
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0), Level::WARN);
        assert_eq!(log_level(1), Level::INFO);
        assert_eq!(log_level(2), Level::DEBUG);
        assert_eq!(log_level(9), Level::TRACE);
    }
}
