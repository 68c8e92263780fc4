//! Outline Pass
//!
//! 列出每个函数的签名和语句数，`if` 体内的语句也计入。

use waddle_syntax::ast::*;
use waddle_syntax::printer::Printer;

/// 一个函数的概要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionOutline {
    pub name: String,
    /// 例如 `fn add(a: int, b: int) -> int`
    pub signature: String,
    pub statements: usize,
    pub span: Span,
}

/// 生成整个程序的概要
pub fn outline(program: &Program) -> Vec<FunctionOutline> {
    let mut outlines = Vec::new();
    program.accept(&mut Outliner, &mut outlines);
    outlines
}

/// 状态里收集函数概要，返回值是子树中的语句数
struct Outliner;

impl Outliner {
    fn signature(function: &FunctionDecl) -> String {
        let mut printer = Printer::new();
        let params = function
            .parameters()
            .iter()
            .map(|p| printer.visit_parameter(p, &mut 0))
            .collect::<Vec<_>>()
            .join(", ");
        match function.return_type() {
            Some(ty) => format!(
                "fn {}({}) -> {}",
                function.name(),
                params,
                printer.visit_type(ty, &mut 0)
            ),
            None => format!("fn {}({})", function.name(), params),
        }
    }
}

impl Visitor<Vec<FunctionOutline>, usize> for Outliner {
    fn visit_program(&mut self, program: &Program, outlines: &mut Vec<FunctionOutline>) -> usize {
        program
            .functions()
            .iter()
            .map(|f| self.visit_function(f, outlines))
            .sum()
    }

    fn visit_function(
        &mut self,
        function: &FunctionDecl,
        outlines: &mut Vec<FunctionOutline>,
    ) -> usize {
        let statements = self.visit_block(function.body(), outlines);
        outlines.push(FunctionOutline {
            name: function.name().to_string(),
            signature: Self::signature(function),
            statements,
            span: function.span(),
        });
        statements
    }

    fn visit_type(&mut self, _: &TypeSyntax, _: &mut Vec<FunctionOutline>) -> usize {
        0
    }

    fn visit_parameter(&mut self, _: &ParameterDecl, _: &mut Vec<FunctionOutline>) -> usize {
        0
    }

    fn visit_block(&mut self, block: &Block, outlines: &mut Vec<FunctionOutline>) -> usize {
        block
            .statements()
            .iter()
            .map(|stmt| -> usize { stmt.accept(self, outlines) })
            .sum()
    }

    fn visit_return(&mut self, _: &ReturnStmt, _: &mut Vec<FunctionOutline>) -> usize {
        1
    }

    fn visit_if(&mut self, stmt: &IfStmt, outlines: &mut Vec<FunctionOutline>) -> usize {
        1 + self.visit_block(stmt.body(), outlines)
    }

    fn visit_assign(&mut self, _: &AssignStmt, _: &mut Vec<FunctionOutline>) -> usize {
        1
    }

    fn visit_print(&mut self, _: &PrintStmt, _: &mut Vec<FunctionOutline>) -> usize {
        1
    }

    fn visit_decl(&mut self, _: &DeclStmt, _: &mut Vec<FunctionOutline>) -> usize {
        1
    }

    fn visit_invocation_stmt(&mut self, _: &InvocationStmt, _: &mut Vec<FunctionOutline>) -> usize {
        1
    }

    // 表达式里没有语句
    fn visit_term(&mut self, _: &BinaryExpr<TermOp>, _: &mut Vec<FunctionOutline>) -> usize {
        0
    }

    fn visit_product(&mut self, _: &BinaryExpr<ProductOp>, _: &mut Vec<FunctionOutline>) -> usize {
        0
    }

    fn visit_relational(
        &mut self,
        _: &BinaryExpr<RelationalOp>,
        _: &mut Vec<FunctionOutline>,
    ) -> usize {
        0
    }

    fn visit_logical(&mut self, _: &BinaryExpr<LogicalOp>, _: &mut Vec<FunctionOutline>) -> usize {
        0
    }

    fn visit_invocation(&mut self, _: &InvocationExpr, _: &mut Vec<FunctionOutline>) -> usize {
        0
    }

    fn visit_integer(&mut self, _: &IntegerLiteral, _: &mut Vec<FunctionOutline>) -> usize {
        0
    }

    fn visit_bool(&mut self, _: &BoolLiteral, _: &mut Vec<FunctionOutline>) -> usize {
        0
    }

    fn visit_string(&mut self, _: &StringLiteral, _: &mut Vec<FunctionOutline>) -> usize {
        0
    }

    fn visit_identifier(&mut self, _: &Identifier, _: &mut Vec<FunctionOutline>) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waddle_syntax::lexer::tokenize;
    use waddle_syntax::parser::parse;

    fn outline_of(source: &str) -> Vec<FunctionOutline> {
        outline(&parse(tokenize(source).unwrap()).unwrap())
    }

    #[test]
    fn test_signature() {
        let outlines = outline_of("fn add(a: int, b: int) -> int { return a + b; } fn main() {}");
        assert_eq!(outlines.len(), 2);
        assert_eq!(outlines[0].signature, "fn add(a: int, b: int) -> int");
        assert_eq!(outlines[1].signature, "fn main()");
        assert_eq!(outlines[1].statements, 0);
    }

    #[test]
    fn test_counts_if_bodies() {
        let outlines = outline_of(
            r#"
            fn main() {
                var x: int = 1;
                if x > 0 {
                    print(x);
                    if x > 5 { log(x); }
                }
                return x;
            }
            "#,
        );
        // var, if, print, if, log, return
        assert_eq!(outlines[0].statements, 6);
    }

    #[test]
    fn test_span_is_fn_keyword() {
        let outlines = outline_of("  fn f() {}");
        assert_eq!(outlines[0].span, 2..4);
    }
}
