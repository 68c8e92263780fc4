//! Printer - 把语法树还原成规范格式的 Waddle 源码
//!
//! 状态是当前缩进层级。嵌套的二元表达式一律加括号，
//! 所以输出再解析一遍会得到结构相同的树。

use crate::ast::*;

const INDENT: &str = "    ";

/// 源码打印 pass
#[derive(Debug, Default)]
pub struct Printer;

impl Printer {
    pub fn new() -> Self {
        Self
    }

    fn operand(&mut self, expr: &Expr, depth: &mut usize) -> String {
        let text: String = expr.accept(self, depth);
        match expr {
            Expr::Atom(_) => text,
            _ => format!("({})", text),
        }
    }

    /// 左深的运算链 `a + b + c + ...` 沿左侧迭代展开，只对右操作数递归
    fn binary<Op: BinaryOperator>(&mut self, expr: &BinaryExpr<Op>, depth: &mut usize) -> String {
        let mut spine = vec![(expr.op.symbol(), expr.right.as_ref())];
        let mut leftmost = expr.left.as_ref();
        while let Some((left, symbol, right)) = split_binary(leftmost) {
            spine.push((symbol, right));
            leftmost = left;
        }

        // 除最外层外每一级都是左操作数，先把左括号一次补齐
        let mut out = "(".repeat(spine.len() - 1);
        out.push_str(&self.operand(leftmost, depth));
        for (i, (symbol, right)) in spine.into_iter().rev().enumerate() {
            if i > 0 {
                out.push(')');
            }
            let right = self.operand(right, depth);
            out.push_str(&format!(" {} {}", symbol, right));
        }
        out
    }

    fn arguments(&mut self, args: &[Expr], depth: &mut usize) -> String {
        args.iter()
            .map(|arg| -> String { arg.accept(self, depth) })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// 打印整个程序
pub fn to_source(program: &Program) -> String {
    program.accept(&mut Printer::new(), &mut 0)
}

/// 拆开二元节点: (左操作数, 运算符, 右操作数)
fn split_binary(expr: &Expr) -> Option<(&Expr, &'static str, &Expr)> {
    match expr {
        Expr::Term(b) => Some((b.left.as_ref(), b.op.symbol(), b.right.as_ref())),
        Expr::Product(b) => Some((b.left.as_ref(), b.op.symbol(), b.right.as_ref())),
        Expr::Relational(b) => Some((b.left.as_ref(), b.op.symbol(), b.right.as_ref())),
        Expr::Logical(b) => Some((b.left.as_ref(), b.op.symbol(), b.right.as_ref())),
        Expr::Atom(_) => None,
    }
}

/// 字符串字面量转义，与 lexer 接受的转义序列一致
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

impl Visitor<usize, String> for Printer {
    fn visit_program(&mut self, program: &Program, depth: &mut usize) -> String {
        let mut out = String::new();
        for (i, function) in program.functions.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&self.visit_function(function, depth));
            out.push('\n');
        }
        out
    }

    fn visit_function(&mut self, function: &FunctionDecl, depth: &mut usize) -> String {
        let params = function
            .parameters
            .iter()
            .map(|p| self.visit_parameter(p, depth))
            .collect::<Vec<_>>()
            .join(", ");
        let ret = match &function.return_type {
            Some(ty) => format!(" -> {}", self.visit_type(ty, depth)),
            None => String::new(),
        };
        let body = self.visit_block(&function.body, depth);
        format!("fn {}({}){} {}", function.name, params, ret, body)
    }

    fn visit_type(&mut self, ty: &TypeSyntax, _: &mut usize) -> String {
        ty.type_name()
    }

    fn visit_parameter(&mut self, parameter: &ParameterDecl, depth: &mut usize) -> String {
        format!("{}: {}", parameter.name, self.visit_type(&parameter.ty, depth))
    }

    fn visit_block(&mut self, block: &Block, depth: &mut usize) -> String {
        if block.is_empty() {
            return "{}".to_string();
        }

        let mut out = String::from("{\n");
        *depth += 1;
        for stmt in &block.statements {
            let line: String = stmt.accept(self, depth);
            out.push_str(&INDENT.repeat(*depth));
            out.push_str(&line);
            out.push('\n');
        }
        *depth -= 1;
        out.push_str(&INDENT.repeat(*depth));
        out.push('}');
        out
    }

    fn visit_return(&mut self, stmt: &ReturnStmt, depth: &mut usize) -> String {
        let value: String = stmt.value.accept(self, depth);
        format!("return {};", value)
    }

    fn visit_if(&mut self, stmt: &IfStmt, depth: &mut usize) -> String {
        let condition: String = stmt.condition.accept(self, depth);
        format!("if {} {}", condition, self.visit_block(&stmt.body, depth))
    }

    fn visit_assign(&mut self, stmt: &AssignStmt, depth: &mut usize) -> String {
        let value: String = stmt.value.accept(self, depth);
        format!("{} = {};", stmt.target, value)
    }

    fn visit_print(&mut self, stmt: &PrintStmt, depth: &mut usize) -> String {
        format!("print({});", self.arguments(&stmt.arguments, depth))
    }

    fn visit_decl(&mut self, stmt: &DeclStmt, depth: &mut usize) -> String {
        let variable = self.visit_parameter(&stmt.variable, depth);
        let value: String = stmt.value.accept(self, depth);
        format!("var {} = {};", variable, value)
    }

    fn visit_invocation_stmt(&mut self, stmt: &InvocationStmt, depth: &mut usize) -> String {
        format!("{};", self.visit_invocation(&stmt.call, depth))
    }

    fn visit_term(&mut self, expr: &BinaryExpr<TermOp>, depth: &mut usize) -> String {
        self.binary(expr, depth)
    }

    fn visit_product(&mut self, expr: &BinaryExpr<ProductOp>, depth: &mut usize) -> String {
        self.binary(expr, depth)
    }

    fn visit_relational(&mut self, expr: &BinaryExpr<RelationalOp>, depth: &mut usize) -> String {
        self.binary(expr, depth)
    }

    fn visit_logical(&mut self, expr: &BinaryExpr<LogicalOp>, depth: &mut usize) -> String {
        self.binary(expr, depth)
    }

    fn visit_invocation(&mut self, expr: &InvocationExpr, depth: &mut usize) -> String {
        format!("{}({})", expr.callee, self.arguments(&expr.arguments, depth))
    }

    fn visit_integer(&mut self, lit: &IntegerLiteral, _: &mut usize) -> String {
        lit.value.to_string()
    }

    fn visit_bool(&mut self, lit: &BoolLiteral, _: &mut usize) -> String {
        lit.value.to_string()
    }

    fn visit_string(&mut self, lit: &StringLiteral, _: &mut usize) -> String {
        escape(&lit.value)
    }

    fn visit_identifier(&mut self, ident: &Identifier, _: &mut usize) -> String {
        ident.name.clone()
    }
}
