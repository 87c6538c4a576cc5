//! Go source renderer.
//!
//! Walks the language-neutral declaration model and writes gofmt-shaped Go:
//! tab indentation, aligned keys in composite literals, and method chains
//! broken across lines with trailing dots.

use svcgen_codegen::{
    GeneratedModule, ModuleRenderer,
    builder::{
        CodeBuilder, ConstSpec, Declaration, Expr, FunctionSpec, Indent, MethodCall, RenderOptions,
        Renderer, Statement, StructSpec, TypeMapper, TypeRef, VarSpec,
    },
};

use crate::{GO_NAMING, GoTypeMapper};

/// Chains with more calls than this are broken across lines.
const INLINE_CHAIN_CALLS: usize = 2;

/// Renders declarations and expressions as Go source.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoRenderer {
    types: GoTypeMapper,
}

impl GoRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn ident(&self, name: &str) -> String {
        GO_NAMING.safe_name(name)
    }

    fn ty(&self, ty: &TypeRef) -> String {
        self.types.render_type(ty)
    }

    fn opts(&self, b: &CodeBuilder) -> RenderOptions {
        RenderOptions::new(b.indent_style()).at_level(b.current_indent())
    }

    fn render_each(&self, exprs: &[Expr], opts: &RenderOptions) -> Vec<String> {
        exprs.iter().map(|e| self.render_expr(e, opts)).collect()
    }

    fn join(&self, exprs: &[Expr], opts: &RenderOptions) -> String {
        self.render_each(exprs, opts).join(", ")
    }

    /// Render one top-level declaration, including its leading comment.
    pub fn render_declaration(&self, b: &mut CodeBuilder, decl: &Declaration) {
        if let Some(doc) = decl.doc() {
            b.push_comment("//", doc);
        }
        match decl {
            Declaration::Const(c) => self.render_const(b, c),
            Declaration::Var(v) => self.render_var(b, v),
            Declaration::Type(s) => self.render_struct(b, s),
            Declaration::Func(f) => self.render_function(b, f),
        }
    }

    fn render_const(&self, b: &mut CodeBuilder, spec: &ConstSpec) {
        b.push_block("const (", ")", |b| {
            let value = self.render_expr(&spec.value, &self.opts(b));
            b.push_line(&format!("{} = {}", self.ident(&spec.name), value));
        });
    }

    fn render_var(&self, b: &mut CodeBuilder, spec: &VarSpec) {
        let value = self.render_expr(&spec.value, &self.opts(b));
        b.push_line(&format!("var {} = {}", self.ident(&spec.name), value));
    }

    fn render_struct(&self, b: &mut CodeBuilder, spec: &StructSpec) {
        let name = self.ident(&spec.name);
        if spec.is_empty() {
            b.push_line(&format!("type {} struct{{}}", name));
            return;
        }

        // Only embedded fields are generated.
        b.push_block(&format!("type {} struct {{", name), "}", |b| {
            for field in &spec.fields {
                b.push_line(&self.ty(&field.ty));
            }
        });
    }

    fn signature(&self, func: &FunctionSpec) -> String {
        let receiver = func
            .receiver
            .as_ref()
            .map(|r| format!("({} {}) ", self.ident(&r.name), self.ty(&r.ty)))
            .unwrap_or_default();
        let params = func
            .params
            .iter()
            .map(|p| format!("{} {}", self.ident(&p.name), self.ty(&p.ty)))
            .collect::<Vec<_>>()
            .join(", ");
        let results = match func.results.as_slice() {
            [] => String::new(),
            [single] => format!(" {}", self.ty(single)),
            many => {
                let many: Vec<_> = many.iter().map(|t| self.ty(t)).collect();
                format!(" ({})", many.join(", "))
            }
        };
        format!(
            "func {}{}({}){}",
            receiver,
            self.ident(&func.name),
            params,
            results
        )
    }

    fn render_function(&self, b: &mut CodeBuilder, func: &FunctionSpec) {
        b.push_block(&format!("{} {{", self.signature(func)), "}", |b| {
            self.render_block(b, &func.body);
        });
    }

    fn render_block(&self, b: &mut CodeBuilder, stmts: &[Statement]) {
        for stmt in stmts {
            self.render_statement(b, stmt);
        }
    }

    /// Render one statement at the builder's current level.
    pub fn render_statement(&self, b: &mut CodeBuilder, stmt: &Statement) {
        let opts = self.opts(b);
        match stmt {
            Statement::Define { names, value } => {
                let names: Vec<_> = names.iter().map(|n| self.ident(n)).collect();
                let value = self.render_expr(value, &opts);
                b.push_line(&format!("{} := {}", names.join(", "), value));
            }
            Statement::Assign { target, value } => {
                let line = format!(
                    "{} = {}",
                    self.render_expr(target, &opts),
                    self.render_expr(value, &opts)
                );
                b.push_line(&line);
            }
            Statement::Var { name, ty } => {
                b.push_line(&format!("var {} {}", self.ident(name), self.ty(ty)));
            }
            Statement::Return(values) if values.is_empty() => {
                b.push_line("return");
            }
            Statement::Return(values) => {
                b.push_line(&format!("return {}", self.join(values, &opts)));
            }
            Statement::If {
                condition,
                then_branch,
            } => {
                let header = format!("if {} {{", self.render_expr(condition, &opts));
                b.push_block(&header, "}", |b| self.render_block(b, then_branch));
            }
            Statement::ForRange {
                index,
                item,
                iter,
                body,
            } => {
                let header = format!(
                    "for {}, {} := range {} {{",
                    self.ident(index),
                    self.ident(item),
                    self.render_expr(iter, &opts)
                );
                b.push_block(&header, "}", |b| self.render_block(b, body));
            }
            Statement::Comment(text) => {
                b.push_comment("//", text);
            }
        }
    }

    fn render_chain(&self, base: &Expr, calls: &[MethodCall], opts: &RenderOptions) -> String {
        let mut out = self.render_expr(base, opts);
        if calls.len() <= INLINE_CHAIN_CALLS {
            for call in calls {
                let args = self.join(&call.args, opts);
                out.push_str(&format!(".{}({})", call.name, args));
            }
            return out;
        }

        let nested = opts.nested();
        let continuation = nested.indent_str();
        let last = calls.len() - 1;
        for (i, call) in calls.iter().enumerate() {
            if i > 0 {
                out.push('\n');
                out.push_str(&continuation);
            } else {
                out.push('.');
            }
            let args = self.join(&call.args, &nested);
            out.push_str(&format!("{}({})", call.name, args));
            if i < last {
                out.push('.');
            }
        }
        out
    }

    /// `Type{Key: value, ...}` with one entry per line. Keys of consecutive
    /// single-line entries are aligned; a multi-line entry ends the run.
    fn render_composite(
        &self,
        ty: &TypeRef,
        fields: &[(String, Expr)],
        opts: &RenderOptions,
    ) -> String {
        let ty = self.ty(ty);
        if fields.is_empty() {
            return format!("{}{{}}", ty);
        }

        let nested = opts.nested();
        let indent = nested.indent_str();
        let rendered: Vec<(&str, String)> = fields
            .iter()
            .map(|(k, v)| (k.as_str(), self.render_expr(v, &nested)))
            .collect();

        let mut out = format!("{}{{\n", ty);
        let mut start = 0;
        while start < rendered.len() {
            // A run of single-line entries, or one multi-line entry.
            let mut end = start;
            while end < rendered.len() && !rendered[end].1.contains('\n') {
                end += 1;
            }
            if end == start {
                let (key, value) = &rendered[start];
                out.push_str(&format!("{}{}: {},\n", indent, key, value));
                start += 1;
                continue;
            }

            let width = rendered[start..end]
                .iter()
                .map(|(k, _)| k.len() + 1)
                .max()
                .unwrap_or(0);
            for (key, value) in &rendered[start..end] {
                let key = format!("{}:", key);
                out.push_str(&format!("{}{:width$} {},\n", indent, key, value));
            }
            start = end;
        }
        out.push_str(&opts.indent_str());
        out.push('}');
        out
    }

    /// `Type{a, b}`, broken across lines only when an item is.
    fn render_list(&self, ty: &TypeRef, items: &[Expr], opts: &RenderOptions) -> String {
        let ty = self.ty(ty);
        let nested = opts.nested();
        let rendered = self.render_each(items, &nested);
        if rendered.iter().all(|r| !r.contains('\n')) {
            return format!("{}{{{}}}", ty, self.join(items, opts));
        }

        let indent = nested.indent_str();
        let mut out = format!("{}{{\n", ty);
        for item in &rendered {
            out.push_str(&format!("{}{},\n", indent, item));
        }
        out.push_str(&opts.indent_str());
        out.push('}');
        out
    }
}

impl Renderer for GoRenderer {
    fn render_expr(&self, expr: &Expr, opts: &RenderOptions) -> String {
        match expr {
            Expr::Ident(name) => self.ident(name),
            Expr::String(s) => quote(s),
            Expr::Nil => "nil".to_string(),
            Expr::Placeholder(name) => name.clone(),
            Expr::Field { base, name } => format!("{}.{}", self.render_expr(base, opts), name),
            Expr::Call { callee, args } => format!(
                "{}({})",
                self.render_expr(callee, opts),
                self.join(args, opts)
            ),
            Expr::Chain { base, calls } => self.render_chain(base, calls, opts),
            Expr::Spread(inner) => format!("{}...", self.render_expr(inner, opts)),
            Expr::AddrOf(inner) => format!("&{}", self.render_expr(inner, opts)),
            Expr::Index { base, index } => format!(
                "{}[{}]",
                self.render_expr(base, opts),
                self.render_expr(index, opts)
            ),
            Expr::Binary { lhs, op, rhs } => format!(
                "{} {} {}",
                self.render_expr(lhs, opts),
                op.as_str(),
                self.render_expr(rhs, opts)
            ),
            Expr::Composite { ty, fields } => self.render_composite(ty, fields, opts),
            Expr::List { ty, items } => self.render_list(ty, items, opts),
            Expr::MakeSlice { ty, len } => {
                let len = self.render_expr(len, opts);
                format!("make({}, {})", self.ty(ty), len)
            }
            Expr::Len(of) => format!("len({})", self.render_expr(of, opts)),
            Expr::Append { slice, items } => {
                let mut args = vec![self.render_expr(slice, opts)];
                args.extend(self.render_each(items, opts));
                format!("append({})", args.join(", "))
            }
        }
    }
}

impl ModuleRenderer for GoRenderer {
    fn render_module(&self, module: &GeneratedModule) -> String {
        let mut b = CodeBuilder::new(Indent::GO);
        b.push_line(&format!("package {}", self.ident(&module.package)));

        if !module.imports.is_empty() {
            b.push_blank();
            b.push_block("import (", ")", |b| {
                for import in module.imports.iter() {
                    let line = match &import.alias {
                        Some(alias) => format!("{} {}", alias, quote(&import.path)),
                        None => quote(&import.path),
                    };
                    b.push_line(&line);
                }
            });
        }

        for decl in &module.declarations {
            b.push_blank();
            self.render_declaration(&mut b, decl);
        }
        b.build()
    }
}

/// Go interpreted string literal.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
