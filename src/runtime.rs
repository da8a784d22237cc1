use std::{io::Write, time::Instant};

use indexmap::IndexMap;
use tracing::debug;

use crate::{
    ast::{Expr, ExprKind, Literal},
    builtins::Builtins,
    config::HelpConfig,
    diagnostics::{Diagnostic, MicrohelpError, Result, SourceSpan},
    docs::DocRegistry,
    help,
    help_texts::{TYPE_DOCS, VALUE_DOCS},
    host::ObjectModel,
    microbit, parser,
    symbols::{SymbolTable, SymbolTableRef},
    value::{TypeRef, Value, ValueKind},
};

/// What a native callback can reach while it runs.
pub struct CallContext<'a> {
    pub runtime: &'a Runtime,
    pub out: &'a mut dyn Write,
}

pub struct Runtime {
    builtins: Builtins,
    types: IndexMap<String, TypeRef>,
    globals: SymbolTable,
    docs: DocRegistry,
    welcome: String,
    started: Instant,
}

impl Runtime {
    pub fn new() -> Self {
        Self::with_config(&HelpConfig::default())
    }

    pub fn with_config(config: &HelpConfig) -> Self {
        let builtins = Builtins::new();
        let board = microbit::install();

        let mut types = IndexMap::new();
        for ty in builtins.all().into_iter().chain(board.types.iter()) {
            types.insert(ty.name.clone(), ty.clone());
        }

        let mut globals = SymbolTable::new();
        globals.define("help", help::builtin());
        globals.define("microbit", board.module);

        let mut runtime = Self {
            builtins,
            types,
            globals,
            docs: DocRegistry::new(),
            welcome: config.welcome_text(),
            started: Instant::now(),
        };
        let docs = DocRegistry::resolve(
            VALUE_DOCS,
            TYPE_DOCS,
            |path| runtime.lookup_path(path),
            |name| runtime.type_named(name),
        );
        runtime.docs = docs;
        debug!(
            values = runtime.docs.values().len(),
            types = runtime.docs.types().len(),
            "documentation registry ready"
        );
        runtime
    }

    pub fn docs(&self) -> &DocRegistry {
        &self.docs
    }

    pub fn welcome(&self) -> &str {
        &self.welcome
    }

    pub fn type_named(&self, name: &str) -> Option<TypeRef> {
        self.types.get(name).cloned()
    }

    /// Milliseconds since the runtime was created.
    pub fn uptime_ms(&self) -> i64 {
        self.started.elapsed().as_millis() as i64
    }

    /// Resolves a dotted path such as `microbit.display.scroll`.
    ///
    /// Bound methods are unwrapped so the result is the object that is shared
    /// between every access through any receiver.
    pub fn lookup_path(&self, path: &str) -> Option<Value> {
        let mut segments = path.split('.');
        let mut value = self.globals.get(segments.next()?)?.clone();
        for segment in segments {
            value = self.attribute(&value, segment)?;
        }
        Some(self.unwrap_bound_method(&value))
    }

    /// Parses and evaluates one line, echoing any result that is not `None`.
    pub fn eval_line(&self, source: &str, out: &mut dyn Write) -> Result<()> {
        let line = parser::parse_line(source)?;
        let Some(expr) = line.expr else {
            return Ok(());
        };
        let value = self.evaluate(&expr, out)?;
        if !value.is_none() {
            writeln!(out, "{value:?}")?;
        }
        Ok(())
    }

    pub fn eval_expr(&self, source: &str, out: &mut dyn Write) -> Result<Value> {
        let line = parser::parse_line(source)?;
        match line.expr {
            Some(expr) => self.evaluate(&expr, out),
            None => Ok(Value::none()),
        }
    }

    fn evaluate(&self, expr: &Expr, out: &mut dyn Write) -> Result<Value> {
        match &expr.kind {
            ExprKind::Literal(literal) => Ok(match literal {
                Literal::None => Value::none(),
                Literal::Bool(b) => Value::bool(*b),
                Literal::Int(n) => Value::int(*n),
                Literal::Str(s) => Value::str(s.clone()),
            }),
            ExprKind::Name(name) => self.globals.get(name).cloned().ok_or_else(|| {
                runtime_error(format!("name '{name}' isn't defined"), expr.span)
            }),
            ExprKind::Attribute { target, name } => {
                let target = self.evaluate(target, out)?;
                self.attribute(&target, name).ok_or_else(|| {
                    runtime_error(
                        format!(
                            "'{}' object has no attribute '{name}'",
                            self.type_of(&target).name
                        ),
                        expr.span,
                    )
                })
            }
            ExprKind::Call { callee, args } => {
                let callee = self.evaluate(callee, out)?;
                let mut values = Vec::with_capacity(args.len());
                for arg in args {
                    values.push(self.evaluate(arg, out)?);
                }
                self.call(&callee, values, out, expr.span)
            }
            ExprKind::Group(inner) => self.evaluate(inner, out),
        }
    }

    fn attribute(&self, target: &Value, name: &str) -> Option<Value> {
        match target.kind() {
            ValueKind::Module(module) => module.globals.get(name).cloned(),
            ValueKind::Type(ty) => ty.member(name).cloned(),
            _ => {
                let member = self.type_of(target).member(name)?.clone();
                if matches!(member.kind(), ValueKind::Function(_)) {
                    Some(Value::bound_method(target.clone(), member))
                } else {
                    Some(member)
                }
            }
        }
    }

    fn call(
        &self,
        callee: &Value,
        mut args: Vec<Value>,
        out: &mut dyn Write,
        span: SourceSpan,
    ) -> Result<Value> {
        match callee.kind() {
            ValueKind::Function(function) => {
                let mut ctx = CallContext { runtime: self, out };
                function
                    .call(&mut ctx, &args)
                    .map_err(|err| with_span(err, span))
            }
            ValueKind::BoundMethod(bound) => {
                args.insert(0, bound.receiver.clone());
                match bound.method.kind() {
                    ValueKind::Function(function) => {
                        let mut ctx = CallContext { runtime: self, out };
                        function
                            .call_bound(&mut ctx, &args)
                            .map_err(|err| with_span(err, span))
                    }
                    _ => self.call(&bound.method, args, out, span),
                }
            }
            _ => Err(runtime_error(
                format!("'{}' object isn't callable", self.type_of(callee).name),
                span,
            )),
        }
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectModel for Runtime {
    fn type_of(&self, value: &Value) -> TypeRef {
        let builtins = &self.builtins;
        match value.kind() {
            ValueKind::None => builtins.none_type.clone(),
            ValueKind::Bool(_) => builtins.bool_type.clone(),
            ValueKind::Int(_) => builtins.int_type.clone(),
            ValueKind::Str(_) => builtins.str_type.clone(),
            ValueKind::Dict(_) => builtins.dict_type.clone(),
            ValueKind::Module(_) => builtins.module_type.clone(),
            ValueKind::Type(_) => builtins.type_type.clone(),
            ValueKind::Instance(instance) => instance.ty.clone(),
            ValueKind::Function(_) => builtins.function_type.clone(),
            ValueKind::BoundMethod(_) => builtins.bound_method_type.clone(),
        }
    }

    fn unwrap_bound_method(&self, value: &Value) -> Value {
        match value.kind() {
            ValueKind::BoundMethod(bound) => bound.method.clone(),
            _ => value.clone(),
        }
    }

    fn repr(&self, value: &Value) -> Result<String> {
        Ok(value.to_string())
    }

    fn member_table(&self, ty: &TypeRef) -> Option<SymbolTableRef> {
        match ty.locals.as_ref().map(Value::kind) {
            Some(ValueKind::Dict(table)) => Some(table.clone()),
            _ => None,
        }
    }

    fn globals_table(&self, module: &Value) -> Option<SymbolTableRef> {
        match module.kind() {
            ValueKind::Module(module) => Some(module.globals.clone()),
            _ => None,
        }
    }
}

fn runtime_error(message: String, span: SourceSpan) -> MicrohelpError {
    MicrohelpError::from(Diagnostic::runtime(message).with_span(span))
}

fn with_span(err: MicrohelpError, span: SourceSpan) -> MicrohelpError {
    match err {
        MicrohelpError::Diagnostic(diag) if diag.span.is_none() => {
            MicrohelpError::Diagnostic(diag.with_span(span))
        }
        other => other,
    }
}
