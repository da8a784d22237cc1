use std::{fmt, rc::Rc};

use crate::{
    diagnostics::{Diagnostic, MicrohelpError, Result},
    runtime::CallContext,
    symbols::{SymbolTable, SymbolTableRef},
};

#[derive(Clone)]
pub struct Value(pub Rc<ValueKind>);

impl Value {
    pub fn new(kind: ValueKind) -> Self {
        Self(Rc::new(kind))
    }

    pub fn none() -> Self {
        Self::new(ValueKind::None)
    }

    pub fn bool(value: bool) -> Self {
        Self::new(ValueKind::Bool(value))
    }

    pub fn int(value: i64) -> Self {
        Self::new(ValueKind::Int(value))
    }

    pub fn str(value: impl Into<String>) -> Self {
        Self::new(ValueKind::Str(value.into()))
    }

    pub fn dict(entries: SymbolTable) -> Self {
        Self::new(ValueKind::Dict(entries.into_ref()))
    }

    pub fn module(name: impl Into<String>, globals: SymbolTable) -> Self {
        Self::new(ValueKind::Module(ModuleValue {
            name: name.into(),
            globals: globals.into_ref(),
        }))
    }

    pub fn ty(ty: TypeRef) -> Self {
        Self::new(ValueKind::Type(ty))
    }

    pub fn instance(ty: TypeRef) -> Self {
        Self::new(ValueKind::Instance(Instance { ty }))
    }

    pub fn function(function: NativeFunction) -> Self {
        Self::new(ValueKind::Function(function))
    }

    pub fn bound_method(receiver: Value, method: Value) -> Self {
        Self::new(ValueKind::BoundMethod(BoundMethod { receiver, method }))
    }

    pub fn kind(&self) -> &ValueKind {
        &self.0
    }

    /// Object identity. Handles wrapping the same type object are identical.
    pub fn is(&self, other: &Value) -> bool {
        match (&*self.0, &*other.0) {
            (ValueKind::Type(a), ValueKind::Type(b)) => Rc::ptr_eq(a, b),
            _ => Rc::ptr_eq(&self.0, &other.0),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(&*self.0, ValueKind::None)
    }

    pub fn as_type(&self) -> Option<&TypeRef> {
        match &*self.0 {
            ValueKind::Type(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &*self.0 {
            ValueKind::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.0 {
            ValueKind::Str(s) => write!(f, "'{s}'"),
            ValueKind::Dict(table) => f
                .debug_map()
                .entries(table.iter().map(|b| (&b.name, &b.value)))
                .finish(),
            _ => write!(f, "{self}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.0 {
            ValueKind::None => write!(f, "None"),
            ValueKind::Bool(true) => write!(f, "True"),
            ValueKind::Bool(false) => write!(f, "False"),
            ValueKind::Int(n) => write!(f, "{n}"),
            ValueKind::Str(s) => write!(f, "{s}"),
            ValueKind::Dict(table) => {
                write!(f, "{{")?;
                for (idx, binding) in table.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "'{}': {:?}", binding.name, binding.value)?;
                }
                write!(f, "}}")
            }
            ValueKind::Module(module) => write!(f, "<module '{}'>", module.name),
            ValueKind::Type(ty) => write!(f, "<class '{}'>", ty.name),
            ValueKind::Instance(instance) => write!(f, "<{} object>", instance.ty.name),
            ValueKind::Function(fun) => write!(f, "<function {}>", fun.name),
            ValueKind::BoundMethod(bound) => {
                write!(f, "<bound_method {} of {}>", bound.method, bound.receiver)
            }
        }
    }
}

#[derive(Clone)]
pub enum ValueKind {
    None,
    Bool(bool),
    Int(i64),
    Str(String),
    Dict(SymbolTableRef),
    Module(ModuleValue),
    Type(TypeRef),
    Instance(Instance),
    Function(NativeFunction),
    BoundMethod(BoundMethod),
}

#[derive(Clone)]
pub struct ModuleValue {
    pub name: String,
    pub globals: SymbolTableRef,
}

pub type TypeRef = Rc<TypeObject>;

/// Which of the runtime's special type families a type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Module,
    Type,
    BoundMethod,
    Function,
    Plain,
}

pub struct TypeObject {
    pub name: String,
    pub kind: TypeKind,
    /// Class-level members. Usually a dict, but nothing forces that.
    pub locals: Option<Value>,
}

impl TypeObject {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> TypeRef {
        Rc::new(Self {
            name: name.into(),
            kind,
            locals: None,
        })
    }

    pub fn plain(name: impl Into<String>, locals: SymbolTable) -> TypeRef {
        Self::with_locals(name, TypeKind::Plain, Value::dict(locals))
    }

    pub fn with_locals(name: impl Into<String>, kind: TypeKind, locals: Value) -> TypeRef {
        Rc::new(Self {
            name: name.into(),
            kind,
            locals: Some(locals),
        })
    }

    pub fn member(&self, name: &str) -> Option<&Value> {
        match self.locals.as_ref().map(Value::kind) {
            Some(ValueKind::Dict(table)) => table.get(name),
            _ => None,
        }
    }
}

impl fmt::Debug for TypeObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeObject")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

#[derive(Clone)]
pub struct Instance {
    pub ty: TypeRef,
}

#[derive(Clone)]
pub struct BoundMethod {
    pub receiver: Value,
    pub method: Value,
}

pub type NativeCallback = fn(&mut CallContext<'_>, &[Value]) -> Result<Value>;

/// Accepted positional argument counts, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    pub min: usize,
    pub max: usize,
}

impl Arity {
    pub const fn exact(count: usize) -> Self {
        Self {
            min: count,
            max: count,
        }
    }

    pub const fn between(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn accepts(&self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }

    /// Describes the accepted counts with `implicit` leading arguments left out.
    fn expectation(&self, implicit: usize) -> String {
        let min = self.min.saturating_sub(implicit);
        let max = self.max.saturating_sub(implicit);
        if min == max {
            format!("{min} arguments")
        } else if min == 0 {
            format!("at most {max} arguments")
        } else {
            format!("between {min} and {max} arguments")
        }
    }
}

#[derive(Clone)]
pub struct NativeFunction {
    pub name: &'static str,
    pub arity: Arity,
    pub callback: NativeCallback,
}

impl NativeFunction {
    pub fn call(&self, ctx: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
        self.invoke(ctx, args, 0)
    }

    /// Calls the function as a method. `args[0]` is the receiver, which
    /// arity errors leave out of both counts.
    pub fn call_bound(&self, ctx: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
        self.invoke(ctx, args, 1)
    }

    fn invoke(&self, ctx: &mut CallContext<'_>, args: &[Value], implicit: usize) -> Result<Value> {
        if !self.arity.accepts(args.len()) {
            return Err(MicrohelpError::from(Diagnostic::runtime(format!(
                "function `{}` expected {} but received {}",
                self.name,
                self.arity.expectation(implicit),
                args.len().saturating_sub(implicit)
            ))));
        }
        (self.callback)(ctx, args)
    }
}
