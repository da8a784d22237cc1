use crate::{
    diagnostics::{Diagnostic, MicrohelpError, Result},
    runtime::CallContext,
    symbols::SymbolTable,
    value::{Arity, NativeCallback, NativeFunction, TypeKind, TypeObject, TypeRef, Value, ValueKind},
};

/// The runtime's own type objects.
pub struct Builtins {
    pub none_type: TypeRef,
    pub bool_type: TypeRef,
    pub int_type: TypeRef,
    pub str_type: TypeRef,
    pub dict_type: TypeRef,
    pub module_type: TypeRef,
    pub type_type: TypeRef,
    pub function_type: TypeRef,
    pub bound_method_type: TypeRef,
}

impl Builtins {
    pub fn new() -> Self {
        let mut str_locals = SymbolTable::new();
        str_locals.define("endswith", native("endswith", Arity::exact(2), str_endswith));
        str_locals.define("find", native("find", Arity::exact(2), str_find));
        str_locals.define("lower", native("lower", Arity::exact(1), str_lower));
        str_locals.define("replace", native("replace", Arity::exact(3), str_replace));
        str_locals.define("startswith", native("startswith", Arity::exact(2), str_startswith));
        str_locals.define("strip", native("strip", Arity::exact(1), str_strip));
        str_locals.define("upper", native("upper", Arity::exact(1), str_upper));

        Self {
            none_type: TypeObject::new("NoneType", TypeKind::Plain),
            bool_type: TypeObject::new("bool", TypeKind::Plain),
            int_type: TypeObject::new("int", TypeKind::Plain),
            str_type: TypeObject::plain("str", str_locals),
            dict_type: TypeObject::new("dict", TypeKind::Plain),
            module_type: TypeObject::new("module", TypeKind::Module),
            type_type: TypeObject::new("type", TypeKind::Type),
            function_type: TypeObject::new("function", TypeKind::Function),
            bound_method_type: TypeObject::new("bound_method", TypeKind::BoundMethod),
        }
    }

    pub fn all(&self) -> [&TypeRef; 9] {
        [
            &self.none_type,
            &self.bool_type,
            &self.int_type,
            &self.str_type,
            &self.dict_type,
            &self.module_type,
            &self.type_type,
            &self.function_type,
            &self.bound_method_type,
        ]
    }
}

impl Default for Builtins {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn native(name: &'static str, arity: Arity, callback: NativeCallback) -> Value {
    Value::function(NativeFunction {
        name,
        arity,
        callback,
    })
}

pub(crate) fn expect_str<'v>(value: &'v Value, name: &str) -> Result<&'v str> {
    value.as_str().ok_or_else(|| {
        MicrohelpError::from(Diagnostic::runtime(format!(
            "`{name}` expected str but found {value:?}"
        )))
    })
}

pub(crate) fn expect_int(value: &Value, name: &str) -> Result<i64> {
    match value.kind() {
        ValueKind::Int(n) => Ok(*n),
        _ => Err(MicrohelpError::from(Diagnostic::runtime(format!(
            "`{name}` expected int but found {value:?}"
        )))),
    }
}

fn str_endswith(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let text = expect_str(&args[0], "str.endswith")?;
    let suffix = expect_str(&args[1], "str.endswith")?;
    Ok(Value::bool(text.ends_with(suffix)))
}

fn str_find(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let text = expect_str(&args[0], "str.find")?;
    let needle = expect_str(&args[1], "str.find")?;
    let index = text
        .find(needle)
        .map(|byte| text[..byte].chars().count() as i64)
        .unwrap_or(-1);
    Ok(Value::int(index))
}

fn str_lower(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let text = expect_str(&args[0], "str.lower")?;
    Ok(Value::str(text.to_lowercase()))
}

fn str_replace(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let text = expect_str(&args[0], "str.replace")?;
    let from = expect_str(&args[1], "str.replace")?;
    let to = expect_str(&args[2], "str.replace")?;
    Ok(Value::str(text.replace(from, to)))
}

fn str_startswith(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let text = expect_str(&args[0], "str.startswith")?;
    let prefix = expect_str(&args[1], "str.startswith")?;
    Ok(Value::bool(text.starts_with(prefix)))
}

fn str_strip(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let text = expect_str(&args[0], "str.strip")?;
    Ok(Value::str(text.trim()))
}

fn str_upper(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let text = expect_str(&args[0], "str.upper")?;
    Ok(Value::str(text.to_uppercase()))
}
