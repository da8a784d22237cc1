//! The `help()` builtin.
//!
//! `help()` prints the welcome text. `help(x)` unwraps a bound method to
//! the callable behind it, prints registered documentation when the value
//! or its type has an entry, and otherwise prints a header naming the
//! object and its type followed by one line per member of the relevant
//! symbol table.

use std::io::Write;

use tracing::debug;

use crate::{
    builtins::native,
    diagnostics::Result,
    docs::DocRegistry,
    host::ObjectModel,
    runtime::CallContext,
    value::{Arity, TypeKind, TypeRef, Value},
};

pub struct HelpResolver<'a, H: ObjectModel + ?Sized> {
    host: &'a H,
    docs: &'a DocRegistry,
    welcome: &'a str,
}

impl<'a, H: ObjectModel + ?Sized> HelpResolver<'a, H> {
    pub fn new(host: &'a H, docs: &'a DocRegistry, welcome: &'a str) -> Self {
        Self {
            host,
            docs,
            welcome,
        }
    }

    pub fn help(&self, arg: Option<&Value>, out: &mut dyn Write) -> Result<()> {
        let Some(arg) = arg else {
            debug!("help without argument");
            out.write_all(self.welcome.as_bytes())?;
            return Ok(());
        };

        let mut value = arg.clone();
        let mut ty = self.host.type_of(&value);
        if self.host.is_bound_method(&ty) {
            value = self.host.unwrap_bound_method(&value);
            ty = self.host.type_of(&value);
        }

        if let Some(text) = self.docs.find_by_value_or_type(&value, &ty) {
            debug!(type_name = %ty.name, "documentation entry found");
            out.write_all(text.as_bytes())?;
            return Ok(());
        }

        self.describe(&value, &ty, out)
    }

    fn describe(&self, value: &Value, ty: &TypeRef, out: &mut dyn Write) -> Result<()> {
        let repr = self.host.repr(value)?;
        writeln!(out, "object {repr} is of type {}", ty.name)?;

        let table = match ty.kind {
            TypeKind::Module => self.host.globals_table(value),
            TypeKind::Type => value.as_type().and_then(|own| self.host.member_table(own)),
            TypeKind::BoundMethod | TypeKind::Function | TypeKind::Plain => {
                self.host.member_table(ty)
            }
        };
        let Some(table) = table else {
            debug!(type_name = %ty.name, "no member table to list");
            return Ok(());
        };

        debug!(type_name = %ty.name, members = table.len(), "listing members");
        for binding in table.slots().flatten() {
            let value = self.host.repr(&binding.value)?;
            print_entry(out, &binding.name, &value)?;
        }
        Ok(())
    }
}

/// Writes one `  <name> -- <value>` line.
pub fn print_entry(out: &mut dyn Write, name: &str, value: &str) -> std::io::Result<()> {
    writeln!(out, "  {name} -- {value}")
}

pub(crate) fn builtin() -> Value {
    native("help", Arity::between(0, 1), builtin_help)
}

fn builtin_help(ctx: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let runtime = ctx.runtime;
    HelpResolver::new(runtime, runtime.docs(), runtime.welcome()).help(args.first(), &mut *ctx.out)?;
    Ok(Value::none())
}
