//! The slice of the object model the help facility consumes.

use crate::{
    diagnostics::Result,
    symbols::SymbolTableRef,
    value::{TypeKind, TypeRef, Value},
};

/// Introspection capabilities supplied by the host runtime.
///
/// Every operation is expected to be total over runtime values except
/// `repr`, whose failures are handed back to the caller untouched.
pub trait ObjectModel {
    fn type_of(&self, value: &Value) -> TypeRef;

    fn is_bound_method(&self, ty: &TypeRef) -> bool {
        ty.kind == TypeKind::BoundMethod
    }

    /// Returns the callable a bound method wraps, or the value itself when
    /// it is not a bound method.
    fn unwrap_bound_method(&self, value: &Value) -> Value;

    /// Printable form used when echoing names, values and objects.
    fn repr(&self, value: &Value) -> Result<String>;

    /// The type's own member table, if it has one that is a dict.
    fn member_table(&self, ty: &TypeRef) -> Option<SymbolTableRef>;

    fn globals_table(&self, module: &Value) -> Option<SymbolTableRef>;
}
