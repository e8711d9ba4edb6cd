//! Canonical function signatures in the form used for selector hashing.

use ethernity_core::{Error, FunctionEntry, ParameterSpec, Result};

/// Renders the canonical wire type of a parameter.
///
/// `uint`/`int` aliases expand to their 256-bit form and tuples expand to
/// their component list, keeping any array suffix (`tuple[]` → `(..)[]`).
pub fn canonical_type(param: &ParameterSpec) -> Result<String> {
    let declared = param.declared_type.trim();
    if declared.is_empty() {
        return Err(Error::MalformedInput(format!(
            "parameter `{}` has an empty type",
            param.name
        )));
    }

    if let Some(suffix) = declared.strip_prefix("tuple") {
        if param.components.is_empty() {
            return Err(Error::MalformedInput(format!(
                "tuple parameter `{}` has no components",
                param.name
            )));
        }
        let inner = param
            .components
            .iter()
            .map(canonical_type)
            .collect::<Result<Vec<_>>>()?;
        return Ok(format!("({}){}", inner.join(","), suffix));
    }

    let (base, suffix) = match declared.find('[') {
        Some(idx) => declared.split_at(idx),
        None => (declared, ""),
    };
    let base = match base {
        "uint" => "uint256",
        "int" => "int256",
        other => other,
    };
    Ok(format!("{base}{suffix}"))
}

/// `name(type1,type2,...)` over the declared wire types.
pub fn function_signature(entry: &FunctionEntry) -> Result<String> {
    let types = entry
        .inputs
        .iter()
        .map(canonical_type)
        .collect::<Result<Vec<_>>>()?;
    Ok(format!("{}({})", entry.name, types.join(",")))
}
