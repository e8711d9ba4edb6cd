//! Decoding of JSON ABIs and Hardhat artifacts into interface definitions.
//!
//! Only `function` entries are kept. Missing required fields are rejected,
//! never defaulted.

use ethernity_core::{Error, FunctionEntry, InterfaceDefinition, ParameterSpec, Result};
use ethers::abi::{Abi, Function, Param, ParamType as EthParamType};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(rename = "type")]
    entry_type: Option<String>,
    name: Option<String>,
    inputs: Option<Vec<RawParam>>,
}

#[derive(Debug, Deserialize)]
struct RawParam {
    name: Option<String>,
    #[serde(rename = "type")]
    param_type: Option<String>,
    #[serde(rename = "internalType")]
    internal_type: Option<String>,
    components: Option<Vec<RawParam>>,
}

/// Parses either a bare ABI array or an artifact object with an `abi` field.
pub fn parse_abi_json(json: &str) -> Result<InterfaceDefinition> {
    let value: Value = serde_json::from_str(json)?;
    interface_from_value(value)
}

/// Same as [`parse_abi_json`] over an already parsed JSON value.
pub fn interface_from_value(value: Value) -> Result<InterfaceDefinition> {
    let abi = match value {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut obj) => obj
            .remove("abi")
            .ok_or_else(|| Error::MalformedInput("artifact has no `abi` field".into()))?,
        other => {
            return Err(Error::MalformedInput(format!(
                "expected an ABI array or artifact object, got {other}"
            )))
        }
    };
    let entries: Vec<RawEntry> = serde_json::from_value(abi)
        .map_err(|e| Error::MalformedInput(format!("invalid ABI entry: {e}")))?;

    let mut functions = Vec::new();
    for (idx, entry) in entries.into_iter().enumerate() {
        // the ABI format defaults a missing `type` to "function"
        if entry.entry_type.as_deref().unwrap_or("function") != "function" {
            continue;
        }
        functions.push(function_entry(idx, entry)?);
    }
    Ok(InterfaceDefinition::new(functions))
}

fn function_entry(idx: usize, entry: RawEntry) -> Result<FunctionEntry> {
    let name = entry
        .name
        .ok_or_else(|| Error::MalformedInput(format!("ABI function #{idx} has no name")))?;
    let inputs = entry
        .inputs
        .ok_or_else(|| Error::MalformedInput(format!("ABI function `{name}` has no inputs")))?;
    let inputs = inputs
        .into_iter()
        .enumerate()
        .map(|(pos, raw)| parameter(&name, pos, raw))
        .collect::<Result<Vec<_>>>()?;
    Ok(FunctionEntry::new(name, inputs))
}

fn parameter(function: &str, pos: usize, raw: RawParam) -> Result<ParameterSpec> {
    let name = raw.name.ok_or_else(|| {
        Error::MalformedInput(format!("input #{pos} of `{function}` has no name"))
    })?;
    let declared_type = raw.param_type.ok_or_else(|| {
        Error::MalformedInput(format!("input `{name}` of `{function}` has no type"))
    })?;
    let components = match raw.components {
        Some(components) => components
            .into_iter()
            .enumerate()
            .map(|(i, c)| parameter(function, i, c))
            .collect::<Result<Vec<_>>>()?,
        None if declared_type.starts_with("tuple") => {
            return Err(Error::MalformedInput(format!(
                "tuple input `{name}` of `{function}` has no components"
            )))
        }
        None => Vec::new(),
    };
    Ok(ParameterSpec {
        name,
        declared_type,
        storage_hint: raw.internal_type,
        components,
    })
}

/// Converts an ethers parameter.
///
/// Tuples are reported as `tuple` (plus any array suffix) with their members
/// as components, the same shape [`parse_abi_json`] produces. ethers keeps no
/// member names, so components are unnamed.
pub fn parameter_from_ethers(param: &Param) -> ParameterSpec {
    let (declared_type, components) = wire_type(&param.kind);
    ParameterSpec {
        name: param.name.clone(),
        declared_type,
        storage_hint: param.internal_type.clone(),
        components,
    }
}

fn wire_type(kind: &EthParamType) -> (String, Vec<ParameterSpec>) {
    match kind {
        EthParamType::Tuple(members) => {
            let components = members
                .iter()
                .map(|member| {
                    let (declared_type, components) = wire_type(member);
                    ParameterSpec {
                        declared_type,
                        components,
                        ..Default::default()
                    }
                })
                .collect();
            ("tuple".to_string(), components)
        }
        EthParamType::Array(inner) => {
            let (base, components) = wire_type(inner);
            (format!("{base}[]"), components)
        }
        EthParamType::FixedArray(inner, len) => {
            let (base, components) = wire_type(inner);
            (format!("{base}[{len}]"), components)
        }
        other => (other.to_string(), Vec::new()),
    }
}

pub fn function_from_ethers(function: &Function) -> FunctionEntry {
    FunctionEntry::new(
        function.name.clone(),
        function.inputs.iter().map(parameter_from_ethers).collect(),
    )
}

/// Converts an ethers ABI. Functions come out ordered by name, then by
/// declaration order among overloads.
pub fn interface_from_ethers(abi: &Abi) -> InterfaceDefinition {
    InterfaceDefinition::new(abi.functions().map(function_from_ethers).collect())
}

/// Builds an interface from human-readable signatures such as
/// `function cancel(uint256 bitmapIndex, uint256 bit)`.
pub fn parse_human_readable(signatures: &[&str]) -> Result<InterfaceDefinition> {
    let abi = ethers::abi::parse_abi(signatures)
        .map_err(|e| Error::MalformedInput(format!("invalid human-readable ABI: {e}")))?;
    Ok(interface_from_ethers(&abi))
}
