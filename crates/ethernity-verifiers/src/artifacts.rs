//! Resolvers for contract interfaces and address constants.

use crate::abi::parse_abi_json;
use ethernity_core::traits::{ConstantsResolver, InterfaceResolver};
use ethernity_core::{AddressTable, Error, InterfaceDefinition, Result};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of a package's address constants, relative to the package root.
pub const CONSTANTS_FILE: &str = "constants.json";

/// Reads Hardhat artifacts and constants files from a packages directory
/// (typically `node_modules/@brinkninja`).
///
/// Layout:
/// - `{root}/{package}/artifacts/contracts/Verifiers/{C}.sol/{C}.json`
/// - `{root}/{package}/constants.json`
#[derive(Debug, Clone)]
pub struct ArtifactDirectory {
    root: PathBuf,
}

impl ArtifactDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn artifact_path(&self, package: &str, contract: &str) -> PathBuf {
        self.root
            .join(package)
            .join("artifacts")
            .join("contracts")
            .join("Verifiers")
            .join(format!("{contract}.sol"))
            .join(format!("{contract}.json"))
    }

    pub fn constants_path(&self, package: &str) -> PathBuf {
        self.root.join(package).join(CONSTANTS_FILE)
    }

    fn read(path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::NotFound(path.display().to_string()),
            _ => Error::Io(e),
        })
    }
}

impl InterfaceResolver for ArtifactDirectory {
    fn resolve_interface(&self, package: &str, contract: &str) -> Result<InterfaceDefinition> {
        let path = self.artifact_path(package, contract);
        debug!(path = %path.display(), "loading artifact");
        let json = Self::read(&path)?;
        parse_abi_json(&json).map_err(|e| match e {
            Error::MalformedInput(msg) | Error::DecodeError(msg) => {
                Error::MalformedInput(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }
}

impl ConstantsResolver for ArtifactDirectory {
    fn resolve_constants(&self, package: &str) -> Result<AddressTable> {
        let path = self.constants_path(package);
        debug!(path = %path.display(), "loading constants");
        let json = Self::read(&path)?;
        serde_json::from_str(&json)
            .map_err(|e| Error::MalformedInput(format!("{}: {e}", path.display())))
    }
}

/// In-memory resolver, for callers that already hold the data.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    interfaces: HashMap<(String, String), InterfaceDefinition>,
    constants: HashMap<String, AddressTable>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interface(
        mut self,
        package: &str,
        contract: &str,
        interface: InterfaceDefinition,
    ) -> Self {
        self.interfaces
            .insert((package.to_string(), contract.to_string()), interface);
        self
    }

    pub fn with_constants(mut self, package: &str, table: AddressTable) -> Self {
        self.constants.insert(package.to_string(), table);
        self
    }
}

impl InterfaceResolver for StaticResolver {
    fn resolve_interface(&self, package: &str, contract: &str) -> Result<InterfaceDefinition> {
        self.interfaces
            .get(&(package.to_string(), contract.to_string()))
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("interface {package}/{contract}")))
    }
}

impl ConstantsResolver for StaticResolver {
    fn resolve_constants(&self, package: &str) -> Result<AddressTable> {
        self.constants
            .get(package)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("constants of {package}")))
    }
}
