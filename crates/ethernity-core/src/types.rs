/*!
 * Ethernity Types
 *
 * Tipos comuns usados em toda a workspace Ethernity: o modelo de ABI
 * consumido, os descritores de verifier produzidos e as tabelas de
 * endereços determinísticos.
 */

use crate::utils::{format_address, hex_to_address};
use ethereum_types::Address;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::trace;

/// Categoria de ativo inferida a partir do `internalType` de um parâmetro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum AssetKind {
    #[serde(rename = "generic")]
    Generic,
    #[serde(rename = "ERC20")]
    FungibleToken,
    #[serde(rename = "ERC721")]
    NonFungibleToken,
    #[serde(rename = "ERC1155")]
    MultiToken,
}

impl AssetKind {
    /// Rótulo publicado no campo `type` do descritor
    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Generic => "generic",
            AssetKind::FungibleToken => "ERC20",
            AssetKind::NonFungibleToken => "ERC721",
            AssetKind::MultiToken => "ERC1155",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for AssetKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Parâmetro de entrada de uma função da ABI
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParameterSpec {
    pub name: String,
    /// Tipo de codificação (`address`, `uint256`, `tuple[]`, ...)
    pub declared_type: String,
    /// `internalType` do compilador, usado apenas para classificação
    pub storage_hint: Option<String>,
    /// Membros de uma tupla; vazio para tipos elementares
    pub components: Vec<ParameterSpec>,
}

impl ParameterSpec {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            ..Default::default()
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.storage_hint = Some(hint.into());
        self
    }

    pub fn with_components(mut self, components: Vec<ParameterSpec>) -> Self {
        self.components = components;
        self
    }
}

/// Formato bruto de uma função da ABI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionEntry {
    pub name: String,
    pub inputs: Vec<ParameterSpec>,
}

impl FunctionEntry {
    pub fn new(name: impl Into<String>, inputs: Vec<ParameterSpec>) -> Self {
        Self { name: name.into(), inputs }
    }
}

/// Superfície chamável de um contrato, na ordem da ABI
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InterfaceDefinition {
    functions: Vec<FunctionEntry>,
}

impl InterfaceDefinition {
    pub fn new(functions: Vec<FunctionEntry>) -> Self {
        Self { functions }
    }

    pub fn functions(&self) -> &[FunctionEntry] {
        &self.functions
    }

    /// Primeira entrada com o nome dado.
    ///
    /// Sobrecargas com o mesmo nome não são desambiguadas: vence a primeira
    /// na ordem da ABI.
    pub fn find_function(&self, name: &str) -> Option<&FunctionEntry> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// Quantidade de entradas com o nome dado
    pub fn count_named(&self, name: &str) -> usize {
        self.functions.iter().filter(|f| f.name == name).count()
    }
}

impl From<Vec<FunctionEntry>> for InterfaceDefinition {
    fn from(functions: Vec<FunctionEntry>) -> Self {
        Self::new(functions)
    }
}

/// Tipo publicado de um parâmetro: o tipo de wire ou uma categoria de ativo
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    Wire(String),
    Asset(AssetKind),
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Wire(t) => f.write_str(t),
            ParamType::Asset(kind) => f.write_str(kind.label()),
        }
    }
}

impl Serialize for ParamType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Descrição de um parâmetro de verifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ParamType,
    /// Verdadeiro quando o parâmetro faz parte da mensagem assinada
    pub signed: bool,
}

/// Seletor de função de 4 bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selector(pub [u8; 4]);

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Serialize for Selector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Descritor de uma função de verifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifierDescriptor {
    pub function_name: String,
    pub function_signature: String,
    pub function_signature_hash: Selector,
    pub contract_name: String,
    pub contract_address: Address,
    pub param_types: Vec<ParamDescriptor>,
}

/// Tabela de endereços determinísticos indexada por nome simbólico.
///
/// Preserva a ordem de inserção. Sobrescrever uma chave existente mantém a
/// posição original e troca apenas o valor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressTable {
    entries: Vec<(String, Address)>,
}

impl AddressTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insere ou sobrescreve; retorna o valor anterior, se houver
    pub fn insert(&mut self, name: impl Into<String>, address: Address) -> Option<Address> {
        let name = name.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == name) {
            trace!(
                %name,
                old = %format_address(&slot.1),
                new = %format_address(&address),
                "sobrescrevendo endereço"
            );
            return Some(std::mem::replace(&mut slot.1, address));
        }
        self.entries.push((name, address));
        None
    }

    pub fn get(&self, name: &str) -> Option<Address> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| *v)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Address)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Mescla `other` por cima desta tabela (último a escrever vence)
    pub fn merge_from(&mut self, other: &AddressTable) {
        for (name, address) in other.iter() {
            self.insert(name, *address);
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Address)> for AddressTable {
    fn from_iter<I: IntoIterator<Item = (K, Address)>>(iter: I) -> Self {
        let mut table = AddressTable::new();
        for (name, address) in iter {
            table.insert(name, address);
        }
        table
    }
}

impl Serialize for AddressTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, address) in &self.entries {
            map.serialize_entry(name, address)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AddressTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = AddressTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("um objeto de nome para endereço")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut table = AddressTable::new();
                while let Some((name, raw)) = access.next_entry::<String, String>()? {
                    let address = hex_to_address(&raw).ok_or_else(|| {
                        serde::de::Error::custom(format!("endereço inválido para {name}: {raw}"))
                    })?;
                    table.insert(name, address);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}
