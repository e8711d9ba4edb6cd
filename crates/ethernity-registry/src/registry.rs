/*!
 * Registro montado: uma configuração por rede
 */

use ethernity_core::utils::to_json_pretty;
use ethernity_core::{Address, AddressTable, Result, VerifierDescriptor};
use once_cell::sync::OnceCell;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::sync::Arc;
use tracing::warn;

/// Campos explícitos da rede; sombreiam entradas homônimas da tabela
const NETWORK_FIELDS: [&str; 5] = ["VERIFIERS", "CHAIN_ID", "NETWORK", "ETHERSCAN_DOMAIN", "WETH9"];

/// Configuração publicada para uma rede.
///
/// A tabela de endereços e a lista de verifiers são compartilhadas entre
/// todas as redes do mesmo registro.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkConfig {
    addresses: Arc<AddressTable>,
    verifiers: Arc<[VerifierDescriptor]>,
    pub chain_id: u64,
    pub network: String,
    pub etherscan_domain: String,
    pub weth9: Address,
}

impl NetworkConfig {
    pub fn new(
        addresses: Arc<AddressTable>,
        verifiers: Arc<[VerifierDescriptor]>,
        chain_id: u64,
        network: String,
        etherscan_domain: String,
        weth9: Address,
    ) -> Self {
        Self { addresses, verifiers, chain_id, network, etherscan_domain, weth9 }
    }

    pub fn addresses(&self) -> &AddressTable {
        &self.addresses
    }

    pub fn verifiers(&self) -> &[VerifierDescriptor] {
        &self.verifiers
    }

    /// Endereço de uma constante simbólica (`CANCEL_VERIFIER`, `WETH9`, ...)
    pub fn address(&self, name: &str) -> Option<Address> {
        match name {
            "WETH9" => Some(self.weth9),
            _ => self.addresses.get(name),
        }
    }

    /// Verdadeiro quando ambas apontam para a mesma tabela e lista de verifiers
    pub fn shares_data_with(&self, other: &NetworkConfig) -> bool {
        Arc::ptr_eq(&self.addresses, &other.addresses)
            && Arc::ptr_eq(&self.verifiers, &other.verifiers)
    }
}

impl Serialize for NetworkConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (name, address) in self.addresses.iter() {
            if !NETWORK_FIELDS.contains(&name) {
                map.serialize_entry(name, address)?;
            }
        }
        map.serialize_entry("VERIFIERS", &*self.verifiers)?;
        map.serialize_entry("CHAIN_ID", &self.chain_id)?;
        map.serialize_entry("NETWORK", &self.network)?;
        map.serialize_entry("ETHERSCAN_DOMAIN", &self.etherscan_domain)?;
        map.serialize_entry("WETH9", &self.weth9)?;
        map.end()
    }
}

/// Mapeamento chave de rede → configuração, na ordem das redes configuradas
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Registry {
    entries: Vec<(String, NetworkConfig)>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra uma rede; uma chave repetida substitui a anterior no lugar
    pub fn insert(&mut self, key: impl Into<String>, config: NetworkConfig) {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            warn!(%key, "rede repetida no registro, substituindo");
            slot.1 = config;
            return;
        }
        self.entries.push((key, config));
    }

    pub fn get(&self, key: &str) -> Option<&NetworkConfig> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NetworkConfig)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exporta o registro no formato consumido pelos clientes
    pub fn to_json_pretty(&self) -> Result<String> {
        to_json_pretty(self)
    }
}

impl Serialize for Registry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, config) in &self.entries {
            map.serialize_entry(key, config)?;
        }
        map.end()
    }
}

/// Registro construído no máximo uma vez.
///
/// Leitores concorrentes só observam o registro completo; uma construção
/// que falha não é memorizada e pode ser tentada de novo.
#[derive(Debug, Default)]
pub struct RegistryCell {
    cell: OnceCell<Arc<Registry>>,
}

impl RegistryCell {
    pub const fn new() -> Self {
        Self { cell: OnceCell::new() }
    }

    pub fn get(&self) -> Option<Arc<Registry>> {
        self.cell.get().cloned()
    }

    pub fn get_or_try_init<F>(&self, build: F) -> Result<Arc<Registry>>
    where
        F: FnOnce() -> Result<Registry>,
    {
        self.cell
            .get_or_try_init(|| build().map(Arc::new))
            .cloned()
    }
}
