/*!
 * Configuração do registro
 *
 * O `Default` corresponde à release atual dos pacotes Brink; `legacy()`
 * reproduz a primeira release, que publicava apenas o pacote `verifiers`.
 */

use crate::deprecation::DEPRECATED_VERIFIERS;
use crate::network::default_networks;
use crate::network::NetworkSpec;
use ethereum_types::H160;
use ethernity_core::{Address, AddressTable, Error, Result};
use ethernity_verifiers::definitions::{VERIFIERS_PACKAGE, VERIFIERS_V2_PACKAGE};
use ethernity_verifiers::{current_verifiers, legacy_verifiers, TokenTypes, VerifierDefinition};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

pub const UNISWAP_V2_FACTORY: Address = H160([
    0x5c, 0x69, 0xbe, 0xe7, 0x01, 0xef, 0x81, 0x4a, 0x2b, 0x6a, 0x3e, 0xdd, 0x4b, 0x16, 0x52, 0xcb,
    0x9c, 0xc5, 0xaa, 0x6f,
]);

pub const UNISWAP_V2_ROUTER_02: Address = H160([
    0x7a, 0x25, 0x0d, 0x56, 0x30, 0xb4, 0xcf, 0x53, 0x97, 0x39, 0xdf, 0x2c, 0x5d, 0xac, 0xb4, 0xc6,
    0x59, 0xf2, 0x48, 0x8d,
]);

pub const UNISWAP_V3_FACTORY: Address = H160([
    0x1f, 0x98, 0x43, 0x1c, 0x8a, 0xd9, 0x85, 0x23, 0x63, 0x1a, 0xe4, 0xa5, 0x9f, 0x26, 0x73, 0x46,
    0xea, 0x31, 0xf9, 0x84,
]);

/// Pacotes de constantes da release atual, na ordem de mesclagem
const CURRENT_SOURCES: [&str; 9] = [
    "core",
    "adapters",
    "1inch-adapter",
    "nft-adapter",
    "univ3-adapter",
    "strategy-adapters",
    VERIFIERS_PACKAGE,
    VERIFIERS_V2_PACKAGE,
    "strategies",
];

/// Pacotes de constantes da primeira release
const LEGACY_SOURCES: [&str; 6] = [
    "core",
    "adapters",
    "1inch-adapter",
    "nft-adapter",
    "univ3-adapter",
    VERIFIERS_PACKAGE,
];

/// Um pacote cuja tabela de constantes entra no registro
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConstantsSourceConfig {
    pub package: String,
    /// Aplica o filtro de verifiers aposentados antes de mesclar
    #[serde(default)]
    pub filter_deprecated: bool,
}

impl ConstantsSourceConfig {
    pub fn new(package: &str, filter_deprecated: bool) -> Self {
        Self { package: package.to_string(), filter_deprecated }
    }
}

/// Configuração completa do registro
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Nomes de tokens procurados no `internalType` dos parâmetros
    pub token_types: TokenTypes,
    /// Constantes removidas das fontes marcadas com `filter_deprecated`
    pub deprecated_verifiers: HashSet<String>,
    /// Fontes de constantes, mescladas da esquerda para a direita
    pub constants_sources: Vec<ConstantsSourceConfig>,
    /// Endereços externos mesclados por último
    pub well_known_addresses: AddressTable,
    /// Funções de verifier publicadas em `VERIFIERS`
    pub verifiers: Vec<VerifierDefinition>,
    pub networks: Vec<NetworkSpec>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            token_types: TokenTypes::default(),
            deprecated_verifiers: DEPRECATED_VERIFIERS.iter().map(|s| s.to_string()).collect(),
            constants_sources: CURRENT_SOURCES
                .iter()
                .map(|p| ConstantsSourceConfig::new(p, *p == VERIFIERS_PACKAGE))
                .collect(),
            well_known_addresses: well_known_addresses(),
            verifiers: current_verifiers(),
            networks: default_networks(),
        }
    }
}

impl RegistryConfig {
    /// Perfil da primeira release: sem filtro de aposentados
    pub fn legacy() -> Self {
        Self {
            deprecated_verifiers: HashSet::new(),
            constants_sources: LEGACY_SOURCES
                .iter()
                .map(|p| ConstantsSourceConfig::new(p, false))
                .collect(),
            verifiers: legacy_verifiers(),
            ..Self::default()
        }
    }

    /// Lê a configuração de um JSON; campos ausentes usam o `Default`
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::MalformedInput(format!("configuração inválida: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }
}

/// Fábricas e roteadores da Uniswap publicados em todas as redes
pub fn well_known_addresses() -> AddressTable {
    [
        ("UNISWAP_V2_FACTORY", UNISWAP_V2_FACTORY),
        ("UNISWAP_V2_ROUTER_02", UNISWAP_V2_ROUTER_02),
        ("UNISWAP_V3_FACTORY", UNISWAP_V3_FACTORY),
    ]
    .into_iter()
    .collect()
}
