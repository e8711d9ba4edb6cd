/*!
 * Montagem do registro a partir das tabelas de constantes e descritores
 */

use crate::deprecation::filter_deprecated;
use crate::network::NetworkSpec;
use crate::registry::{NetworkConfig, Registry};
use ethernity_core::{AddressTable, VerifierDescriptor};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Tabela de constantes de um pacote, pronta para mesclagem
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantsSource {
    pub package: String,
    pub table: AddressTable,
    /// Fonte de constantes de verifiers legados: passa pelo filtro de aposentados
    pub filter_deprecated: bool,
}

impl ConstantsSource {
    pub fn new(package: impl Into<String>, table: AddressTable) -> Self {
        Self { package: package.into(), table, filter_deprecated: false }
    }

    pub fn legacy(package: impl Into<String>, table: AddressTable) -> Self {
        Self { filter_deprecated: true, ..Self::new(package, table) }
    }
}

/// Mescla da esquerda para a direita; em colisão, a tabela posterior vence
pub fn merge_tables<'a>(tables: impl IntoIterator<Item = &'a AddressTable>) -> AddressTable {
    let mut merged = AddressTable::new();
    for table in tables {
        merged.merge_from(table);
    }
    merged
}

/// Mescla as fontes (filtrando as legadas) e, por último, os endereços externos
pub fn merge_sources(
    sources: &[ConstantsSource],
    deprecated: &HashSet<String>,
    well_known: &AddressTable,
) -> AddressTable {
    let mut merged = AddressTable::new();
    for source in sources {
        if source.filter_deprecated {
            merged.merge_from(&filter_deprecated(&source.table, deprecated));
        } else {
            merged.merge_from(&source.table);
        }
        debug!(package = %source.package, entries = source.table.len(), "constantes mescladas");
    }
    merged.merge_from(well_known);
    merged
}

/// Produz uma configuração por rede sobre a mesma tabela e lista de verifiers
pub fn assemble(
    sources: &[ConstantsSource],
    deprecated: &HashSet<String>,
    well_known: &AddressTable,
    verifiers: Vec<VerifierDescriptor>,
    networks: &[NetworkSpec],
) -> Registry {
    let addresses = Arc::new(merge_sources(sources, deprecated, well_known));
    let verifiers: Arc<[VerifierDescriptor]> = verifiers.into();

    let mut registry = Registry::new();
    for spec in networks {
        registry.insert(
            spec.key.clone(),
            NetworkConfig::new(
                Arc::clone(&addresses),
                Arc::clone(&verifiers),
                spec.chain_id,
                spec.network.clone(),
                spec.etherscan_domain.clone(),
                spec.weth9,
            ),
        );
    }

    info!(
        networks = registry.len(),
        addresses = addresses.len(),
        verifiers = verifiers.len(),
        "registro montado"
    );
    registry
}
