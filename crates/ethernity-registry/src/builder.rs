/*!
 * Construção ponta a ponta do registro a partir dos colaboradores externos
 */

use crate::assembler::{assemble, ConstantsSource};
use crate::config::RegistryConfig;
use crate::registry::Registry;
use ethernity_core::traits::{
    ConstantsResolver, InterfaceResolver, Keccak256Selector, SelectorHasher,
};
use ethernity_core::{AddressTable, Error, Result, VerifierDescriptor};
use ethernity_verifiers::DescriptorBuilder;
use std::collections::HashMap;
use tracing::debug;

/// Resolve constantes e ABIs e monta o registro.
///
/// Qualquer falha aborta a construção inteira: nunca é produzido um
/// registro parcial.
#[derive(Debug, Clone)]
pub struct RegistryBuilder<H = Keccak256Selector> {
    config: RegistryConfig,
    descriptors: DescriptorBuilder<H>,
}

impl RegistryBuilder {
    pub fn new(config: RegistryConfig) -> Self {
        let descriptors = DescriptorBuilder::new(config.token_types.clone());
        Self { config, descriptors }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl<H: SelectorHasher> RegistryBuilder<H> {
    /// Substitui o hash de seletores
    pub fn with_hasher<H2: SelectorHasher>(self, hasher: H2) -> RegistryBuilder<H2> {
        RegistryBuilder {
            config: self.config,
            descriptors: self.descriptors.with_hasher(hasher),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Carrega as tabelas de todas as fontes configuradas, na ordem
    pub fn load_sources<C>(&self, constants: &C) -> Result<Vec<ConstantsSource>>
    where
        C: ConstantsResolver,
    {
        self.config
            .constants_sources
            .iter()
            .map(|source| {
                let table = constants.resolve_constants(&source.package)?;
                Ok(ConstantsSource {
                    package: source.package.clone(),
                    table,
                    filter_deprecated: source.filter_deprecated,
                })
            })
            .collect()
    }

    /// Constrói os descritores de todos os verifiers configurados.
    ///
    /// O endereço de cada verifier vem da tabela sem filtro do seu próprio
    /// pacote; pacotes fora de `sources` são resolvidos sob demanda.
    pub fn build_verifiers<I, C>(
        &self,
        interfaces: &I,
        constants: &C,
        sources: &[ConstantsSource],
    ) -> Result<Vec<VerifierDescriptor>>
    where
        I: InterfaceResolver,
        C: ConstantsResolver,
    {
        let mut tables: HashMap<&str, AddressTable> = sources
            .iter()
            .map(|s| (s.package.as_str(), s.table.clone()))
            .collect();

        let mut descriptors = Vec::with_capacity(self.config.verifiers.len());
        for definition in &self.config.verifiers {
            if !tables.contains_key(definition.package.as_str()) {
                debug!(
                    package = %definition.package,
                    "pacote de verifier fora das fontes, resolvendo"
                );
                let table = constants.resolve_constants(&definition.package)?;
                tables.insert(definition.package.as_str(), table);
            }
            let address = tables
                .get(definition.package.as_str())
                .and_then(|t| t.get(&definition.address_constant))
                .ok_or_else(|| {
                    Error::NotFound(format!(
                        "constante {} no pacote {}",
                        definition.address_constant, definition.package
                    ))
                })?;
            let interface =
                interfaces.resolve_interface(&definition.package, &definition.contract_name)?;
            descriptors.push(self.descriptors.build(definition, address, &interface)?);
        }
        Ok(descriptors)
    }

    /// Executa todas as etapas e devolve o registro completo
    pub fn build<I, C>(&self, interfaces: &I, constants: &C) -> Result<Registry>
    where
        I: InterfaceResolver,
        C: ConstantsResolver,
    {
        let sources = self.load_sources(constants)?;
        let verifiers = self.build_verifiers(interfaces, constants, &sources)?;
        Ok(assemble(
            &sources,
            &self.config.deprecated_verifiers,
            &self.config.well_known_addresses,
            verifiers,
            &self.config.networks,
        ))
    }
}
