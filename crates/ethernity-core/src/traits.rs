/*!
 * Ethernity Traits
 *
 * Pontos de injeção para os colaboradores externos do registro
 */

use crate::error::Result;
use crate::types::{AddressTable, InterfaceDefinition, Selector};
use crate::utils::function_selector;

/// Fonte das ABIs dos contratos, indexada por (pacote, contrato)
pub trait InterfaceResolver {
    /// Obtém a definição de interface de um contrato
    fn resolve_interface(&self, package: &str, contract: &str) -> Result<InterfaceDefinition>;
}

/// Fonte das tabelas de constantes de endereço, indexada por pacote
pub trait ConstantsResolver {
    /// Obtém a tabela de endereços publicada por um pacote
    fn resolve_constants(&self, package: &str) -> Result<AddressTable>;
}

/// Deriva o seletor de uma assinatura canônica
pub trait SelectorHasher {
    fn selector(&self, signature: &str) -> Selector;
}

/// Seletor padrão da EVM: keccak256 truncado em 4 bytes
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak256Selector;

impl SelectorHasher for Keccak256Selector {
    fn selector(&self, signature: &str) -> Selector {
        function_selector(signature)
    }
}

impl<T: InterfaceResolver + ?Sized> InterfaceResolver for &T {
    fn resolve_interface(&self, package: &str, contract: &str) -> Result<InterfaceDefinition> {
        (**self).resolve_interface(package, contract)
    }
}

impl<T: ConstantsResolver + ?Sized> ConstantsResolver for &T {
    fn resolve_constants(&self, package: &str) -> Result<AddressTable> {
        (**self).resolve_constants(package)
    }
}
