/*!
 * Ethernity Registry
 *
 * Registro de configuração por rede dos contratos verifier: endereços
 * determinísticos, descritores de funções e identificadores de cada rede.
 */

pub mod assembler;
pub mod builder;
pub mod config;
pub mod deprecation;
pub mod network;
pub mod registry;

// Re-exportações públicas
pub use assembler::{assemble, merge_sources, merge_tables, ConstantsSource};
pub use builder::RegistryBuilder;
pub use config::{ConstantsSourceConfig, RegistryConfig};
pub use deprecation::{filter_deprecated, DEPRECATED_VERIFIERS};
pub use network::{default_networks, Network, NetworkSpec};
pub use registry::{NetworkConfig, Registry, RegistryCell};
