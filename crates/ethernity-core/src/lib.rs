/*!
 * Ethernity Core
 *
 * Tipos e utilitários compartilhados para o registro de verifiers Ethernity
 */

pub mod types;
pub mod traits;
pub mod utils;
pub mod error;

// Re-exportações públicas
pub use error::{Error, Result};
pub use types::*;
pub use ethereum_types::Address;
