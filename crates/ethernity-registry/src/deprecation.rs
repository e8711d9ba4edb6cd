use ethernity_core::AddressTable;
use std::collections::HashSet;

/// Constantes de verifiers aposentados que não devem ser publicadas
pub const DEPRECATED_VERIFIERS: [&str; 4] = [
    "LIMIT_SWAP_VERIFIER",
    "NFT_LIMIT_SWAP_VERIFIER",
    "LIMIT_APPROVAL_SWAP_VERIFIER",
    "NFT_APPROVAL_SWAP_VERIFIER",
];

/// Copia `table` sem as chaves presentes em `deprecated`, mantendo a ordem
pub fn filter_deprecated(table: &AddressTable, deprecated: &HashSet<String>) -> AddressTable {
    table
        .iter()
        .filter(|(name, _)| !deprecated.contains(*name))
        .map(|(name, address)| (name, *address))
        .collect()
}
