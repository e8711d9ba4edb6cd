/*!
 * Ethernity Utils
 *
 * Utilitários comuns usados em toda a workspace Ethernity
 */

use crate::error::{Error, Result};
use crate::types::Selector;
use ethereum_types::Address;
use serde::Serialize;
use std::str::FromStr;
use tiny_keccak::{Hasher, Keccak};

/// Converte uma string hexadecimal para Address
pub fn hex_to_address(hex: &str) -> Option<Address> {
    let hex_str = hex.strip_prefix("0x").unwrap_or(hex);
    Address::from_str(hex_str).ok()
}

/// Como `hex_to_address`, mas falha com `MalformedInput` citando o nome simbólico
pub fn parse_address(name: &str, hex: &str) -> Result<Address> {
    hex_to_address(hex)
        .ok_or_else(|| Error::MalformedInput(format!("endereço inválido para {name}: {hex}")))
}

/// Formata um Address para exibição
pub fn format_address(address: &Address) -> String {
    format!("0x{:x}", address)
}

/// Calcula o hash Keccak-256 de dados
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut result = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut result);
    result
}

/// Seletor Solidity: os 4 primeiros bytes de keccak256(assinatura)
pub fn function_selector(signature: &str) -> Selector {
    let hash = keccak256(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash[..4]);
    Selector(selector)
}

/// Serializa para JSON indentado; falhas viram `EncodeError`
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| Error::EncodeError(e.to_string()))
}
