//! Token-like parameter classification based on the compiler's `internalType`.

use ethernity_core::AssetKind;
use serde::Deserialize;

/// One `(kind, name)` pair checked against a storage hint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenMatcher {
    pub kind: AssetKind,
    pub name: String,
}

impl TokenMatcher {
    pub fn new(kind: AssetKind, name: impl Into<String>) -> Self {
        Self { kind, name: name.into() }
    }
}

/// Ordered set of token names recognised inside `internalType` strings.
///
/// Every matcher is evaluated and a later match overwrites an earlier one,
/// so with the default order a hint containing both `ERC20` and `ERC1155`
/// classifies as `ERC1155`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TokenTypes {
    matchers: Vec<TokenMatcher>,
}

impl Default for TokenTypes {
    fn default() -> Self {
        Self::new(vec![
            TokenMatcher::new(AssetKind::FungibleToken, "ERC20"),
            TokenMatcher::new(AssetKind::NonFungibleToken, "ERC721"),
            TokenMatcher::new(AssetKind::MultiToken, "ERC1155"),
        ])
    }
}

impl TokenTypes {
    pub fn new(matchers: Vec<TokenMatcher>) -> Self {
        Self { matchers }
    }

    pub fn matchers(&self) -> &[TokenMatcher] {
        &self.matchers
    }

    /// Case-insensitive substring classification; last match wins.
    pub fn classify(&self, storage_hint: Option<&str>) -> AssetKind {
        let Some(hint) = storage_hint else {
            return AssetKind::Generic;
        };
        let hint = hint.to_lowercase();
        // scanning from the end yields the last match in declared order
        self.matchers
            .iter()
            .rev()
            .find(|m| hint.contains(&m.name.to_lowercase()))
            .map(|m| m.kind)
            .unwrap_or(AssetKind::Generic)
    }
}
