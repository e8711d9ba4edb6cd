//! Verifier descriptor derivation: signature, selector and parameter typing.

use crate::classifier::TokenTypes;
use crate::definitions::VerifierDefinition;
use crate::signature::function_signature;
use ethernity_core::traits::{Keccak256Selector, SelectorHasher};
use ethernity_core::{
    Address, AssetKind, Error, InterfaceDefinition, ParamDescriptor, ParamType, ParameterSpec,
    Result, VerifierDescriptor,
};
use tracing::{debug, warn};

/// Builds [`VerifierDescriptor`]s from resolved interface definitions.
#[derive(Debug, Clone)]
pub struct DescriptorBuilder<H = Keccak256Selector> {
    token_types: TokenTypes,
    hasher: H,
}

impl DescriptorBuilder {
    pub fn new(token_types: TokenTypes) -> Self {
        Self { token_types, hasher: Keccak256Selector }
    }
}

impl Default for DescriptorBuilder {
    fn default() -> Self {
        Self::new(TokenTypes::default())
    }
}

impl<H: SelectorHasher> DescriptorBuilder<H> {
    /// Replaces the selector hashing primitive.
    pub fn with_hasher<H2: SelectorHasher>(self, hasher: H2) -> DescriptorBuilder<H2> {
        DescriptorBuilder { token_types: self.token_types, hasher }
    }

    pub fn token_types(&self) -> &TokenTypes {
        &self.token_types
    }

    /// Describes `definition.function_name` of `interface`.
    ///
    /// The first function with that name is used. Overloads are not
    /// disambiguated; they are only reported.
    pub fn build(
        &self,
        definition: &VerifierDefinition,
        contract_address: Address,
        interface: &InterfaceDefinition,
    ) -> Result<VerifierDescriptor> {
        let entry = interface
            .find_function(&definition.function_name)
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "function `{}` in {}/{}",
                    definition.function_name, definition.package, definition.contract_name
                ))
            })?;

        let overloads = interface.count_named(&definition.function_name);
        if overloads > 1 {
            warn!(
                contract = %definition.contract_name,
                function = %definition.function_name,
                overloads,
                "function name is overloaded, using the first entry"
            );
        }

        let function_signature = function_signature(entry)?;
        let function_signature_hash = self.hasher.selector(&function_signature);
        let param_types = entry
            .inputs
            .iter()
            .enumerate()
            .map(|(i, input)| self.describe_param(i, input, definition.num_signed_params))
            .collect();

        debug!(
            contract = %definition.contract_name,
            signature = %function_signature,
            selector = %function_signature_hash,
            "verifier descriptor built"
        );

        Ok(VerifierDescriptor {
            function_name: definition.function_name.clone(),
            function_signature,
            function_signature_hash,
            contract_name: definition.contract_name.clone(),
            contract_address,
            param_types,
        })
    }

    /// Types the parameter at `position`; only the leading
    /// `num_signed_params` parameters are signed.
    pub fn describe_param(
        &self,
        position: usize,
        input: &ParameterSpec,
        num_signed_params: usize,
    ) -> ParamDescriptor {
        let kind = match self.token_types.classify(input.storage_hint.as_deref()) {
            AssetKind::Generic => ParamType::Wire(input.declared_type.clone()),
            asset => ParamType::Asset(asset),
        };
        ParamDescriptor {
            name: input.name.clone(),
            kind,
            signed: position < num_signed_params,
        }
    }
}
