//! Static tables of the verifier functions published in the registry.

use serde::Deserialize;

pub const VERIFIERS_PACKAGE: &str = "verifiers";
pub const VERIFIERS_V2_PACKAGE: &str = "verifiers-v2";

/// Which function of which verifier contract to describe, and how many of
/// its leading parameters belong to the signed message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerifierDefinition {
    /// Package holding both the contract artifact and its address constant
    pub package: String,
    pub contract_name: String,
    /// Name of the address constant in the package's constants table
    pub address_constant: String,
    pub function_name: String,
    pub num_signed_params: usize,
}

impl VerifierDefinition {
    pub fn new(
        package: &str,
        contract_name: &str,
        address_constant: &str,
        function_name: &str,
        num_signed_params: usize,
    ) -> Self {
        Self {
            package: package.to_string(),
            contract_name: contract_name.to_string(),
            address_constant: address_constant.to_string(),
            function_name: function_name.to_string(),
            num_signed_params,
        }
    }
}

/// Verifier functions of the current release (`verifiers` + `verifiers-v2`).
pub fn current_verifiers() -> Vec<VerifierDefinition> {
    let v1 = |contract: &str, constant: &str, function: &str, signed: usize| {
        VerifierDefinition::new(VERIFIERS_PACKAGE, contract, constant, function, signed)
    };
    let swaps = |function: &str, signed: usize| {
        VerifierDefinition::new(
            VERIFIERS_V2_PACKAGE,
            "ApprovalSwapsV1",
            "APPROVAL_SWAPS_V1",
            function,
            signed,
        )
    };
    vec![
        v1("TransferVerifier", "TRANSFER_VERIFIER", "tokenTransfer", 6),
        v1("TransferVerifier", "TRANSFER_VERIFIER", "ethTransfer", 5),
        v1("NftTransferVerifier", "NFT_TRANSFER_VERIFIER", "nftTransfer", 7),
        v1("CancelVerifier", "CANCEL_VERIFIER", "cancel", 2),
        swaps("tokenToToken", 7),
        swaps("tokenToNft", 6),
        swaps("nftToToken", 7),
        swaps("tokenToERC1155", 8),
        swaps("ERC1155ToToken", 8),
        swaps("ERC1155ToERC1155", 9),
    ]
}

/// Verifier functions of the first release, all from `verifiers`.
pub fn legacy_verifiers() -> Vec<VerifierDefinition> {
    let v1 = |contract: &str, constant: &str, function: &str, signed: usize| {
        VerifierDefinition::new(VERIFIERS_PACKAGE, contract, constant, function, signed)
    };
    vec![
        v1("LimitSwapVerifier", "LIMIT_SWAP_VERIFIER", "ethToToken", 6),
        v1("LimitSwapVerifier", "LIMIT_SWAP_VERIFIER", "tokenToEth", 6),
        v1("LimitSwapVerifier", "LIMIT_SWAP_VERIFIER", "tokenToToken", 7),
        v1("NftLimitSwapVerifier", "NFT_LIMIT_SWAP_VERIFIER", "tokenToNft", 6),
        v1("NftLimitSwapVerifier", "NFT_LIMIT_SWAP_VERIFIER", "nftToToken", 7),
        v1("NftLimitSwapVerifier", "NFT_LIMIT_SWAP_VERIFIER", "nftToNft", 6),
        v1("NftApprovalSwapVerifier", "NFT_APPROVAL_SWAP_VERIFIER", "tokenToNft", 6),
        v1("NftApprovalSwapVerifier", "NFT_APPROVAL_SWAP_VERIFIER", "nftToToken", 7),
        v1("TransferVerifier", "TRANSFER_VERIFIER", "tokenTransfer", 6),
        v1("TransferVerifier", "TRANSFER_VERIFIER", "ethTransfer", 5),
        v1("NftTransferVerifier", "NFT_TRANSFER_VERIFIER", "nftTransfer", 7),
        v1("CancelVerifier", "CANCEL_VERIFIER", "cancel", 2),
        v1("LimitApprovalSwapVerifier", "LIMIT_APPROVAL_SWAP_VERIFIER", "tokenToToken", 7),
        v1("LimitApprovalSwapVerifier", "LIMIT_APPROVAL_SWAP_VERIFIER", "tokenToEth", 6),
    ]
}
