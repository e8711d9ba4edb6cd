//! Ethernity Verifiers
//!
//! Derives verifier descriptors (canonical signature, selector and typed
//! parameters) from contract ABIs.

pub mod abi;
pub mod artifacts;
pub mod classifier;
pub mod definitions;
pub mod descriptor;
pub mod signature;

pub use artifacts::{ArtifactDirectory, StaticResolver};
pub use classifier::{TokenMatcher, TokenTypes};
pub use definitions::{current_verifiers, legacy_verifiers, VerifierDefinition};
pub use descriptor::DescriptorBuilder;
