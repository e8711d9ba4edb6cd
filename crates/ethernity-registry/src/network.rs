/*!
 * Redes suportadas pelo registro e seus identificadores
 */

use ethereum_types::H160;
use ethernity_core::{Address, Error};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// WETH9 na mainnet (também usado pelo nó local)
pub const WETH9_MAINNET: Address = H160([
    0xc0, 0x2a, 0xaa, 0x39, 0xb2, 0x23, 0xfe, 0x8d, 0x0a, 0x0e, 0x5c, 0x4f, 0x27, 0xea, 0xd9, 0x08,
    0x3c, 0x75, 0x6c, 0xc2,
]);

/// WETH9 na Goerli
pub const WETH9_GOERLI: Address = H160([
    0xb4, 0xfb, 0xf2, 0x71, 0x14, 0x3f, 0x4f, 0xbf, 0x7b, 0x91, 0xa5, 0xde, 0xd3, 0x18, 0x05, 0xe4,
    0x2b, 0x22, 0x08, 0xd6,
]);

/// WETH9 compartilhado entre Rinkeby e Ropsten
pub const WETH9_RINKEBY_ROPSTEN: Address = H160([
    0xc7, 0x78, 0x41, 0x7e, 0x06, 0x31, 0x41, 0x13, 0x9f, 0xce, 0x01, 0x09, 0x82, 0x78, 0x01, 0x40,
    0xaa, 0x0c, 0xd5, 0xab,
]);

/// WETH9 na Kovan
pub const WETH9_KOVAN: Address = H160([
    0xd0, 0xa1, 0xe3, 0x59, 0x81, 0x13, 0x22, 0xd9, 0x79, 0x91, 0xe0, 0x3f, 0x86, 0x3a, 0x0c, 0x30,
    0xc2, 0xcf, 0x02, 0x9c,
]);

/// Identificadores específicos de uma rede
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NetworkSpec {
    /// Chave de consulta no registro (`mainnet`, `localhost`, ...)
    pub key: String,
    pub chain_id: u64,
    /// Nome publicado em `NETWORK`; difere da chave no nó local (`hardhat`)
    pub network: String,
    pub etherscan_domain: String,
    pub weth9: Address,
}

/// Redes conhecidas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Localhost,
    Goerli,
    Rinkeby,
    Ropsten,
    Kovan,
}

impl Network {
    pub const ALL: [Network; 6] = [
        Network::Mainnet,
        Network::Localhost,
        Network::Goerli,
        Network::Rinkeby,
        Network::Ropsten,
        Network::Kovan,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Localhost => "localhost",
            Network::Goerli => "goerli",
            Network::Rinkeby => "rinkeby",
            Network::Ropsten => "ropsten",
            Network::Kovan => "kovan",
        }
    }

    pub fn spec(&self) -> NetworkSpec {
        let (chain_id, network, etherscan_domain, weth9) = match self {
            Network::Mainnet => (1, "mainnet", "etherscan.io", WETH9_MAINNET),
            Network::Localhost => (1, "hardhat", "local.etherscan.io", WETH9_MAINNET),
            Network::Goerli => (5, "goerli", "goerli.etherscan.io", WETH9_GOERLI),
            Network::Rinkeby => (4, "rinkeby", "rinkeby.etherscan.io", WETH9_RINKEBY_ROPSTEN),
            Network::Ropsten => (3, "ropsten", "ropsten.etherscan.io", WETH9_RINKEBY_ROPSTEN),
            Network::Kovan => (42, "kovan", "kovan.etherscan.io", WETH9_KOVAN),
        };
        NetworkSpec {
            key: self.key().to_string(),
            chain_id,
            network: network.to_string(),
            etherscan_domain: etherscan_domain.to_string(),
            weth9,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .into_iter()
            .find(|n| n.key() == s)
            .ok_or_else(|| Error::NotFound(format!("rede desconhecida: {s}")))
    }
}

/// Especificações de todas as redes conhecidas, na ordem de publicação
pub fn default_networks() -> Vec<NetworkSpec> {
    Network::ALL.iter().map(Network::spec).collect()
}
