use ethernity_core::{
    Address, AddressTable, Error, FunctionEntry, InterfaceDefinition, ParameterSpec,
};
use ethernity_registry::{
    assemble, filter_deprecated, merge_tables, ConstantsSourceConfig, Network, NetworkSpec,
    RegistryBuilder, RegistryCell, RegistryConfig,
};
use ethernity_verifiers::definitions::VERIFIERS_PACKAGE;
use ethernity_verifiers::{ArtifactDirectory, DescriptorBuilder, StaticResolver, VerifierDefinition};
use std::collections::HashSet;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};

fn addr(byte: u8) -> Address {
    Address::repeat_byte(byte)
}

fn table(entries: &[(&str, u8)]) -> AddressTable {
    entries.iter().map(|(k, b)| (*k, addr(*b))).collect()
}

fn cancel_interface() -> InterfaceDefinition {
    InterfaceDefinition::new(vec![FunctionEntry::new(
        "cancel",
        vec![
            ParameterSpec::new("bitmapIndex", "uint256"),
            ParameterSpec::new("bit", "uint256"),
        ],
    )])
}

fn transfer_interface() -> InterfaceDefinition {
    InterfaceDefinition::new(vec![FunctionEntry::new(
        "tokenTransfer",
        vec![
            ParameterSpec::new("bitmapIndex", "uint256"),
            ParameterSpec::new("bit", "uint256"),
            ParameterSpec::new("token", "address").with_hint("contract IERC20"),
            ParameterSpec::new("recipient", "address"),
            ParameterSpec::new("amount", "uint256"),
            ParameterSpec::new("expiryBlock", "uint256"),
        ],
    )])
}

/// Configuração reduzida: duas fontes, dois verifiers, duas redes
fn small_config() -> RegistryConfig {
    RegistryConfig {
        constants_sources: vec![
            ConstantsSourceConfig::new("core", false),
            ConstantsSourceConfig::new(VERIFIERS_PACKAGE, true),
        ],
        verifiers: vec![
            VerifierDefinition::new(
                VERIFIERS_PACKAGE,
                "CancelVerifier",
                "CANCEL_VERIFIER",
                "cancel",
                2,
            ),
            VerifierDefinition::new(
                VERIFIERS_PACKAGE,
                "TransferVerifier",
                "TRANSFER_VERIFIER",
                "tokenTransfer",
                6,
            ),
        ],
        networks: vec![Network::Mainnet.spec(), Network::Goerli.spec()],
        ..RegistryConfig::default()
    }
}

fn small_resolver() -> StaticResolver {
    StaticResolver::new()
        .with_constants("core", table(&[("ACCOUNT", 0x01), ("DEPLOYER", 0x02)]))
        .with_constants(
            VERIFIERS_PACKAGE,
            table(&[
                ("CANCEL_VERIFIER", 0x0a),
                ("LIMIT_SWAP_VERIFIER", 0x0c),
                ("TRANSFER_VERIFIER", 0x0b),
            ]),
        )
        .with_interface(VERIFIERS_PACKAGE, "CancelVerifier", cancel_interface())
        .with_interface(VERIFIERS_PACKAGE, "TransferVerifier", transfer_interface())
}

#[test]
fn deprecation_filter_drops_cancel_verifier() {
    let deprecated: HashSet<String> = ["CANCEL_VERIFIER".to_string()].into_iter().collect();
    let source = table(&[("CANCEL_VERIFIER", 0x0a), ("TRANSFER_VERIFIER", 0x0b)]);
    let filtered = filter_deprecated(&source, &deprecated);
    assert_eq!(filtered, table(&[("TRANSFER_VERIFIER", 0x0b)]));
}

#[test]
fn merge_is_associative() {
    let t1 = table(&[("A", 1), ("B", 2)]);
    let t2 = table(&[("B", 3), ("C", 4)]);
    let t3 = table(&[("C", 5), ("D", 6)]);

    let left = merge_tables([&merge_tables([&t1, &t2]), &t3]);
    let right = merge_tables([&t1, &merge_tables([&t2, &t3])]);
    let flat = merge_tables([&t1, &t2, &t3]);
    assert_eq!(left, flat);
    assert_eq!(right, flat);
    assert_eq!(flat.get("B"), Some(addr(3)));
    assert_eq!(flat.get("C"), Some(addr(5)));
}

#[test]
fn reordering_only_matters_on_collision() {
    let t1 = table(&[("A", 1)]);
    let t2 = table(&[("B", 2)]);
    let ab = merge_tables([&t1, &t2]);
    let ba = merge_tables([&t2, &t1]);
    let contents = |t: &AddressTable| {
        let mut v: Vec<_> = t.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        v.sort();
        v
    };
    assert_eq!(contents(&ab), contents(&ba));

    let c1 = table(&[("X", 1)]);
    let c2 = table(&[("X", 2)]);
    assert_eq!(merge_tables([&c1, &c2]).get("X"), Some(addr(2)));
    assert_eq!(merge_tables([&c2, &c1]).get("X"), Some(addr(1)));
}

#[test]
fn networks_share_verifiers_and_differ_only_in_network_fields() {
    let def = VerifierDefinition::new(
        VERIFIERS_PACKAGE,
        "CancelVerifier",
        "CANCEL_VERIFIER",
        "cancel",
        2,
    );
    let descriptor = DescriptorBuilder::default()
        .build(&def, addr(0x0a), &cancel_interface())
        .unwrap();
    let networks = vec![
        NetworkSpec {
            key: "mainnet".into(),
            chain_id: 1,
            network: "mainnet".into(),
            etherscan_domain: "etherscan.io".into(),
            weth9: addr(0xee),
        },
        NetworkSpec {
            key: "goerli".into(),
            chain_id: 5,
            network: "goerli".into(),
            etherscan_domain: "goerli.etherscan.io".into(),
            weth9: addr(0xef),
        },
    ];
    let registry = assemble(
        &[],
        &HashSet::new(),
        &table(&[("CANCEL_VERIFIER", 0x0a)]),
        vec![descriptor],
        &networks,
    );

    assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["mainnet", "goerli"]);
    let mainnet = registry.get("mainnet").unwrap();
    let goerli = registry.get("goerli").unwrap();
    assert!(mainnet.shares_data_with(goerli));
    assert_eq!(mainnet.verifiers(), goerli.verifiers());
    assert_eq!(mainnet.addresses(), goerli.addresses());
    assert_eq!(mainnet.chain_id, 1);
    assert_eq!(goerli.chain_id, 5);
    assert_eq!(goerli.etherscan_domain, "goerli.etherscan.io");
    assert_eq!(goerli.address("WETH9"), Some(addr(0xef)));
    assert!(registry.get("kovan").is_none());
}

#[test]
fn builds_registry_from_static_resolver() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let resolver = small_resolver();
    let registry = RegistryBuilder::new(small_config()).build(&resolver, &resolver).unwrap();

    let mainnet = registry.get("mainnet").unwrap();
    // LIMIT_SWAP_VERIFIER is deprecated in the legacy verifiers package
    assert!(mainnet.address("LIMIT_SWAP_VERIFIER").is_none());
    assert_eq!(mainnet.address("CANCEL_VERIFIER"), Some(addr(0x0a)));
    assert!(mainnet.address("UNISWAP_V2_FACTORY").is_some());

    let keys: Vec<_> = mainnet.addresses().keys().collect();
    assert_eq!(
        keys,
        vec![
            "ACCOUNT",
            "DEPLOYER",
            "CANCEL_VERIFIER",
            "TRANSFER_VERIFIER",
            "UNISWAP_V2_FACTORY",
            "UNISWAP_V2_ROUTER_02",
            "UNISWAP_V3_FACTORY",
        ]
    );

    let verifiers = mainnet.verifiers();
    assert_eq!(verifiers.len(), 2);
    assert_eq!(verifiers[0].function_signature, "cancel(uint256,uint256)");
    assert_eq!(verifiers[1].contract_address, addr(0x0b));
    assert_eq!(verifiers[1].param_types[2].kind.to_string(), "ERC20");
    assert!(verifiers[1].param_types.iter().all(|p| p.signed));
}

#[test]
fn missing_function_aborts_the_whole_build() {
    let mut config = small_config();
    config.verifiers.push(VerifierDefinition::new(
        VERIFIERS_PACKAGE,
        "CancelVerifier",
        "CANCEL_VERIFIER",
        "cancelAll",
        1,
    ));
    let resolver = small_resolver();
    let err = RegistryBuilder::new(config).build(&resolver, &resolver).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn missing_address_constant_is_not_found() {
    let mut config = small_config();
    config.verifiers = vec![VerifierDefinition::new(
        VERIFIERS_PACKAGE,
        "CancelVerifier",
        "NFT_CANCEL_VERIFIER",
        "cancel",
        2,
    )];
    let resolver = small_resolver();
    let err = RegistryBuilder::new(config).build(&resolver, &resolver).unwrap_err();
    assert!(matches!(err, Error::NotFound(msg) if msg.contains("NFT_CANCEL_VERIFIER")));
}

#[test]
fn deprecated_constant_still_resolves_verifier_address() {
    // the verifier address comes from the unfiltered package table
    let mut config = small_config();
    config.verifiers = vec![VerifierDefinition::new(
        VERIFIERS_PACKAGE,
        "CancelVerifier",
        "LIMIT_SWAP_VERIFIER",
        "cancel",
        2,
    )];
    let resolver = small_resolver();
    let registry = RegistryBuilder::new(config).build(&resolver, &resolver).unwrap();
    let mainnet = registry.get("mainnet").unwrap();
    assert_eq!(mainnet.verifiers()[0].contract_address, addr(0x0c));
    assert!(mainnet.address("LIMIT_SWAP_VERIFIER").is_none());
}

#[test]
fn export_is_flat_per_network() {
    let resolver = small_resolver();
    let registry = RegistryBuilder::new(small_config()).build(&resolver, &resolver).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&registry.to_json_pretty().unwrap()).unwrap();

    let goerli = &json["goerli"];
    assert_eq!(goerli["CHAIN_ID"], 5);
    assert_eq!(goerli["NETWORK"], "goerli");
    assert_eq!(goerli["ETHERSCAN_DOMAIN"], "goerli.etherscan.io");
    assert_eq!(goerli["WETH9"], "0xb4fbf271143f4fbf7b91a5ded31805e42b2208d6");
    assert_eq!(goerli["CANCEL_VERIFIER"], "0x0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a");
    assert_eq!(goerli["VERIFIERS"][0]["functionName"], "cancel");
    assert_eq!(goerli["VERIFIERS"], json["mainnet"]["VERIFIERS"]);
}

const CORE_CONSTANTS: &str = r#"{"ACCOUNT":"0x0101010101010101010101010101010101010101"}"#;

const VERIFIER_CONSTANTS: &str = r#"{
    "CANCEL_VERIFIER":"0x0A0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a",
    "NFT_APPROVAL_SWAP_VERIFIER":"0x0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d"
}"#;

const CANCEL_ARTIFACT: &str = r#"{"contractName":"CancelVerifier","abi":[
    {"type":"function","name":"cancel","outputs":[],"stateMutability":"nonpayable",
     "inputs":[{"name":"bitmapIndex","type":"uint256","internalType":"uint256"},
               {"name":"bit","type":"uint256","internalType":"uint256"}]}]}"#;

/// Monta um diretório de pacotes com as constantes e o artefato do CancelVerifier
fn package_dir(
    root: &std::path::Path,
    core: &str,
    cancel_artifact: &str,
) -> anyhow::Result<ArtifactDirectory> {
    let dir = ArtifactDirectory::new(root);
    for (package, body) in [("core", core), (VERIFIERS_PACKAGE, VERIFIER_CONSTANTS)] {
        let path = dir.constants_path(package);
        fs::create_dir_all(path.parent().unwrap())?;
        fs::write(path, body)?;
    }

    let artifact = dir.artifact_path(VERIFIERS_PACKAGE, "CancelVerifier");
    fs::create_dir_all(artifact.parent().unwrap())?;
    fs::write(artifact, cancel_artifact)?;
    Ok(dir)
}

fn cancel_only_config() -> RegistryConfig {
    let mut config = small_config();
    config.verifiers.truncate(1);
    config
}

#[test]
fn builds_from_artifact_directory() -> anyhow::Result<()> {
    let root = tempfile::tempdir()?;
    let dir = package_dir(root.path(), CORE_CONSTANTS, CANCEL_ARTIFACT)?;
    let registry = RegistryBuilder::new(cancel_only_config()).build(&dir, &dir)?;

    let mainnet = registry.get("mainnet").unwrap();
    assert_eq!(mainnet.address("CANCEL_VERIFIER"), Some(addr(0x0a)));
    assert!(mainnet.address("NFT_APPROVAL_SWAP_VERIFIER").is_none());
    assert_eq!(
        mainnet.verifiers()[0].function_signature_hash,
        ethernity_core::utils::function_selector("cancel(uint256,uint256)")
    );
    Ok(())
}

#[test]
fn artifact_without_inputs_aborts_the_build() -> anyhow::Result<()> {
    let root = tempfile::tempdir()?;
    let artifact = r#"{"contractName":"CancelVerifier","abi":[
        {"type":"function","name":"cancel","outputs":[],"stateMutability":"nonpayable"}]}"#;
    let dir = package_dir(root.path(), CORE_CONSTANTS, artifact)?;

    let err = RegistryBuilder::new(cancel_only_config()).build(&dir, &dir).unwrap_err();
    assert!(matches!(err, Error::MalformedInput(_)));
    Ok(())
}

#[test]
fn invalid_constant_address_aborts_the_build() -> anyhow::Result<()> {
    let root = tempfile::tempdir()?;
    let core = r#"{"ACCOUNT":"0x01010101"}"#;
    let dir = package_dir(root.path(), core, CANCEL_ARTIFACT)?;

    let err = RegistryBuilder::new(cancel_only_config()).build(&dir, &dir).unwrap_err();
    assert!(matches!(err, Error::MalformedInput(msg) if msg.contains("ACCOUNT")));
    Ok(())
}

#[test]
fn missing_constants_package_fails() {
    let resolver = StaticResolver::new();
    let err = RegistryBuilder::new(small_config()).build(&resolver, &resolver).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn registry_cell_builds_once() {
    static CELL: RegistryCell = RegistryCell::new();
    let builds = AtomicUsize::new(0);
    let resolver = small_resolver();
    let builder = RegistryBuilder::new(small_config());

    let failed = CELL.get_or_try_init(|| {
        builds.fetch_add(1, Ordering::SeqCst);
        Err(Error::Other("falha transitória".into()))
    });
    assert!(failed.is_err());
    assert!(CELL.get().is_none());

    let first = CELL
        .get_or_try_init(|| {
            builds.fetch_add(1, Ordering::SeqCst);
            builder.build(&resolver, &resolver)
        })
        .unwrap();
    let second = CELL
        .get_or_try_init(|| {
            builds.fetch_add(1, Ordering::SeqCst);
            builder.build(&resolver, &resolver)
        })
        .unwrap();

    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert_eq!(builds.load(Ordering::SeqCst), 2);
}

#[test]
fn default_config_publishes_six_networks() {
    let config = RegistryConfig::default();
    let keys: Vec<_> = config.networks.iter().map(|n| n.key.as_str()).collect();
    assert_eq!(keys, ["mainnet", "localhost", "goerli", "rinkeby", "ropsten", "kovan"]);
}
