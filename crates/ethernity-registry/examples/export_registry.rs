use std::env;

use anyhow::{Context, Result};
use ethernity_registry::{RegistryBuilder, RegistryConfig};
use ethernity_verifiers::ArtifactDirectory;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Uso: {} <DIRETORIO_PACOTES> [CONFIG_JSON]", args[0]);
        std::process::exit(1);
    }

    // Perfil atual, salvo quando um arquivo de configuração é informado
    let config = match args.get(2) {
        Some(path) => RegistryConfig::from_path(path).context("configuracao invalida")?,
        None => RegistryConfig::default(),
    };

    let packages = ArtifactDirectory::new(&args[1]);
    info!(root = %packages.root().display(), "montando registro");

    let registry = RegistryBuilder::new(config)
        .build(&packages, &packages)
        .context("falha ao montar o registro")?;

    println!("{}", registry.to_json_pretty()?);
    Ok(())
}
