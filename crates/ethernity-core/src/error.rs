use thiserror::Error;

/// Erros comuns da biblioteca Ethernity
///
/// Qualquer erro aborta a construção do registro inteiro.
#[derive(Error, Debug)]
pub enum Error {
    /// Recurso não encontrado (função, artefato, pacote ou constante)
    #[error("Não encontrado: {0}")]
    NotFound(String),

    /// Entrada malformada (campos obrigatórios ausentes, endereço inválido)
    #[error("Entrada malformada: {0}")]
    MalformedInput(String),

    /// Erro de decodificação de dados
    #[error("Erro de decodificação: {0}")]
    DecodeError(String),

    /// Erro de codificação de dados
    #[error("Erro de codificação: {0}")]
    EncodeError(String),

    /// Erro de leitura de arquivos locais
    #[error("Erro de E/S: {0}")]
    Io(#[from] std::io::Error),

    /// Erro genérico
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::DecodeError(err.to_string())
    }
}

/// Tipo de resultado usado em toda a biblioteca
pub type Result<T> = std::result::Result<T, Error>;
