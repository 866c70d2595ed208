//! Interface de linha de comando do verificador baseada em clap.
//!
//! Não há subcomandos: a raiz do repositório vem de `--root`, da variável
//! `GITHUB_WORKSPACE` (montagem do CI) ou do diretório atual (pre-commit).

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Verifica se toda imagem de container referenciada usa uma tag de release.
#[derive(Debug, Parser)]
#[command(name = "image-tag-checker", version, about)]
pub struct Cli {
    /// Raiz do repositório a verificar.
    #[arg(long, env = "GITHUB_WORKSPACE", default_value = ".")]
    pub root: PathBuf,

    /// Arquivo de configuração (padrão: `tag-check.toml` na raiz, se existir).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Formato da saída.
    #[arg(long, value_enum, default_value_t = Format::Plain)]
    pub format: Format,

    /// Habilita saída detalhada (verbose).
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}

/// Formatos de saída aceitos pela CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Linhas legíveis, emitidas durante a verificação.
    Plain,
    /// Um único relatório JSON no final.
    Json,
}
