//! Configuração do verificador carregada a partir de `tag-check.toml`.
//!
//! A struct [`CheckerConfig`] contém os parâmetros ajustáveis por repositório.
//! Valores não presentes no arquivo usam os padrões do Data Manager.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;

/// Nome do arquivo de configuração procurado na raiz do repositório.
pub const CONFIG_FILE: &str = "tag-check.toml";

/// Configuração de nível superior carregada de `tag-check.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckerConfig {
    /// Diretório (relativo à raiz) com os manifestos e definições de job.
    #[serde(default = "default_data_manager_dir")]
    pub data_manager_dir: String,

    /// Padrão glob dos manifestos, relativo a `data_manager_dir`.
    #[serde(default = "default_manifest_pattern")]
    pub manifest_pattern: String,

    /// Extensão dos scripts de workflow, sem o ponto.
    #[serde(default = "default_workflow_extension")]
    pub workflow_extension: String,

    /// Respeita `.gitignore` ao procurar scripts de workflow.
    #[serde(default)]
    pub respect_gitignore: bool,
}

// Valor padrão para o diretório do Data Manager: "data-manager".
fn default_data_manager_dir() -> String {
    "data-manager".to_string()
}

// Valor padrão para o padrão dos manifestos: "manifest-*.yaml".
fn default_manifest_pattern() -> String {
    "manifest-*.yaml".to_string()
}

// Valor padrão para a extensão dos workflows: "nf" (Nextflow).
fn default_workflow_extension() -> String {
    "nf".to_string()
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            data_manager_dir: default_data_manager_dir(),
            manifest_pattern: default_manifest_pattern(),
            workflow_extension: default_workflow_extension(),
            respect_gitignore: false,
        }
    }
}

impl CheckerConfig {
    /// Carrega a configuração.
    ///
    /// Um arquivo explícito precisa existir. Sem ele, usa `tag-check.toml` na
    /// raiz se existir, ou os valores padrão.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) if !path.exists() => bail!("config file not found: {}", path.display()),
            Some(path) => path.to_path_buf(),
            None => root.join(CONFIG_FILE),
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = toml::from_str::<CheckerConfig>(&contents)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = CheckerConfig::default();
        assert_eq!(config.data_manager_dir, "data-manager");
        assert_eq!(config.manifest_pattern, "manifest-*.yaml");
        assert_eq!(config.workflow_extension, "nf");
        assert!(!config.respect_gitignore);
    }

    #[test]
    fn deserialize_partial_toml() {
        let toml_str = r#"
            workflow_extension = "groovy"
            respect_gitignore = true
        "#;
        let config: CheckerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.workflow_extension, "groovy");
        assert!(config.respect_gitignore);
        assert_eq!(config.data_manager_dir, "data-manager");
    }

    #[test]
    fn load_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CheckerConfig::load(dir.path(), None).unwrap();
        assert_eq!(config, CheckerConfig::default());
    }

    #[test]
    fn load_reads_root_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "data_manager_dir = \"dm\"\n").unwrap();
        let config = CheckerConfig::load(dir.path(), None).unwrap();
        assert_eq!(config.data_manager_dir, "dm");
    }

    #[test]
    fn explicit_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("other.toml");
        assert!(CheckerConfig::load(dir.path(), Some(&missing)).is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "manifest_glob = \"x\"\n").unwrap();
        assert!(CheckerConfig::load(dir.path(), None).is_err());
    }
}
