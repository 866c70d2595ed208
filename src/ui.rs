//! Saída de terminal do verificador — linhas coloridas e resumo final.
//!
//! Os scanners reportam o progresso através do trait [`Observer`]; o
//! [`ConsoleObserver`] imprime cada evento assim que ele acontece, usando a
//! crate `console` para as cores.

use std::path::Path;

use console::Style;

use crate::report::{Report, ValidationError};

/// Recebe os eventos de uma execução à medida que são descobertos.
pub trait Observer {
    /// Um arquivo (manifesto, definição de job ou workflow) começou a ser verificado.
    fn checking(&mut self, path: &Path);

    /// Um erro de validação foi encontrado.
    fn error(&mut self, error: &ValidationError);

    /// Mensagem informativa, nunca um erro.
    fn info(&mut self, message: &str);
}

/// Imprime os eventos no stdout, com `ERROR:` em vermelho.
pub struct ConsoleObserver {
    // Estilo vermelho para erros.
    red: Style,
    // Estilo esmaecido para mensagens informativas.
    dim: Style,
}

impl Default for ConsoleObserver {
    fn default() -> Self {
        Self {
            red: Style::new().red().bold(),
            dim: Style::new().dim(),
        }
    }
}

impl Observer for ConsoleObserver {
    fn checking(&mut self, path: &Path) {
        println!("Checking {}...", path.display());
    }

    fn error(&mut self, error: &ValidationError) {
        println!("{} {error}", self.red.apply_to("ERROR:"));
    }

    fn info(&mut self, message: &str) {
        println!("{}", self.dim.apply_to(message));
    }
}

/// Descarta todos os eventos (modo JSON e testes).
#[derive(Debug, Default)]
pub struct SilentObserver;

impl Observer for SilentObserver {
    fn checking(&mut self, _path: &Path) {}

    fn error(&mut self, _error: &ValidationError) {}

    fn info(&mut self, _message: &str) {}
}

/// Linhas do resumo final: `--`/`OK` ou `------`/`FAILED - ...`.
pub fn summary_lines(report: &Report) -> [String; 2] {
    if report.is_ok() {
        ["--".to_string(), "OK".to_string()]
    } else {
        [
            "------".to_string(),
            format!("FAILED - there are {} invalid tags", report.errors.len()),
        ]
    }
}

/// Imprime o resumo com estilo colorido (verde para sucesso, vermelho para falha).
pub fn print_summary(report: &Report) {
    let style = if report.is_ok() {
        Style::new().green().bold()
    } else {
        Style::new().red().bold()
    };
    let [rule, verdict] = summary_lines(report);
    println!("{rule}");
    println!("{}", style.apply_to(verdict));
}

/// Imprime o relatório completo em JSON formatado.
pub fn print_json(report: &Report) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
