//! Notification Channel
//!
//! A single transient status message. Each operation outcome overwrites
//! the previous message; a click on the banner clears it.

use crate::api::ApiError;
use crate::models::ImportSummary;

/// Marker that classifies a message as an error (display styling only)
pub const ERROR_MARKER: &str = "❌";

pub const MSG_MISSING_FIELDS: &str = "❌ Preencha todos os campos";
pub const MSG_NO_FILE: &str = "❌ Selecione um arquivo CSV";
pub const MSG_LOAD_FAILED: &str = "❌ Erro ao carregar componentes";
pub const MSG_ADDED: &str = "Componente adicionado com sucesso!";
pub const MSG_ADD_FAILED: &str = "❌ Erro ao adicionar componente";
pub const MSG_UPDATED: &str = "Componente atualizado com sucesso!";
pub const MSG_UPDATE_FAILED: &str = "❌ Erro ao editar componente";
pub const MSG_DELETED: &str = "Componente excluído com sucesso!";
pub const MSG_DELETE_FAILED: &str = "❌ Erro ao excluir componente";
pub const MSG_IMPORT_FAILED: &str = "❌ Erro ao importar CSV";

/// Transient user-facing status message
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage(String);

impl StatusMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn is_error(&self) -> bool {
        self.0.contains(ERROR_MARKER)
    }
}

/// Composite message for a completed CSV import, reporting row counts.
pub fn import_success_message(summary: ImportSummary) -> StatusMessage {
    let mut text = format!(
        "✅ CSV importado com sucesso! {} itens adicionados.",
        summary.inseridos
    );
    if summary.erros > 0 {
        text.push_str(&format!(" {} erros.", summary.erros));
    }
    StatusMessage::new(text)
}

/// Import failure message, preferring the service's own error text.
pub fn import_failure_message(err: &ApiError) -> StatusMessage {
    match err.server_message() {
        Some(detail) => StatusMessage::new(format!("{ERROR_MARKER} {detail}")),
        None => StatusMessage::new(MSG_IMPORT_FAILED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification_by_marker() {
        assert!(StatusMessage::new(MSG_MISSING_FIELDS).is_error());
        assert!(StatusMessage::new(MSG_IMPORT_FAILED).is_error());
        assert!(!StatusMessage::new(MSG_ADDED).is_error());
        assert!(!StatusMessage::new(MSG_DELETED).is_error());
    }

    #[test]
    fn test_import_message_reports_both_counts() {
        let msg = import_success_message(ImportSummary { inseridos: 3, erros: 1 });
        assert_eq!(
            msg.text(),
            "✅ CSV importado com sucesso! 3 itens adicionados. 1 erros."
        );
        assert!(!msg.is_error());
    }

    #[test]
    fn test_import_message_omits_zero_errors() {
        let msg = import_success_message(ImportSummary { inseridos: 10, erros: 0 });
        assert_eq!(msg.text(), "✅ CSV importado com sucesso! 10 itens adicionados.");
    }

    #[test]
    fn test_import_failure_prefers_server_detail() {
        let err = ApiError::Status {
            code: 400,
            message: Some("Cabeçalho CSV inválido".to_string()),
        };
        assert_eq!(import_failure_message(&err).text(), "❌ Cabeçalho CSV inválido");
    }

    #[test]
    fn test_import_failure_falls_back_to_generic() {
        let err = ApiError::Network("fetch rejected".to_string());
        assert_eq!(import_failure_message(&err).text(), MSG_IMPORT_FAILED);
        assert!(import_failure_message(&err).is_error());
    }
}
