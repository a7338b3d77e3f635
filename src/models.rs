//! Frontend Models
//!
//! Data structures matching the inventory service wire format.

use serde::{Deserialize, Serialize};

/// Inventory item as stored by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Componente {
    pub id: u32,
    pub componente: String,
    pub quantidade: u32,
    /// Timestamp of the last write, as sent by the service
    pub data_cadastro: String,
}

/// Envelope around `GET /componentes`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListEnvelope {
    pub data: Vec<Componente>,
}

/// Body for `POST /componentes` and `PUT /componentes/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentePayload {
    pub componente: String,
    pub quantidade: u32,
}

/// Response of `POST /importar-csv`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ImportSummary {
    pub inseridos: u32,
    pub erros: u32,
}

/// Error payload probed on non-2xx responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

/// Draft of the add/edit form
///
/// `quantidade` stays a raw input string until validation so the form can
/// hold intermediate states (empty, partial typing) without losing them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditBuffer {
    pub componente: String,
    pub quantidade: String,
}

impl EditBuffer {
    pub fn from_item(item: &Componente) -> Self {
        Self {
            componente: item.componente.clone(),
            quantidade: item.quantidade.to_string(),
        }
    }

    pub fn clear(&mut self) {
        self.componente.clear();
        self.quantidade.clear();
    }

    /// Validate the draft into a request payload.
    ///
    /// Returns `None` when the name is blank or the quantity is not a
    /// non-negative integer; callers surface that as a local validation
    /// message without touching the network.
    pub fn validate(&self) -> Option<ComponentePayload> {
        let componente = self.componente.trim();
        if componente.is_empty() {
            return None;
        }
        let quantidade = self.quantidade.trim().parse::<u32>().ok()?;
        Some(ComponentePayload {
            componente: componente.to_string(),
            quantidade,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(componente: &str, quantidade: &str) -> EditBuffer {
        EditBuffer {
            componente: componente.to_string(),
            quantidade: quantidade.to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_complete_draft() {
        let payload = buffer("Arduino Uno", "15").validate().unwrap();
        assert_eq!(payload.componente, "Arduino Uno");
        assert_eq!(payload.quantidade, 15);
    }

    #[test]
    fn test_validate_trims_name() {
        let payload = buffer("  Sensor Ultrassônico ", "0").validate().unwrap();
        assert_eq!(payload.componente, "Sensor Ultrassônico");
        assert_eq!(payload.quantidade, 0);
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        assert!(buffer("", "10").validate().is_none());
        assert!(buffer("   ", "10").validate().is_none());
        assert!(buffer("LED Vermelho", "").validate().is_none());
    }

    #[test]
    fn test_validate_rejects_bad_quantity() {
        assert!(buffer("LED Vermelho", "muitos").validate().is_none());
        assert!(buffer("LED Vermelho", "-3").validate().is_none());
        assert!(buffer("LED Vermelho", "1.5").validate().is_none());
    }

    #[test]
    fn test_buffer_round_trips_item() {
        let item = Componente {
            id: 7,
            componente: "Servo MG996R".to_string(),
            quantidade: 4,
            data_cadastro: "2024-03-01T12:00:00Z".to_string(),
        };
        let buf = EditBuffer::from_item(&item);
        let payload = buf.validate().unwrap();
        assert_eq!(payload.componente, item.componente);
        assert_eq!(payload.quantidade, item.quantidade);
    }

    #[test]
    fn test_list_envelope_decodes() {
        let json = r#"{"data":[{"id":1,"componente":"Arduino Uno","quantidade":15,"data_cadastro":"2024-03-01T12:00:00Z"}]}"#;
        let envelope: ListEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].componente, "Arduino Uno");
    }

    #[test]
    fn test_import_summary_decodes() {
        let summary: ImportSummary = serde_json::from_str(r#"{"inseridos":3,"erros":1}"#).unwrap();
        assert_eq!(summary.inseridos, 3);
        assert_eq!(summary.erros, 1);
    }
}
