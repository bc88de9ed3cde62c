// Evento domain type
//
// The single entity of the system: a titled time interval with a display
// color and a completion flag. Field names match the JSON wire contract.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Default display color applied when a client omits `color`.
pub const DEFAULT_COLOR: &str = "#3788d8";

/// Calendar event
///
/// Timestamps are naive (no timezone): the calendar shows wall-clock time
/// wherever the user is, and serializes as ISO-8601 without an offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Evento {
    /// Store-assigned identifier, immutable after creation
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Reunión de equipo")]
    pub titulo: String,
    #[serde(default)]
    #[schema(example = "Sala 3, traer portátil")]
    pub descripcion: String,
    #[schema(value_type = String, example = "2024-01-15T10:30:00")]
    pub fecha_inicio: NaiveDateTime,
    #[schema(value_type = String, example = "2024-01-15T11:30:00")]
    pub fecha_fin: NaiveDateTime,
    /// 7-character hex color, e.g. `#3788d8`
    #[schema(example = "#3788d8")]
    pub color: String,
    #[serde(default)]
    pub completado: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Evento {
        Evento {
            id: 7,
            titulo: "Dentista".to_string(),
            descripcion: String::new(),
            fecha_inicio: NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
            fecha_fin: NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(11, 0, 0)
                .unwrap(),
            color: DEFAULT_COLOR.to_string(),
            completado: false,
        }
    }

    #[test]
    fn serializes_naive_iso8601_without_offset() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["fecha_inicio"], "2024-01-15T10:30:00");
        assert_eq!(json["fecha_fin"], "2024-01-15T11:00:00");
        assert_eq!(json["color"], "#3788d8");
        assert_eq!(json["completado"], false);
    }

    #[test]
    fn json_round_trip_preserves_all_fields() {
        let evento = sample();
        let json = serde_json::to_string(&evento).unwrap();
        let back: Evento = serde_json::from_str(&json).unwrap();
        assert_eq!(back, evento);
    }

    #[test]
    fn deserializes_with_defaults_for_optional_fields() {
        let json = r##"{
            "id": 3,
            "titulo": "Comida",
            "fecha_inicio": "2024-02-01T13:00:00",
            "fecha_fin": "2024-02-01T14:00:00",
            "color": "#10b981"
        }"##;
        let evento: Evento = serde_json::from_str(json).unwrap();
        assert_eq!(evento.descripcion, "");
        assert!(!evento.completado);
    }
}
