use serde::Serialize;

/// Status reported for a file that carries no clearing decision.
pub const NO_ASSERTION: &str = "NOASSERTION";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionType {
    WorkInProgress,
    ToBeDiscussed,
    Irrelevant,
    Identified,
    DoNotUse,
    NonFunctional,
}

impl DecisionType {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(DecisionType::WorkInProgress),
            2 => Some(DecisionType::ToBeDiscussed),
            3 => Some(DecisionType::Irrelevant),
            4 => Some(DecisionType::Identified),
            5 => Some(DecisionType::DoNotUse),
            6 => Some(DecisionType::NonFunctional),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DecisionType::WorkInProgress => "Work in progress",
            DecisionType::ToBeDiscussed => "To be discussed",
            DecisionType::Irrelevant => "Irrelevant",
            DecisionType::Identified => "Identified",
            DecisionType::DoNotUse => "Do not use",
            DecisionType::NonFunctional => "Non functional",
        }
    }
}

/// Human-readable label for a raw decision code; raw codes outside the known
/// range are reported as-is rather than dropped.
pub fn decision_label(code: i32) -> String {
    match DecisionType::from_code(code) {
        Some(decision_type) => decision_type.label().to_string(),
        None => format!("Unknown ({code})"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDecision {
    pub clearing_status: String,
    pub file_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_map_to_labels() {
        assert_eq!(decision_label(1), "Work in progress");
        assert_eq!(decision_label(4), "Identified");
        assert_eq!(decision_label(6), "Non functional");
    }

    #[test]
    fn test_unknown_code_is_reported_not_dropped() {
        assert_eq!(decision_label(42), "Unknown (42)");
    }

    #[test]
    fn test_file_decision_serializes_wire_shape() {
        let decision = FileDecision { clearing_status: "Identified".to_string(), file_id: 98 };
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json, serde_json::json!({"clearing_status": "Identified", "file_id": 98}));
    }
}
