use std::fmt::Display;

use serde::{Serialize, Serializer};

/// The name reported for a class index outside of the label set
pub static UNKNOWN_LABEL: &str = "Unknown";

/// The classes the mental health model predicts, in class id order
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Label {
    /// Class 0
    Anxiety,

    /// Class 1
    Normal,

    /// Class 2
    Depression,

    /// Class 3
    Suicidal,

    /// Class 4
    Stress,
}

impl Label {
    /// Every label, indexed by class id
    pub const ALL: [Label; 5] = [
        Label::Anxiety,
        Label::Normal,
        Label::Depression,
        Label::Suicidal,
        Label::Stress,
    ];

    /// Look up the label for a class id
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The label as it appears in responses
    pub fn name(&self) -> &'static str {
        match self {
            Label::Anxiety => "Anxiety",
            Label::Normal => "Normal",
            Label::Depression => "Depression",
            Label::Suicidal => "Suicidal",
            Label::Stress => "Stress",
        }
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_class_ids_follow_model_head_order() {
        assert_eq!(Label::from_index(0), Some(Label::Anxiety));
        assert_eq!(Label::from_index(1), Some(Label::Normal));
        assert_eq!(Label::from_index(2), Some(Label::Depression));
        assert_eq!(Label::from_index(3), Some(Label::Suicidal));
        assert_eq!(Label::from_index(4), Some(Label::Stress));
    }

    #[test]
    fn test_out_of_range_index_has_no_label() {
        assert_eq!(Label::from_index(5), None);
        assert_eq!(Label::from_index(usize::MAX), None);
    }

    #[test]
    fn test_every_label_found_at_its_position() {
        for (i, label) in Label::ALL.iter().enumerate() {
            assert_eq!(Label::from_index(i), Some(*label));
        }
    }

    #[test]
    fn test_serializes_as_bare_name() {
        let json = serde_json::to_string(&Label::Suicidal).unwrap();

        assert_eq!(json, "\"Suicidal\"");
        assert_eq!(Label::Stress.to_string(), "Stress");
    }

    #[test]
    fn test_names_in_class_order() {
        let names: Vec<_> = Label::ALL.iter().map(|label| label.name()).collect();

        assert_eq!(
            names,
            vec!["Anxiety", "Normal", "Depression", "Suicidal", "Stress"]
        );
    }
}
