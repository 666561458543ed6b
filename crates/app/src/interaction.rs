//! Raw interaction events reported by the backend.

/// How the widget was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Press,
    ValueChanged,
}

/// A widget interaction, addressed by the widget's registry key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    pub key: String,
    pub kind: InteractionKind,
    pub value: Option<i64>,
}

impl Interaction {
    #[must_use]
    pub fn press(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: InteractionKind::Press,
            value: None,
        }
    }

    #[must_use]
    pub fn value_changed(key: impl Into<String>, value: i64) -> Self {
        Self {
            key: key.into(),
            kind: InteractionKind::ValueChanged,
            value: Some(value),
        }
    }
}
