/// The face-down card pile every player keeps under their cave.
///
/// Identity is the name alone; `card_count` is a quantity, not identity, and
/// has no game box or tree symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cave {
    pub name: String,
    pub card_count: u32,
}

impl Cave {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            card_count: 0,
        }
    }

    /// Returns a new snapshot carrying `card_count`, leaving the receiver
    /// (often a shared catalog instance) untouched.
    #[must_use]
    pub fn with_card_count(&self, card_count: u32) -> Self {
        Self {
            name: self.name.clone(),
            card_count,
        }
    }
}
