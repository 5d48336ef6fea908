use super::PouchContents;

/// What the presentation layer should be told about the pouch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PouchChange {
    /// Same contents as last published, or still absent.
    Unchanged,
    /// New contents to publish.
    Updated(PouchContents),
    /// The pouch disappeared. Reported once per present-to-absent transition.
    Removed,
}

impl PouchChange {
    pub fn is_changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Suppresses repeated pouch notifications.
///
/// Holds the last published contents and only reports a change when the
/// newly decoded mapping differs structurally from it.
#[derive(Clone, Debug, Default)]
pub struct PouchChangeDetector {
    last_published: Option<PouchContents>,
}

impl PouchChangeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_published(&self) -> Option<&PouchContents> {
        self.last_published.as_ref()
    }

    pub fn observe(&mut self, present: bool, contents: PouchContents) -> PouchChange {
        if !present {
            return match self.last_published.take() {
                Some(previous) if !previous.is_empty() => PouchChange::Removed,
                _ => PouchChange::Unchanged,
            };
        }

        if self.last_published.as_ref() == Some(&contents) {
            return PouchChange::Unchanged;
        }

        self.last_published = Some(contents.clone());
        PouchChange::Updated(contents)
    }

    /// Forgets the last published contents so the next observation publishes.
    pub fn reset(&mut self) {
        self.last_published = None;
    }
}
