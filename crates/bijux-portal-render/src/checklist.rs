use std::collections::BTreeSet;

use bijux_portal_model::Project;

use crate::display::ChecklistItem;

/// Read-only view of which required actions a reader has acknowledged.
///
/// The display layer owns persistence; it loads the set of acknowledged
/// indexes and hands it over as this value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistState {
    acknowledged: BTreeSet<usize>,
}

impl ChecklistState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_acknowledged(&self, index: usize) -> bool {
        self.acknowledged.contains(&index)
    }

    #[must_use]
    pub fn acknowledged_count(&self) -> usize {
        self.acknowledged.len()
    }
}

impl From<BTreeSet<usize>> for ChecklistState {
    fn from(acknowledged: BTreeSet<usize>) -> Self {
        Self { acknowledged }
    }
}

impl FromIterator<usize> for ChecklistState {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            acknowledged: iter.into_iter().collect(),
        }
    }
}

/// One item per required action; indexes beyond the action list are ignored.
#[must_use]
pub fn checklist(project: &Project, ack: &ChecklistState) -> Vec<ChecklistItem> {
    project
        .required_actions
        .iter()
        .enumerate()
        .map(|(index, text)| ChecklistItem {
            index,
            text: text.clone(),
            acknowledged: ack.is_acknowledged(index),
        })
        .collect()
}
