//! Mergeability label decision.

use crate::constants::{LABEL_FIX_ME, LABEL_NEEDS_REBASE};
use crate::pull_request::Mergeable;

/// Labels to add and remove in one batched update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelUpdate {
    pub add: Vec<String>,
    pub remove: Vec<String>,
}

impl LabelUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }
}

/// `fix-me` is always removed; `needs-rebase` follows mergeability.
///
/// While GitHub is still computing mergeability the `needs-rebase` label is
/// left as is; the next synchronize or reopen event settles it.
#[must_use]
pub fn decide_labels(mergeable: Mergeable) -> LabelUpdate {
    let mut update = LabelUpdate {
        add: Vec::new(),
        remove: vec![LABEL_FIX_ME.to_string()],
    };

    match mergeable {
        Mergeable::No => update.add.push(LABEL_NEEDS_REBASE.to_string()),
        Mergeable::Yes => update.remove.push(LABEL_NEEDS_REBASE.to_string()),
        Mergeable::Unknown => {}
    }

    update
}
