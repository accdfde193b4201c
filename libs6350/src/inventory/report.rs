// libs6350-rs/libs6350/src/inventory/report.rs

use std::fmt;

use crate::types::TagRecord;

/// Outcome of a completed inventory session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryReport {
    tags: Vec<TagRecord>,
    rounds: usize,
}

impl InventoryReport {
    pub fn new(tags: Vec<TagRecord>, rounds: usize) -> Self {
        Self { tags, rounds }
    }

    /// Tags in discovery order.
    pub fn tags(&self) -> &[TagRecord] {
        &self.tags
    }

    pub fn count(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Inventory rounds the session took, the unmasked first round included.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn into_tags(self) -> Vec<TagRecord> {
        self.tags
    }
}

impl fmt::Display for InventoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tags.is_empty() {
            return writeln!(f, "No tags found.");
        }
        for (i, tag) in self.tags.iter().enumerate() {
            writeln!(f, "Transponder {}", i + 1)?;
            writeln!(f, "ID: {}", tag.uid())?;
            writeln!(f, "DSFID: {}", tag.dsfid())?;
            writeln!(f)?;
        }
        writeln!(f, "Total tags found: {}", self.tags.len())
    }
}
