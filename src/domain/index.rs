use crate::error::{Result, SettlementError};
use std::collections::HashMap;

/// Maps record ids to their position in a collection.
///
/// Lookups go through the id, never through the position itself, so records
/// may arrive in any order and ids need not be contiguous.
#[derive(Debug, Default)]
pub struct IdIndex {
    positions: HashMap<u64, usize>,
}

impl IdIndex {
    /// Builds the index, failing on the first repeated id.
    pub fn build<T>(
        records: &[T],
        kind: &'static str,
        id_of: impl Fn(&T) -> u64,
    ) -> Result<Self> {
        let mut positions = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            let id = id_of(record);
            if positions.insert(id, position).is_some() {
                return Err(SettlementError::DuplicateId { kind, id });
            }
        }
        Ok(Self { positions })
    }

    pub fn position(&self, id: u64) -> Option<usize> {
        self.positions.get(&id).copied()
    }
}
