//! Dining table catalog

use serde::{Deserialize, Serialize};

/// A physical table on the floor plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    /// 1-based position in the catalog
    pub id: u32,
    pub capacity: u32,
}

/// The restaurant's fixed table layout, in floor-plan order
///
/// Table ids are 1-based catalog positions and stay stable for the
/// lifetime of the process. Assignment policies that scan "in catalog
/// order" iterate this sequence front to back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCatalog {
    tables: Vec<DiningTable>,
}

impl TableCatalog {
    /// Builds a catalog from capacities, assigning ids by position
    pub fn from_capacities<I>(capacities: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let tables = capacities
            .into_iter()
            .enumerate()
            .map(|(index, capacity)| DiningTable {
                id: index as u32 + 1,
                capacity,
            })
            .collect();
        Self { tables }
    }

    /// Tables in catalog order
    pub fn tables(&self) -> &[DiningTable] {
        &self.tables
    }

    /// Looks up a table by id
    pub fn get(&self, id: u32) -> Option<DiningTable> {
        self.tables.iter().find(|t| t.id == id).copied()
    }

    /// Tables with room for `party_size`, smallest capacity first;
    /// equal capacities keep their catalog order
    pub fn tightest_fit(&self, party_size: u32) -> Vec<DiningTable> {
        let mut fitting: Vec<DiningTable> = self
            .tables
            .iter()
            .filter(|t| t.capacity >= party_size)
            .copied()
            .collect();
        fitting.sort_by_key(|t| t.capacity);
        fitting
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Default for TableCatalog {
    /// The standard eight-table floor plan: three 2-tops, three 4-tops,
    /// two 6-tops
    fn default() -> Self {
        Self::from_capacities([2, 2, 2, 4, 4, 4, 6, 6])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_catalog_position() {
        let catalog = TableCatalog::default();
        assert_eq!(catalog.len(), 8);
        let ids: Vec<u32> = catalog.tables().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(catalog.get(4).map(|t| t.capacity), Some(4));
        assert_eq!(catalog.get(9), None);
    }

    #[test]
    fn test_tightest_fit_orders_by_capacity() {
        let catalog = TableCatalog::from_capacities([6, 2, 4, 2]);
        let ids: Vec<u32> = catalog.tightest_fit(2).iter().map(|t| t.id).collect();
        // Capacity ascending, catalog order within equal capacities
        assert_eq!(ids, vec![2, 4, 3, 1]);
    }

    #[test]
    fn test_tightest_fit_excludes_small_tables() {
        let catalog = TableCatalog::default();
        let fitting = catalog.tightest_fit(5);
        assert!(fitting.iter().all(|t| t.capacity >= 5));
        assert_eq!(fitting.len(), 2);
    }

    #[test]
    fn test_tightest_fit_empty_when_party_too_large() {
        let catalog = TableCatalog::default();
        assert!(catalog.tightest_fit(7).is_empty());
    }
}
