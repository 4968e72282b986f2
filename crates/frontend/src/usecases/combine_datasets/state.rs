//! Column-selection state for combining datasets.
//!
//! Two pools of dataset columns exist: the available pool (columns that can
//! still be pulled into the base dataset) and the selected pool (columns
//! already pulled in). A column keeps its key in the pool it left, flagged
//! [`ColumnFlag::MovedOut`], so it can come back later. The filtered view
//! of the available pool is derived on demand from the active search term
//! rather than stored.

use contracts::datasets::DatasetTable;
use std::collections::BTreeMap;
use std::fmt;

/// Status of a column within one pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnFlag {
    /// Present in the pool, unchecked
    Unselected,
    /// Present in the pool, checked, pending a bulk move
    Selected,
    /// Moved to the other pool; the key stays so the column can return
    MovedOut,
}

impl ColumnFlag {
    /// Whether the column still shows in this pool's view.
    pub fn is_present(self) -> bool {
        !matches!(self, ColumnFlag::MovedOut)
    }

    pub fn is_selected(self) -> bool {
        matches!(self, ColumnFlag::Selected)
    }

    fn from_checked(checked: bool) -> Self {
        if checked {
            ColumnFlag::Selected
        } else {
            ColumnFlag::Unselected
        }
    }
}

/// Toggle against a (table, column) pair the pool does not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    UnknownTable(String),
    UnknownColumn { table: String, column: String },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::UnknownTable(table) => {
                write!(f, "table '{}' is not in this pool", table)
            }
            SelectionError::UnknownColumn { table, column } => {
                write!(f, "column '{}.{}' is not in this pool", table, column)
            }
        }
    }
}

/// Nested table -> column -> flag mapping for one pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnsDict(BTreeMap<String, BTreeMap<String, ColumnFlag>>);

impl ColumnsDict {
    /// Upsert used by the bulk moves: creates the table sub-map when
    /// absent and unconditionally reactivates the entry as `Selected`.
    fn activate(&mut self, table: &str, column: &str) {
        self.0
            .entry(table.to_string())
            .or_default()
            .insert(column.to_string(), ColumnFlag::Selected);
    }

    fn set(&mut self, table: &str, column: &str, flag: ColumnFlag) -> Result<(), SelectionError> {
        let columns = self
            .0
            .get_mut(table)
            .ok_or_else(|| SelectionError::UnknownTable(table.to_string()))?;
        let slot = columns
            .get_mut(column)
            .ok_or_else(|| SelectionError::UnknownColumn {
                table: table.to_string(),
                column: column.to_string(),
            })?;
        *slot = flag;
        Ok(())
    }

    pub fn get(&self, table: &str, column: &str) -> Option<ColumnFlag> {
        self.0.get(table).and_then(|columns| columns.get(column)).copied()
    }

    /// Per-column flags of one table, if the pool holds the table at all.
    pub fn table(&self, table: &str) -> Option<&BTreeMap<String, ColumnFlag>> {
        self.0.get(table)
    }

    pub fn table_names(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// A table shows in a pool's view only while at least one of its
    /// columns is still present there.
    pub fn table_visible(&self, table: &str) -> bool {
        self.0
            .get(table)
            .is_some_and(|columns| columns.values().any(|flag| flag.is_present()))
    }

    pub fn any_selected(&self) -> bool {
        self.0
            .values()
            .flat_map(|columns| columns.values())
            .any(|flag| flag.is_selected())
    }

    pub fn any_present(&self) -> bool {
        self.0
            .values()
            .flat_map(|columns| columns.values())
            .any(|flag| flag.is_present())
    }

    fn selected_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .flat_map(|(table, columns)| {
                columns
                    .iter()
                    .filter(|(_, flag)| flag.is_selected())
                    .map(move |(column, _)| (table.clone(), column.clone()))
            })
            .collect()
    }
}

/// Selection state of every dataset column across the two pools.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSelection {
    available: ColumnsDict,
    selected: ColumnsDict,
    search_term: String,
}

impl ColumnSelection {
    /// Derive the initial state from a fetched dataset catalog: every
    /// column starts unselected in the available pool.
    pub fn from_tables(tables: &[DatasetTable]) -> Self {
        let mut available = ColumnsDict::default();
        for table in tables {
            available.0.insert(
                table.table_name.clone(),
                table
                    .columns
                    .iter()
                    .map(|column| (column.clone(), ColumnFlag::Unselected))
                    .collect(),
            );
        }
        Self {
            available,
            selected: ColumnsDict::default(),
            search_term: String::new(),
        }
    }

    pub fn available(&self) -> &ColumnsDict {
        &self.available
    }

    pub fn selected(&self) -> &ColumnsDict {
        &self.selected
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The available pool narrowed to tables whose name contains the
    /// active search term. Case-sensitive, table names only; an empty
    /// term matches everything.
    pub fn filtered(&self) -> ColumnsDict {
        if self.search_term.is_empty() {
            return self.available.clone();
        }
        ColumnsDict(
            self.available
                .0
                .iter()
                .filter(|(name, _)| name.contains(self.search_term.as_str()))
                .map(|(name, columns)| (name.clone(), columns.clone()))
                .collect(),
        )
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Check or uncheck a column of the available pool.
    pub fn toggle_available(
        &mut self,
        table: &str,
        column: &str,
        checked: bool,
    ) -> Result<(), SelectionError> {
        self.available.set(table, column, ColumnFlag::from_checked(checked))
    }

    /// Check or uncheck a column of the selected pool.
    pub fn toggle_selected(
        &mut self,
        table: &str,
        column: &str,
        checked: bool,
    ) -> Result<(), SelectionError> {
        self.selected.set(table, column, ColumnFlag::from_checked(checked))
    }

    /// Move every checked column of the available pool into the selected
    /// pool. The source entry stays behind as `MovedOut`.
    pub fn move_selected_to_base(&mut self) {
        for (table, column) in self.available.selected_pairs() {
            self.selected.activate(&table, &column);
            // the pair came from this map, the set cannot miss
            let _ = self.available.set(&table, &column, ColumnFlag::MovedOut);
        }
    }

    /// Inverse of [`move_selected_to_base`](Self::move_selected_to_base):
    /// checked columns of the selected pool return to the available pool.
    pub fn move_back_to_available(&mut self) {
        for (table, column) in self.selected.selected_pairs() {
            self.available.activate(&table, &column);
            let _ = self.selected.set(&table, &column, ColumnFlag::MovedOut);
        }
    }

    /// The Add action applies only while the filtered view has a checked
    /// column.
    pub fn any_filtered_selected(&self) -> bool {
        self.filtered().any_selected()
    }

    /// The Remove action shows only while the selected pool holds a
    /// column that has not moved back out.
    pub fn any_selected_present(&self) -> bool {
        self.selected.any_present()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(name: &str, columns: &[&str]) -> DatasetTable {
        DatasetTable {
            table_name: name.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn orders_state() -> ColumnSelection {
        ColumnSelection::from_tables(&[table("orders", &["id", "total"])])
    }

    #[test]
    fn test_derivation_starts_unselected() {
        let state = orders_state();
        assert_eq!(state.available().get("orders", "id"), Some(ColumnFlag::Unselected));
        assert_eq!(state.available().get("orders", "total"), Some(ColumnFlag::Unselected));
        assert!(state.selected().table("orders").is_none());
    }

    #[test]
    fn test_move_selected_to_base_scenario() {
        // available {"orders": {"id": unselected, "total": selected}}
        let mut state = orders_state();
        state.toggle_available("orders", "total", true).unwrap();
        state.move_selected_to_base();

        assert_eq!(state.available().get("orders", "id"), Some(ColumnFlag::Unselected));
        assert_eq!(state.available().get("orders", "total"), Some(ColumnFlag::MovedOut));
        assert_eq!(state.selected().get("orders", "total"), Some(ColumnFlag::Selected));
        assert_eq!(state.selected().get("orders", "id"), None);
    }

    #[test]
    fn test_move_touches_only_checked_columns() {
        let mut state = ColumnSelection::from_tables(&[
            table("orders", &["id", "total"]),
            table("users", &["name"]),
        ]);
        state.toggle_available("orders", "id", true).unwrap();
        state.move_selected_to_base();

        // checked column moved, everything else untouched
        assert_eq!(state.available().get("orders", "id"), Some(ColumnFlag::MovedOut));
        assert_eq!(state.selected().get("orders", "id"), Some(ColumnFlag::Selected));
        assert_eq!(state.available().get("orders", "total"), Some(ColumnFlag::Unselected));
        assert_eq!(state.available().get("users", "name"), Some(ColumnFlag::Unselected));
        assert!(state.selected().table("users").is_none());
    }

    #[test]
    fn test_move_roundtrip_restores_available() {
        let mut state = orders_state();
        state.toggle_available("orders", "total", true).unwrap();
        state.move_selected_to_base();
        state.move_back_to_available();

        // the checked flag is back in the available pool; the selected
        // pool keeps the key as moved-out instead of dropping it
        assert_eq!(state.available().get("orders", "total"), Some(ColumnFlag::Selected));
        assert_eq!(state.selected().get("orders", "total"), Some(ColumnFlag::MovedOut));
    }

    #[test]
    fn test_move_back_reactivates_unconditionally() {
        let mut state = orders_state();
        state.toggle_available("orders", "total", true).unwrap();
        state.move_selected_to_base();
        state.move_back_to_available();
        // second trip over: the available entry was MovedOut and comes
        // back as Selected through the upsert
        state.move_selected_to_base();

        assert_eq!(state.available().get("orders", "total"), Some(ColumnFlag::MovedOut));
        assert_eq!(state.selected().get("orders", "total"), Some(ColumnFlag::Selected));
    }

    #[test]
    fn test_filtered_empty_term_is_independent_copy() {
        let mut state = orders_state();
        let snapshot = state.filtered();
        state.toggle_available("orders", "id", true).unwrap();

        // mutating the state does not reach into the earlier snapshot
        assert_eq!(snapshot.get("orders", "id"), Some(ColumnFlag::Unselected));
        assert_eq!(state.available().get("orders", "id"), Some(ColumnFlag::Selected));
    }

    #[test]
    fn test_filtered_matches_table_names_by_substring() {
        let mut state = ColumnSelection::from_tables(&[
            table("btc_price", &["open"]),
            table("eth_price", &["open"]),
            table("orders", &["id"]),
        ]);

        state.set_search("price");
        let filtered = state.filtered();
        let names: Vec<&String> = filtered.table_names().collect();
        assert_eq!(names, vec!["btc_price", "eth_price"]);

        // case-sensitive by design
        state.set_search("PRICE");
        assert_eq!(state.filtered().table_names().count(), 0);

        // column names never match
        state.set_search("open");
        assert_eq!(state.filtered().table_names().count(), 0);

        state.set_search("");
        assert_eq!(state.filtered(), *state.available());
    }

    #[test]
    fn test_hidden_columns_still_move() {
        // a column checked before a narrowing search still moves: the
        // bulk move walks the full available pool, not the filtered view
        let mut state = ColumnSelection::from_tables(&[
            table("btc_price", &["open"]),
            table("orders", &["id"]),
        ]);
        state.toggle_available("orders", "id", true).unwrap();
        state.set_search("price");
        state.move_selected_to_base();

        assert_eq!(state.selected().get("orders", "id"), Some(ColumnFlag::Selected));
        assert_eq!(state.available().get("orders", "id"), Some(ColumnFlag::MovedOut));
    }

    #[test]
    fn test_add_enabled_only_for_filtered_selection() {
        let mut state = ColumnSelection::from_tables(&[
            table("btc_price", &["open"]),
            table("orders", &["id"]),
        ]);
        assert!(!state.any_filtered_selected());

        state.toggle_available("orders", "id", true).unwrap();
        assert!(state.any_filtered_selected());

        // the checked column falls outside the filtered view
        state.set_search("price");
        assert!(!state.any_filtered_selected());
    }

    #[test]
    fn test_remove_visibility_follows_selected_pool() {
        let mut state = orders_state();
        assert!(!state.any_selected_present());

        state.toggle_available("orders", "total", true).unwrap();
        state.move_selected_to_base();
        assert!(state.any_selected_present());

        // unchecked but still present counts
        state.toggle_selected("orders", "total", false).unwrap();
        assert!(state.any_selected_present());

        state.toggle_selected("orders", "total", true).unwrap();
        state.move_back_to_available();
        assert!(!state.any_selected_present());
    }

    #[test]
    fn test_table_hidden_when_all_columns_moved_out() {
        let mut state = orders_state();
        state.toggle_available("orders", "id", true).unwrap();
        state.toggle_available("orders", "total", true).unwrap();
        state.move_selected_to_base();

        assert!(!state.available().table_visible("orders"));
        assert!(state.selected().table_visible("orders"));
    }

    #[test]
    fn test_toggle_unknown_key_fails_loudly() {
        let mut state = orders_state();
        assert_eq!(
            state.toggle_available("nope", "id", true),
            Err(SelectionError::UnknownTable("nope".to_string()))
        );
        assert_eq!(
            state.toggle_available("orders", "nope", true),
            Err(SelectionError::UnknownColumn {
                table: "orders".to_string(),
                column: "nope".to_string(),
            })
        );
        // the selected pool starts empty, toggling there misses too
        assert!(state.toggle_selected("orders", "id", true).is_err());
    }

    #[test]
    fn test_pools_never_both_active_after_move() {
        let mut state = ColumnSelection::from_tables(&[table("orders", &["id", "total", "fee"])]);
        state.toggle_available("orders", "id", true).unwrap();
        state.toggle_available("orders", "fee", true).unwrap();
        state.move_selected_to_base();

        for column in ["id", "total", "fee"] {
            let in_available = state
                .available()
                .get("orders", column)
                .is_some_and(|f| f.is_present());
            let in_selected = state
                .selected()
                .get("orders", column)
                .is_some_and(|f| f.is_present());
            assert!(!(in_available && in_selected), "column '{}' active in both pools", column);
        }
    }
}
