//! Per-player payoff tables.
//!
//! A table has one row per case and one column per [`Variable`]. Columns
//! are identified by position: renaming a variable changes only its
//! display name, never which cells belong to it. A snapshot keys the data
//! by the *current* display names.

use std::collections::BTreeMap;

use crate::case::{CASE_COUNT, CaseId};
use crate::error::{CoreError, CoreResult};
use crate::player::Player;

/// Payoff data for one player: variable name → case → value.
pub type PayoffSnapshot = BTreeMap<String, BTreeMap<CaseId, f64>>;

/// Coerce a user-entered cell value to a number.
///
/// Anything that does not parse as a finite number becomes `0`, so a cell
/// is never undefined when read.
pub fn parse_cell(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// A named payoff contributor with one value per case.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name: String,
    cells: [f64; CASE_COUNT],
}

impl Variable {
    fn new(name: String) -> Self {
        Self {
            name,
            cells: [0.0; CASE_COUNT],
        }
    }

    /// Current display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The identifier a payoff function uses to refer to this variable:
    /// trimmed, lowercased, spaces replaced by underscores.
    pub fn symbol(&self) -> String {
        self.name.trim().to_lowercase().replace(' ', "_")
    }

    /// Value for one case.
    pub fn cell(&self, case: CaseId) -> f64 {
        self.cells[case.index()]
    }

    /// All values in catalog order.
    pub fn cells(&self) -> &[f64; CASE_COUNT] {
        &self.cells
    }
}

/// An ordered set of variable columns for one player.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffTable {
    player: Player,
    variables: Vec<Variable>,
}

impl PayoffTable {
    /// A table with one row per case and no variable columns.
    pub fn new(player: Player) -> Self {
        Self {
            player,
            variables: Vec::new(),
        }
    }

    /// Clear every variable and cell, leaving the case rows only.
    pub fn initialize(&mut self) {
        self.variables.clear();
        log::debug!("initialized {} table", self.player);
    }

    /// The player this table belongs to.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Variables in column order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// The variable at a column, if it exists.
    pub fn get(&self, column: usize) -> Option<&Variable> {
        self.variables.get(column)
    }

    /// Number of variable columns.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns true if no variable has been added.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Append a variable with all cells set to zero. Returns its column.
    pub fn add_variable(&mut self, name: &str) -> CoreResult<usize> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::BlankVariableName);
        }
        self.variables.push(Variable::new(name.to_string()));
        let column = self.variables.len() - 1;
        log::debug!("{} table: added \"{name}\" at column {column}", self.player);
        Ok(column)
    }

    /// Change a variable's display name. A blank name keeps the previous
    /// one. Returns the name the column shows afterwards.
    pub fn rename_variable(&mut self, column: usize, new_name: &str) -> CoreResult<&str> {
        let player = self.player;
        let variable = self.column_mut(column)?;
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            log::debug!("{player} table: blank rename of column {column}, keeping \"{}\"", variable.name);
        } else {
            variable.name = trimmed.to_string();
        }
        Ok(&variable.name)
    }

    /// Set one cell. Non-finite values are stored as zero.
    pub fn set_cell(&mut self, column: usize, case: CaseId, value: f64) -> CoreResult<()> {
        let variable = self.column_mut(column)?;
        variable.cells[case.index()] = if value.is_finite() { value } else { 0.0 };
        Ok(())
    }

    /// Set one cell from raw user input, coercing invalid text to zero.
    /// Returns the stored value.
    pub fn set_cell_input(&mut self, column: usize, case: CaseId, raw: &str) -> CoreResult<f64> {
        let value = parse_cell(raw);
        self.set_cell(column, case, value)?;
        Ok(value)
    }

    /// Read every column under its current display name.
    ///
    /// Columns are folded in order, so when two variables share a name the
    /// later column's data replaces the earlier one.
    pub fn snapshot(&self) -> PayoffSnapshot {
        let mut data = PayoffSnapshot::new();
        for variable in &self.variables {
            let cells = CaseId::in_order().map(|case| (case, variable.cell(case))).collect();
            if data.insert(variable.name.clone(), cells).is_some() {
                log::warn!(
                    "{} table: duplicate variable name \"{}\", later column wins",
                    self.player,
                    variable.name
                );
            }
        }
        data
    }

    /// Display names that more than one column currently uses.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for variable in &self.variables {
            *counts.entry(variable.name()).or_default() += 1;
        }
        counts
            .into_iter()
            .filter(|(_, n)| *n > 1)
            .map(|(name, _)| name)
            .collect()
    }

    fn column_mut(&mut self, column: usize) -> CoreResult<&mut Variable> {
        let len = self.variables.len();
        let player = self.player;
        self.variables
            .get_mut(column)
            .ok_or(CoreError::ColumnOutOfRange {
                player,
                index: column,
                len,
            })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn table() -> PayoffTable {
        PayoffTable::new(Player::P1)
    }

    #[test]
    fn new_table_has_no_variables() {
        let t = table();
        assert!(t.is_empty());
        assert!(t.snapshot().is_empty());
    }

    #[test]
    fn add_variable_defaults_cells_to_zero() {
        let mut t = table();
        let col = t.add_variable("revenue").unwrap();
        assert_eq!(col, 0);
        assert_eq!(t.get(0).unwrap().cells(), &[0.0; CASE_COUNT]);
    }

    #[test]
    fn add_variable_trims_name() {
        let mut t = table();
        t.add_variable("  carbon tax ").unwrap();
        assert_eq!(t.get(0).unwrap().name(), "carbon tax");
    }

    #[test]
    fn blank_names_are_rejected() {
        let mut t = table();
        t.add_variable("a").unwrap();
        assert_eq!(t.add_variable(""), Err(CoreError::BlankVariableName));
        assert_eq!(t.add_variable("   "), Err(CoreError::BlankVariableName));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn snapshot_end_to_end() {
        let mut t = table();
        t.initialize();
        let col = t.add_variable("a").unwrap();
        t.set_cell(col, CaseId::Case1, 5.0).unwrap();
        t.set_cell(col, CaseId::Case3, -2.0).unwrap();

        let snap = t.snapshot();
        assert_eq!(snap.len(), 1);
        let a = &snap["a"];
        let values: Vec<f64> = CaseId::in_order().map(|c| a[&c]).collect();
        assert_eq!(values, [5.0, 0.0, -2.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn rename_keeps_cells() {
        let mut t = table();
        t.add_variable("old").unwrap();
        t.set_cell(0, CaseId::Case4, 7.5).unwrap();

        assert_eq!(t.rename_variable(0, " new ").unwrap(), "new");
        let snap = t.snapshot();
        assert!(!snap.contains_key("old"));
        assert_eq!(snap["new"][&CaseId::Case4], 7.5);
    }

    #[test]
    fn blank_rename_reverts_to_last_name() {
        let mut t = table();
        t.add_variable("first").unwrap();
        t.rename_variable(0, "second").unwrap();
        assert_eq!(t.rename_variable(0, "  ").unwrap(), "second");
        assert_eq!(t.get(0).unwrap().name(), "second");
    }

    #[test]
    fn rename_out_of_range() {
        let mut t = table();
        let err = t.rename_variable(3, "x").unwrap_err();
        assert_eq!(
            err,
            CoreError::ColumnOutOfRange {
                player: Player::P1,
                index: 3,
                len: 0
            }
        );
    }

    #[test]
    fn invalid_input_coerces_to_zero() {
        let mut t = table();
        t.add_variable("x").unwrap();
        t.set_cell(0, CaseId::Case2, 3.0).unwrap();
        assert_eq!(t.set_cell_input(0, CaseId::Case2, "abc").unwrap(), 0.0);
        assert_eq!(t.get(0).unwrap().cell(CaseId::Case2), 0.0);
        assert_eq!(t.set_cell_input(0, CaseId::Case2, " 65.66 ").unwrap(), 65.66);
        t.set_cell(0, CaseId::Case5, f64::NAN).unwrap();
        assert_eq!(t.get(0).unwrap().cell(CaseId::Case5), 0.0);
    }

    #[test]
    fn parse_cell_rejects_non_finite() {
        assert_eq!(parse_cell("inf"), 0.0);
        assert_eq!(parse_cell("NaN"), 0.0);
        assert_eq!(parse_cell(""), 0.0);
        assert_eq!(parse_cell("-12"), -12.0);
    }

    #[test]
    fn duplicate_names_last_column_wins() {
        let mut t = table();
        t.add_variable("risk").unwrap();
        t.add_variable("other").unwrap();
        t.set_cell(0, CaseId::Case1, 1.0).unwrap();
        t.set_cell(1, CaseId::Case1, 2.0).unwrap();
        t.rename_variable(1, "risk").unwrap();

        assert_eq!(t.duplicate_names(), ["risk"]);
        let snap = t.snapshot();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap["risk"][&CaseId::Case1], 2.0);
    }

    #[test]
    fn initialize_clears_variables() {
        let mut t = table();
        t.add_variable("a").unwrap();
        t.add_variable("b").unwrap();
        t.initialize();
        assert!(t.is_empty());
        t.initialize();
        assert!(t.is_empty());
    }

    #[test]
    fn symbol_hint() {
        let mut t = table();
        t.add_variable("National Wealth").unwrap();
        assert_eq!(t.get(0).unwrap().symbol(), "national_wealth");
    }

    proptest! {
        #[test]
        fn adding_preserves_existing_cells(
            values in prop::collection::vec(prop::array::uniform8(-1e6f64..1e6), 0..6)
        ) {
            let mut t = table();
            for (col, row) in values.iter().enumerate() {
                t.add_variable(&format!("v{col}")).unwrap();
                for case in CaseId::in_order() {
                    t.set_cell(col, case, row[case.index()]).unwrap();
                }
            }
            let before = t.clone();
            let k = t.len();
            t.add_variable("fresh").unwrap();

            prop_assert_eq!(t.len(), k + 1);
            for col in 0..k {
                prop_assert_eq!(t.get(col), before.get(col));
            }
            prop_assert_eq!(t.get(k).unwrap().cells(), &[0.0; CASE_COUNT]);
        }

        #[test]
        fn rename_moves_data_to_new_name(
            row in prop::array::uniform8(-1e6f64..1e6),
            new_name in "[a-z]{1,10}"
        ) {
            let mut t = table();
            t.add_variable("OLD NAME").unwrap();
            for case in CaseId::in_order() {
                t.set_cell(0, case, row[case.index()]).unwrap();
            }
            t.rename_variable(0, &new_name).unwrap();
            let snap = t.snapshot();
            let cells = &snap[&new_name];
            for case in CaseId::in_order() {
                prop_assert_eq!(cells[&case], row[case.index()]);
            }
        }
    }
}
