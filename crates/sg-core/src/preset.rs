//! Pre-filled games that load into a session without typing every cell.

use crate::case::{CASE_COUNT, CaseId};
use crate::error::CoreResult;
use crate::player::Player;
use crate::table::PayoffTable;

/// A complete game description: names, strategy fields, and both tables.
#[derive(Debug, Clone)]
pub struct GamePreset {
    /// Short identifier used to select the preset.
    pub id: String,
    /// Player 1's name.
    pub p1_name: String,
    /// Player 2's name.
    pub p2_name: String,
    /// Nature's two state names.
    pub nature: [String; 2],
    /// Player 1's comma-separated strategy field.
    pub p1_strategies: String,
    /// Player 2's comma-separated strategy field.
    pub p2_strategies: String,
    /// Player 1's payoff table.
    pub p1_table: PayoffTable,
    /// Player 2's payoff table.
    pub p2_table: PayoffTable,
}

/// Identifiers of every built-in preset.
pub const PRESET_IDS: &[&str] = &["regulator"];

/// Look up a built-in preset by identifier.
pub fn by_id(id: &str) -> Option<GamePreset> {
    match id.trim().to_lowercase().as_str() {
        "regulator" | "regulator_firm" => Some(regulator_firm()),
        _ => None,
    }
}

/// Carbon regulation game.
///
/// Nature decides whether the economy is stable. The regulator chooses
/// whether to intervene with a carbon tax, and the firm, having seen the
/// regulator's move, decides whether to relocate abroad.
pub fn regulator_firm() -> GamePreset {
    let p1 = table(
        Player::P1,
        &[
            ("revenue_minus_cost", [75.0, 75.0, 75.0, 75.0, 65.66, 65.66, 65.66, 65.66]),
            ("carbon_tax", [0.0, 0.0, 0.0, 0.0, -12.0, -12.0, -12.0, -12.0]),
            ("risk", [-50.0, -5.0, -5.0, 0.0, -4.0, -4.0, -4.0, -4.0]),
        ],
    );
    let p2 = table(
        Player::P2,
        &[
            ("national_wealth", [45.42, 45.42, 45.42, 45.42, 33.93, 33.93, 33.93, 33.93]),
            ("technology_dependence", [-1.0, -1.0, -1.0, -1.0, 1.0, 1.0, 1.0, 1.0]),
            ("reputation", [-4.0, -3.0, -2.0, -1.0, -4.0, -3.0, -2.0, -1.0]),
            ("carbon_tax_p2", [23.0, 23.0, 23.0, 23.0, 0.0, 0.0, 0.0, 0.0]),
        ],
    );

    GamePreset {
        id: "regulator".to_string(),
        p1_name: "regulator".to_string(),
        p2_name: "firm".to_string(),
        nature: ["stable".to_string(), "unstable".to_string()],
        p1_strategies: "intervene, not intervene".to_string(),
        p2_strategies: "relocate, not relocate".to_string(),
        p1_table: p1,
        p2_table: p2,
    }
}

fn table(player: Player, columns: &[(&str, [f64; CASE_COUNT])]) -> PayoffTable {
    let mut table = PayoffTable::new(player);
    for (name, values) in columns {
        // Static data; only a typo in the values above can fail here.
        if let Err(e) = fill(&mut table, name, values) {
            log::error!("preset column \"{name}\" rejected: {e}");
        }
    }
    table
}

fn fill(table: &mut PayoffTable, name: &str, values: &[f64; CASE_COUNT]) -> CoreResult<()> {
    let column = table.add_variable(name)?;
    for case in CaseId::in_order() {
        table.set_cell(column, case, values[case.index()])?;
    }
    Ok(())
}
