//! Game editing session.
//!
//! `GameSession` is the explicit owner of everything the user edits: the
//! free-text fields, the case labels derived from them, both payoff
//! tables, and the result board. Every field edit recomputes the labels
//! once for both tables. Building a request takes a snapshot, so later
//! edits never reach a payload that is already on its way.

use sg_core::preset::{self, GamePreset, PRESET_IDS};
use sg_core::{CASE_COUNT, CaseId, CaseLabels, CoreError, PayoffTable, Player, parse_cell};
use sg_solver::{RequestBuilder, RequestPayload, ResultView, SolverOutcome, SolverResult, render};

use crate::board::ResultBoard;
use crate::error::{SessionError, SessionResult};
use crate::fields::SessionFields;
use crate::view;

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Print this text (may be empty).
    Text(String),
    /// Send this payload to the solver, then report back through
    /// [`GameSession::record_outcome`].
    Submit(Box<RequestPayload>),
    /// End the session.
    Quit,
}

/// An interactive game-editing session.
#[derive(Debug, Clone)]
pub struct GameSession {
    fields: SessionFields,
    labels: CaseLabels,
    p1: PayoffTable,
    p2: PayoffTable,
    board: ResultBoard,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// A session with default fields and two empty tables.
    pub fn new() -> Self {
        Self::with_fields(SessionFields::default())
    }

    /// A session with the given fields and two empty tables.
    pub fn with_fields(fields: SessionFields) -> Self {
        let labels = CaseLabels::derive(&fields.strategy_names());
        Self {
            fields,
            labels,
            p1: PayoffTable::new(Player::P1),
            p2: PayoffTable::new(Player::P2),
            board: ResultBoard::new(),
        }
    }

    /// The current form fields.
    pub fn fields(&self) -> &SessionFields {
        &self.fields
    }

    /// The case labels shared by both tables.
    pub fn labels(&self) -> &CaseLabels {
        &self.labels
    }

    /// One player's table.
    pub fn table(&self, player: Player) -> &PayoffTable {
        match player {
            Player::P1 => &self.p1,
            Player::P2 => &self.p2,
        }
    }

    fn table_mut(&mut self, player: Player) -> &mut PayoffTable {
        match player {
            Player::P1 => &mut self.p1,
            Player::P2 => &mut self.p2,
        }
    }

    /// The result display area.
    pub fn board(&self) -> &ResultBoard {
        &self.board
    }

    /// Set a player's name.
    pub fn set_player_name(&mut self, player: Player, name: &str) {
        *self.fields.name_mut(player) = name.trim().to_string();
    }

    /// Set both Nature state names.
    pub fn set_nature(&mut self, first: &str, second: &str) {
        self.fields.nature = [first.trim().to_string(), second.trim().to_string()];
        self.refresh_labels();
    }

    /// Set a player's comma-separated strategy field.
    pub fn set_strategies(&mut self, player: Player, field: &str) {
        *self.fields.strategies_mut(player) = field.to_string();
        self.refresh_labels();
    }

    /// Set a player's payoff function text.
    pub fn set_function(&mut self, player: Player, expr: &str) {
        *self.fields.function_mut(player) = expr.to_string();
    }

    fn refresh_labels(&mut self) {
        self.labels = CaseLabels::derive(&self.fields.strategy_names());
    }

    /// Add a variable column to a player's table. Returns its zero-based column.
    pub fn add_variable(&mut self, player: Player, name: &str) -> SessionResult<usize> {
        Ok(self.table_mut(player).add_variable(name)?)
    }

    /// Rename a column. Returns the name it shows afterwards.
    pub fn rename_variable(
        &mut self,
        player: Player,
        column: usize,
        name: &str,
    ) -> SessionResult<String> {
        Ok(self
            .table_mut(player)
            .rename_variable(column, name)?
            .to_string())
    }

    /// Set a cell from raw input. Returns the stored value.
    pub fn set_cell(
        &mut self,
        player: Player,
        column: usize,
        case: CaseId,
        raw: &str,
    ) -> SessionResult<f64> {
        Ok(self.table_mut(player).set_cell_input(column, case, raw)?)
    }

    /// Clear both tables. Fields are kept.
    pub fn reset(&mut self) {
        self.p1.initialize();
        self.p2.initialize();
        self.refresh_labels();
    }

    /// Replace fields and tables with a preset's.
    pub fn load_preset(&mut self, preset: GamePreset) {
        self.fields.p1_name = preset.p1_name;
        self.fields.p2_name = preset.p2_name;
        self.fields.nature = preset.nature;
        self.fields.p1_strategies = preset.p1_strategies;
        self.fields.p2_strategies = preset.p2_strategies;
        self.fields.p1_function.clear();
        self.fields.p2_function.clear();
        self.p1 = preset.p1_table;
        self.p2 = preset.p2_table;
        self.refresh_labels();
        log::info!("loaded preset \"{}\"", preset.id);
    }

    /// Snapshot the session into a solver request.
    pub fn build_request(&self) -> SessionResult<RequestPayload> {
        let f = &self.fields;
        let builder = RequestBuilder {
            p1_name: &f.p1_name,
            p2_name: &f.p2_name,
            nature: [f.nature[0].as_str(), f.nature[1].as_str()],
            p1_strategies: &f.p1_strategies,
            p2_strategies: &f.p2_strategies,
            p1_function: &f.p1_function,
            p2_function: &f.p2_function,
            p1_table: &self.p1,
            p2_table: &self.p2,
        };
        Ok(builder.build()?)
    }

    /// Render a finished exchange and put it on the board, replacing
    /// whatever arrived before.
    pub fn record_outcome(&mut self, result: &SolverResult<SolverOutcome>) -> &ResultView {
        let view = render(result, &self.fields.p1_name, &self.fields.p2_name);
        self.board.show(view)
    }

    /// Process one line of user input.
    pub fn process(&mut self, input: &str) -> SessionResult<Reply> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Reply::Text(String::new()));
        }

        let (cmd, rest) = split_word(trimmed);
        let text = match cmd.to_lowercase().as_str() {
            "name" => self.do_name(rest)?,
            "nature" => self.do_nature(rest),
            "strategies" => self.do_strategies(rest)?,
            "function" => self.do_function(rest)?,
            "add" => self.do_add(rest)?,
            "rename" => self.do_rename(rest)?,
            "set" => self.do_set(rest)?,
            "fill" => self.do_fill(rest)?,
            "labels" => view::case_labels(&self.labels).to_string(),
            "show" => self.do_show(rest)?,
            "payload" => self.build_request()?.to_json_pretty()?,
            "solve" | "calculate" => return Ok(Reply::Submit(Box::new(self.build_request()?))),
            "results" => match self.board.current() {
                Some(view) => view.to_string(),
                None => "No results yet.".to_string(),
            },
            "reset" => {
                self.reset();
                "Both tables cleared.".to_string()
            }
            "preset" => self.do_preset(rest)?,
            "status" => self.do_status(),
            "help" => HELP.to_string(),
            "quit" | "q" | "exit" => return Ok(Reply::Quit),
            other => return Err(SessionError::UnknownCommand(other.to_string())),
        };
        Ok(Reply::Text(text))
    }

    fn do_name(&mut self, rest: &str) -> SessionResult<String> {
        let (player, name) = player_arg(rest, "name p1|p2 <name>")?;
        self.set_player_name(player, name);
        Ok(format!("{player} is now \"{}\"", self.fields.name(player)))
    }

    fn do_nature(&mut self, rest: &str) -> String {
        let (first, second) = rest.split_once(',').unwrap_or((rest, ""));
        self.set_nature(first, second);
        let names = self.fields.strategy_names();
        format!("Nature states: {}, {}", names.nature[0], names.nature[1])
    }

    fn do_strategies(&mut self, rest: &str) -> SessionResult<String> {
        let (player, field) = player_arg(rest, "strategies p1|p2 <a>, <b>")?;
        self.set_strategies(player, field);
        let names = self.fields.strategy_names();
        let pair = match player {
            Player::P1 => &names.p1,
            Player::P2 => &names.p2,
        };
        Ok(format!("{player} strategies: {}, {}", pair[0], pair[1]))
    }

    fn do_function(&mut self, rest: &str) -> SessionResult<String> {
        let (player, expr) = player_arg(rest, "function p1|p2 <expression>")?;
        self.set_function(player, expr);
        if expr.is_empty() {
            Ok(format!("{player} payoff: sum of all variables"))
        } else {
            Ok(format!("{player} payoff: {expr}"))
        }
    }

    fn do_add(&mut self, rest: &str) -> SessionResult<String> {
        let (player, name) = player_arg(rest, "add p1|p2 <variable name>")?;
        let column = self.add_variable(player, name)?;
        let table = self.table(player);
        let variable = &table.variables()[column];
        let mut out = format!(
            "Added \"{}\" to {player} as column {} (symbol: {})",
            variable.name(),
            column + 1,
            variable.symbol()
        );
        push_duplicate_warning(&mut out, table);
        Ok(out)
    }

    fn do_rename(&mut self, rest: &str) -> SessionResult<String> {
        const USAGE: &str = "rename p1|p2 <column> <new name>";
        let (player, rest) = player_arg(rest, USAGE)?;
        let (col, name) = split_word(rest);
        let column = view::column_index(col).ok_or_else(|| usage(USAGE))?;
        let shown = self.rename_variable(player, column, name)?;
        let mut out = if name.trim().is_empty() {
            format!("Name left blank; column {} keeps \"{shown}\"", column + 1)
        } else {
            format!("Column {} of {player} is now \"{shown}\"", column + 1)
        };
        push_duplicate_warning(&mut out, self.table(player));
        Ok(out)
    }

    fn do_set(&mut self, rest: &str) -> SessionResult<String> {
        const USAGE: &str = "set p1|p2 <column> <case> <value>";
        let (player, rest) = player_arg(rest, USAGE)?;
        let (col, rest) = split_word(rest);
        let (case, raw) = split_word(rest);
        let column = view::column_index(col).ok_or_else(|| usage(USAGE))?;
        if case.is_empty() {
            return Err(usage(USAGE));
        }
        let case: CaseId = case.parse()?;
        let value = self.set_cell(player, column, case, raw)?;
        Ok(format!("{player} column {} {case} = {value}", column + 1))
    }

    fn do_fill(&mut self, rest: &str) -> SessionResult<String> {
        const USAGE: &str = "fill p1|p2 <column> <v1> ... <v8>";
        let (player, rest) = player_arg(rest, USAGE)?;
        let (col, rest) = split_word(rest);
        let column = view::column_index(col).ok_or_else(|| usage(USAGE))?;
        let raw: Vec<&str> = rest.split_whitespace().collect();
        if raw.len() != CASE_COUNT {
            return Err(usage(USAGE));
        }
        let table = self.table_mut(player);
        if table.get(column).is_none() {
            return Err(CoreError::ColumnOutOfRange {
                player,
                index: column,
                len: table.len(),
            }
            .into());
        }
        for (case, value) in CaseId::in_order().zip(raw) {
            table.set_cell(column, case, parse_cell(value))?;
        }
        Ok(format!("{player} column {} filled", column + 1))
    }

    fn do_show(&self, rest: &str) -> SessionResult<String> {
        let players: Vec<Player> = if rest.trim().is_empty() {
            Player::BOTH.to_vec()
        } else {
            vec![rest.parse()?]
        };
        let blocks: Vec<String> = players
            .into_iter()
            .map(|player| {
                let table = self.table(player);
                let mut out = format!("{} ({player})\n", self.fields.name(player));
                out.push_str(&view::payoff_table(table, &self.labels).to_string());
                if !table.is_empty() {
                    out.push_str("\nSymbols:\n");
                    out.push_str(&view::symbols(table));
                }
                let function = self.fields.function(player).trim();
                if !function.is_empty() {
                    out.push_str(&format!("\nPayoff: {function}"));
                }
                out
            })
            .collect();
        Ok(blocks.join("\n\n"))
    }

    fn do_preset(&mut self, rest: &str) -> SessionResult<String> {
        let id = rest.trim();
        if id.is_empty() {
            return Ok(format!("Presets: {}", PRESET_IDS.join(", ")));
        }
        let preset = preset::by_id(id).ok_or_else(|| SessionError::UnknownPreset(id.to_string()))?;
        self.load_preset(preset);
        Ok(format!(
            "Loaded preset \"{id}\": {} vs {}",
            self.fields.p1_name, self.fields.p2_name
        ))
    }

    fn do_status(&self) -> String {
        let f = &self.fields;
        let mut out = format!("{} (p1): {} variables\n", f.p1_name, self.p1.len());
        out.push_str(&format!("{} (p2): {} variables\n", f.p2_name, self.p2.len()));
        out.push_str(&format!("Nature: {}, {}\n", f.nature[0], f.nature[1]));
        out.push_str(&format!("Results received: {}", self.board.received()));
        out
    }
}

const HELP: &str = "\
Game Commands:
  name p1|p2 <name>                  Set a player's name
  nature <state 1>, <state 2>        Set Nature's two states
  strategies p1|p2 <a>, <b>          Set a player's two actions
  function p1|p2 <expression>        Set a payoff function (empty: sum)

Table Commands:
  add p1|p2 <name>                   Add a variable column (all cells 0)
  rename p1|p2 <column> <name>       Rename a column (blank keeps the old name)
  set p1|p2 <column> <case> <value>  Set one cell (invalid numbers become 0)
  fill p1|p2 <column> <v1> ... <v8>  Set a whole column in case order
  labels                             Show the label of every case
  show [p1|p2]                       Show the payoff tables
  reset                              Clear both tables
  preset [name]                      List or load a built-in game

Solver Commands:
  payload                            Print the request payload
  solve                              Send the game to the solver
  results                            Show the last result
  status                             Show session status
  help                               Show this help
  quit                               Exit";

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (input, ""),
    }
}

fn player_arg<'a>(rest: &'a str, usage_text: &str) -> SessionResult<(Player, &'a str)> {
    let (head, tail) = split_word(rest);
    if head.is_empty() {
        return Err(usage(usage_text));
    }
    Ok((head.parse()?, tail))
}

fn usage(text: &str) -> SessionError {
    SessionError::InvalidCommand(format!("usage: {text}"))
}

fn push_duplicate_warning(out: &mut String, table: &PayoffTable) {
    for name in table.duplicate_names() {
        out.push_str(&format!(
            "\nwarning: several columns are named \"{name}\"; the last one wins in the payload"
        ));
    }
}
