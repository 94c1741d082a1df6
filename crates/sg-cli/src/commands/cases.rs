use sg_core::{CaseLabels, StrategyNames};
use sg_session::view;

pub fn run(nature: &str, p1: &str, p2: &str) -> Result<(), String> {
    let (first, second) = nature.split_once(',').unwrap_or((nature, ""));
    let names = StrategyNames::from_fields(first.trim(), second.trim(), p1, p2);
    let labels = CaseLabels::derive(&names);

    println!("{}", view::case_labels(&labels));
    Ok(())
}
