use colored::Colorize;

pub fn run(preset: &str, url: Option<&str>, timeout: Option<u64>) -> Result<(), String> {
    let mut session = super::open_session(Some(preset))?;
    let payload = session.build_request().map_err(|e| e.to_string())?;
    let client = super::solver_client(url, timeout)?;

    println!("  {} {preset}", "Solving".bold());
    let result = super::runtime()?.block_on(client.solve(&payload));
    let view = session.record_outcome(&result);
    println!("{view}");

    result.map(|_| ()).map_err(|e| e.to_string())
}
