pub fn run(preset: Option<&str>) -> Result<(), String> {
    let session = super::open_session(preset)?;
    let payload = session.build_request().map_err(|e| e.to_string())?;
    let json = payload.to_json_pretty().map_err(|e| e.to_string())?;

    println!("{json}");
    Ok(())
}
