//! `deskcloud version` — print the tool version.

use anyhow::Result;

/// Run the version command.
pub fn run(json: bool) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    if json {
        let out = serde_json::json!({ "name": "deskcloud", "version": version });
        println!("{}", serde_json::to_string(&out)?);
    } else {
        println!("deskcloud {version}");
    }
    Ok(())
}
