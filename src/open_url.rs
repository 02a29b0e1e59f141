use anyhow::Result;
use std::process::Command;

/// Open a story link in the user's browser. A configured command takes
/// precedence; otherwise fall back to the system default handler.
pub fn open_url(url: &str, open_command: Option<&str>) -> Result<()> {
    if let Some(cmd) = open_command {
        let _ = Command::new(cmd).arg(url).spawn();
        return Ok(());
    }
    if open::that(url).is_ok() {
        return Ok(());
    }
    // Last resort: try firefox directly
    let _ = Command::new("firefox").arg(url).spawn();
    Ok(())
}
