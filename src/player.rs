//! Hands a playable identifier to the local Spotify desktop app.

use std::process::{Command, Stdio};

use crate::error::{Error, Result};

fn command_for(uri: &str) -> Command {
    if cfg!(target_os = "macos") {
        let script = format!(
            r#"tell application "Spotify"
    play track "{}"
end tell"#,
            uri
        );
        let mut cmd = Command::new("osascript");
        cmd.arg("-e").arg(script);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", uri]);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(uri);
        cmd
    }
}

/// Starts playback of `uri` (`spotify:track:<id>:play`) without waiting for
/// the launcher to exit.
pub fn play(uri: &str) -> Result<()> {
    let mut cmd = command_for(uri);
    log::debug!("Launching player: {:?}", cmd);

    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|e| Error::Player(format!("failed to launch player: {}", e)))
}
