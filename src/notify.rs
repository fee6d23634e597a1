//! Desktop notification when a run completes
//!
//! Notifications are best effort: any failure is logged and otherwise ignored.

use anyhow::{bail, Result};
use log::{debug, warn};
use tokio::process::Command;

use crate::actions::Action;
use crate::core::RunSummary;

const NOTIFICATION_TITLE: &str = "Multi Repo Helper";

/// Builds the notification body
pub fn notification_text(action: &Action, summary: &RunSummary) -> String {
    let mut text = format!(
        "MRH finished running:\n\u{2022}\t{action}\n{} succeeded, {} failed",
        summary.succeeded, summary.failed
    );
    if summary.has_failures() {
        text.push_str(&format!("\nFailed: {}", summary.failed_names.join(", ")));
    }
    text
}

/// Sends the completion notification for the current platform
pub async fn notify(action: &Action, summary: &RunSummary) {
    let text = notification_text(action, summary);
    let sent = match std::env::consts::OS {
        "macos" => notify_macos(&text).await,
        "linux" => notify_linux(&text).await,
        other => {
            warn!("Desktop notifications are not supported on {other}");
            return;
        }
    };
    match sent {
        Ok(()) => debug!("Notification sent"),
        Err(e) => warn!("Failed to send notification: {e}"),
    }
}

fn applescript_string(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

async fn notify_macos(text: &str) -> Result<()> {
    let script = format!(
        "tell application \"System Events\" to display dialog {} buttons {{\"OK\"}} default button 1 with title {}",
        applescript_string(text),
        applescript_string(NOTIFICATION_TITLE)
    );
    let output = Command::new("osascript").arg("-e").arg(script).output().await?;
    if !output.status.success() {
        bail!("osascript: {}", String::from_utf8_lossy(&output.stderr).trim());
    }
    Ok(())
}

async fn notify_linux(text: &str) -> Result<()> {
    let output = Command::new("notify-send")
        .arg(NOTIFICATION_TITLE)
        .arg(text)
        .output()
        .await?;
    if !output.status.success() {
        bail!("notify-send: {}", String::from_utf8_lossy(&output.stderr).trim());
    }
    Ok(())
}
