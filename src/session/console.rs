use crate::simulator::SimulationResult;
use std::time::{SystemTime, UNIX_EPOCH};

pub const CLEARED_MESSAGE: &str = "Console cleared. Ready for new output.";

/// Transcript lines shown for one compile-and-run.
pub fn render_transcript(result: &SimulationResult, timestamp: &str) -> Vec<String> {
    let mut lines = vec![format!("[{}] Compilation started...", timestamp)];

    match result {
        SimulationResult::Success { output } => {
            lines.push(format!("[{}] Compilation successful!", timestamp));
            lines.push(format!("[{}] Running program...", timestamp));
            lines.push("--- Program Output ---".to_string());
            // Program output keeps its own line breaks
            lines.extend(output.lines().map(str::to_string));
            lines.push("--- End of Output ---".to_string());
            lines.push(format!(
                "[{}] Program exited with code {}",
                timestamp,
                result.exit_code()
            ));
        }
        SimulationResult::Failure { error } => {
            lines.push(format!("[{}] Compilation failed!", timestamp));
            lines.push(format!("Error: {}", error));
        }
    }

    lines
}

/// Wall-clock `HH:MM:SS UTC`. No local time zone is applied, so the
/// label says so.
pub fn timestamp_now() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{} UTC", format_clock(secs))
}

pub fn format_clock(unix_secs: u64) -> String {
    let day = unix_secs % 86_400;
    format!("{:02}:{:02}:{:02}", day / 3600, (day % 3600) / 60, day % 60)
}

/// The console pane. Each run replaces the previous transcript.
#[derive(Debug, Clone, Default)]
pub struct Console {
    lines: Vec<String>,
}

impl Console {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn show_result(&mut self, result: &SimulationResult, timestamp: &str) {
        self.lines = render_transcript(result, timestamp);
    }

    pub fn clear(&mut self) {
        self.lines = vec![CLEARED_MESSAGE.to_string()];
    }

    pub fn text(&self) -> String {
        let mut out = self.lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }
}
