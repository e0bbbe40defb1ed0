//! Terminal rendering
//!
//! Prints transcript entries as they are appended and a step indicator on
//! every progress change.

use colored::*;
use sentinex_core::domain::step::{ProgressSnapshot, StepId, StepStatus};
use sentinex_core::domain::transcript::{EntryKind, Role, TranscriptEntry};
use sentinex_launchpad::TranscriptSink;

/// Sink that writes to stdout
pub struct TerminalSink {
    /// Print the step indicator on progress changes
    show_steps: bool,
}

impl TerminalSink {
    pub fn launchpad() -> Self {
        Self { show_steps: true }
    }

    pub fn chat() -> Self {
        Self { show_steps: false }
    }
}

impl TranscriptSink for TerminalSink {
    fn on_entry(&self, entry: &TranscriptEntry) {
        print_entry(entry);
    }

    fn on_progress(&self, progress: &ProgressSnapshot) {
        if self.show_steps && progress.is_active() {
            println!("{}", step_line(progress));
        }
    }

    fn on_reset(&self) {
        println!("{}", "─".repeat(80).dimmed());
    }
}

/// Print a transcript entry
pub fn print_entry(entry: &TranscriptEntry) {
    let time = entry
        .timestamp
        .with_timezone(&chrono::Local)
        .format("%H:%M:%S")
        .to_string()
        .dimmed();

    match entry.role {
        Role::User => println!("{} {} {}", time, "you ›".cyan().bold(), entry.text.bold()),
        Role::System => {
            let (marker, text) = match entry.kind {
                EntryKind::Info => ("•".normal(), entry.text.normal()),
                EntryKind::Success => ("✓".green(), entry.text.green()),
                EntryKind::Warning => ("⚠".yellow(), entry.text.yellow()),
                EntryKind::Error => ("✗".red(), entry.text.red()),
            };
            println!("{} {} {}", time, marker, text);
        }
    }

    for link in &entry.links {
        println!("         {} {}: {}", "↗".cyan(), link.label, link.url.underline());
    }
}

/// One-line step indicator, e.g. `[✓ Market Analysis] [▸ Contract Deployment] ...`
fn step_line(progress: &ProgressSnapshot) -> String {
    StepId::ALL
        .iter()
        .map(|&step| {
            let status = progress.status(step);
            let label = format!("[{} {}]", step_marker(status), step.label());
            match status {
                StepStatus::Completed => label.green().to_string(),
                StepStatus::Current => label.cyan().bold().to_string(),
                StepStatus::Pending => label.dimmed().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn step_marker(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Completed => "✓",
        StepStatus::Current => "▸",
        StepStatus::Pending => " ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_markers() {
        let progress = ProgressSnapshot {
            current: Some(StepId::Deploy),
            completed: vec![StepId::Analyze],
        };
        assert_eq!(step_marker(progress.status(StepId::Analyze)), "✓");
        assert_eq!(step_marker(progress.status(StepId::Deploy)), "▸");
        assert_eq!(step_marker(progress.status(StepId::Mint)), " ");
    }

    #[test]
    fn test_step_line_lists_every_step() {
        let line = step_line(&ProgressSnapshot {
            current: Some(StepId::Analyze),
            completed: Vec::new(),
        });
        for step in StepId::ALL {
            assert!(line.contains(step.label()));
        }
    }
}
