use crate::egui_app::ui::style::{self, StatusTone};
use egui::Color32;

/// Most recent entries kept in the status log.
const MAX_STATUS_LOG: usize = 50;

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
    /// Rolling status log entries.
    pub log: Vec<String>,
}

impl StatusBarState {
    /// Status shown before anything has been submitted.
    pub fn idle() -> Self {
        Self {
            text: "Fill in your metrics to get a prediction".into(),
            badge_label: StatusTone::Idle.label().into(),
            badge_color: style::status_badge_color(StatusTone::Idle),
            log: Vec::new(),
        }
    }

    /// Replace the current message and append it to the log.
    pub fn set(&mut self, text: String, tone: StatusTone) {
        self.badge_label = tone.label().into();
        self.badge_color = style::status_badge_color(tone);
        self.log.push(text.clone());
        if self.log.len() > MAX_STATUS_LOG {
            let excess = self.log.len() - MAX_STATUS_LOG;
            self.log.drain(..excess);
        }
        self.text = text;
    }

    /// Concatenate log entries into a single displayable string.
    pub fn log_text(&self) -> String {
        self.log.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_updates_badge_and_bounds_log() {
        let mut status = StatusBarState::idle();
        for idx in 0..(MAX_STATUS_LOG + 5) {
            status.set(format!("entry {idx}"), StatusTone::Info);
        }
        assert_eq!(status.badge_label, "Info");
        assert_eq!(status.log.len(), MAX_STATUS_LOG);
        assert_eq!(status.log.first().map(String::as_str), Some("entry 5"));
        assert_eq!(status.text, format!("entry {}", MAX_STATUS_LOG + 4));
    }
}
