//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::api::Decision;
use crate::data::ConfidenceTier;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for buy decisions and high confidence.
    pub positive: Color,
    /// Color for hold decisions and medium confidence.
    pub neutral: Color,
    /// Color for low confidence and errors.
    pub negative: Color,
    /// Color for unknown values and placeholders.
    pub muted: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for header rows in tables.
    pub header: Style,
    /// Style for selected/highlighted rows.
    pub selected: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            positive: Color::Green,
            neutral: Color::Yellow,
            negative: Color::Red,
            muted: Color::DarkGray,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            positive: Color::Green,
            neutral: Color::Yellow,
            negative: Color::Red,
            muted: Color::Gray,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::LightBlue).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Style for a decision label
    pub fn decision_style(&self, decision: Decision) -> Style {
        match decision {
            Decision::Buy => Style::default().fg(self.positive).add_modifier(Modifier::BOLD),
            Decision::Hold => Style::default().fg(self.neutral),
            Decision::Unknown => Style::default().fg(self.muted),
        }
    }

    /// Style for a confidence value
    pub fn tier_style(&self, tier: ConfidenceTier) -> Style {
        match tier {
            ConfidenceTier::High => Style::default().fg(self.positive),
            ConfidenceTier::Medium => Style::default().fg(self.neutral),
            ConfidenceTier::Low => Style::default().fg(self.negative),
            ConfidenceTier::Unknown => Style::default().fg(self.muted),
        }
    }

    /// Style for an in-place region error
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.negative)
    }

    /// Style for a pagination control, dimmed when disabled
    pub fn control_style(&self, enabled: bool) -> Style {
        if enabled {
            Style::default().fg(self.highlight)
        } else {
            Style::default().fg(self.muted).add_modifier(Modifier::DIM)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_styles_are_distinct() {
        let theme = Theme::dark();
        let styles = [
            theme.tier_style(ConfidenceTier::High),
            theme.tier_style(ConfidenceTier::Medium),
            theme.tier_style(ConfidenceTier::Low),
            theme.tier_style(ConfidenceTier::Unknown),
        ];
        for (i, a) in styles.iter().enumerate() {
            for b in styles.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_disabled_control_is_dimmed() {
        let theme = Theme::light();
        assert!(theme.control_style(false).add_modifier.contains(Modifier::DIM));
        assert!(!theme.control_style(true).add_modifier.contains(Modifier::DIM));
    }
}
