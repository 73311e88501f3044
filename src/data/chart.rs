//! Channel activity chart model.
//!
//! A proportion chart with one segment per channel. Percentages are taken
//! over the segments actually displayed, not over all messages.

use crate::api::ChannelCount;

/// One channel's share of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSegment {
    pub name: String,
    pub count: u64,
    /// Share of the displayed total, 0..1.
    pub share: f64,
}

impl ChartSegment {
    /// Hover label: channel name, raw count and share with one decimal.
    pub fn label(&self) -> String {
        format!("{}: {} ({:.1}%)", self.name, self.count, self.share * 100.0)
    }
}

/// A rendered chart instance.
///
/// The controller keeps at most one of these alive; `generation` identifies
/// which build it is.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelChart {
    pub generation: u64,
    pub segments: Vec<ChartSegment>,
}

impl ChannelChart {
    /// Build a chart from channel counts. Returns `None` for an empty list,
    /// which leaves the chart area blank.
    pub fn build(generation: u64, channels: &[ChannelCount]) -> Option<Self> {
        if channels.is_empty() {
            return None;
        }

        let total: u64 = channels.iter().map(|c| c.count).sum();
        let segments = channels
            .iter()
            .map(|c| ChartSegment {
                name: c.name.clone(),
                count: c.count,
                share: if total > 0 {
                    c.count as f64 / total as f64
                } else {
                    0.0
                },
            })
            .collect();

        Some(Self {
            generation,
            segments,
        })
    }

    pub fn total(&self) -> u64 {
        self.segments.iter().map(|s| s.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(items: &[(&str, u64)]) -> Vec<ChannelCount> {
        items
            .iter()
            .map(|(name, count)| ChannelCount {
                name: name.to_string(),
                count: *count,
            })
            .collect()
    }

    #[test]
    fn test_share_of_displayed_segments() {
        let chart = ChannelChart::build(1, &counts(&[("A", 3), ("B", 1)])).unwrap();
        assert_eq!(chart.segments.len(), 2);
        assert_eq!(chart.segments[0].label(), "A: 3 (75.0%)");
        assert_eq!(chart.segments[1].label(), "B: 1 (25.0%)");
        assert_eq!(chart.total(), 4);
    }

    #[test]
    fn test_empty_channels_give_no_chart() {
        assert!(ChannelChart::build(1, &[]).is_none());
    }

    #[test]
    fn test_zero_counts_do_not_divide_by_zero() {
        let chart = ChannelChart::build(1, &counts(&[("A", 0)])).unwrap();
        assert_eq!(chart.segments[0].label(), "A: 0 (0.0%)");
    }
}
