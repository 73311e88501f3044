//! Message filters: the editable controls and the applied filter set.

use std::collections::BTreeMap;
use std::fmt;

/// A filter the message query understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterKey {
    Decision,
    Channel,
    MinConfidence,
}

impl FilterKey {
    /// Query parameter name for this filter.
    pub fn param(&self) -> &'static str {
        match self {
            FilterKey::Decision => "decision",
            FilterKey::Channel => "channel",
            FilterKey::MinConfidence => "min_confidence",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterKey::Decision => "Decision",
            FilterKey::Channel => "Channel",
            FilterKey::MinConfidence => "Min confidence",
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.param())
    }
}

/// Values offered by the decision control; empty means "any".
pub const DECISION_OPTIONS: &[&str] = &["", "buy", "hold"];
/// Values offered by the minimum-confidence control; empty means "any".
pub const MIN_CONFIDENCE_OPTIONS: &[&str] = &["", "0.5", "0.7", "0.8", "0.9"];

/// Current values of the three filter controls, before they are applied.
///
/// An empty value means the control is at its default and imposes no
/// constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterControls {
    pub decision: String,
    pub channel: String,
    pub min_confidence: String,
}

impl FilterControls {
    /// Reset every control to its empty default.
    pub fn clear(&mut self) {
        self.decision.clear();
        self.channel.clear();
        self.min_confidence.clear();
    }

    /// Cycle the decision control through [`DECISION_OPTIONS`].
    pub fn cycle_decision(&mut self) {
        self.decision = next_option(DECISION_OPTIONS.iter().copied(), &self.decision);
    }

    /// Cycle the minimum-confidence control through [`MIN_CONFIDENCE_OPTIONS`].
    pub fn cycle_min_confidence(&mut self) {
        self.min_confidence =
            next_option(MIN_CONFIDENCE_OPTIONS.iter().copied(), &self.min_confidence);
    }

    /// Cycle the channel control through "any" followed by `channels`.
    pub fn cycle_channel(&mut self, channels: &[String]) {
        let options = std::iter::once("").chain(channels.iter().map(String::as_str));
        self.channel = next_option(options, &self.channel);
    }

    fn value(&self, key: FilterKey) -> &str {
        match key {
            FilterKey::Decision => &self.decision,
            FilterKey::Channel => &self.channel,
            FilterKey::MinConfidence => &self.min_confidence,
        }
    }
}

/// Pick the option after `current`, wrapping around. Unknown values restart
/// at the first option.
fn next_option<'a>(options: impl Iterator<Item = &'a str>, current: &str) -> String {
    let options: Vec<&str> = options.collect();
    let next = match options.iter().position(|o| *o == current) {
        Some(i) => options.get((i + 1) % options.len()),
        None => options.first(),
    };
    next.copied().unwrap_or_default().to_string()
}

/// The filters currently constraining the message query.
///
/// Only keys with a value are present; there is never an empty-string entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    active: BTreeMap<FilterKey, String>,
}

impl FilterSet {
    /// Build the active set from the controls that have a non-empty value.
    pub fn from_controls(controls: &FilterControls) -> Self {
        let active = [FilterKey::Decision, FilterKey::Channel, FilterKey::MinConfidence]
            .into_iter()
            .filter_map(|key| {
                let value = controls.value(key).trim();
                (!value.is_empty()).then(|| (key, value.to_string()))
            })
            .collect();
        Self { active }
    }

    pub fn get(&self, key: FilterKey) -> Option<&str> {
        self.active.get(&key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterKey, &str)> {
        self.active.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Short description for the filter bar, e.g. `decision=buy channel=alpha`.
    pub fn summary(&self) -> String {
        if self.active.is_empty() {
            return "none".to_string();
        }
        self.iter().map(|(k, v)| format!("{}={}", k, v)).collect::<Vec<_>>().join(" ")
    }
}
