use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::AlertSink;

lazy_static! {
    static ref INTEGER_PATTERN: Regex = Regex::new(r"^-?[0-9]+$")
        .expect("integer pattern is a valid regex");
}

/// Screen that consumes the day-count collected by a [`BoundedIntegerField`].
pub trait DayCountOwner {
    fn set_day_count(&self, day_count: u32);
    fn update_acquisition_count(&self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Accepted(u32),
    Rejected { message: String, reset_to: String },
}

pub fn is_integer(value: &str) -> bool {
    INTEGER_PATTERN.is_match(value)
}

pub fn is_non_negative(value: &str) -> bool {
    if !is_integer(value) {
        return false;
    }
    // "-0", "-00", .. parse to zero
    match value.strip_prefix('-') {
        Some(digits) => digits.bytes().all(|b| b == b'0'),
        None => true,
    }
}

/// Apply the commit policy to `value` for a field limited to `max_days`.
///
/// Negative input is reported with the "positive" message even when a range
/// message would also apply.
pub fn evaluate_commit(value: &str, max_days: u32) -> CommitOutcome {
    if !is_non_negative(value) {
        return CommitOutcome::Rejected {
            message: format!(
                "Value must be positive and less than {}",
                max_days
            ),
            reset_to: max_days.to_string(),
        };
    }

    // only overflow can fail here, which is above any range
    let count = value.parse::<i64>().unwrap_or(i64::MAX);
    if count < 1 || count > i64::from(max_days) {
        let reset_to = if count < 1 { 1 } else { max_days };
        return CommitOutcome::Rejected {
            message: format!("Value must be in the range [1:{}]", max_days),
            reset_to: reset_to.to_string(),
        };
    }
    CommitOutcome::Accepted(count as u32)
}

struct CommitHandler {
    max_days: u32,
    owner: Rc<dyn DayCountOwner>,
}

pub struct BoundedIntegerField {
    label: String,
    value: String,
    title: Option<String>,
    enabled: bool,
    handler: Option<CommitHandler>,
}

impl BoundedIntegerField {
    pub fn new(label: &str, initial_value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: initial_value.to_string(),
            title: None,
            enabled: true,
            handler: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value<S: Into<String>>(&mut self, value: S) {
        self.value = value.into();
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_integer(&self) -> bool {
        is_integer(&self.value)
    }

    pub fn is_non_negative(&self) -> bool {
        is_non_negative(&self.value)
    }

    /// Restrict commits to `[1, max_days]` and report accepted values to
    /// `owner`. Replaces an earlier registration.
    pub fn on_commit(&mut self, max_days: u32, owner: Rc<dyn DayCountOwner>) {
        self.title = Some(format!("Restricted to {} days.", max_days));
        self.handler = Some(CommitHandler { max_days, owner });
    }

    /// Validate the current value. Returns `None` when no commit handler is
    /// registered.
    pub fn commit(&mut self, alerts: &dyn AlertSink) -> Option<CommitOutcome> {
        let handler = self.handler.as_ref()?;
        let outcome = evaluate_commit(&self.value, handler.max_days);
        match &outcome {
            CommitOutcome::Rejected { message, reset_to } => {
                alerts.alert(message);
                self.value = reset_to.clone();
            }
            CommitOutcome::Accepted(count) => {
                self.value = count.to_string();
                handler.owner.set_day_count(*count);
                handler.owner.update_acquisition_count();
            }
        }
        Some(outcome)
    }
}
