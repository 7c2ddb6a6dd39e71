use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    CalendarDate, DEFAULT_EXCEEDED_MAX_MESSAGE, DEFAULT_EXCEEDED_MIN_MESSAGE,
    DEFAULT_INVALID_FORMAT_MESSAGE, DateBounds, DatePattern, InputMask, MessageTemplate, normalize,
};

/// Configuration for a date field.
///
/// Keys deserialize in camelCase (`format`, `min`, `max`,
/// `invalidFormatMessage`, `exceededMinMessage`, `exceededMaxMessage`,
/// `mask`, `placeholder`); every key is optional.
///
/// Bounds are kept as the raw text they were configured with. Everything
/// derived from them (`min_date`, `formatted_min`, `input_min`, ...) is
/// recomputed on each call, so reassigning a bound can never leave a stale
/// rendering behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FieldConfig {
    format: DatePattern,
    #[serde(skip_serializing_if = "Option::is_none")]
    min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max: Option<String>,
    invalid_format_message: MessageTemplate,
    exceeded_min_message: MessageTemplate,
    exceeded_max_message: MessageTemplate,
    mask: InputMask,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<String>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            format: DatePattern::default(),
            min: None,
            max: None,
            invalid_format_message: DEFAULT_INVALID_FORMAT_MESSAGE.into(),
            exceeded_min_message: DEFAULT_EXCEEDED_MIN_MESSAGE.into(),
            exceeded_max_message: DEFAULT_EXCEEDED_MAX_MESSAGE.into(),
            mask: InputMask::default(),
            placeholder: None,
        }
    }
}

impl FieldConfig {
    #[must_use]
    pub fn with_format(mut self, format: DatePattern) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_min(mut self, min: impl Into<String>) -> Self {
        self.set_min(Some(min.into()));
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: impl Into<String>) -> Self {
        self.set_max(Some(max.into()));
        self
    }

    #[must_use]
    pub fn with_invalid_format_message(mut self, template: impl Into<MessageTemplate>) -> Self {
        self.invalid_format_message = template.into();
        self
    }

    #[must_use]
    pub fn with_exceeded_min_message(mut self, template: impl Into<MessageTemplate>) -> Self {
        self.exceeded_min_message = template.into();
        self
    }

    #[must_use]
    pub fn with_exceeded_max_message(mut self, template: impl Into<MessageTemplate>) -> Self {
        self.exceeded_max_message = template.into();
        self
    }

    #[must_use]
    pub fn with_mask(mut self, mask: InputMask) -> Self {
        self.mask = mask;
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Reassigns the lower bound. Blank text clears it.
    pub fn set_min(&mut self, min: Option<String>) {
        self.min = min.filter(|m| !m.trim().is_empty());
    }

    /// Reassigns the upper bound. Blank text clears it.
    pub fn set_max(&mut self, max: Option<String>) {
        self.max = max.filter(|m| !m.trim().is_empty());
    }

    pub const fn format(&self) -> &DatePattern {
        &self.format
    }

    pub fn min(&self) -> Option<&str> {
        self.min.as_deref()
    }

    pub fn max(&self) -> Option<&str> {
        self.max.as_deref()
    }

    pub const fn invalid_format_message(&self) -> &MessageTemplate {
        &self.invalid_format_message
    }

    pub const fn exceeded_min_message(&self) -> &MessageTemplate {
        &self.exceeded_min_message
    }

    pub const fn exceeded_max_message(&self) -> &MessageTemplate {
        &self.exceeded_max_message
    }

    pub const fn mask(&self) -> &InputMask {
        &self.mask
    }

    /// Text shown in the empty input; the display format unless overridden.
    pub fn placeholder(&self) -> &str {
        self.placeholder
            .as_deref()
            .unwrap_or_else(|| self.format.as_str())
    }

    fn bound_date(&self, which: &str, raw: Option<&str>) -> Option<CalendarDate> {
        let raw = raw?;
        let date = normalize::parse(raw, &self.format);
        if date.is_none() {
            debug!("ignoring unparseable {which} bound {raw:?}");
        }
        date
    }

    /// The lower bound, or `None` when unset or unparseable.
    pub fn min_date(&self) -> Option<CalendarDate> {
        self.bound_date("min", self.min())
    }

    /// The upper bound, or `None` when unset or unparseable.
    pub fn max_date(&self) -> Option<CalendarDate> {
        self.bound_date("max", self.max())
    }

    pub fn bounds(&self) -> DateBounds {
        DateBounds::new(self.min_date(), self.max_date())
    }

    /// The lower bound in the display format, as `:min` renders it.
    pub fn formatted_min(&self) -> Option<String> {
        self.min_date().map(|date| self.format.format(&date))
    }

    /// The upper bound in the display format, as `:max` renders it.
    pub fn formatted_max(&self) -> Option<String> {
        self.max_date().map(|date| self.format.format(&date))
    }

    /// The lower bound in canonical form, for the input element's `min` attribute.
    pub fn input_min(&self) -> Option<String> {
        self.min_date().map(|date| date.to_string())
    }

    /// The upper bound in canonical form, for the input element's `max` attribute.
    pub fn input_max(&self) -> Option<String> {
        self.max_date().map(|date| date.to_string())
    }
}
