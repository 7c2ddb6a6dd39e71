//! The date field a host embeds: keystroke path, host path, and the state
//! and messages derived from them.

use std::fmt;

use log::debug;

use crate::{
    CalendarDate, FieldConfig, INVALID_CLASS, VALID_CLASS, ValidationError, normalize,
    validate::{check_bounds, format_error},
};

/// Extra check run on the stored value once it is a valid, in-range date.
/// Returns a message to reject the value.
pub type ValueTest = Box<dyn Fn(&str) -> Option<String>>;

/// Rewrites the stored value after the field has normalized it.
pub type CleanHook = Box<dyn Fn(String) -> String>;

/// The element the field renders into.
pub trait InputSurface {
    /// Assigns the element's text. An element may refuse text it cannot
    /// represent, in which case `text` reads back empty.
    fn set_text(&mut self, text: &str);

    fn text(&self) -> &str;
}

/// A plain text element that shows whatever it is given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSurface {
    text: String,
}

impl InputSurface for TextSurface {
    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }

    fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldState {
    #[default]
    Empty,
    /// The mask is not yet filled; nothing is validated.
    PartiallyTyped,
    ValidAccepted(CalendarDate),
    Invalid(ValidationError),
}

pub struct DateField<S = TextSurface> {
    config: FieldConfig,
    surface: S,
    /// Canonical when the text names a real date, otherwise the unmasked text.
    value: String,
    /// The date `value` was normalized from, kept so it is never re-parsed.
    parsed: Option<CalendarDate>,
    state: FieldState,
    should_validate: bool,
    tests: Vec<ValueTest>,
    clean: Option<CleanHook>,
}

impl DateField<TextSurface> {
    pub fn new(config: FieldConfig) -> Self {
        Self::with_surface(config, TextSurface::default())
    }
}

impl<S: InputSurface> DateField<S> {
    pub fn with_surface(config: FieldConfig, surface: S) -> Self {
        Self {
            config,
            surface,
            value: String::new(),
            parsed: None,
            state: FieldState::Empty,
            should_validate: false,
            tests: Vec::new(),
            clean: None,
        }
    }

    /// Adds a check that runs after the built-in date check passes. Checks
    /// run in the order added and the first message wins.
    #[must_use]
    pub fn with_test(mut self, test: impl Fn(&str) -> Option<String> + 'static) -> Self {
        self.tests.push(Box::new(test));
        self
    }

    /// Sets a rewrite applied to every stored value after normalization.
    /// Host tests see the rewritten value; the built-in date check does not.
    #[must_use]
    pub fn with_clean(mut self, clean: impl Fn(String) -> String + 'static) -> Self {
        self.clean = Some(Box::new(clean));
        self
    }

    /// Stores `parsed` in canonical form, or `fallback` when there is no date,
    /// then runs the host rewrite.
    fn store(&mut self, parsed: Option<CalendarDate>, fallback: &str) {
        let value = parsed.map_or_else(|| fallback.to_owned(), |date| date.to_string());
        self.value = match &self.clean {
            Some(clean) => clean(value),
            None => value,
        };
        self.parsed = parsed;
    }

    /// Handles the element's text after a keystroke.
    ///
    /// The text is conformed to the mask and stripped of its literals before
    /// parsing. While the mask is incomplete the field stays
    /// `PartiallyTyped` and reports nothing.
    pub fn input(&mut self, text: &str) {
        let mask = self.config.mask();
        let masked = mask.apply(text);
        let complete = mask.is_complete(&masked);
        let raw = mask.unmask(&masked);

        self.surface.set_text(&masked);

        let next = if raw.trim().is_empty() {
            self.value.clear();
            self.parsed = None;
            FieldState::Empty
        } else if complete {
            self.store(normalize::parse(&raw, self.config.format()), &raw);
            self.evaluate()
        } else {
            self.store(None, &raw);
            FieldState::PartiallyTyped
        };
        self.transition(next);
    }

    /// Assigns a value from the host, in the display format or canonical form.
    ///
    /// The element is given the display rendering. If it refuses that text
    /// (a native date element only takes canonical dates), the canonical
    /// value is written instead so the element never shows stale text.
    pub fn set_value(&mut self, raw: &str) {
        let parsed = normalize::parse_canonical_first(raw, self.config.format());
        let display = parsed.map_or_else(
            || raw.to_owned(),
            |date| self.config.format().format(&date),
        );
        self.store(parsed, raw);

        self.surface.set_text(&display);
        if self.surface.text().is_empty() && !self.value.is_empty() {
            debug!(
                "surface refused {display:?}, writing canonical {:?}",
                self.value
            );
            self.surface.set_text(&self.value);
        }

        let next = self.evaluate();
        if !matches!(next, FieldState::Invalid(_)) {
            self.should_validate = true;
        }
        self.transition(next);
    }

    /// The user left the field; messages and the class hook become visible.
    pub fn blur(&mut self) {
        if !self.value.is_empty() {
            self.should_validate = true;
        }
    }

    /// Reassigns the lower bound and re-validates a fully typed value.
    pub fn set_min(&mut self, min: Option<String>) {
        self.config.set_min(min);
        self.revalidate();
    }

    /// Reassigns the upper bound and re-validates a fully typed value.
    pub fn set_max(&mut self, max: Option<String>) {
        self.config.set_max(max);
        self.revalidate();
    }

    fn revalidate(&mut self) {
        if matches!(
            self.state,
            FieldState::ValidAccepted(_) | FieldState::Invalid(_)
        ) {
            let next = self.evaluate();
            self.transition(next);
        }
    }

    fn evaluate(&self) -> FieldState {
        if self.value.trim().is_empty() {
            return FieldState::Empty;
        }
        let checked = self
            .parsed
            .ok_or_else(|| format_error(&self.config))
            .and_then(|date| check_bounds(date, &self.config));
        match checked {
            Ok(date) => match self.tests.iter().find_map(|test| test(&self.value)) {
                Some(message) => FieldState::Invalid(ValidationError::Custom(message)),
                None => FieldState::ValidAccepted(date),
            },
            Err(err) => FieldState::Invalid(err),
        }
    }

    fn transition(&mut self, next: FieldState) {
        if self.state != next {
            debug!("date field {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }

    pub const fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub const fn state(&self) -> &FieldState {
        &self.state
    }

    /// The stored value: canonical `YYYY-MM-DD` for a real date, otherwise
    /// the unmasked text. `None` when the field is empty.
    pub fn value(&self) -> Option<&str> {
        (!self.value.is_empty()).then_some(self.value.as_str())
    }

    /// The accepted date, if the field holds one.
    pub const fn date(&self) -> Option<CalendarDate> {
        match self.state {
            FieldState::ValidAccepted(date) => Some(date),
            _ => None,
        }
    }

    /// What the element currently shows.
    pub fn display_text(&self) -> &str {
        self.surface.text()
    }

    /// Empty and accepted fields are valid; partial and rejected ones are not.
    pub const fn is_valid(&self) -> bool {
        matches!(
            self.state,
            FieldState::Empty | FieldState::ValidAccepted(_)
        )
    }

    pub const fn should_validate(&self) -> bool {
        self.should_validate
    }

    /// The current error, whether or not it is shown yet.
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            FieldState::Invalid(err) => Some(err.message()),
            _ => None,
        }
    }

    /// The error to show next to the field.
    pub fn visible_message(&self) -> Option<&str> {
        self.error_message().filter(|_| self.should_validate)
    }

    /// Class for the element reflecting validity; empty until validation is shown.
    pub const fn input_class(&self) -> &'static str {
        if !self.should_validate {
            return "";
        }
        match self.state {
            FieldState::ValidAccepted(_) => VALID_CLASS,
            FieldState::Invalid(_) => INVALID_CLASS,
            FieldState::Empty | FieldState::PartiallyTyped => "",
        }
    }

    pub fn placeholder(&self) -> &str {
        self.config.placeholder()
    }

    pub fn formatted_min(&self) -> Option<String> {
        self.config.formatted_min()
    }

    pub fn formatted_max(&self) -> Option<String> {
        self.config.formatted_max()
    }

    /// Canonical lower bound for the element's `min` attribute.
    pub fn input_min(&self) -> Option<String> {
        self.config.input_min()
    }

    /// Canonical upper bound for the element's `max` attribute.
    pub fn input_max(&self) -> Option<String> {
        self.config.input_max()
    }
}

impl<S: fmt::Debug> fmt::Debug for DateField<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateField")
            .field("config", &self.config)
            .field("surface", &self.surface)
            .field("value", &self.value)
            .field("parsed", &self.parsed)
            .field("state", &self.state)
            .field("should_validate", &self.should_validate)
            .field("tests", &self.tests.len())
            .field("clean", &self.clean.is_some())
            .finish()
    }
}
