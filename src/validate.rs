use crate::{
    BoundViolation, CalendarDate, FORMAT_TOKEN, FieldConfig, MAX_TOKEN, MIN_TOKEN, normalize,
};

/// Why a fully typed value was not accepted. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Not a real date in either the display or the canonical format.
    #[error("{message}")]
    Format { message: String },

    /// Before the configured lower bound.
    #[error("{message}")]
    Min { min: CalendarDate, message: String },

    /// After the configured upper bound.
    #[error("{message}")]
    Max { max: CalendarDate, message: String },

    /// Rejected by a host-supplied test after the date itself passed.
    #[error("{0}")]
    Custom(String),
}

impl ValidationError {
    pub fn message(&self) -> &str {
        match self {
            Self::Format { message }
            | Self::Min { message, .. }
            | Self::Max { message, .. }
            | Self::Custom(message) => message.as_str(),
        }
    }
}

/// Parses `raw` the way [`validate`] does, without the bound checks.
///
/// # Errors
/// `ValidationError::Format` when `raw` is a real date in neither format.
pub fn parse_date(raw: &str, config: &FieldConfig) -> Result<CalendarDate, ValidationError> {
    let format = config.format();
    normalize::parse(raw, format).ok_or_else(|| format_error(config))
}

/// The error for text that names no date, rendered from `config`.
pub fn format_error(config: &FieldConfig) -> ValidationError {
    ValidationError::Format {
        message: config
            .invalid_format_message()
            .render(FORMAT_TOKEN, config.format().as_str()),
    }
}

/// Checks an already parsed date against the configured bounds, lower
/// bound first. Bounds are inclusive; an unparseable bound is not enforced.
///
/// # Errors
/// `ValidationError::Min` or `ValidationError::Max`, with the bound rendered
/// in the display format.
pub fn check_bounds(
    date: CalendarDate,
    config: &FieldConfig,
) -> Result<CalendarDate, ValidationError> {
    let format = config.format();
    match config.bounds().check(&date) {
        Ok(()) => Ok(date),
        Err(BoundViolation::Below { min, .. }) => Err(ValidationError::Min {
            min,
            message: config
                .exceeded_min_message()
                .render(MIN_TOKEN, &format.format(&min)),
        }),
        Err(BoundViolation::Above { max, .. }) => Err(ValidationError::Max {
            max,
            message: config
                .exceeded_max_message()
                .render(MAX_TOKEN, &format.format(&max)),
        }),
    }
}

/// Validates `raw` against `config`: format first, then the lower bound,
/// then the upper bound.
///
/// This never touches field state, so it serves both per-keystroke feedback
/// and submit-time checks. Blank text fails as `Format`; fields keep blank
/// input away from here.
///
/// # Errors
/// The first check that fails, with its message rendered from `config`.
pub fn validate(raw: &str, config: &FieldConfig) -> Result<CalendarDate, ValidationError> {
    check_bounds(parse_date(raw, config)?, config)
}
