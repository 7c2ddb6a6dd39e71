/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Two-digit years up to and including this value land in the 2000s,
/// anything above lands in the 1900s (`68` -> 2068, `69` -> 1969).
pub const TWO_DIGIT_YEAR_PIVOT: u16 = 68;

/// Canonical storage format. All comparisons and persistence use this form.
pub const CANONICAL_FORMAT: &str = "YYYY-MM-DD";
/// Display format used when none is configured.
pub const DEFAULT_FORMAT: &str = "MM / DD / YYYY";
/// Input mask used when none is configured.
pub const DEFAULT_MASK: &str = "99 / 99 / 9999";

/// Placeholder substituted with the display format.
pub const FORMAT_TOKEN: &str = ":format";
/// Placeholder substituted with the formatted lower bound.
pub const MIN_TOKEN: &str = ":min";
/// Placeholder substituted with the formatted upper bound.
pub const MAX_TOKEN: &str = ":max";

pub const DEFAULT_INVALID_FORMAT_MESSAGE: &str = "Please pick a valid date in the format of :format";
pub const DEFAULT_EXCEEDED_MIN_MESSAGE: &str = "Must be more recent than :min";
pub const DEFAULT_EXCEEDED_MAX_MESSAGE: &str = "Must be earlier than :max";

/// Class applied to the input element once a validated value passes.
pub const VALID_CLASS: &str = "input-valid";
/// Class applied to the input element once a validated value fails.
pub const INVALID_CLASS: &str = "input-invalid";
