use chrono::NaiveDate;
use regex::Regex;

/// Shape checks for user-entered fields. Pure predicates; nothing here
/// raises an error or touches state.
#[derive(Debug)]
pub struct FieldValidator {
    phone_pattern: Regex,
    date_pattern: Regex,
}

impl FieldValidator {
    pub fn new() -> Self {
        Self {
            phone_pattern: Regex::new(r"^09\d{8}$").expect("phone pattern compiles"),
            date_pattern: Regex::new(r"^(\d{4})/(\d{1,2})/(\d{1,2})$")
                .expect("date pattern compiles"),
        }
    }

    /// Mobile numbers: exactly 10 digits, starting with 09.
    pub fn is_valid_phone_number(&self, input: &str) -> bool {
        self.phone_pattern.is_match(input)
    }

    /// `YYYY/M/D` with optional zero padding on month and day, where the
    /// triple is a real calendar date. `from_ymd_opt` rejects rollover
    /// inputs such as `2023/02/31` instead of sliding them into March.
    pub fn is_valid_calendar_date(&self, input: &str) -> bool {
        let Some(caps) = self.date_pattern.captures(input) else {
            return false;
        };
        let (Ok(year), Ok(month), Ok(day)) = (
            caps[1].parse::<i32>(),
            caps[2].parse::<u32>(),
            caps[3].parse::<u32>(),
        ) else {
            return false;
        };
        NaiveDate::from_ymd_opt(year, month, day).is_some()
    }
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::new()
    }
}
