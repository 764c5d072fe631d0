//! Client-side validation for the catalog editor form.
//!
//! Mirrors the server's rules so most mistakes never reach the network.
//! All checks run independently per field; every violation is collected.
//! `today` is passed in by the caller, which keeps this module free of
//! any clock or browser dependency.

use chrono::NaiveDate;

use crate::model::CatalogStatus;

pub const NAME_MAX: usize = 30;
pub const DESCRIPTION_MAX: usize = 50;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The five editable catalog fields, used to address error slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    Name,
    Description,
    StartDate,
    EndDate,
    Status,
}

impl FieldKey {
    /// Wire name used by structured server error payloads.
    pub fn from_wire(name: &str) -> Option<FieldKey> {
        match name {
            "name" => Some(FieldKey::Name),
            "description" => Some(FieldKey::Description),
            "start_date" => Some(FieldKey::StartDate),
            "end_date" => Some(FieldKey::EndDate),
            "status" => Some(FieldKey::Status),
            _ => None,
        }
    }
}

/// Raw form values as read from the page, before any normalization.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
}

/// One message slot per field. A later check on the same field replaces
/// the earlier message (the end-date cross check relies on this).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    name: Option<String>,
    description: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    status: Option<String>,
}

impl FieldErrors {
    pub fn set(&mut self, field: FieldKey, message: impl Into<String>) {
        *self.slot_mut(field) = Some(message.into());
    }

    pub fn get(&self, field: FieldKey) -> Option<&str> {
        match field {
            FieldKey::Name => self.name.as_deref(),
            FieldKey::Description => self.description.as_deref(),
            FieldKey::StartDate => self.start_date.as_deref(),
            FieldKey::EndDate => self.end_date.as_deref(),
            FieldKey::Status => self.status.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.status.is_none()
    }

    /// (field, message) pairs for rendering.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        [
            FieldKey::Name,
            FieldKey::Description,
            FieldKey::StartDate,
            FieldKey::EndDate,
            FieldKey::Status,
        ]
        .into_iter()
        .filter_map(|f| self.get(f).map(|m| (f, m)))
    }

    fn slot_mut(&mut self, field: FieldKey) -> &mut Option<String> {
        match field {
            FieldKey::Name => &mut self.name,
            FieldKey::Description => &mut self.description,
            FieldKey::StartDate => &mut self.start_date,
            FieldKey::EndDate => &mut self.end_date,
            FieldKey::Status => &mut self.status,
        }
    }
}

/// Validate the catalog form. Returns the collected per-field messages;
/// the form may be submitted only when the result `is_empty()`.
pub fn validate(input: &FormInput, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let name = input.name.trim();
    if name.is_empty() {
        errors.set(FieldKey::Name, "Name is required.");
    } else if name.chars().count() > NAME_MAX {
        errors.set(
            FieldKey::Name,
            format!("Name cannot exceed {NAME_MAX} characters."),
        );
    }

    let description = input.description.trim();
    if description.is_empty() {
        errors.set(FieldKey::Description, "Description is required.");
    } else if description.chars().count() > DESCRIPTION_MAX {
        errors.set(
            FieldKey::Description,
            format!("Description cannot exceed {DESCRIPTION_MAX} characters."),
        );
    }

    let start = check_date(&mut errors, FieldKey::StartDate, "Start Date", &input.start_date, today);
    let end = check_date(&mut errors, FieldKey::EndDate, "End Date", &input.end_date, today);

    // Cross check last: it overwrites whatever the end-date slot holds.
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            errors.set(FieldKey::EndDate, "End Date cannot be before Start Date.");
        }
    }

    if input.status.is_empty() {
        errors.set(FieldKey::Status, "Status is required.");
    } else if input.status.parse::<CatalogStatus>().is_err() {
        errors.set(
            FieldKey::Status,
            format!("Invalid status. Allowed: {}.", CatalogStatus::allowed_list()),
        );
    }

    errors
}

fn check_date(
    errors: &mut FieldErrors,
    field: FieldKey,
    label: &str,
    value: &str,
    today: NaiveDate,
) -> Option<NaiveDate> {
    if value.is_empty() {
        errors.set(field, format!("{label} is required."));
        return None;
    }
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => {
            if date < today {
                errors.set(field, format!("{label} cannot be in the past."));
            }
            Some(date)
        }
        Err(_) => {
            errors.set(field, format!("{label} must be in YYYY-MM-DD format."));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    fn valid_input() -> FormInput {
        FormInput {
            name: "Autumn Collection".into(),
            description: "Seasonal homeware".into(),
            start_date: "2026-09-01".into(),
            end_date: "2026-11-30".into(),
            status: "Active".into(),
        }
    }

    #[test]
    fn valid_form_produces_no_errors() {
        let errors = validate(&valid_input(), today());
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn today_is_not_in_the_past() {
        let mut input = valid_input();
        input.start_date = "2026-08-07".into();
        let errors = validate(&input, today());
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn missing_name_sets_only_the_name_slot() {
        let mut input = valid_input();
        input.name = "   ".into();
        let errors = validate(&input, today());
        assert_eq!(errors.get(FieldKey::Name), Some("Name is required."));
        assert_eq!(errors.iter().count(), 1);
    }

    #[test]
    fn overlong_name_and_description_are_rejected() {
        let mut input = valid_input();
        input.name = "x".repeat(31);
        input.description = "y".repeat(51);
        let errors = validate(&input, today());
        assert_eq!(
            errors.get(FieldKey::Name),
            Some("Name cannot exceed 30 characters.")
        );
        assert_eq!(
            errors.get(FieldKey::Description),
            Some("Description cannot exceed 50 characters.")
        );
    }

    #[test]
    fn limits_are_inclusive() {
        let mut input = valid_input();
        input.name = "x".repeat(30);
        input.description = "y".repeat(50);
        assert!(validate(&input, today()).is_empty());
    }

    #[test]
    fn past_dates_are_rejected() {
        let mut input = valid_input();
        input.start_date = "2026-08-06".into();
        let errors = validate(&input, today());
        assert_eq!(
            errors.get(FieldKey::StartDate),
            Some("Start Date cannot be in the past.")
        );
    }

    #[test]
    fn unparseable_date_gets_format_message() {
        let mut input = valid_input();
        input.end_date = "30-11-2026".into();
        let errors = validate(&input, today());
        assert_eq!(
            errors.get(FieldKey::EndDate),
            Some("End Date must be in YYYY-MM-DD format.")
        );
    }

    #[test]
    fn end_before_start_overwrites_the_end_date_slot() {
        let mut input = valid_input();
        // End date is in the past AND before start; the cross check wins.
        input.start_date = "2026-09-01".into();
        input.end_date = "2026-08-01".into();
        let errors = validate(&input, today());
        assert_eq!(
            errors.get(FieldKey::EndDate),
            Some("End Date cannot be before Start Date.")
        );
    }

    #[test]
    fn equal_start_and_end_is_allowed() {
        let mut input = valid_input();
        input.end_date = input.start_date.clone();
        assert!(validate(&input, today()).is_empty());
    }

    #[test]
    fn unknown_status_lists_allowed_values() {
        let mut input = valid_input();
        input.status = "upcoming".into();
        let errors = validate(&input, today());
        assert_eq!(
            errors.get(FieldKey::Status),
            Some("Invalid status. Allowed: active, inactive.")
        );
    }

    #[test]
    fn empty_status_is_required() {
        let mut input = valid_input();
        input.status = String::new();
        let errors = validate(&input, today());
        assert_eq!(errors.get(FieldKey::Status), Some("Status is required."));
    }

    #[test]
    fn every_violation_is_collected() {
        let input = FormInput::default();
        let errors = validate(&input, today());
        assert_eq!(errors.iter().count(), 5);
    }
}
