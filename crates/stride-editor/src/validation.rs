//! Field-level validation run before a draft is submitted.

use serde::{Deserialize, Serialize};
use stride_core::models::{
    ActivityLevel, Alignment, ControlSystem, DeviceType, FootType, KneeType, MaterialType,
    PelvicSocket, SuspensionSystem,
};
use thiserror::Error;
use ts_rs::TS;

use crate::draft::ProstheticDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationKind {
    Required,
    OutOfRange,
    /// Minimum is not below the maximum.
    InvertedRange,
    /// One half of a min/max pair is set without the other.
    MissingPair,
    /// Date and year given for the same event.
    MutuallyExclusive,
}

/// A single field failing validation. `field` is the camelCase wire name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct FieldError {
    pub field: String,
    pub kind: ValidationKind,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, kind: ValidationKind, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            kind,
            message: message.into(),
        }
    }
}

/// Bounds applied by [`validate_draft`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationLimits {
    pub min_year: i16,
    /// `None` means the current calendar year.
    #[serde(default)]
    pub max_year: Option<i16>,
    /// Degrees.
    pub range_of_motion_min: f64,
    /// Degrees.
    pub range_of_motion_max: f64,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            min_year: 1900,
            max_year: None,
            range_of_motion_min: -90.0,
            range_of_motion_max: 150.0,
        }
    }
}

impl ValidationLimits {
    pub fn max_year(&self) -> i16 {
        self.max_year
            .unwrap_or_else(|| jiff::Zoned::now().year())
    }
}

/// Validate a draft. Returns every failing field, in form order; an empty
/// list means the draft may be submitted.
///
/// `deactivation_required` is set when the draft was switched from active to
/// inactive during this editing session.
pub fn validate_draft(
    draft: &ProstheticDraft,
    limits: &ValidationLimits,
    deactivation_required: bool,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let details = &draft.details;
    let attrs = &details.attributes;

    match draft.device_type {
        None => errors.push(FieldError::new(
            "type",
            ValidationKind::Required,
            "Please select a prosthetic type",
        )),
        Some(DeviceType::Other) => {
            require_text(
                &mut errors,
                "otherType",
                &details.other_type,
                "Please enter a custom prosthetic type",
            );
        }
        Some(DeviceType::Finger) if draft.position.is_none() => errors.push(FieldError::new(
            "fingerPosition",
            ValidationKind::Required,
            "Finger position is required for Finger type prosthetics",
        )),
        Some(DeviceType::Toe) if draft.position.is_none() => errors.push(FieldError::new(
            "toePosition",
            ValidationKind::Required,
            "Toe position is required for Toe type prosthetics",
        )),
        Some(_) => {}
    }

    if draft.side.is_none() {
        errors.push(FieldError::new(
            "side",
            ValidationKind::Required,
            "Please select a side",
        ));
    }

    match details.material {
        None => errors.push(FieldError::new(
            "material",
            ValidationKind::Required,
            "Please select a material",
        )),
        Some(MaterialType::Other) => {
            require_text(
                &mut errors,
                "otherMaterial",
                &details.other_material,
                "Please enter a custom material",
            );
        }
        Some(_) => {}
    }

    if attrs.alignment == Some(Alignment::Other) {
        require_text(
            &mut errors,
            "otherAlignment",
            &attrs.other_alignment,
            "Please enter a custom alignment",
        );
    }
    if attrs.suspension_system == Some(SuspensionSystem::Other) {
        require_text(
            &mut errors,
            "otherSuspensionSystem",
            &attrs.other_suspension_system,
            "Please enter a custom suspension system",
        );
    }
    if attrs.foot_type == Some(FootType::Other) {
        require_text(
            &mut errors,
            "otherFootType",
            &attrs.other_foot_type,
            "Please enter a custom foot type",
        );
    }
    if attrs.knee_type == Some(KneeType::Other) {
        require_text(
            &mut errors,
            "otherKneeType",
            &attrs.other_knee_type,
            "Please enter a custom knee type",
        );
    }
    if attrs.pelvic_socket == Some(PelvicSocket::Other) {
        require_text(
            &mut errors,
            "otherPelvicSocket",
            &attrs.other_pelvic_socket,
            "Please enter a custom pelvic socket type",
        );
    }
    if attrs.control_system == Some(ControlSystem::Other) {
        require_text(
            &mut errors,
            "otherControlSystem",
            &attrs.other_control_system,
            "Please enter a custom control system",
        );
    }
    if details.activity_level == Some(ActivityLevel::Other) {
        require_text(
            &mut errors,
            "otherActivityLevel",
            &details.other_activity_level,
            "Please enter a custom activity level",
        );
    }

    positive(&mut errors, "weight", details.weight);
    positive(&mut errors, "length", details.length);
    positive(&mut errors, "residualLimbLength", attrs.residual_limb_length);
    non_negative(&mut errors, "stiffness", attrs.stiffness);
    non_negative(&mut errors, "gripStrength", attrs.grip_strength);
    non_negative(&mut errors, "shockAbsorptionEnergy", attrs.shock_absorption_energy);

    check_range_of_motion(
        &mut errors,
        limits,
        attrs.range_of_motion_min,
        attrs.range_of_motion_max,
    );

    let max_year = limits.max_year();
    check_event(
        &mut errors,
        limits.min_year,
        max_year,
        ("installationDate", details.installation_date),
        ("installationYear", details.installation_year),
        "installation",
    );
    check_event(
        &mut errors,
        limits.min_year,
        max_year,
        ("deactivationDate", details.deactivation_date),
        ("deactivationYear", details.deactivation_year),
        "deactivation",
    );

    if deactivation_required
        && !draft.active
        && details.deactivation_date.is_none()
        && details.deactivation_year.is_none()
    {
        errors.push(FieldError::new(
            "deactivationDate",
            ValidationKind::Required,
            "Please provide a deactivation date or year",
        ));
    }

    errors
}

fn require_text(errors: &mut Vec<FieldError>, field: &str, value: &Option<String>, message: &str) {
    if value.as_deref().is_none_or(|s| s.trim().is_empty()) {
        errors.push(FieldError::new(field, ValidationKind::Required, message));
    }
}

fn positive(errors: &mut Vec<FieldError>, field: &str, value: Option<f64>) {
    if let Some(v) = value
        && (v.is_nan() || v <= 0.0)
    {
        errors.push(FieldError::new(
            field,
            ValidationKind::OutOfRange,
            format!("{field} must be greater than 0"),
        ));
    }
}

fn non_negative(errors: &mut Vec<FieldError>, field: &str, value: Option<f64>) {
    if let Some(v) = value
        && (v.is_nan() || v < 0.0)
    {
        errors.push(FieldError::new(
            field,
            ValidationKind::OutOfRange,
            format!("{field} cannot be negative"),
        ));
    }
}

fn check_range_of_motion(
    errors: &mut Vec<FieldError>,
    limits: &ValidationLimits,
    min: Option<f64>,
    max: Option<f64>,
) {
    for (field, value) in [("rangeOfMotionMin", min), ("rangeOfMotionMax", max)] {
        let Some(v) = value else { continue };
        if !v.is_finite() {
            errors.push(FieldError::new(
                field,
                ValidationKind::OutOfRange,
                "Range of motion must be a finite number of degrees",
            ));
        } else if v < limits.range_of_motion_min {
            errors.push(FieldError::new(
                field,
                ValidationKind::OutOfRange,
                format!("Range of motion must be at least {}°", limits.range_of_motion_min),
            ));
        } else if v > limits.range_of_motion_max {
            errors.push(FieldError::new(
                field,
                ValidationKind::OutOfRange,
                format!("Range of motion must be at most {}°", limits.range_of_motion_max),
            ));
        }
    }

    match (min, max) {
        (Some(_), None) => errors.push(FieldError::new(
            "rangeOfMotionMax",
            ValidationKind::MissingPair,
            "Maximum range must be provided if minimum range is set",
        )),
        (None, Some(_)) => errors.push(FieldError::new(
            "rangeOfMotionMin",
            ValidationKind::MissingPair,
            "Minimum range must be provided if maximum range is set",
        )),
        (Some(lo), Some(hi)) if lo >= hi => errors.push(FieldError::new(
            "rangeOfMotionMax",
            ValidationKind::InvertedRange,
            "Maximum range must be greater than minimum range",
        )),
        _ => {}
    }
}

fn check_event(
    errors: &mut Vec<FieldError>,
    min_year: i16,
    max_year: i16,
    (date_field, date): (&str, Option<jiff::civil::Date>),
    (year_field, year): (&str, Option<i16>),
    event: &str,
) {
    if let Some(d) = date
        && !(min_year..=max_year).contains(&d.year())
    {
        errors.push(FieldError::new(
            date_field,
            ValidationKind::OutOfRange,
            format!("Date must fall between {min_year} and {max_year}"),
        ));
    }
    if let Some(y) = year {
        if y < min_year {
            errors.push(FieldError::new(
                year_field,
                ValidationKind::OutOfRange,
                format!("Year must be after {min_year}"),
            ));
        } else if y > max_year {
            errors.push(FieldError::new(
                year_field,
                ValidationKind::OutOfRange,
                format!("Year cannot be after {max_year}"),
            ));
        }
    }
    if date.is_some() && year.is_some() {
        errors.push(FieldError::new(
            year_field,
            ValidationKind::MutuallyExclusive,
            format!("Cannot provide both {event} date and {event} year"),
        ));
    }
}
