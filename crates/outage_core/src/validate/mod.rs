use crate::domain::{Outage, ValidationWarning};

fn order_check(
    a_field: &str,
    a: Option<i64>,
    b_field: &str,
    b: Option<i64>,
    warnings: &mut Vec<ValidationWarning>,
) {
    let (Some(a), Some(b)) = (a, b) else { return };
    if a > b {
        warnings.push(
            ValidationWarning::new(
                "VALIDATION_TS_ORDER_VIOLATION",
                format!("Timestamp order violation: {a_field} must be <= {b_field}"),
            )
            .with_details(format!("{a_field}={a}; {b_field}={b}")),
        );
    }
}

/// Check an outage against the window callers rely on:
/// warntime <= starttime <= stoptime (when present).
///
/// Nothing is corrected or rejected; the record is reported on as-is.
pub fn validate_outage(outage: &Outage) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for (field, value, consequence) in [
        ("starttime", outage.starttime, "outage can never be ongoing"),
        ("stoptime", outage.stoptime, "outage can never be active or ongoing"),
    ] {
        if value.is_none() {
            warnings.push(ValidationWarning::new(
                "VALIDATION_WINDOW_INCOMPLETE",
                format!("{field} is UNKNOWN; {consequence}"),
            ));
        }
    }

    if outage.warntime.is_none() {
        warnings.push(ValidationWarning::new(
            "VALIDATION_WARNTIME_MISSING",
            "warntime is UNKNOWN; outage can never be active",
        ));
    }

    order_check(
        "warntime",
        outage.warntime,
        "starttime",
        outage.starttime,
        &mut warnings,
    );
    order_check(
        "starttime",
        outage.starttime,
        "stoptime",
        outage.stoptime,
        &mut warnings,
    );

    if outage.title.as_deref().map_or(true, |t| t.trim().is_empty()) {
        warnings.push(ValidationWarning::new(
            "VALIDATION_TITLE_MISSING",
            "Outage title is empty",
        ));
    }

    warnings
}
