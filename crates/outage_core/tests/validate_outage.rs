use outage_core::domain::Outage;
use outage_core::validate::validate_outage;

fn codes(outage: &Outage) -> Vec<String> {
    validate_outage(outage).into_iter().map(|w| w.code).collect()
}

#[test]
fn well_formed_outage_has_no_warnings() {
    let outage = Outage {
        warntime: Some(1000),
        starttime: Some(2000),
        stoptime: Some(5000),
        title: Some("Upgrade".to_string()),
        ..Outage::default()
    };
    assert!(validate_outage(&outage).is_empty());
}

#[test]
fn misordered_window_is_reported_not_corrected() {
    let outage = Outage {
        warntime: Some(3000),
        starttime: Some(2000),
        stoptime: Some(1000),
        title: Some("Upgrade".to_string()),
        ..Outage::default()
    };
    let warnings = validate_outage(&outage);
    assert_eq!(
        warnings
            .iter()
            .filter(|w| w.code == "VALIDATION_TS_ORDER_VIOLATION")
            .count(),
        2
    );
    assert!(warnings
        .iter()
        .any(|w| w.details.as_deref() == Some("starttime=2000; stoptime=1000")));
    assert_eq!(outage.get_duration(), Some(-1000));
}

#[test]
fn empty_record_reports_missing_pieces() {
    let codes = codes(&Outage::default());
    assert_eq!(
        codes,
        vec![
            "VALIDATION_WINDOW_INCOMPLETE",
            "VALIDATION_WINDOW_INCOMPLETE",
            "VALIDATION_WARNTIME_MISSING",
            "VALIDATION_TITLE_MISSING",
        ]
    );
}

#[test]
fn blank_title_is_flagged() {
    let outage = Outage {
        warntime: Some(1),
        starttime: Some(2),
        stoptime: Some(3),
        title: Some("   ".to_string()),
        ..Outage::default()
    };
    assert_eq!(codes(&outage), vec!["VALIDATION_TITLE_MISSING"]);
}

#[test]
fn missing_stoptime_explains_it_blocks_activity() {
    let outage = Outage {
        warntime: Some(1),
        starttime: Some(2),
        title: Some("Upgrade".to_string()),
        ..Outage::default()
    };
    let warnings = validate_outage(&outage);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].code, "VALIDATION_WINDOW_INCOMPLETE");
    assert_eq!(
        warnings[0].message,
        "stoptime is UNKNOWN; outage can never be active or ongoing"
    );
}
