use super::*;

#[test]
fn parses_records_with_exact_field_names() {
    let payload = br#"[
        {
            "Job No": "101",
            "Title": "Build a scraper",
            "Posted": "8 minutes ago",
            "Type": "Fixed",
            "Level": "Expert",
            "Estimated Time": "1 to 3 months",
            "Skill": "Python",
            "Detail": "Scrape listings nightly.",
            "Job Page Link": "https://www.upwork.com/jobs/101"
        }
    ]"#;

    let records = parse_job_payload(payload).expect("parse");
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.job_no, JobId::from("101"));
    assert_eq!(record.title.as_deref(), Some("Build a scraper"));
    assert_eq!(record.posted.as_deref(), Some("8 minutes ago"));
    assert_eq!(record.job_type.as_deref(), Some("Fixed"));
    assert_eq!(record.level.as_deref(), Some("Expert"));
    assert_eq!(record.estimated_time.as_deref(), Some("1 to 3 months"));
    assert_eq!(record.skill.as_deref(), Some("Python"));
    assert_eq!(record.detail.as_deref(), Some("Scrape listings nightly."));
    assert_eq!(
        record.job_page_link.as_deref(),
        Some("https://www.upwork.com/jobs/101")
    );
}

#[test]
fn integer_job_numbers_become_text_ids() {
    let records = parse_job_payload(br#"[{"Job No": 7, "Title": "Seven"}]"#).expect("parse");
    assert_eq!(records[0].job_no.as_str(), "7");
}

#[test]
fn renamed_or_odd_fields_load_as_blank() {
    let records = parse_job_payload(
        br#"[{"Job No": "1", "title": "lowercase key", "Level": null, "Skill": ["Rust"], "Type": 3}]"#,
    )
    .expect("parse");
    let record = &records[0];
    assert_eq!(record.title, None);
    assert_eq!(record.level, None);
    assert_eq!(record.skill, None);
    assert_eq!(record.job_type.as_deref(), Some("3"));
}

#[test]
fn rejects_payloads_that_are_not_arrays_of_objects() {
    assert!(matches!(
        parse_job_payload(br#"{"Job No": "1"}"#),
        Err(LoadError::Malformed(_))
    ));
    assert!(matches!(
        parse_job_payload(br#"["not a record"]"#),
        Err(LoadError::Malformed(_))
    ));
    assert!(matches!(
        parse_job_payload(b"<html>404</html>"),
        Err(LoadError::Malformed(_))
    ));
}

#[test]
fn missing_job_number_reports_record_index() {
    let err = parse_job_payload(br#"[{"Job No": "1"}, {"Title": "no id"}]"#)
        .expect_err("missing id");
    assert_eq!(
        err,
        LoadError::MissingField {
            index: 1,
            field: FIELD_JOB_NO,
        }
    );
}

#[test]
fn all_selection_is_unconstrained() {
    let criteria = FilterCriteria::from_selections(ALL, ALL, ALL);
    assert!(criteria.is_unconstrained());
    assert!(criteria.matches(&JobRecord::new("1")));
}

#[test]
fn exact_filter_is_case_sensitive_and_rejects_blank_fields() {
    let mut record = JobRecord::new("1");
    record.level = Some("Expert".to_string());

    assert!(FilterValue::from_selection("Expert").matches(record.level.as_deref()));
    assert!(!FilterValue::from_selection("expert").matches(record.level.as_deref()));
    assert!(!FilterValue::from_selection("Expert").matches(None));
}

#[test]
fn filter_criteria_is_a_conjunction() {
    let mut record = JobRecord::new("1");
    record.level = Some("Expert".to_string());
    record.job_type = Some("Fixed".to_string());
    record.skill = Some("Rust".to_string());

    assert!(FilterCriteria::from_selections("Expert", "Fixed", ALL).matches(&record));
    assert!(!FilterCriteria::from_selections("Expert", "Hourly", ALL).matches(&record));
}

#[test]
fn sort_options_parse_from_control_values() {
    assert_eq!("title".parse::<SortCriteria>(), Ok(SortCriteria::Title));
    assert_eq!("Level".parse::<SortCriteria>(), Ok(SortCriteria::Level));
    assert_eq!("posted".parse::<SortCriteria>(), Ok(SortCriteria::Posted));
    assert_eq!("".parse::<SortCriteria>(), Ok(SortCriteria::None));
    assert!("salary".parse::<SortCriteria>().is_err());
}

#[test]
fn serializes_with_source_field_names() {
    let mut record = JobRecord::new("9");
    record.title = Some("Nine".to_string());
    let json = serde_json::to_value(&record).expect("serialize");
    assert_eq!(json, serde_json::json!({"Job No": "9", "Title": "Nine"}));
}
