use super::*;

fn full_record() -> JobRecord {
    let mut record = JobRecord::new("42");
    record.title = Some("Port a CLI to Rust".to_string());
    record.posted = Some("8 minutes ago".to_string());
    record.job_type = Some("Fixed".to_string());
    record.level = Some("Expert".to_string());
    record.estimated_time = Some("Less than 1 month".to_string());
    record.skill = Some("Rust".to_string());
    record.detail = Some("Rewrite the tool.".to_string());
    record.job_page_link = Some("https://www.upwork.com/jobs/42".to_string());
    record
}

#[test]
fn list_row_summary_matches_listing_format() {
    let row = ListRow::from_record(&full_record());
    assert_eq!(row.summary(), "Port a CLI to Rust - Fixed project (Expert)");
    assert_eq!(row.job_no, JobId::from("42"));
}

#[test]
fn missing_fields_render_as_blank_placeholders() {
    let record = JobRecord::new("7");
    let row = ListRow::from_record(&record);
    assert_eq!(row.summary(), " -  project ()");

    let detail = DetailPanel::from_record(&record);
    assert_eq!(detail.title, "");
    assert_eq!(detail.field("Estimated Time"), Some(""));
    assert_eq!(detail.link, "");
}

#[test]
fn detail_panel_lists_fields_in_display_order() {
    let detail = DetailPanel::from_record(&full_record());
    let labels: Vec<_> = detail.fields.iter().map(|field| field.label).collect();
    assert_eq!(
        labels,
        vec!["Posted", "Type", "Level", "Estimated Time", "Skill", "Detail"]
    );
    assert_eq!(detail.field("Skill"), Some("Rust"));
    assert_eq!(detail.link, "https://www.upwork.com/jobs/42");
}

#[test]
fn empty_view_becomes_no_jobs_placeholder() {
    assert_eq!(ListPanel::from_view(&[]), ListPanel::NoJobsFound);

    let record = full_record();
    let panel = ListPanel::from_view(&[&record]);
    assert_eq!(panel.job_ids(), vec![&JobId::from("42")]);
}

#[test]
fn filter_options_lead_with_all() {
    let options = FilterOptions::from_observed(
        vec!["Expert".to_string()],
        vec![],
        vec!["Rust".to_string(), "Go".to_string()],
    );
    assert_eq!(options.for_field(FilterField::Level), ["All", "Expert"]);
    assert_eq!(options.for_field(FilterField::Type), ["All"]);
    assert_eq!(options.for_field(FilterField::Skill), ["All", "Rust", "Go"]);
    assert!(FilterOptions::default().is_empty());
}
