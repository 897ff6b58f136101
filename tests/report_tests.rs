use siteops::core::report::to_rows;
use siteops::export::{
    Cell, ExportFormat, Report, ReportFilters, ReportKind, Row, WIDE_COLUMN_WIDTH, column_width,
    default_file_name, pdf_table, render_csv, render_pdf, sheet_layout,
};
use siteops::models::Occurrence;
use std::collections::HashSet;

fn employees() -> Vec<Row> {
    vec![
        Row::new()
            .with("id", "abc123")
            .with("name", "Alice")
            .with("status", "approved"),
        Row::new()
            .with("id", "xyz999")
            .with("name", "Bob")
            .with("status", "pending"),
    ]
}

#[test]
fn test_every_kind_has_unique_headers() {
    for kind in ReportKind::ALL {
        let cols = kind.columns();
        assert!(!cols.is_empty(), "{kind} has no columns");
        let headers: HashSet<_> = cols.iter().map(|c| c.header.as_str()).collect();
        assert_eq!(headers.len(), cols.len(), "{kind} repeats a header");
        assert!(!kind.title().is_empty());
        assert!(!kind.file_stem().contains(' '));
    }
}

#[test]
fn test_pdf_replaces_ids_with_row_position() {
    let report = Report::for_kind(ReportKind::Employees, employees());
    let (headers, rows) = pdf_table(&report).expect("registered layout");

    assert_eq!(headers[0], "ID");
    assert_eq!(rows[0][0], "1");
    assert_eq!(rows[1][0], "2");
    assert_eq!(rows[0][1], "Alice");
    // absent fields print empty
    assert_eq!(rows[0][2], "");
}

#[test]
fn test_sheet_keeps_real_ids_and_sequence() {
    let report = Report::for_kind(ReportKind::Employees, employees());
    let layout = sheet_layout(&report);

    assert_eq!(layout.headers[0], "No");
    assert_eq!(layout.headers[1], "ID");
    assert_eq!(layout.headers.len(), ReportKind::Employees.columns().len() + 1);
    assert_eq!(layout.rows[0][0], Cell::Number(1.0));
    assert_eq!(layout.rows[0][1], Cell::Text("abc123".into()));
    assert_eq!(layout.rows[1][1], Cell::Text("xyz999".into()));
    assert_eq!(layout.rows[0][3], Cell::Text(String::new()));
}

#[test]
fn test_column_widths() {
    assert_eq!(column_width("Description", 3), WIDE_COLUMN_WIDTH);
    assert_eq!(column_width("Details", 200), WIDE_COLUMN_WIDTH);
    assert_eq!(column_width("ID", 1), 10.0);
    assert_eq!(column_width("Name", 20), 22.0);
    assert_eq!(column_width("Notes", 300), 40.0);

    let report = Report::for_kind(
        ReportKind::Occurrences,
        vec![Row::new().with("id", 1i64).with("description", "short")],
    );
    let layout = sheet_layout(&report);
    let desc = layout
        .headers
        .iter()
        .position(|h| h == "Description")
        .expect("description column");
    assert_eq!(layout.widths[desc], WIDE_COLUMN_WIDTH);
}

#[test]
fn test_pdf_needs_registered_layout() {
    let report = Report::ad_hoc("Loose rows", employees());
    assert!(pdf_table(&report).is_err());
    assert!(render_pdf(&report).is_err());

    let ok = render_pdf(&Report::for_kind(ReportKind::Employees, employees()))
        .expect("pdf bytes");
    assert!(ok.starts_with(b"%PDF"));
}

#[test]
fn test_header_line_lists_active_filters() {
    let filters = ReportFilters {
        category: Some("Theft".into()),
        date: Some("2025-03-01".into()),
        user: Some("  ".into()),
        ..Default::default()
    };
    let report = Report::for_kind(ReportKind::Occurrences, vec![]).with_filters(filters);
    assert_eq!(report.header_line(), "Occurrence Report — Theft — 2025-03-01");

    let plain = Report::for_kind(ReportKind::Sites, vec![]);
    assert_eq!(plain.header_line(), plain.title);
}

#[test]
fn test_filters_are_case_insensitive_and_skip_missing_fields() {
    let filters = ReportFilters {
        status: Some("PENDING".into()),
        category: Some("Theft".into()),
        ..Default::default()
    };
    let report = Report::ad_hoc("People", employees())
        .with_filters(filters)
        .apply_filters();

    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].text("name"), "Bob");
}

#[test]
fn test_csv_file_names() {
    let kind = Report::for_kind(ReportKind::Occurrences, employees());
    assert_eq!(
        default_file_name(&kind, ExportFormat::Csv),
        "occurrences_report.csv"
    );
    assert_eq!(
        default_file_name(&kind, ExportFormat::Xlsx),
        "Occurrence Report.xlsx"
    );

    let loose = Report::ad_hoc("Q1/Q2: summary", employees());
    assert_eq!(
        default_file_name(&loose, ExportFormat::Csv),
        "Q1_Q2_ summary.csv"
    );
}

#[test]
fn test_csv_uses_registered_headers() {
    let report = Report::for_kind(ReportKind::OccurrenceCategories, vec![
        Row::new().with("id", 3i64).with("name", "Theft").with("status", "Active"),
    ]);
    let text = String::from_utf8(render_csv(&report).expect("csv")).expect("utf8");
    assert_eq!(
        text,
        "\"No\";\"ID\";\"Name\";\"Status\"\n\"1\";\"3\";\"Theft\";\"Active\"\n"
    );
}

#[test]
fn test_records_flatten_related_names() {
    let occ: Occurrence = serde_json::from_str(
        r#"{"id": 9, "category": {"name": "Theft"}, "site": "North Gate",
            "reported_by": {"title": "Ann"}, "date": "2025-03-01"}"#,
    )
    .expect("decode occurrence");

    let rows = to_rows(&[occ]);
    assert_eq!(rows[0].text("id"), "9");
    assert_eq!(rows[0].text("category"), "Theft");
    assert_eq!(rows[0].text("site"), "North Gate");
    assert_eq!(rows[0].text("user"), "Ann");
    assert!(rows[0].get("time").is_some_and(Cell::is_null));
}

#[test]
fn test_csv_reads_back_with_semicolon_reader() {
    let tricky = "line one\nline \"two\"; end";
    let report = Report::ad_hoc(
        "Notes",
        vec![
            Row::new().with("id", "a;b").with("note", tricky),
            Row::new().with("id", "c").with("note", ""),
        ],
    );
    let bytes = render_csv(&report).expect("csv");

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_reader(bytes.as_slice());
    let headers = rdr.headers().expect("headers").clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), ["No", "id", "note"]);

    let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.expect("record")).collect();
    assert_eq!(records.len(), 2);
    assert_eq!(&records[0][1], "a;b");
    assert_eq!(&records[0][2], tricky);
    assert_eq!(&records[1][0], "2");
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn test_pdf_row_taller_than_a_page_continues_on_next_page() {
    let long = "broken lock at the north gate ".repeat(250);
    let report = Report::for_kind(
        ReportKind::Occurrences,
        vec![
            Row::new()
                .with("id", 1i64)
                .with("category", "Theft")
                .with("description", long.as_str()),
        ],
    );

    let bytes = render_pdf(&report).expect("pdf bytes");
    assert!(contains(&bytes, b"Page 2 of"));
    assert!(!contains(&bytes, b"Page 1 of 1)"));
}
