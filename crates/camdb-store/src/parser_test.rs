use super::*;

fn row(camera: &str) -> RawRow {
    RawRow {
        camera: camera.to_owned(),
        latitude: "52.09".to_owned(),
        longitude: "5.12".to_owned(),
    }
}

// -----------------------------------------------------------------------
// row filter
// -----------------------------------------------------------------------

#[test]
fn blank_rows_are_discarded() {
    assert!(parse_row(&row("")).is_none());
    assert!(parse_row(&row("   \t")).is_none());
}

#[test]
fn error_rows_are_discarded_in_any_case() {
    assert!(parse_row(&row("ERROR: offline")).is_none());
    assert!(parse_row(&row("error camera disconnected")).is_none());
    assert!(parse_row(&row("Error")).is_none());
    assert!(parse_row(&row("  ERROR after padding")).is_none());
}

#[test]
fn error_inside_text_is_not_a_marker() {
    let record = parse_row(&row("UTR-CM-600 ERROR bridge")).expect("valid row");
    assert_eq!(record.name, "ERROR bridge");
}

#[test]
fn short_multibyte_text_is_not_mistaken_for_marker() {
    assert!(is_valid_row(&row("é")));
}

// -----------------------------------------------------------------------
// code / name split
// -----------------------------------------------------------------------

#[test]
fn structured_code_followed_by_space() {
    assert_eq!(
        split_code_and_name("UTR-CM-552 Neude rijbaan"),
        ("UTR-CM-552".to_owned(), "Neude rijbaan".to_owned())
    );
}

#[test]
fn structured_code_followed_by_hyphen() {
    assert_eq!(
        split_code_and_name("UTR-CM-540-Catharijnesingel / Leidseveer"),
        (
            "UTR-CM-540".to_owned(),
            "Catharijnesingel / Leidseveer".to_owned()
        )
    );
    assert_eq!(
        split_code_and_name("UTR-CM-541-  Leidseveer"),
        ("UTR-CM-541".to_owned(), "Leidseveer".to_owned())
    );
}

#[test]
fn structured_code_trims_name_whitespace() {
    assert_eq!(
        split_code_and_name("CAM-7    Westplein  "),
        ("CAM-7".to_owned(), "Westplein".to_owned())
    );
}

#[test]
fn fallback_splits_on_first_space() {
    assert_eq!(
        split_code_and_name("CAM552 Neude  rijbaan"),
        ("CAM552".to_owned(), "Neude  rijbaan".to_owned())
    );
}

#[test]
fn fallback_without_space_keeps_whole_text_as_code() {
    assert_eq!(
        split_code_and_name("UTR-CM-552"),
        ("UTR-CM-552".to_owned(), String::new())
    );
    assert_eq!(
        split_code_and_name("standalone"),
        ("standalone".to_owned(), String::new())
    );
}

#[test]
fn parse_row_trims_camera_before_splitting() {
    let record = parse_row(&row("  UTR-CM-552 Neude rijbaan  ")).expect("valid row");
    assert_eq!(record.code, "UTR-CM-552");
    assert_eq!(record.name, "Neude rijbaan");
}

// -----------------------------------------------------------------------
// number extraction
// -----------------------------------------------------------------------

#[test]
fn number_is_first_digit_run_in_code() {
    assert_eq!(extract_number("UTR-CM-552"), 552);
    assert_eq!(extract_number("A12-B34"), 12);
    assert_eq!(extract_number("CAM007"), 7);
}

#[test]
fn number_defaults_to_zero_without_digits() {
    assert_eq!(extract_number("standalone"), 0);
}

#[test]
fn number_defaults_to_zero_on_overflow() {
    assert_eq!(extract_number("CAM-99999999999999"), 0);
}

#[test]
fn parse_row_carries_coordinates_verbatim() {
    let mut raw = row("UTR-CM-552 Neude rijbaan");
    raw.latitude = "not a number".to_owned();
    raw.longitude = String::new();
    let record = parse_row(&raw).expect("valid row");
    assert_eq!(record.latitude, "not a number");
    assert_eq!(record.longitude, "");
}

// -----------------------------------------------------------------------
// parse_document
// -----------------------------------------------------------------------

#[test]
fn document_end_to_end_example() {
    let input = "Camera;Latitude;Longitude\nUTR-CM-552 Neude rijbaan;52.09;5.12\n";
    let records = parse_document(input.as_bytes(), "inline").expect("parse");
    assert_eq!(
        records,
        vec![CameraRecord {
            number: 552,
            code: "UTR-CM-552".to_owned(),
            name: "Neude rijbaan".to_owned(),
            latitude: "52.09".to_owned(),
            longitude: "5.12".to_owned(),
        }]
    );
}

#[test]
fn document_drops_error_rows_and_keeps_order() {
    let input = "Camera;Latitude;Longitude\n\
                 UTR-CM-503 Schoutenstraat;52.0929;5.1187\n\
                 ERROR: offline;;\n\
                 UTR-CM-501 Neude;52.0934;5.1182\n\
                 ;52.0;5.0\n";
    let records = parse_document(input.as_bytes(), "inline").expect("parse");
    let codes: Vec<&str> = records.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["UTR-CM-503", "UTR-CM-501"]);
}

#[test]
fn document_matches_headers_case_insensitively_in_any_order() {
    let input = "LONGITUDE;extra;camera;Latitude\n5.12;x;UTR-CM-552 Neude rijbaan;52.09\n";
    let records = parse_document(input.as_bytes(), "inline").expect("parse");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].latitude, "52.09");
    assert_eq!(records[0].longitude, "5.12");
}

#[test]
fn document_tolerates_missing_fields_and_columns() {
    let input = "Camera;Latitude\nUTR-CM-552 Neude rijbaan\nUTR-CM-553 Oudegracht;52.1\n";
    let records = parse_document(input.as_bytes(), "inline").expect("parse");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].latitude, "");
    assert_eq!(records[1].latitude, "52.1");
    assert_eq!(records[1].longitude, "");
}

#[test]
fn document_strips_byte_order_mark_from_header() {
    let input = "\u{feff}Camera;Latitude;Longitude\nUTR-CM-552 Neude rijbaan;52.09;5.12\n";
    let records = parse_document(input.as_bytes(), "inline").expect("parse");
    assert_eq!(records.len(), 1);
}

#[test]
fn document_skips_rows_with_invalid_utf8() {
    let mut input = b"Camera;Latitude;Longitude\nUTR-CM-501 Neude;52.0;5.1\n".to_vec();
    input.extend_from_slice(b"UTR-CM-502 \xff\xfe;52.0;5.1\n");
    input.extend_from_slice(b"UTR-CM-503 Ganzenmarkt;52.0;5.1\n");
    let records = parse_document(input.as_slice(), "inline").expect("parse");
    let numbers: Vec<u32> = records.iter().map(|r| r.number).collect();
    assert_eq!(numbers, vec![501, 503]);
}

#[test]
fn document_with_only_header_is_empty() {
    let records = parse_document("Camera;Latitude;Longitude\n".as_bytes(), "inline").expect("parse");
    assert!(records.is_empty());
}

#[test]
fn document_without_camera_column_yields_nothing() {
    let input = "Id;Latitude;Longitude\n1;52.0;5.1\n";
    let records = parse_document(input.as_bytes(), "inline").expect("parse");
    assert!(records.is_empty());
}
