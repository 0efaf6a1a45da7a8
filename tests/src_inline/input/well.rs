use super::*;

#[test]
fn test_parse_corner_wells() {
    assert_eq!(WellLabel::parse("A1").unwrap(), WellCoord::new(0, 0));
    assert_eq!(WellLabel::parse("H12").unwrap(), WellCoord::new(7, 11));
    assert_eq!(WellLabel::parse("P24").unwrap(), WellCoord::new(15, 23));
}

#[test]
fn test_parse_matches_letter_and_number_offsets() {
    for (letter, row) in [('A', 0usize), ('C', 2), ('Z', 25)] {
        for number in [1usize, 7, 10, 48] {
            let label = format!("{letter}{number}");
            let coord = WellLabel::parse(&label).unwrap();
            assert_eq!(coord, WellCoord::new(row, number - 1), "{label}");
        }
    }
}

#[test]
fn test_parse_accepts_leading_zero_and_whitespace() {
    assert_eq!(WellLabel::parse("C07").unwrap(), WellCoord::new(2, 6));
    assert_eq!(WellLabel::parse(" B3\r").unwrap(), WellCoord::new(1, 2));
}

#[test]
fn test_parse_rejects_malformed_labels() {
    for bad in ["17", "", "A", "a1", "A0", "AA1", "A1B", "1A", "Ä1", "A-1"] {
        let err = WellLabel::parse(bad).unwrap_err();
        assert_eq!(err, ParseError::WellLabel(bad.to_string()), "{bad:?}");
    }
}

#[test]
fn test_format_inverts_parse() {
    assert_eq!(WellCoord::new(7, 11).to_string(), "H12");
    assert_eq!(WellLabel::format(WellCoord::new(0, 0)), "A1");
    assert_eq!(row_letter(30), '?');
}
