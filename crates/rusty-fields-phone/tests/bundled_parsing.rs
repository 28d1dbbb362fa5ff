//! Parsing against the bundled country dataset

use pretty_assertions::assert_eq;
use rstest::rstest;
use rusty_fields_phone::{format_digits, strip_non_digits, CountryTable, PhoneNumber, PhoneParser};

#[rstest]
#[case("+1 (202) 555-0199", "1", "2025550199")]
#[case("+44 20 7946 0958", "44", "2079460958")]
#[case("880 1712-345678", "880", "1712345678")]
#[case("+1 242 555 1234", "1242", "5551234")]
#[case("0091 98765 43210", "", "")]
fn test_bundled_parse(#[case] raw: &str, #[case] code: &str, #[case] national: &str) {
    let table = CountryTable::bundled();
    let parsed = PhoneParser::new(&table).parse(raw);

    if code.is_empty() {
        assert_eq!(parsed, None);
    } else {
        assert_eq!(
            parsed,
            Some(PhoneNumber {
                country_code: code.to_string(),
                national_number: national.to_string(),
            })
        );
    }
}

#[rstest]
#[case::zone_1_nanp("+1 (202) 555-0199", "1", "us")]
#[case::zone_1_caribbean("+1 664 491 2345", "1664", "ms")]
#[case::zone_2("+254 712 345678", "254", "ke")]
#[case::zone_3("+375 29 123 4567", "375", "by")]
#[case::zone_3_armenia("+374 10 123456", "374", "am")]
#[case::zone_4("+41 44 668 18 00", "41", "ch")]
#[case::zone_4_crown_dependency("+44 1481 123456", "441481", "gg")]
#[case::zone_5("+506 8888 1234", "506", "cr")]
#[case::zone_5_uruguay("+598 94 123 456", "598", "uy")]
#[case::zone_6("+61 2 9374 4000", "61", "au")]
#[case::zone_7("+7 495 123 4567", "7", "ru")]
#[case::zone_8("+81 3 1234 5678", "81", "jp")]
#[case::zone_9("+971 4 123 4567", "971", "ae")]
fn test_world_zones(#[case] raw: &str, #[case] code: &str, #[case] region: &str) {
    let table = CountryTable::bundled();
    let (parsed, country) = PhoneParser::new(&table)
        .parse_with_country(raw)
        .unwrap_or_else(|| panic!("{} should parse", raw));

    assert_eq!(parsed.country_code, code);
    assert_eq!(country.name_code, region);
    assert_eq!(parsed.digits(), strip_non_digits(raw));
}

#[test]
fn test_every_code_followed_by_six_digits_parses() {
    let table = CountryTable::bundled();
    let parser = PhoneParser::new(&table);

    for country in table.iter() {
        let digits = format!("{}555012", country.code);
        let parsed = parser.parse(&digits).expect("code plus six digits should parse");
        assert_eq!(parsed.digits(), digits);
        assert!(parsed.national_number.len() >= 6);

        let shadowed = table
            .iter()
            .any(|other| other.code_length() > country.code_length() && digits.starts_with(&other.code));
        if !shadowed {
            assert_eq!(parsed.country_code, country.code, "{} parsed with the wrong code", digits);
        }
    }
}

#[test]
fn test_bundled_table_covers_itu_regions() {
    let table = CountryTable::bundled();
    assert!(table.len() >= 240, "only {} entries", table.len());

    for name_code in ["by", "cr", "uy", "am", "md", "pa", "ec", "bo", "pr", "kz", "gg"] {
        assert!(table.find_by_name_code(name_code).is_some(), "missing {}", name_code);
    }
}

#[test]
fn test_formatted_number_parses_back() {
    let table = CountryTable::bundled();
    let parser = PhoneParser::new(&table);

    let first = parser.parse("+1 (202) 555-0199").unwrap();
    let again = parser.parse(&first.formatted()).unwrap();
    assert_eq!(again, first);
    assert_eq!(strip_non_digits(&format_digits("12025550199")), "12025550199");
}
