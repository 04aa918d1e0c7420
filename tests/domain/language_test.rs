use lexscribe::domain::{LanguageSelection, SUPPORTED_LANGUAGES};

#[test]
fn given_auto_or_empty_input_when_parsed_then_selects_auto_detection() {
    assert_eq!(LanguageSelection::parse("auto"), Ok(LanguageSelection::Auto));
    assert_eq!(LanguageSelection::parse("AUTO"), Ok(LanguageSelection::Auto));
    assert_eq!(LanguageSelection::parse(""), Ok(LanguageSelection::Auto));
    assert_eq!(LanguageSelection::parse("  "), Ok(LanguageSelection::Auto));
}

#[test]
fn given_supported_code_when_parsed_then_normalizes_case_and_whitespace() {
    assert_eq!(
        LanguageSelection::parse(" EN "),
        Ok(LanguageSelection::Tag("en".to_string()))
    );
    for code in SUPPORTED_LANGUAGES {
        assert!(LanguageSelection::parse(code).is_ok());
    }
}

#[test]
fn given_unknown_code_when_parsed_then_rejects() {
    assert!(LanguageSelection::parse("xx").is_err());
    assert!(LanguageSelection::parse("english").is_err());
}

#[test]
fn given_selection_when_queried_then_tag_reflects_choice() {
    assert_eq!(LanguageSelection::Auto.as_tag(), None);
    assert!(LanguageSelection::Auto.is_auto());

    let explicit = LanguageSelection::parse("de").unwrap();
    assert_eq!(explicit.as_tag(), Some("de"));
    assert!(!explicit.is_auto());
}
