mod common;

use common::{meta, three_section_page};
use mobile_sections::{build_all, build_references, OutputMode, Options, Selectors};

#[test]
fn options_struct_update_syntax_overrides_selected_fields_only() {
    let options = Options {
        lead_image_widths: vec![100],
        ..Options::for_language("de")
    };

    assert_eq!(options.language, "de");
    assert_eq!(options.lead_image_widths, vec![100]);
    assert!(!options.detect_reference_markup);
    assert_eq!(options.selectors.hatnote, Selectors::default().hatnote);
}

#[test]
fn custom_infobox_selector_is_respected() {
    let options = Options {
        selectors: Selectors {
            infobox: ".sidebar".to_string(),
            ..Selectors::default()
        },
        ..Options::default()
    };

    let all = build_all(&three_section_page(), &meta("Foo"), OutputMode::Decomposed, &options)
        .expect("expected Ok(_)")
        .expect("expected content");

    assert_eq!(all.lead.infobox(), None);
}

#[test]
fn invalid_selector_matches_nothing() {
    let options = Options {
        selectors: Selectors {
            hatnote: "div[".to_string(),
            ..Selectors::default()
        },
        ..Options::default()
    };

    let all = build_all(&three_section_page(), &meta("Foo"), OutputMode::Decomposed, &options)
        .expect("expected Ok(_)")
        .expect("expected content");

    assert!(all.lead.hatnotes.is_empty());
    assert!(all.lead.infobox().is_some());
}

#[test]
fn english_headings_do_not_apply_to_other_languages() {
    let references =
        build_references(&three_section_page(), &Options::for_language("de")).expect("expected Ok(_)");
    assert!(references.sections.is_empty());

    let options = Options {
        detect_reference_markup: true,
        ..Options::for_language("de")
    };
    let references = build_references(&three_section_page(), &options).expect("expected Ok(_)");
    assert_eq!(references.sections.len(), 1);
}

#[test]
fn options_implements_debug_and_clone() {
    let options = Options::default();

    let debug_str = format!("{options:?}");
    assert!(debug_str.contains("Options"));
    assert!(debug_str.contains("lead_image_widths"));

    let cloned = options.clone();
    assert_eq!(cloned.language, options.language);
    assert_eq!(cloned.selectors.always_stripped, options.selectors.always_stripped);
}
