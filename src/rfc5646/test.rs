use super::*;
use crate::parsing::{Parser, parse_entirely};

fn parse_tag(input: &str) -> LanguageTag {
    match parse_entirely(language_tag).parse_str(input) {
        Ok((tag, _)) => tag,
        Err(err) => panic!("{input:?} did not parse: {err}"),
    }
}

fn simple(tag: LanguageTag) -> SimpleTag {
    match tag {
        LanguageTag::Simple(tag) => tag,
        other => panic!("expected a simple tag, got {other:?}"),
    }
}

#[test]
fn primary_language_only() {
    let tag = simple(parse_tag("de"));
    assert_eq!(tag.language, Language::new("de"));
    assert_eq!(tag.script, None);
    assert_eq!(tag.region, None);

    let tag = simple(parse_tag("mas"));
    assert_eq!(tag.language, Language::new("mas"));
}

#[test]
fn extended_language_subtags() {
    let tag = simple(parse_tag("zh-cmn"));
    assert_eq!(tag.language.primary, "zh");
    assert_eq!(tag.language.extended.as_deref(), Some("cmn"));

    let tag = simple(parse_tag("zh-yue-gan-min"));
    assert_eq!(tag.language.primary, "zh");
    assert_eq!(tag.language.extended.as_deref(), Some("yue-gan-min"));
}

#[test]
fn script_subtag() {
    let tag = simple(parse_tag("zh-Hans"));
    assert_eq!(tag.language.primary, "zh");
    // four letters cannot be an extlang part
    assert_eq!(tag.language.extended, None);
    assert_eq!(tag.script.as_deref(), Some("Hans"));

    let tag = simple(parse_tag("zh-cmn-Hans"));
    assert_eq!(tag.language.extended.as_deref(), Some("cmn"));
    assert_eq!(tag.script.as_deref(), Some("Hans"));
}

#[test]
fn region_subtag() {
    let tag = simple(parse_tag("de-DE"));
    assert_eq!(tag.language.primary, "de");
    assert_eq!(tag.region.as_deref(), Some("DE"));

    let tag = simple(parse_tag("es-419"));
    assert_eq!(tag.region.as_deref(), Some("419"));

    let tag = simple(parse_tag("zh-Hant-CN"));
    assert_eq!(tag.script.as_deref(), Some("Hant"));
    assert_eq!(tag.region.as_deref(), Some("CN"));
}

#[test]
fn variant_subtags() {
    let tag = simple(parse_tag("sl-rozaj"));
    assert_eq!(tag.variants, vec!["rozaj"]);

    let tag = simple(parse_tag("sl-rozaj-biske"));
    assert_eq!(tag.variants, vec!["rozaj", "biske"]);

    let tag = simple(parse_tag("de-CH-1901"));
    assert_eq!(tag.region.as_deref(), Some("CH"));
    assert_eq!(tag.variants, vec!["1901"]);
}

#[test]
fn extension_subtags() {
    let tag = simple(parse_tag("en-US-u-islamcal"));
    assert_eq!(tag.region.as_deref(), Some("US"));
    assert_eq!(
        tag.extensions,
        vec![Extension {
            singleton: 'u',
            parts: vec!["islamcal".to_owned()],
        }]
    );

    let tag = simple(parse_tag("en-a-myext-b-another"));
    assert_eq!(
        tag.extensions,
        vec![
            Extension {
                singleton: 'a',
                parts: vec!["myext".to_owned()],
            },
            Extension {
                singleton: 'b',
                parts: vec!["another".to_owned()],
            },
        ]
    );
}

#[test]
fn trailing_private_use() {
    let tag = simple(parse_tag("zh-CN-a-myext-x-private"));
    assert_eq!(tag.extensions.len(), 1);
    assert_eq!(tag.private_use.as_deref(), Some("x-private"));

    let tag = simple(parse_tag("de-x-foo-bar"));
    assert_eq!(tag.private_use.as_deref(), Some("x-foo-bar"));
}

#[test]
fn whole_tag_private_use() {
    let tag = parse_tag("x-whatever");
    assert_eq!(tag, LanguageTag::PrivateUse("x-whatever".to_owned()));
}

#[test]
fn grandfathered_tags() {
    assert_eq!(
        parse_tag("i-klingon"),
        LanguageTag::Grandfathered(Grandfathered::Irregular("i-klingon".to_owned()))
    );
    assert_eq!(
        parse_tag("art-lojban"),
        LanguageTag::Grandfathered(Grandfathered::Regular("art-lojban".to_owned()))
    );
    // "zh-min" must not shadow the longer entry
    assert_eq!(
        parse_tag("zh-min-nan"),
        LanguageTag::Grandfathered(Grandfathered::Regular("zh-min-nan".to_owned()))
    );
    assert_eq!(
        parse_tag("zh-min"),
        LanguageTag::Grandfathered(Grandfathered::Regular("zh-min".to_owned()))
    );
}

#[test]
fn grandfathered_prefix_does_not_shadow_longer_generic_tags() {
    let tag = simple(parse_tag("no-nynorsk"));
    assert_eq!(tag.language, Language::new("no"));
    assert_eq!(tag.variants, vec!["nynorsk"]);

    let tag = simple(parse_tag("zh-min-xiang"));
    assert_eq!(tag.language.primary, "zh");
    assert_eq!(tag.language.extended.as_deref(), Some("min"));
    assert_eq!(tag.variants, vec!["xiang"]);
}

#[test]
fn rejects_malformed_tags() {
    // region cannot follow a region
    assert!(parse_entirely(language_tag).parse_str("de-419-DE").is_err());
    // single-letter primary subtag is not a language
    assert!(parse_entirely(language_tag).parse_str("a-DE").is_err());
    assert!(parse_entirely(language_tag).parse_str("").is_err());
}

#[test]
fn rejects_duplicate_singleton() {
    let err = parse_entirely(language_tag)
        .parse_str("ar-a-aaa-b-bbb-a-ccc")
        .unwrap_err();
    assert_eq!(err.offset(), 0);
    assert!(err.message().contains("'a'"));
}

#[test]
fn distinct_singletons_allowed() {
    let tag = simple(parse_tag("ar-b-bbb-a-ccc"));
    assert_eq!(tag.extensions.len(), 2);
    assert_eq!(tag.extensions[0].singleton, 'b');
    assert_eq!(tag.extensions[1].singleton, 'a');
}

#[test]
fn display_round_trips() {
    for input in [
        "de",
        "zh-yue-gan-min",
        "zh-cmn-Hans-CN",
        "sl-rozaj-biske",
        "de-CH-1901",
        "en-US-u-islamcal",
        "ar-b-bbb-a-ccc",
        "zh-CN-a-myext-x-private",
        "x-whatever",
        "i-klingon",
        "zh-min-nan",
        "no-nynorsk",
        "sgn-CH-DE",
    ] {
        assert_eq!(parse_tag(input).to_string(), input);
    }
}
