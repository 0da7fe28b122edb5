//! End-to-end annotation scenarios over whole sentences.
//!
//! Rows are built the way the xtsv host builds them: positional string
//! columns with `anas` holding a serialized JSON array.
//!
//! Run: cargo test -p emcompound-hu --test scenarios

use serde_json::{Value, json};

use emcompound_core::{ErrorKind, FieldMap};
use emcompound_hu::{CompoundOptions, ExceptionTable, SentenceProcessor};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const HEADER: [&str; 4] = ["form", "lemma", "xpostag", "anas"];

fn fields() -> FieldMap {
    FieldMap::resolve(&HEADER).unwrap()
}

fn ana(lemma: &str, tag: &str, morphana: &str, readable: &str) -> Value {
    json!({
        "lemma": lemma,
        "tag": tag,
        "morphana": morphana,
        "readable": readable,
    })
}

fn row(form: &str, lemma: &str, xpostag: &str, anas: &[Value]) -> Vec<String> {
    vec![
        form.to_string(),
        lemma.to_string(),
        xpostag.to_string(),
        Value::Array(anas.to_vec()).to_string(),
    ]
}

fn compounds(rows: &[Vec<String>]) -> Vec<&str> {
    rows.iter().map(|r| r[HEADER.len()].as_str()).collect()
}

fn default_processor() -> SentenceProcessor {
    SentenceProcessor::new(ExceptionTable::empty(), CompoundOptions::default())
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn preverb_verb_splits_after_preverb() {
    let tag = "[/V][Prs.NDef.3Sg]";
    let mut rows = vec![row(
        "kiad",
        "kiad",
        tag,
        &[ana(
            "kiad",
            tag,
            "ki[/Prev]=ki+ad[/V]=ad+[Prs.NDef.3Sg]=",
            "ki[/Prev] + ad[/V] + [Prs.NDef.3Sg]",
        )],
    )];
    default_processor().process_sentence(&mut rows, &fields()).unwrap();
    assert_eq!(compounds(&rows), ["ki#ad"]);
}

#[test]
fn preverb_verb_with_preverb_in_tag() {
    let tag = "[/Prev][/V]";
    let mut rows = vec![row(
        "kiadás",
        "kiadás",
        tag,
        &[ana("kiadás", tag, "ki[/Prev]=ki+adás[/N][/V]=adás", "ki[/Prev] + adás[/N][/V]")],
    )];
    default_processor().process_sentence(&mut rows, &fields()).unwrap();
    assert_eq!(compounds(&rows), ["ki#adás"]);
}

#[test]
fn finer_segmentation_replaces_coarser_one() {
    let tag = "[/N][Nom]";
    let mut rows = vec![row(
        "kerékpárút",
        "kerékpárút",
        tag,
        &[
            ana("kerékpárút", tag, "kerék[/N]=kerék+párút[/N]=párút+[Nom]=", ""),
            ana("kerékpárút", tag, "kerék[/N]=kerék+pár[/N]=pár+út[/N]=út+[Nom]=", ""),
        ],
    )];
    default_processor().process_sentence(&mut rows, &fields()).unwrap();
    assert_eq!(compounds(&rows), ["kerék#pár#út"]);
}

#[test]
fn boundary_only_in_irrelevant_analysis_keeps_lemma() {
    let tag = "[/N][Nom]";
    let mut rows = vec![row(
        "tartás",
        "tartás",
        tag,
        &[
            ana("tartás", tag, "tart[/V]=tart+ás[_Ger/N]=ás+[Nom]=", ""),
            ana("tart", "[/V][Prs.NDef.3Sg]", "tar[/N]=tar+t[/V]=t", ""),
        ],
    )];
    default_processor().process_sentence(&mut rows, &fields()).unwrap();
    assert_eq!(compounds(&rows), ["tartás"]);
}

#[test]
fn exception_table_suppresses_false_boundary() {
    let tag = "[/N][Nom]";
    let sentence = || {
        vec![row(
            "feloldás",
            "feloldás",
            tag,
            &[ana("feloldás", tag, "fel[/N]=fel+old[/V]=old+ás[_Ger/N]=ás+[Nom]=", "")],
        )]
    };

    let mut plain = sentence();
    default_processor().process_sentence(&mut plain, &fields()).unwrap();
    assert_eq!(compounds(&plain), ["fel#oldás"]);

    let exceptions = ExceptionTable::parse("fel+old\n").unwrap();
    let mut filtered = sentence();
    SentenceProcessor::new(exceptions, CompoundOptions::default())
        .process_sentence(&mut filtered, &fields())
        .unwrap();
    assert_eq!(compounds(&filtered), ["feloldás"]);
}

#[test]
fn repeated_tokens_are_served_from_cache() {
    let tag = "[/N][Nom]";
    let kerekpar = row(
        "kerékpár",
        "kerékpár",
        tag,
        &[ana("kerékpár", tag, "kerék[/N]=kerék+pár[/N]=pár+[Nom]=", "")],
    );
    // same lemma and coarse POS, different case
    let kerekparon = row(
        "kerékpáron",
        "kerékpár",
        "[/N][Supe]",
        &[ana("kerékpár", "[/N][Supe]", "kerék[/N]=kerék+pár[/N]=pár+[Supe]=on", "")],
    );

    let mut processor = default_processor();
    let mut first = vec![kerekpar.clone(), kerekparon];
    let mut second = vec![kerekpar];
    processor.process_sentence(&mut first, &fields()).unwrap();
    processor.process_sentence(&mut second, &fields()).unwrap();

    assert_eq!(compounds(&first), ["kerék#pár", "kerék#pár"]);
    assert_eq!(compounds(&second), ["kerék#pár"]);
    assert_eq!(processor.cache().len(), 1);
    assert_eq!(processor.cache().hits(), 2);
}

#[test]
fn mixed_sentence() {
    let mut rows = vec![
        row("A", "a", "[/Det|Art.Def]", &[ana("a", "[/Det|Art.Def]", "a[/Det|Art.Def]=A", "")]),
        row(
            "háztartási",
            "háztartási",
            "[/Adj][Nom]",
            &[ana(
                "háztartási",
                "[/Adj][Nom]",
                "ház[/N]=ház+tartás[/N]=tartás+i[_Adjz:i/Adj]=i+[Nom]=",
                "",
            )],
        ),
        row(
            "1848-ban",
            "1848",
            "[/Num|Digit][Ine]",
            &[ana("1848", "[/Num|Digit][Ine]", "18[/Num|Digit]=18+48[/Num|Digit]=48+[Ine]=ban", "")],
        ),
        row(
            "kiadták",
            "kiad",
            "[/V][Pst.Def.3Pl]",
            &[ana(
                "kiad",
                "[/V][Pst.Def.3Pl]",
                "ki[/Prev]=ki+ad[/V]=ad+[Pst.Def.3Pl]=ták",
                "ki[/Prev] + ad[/V] + ták[Pst.Def.3Pl]",
            )],
        ),
    ];
    default_processor().process_sentence(&mut rows, &fields()).unwrap();
    assert_eq!(compounds(&rows), ["a", "ház#tartási", "1848", "ki#ad"]);
    assert!(rows.iter().all(|r| r.len() == HEADER.len() + 1));
}

#[test]
fn corrupt_morphana_aborts_sentence() {
    let tag = "[/N][Nom]";
    let mut rows = vec![row(
        "háztető",
        "háztető",
        tag,
        &[ana("háztető", tag, "ház[/N]=ház+tető[/N]", "")],
    )];
    let err = default_processor()
        .process_sentence(&mut rows, &fields())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}
