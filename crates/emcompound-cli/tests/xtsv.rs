//! xtsv stream tests: header handling, sentence framing and comments.

use serde_json::json;

use emcompound_cli::annotate_stream;
use emcompound_core::ErrorKind;
use emcompound_hu::{CompoundOptions, ExceptionTable, SentenceProcessor};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn anas(lemma: &str, tag: &str, morphana: &str) -> String {
    json!([{"lemma": lemma, "tag": tag, "morphana": morphana, "readable": ""}]).to_string()
}

fn line(fields: &[&str]) -> String {
    fields.join("\t")
}

fn run(input: &str, conllu_comments: bool) -> (String, SentenceProcessor) {
    let mut processor = SentenceProcessor::new(ExceptionTable::empty(), CompoundOptions::default());
    let mut out = Vec::new();
    annotate_stream(input.as_bytes(), &mut out, &mut processor, conllu_comments).unwrap();
    (String::from_utf8(out).unwrap(), processor)
}

fn haztartas_line() -> String {
    let tag = "[/N][Nom]";
    line(&[
        "háztartás",
        "háztartás",
        tag,
        anas("háztartás", tag, "ház[/N]=ház+tartás[/N]=tartás+[Nom]=").as_str(),
    ])
}

fn es_line() -> String {
    line(&["és", "és", "[/Cnj]", "[]"])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn empty_input_gives_empty_output() {
    let (out, _) = run("", false);
    assert_eq!(out, "");
}

#[test]
fn header_gets_compound_column() {
    let (out, _) = run("form\tlemma\txpostag\tanas\n", false);
    assert_eq!(out, "form\tlemma\txpostag\tanas\tcompound\n");
}

#[test]
fn sentences_are_annotated_and_separated() {
    let input = format!(
        "form\tlemma\txpostag\tanas\n{}\n{}\n\n{}\n",
        haztartas_line(),
        es_line(),
        haztartas_line(),
    );
    let (out, processor) = run(&input, false);
    let expected = format!(
        "form\tlemma\txpostag\tanas\tcompound\n{}\tház#tartás\n{}\tés\n\n{}\tház#tartás\n\n",
        haztartas_line(),
        es_line(),
        haztartas_line(),
    );
    assert_eq!(out, expected);
    assert_eq!(processor.cache().hits(), 1);
}

#[test]
fn repeated_blank_lines_do_not_create_empty_sentences() {
    let input = format!("form\tlemma\txpostag\tanas\n\n\n{}\n\n\n", es_line());
    let (out, _) = run(&input, false);
    assert_eq!(out, format!("form\tlemma\txpostag\tanas\tcompound\n{}\tés\n\n", es_line()));
}

#[test]
fn column_order_follows_header() {
    let input = "anas\tlemma\txpostag\n[]\tés\t[/Cnj]\n";
    let (out, _) = run(input, false);
    assert_eq!(out, "anas\tlemma\txpostag\tcompound\n[]\tés\t[/Cnj]\tés\n\n");
}

#[test]
fn comments_pass_through_when_enabled() {
    let input = format!(
        "form\tlemma\txpostag\tanas\n# sent_id = 1\n# text = és\n{}\n",
        es_line()
    );
    let (out, _) = run(&input, true);
    assert_eq!(
        out,
        format!(
            "form\tlemma\txpostag\tanas\tcompound\n# sent_id = 1\n# text = és\n{}\tés\n\n",
            es_line()
        )
    );
}

#[test]
fn missing_field_is_configuration_error() {
    let mut processor = SentenceProcessor::new(ExceptionTable::empty(), CompoundOptions::default());
    let mut out = Vec::new();
    let err = annotate_stream("form\tlemma\n".as_bytes(), &mut out, &mut processor, false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(out.is_empty());
}

#[test]
fn corrupt_anas_aborts_run() {
    let input = "form\tlemma\txpostag\tanas\nház\tház\t[/N][Nom]\t[{\"x\"+ház[/N]\n";
    let mut processor = SentenceProcessor::new(ExceptionTable::empty(), CompoundOptions::default());
    let mut out = Vec::new();
    let err = annotate_stream(input.as_bytes(), &mut out, &mut processor, false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn failing_sentence_reports_its_line_after_earlier_output() {
    let input = format!(
        "form\tlemma\txpostag\tanas\n{}\n\n{}\nház\tház\t[/N][Nom]\t[{{\"x\"+ház[/N]\n",
        haztartas_line(),
        es_line()
    );
    let mut processor = SentenceProcessor::new(ExceptionTable::empty(), CompoundOptions::default());
    let mut out = Vec::new();
    let err = annotate_stream(input.as_bytes(), &mut out, &mut processor, false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(err.to_string().starts_with("input line 4: "));
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!(
            "form\tlemma\txpostag\tanas\tcompound\n{}\tház#tartás\n\n",
            haztartas_line()
        )
    );
}
