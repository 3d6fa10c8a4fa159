//! Integration tests for the pagecat binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cmd() -> Command {
    Command::cargo_bin("pagecat").unwrap()
}

const PAGE_NS: &str = "http://schema.primaresearch.org/PAGE/gts/pagecontent/2013-07-15";

/// Wrap a page body in a namespaced PcGts document.
fn page_doc(body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<PcGts xmlns=\"{PAGE_NS}\"><Page>{body}</Page></PcGts>"
    )
}

fn two_line_doc() -> String {
    page_doc(
        r#"<TextRegion id="r1">
            <TextLine id="l1"><TextEquiv conf="0.9"><Unicode>ab</Unicode></TextEquiv></TextLine>
            <TextLine id="l2"><TextEquiv conf="0.8"><Unicode>cd</Unicode></TextEquiv></TextLine>
        </TextRegion>"#,
    )
}

fn reordered_doc() -> String {
    page_doc(
        r#"<ReadingOrder><OrderedGroup id="g1">
            <RegionRefIndexed index="0" regionRef="rB"/>
            <RegionRefIndexed index="1" regionRef="rA"/>
        </OrderedGroup></ReadingOrder>
        <TextRegion id="rA">
            <TextLine id="a1"><TextEquiv><Unicode>alpha</Unicode></TextEquiv></TextLine>
        </TextRegion>
        <TextRegion id="rB">
            <TextLine id="b1"><TextEquiv><Unicode>beta</Unicode></TextEquiv></TextLine>
        </TextRegion>"#,
    )
}

/// Write a document to a temporary file and return the handle.
fn write_temp_xml(content: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(".xml").tempfile().unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

// --- Default output ---

#[test]
fn cat_single_file_default_flags() {
    let f = write_temp_xml(&two_line_doc());

    cmd()
        .arg(f.path())
        .assert()
        .success()
        .stdout("ab\ncd\n");
}

#[test]
fn cat_reads_stdin_when_no_arguments() {
    cmd()
        .write_stdin(two_line_doc())
        .assert()
        .success()
        .stdout("ab\ncd\n");
}

#[test]
fn dash_argument_reads_stdin() {
    cmd()
        .arg("-")
        .write_stdin(two_line_doc())
        .assert()
        .success()
        .stdout("ab\ncd\n");
}

#[test]
fn multiple_files_in_argument_order() {
    let first = write_temp_xml(&page_doc(
        r#"<TextLine id="l1"><TextEquiv><Unicode>one</Unicode></TextEquiv></TextLine>"#,
    ));
    let second = write_temp_xml(&page_doc(
        r#"<TextLine id="l1"><TextEquiv><Unicode>two</Unicode></TextEquiv></TextLine>"#,
    ));

    cmd()
        .args([second.path(), first.path()])
        .assert()
        .success()
        .stdout("two\none\n");
}

// --- Decorations ---

#[test]
fn conf_flag_prefixes_confidence() {
    let f = write_temp_xml(&two_line_doc());

    cmd()
        .args(["--conf"])
        .arg(f.path())
        .assert()
        .success()
        .stdout("0.9 ab\n0.8 cd\n");
}

#[test]
fn id_flag_prefixes_id_and_index() {
    let f = write_temp_xml(&two_line_doc());

    cmd()
        .args(["--id"])
        .arg(f.path())
        .assert()
        .success()
        .stdout("l1@0 ab\nl2@0 cd\n");
}

#[test]
fn filename_flag_prefixes_path() {
    let f = write_temp_xml(&two_line_doc());
    let path = f.path().to_str().unwrap().to_string();

    cmd()
        .args(["--filename", &path])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{path} ab\n{path} cd\n")));
}

#[test]
fn filename_flag_has_no_effect_on_stdin() {
    cmd()
        .args(["--filename"])
        .write_stdin(two_line_doc())
        .assert()
        .success()
        .stdout("ab\ncd\n");
}

#[test]
fn norm_flag_replaces_spaces() {
    let f = write_temp_xml(&page_doc(
        r#"<TextLine id="l1"><TextEquiv><Unicode>a b c</Unicode></TextEquiv></TextLine>"#,
    ));

    cmd()
        .args(["--norm"])
        .arg(f.path())
        .assert()
        .success()
        .stdout("a_b_c\n");
}

// --- Granularity ---

#[test]
fn words_flag_selects_word_granularity() {
    let f = write_temp_xml(&page_doc(
        r#"<TextLine id="l1">
            <Word id="w1"><TextEquiv><Unicode>hello</Unicode></TextEquiv></Word>
            <Word id="w2"><TextEquiv><Unicode>world</Unicode></TextEquiv></Word>
            <TextEquiv><Unicode>hello world</Unicode></TextEquiv>
        </TextLine>"#,
    ));

    cmd()
        .args(["--words"])
        .arg(f.path())
        .assert()
        .success()
        .stdout("hello\nworld\n");
}

#[test]
fn regions_flag_selects_region_granularity() {
    let f = write_temp_xml(&page_doc(
        r#"<TextRegion id="r1">
            <TextLine id="l1"><TextEquiv><Unicode>line</Unicode></TextEquiv></TextLine>
            <TextEquiv><Unicode>whole region</Unicode></TextEquiv>
        </TextRegion>"#,
    ));

    cmd()
        .args(["--regions"])
        .arg(f.path())
        .assert()
        .success()
        .stdout("whole region\n");
}

// --- Reading order ---

#[test]
fn declared_order_reorders_regions() {
    let f = write_temp_xml(&reordered_doc());

    cmd()
        .arg(f.path())
        .assert()
        .success()
        .stdout("beta\nalpha\n");
}

#[test]
fn serial_flag_uses_document_order() {
    let f = write_temp_xml(&reordered_doc());

    cmd()
        .args(["--serial"])
        .arg(f.path())
        .assert()
        .success()
        .stdout("alpha\nbeta\n");
}

// --- Alternative indices ---

#[test]
fn index_flag_selects_alternative() {
    let f = write_temp_xml(&page_doc(
        r#"<TextLine id="l1">
            <TextEquiv><Unicode>best</Unicode></TextEquiv>
            <TextEquiv><Unicode>second</Unicode></TextEquiv>
        </TextLine>"#,
    ));

    cmd()
        .args(["--index", "1"])
        .arg(f.path())
        .assert()
        .success()
        .stdout("second\n");
}

#[test]
fn index_list_emits_each_requested_alternative() {
    let f = write_temp_xml(&page_doc(
        r#"<TextLine id="l1">
            <TextEquiv><Unicode>best</Unicode></TextEquiv>
            <TextEquiv><Unicode>second</Unicode></TextEquiv>
        </TextLine>"#,
    ));

    cmd()
        .args(["--index", "0,-1"])
        .arg(f.path())
        .assert()
        .success()
        .stdout("best\nsecond\n");
}

#[test]
fn out_of_range_index_fails() {
    let f = write_temp_xml(&two_line_doc());

    cmd()
        .args(["--index", "3"])
        .arg(f.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid alternative index 3"));
}

// --- Errors ---

#[test]
fn missing_file_fails_with_diagnostic() {
    cmd()
        .arg("no_such_page.xml")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: no_such_page.xml"));
}

#[test]
fn malformed_xml_fails_with_parse_error() {
    let f = write_temp_xml("<PcGts><unclosed");

    cmd()
        .arg(f.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("parse error"));
}

#[test]
fn malformed_stdin_names_stdin_in_diagnostic() {
    cmd()
        .write_stdin("not xml at all")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: stdin"));
}

#[test]
fn first_failing_file_aborts_remaining_files() {
    let good = write_temp_xml(&page_doc(
        r#"<TextLine id="l1"><TextEquiv><Unicode>before</Unicode></TextEquiv></TextLine>"#,
    ));
    let bad = write_temp_xml("<PcGts><unclosed");
    let never = write_temp_xml(&page_doc(
        r#"<TextLine id="l1"><TextEquiv><Unicode>after</Unicode></TextEquiv></TextLine>"#,
    ));

    cmd()
        .args([good.path(), bad.path(), never.path()])
        .assert()
        .failure()
        .code(1)
        .stdout("before\n")
        .stderr(predicate::str::contains("parse error"));
}

#[test]
fn missing_unicode_keeps_partial_output() {
    let f = write_temp_xml(&page_doc(
        r#"<TextRegion id="r1">
            <TextLine id="l1"><TextEquiv><Unicode>kept</Unicode></TextEquiv></TextLine>
            <TextLine id="l2"><TextEquiv/></TextLine>
        </TextRegion>"#,
    ));

    cmd()
        .arg(f.path())
        .assert()
        .failure()
        .code(1)
        .stdout("kept\n")
        .stderr(predicate::str::contains("missing Unicode text"));
}

#[test]
fn malformed_reading_order_fails() {
    let f = write_temp_xml(&page_doc(
        r#"<ReadingOrder><OrderedGroup id="g1">
            <RegionRefIndexed index="zero" regionRef="r1"/>
        </OrderedGroup></ReadingOrder>
        <TextRegion id="r1">
            <TextLine id="l1"><TextEquiv><Unicode>text</Unicode></TextEquiv></TextLine>
        </TextRegion>"#,
    ));

    cmd()
        .arg(f.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid reading order"));
}

#[test]
fn exit_code_zero_on_success() {
    let f = write_temp_xml(&two_line_doc());

    cmd().arg(f.path()).assert().success().code(0);
}
