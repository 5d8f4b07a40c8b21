//! Profiling through the concrete file-backed sources.

use std::io::Write;

use corpus_profile_domain::ProfileOptions;
use corpus_profile_infra::{InMemorySource, JsonlSource, LineSource, TsvSource};
use corpus_profile_ports::CorpusSource;
use corpus_profile_shared_kernel::{CorpusProfileError, DomainError};
use corpus_profile_usecase::{PreviewCorpus, ProfileCorpus};

fn write_file(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(text.as_bytes()).expect("write");
    file
}

fn profile(source: &dyn CorpusSource) -> corpus_profile_shared_kernel::Result<corpus_profile_domain::CorpusProfile> {
    ProfileCorpus::new(source).run(&ProfileOptions::default())
}

#[test]
fn every_source_kind_produces_the_same_profile() {
    let lines = write_file("Hello world!\n  \n<p>hi</p>\n");
    let jsonl = write_file(
        "{\"text\": \"Hello world!\"}\n{\"text\": \"  \"}\n{\"text\": \"<p>hi</p>\"}\n",
    );
    let tsv = write_file("id\ttext\n1\tHello world!\n2\t  \n3\t<p>hi</p>\n");

    let expected = profile(&InMemorySource::from_texts(["Hello world!", "  ", "<p>hi</p>"])).expect("memory");
    assert_eq!(profile(&LineSource::new(lines.path())).expect("lines"), expected);
    assert_eq!(profile(&JsonlSource::new(jsonl.path()).with_field("text")).expect("jsonl"), expected);
    assert_eq!(profile(&TsvSource::new(tsv.path(), "text")).expect("tsv"), expected);

    assert_eq!(expected.metrics.len(), 3);
    assert_eq!(expected.metrics.rows()[1].is_empty_flag(), 1);
    assert_eq!(expected.metrics.rows()[2].html_tags, Some(1));
}

#[test]
fn null_field_fails_fast_with_position() {
    let jsonl = write_file("{\"text\": \"a\"}\n{\"text\": \"b\"}\n{\"text\": null}\n{\"text\": \"c\"}\n");
    let err = profile(&JsonlSource::new(jsonl.path()).with_field("text")).expect_err("null rejected");
    assert!(matches!(
        err,
        CorpusProfileError::Domain(DomainError::MalformedUnit { position: 2, ref kind }) if kind == "null"
    ));
}

#[test]
fn preview_then_profile_uses_independent_passes() {
    let lines = write_file("one\ntwo\nthree\n");
    let source = LineSource::new(lines.path());
    let preview = PreviewCorpus::new(&source).run(2).expect("preview");
    assert_eq!(preview.len(), 2);
    let result = profile(&source).expect("profile");
    assert_eq!(result.units(), 3);
}

#[test]
fn missing_file_is_a_source_failure() {
    let err = profile(&LineSource::new("/no/such/file.txt")).expect_err("missing file");
    assert!(err.is_source_failure());
}
