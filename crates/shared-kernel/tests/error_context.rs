use std::io;

use corpus_profile_shared_kernel::{CorpusProfileError, DomainError, ErrorContext, InfrastructureError};

fn boom() -> std::result::Result<(), io::Error> {
    Err(io::Error::other("root-io"))
}

#[test]
fn context_wraps_and_formats() {
    let err = boom()
        .map_err(CorpusProfileError::from)
        .context("reading options")
        .unwrap_err();

    assert_eq!(err.to_string(), "reading options");
    let source = std::error::Error::source(&err).expect("context keeps its source");
    assert!(source.to_string().contains("Output error:"));
}

#[test]
fn malformed_unit_names_position() {
    let err = CorpusProfileError::from(DomainError::MalformedUnit { position: 3, kind: "null".into() });
    assert!(err.to_string().contains("#3"));
    assert!(err.to_string().contains("null"));
    assert!(!err.is_source_failure());
}

#[test]
fn source_failure_survives_context() {
    let err: CorpusProfileError = InfrastructureError::SourceUnavailable {
        source_name: "corpus.txt".into(),
        reason: "missing".into(),
        source: None,
    }
    .into();
    let wrapped = Err::<(), _>(err).context("profiling").unwrap_err();
    assert!(wrapped.is_source_failure());
}
