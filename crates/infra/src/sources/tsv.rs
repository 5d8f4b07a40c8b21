use std::{
    io::BufRead,
    path::{Path, PathBuf},
    sync::Arc,
};

use corpus_profile_ports::{CorpusSource, RawUnit, SourceObserver, UnitStream};
use corpus_profile_shared_kernel::Result;

use super::{Observed, default_observer, iteration_error, open_observed, unavailable};

/// Tab-separated file with a header row; one column is selected by name.
///
/// No quoting or escaping: fields are split on `\t` verbatim. A row with
/// fewer fields than the selected column index yields `RawUnit::Missing`.
#[derive(Clone)]
pub struct TsvSource {
    path: PathBuf,
    column: String,
    observer: Arc<dyn SourceObserver>,
}

impl TsvSource {
    pub fn new(path: impl Into<PathBuf>, column: impl Into<String>) -> Self {
        Self { path: path.into(), column: column.into(), observer: default_observer() }
    }

    pub fn with_observer(mut self, observer: Arc<dyn SourceObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn fail(&self, name: &str, reason: String) -> corpus_profile_shared_kernel::CorpusProfileError {
        let err = unavailable(name, reason, None);
        self.observer.open_failed(name, &err);
        err
    }
}

impl CorpusSource for TsvSource {
    fn name(&self) -> String {
        format!("tsv:{}#{}", self.path.display(), self.column)
    }

    fn units(&self) -> Result<UnitStream<'_>> {
        let name = self.name();
        let mut lines = open_observed(&*self.observer, &name, &self.path)?.lines();

        let header = match lines.next() {
            Some(Ok(header)) => header,
            Some(Err(e)) => return Err(self.fail(&name, format!("unreadable header row: {e}"))),
            None => return Err(self.fail(&name, "missing header row".to_string())),
        };
        let Some(index) = header.split('\t').position(|h| h.trim() == self.column) else {
            return Err(self.fail(&name, format!("column '{}' not found in header", self.column)));
        };

        let source_name = name.clone();
        let column = self.column.clone();
        let units = lines.enumerate().map(move |(offset, line)| -> Result<RawUnit> {
            // header is line 1
            let line = line.map_err(|e| iteration_error(&source_name, offset + 2, e.to_string()))?;
            Ok(match line.split('\t').nth(index) {
                Some(field) => RawUnit::Text(field.to_string()),
                None => RawUnit::Missing { field: column.clone() },
            })
        });
        Ok(Box::new(Observed::new(units, Arc::clone(&self.observer), name)))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::sources::testing::RecordingObserver;

    fn write_file(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(text.as_bytes()).expect("write");
        file
    }

    #[test]
    fn selects_column_by_header_name() {
        let file = write_file("id\ttext\n1\tHello world\n2\t\n3\n");
        let units: Vec<RawUnit> =
            TsvSource::new(file.path(), "text").units().unwrap().collect::<Result<_>>().unwrap();
        assert_eq!(units, vec![
            RawUnit::from("Hello world"),
            RawUnit::from(""),
            RawUnit::Missing { field: "text".into() },
        ]);
    }

    #[test]
    fn unknown_column_is_reported_at_open() {
        let file = write_file("id\tbody\n1\tx\n");
        let observer = Arc::new(RecordingObserver::default());
        let source = TsvSource::new(file.path(), "text").with_observer(observer.clone());
        let err = source.units().err().expect("column missing");
        assert!(err.to_string().contains("column 'text' not found"));
        assert!(err.is_source_failure());
        assert!(observer.events().iter().any(|e| e.starts_with("failed")));
    }

    #[test]
    fn empty_file_has_no_header() {
        let file = write_file("");
        let err = TsvSource::new(file.path(), "text").units().err().expect("no header");
        assert!(err.to_string().contains("missing header row"));
    }
}
