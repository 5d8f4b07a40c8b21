use std::{
    io::BufRead,
    path::{Path, PathBuf},
    sync::Arc,
};

use corpus_profile_ports::{CorpusSource, RawUnit, SourceObserver, UnitStream};
use corpus_profile_shared_kernel::Result;
use serde_json::Value;

use super::{Observed, default_observer, iteration_error, open_observed};

/// JSON Lines file: one JSON value per non-blank line.
///
/// With a field selected, each line must be an object and the unit is that
/// field's value (`RawUnit::Missing` if absent). Without one, the whole line
/// value is the unit.
#[derive(Clone)]
pub struct JsonlSource {
    path: PathBuf,
    field: Option<String>,
    observer: Arc<dyn SourceObserver>,
}

impl JsonlSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), field: None, observer: default_observer() }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn SourceObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn select(value: Value, field: Option<&str>) -> RawUnit {
    match (field, value) {
        (None, value) => RawUnit::from(value),
        (Some(field), Value::Object(mut row)) => match row.remove(field) {
            Some(value) => RawUnit::from(value),
            None => RawUnit::Missing { field: field.to_string() },
        },
        (Some(field), _) => RawUnit::Missing { field: field.to_string() },
    }
}

impl CorpusSource for JsonlSource {
    fn name(&self) -> String {
        match &self.field {
            Some(field) => format!("jsonl:{}#{field}", self.path.display()),
            None => format!("jsonl:{}", self.path.display()),
        }
    }

    fn units(&self) -> Result<UnitStream<'_>> {
        let name = self.name();
        let reader = open_observed(&*self.observer, &name, &self.path)?;
        let source_name = name.clone();
        let field = self.field.clone();
        let units = reader
            .lines()
            .enumerate()
            .filter(|(_, line)| line.as_ref().map_or(true, |l| !l.trim().is_empty()))
            .map(move |(index, line)| -> Result<RawUnit> {
                let line = line.map_err(|e| iteration_error(&source_name, index + 1, e.to_string()))?;
                let value: Value = serde_json::from_str(&line)
                    .map_err(|e| iteration_error(&source_name, index + 1, format!("invalid JSON: {e}")))?;
                Ok(select(value, field.as_deref()))
            });
        Ok(Box::new(Observed::new(units, Arc::clone(&self.observer), name)))
    }
}
