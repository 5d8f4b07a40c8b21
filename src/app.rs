// src/app.rs
use std::{io::Write, sync::Arc};

use corpus_profile_infra::{LogObserver, LogProgress};
use corpus_profile_shared_kernel::{ErrorContext, Result};
use corpus_profile_usecase::{PreviewCorpus, ProfileCorpus};

use crate::{config::Config, presentation};

/// Runs one CLI invocation, writing everything to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let source = config.source(Arc::new(LogObserver));
    let name = source.name();

    if let Some(n) = config.head {
        let units = PreviewCorpus::new(source.as_ref()).run(n)?;
        presentation::write_preview(out, &units)?;
        out.flush()?;
        return Ok(());
    }

    let progress = LogProgress::default();
    let profile = ProfileCorpus::new(source.as_ref())
        .with_progress(&progress)
        .run(&config.options)
        .with_context(|| format!("profiling '{name}'"))?;

    if config.json {
        presentation::write_json(out, &profile)?;
    } else {
        presentation::write_summary(out, &name, &profile.summary())?;
        if config.charts {
            presentation::write_charts(out, &profile, config.top_n)?;
        }
        if let Some(format) = config.rows {
            presentation::write_metrics(out, &profile.metrics, format)?;
        }
    }
    out.flush()?;
    Ok(())
}
