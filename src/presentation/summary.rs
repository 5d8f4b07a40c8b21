// src/presentation/summary.rs
use std::io::Write;

use corpus_profile_domain::{CorpusProfile, ProfileSummary};
use corpus_profile_ports::RawUnit;
use corpus_profile_shared_kernel::Result;

/// Header block printed before the charts.
pub fn write_summary<W: Write>(out: &mut W, source: &str, summary: &ProfileSummary) -> Result<()> {
    writeln!(out, "corpus_profile v{} · {source}", crate::VERSION)?;
    writeln!(out)?;
    writeln!(out, "{:>12}  units ({} empty)", summary.units, summary.empty_units)?;
    writeln!(out, "{:>12}  characters ({} distinct)", summary.chars, summary.distinct_chars)?;
    writeln!(out, "{:>12}  tokens ({} distinct)", summary.tokens, summary.distinct_tokens)?;
    writeln!(out, "{:>12}  distinct bigrams", summary.distinct_bigrams)?;
    writeln!(out, "{:>12.2}  mean text length", summary.mean_text_length)?;
    if let Some(mean) = summary.mean_html_tags {
        writeln!(out, "{mean:>12.4}  mean HTML tags")?;
    }
    if let Some(mean) = summary.mean_special_char_fraction {
        writeln!(out, "{mean:>12.4}  mean special char fraction")?;
    }
    if let Some(mean) = summary.mean_whitespace_fraction {
        writeln!(out, "{mean:>12.4}  mean whitespace fraction")?;
    }
    writeln!(out)?;
    Ok(())
}

/// Whole profile plus its summary as one JSON document.
pub fn write_json<W: Write>(out: &mut W, profile: &CorpusProfile) -> Result<()> {
    let document = serde_json::json!({
        "summary": profile.summary(),
        "chars": profile.chars,
        "tokens": profile.tokens,
        "bigrams": profile.bigrams,
        "metrics": profile.metrics,
    });
    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out)?;
    Ok(())
}

/// Numbered preview of raw units.
pub fn write_preview<W: Write>(out: &mut W, units: &[RawUnit]) -> Result<()> {
    for (index, unit) in units.iter().enumerate() {
        match unit.as_text() {
            Some(text) => writeln!(out, "{index:>5}  {text:?}")?,
            None => writeln!(out, "{index:>5}  <{}> {unit}", unit.kind())?,
        }
    }
    Ok(())
}
