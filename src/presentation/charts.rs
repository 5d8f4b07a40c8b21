// src/presentation/charts.rs
use std::io::Write;

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL};

use corpus_profile_domain::CorpusProfile;
use corpus_profile_shared_kernel::Result;

const BAR_WIDTH: usize = 40;
const BAR_CHAR: char = '█';

/// Writes the four frequency charts: top and last `top_n` characters and tokens.
pub fn write_charts<W: Write>(out: &mut W, profile: &CorpusProfile, top_n: usize) -> Result<()> {
    let top_chars = label_chars(profile.chars.top(top_n));
    let last_chars = label_chars(profile.chars.bottom(top_n));
    let top_tokens = profile.tokens.top(top_n);
    let last_tokens = profile.tokens.bottom(top_n);

    for (title, entries) in [
        (format!("Top {top_n} characters"), top_chars),
        (format!("Last {top_n} characters"), last_chars),
        (format!("Top {top_n} tokens"), top_tokens),
        (format!("Last {top_n} tokens"), last_tokens),
    ] {
        writeln!(out, "{title}")?;
        if entries.is_empty() {
            writeln!(out, "  (none)")?;
        } else {
            writeln!(out, "{}", bar_chart(&entries))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Characters are shown quoted and escaped so whitespace stays visible.
fn label_chars(entries: Vec<(char, usize)>) -> Vec<(String, usize)> {
    entries.into_iter().map(|(c, n)| (format!("{c:?}"), n)).collect()
}

/// Horizontal bar chart; bars are scaled to the largest count in `entries`.
pub fn bar_chart(entries: &[(String, usize)]) -> Table {
    let max = entries.iter().map(|(_, n)| *n).max().unwrap_or(0);
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["key", "count", ""]);
    for (key, count) in entries {
        table.add_row(vec![
            Cell::new(key),
            Cell::new(count).set_alignment(CellAlignment::Right),
            Cell::new(bar(*count, max)),
        ]);
    }
    table
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    // at least one block for any non-zero count
    let width = (count * BAR_WIDTH).div_ceil(max);
    BAR_CHAR.to_string().repeat(width)
}
