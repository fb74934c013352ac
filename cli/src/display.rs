use anyhow::Result;
use newsrank_core::RankedResult;
use std::io::Write;
use std::time::Duration;

pub const PREVIEW_CHARS: usize = 200;

/// First `PREVIEW_CHARS` characters on a single line, with a trailing ellipsis.
pub fn preview(text: &str) -> String {
    let head: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{}...", head.replace('\n', " "))
}

/// Human-readable listing. Results that scored zero matched nothing and are
/// left out of the listing, though they still count towards "Found N".
pub fn write_results<W: Write>(out: &mut W, results: &[RankedResult<'_>], elapsed: Duration) -> Result<()> {
    writeln!(out, "\nFound {} results in {:.4} seconds:", results.len(), elapsed.as_secs_f64())?;
    for (rank, hit) in results.iter().enumerate() {
        if hit.score <= 0.0 {
            continue;
        }
        writeln!(out, "[{}] {}", rank + 1, hit.title)?;
        writeln!(out, "    Score: {:.4}", hit.score)?;
        writeln!(out, "    Preview: {}\n", preview(hit.text))?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, results: &[RankedResult<'_>]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, results)?;
    writeln!(out)?;
    Ok(())
}
