use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Title used when a row has no heading.
pub const UNTITLED: &str = "Untitled";

#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Deserialize)]
struct InputDoc {
    #[serde(default, alias = "Heading", alias = "heading")]
    title: Option<String>,
    #[serde(default, alias = "Article", alias = "article", alias = "text")]
    body: String,
}

impl From<InputDoc> for RawDocument {
    fn from(doc: InputDoc) -> Self {
        Self { title: doc.title.unwrap_or_else(|| UNTITLED.to_string()), body: doc.body }
    }
}

/// Read every document under `path` in a stable order.
///
/// `path` may be a CSV file (`Heading`/`Article` columns), a `.json` file
/// (array or single object), a `.jsonl` file, or a directory searched
/// recursively for those. Rows with a blank body are skipped.
pub fn load_documents(path: impl AsRef<Path>) -> Result<Vec<RawDocument>> {
    let path = path.as_ref();
    let mut docs = Vec::new();
    let mut skipped = 0usize;
    for file in input_files(path)? {
        let rows = match extension(&file).as_deref() {
            Some("jsonl") => read_jsonl(&file)?,
            Some("json") => read_json(&file)?,
            _ => read_csv(&file)?,
        };
        let before = docs.len();
        for row in rows {
            if row.body.trim().is_empty() {
                skipped += 1;
                continue;
            }
            docs.push(row);
        }
        tracing::debug!(file = %file.display(), loaded = docs.len() - before, "read input file");
    }
    tracing::info!(num_docs = docs.len(), skipped, "ingested documents");
    Ok(docs)
}

fn extension(path: &Path) -> Option<String> {
    path.extension().and_then(|s| s.to_str()).map(|s| s.to_ascii_lowercase())
}

fn input_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_dir() {
        let mut files: Vec<PathBuf> = WalkDir::new(path)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.into_path()),
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable path");
                    None
                }
            })
            .filter(|p| p.is_file() && matches!(extension(p).as_deref(), Some("csv" | "json" | "jsonl")))
            .collect();
        files.sort();
        Ok(files)
    } else if path.is_file() {
        Ok(vec![path.to_path_buf()])
    } else {
        bail!("input path {} does not exist", path.display())
    }
}

fn read_csv(file: &Path) -> Result<Vec<RawDocument>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(file)
        .with_context(|| format!("opening {}", file.display()))?;
    let headers = reader.byte_headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| String::from_utf8_lossy(h).trim().eq_ignore_ascii_case(name))
    };
    let article = column("Article").with_context(|| format!("{} has no Article column", file.display()))?;
    let heading = column("Heading");

    let mut docs = Vec::new();
    for record in reader.byte_records() {
        let record = record.with_context(|| format!("reading {}", file.display()))?;
        // source files are not always clean UTF-8
        let field = |i: usize| record.get(i).map(|b| String::from_utf8_lossy(b).into_owned());
        docs.push(RawDocument {
            title: heading.and_then(field).unwrap_or_else(|| UNTITLED.to_string()),
            body: field(article).unwrap_or_default(),
        });
    }
    Ok(docs)
}

fn read_jsonl(file: &Path) -> Result<Vec<RawDocument>> {
    let reader = BufReader::new(File::open(file).with_context(|| format!("opening {}", file.display()))?);
    let mut docs = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let doc: InputDoc = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: invalid JSON document", file.display(), lineno + 1))?;
        docs.push(doc.into());
    }
    Ok(docs)
}

fn read_json(file: &Path) -> Result<Vec<RawDocument>> {
    let reader = BufReader::new(File::open(file).with_context(|| format!("opening {}", file.display()))?);
    let json: serde_json::Value =
        serde_json::from_reader(reader).with_context(|| format!("parsing {}", file.display()))?;
    let docs = match json {
        serde_json::Value::Array(arr) => arr
            .into_iter()
            .map(|v| serde_json::from_value::<InputDoc>(v).map(RawDocument::from))
            .collect::<Result<Vec<_>, _>>()?,
        obj @ serde_json::Value::Object(_) => vec![serde_json::from_value::<InputDoc>(obj)?.into()],
        _ => bail!("{}: expected a JSON object or array", file.display()),
    };
    Ok(docs)
}
