use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tempfile::NamedTempFile;
use thiserror::Error;

use super::page::MemoryPage;
use super::ui::constants::PageBindings;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Standalone document holding the four result containers as rendered.
pub fn render_document(
    page: &MemoryPage,
    bindings: &PageBindings,
    generated_at: DateTime<Utc>,
) -> String {
    let sections = [
        (&bindings.profile_stats, "grid grid-cols-2 gap-4"),
        (&bindings.skill_tags, "flex flex-wrap gap-2"),
        (&bindings.advice_content, "text-slate-300"),
        (&bindings.jobs_list, "grid grid-cols-1 md:grid-cols-2 gap-6"),
    ];
    let body: String = sections
        .iter()
        .map(|(id, class)| {
            format!(
                "<section id=\"{id}\" class=\"{class}\">\n{}\n</section>\n",
                page.inner_html(id)
            )
        })
        .collect();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<meta name=\"generated\" content=\"{}\">\n<title>Candidate Analysis</title>\n</head>\n<body class=\"bg-slate-950 text-slate-200\">\n{body}</body>\n</html>\n",
        generated_at.to_rfc3339()
    )
}

/// Atomically writes `content` to `path` via a temp file in the same directory.
pub fn write_report(path: &Path, content: &str) -> Result<PathBuf, ReportError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !dir.is_dir() {
        fs::create_dir_all(&dir).map_err(|e| ReportError::OutputDir(e.to_string()))?;
    }

    let mut temp =
        NamedTempFile::new_in(&dir).map_err(|e| ReportError::OutputDir(e.to_string()))?;
    temp.write_all(content.as_bytes())?;
    temp.flush()?;
    temp.persist(path).map_err(|err| ReportError::Io(err.error))?;
    Ok(path.to_path_buf())
}
