use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context};
use chrono::Utc;
use clap::Parser;
use portal_core::{FileUpload, FormData, FILE_FIELD, PROVIDER_KEY_FIELD};
use portal_engine::EngineHandle;
use portal_logging::{portal_info, portal_warn};

use super::config::{PortalConfig, DEFAULT_CONFIG_FILENAME};
use super::controller::UploadFormController;
use super::logging;
use super::page::{MemoryPage, PageEvent, SelectedFile};
use super::report;
use super::ui::constants::PageBindings;

const PUMP_INTERVAL: Duration = Duration::from_millis(20);

/// Upload a resume for analysis and render the results page fragments.
#[derive(Debug, Parser)]
#[command(name = "portal_app", version)]
pub struct Cli {
    /// Resume document to upload.
    pub file: PathBuf,
    /// RON configuration file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: PathBuf,
    /// Origin serving the analysis endpoint; overrides the config file.
    #[arg(long)]
    pub base_url: Option<String>,
    /// Key for the hosted analysis provider, sent as a form field.
    #[arg(long, env = "PORTAL_PROVIDER_KEY")]
    pub api_key: Option<String>,
    /// Write the results document here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    let mut config = PortalConfig::load(&cli.config)?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    logging::initialize(config.log_destination, config.log_level, &config.log_file);

    let engine = EngineHandle::new(config.client_settings())?;
    let bindings = PageBindings::default();
    let mut page = MemoryPage::with_initial_layout(&bindings);
    let mut controller = UploadFormController::new(bindings.clone(), engine);

    let form = build_form(&cli.file, cli.api_key.as_deref())?;
    let selected = selected_files(&form);
    controller.handle_event(PageEvent::FileInputChanged {
        target: bindings.file_input.clone(),
        files: selected,
    });
    controller.handle_event(PageEvent::FormSubmitted {
        target: bindings.form.clone(),
        form,
    });

    run_until_idle(&mut controller, &mut page);

    for alert in page.alerts() {
        eprintln!("{alert}");
    }
    if let Some(last) = page.alerts().last() {
        bail!("analysis did not complete: {last}");
    }
    if page.is_hidden(&bindings.results_area) {
        portal_warn!("Cycle finished without revealing results");
        bail!("analysis produced no results");
    }

    let document = report::render_document(&page, &bindings, Utc::now());
    match cli.output {
        Some(path) => {
            let written = report::write_report(&path, &document)?;
            portal_info!("Wrote results to {:?}", written);
        }
        None => io::stdout()
            .write_all(document.as_bytes())
            .context("failed to write results to stdout")?,
    }
    Ok(())
}

/// Pumps commands into `page` until the submitted cycle has finished.
///
/// The engine's request timeout bounds how long this can take.
pub fn run_until_idle(controller: &mut UploadFormController, page: &mut MemoryPage) {
    loop {
        controller.drain_into(page);
        if !controller.view().loading {
            break;
        }
        thread::sleep(PUMP_INTERVAL);
    }
}

fn build_form(path: &Path, api_key: Option<&str>) -> anyhow::Result<FormData> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());

    let mut form = FormData::new().with_file(
        FILE_FIELD,
        FileUpload {
            content_type: guess_content_type(&file_name).map(str::to_string),
            file_name,
            bytes,
        },
    );
    if let Some(key) = api_key.filter(|key| !key.is_empty()) {
        form = form.with_text(PROVIDER_KEY_FIELD, key);
    }
    Ok(form)
}

fn selected_files(form: &FormData) -> Vec<SelectedFile> {
    form.fields
        .iter()
        .filter_map(|field| match field {
            portal_core::FormField::File { file, .. } => Some(SelectedFile {
                name: file.file_name.clone(),
                size: file.bytes.len() as u64,
            }),
            portal_core::FormField::Text { .. } => None,
        })
        .collect()
}

fn guess_content_type(file_name: &str) -> Option<&'static str> {
    let extension = Path::new(file_name)
        .extension()?
        .to_string_lossy()
        .to_ascii_lowercase();
    match extension.as_str() {
        "pdf" => Some("application/pdf"),
        "docx" => Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
        "doc" => Some("application/msword"),
        "txt" => Some("text/plain"),
        _ => None,
    }
}
