use std::path::{Path, PathBuf};

use bijux_portal_core::{checklist_storage_key, stable_json_hash_hex, AckStore, ErrorCode};
use bijux_portal_ingest::{
    scaffold_manifest, ContactOverrides, HotelOverrides, OutputFormat, ScaffoldOptions,
    StoreOverrides,
};
use bijux_portal_model::{PolicyCatalog, Project, ValidationReport};
use bijux_portal_render::{checklist, render_project, ChecklistState};
use bijux_portal_validate::{
    check_links, lint_project_id, list_manifest_files, load_raw_document, validate_policy_catalog,
    validate_project, validate_project_batch, FsAssets,
};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::ack_store::JsonFileAckStore;
use crate::commands::{
    ChecklistCommand, FormatCli, IngestArgs, RenderArgs, StateArgs, ValidateArgs, ValidateCommand,
};
use crate::helpers::emit_ok;
use crate::workspace::Workspace;
use crate::{CliError, OutputMode};

pub(crate) fn run_version(output_mode: OutputMode) -> Result<(), CliError> {
    let payload = json!({
        "name": "bijux-portal",
        "version": env!("CARGO_PKG_VERSION"),
    });
    if output_mode.json {
        emit_ok(output_mode, payload).map_err(CliError::internal)
    } else {
        println!("bijux-portal {}", env!("CARGO_PKG_VERSION"));
        Ok(())
    }
}

pub(crate) fn run_config(workspace: &Workspace, output_mode: OutputMode) -> Result<(), CliError> {
    let payload = json!({
        "command": "config",
        "source": workspace.source.as_str(),
        "config_path": workspace.config_path,
        "root": workspace.root,
        "config": workspace.config,
    });
    emit_ok(output_mode, payload).map_err(CliError::internal)
}

pub(crate) fn run_validate(
    command: ValidateCommand,
    workspace: &Workspace,
    output_mode: OutputMode,
) -> Result<(), CliError> {
    match command {
        ValidateCommand::Project { path, common } => {
            validate_project_file(&path, &common, workspace, output_mode)
        }
        ValidateCommand::Catalog { path } => {
            let path = path.unwrap_or_else(|| workspace.config.paths.policy_catalog.clone());
            let raw = load_document(&path)?;
            let (catalog_len, report) = match validate_policy_catalog(&raw) {
                Ok(validated) => (validated.value.len(), validated.report),
                Err(report) => (0, report),
            };
            let failed = report.has_fatal();
            emit_ok(
                output_mode,
                json!({
                    "command": "validate catalog",
                    "path": path,
                    "policies": catalog_len,
                    "report": report_payload(report),
                }),
            )
            .map_err(CliError::internal)?;
            if failed {
                return Err(validation_failed("policy catalog is ambiguous", &path));
            }
            Ok(())
        }
        ValidateCommand::Batch { dir, common } => {
            let dir = dir.unwrap_or_else(|| workspace.config.paths.projects_dir.clone());
            let files = list_manifest_files(&dir).map_err(|e| {
                CliError::new(ErrorCode::ReadFailed, e.0).with_detail("path", dir.display().to_string())
            })?;
            let raws = files
                .iter()
                .map(|file| load_document(file))
                .collect::<Result<Vec<_>, _>>()?;
            let catalog = load_catalog(common.catalog.as_deref(), workspace)?;
            let (projects, mut report) = match validate_project_batch(&raws, &catalog) {
                Ok(validated) => (
                    validated
                        .value
                        .positioned()
                        .map(|(position, project)| (position, project.clone()))
                        .collect::<Vec<_>>(),
                    validated.report,
                ),
                Err(report) => (Vec::new(), report),
            };
            if common.check_links {
                let assets = fs_assets(workspace);
                for (position, project) in &projects {
                    nest_findings(&mut report, *position, check_links(project, &assets));
                }
            }
            if common.lint_ids {
                for (position, project) in &projects {
                    nest_findings(&mut report, *position, lint_project_id(project));
                }
            }
            let failed = report.has_fatal() || (common.strict && !report.is_empty());
            emit_ok(
                output_mode,
                json!({
                    "command": "validate batch",
                    "dir": dir,
                    "files": files,
                    "projects": projects.iter().map(|(_, p)| p.id.as_str()).collect::<Vec<_>>(),
                    "report": report_payload(report),
                }),
            )
            .map_err(CliError::internal)?;
            if failed {
                return Err(validation_failed("project batch has findings", &dir));
            }
            Ok(())
        }
    }
}

fn validate_project_file(
    path: &Path,
    common: &ValidateArgs,
    workspace: &Workspace,
    output_mode: OutputMode,
) -> Result<(), CliError> {
    let raw = load_document(path)?;
    let catalog = load_catalog(common.catalog.as_deref(), workspace)?;
    let (project, mut report) = match validate_project(&raw, &catalog) {
        Ok(validated) => (Some(validated.value), validated.report),
        Err(report) => (None, report),
    };
    if let Some(project) = &project {
        if common.check_links {
            report.merge(check_links(project, &fs_assets(workspace)));
        }
        if common.lint_ids {
            report.merge(lint_project_id(project));
        }
    }
    let fingerprint = project
        .as_ref()
        .map(stable_json_hash_hex)
        .transpose()
        .map_err(|e| CliError::internal(e.to_string()))?;
    let failed = project.is_none() || report.has_fatal() || (common.strict && !report.is_empty());
    info!(
        path = %path.display(),
        findings = report.len(),
        "validated project manifest"
    );
    emit_ok(
        output_mode,
        json!({
            "command": "validate project",
            "path": path,
            "project_id": project.as_ref().map(|p| p.id.as_str()),
            "fingerprint": fingerprint,
            "report": report_payload(report),
        }),
    )
    .map_err(CliError::internal)?;
    if failed {
        return Err(validation_failed("project manifest has findings", path));
    }
    Ok(())
}

pub(crate) fn run_render(
    args: RenderArgs,
    workspace: &Workspace,
    output_mode: OutputMode,
) -> Result<(), CliError> {
    let catalog = load_catalog(args.catalog.as_deref(), workspace)?;
    let project = load_project(&args.path, &catalog)?;
    let store = open_state(&args.state, workspace)?;
    let state = acknowledgments(&store, &project)?;
    let filter = args
        .filter
        .as_deref()
        .or(workspace.config.render.default_filter.as_deref());
    let model = render_project(&project, &catalog, &state, filter);
    let payload = serde_json::to_value(&model).map_err(|e| CliError::internal(e.to_string()))?;
    emit_ok(output_mode, payload).map_err(CliError::internal)
}

pub(crate) fn run_checklist(
    command: ChecklistCommand,
    workspace: &Workspace,
    output_mode: OutputMode,
) -> Result<(), CliError> {
    match command {
        ChecklistCommand::Show { path, state } => {
            let project = load_project(&path, &PolicyCatalog::default())?;
            let store = open_state(&state, workspace)?;
            emit_checklist(&project, &store, output_mode)
        }
        ChecklistCommand::Toggle { path, index, state } => {
            let project = load_project(&path, &PolicyCatalog::default())?;
            let total = project.required_actions.len();
            if index >= total {
                return Err(CliError::new(
                    ErrorCode::UsageError,
                    "checklist index out of range",
                )
                .with_detail("index", index.to_string())
                .with_detail("items", total.to_string()));
            }
            let mut store = open_state(&state, workspace)?;
            let key = checklist_storage_key(&project.id);
            let current = store.acknowledged(&key).map_err(state_error)?;
            let value = !current.contains(&index);
            store
                .set_acknowledged(&key, index, value)
                .map_err(state_error)?;
            info!(project = %project.id, index, acknowledged = value, "toggled checklist item");
            emit_checklist(&project, &store, output_mode)
        }
        ChecklistCommand::Clear { path, state } => {
            let project = load_project(&path, &PolicyCatalog::default())?;
            let mut store = open_state(&state, workspace)?;
            store
                .clear(&checklist_storage_key(&project.id))
                .map_err(state_error)?;
            emit_checklist(&project, &store, output_mode)
        }
    }
}

fn emit_checklist(
    project: &Project,
    store: &JsonFileAckStore,
    output_mode: OutputMode,
) -> Result<(), CliError> {
    let state = acknowledgments(store, project)?;
    let items = checklist(project, &state);
    emit_ok(
        output_mode,
        json!({
            "project_id": project.id,
            "state_path": store.path(),
            "acknowledged": state.acknowledged_count(),
            "items": items,
        }),
    )
    .map_err(CliError::internal)
}

pub(crate) fn run_ingest(
    args: IngestArgs,
    workspace: &Workspace,
    output_mode: OutputMode,
) -> Result<(), CliError> {
    let opts = ScaffoldOptions {
        site_root: workspace.root.clone(),
        project_id: args.project_id,
        project_slug: args.project_slug,
        title: args.title,
        store: StoreOverrides {
            number: args.store_number,
            name: args.store_name,
            address: args.store_address,
            report_time: args.report_time,
        },
        supervisor: ContactOverrides {
            name: args.supervisor_name,
            phone: args.supervisor_phone,
            email: args.supervisor_email,
        },
        lead: ContactOverrides {
            name: args.lead_name,
            phone: args.lead_phone,
            email: args.lead_email,
        },
        hotel: HotelOverrides {
            name: args.hotel_name,
            address: args.hotel_address,
            check_in: args.hotel_check_in,
            check_out: args.hotel_check_out,
        },
        assets_root: args
            .assets_root
            .unwrap_or_else(|| workspace.config.paths.asset_root.clone()),
        output: args.output,
        format: match args.format {
            FormatCli::Yaml => OutputFormat::Yaml,
            FormatCli::Json => OutputFormat::Json,
        },
        dry_run: args.dry_run,
    };
    let result = scaffold_manifest(&opts, Utc::now()).map_err(|e| {
        let code = if e.is_invalid_options() {
            ErrorCode::UsageError
        } else {
            ErrorCode::WriteFailed
        };
        CliError::new(code, e.message()).with_detail("project_id", opts.project_id.clone())
    })?;

    if result.written {
        emit_ok(
            output_mode,
            json!({
                "command": "ingest",
                "output_path": result.output_path,
                "written": true,
                "events": result.events,
            }),
        )
        .map_err(CliError::internal)
    } else if output_mode.json {
        emit_ok(
            output_mode,
            json!({
                "command": "ingest",
                "output_path": result.output_path,
                "written": false,
                "manifest": result.manifest,
            }),
        )
        .map_err(CliError::internal)
    } else {
        print!("{}", result.rendered);
        Ok(())
    }
}

fn load_document(path: &Path) -> Result<Value, CliError> {
    load_raw_document(path).map_err(|e| {
        let code = if path.exists() {
            ErrorCode::DecodeFailed
        } else {
            ErrorCode::ReadFailed
        };
        CliError::new(code, e.0).with_detail("path", path.display().to_string())
    })
}

/// An explicit catalog must load cleanly; the configured one may be absent.
fn load_catalog(explicit: Option<&Path>, workspace: &Workspace) -> Result<PolicyCatalog, CliError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let configured = workspace.config.paths.policy_catalog.clone();
            if !configured.exists() {
                warn!(
                    path = %configured.display(),
                    "policy catalog not found; every reference will be unresolved"
                );
                return Ok(PolicyCatalog::default());
            }
            configured
        }
    };
    let raw = load_document(&path)?;
    match validate_policy_catalog(&raw) {
        Ok(validated) => {
            for finding in validated.report.iter() {
                warn!(path = %path.display(), "{finding}");
            }
            Ok(validated.value)
        }
        Err(report) => Err(validation_failed("policy catalog is ambiguous", &path)
            .with_detail("findings", report.to_string())),
    }
}

fn load_project(path: &Path, catalog: &PolicyCatalog) -> Result<Project, CliError> {
    let raw = load_document(path)?;
    match validate_project(&raw, catalog) {
        Ok(validated) => {
            if !validated.report.is_empty() {
                warn!(
                    path = %path.display(),
                    findings = validated.report.len(),
                    "project manifest has findings; rendering best effort"
                );
            }
            Ok(validated.value)
        }
        Err(report) => Err(validation_failed("project manifest is not a mapping", path)
            .with_detail("findings", report.to_string())),
    }
}

fn open_state(args: &StateArgs, workspace: &Workspace) -> Result<JsonFileAckStore, CliError> {
    let path: PathBuf = args
        .state
        .clone()
        .unwrap_or_else(|| workspace.config.paths.checklist_state.clone());
    JsonFileAckStore::open(path).map_err(state_error)
}

fn acknowledgments(store: &JsonFileAckStore, project: &Project) -> Result<ChecklistState, CliError> {
    store
        .acknowledged(&checklist_storage_key(&project.id))
        .map(ChecklistState::from)
        .map_err(state_error)
}

fn fs_assets(workspace: &Workspace) -> FsAssets {
    FsAssets::new(workspace.root.clone(), &workspace.config.paths.asset_root)
}

fn report_payload(report: ValidationReport) -> Value {
    let report = report.sorted();
    json!({
        "clean": report.is_clean(),
        "fatal": report.has_fatal(),
        "counts": report.counts_by_kind(),
        "findings": report.findings,
    })
}

fn nest_findings(report: &mut ValidationReport, position: usize, findings: ValidationReport) {
    for finding in findings.iter() {
        report.record(
            finding.kind,
            format!("projects[{position}].{}", finding.location),
            finding.message.clone(),
        );
    }
}

fn validation_failed(message: &str, path: &Path) -> CliError {
    CliError::new(ErrorCode::ValidationFailed, message).with_detail("path", path.display().to_string())
}

fn state_error(err: crate::ack_store::AckStoreError) -> CliError {
    CliError::new(ErrorCode::WriteFailed, err.0)
}
