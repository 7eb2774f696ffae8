//! Implementation of the four layer-generation commands.
//!
//! `all`, `data`, `domain`, and `presentation` differ only in the layer
//! selection they dispatch with; everything else — template lookup, target
//! gathering, service wiring — is shared here. No business logic lives in
//! this module.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use featgen_adapters::LocalFilesystem;
use featgen_core::{
    application::{FeatureService, GenerateRequest, TargetSpec},
    domain::{DEFAULT_TEMPLATE, FeatureTemplate, LayerSelection},
};

use crate::{
    cli::{GenerateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    interaction::ConsoleInteraction,
    output::OutputManager,
};

/// Execute one of the layer-generation commands.
///
/// Dispatch sequence:
/// 1. Resolve the architecture template (flag → config → built-in default)
/// 2. Gather the target spec (explicit `--target`, workspace roots)
/// 3. Wire adapters into the core `FeatureService`
/// 4. Early-exit if `--dry-run`
/// 5. Generate; the service emits the success notification itself
#[instrument(skip_all, fields(selection = %selection))]
pub fn execute(
    selection: LayerSelection,
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Architecture template
    let template = resolve_template(&args, &config)?;
    debug!(template = %template.name, "Template resolved");

    // 2. Target spec
    let target = TargetSpec {
        selection: args.target.clone(),
        workspace_roots: workspace_roots(&config)?,
        grouped: args.grouped || config.defaults.grouped,
    };

    // 3. Service wiring
    let service = FeatureService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(ConsoleInteraction::new(output.clone())),
    );

    let request = GenerateRequest {
        selection,
        name: args.name.clone(),
        target,
        template,
    };

    // 4. Dry run: describe but do not create.
    if args.dry_run {
        let plan = service.plan(&request)?;
        output.info(&format!(
            "Dry run: would create {} directories under {}",
            plan.len(),
            plan.root().display(),
        ))?;
        for dir in plan.absolute_dirs() {
            output.dir_entry(&dir)?;
        }
        return Ok(());
    }

    // 5. Generate
    let summary = service.generate(request)?;
    info!(
        feature = %summary.feature,
        root = %summary.root.display(),
        "Generation completed"
    );

    if global.verbose > 0 && !global.quiet {
        for dir in &summary.created {
            output.dir_entry(dir)?;
        }
    }

    Ok(())
}

// ── Template resolution ───────────────────────────────────────────────────────

/// Pick the template: `--template` wins, then the config default, then the
/// built-in default.
fn resolve_template(args: &GenerateArgs, config: &AppConfig) -> CliResult<FeatureTemplate> {
    let name = args
        .template
        .as_deref()
        .or(config.defaults.template.as_deref())
        .unwrap_or(DEFAULT_TEMPLATE);

    let registry = config.template_registry();
    registry
        .iter()
        .find(|t| t.name == name)
        .cloned()
        .ok_or_else(|| CliError::TemplateNotFound {
            name: name.to_owned(),
            available: registry.iter().map(|t| t.name.clone()).collect(),
        })
}

// ── Workspace roots ───────────────────────────────────────────────────────────

/// Configured workspace roots, or the current directory when none are
/// configured (a terminal session's implicit workspace root).
fn workspace_roots(config: &AppConfig) -> CliResult<Vec<PathBuf>> {
    if !config.workspace.roots.is_empty() {
        return Ok(config.workspace.roots.clone());
    }

    let cwd = std::env::current_dir().map_err(|e| CliError::IoError {
        message: "cannot determine current directory".into(),
        source: e,
    })?;
    Ok(vec![cwd])
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_template(template: Option<&str>) -> GenerateArgs {
        GenerateArgs {
            name: Some("x".into()),
            target: None,
            template: template.map(str::to_owned),
            grouped: false,
            dry_run: false,
        }
    }

    // ── resolve_template ──────────────────────────────────────────────────

    #[test]
    fn default_template_is_standard() {
        let template = resolve_template(&args_with_template(None), &AppConfig::default()).unwrap();
        assert_eq!(template.name, "standard");
    }

    #[test]
    fn flag_overrides_config_default() {
        let mut config = AppConfig::default();
        config.defaults.template = Some("standard".into());

        let template =
            resolve_template(&args_with_template(Some("expanded")), &config).unwrap();
        assert_eq!(template.name, "expanded");
    }

    #[test]
    fn config_default_applies_without_flag() {
        let mut config = AppConfig::default();
        config.defaults.template = Some("expanded".into());

        let template = resolve_template(&args_with_template(None), &config).unwrap();
        assert_eq!(template.name, "expanded");
    }

    #[test]
    fn unknown_template_lists_available() {
        let err = resolve_template(&args_with_template(Some("nope")), &AppConfig::default())
            .unwrap_err();
        match err {
            CliError::TemplateNotFound { name, available } => {
                assert_eq!(name, "nope");
                assert!(available.contains(&"standard".to_owned()));
                assert!(available.contains(&"expanded".to_owned()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    // ── workspace_roots ───────────────────────────────────────────────────

    #[test]
    fn configured_roots_win_over_cwd() {
        let mut config = AppConfig::default();
        config.workspace.roots = vec!["/a".into(), "/b".into()];

        let roots = workspace_roots(&config).unwrap();
        assert_eq!(roots, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
    }

    #[test]
    fn empty_config_falls_back_to_cwd() {
        let roots = workspace_roots(&AppConfig::default()).unwrap();
        assert_eq!(roots.len(), 1);
        assert!(roots[0].is_absolute());
    }
}
