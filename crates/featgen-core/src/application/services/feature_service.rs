//! Feature Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Gather the feature name (argument or interactive prompt)
//! 2. Resolve the target directory
//! 3. Plan the directory tree for the selected layer(s)
//! 4. Materialize it, layer by layer
//! 5. Notify the user of the result
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{Filesystem, Notice, UserInteraction},
        services::resolver::{self, TargetSpec},
    },
    domain::{DirectoryPlan, FeatureName, FeatureTemplate, Layer, LayerSelection},
    error::FeatgenResult,
};

/// Everything one invocation needs, as gathered by the entry point.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Which subtree(s) to generate.
    pub selection: LayerSelection,
    /// Feature name; `None` triggers the interactive prompt.
    pub name: Option<String>,
    /// Where the feature root goes.
    pub target: TargetSpec,
    /// Architecture template to generate from.
    pub template: FeatureTemplate,
}

/// What a successful generation produced, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub feature: FeatureName,
    pub root: PathBuf,
    pub created: Vec<PathBuf>,
}

/// Main generation service.
///
/// Orchestrates name gathering, target resolution, planning, and directory
/// creation. One invocation is a stateless one-shot pipeline; nothing here
/// is mutated after construction.
pub struct FeatureService {
    filesystem: Box<dyn Filesystem>,
    interaction: Box<dyn UserInteraction>,
}

impl FeatureService {
    /// Create a new feature service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, interaction: Box<dyn UserInteraction>) -> Self {
        Self {
            filesystem,
            interaction,
        }
    }

    /// Generate the selected layer(s) for a feature.
    ///
    /// This is the main use case. Layer subtrees are created strictly in
    /// sequence, and every directory creation is awaited and checked — the
    /// returned `Ok` means the whole tree exists. A failure partway through
    /// leaves the partial tree in place (directory creation is idempotent,
    /// so re-running after a fix converges on the same tree).
    #[instrument(skip_all, fields(selection = %request.selection))]
    pub fn generate(&self, request: GenerateRequest) -> FeatgenResult<GenerateSummary> {
        let (feature, plan) = self.prepare(&request)?;

        info!(
            feature = %feature,
            root = %plan.root().display(),
            directories = plan.len(),
            "Generation started"
        );

        // Feature root first, then each selected layer in sequence.
        self.filesystem.create_dir_all(plan.root())?;
        for layer in request.selection.layers() {
            self.generate_layer(plan.root(), *layer, &request.template)?;
        }

        self.interaction.notify(
            Notice::Success,
            &format!("Successfully Generated {} Feature", feature.pascal_case()),
        )?;

        info!(feature = %feature, "Generation completed");
        Ok(GenerateSummary {
            root: plan.root().to_path_buf(),
            created: plan.absolute_dirs(),
            feature,
        })
    }

    /// Compute the directories an invocation would create, without touching
    /// the filesystem beyond the target-resolution existence check.
    pub fn plan(&self, request: &GenerateRequest) -> FeatgenResult<DirectoryPlan> {
        let (_, plan) = self.prepare(request)?;
        Ok(plan)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Shared front half of `generate` and `plan`: name, target, plan.
    ///
    /// Ordered so that an invalid name aborts before any filesystem access.
    fn prepare(&self, request: &GenerateRequest) -> FeatgenResult<(FeatureName, DirectoryPlan)> {
        let feature = self.gather_name(request.name.as_deref())?;
        request.template.validate()?;

        let target = resolver::resolve_target(&request.target, self.filesystem.as_ref())?;
        let root = target.join(feature.as_str());

        let plan = DirectoryPlan::for_feature(root, &request.template, request.selection);
        plan.validate()?;

        debug!(
            feature = %feature,
            template = %request.template.name,
            directories = plan.len(),
            "Plan prepared"
        );
        Ok((feature, plan))
    }

    /// Take the name from the request or ask for it interactively.
    fn gather_name(&self, given: Option<&str>) -> FeatgenResult<FeatureName> {
        let raw = match given {
            Some(name) => name.to_owned(),
            // A dismissed prompt maps to "" and fails name validation below.
            None => self
                .interaction
                .prompt_text("Feature name")?
                .unwrap_or_default(),
        };
        Ok(FeatureName::new(raw)?)
    }

    /// One layer generator: the layer root, then every template child
    /// beneath it. Children are created one by one and each result is
    /// checked; completion implies the whole layer subtree exists.
    fn generate_layer(
        &self,
        feature_root: &Path,
        layer: Layer,
        template: &FeatureTemplate,
    ) -> FeatgenResult<()> {
        let parent = feature_root.join(layer.dir_name());
        self.ensure_tree(&parent, template.layer_dirs(layer))?;
        debug!(layer = %layer, "Layer generated");
        Ok(())
    }

    /// Directory tree builder: ensure `parent` exists, then one
    /// `create_dir_all` per child as `parent/child`.
    fn ensure_tree(&self, parent: &Path, children: &[String]) -> FeatgenResult<()> {
        self.filesystem.create_dir_all(parent)?;
        for child in children {
            self.filesystem.create_dir_all(&parent.join(child))?;
        }
        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
