//! Artifact files for a run
//!
//! Each run reads and writes three files: the specification snapshot, the
//! report and the result. This manager owns their naming and makes sure
//! they exist; it never writes content and never truncates an existing
//! file, so files are reused across runs that share a repository uid and
//! specification name. Overwriting content is the engine's job. Two
//! concurrent runs sharing that pair race on the same files; the core does
//! not coordinate them.

use std::io;
use std::path::{Path, PathBuf};

use tokio::sync::OnceCell;
use tracing::{error, info};

use crate::common::{Error, Result, RunnerConfig};
use crate::domain::LocalModule;
use crate::run::descriptor::RunDescriptor;

const HTML: &str = ".html";
const XML: &str = ".xml";
const SEPARATOR: &str = "_";

/// The three artifact kinds of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Snapshot of the specification being executed
    Specification,
    /// Execution report consumed by the report renderer
    Report,
    /// Rendered result handed back to the user
    Result,
}

impl ArtifactKind {
    /// Externally-configured label embedded in the file name
    fn label<'a>(&self, config: &'a RunnerConfig) -> &'a str {
        match self {
            Self::Specification => &config.specification_label,
            Self::Report => &config.report_label,
            Self::Result => &config.results_label,
        }
    }

    /// File extension for the kind
    fn extension(&self) -> &'static str {
        match self {
            Self::Specification | Self::Result => HTML,
            Self::Report => XML,
        }
    }
}

/// Creates and locates the artifact files used in a run
///
/// The backing directory lives under the first content root of the run's
/// resolved module and is materialized lazily, at most once per manager.
/// The caller may be running in a context that is not allowed to mutate
/// storage, so the creation itself happens on the blocking pool and the
/// accessors await its completion; when the directory already exists they
/// complete immediately.
pub struct FilesManager {
    repository_uid: String,
    specification_name: String,
    module: Option<LocalModule>,
    config: RunnerConfig,
    run_dir: OnceCell<PathBuf>,
}

impl FilesManager {
    pub fn new(descriptor: &RunDescriptor, config: RunnerConfig) -> Self {
        Self {
            repository_uid: descriptor.repository_uid.clone(),
            specification_name: descriptor.specification_name.clone(),
            module: descriptor.module.clone(),
            config,
            run_dir: OnceCell::new(),
        }
    }

    /// The specification snapshot file, created empty if absent
    pub async fn specification_file(&self) -> Result<PathBuf> {
        self.ensure_artifact_file(ArtifactKind::Specification).await
    }

    /// The report file, created empty if absent
    pub async fn report_file(&self) -> Result<PathBuf> {
        self.ensure_artifact_file(ArtifactKind::Report).await
    }

    /// The result file, created empty if absent
    pub async fn result_file(&self) -> Result<PathBuf> {
        self.ensure_artifact_file(ArtifactKind::Result).await
    }

    /// Ensure the artifact file of the given kind exists and return it
    ///
    /// Creation failures are logged and the path is still returned; callers
    /// get a best-effort handle rather than an error. The only error is an
    /// unresolved module, which leaves the run without a content root to
    /// put files under.
    pub async fn ensure_artifact_file(&self, kind: ArtifactKind) -> Result<PathBuf> {
        let dir = self.run_dir().await?;
        let path = dir.join(self.file_name(kind));

        if !path.exists() {
            match std::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
            {
                Ok(_) => {}
                // Lost a creation race: the file exists, which is all we need.
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
                Err(e) => {
                    error!("the file {} has not been created: {e}", path.display());
                }
            }
        }

        Ok(path)
    }

    /// Deterministic file name for the given kind
    ///
    /// `{uid}_{name}_{label}{ext}` with the uid stripped of `\`, `/` and
    /// `-` (all become `_`) and the name stripped of `\` and `/` (becoming
    /// `_`) with every `"` doubled into `''`. Path separators would break
    /// the flat layout; the quote rewrite keeps names round-trippable
    /// through the report format.
    pub fn file_name(&self, kind: ArtifactKind) -> String {
        let prefix = self
            .repository_uid
            .replace(['\\', '/', '-'], SEPARATOR);
        let alt_name = self
            .specification_name
            .replace(['\\', '/'], SEPARATOR)
            .replace('"', "''");
        format!(
            "{prefix}{SEPARATOR}{alt_name}{SEPARATOR}{label}{ext}",
            label = kind.label(&self.config),
            ext = kind.extension()
        )
    }

    /// Directory holding this run's artifacts, materializing it on first
    /// access
    async fn run_dir(&self) -> Result<&Path> {
        let dir = self
            .run_dir
            .get_or_try_init(|| async {
                let module = self
                    .module
                    .as_ref()
                    .ok_or_else(|| Error::UnresolvedModule(self.specification_name.clone()))?;
                let root = module
                    .first_content_root()
                    .ok_or_else(|| Error::UnresolvedModule(module.name.clone()))?;
                let dir = root.join(&self.config.run_dir_name);

                if !dir.exists() {
                    // The mutation is deferred to the blocking pool; the
                    // handle becomes available once it completes.
                    let target = dir.clone();
                    match tokio::task::spawn_blocking(move || std::fs::create_dir_all(&target))
                        .await
                    {
                        Ok(Ok(())) => info!("folder created: {}", dir.display()),
                        Ok(Err(e)) => error!("folder {} was not created: {e}", dir.display()),
                        Err(e) => error!("folder creation task failed: {e}"),
                    }
                }

                Ok::<_, Error>(dir)
            })
            .await?;
        Ok(dir)
    }
}
