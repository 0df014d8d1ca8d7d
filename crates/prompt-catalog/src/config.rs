use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Input folder used when prompts are bundled next to the site (container builds).
const PACKAGED_PROMPTS_DIR: &str = "prompts";

/// Generator configuration, loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// The site directory that consumes the catalog.
    pub app_dir: PathBuf,
    /// Directory holding one subdirectory per category.
    pub prompts_root: PathBuf,
    /// Where the catalog JSON is written.
    pub output_path: PathBuf,
}

impl Config {
    /// The app directory defaults to the working directory, not the location
    /// of the binary: run the generator from the site directory, or set
    /// `PROMPT_CATALOG_APP_DIR`.
    ///
    /// Optional:
    /// - `PROMPT_CATALOG_APP_DIR` (default: current directory)
    /// - `PROMPT_CATALOG_ROOT` (default: resolved from the app directory)
    /// - `PROMPT_CATALOG_OUTPUT` (default: `<app>/src/data/prompts.json`)
    pub fn from_env() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()
            .map_err(|e| AppError::Config(format!("cannot determine current directory: {e}")))?;

        let app_dir = match std::env::var("PROMPT_CATALOG_APP_DIR") {
            Ok(dir) => cwd.join(dir),
            Err(_) => cwd.clone(),
        };
        let app_dir = app_dir.canonicalize().map_err(|e| {
            AppError::Config(format!("app directory not found: {} ({e})", app_dir.display()))
        })?;

        let prompts_root = std::env::var("PROMPT_CATALOG_ROOT")
            .map(|root| cwd.join(root))
            .unwrap_or_else(|_| resolve_prompts_root(&app_dir));

        let output_path = std::env::var("PROMPT_CATALOG_OUTPUT")
            .map(|output| cwd.join(output))
            .unwrap_or_else(|_| default_output_path(&app_dir));

        Ok(Self {
            app_dir,
            prompts_root,
            output_path,
        })
    }
}

/// `<app>/prompts` when present, otherwise the directory containing the app
/// (prompts checked out alongside the site during local development).
pub fn resolve_prompts_root(app_dir: &Path) -> PathBuf {
    let packaged = app_dir.join(PACKAGED_PROMPTS_DIR);
    if packaged.is_dir() {
        return packaged;
    }
    app_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| app_dir.join(".."))
}

pub fn default_output_path(app_dir: &Path) -> PathBuf {
    app_dir.join("src").join("data").join("prompts.json")
}
