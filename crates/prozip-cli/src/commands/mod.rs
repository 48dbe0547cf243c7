//! CLI command implementations.

pub mod completion;
pub mod export;
pub mod preview;

use anyhow::Context;
use anyhow::Result;
use prozip_core::IgnorePatterns;
use prozip_core::ModuleRoots;
use prozip_core::ProjectLayout;
use std::path::Path;
use std::path::PathBuf;

/// Builds the project layout from the command-line roots.
///
/// The project directory and extra content roots are canonicalized so
/// the path-prefix algebra sees one consistent spelling per path;
/// exclude roots are only absolutized since they may legitimately not
/// exist yet.
pub fn build_layout(
    project: &Path,
    roots: &[PathBuf],
    excludes: &[PathBuf],
) -> Result<(PathBuf, ProjectLayout)> {
    let project_dir = project
        .canonicalize()
        .with_context(|| format!("project directory not found: {}", project.display()))?;

    let mut module = ModuleRoots::new();
    for root in roots {
        let root = root
            .canonicalize()
            .with_context(|| format!("content root not found: {}", root.display()))?;
        module = module.with_content_root(root);
    }
    for exclude in excludes {
        module = module.with_exclude_root(std::path::absolute(exclude)?);
    }

    let layout = ProjectLayout::new(&project_dir).with_module(module);
    Ok((project_dir, layout))
}

/// Builds the ignore oracle: stock patterns plus any `--ignore` flags.
pub fn build_ignores(extra: &[String]) -> IgnorePatterns {
    let mut ignores = IgnorePatterns::default();
    for pattern in extra {
        ignores = ignores.with_pattern(pattern.clone());
    }
    ignores
}
