//! Project structure abstraction consumed by the export core.
//!
//! The core does not enumerate modules itself; a host (IDE, build tool,
//! CLI) supplies them through the [`ProjectModel`] trait. The stock
//! [`ProjectLayout`] implementation covers hosts that already hold the
//! roots as plain paths.

use std::path::Path;
use std::path::PathBuf;

/// Content and exclude roots contributed by one project module.
///
/// Both sets hold absolute paths. Content roots are directories that must
/// be fully represented in the archive; exclude roots are files or
/// directories whose subtrees must never appear, even under a content
/// root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleRoots {
    /// Directories to include in the archive.
    pub content_roots: Vec<PathBuf>,
    /// Paths whose subtrees are always excluded.
    pub exclude_roots: Vec<PathBuf>,
}

impl ModuleRoots {
    /// Creates an empty module root set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a content root.
    #[must_use]
    pub fn with_content_root<P: AsRef<Path>>(mut self, root: P) -> Self {
        self.content_roots.push(root.as_ref().to_path_buf());
        self
    }

    /// Adds an exclude root.
    #[must_use]
    pub fn with_exclude_root<P: AsRef<Path>>(mut self, root: P) -> Self {
        self.exclude_roots.push(root.as_ref().to_path_buf());
        self
    }
}

/// Abstract view of a project: its base path and per-module roots.
///
/// The base path is always treated as a content root in addition to
/// whatever the modules contribute, and it decides the entry-naming
/// convention: when it coincides with the resolved common ancestor, the
/// project's own folder name becomes the top-level archive folder.
pub trait ProjectModel {
    /// The canonical project root directory (absolute).
    fn base_path(&self) -> &Path;

    /// The project's modules with their content and exclude roots.
    fn modules(&self) -> &[ModuleRoots];
}

/// Stock [`ProjectModel`] backed by plain paths.
///
/// # Examples
///
/// ```
/// use prozip_core::ModuleRoots;
/// use prozip_core::ProjectLayout;
///
/// let layout = ProjectLayout::new("/ws/proj").with_module(
///     ModuleRoots::new()
///         .with_content_root("/ws/proj/app")
///         .with_exclude_root("/ws/proj/app/build"),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    base_path: PathBuf,
    modules: Vec<ModuleRoots>,
}

impl ProjectLayout {
    /// Creates a layout with the given base path and no modules.
    #[must_use]
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            modules: Vec::new(),
        }
    }

    /// Adds a module's roots to the layout.
    #[must_use]
    pub fn with_module(mut self, module: ModuleRoots) -> Self {
        self.modules.push(module);
        self
    }
}

impl ProjectModel for ProjectLayout {
    fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn modules(&self) -> &[ModuleRoots] {
        &self.modules
    }
}

/// Snapshots the inclusion and exclusion root sets for one export.
///
/// The inclusion set always starts with the project base path; the
/// exclusion set always starts with the archive destination (when one
/// exists; dry runs have none) so the archive can never include
/// itself. Duplicates are dropped while preserving first-seen order,
/// which keeps the ancestor reduction deterministic.
#[must_use]
pub fn collect_roots(
    project: &dyn ProjectModel,
    destination: Option<&Path>,
) -> (Vec<PathBuf>, Vec<PathBuf>) {
    let mut content_roots = vec![project.base_path().to_path_buf()];
    let mut exclude_roots: Vec<PathBuf> =
        destination.map(Path::to_path_buf).into_iter().collect();

    for module in project.modules() {
        for root in &module.content_roots {
            if !content_roots.contains(root) {
                content_roots.push(root.clone());
            }
        }
        for root in &module.exclude_roots {
            if !exclude_roots.contains(root) {
                exclude_roots.push(root.clone());
            }
        }
    }

    (content_roots, exclude_roots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_roots_builder() {
        let module = ModuleRoots::new()
            .with_content_root("/ws/a")
            .with_content_root("/ws/b")
            .with_exclude_root("/ws/a/out");

        assert_eq!(module.content_roots.len(), 2);
        assert_eq!(module.exclude_roots, vec![PathBuf::from("/ws/a/out")]);
    }

    #[test]
    fn test_layout_base_path() {
        let layout = ProjectLayout::new("/ws/proj");
        assert_eq!(layout.base_path(), Path::new("/ws/proj"));
        assert!(layout.modules().is_empty());
    }

    #[test]
    fn test_collect_roots_seeds_base_and_destination() {
        let layout = ProjectLayout::new("/ws/proj");
        let (content, exclude) = collect_roots(&layout, Some(Path::new("/tmp/out.zip")));

        assert_eq!(content, vec![PathBuf::from("/ws/proj")]);
        assert_eq!(exclude, vec![PathBuf::from("/tmp/out.zip")]);
    }

    #[test]
    fn test_collect_roots_without_destination() {
        let layout = ProjectLayout::new("/ws/proj")
            .with_module(ModuleRoots::new().with_exclude_root("/ws/proj/build"));
        let (_, exclude) = collect_roots(&layout, None);

        assert_eq!(exclude, vec![PathBuf::from("/ws/proj/build")]);
    }

    #[test]
    fn test_collect_roots_merges_modules() {
        let layout = ProjectLayout::new("/ws/proj")
            .with_module(
                ModuleRoots::new()
                    .with_content_root("/ws/proj/app")
                    .with_exclude_root("/ws/proj/app/build"),
            )
            .with_module(
                ModuleRoots::new()
                    .with_content_root("/ws/shared")
                    .with_exclude_root("/ws/shared/target"),
            );

        let (content, exclude) = collect_roots(&layout, Some(Path::new("/tmp/out.zip")));

        assert_eq!(
            content,
            vec![
                PathBuf::from("/ws/proj"),
                PathBuf::from("/ws/proj/app"),
                PathBuf::from("/ws/shared"),
            ]
        );
        assert_eq!(
            exclude,
            vec![
                PathBuf::from("/tmp/out.zip"),
                PathBuf::from("/ws/proj/app/build"),
                PathBuf::from("/ws/shared/target"),
            ]
        );
    }

    #[test]
    fn test_collect_roots_deduplicates() {
        let layout = ProjectLayout::new("/ws/proj")
            .with_module(ModuleRoots::new().with_content_root("/ws/proj"))
            .with_module(ModuleRoots::new().with_content_root("/ws/proj"));

        let (content, _) = collect_roots(&layout, Some(Path::new("/tmp/out.zip")));
        assert_eq!(content, vec![PathBuf::from("/ws/proj")]);
    }
}
