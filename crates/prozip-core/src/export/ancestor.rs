//! Common-ancestor resolution over content roots.
//!
//! Pure path-segment algebra with no filesystem access: the resolver
//! folds the root set pairwise, keeping the longest shared component
//! prefix, and fails as soon as a pair shares nothing.

use crate::ExportError;
use crate::Result;
use std::path::Path;
use std::path::PathBuf;

/// Returns the deepest directory that is an ancestor of (or equal to)
/// both paths, comparing lexical components only.
///
/// Returns `None` when the paths share no leading component, e.g. two
/// relative paths on unrelated trees or absolute paths under different
/// Windows drive prefixes. On Unix, two absolute paths always share at
/// least the filesystem root.
///
/// # Examples
///
/// ```
/// use prozip_core::export::ancestor::common_ancestor;
/// use std::path::Path;
/// use std::path::PathBuf;
///
/// let shared = common_ancestor(Path::new("/ws/a/src"), Path::new("/ws/b"));
/// assert_eq!(shared, Some(PathBuf::from("/ws")));
///
/// assert_eq!(common_ancestor(Path::new("c/x"), Path::new("d/y")), None);
/// ```
#[must_use]
pub fn common_ancestor(a: &Path, b: &Path) -> Option<PathBuf> {
    let mut shared = PathBuf::new();
    let mut matched = false;

    for (left, right) in a.components().zip(b.components()) {
        if left != right {
            break;
        }
        shared.push(left.as_os_str());
        matched = true;
    }

    matched.then_some(shared)
}

/// Reduces a non-empty set of content roots to their single nearest
/// common ancestor directory.
///
/// The fold starts from the first root and replaces the running ancestor
/// with the pairwise common ancestor for each subsequent root, so the
/// result is the deepest directory that is an ancestor of (or equal to)
/// every member.
///
/// # Errors
///
/// - [`ExportError::InvalidConfiguration`] if `roots` is empty.
/// - [`ExportError::NoCommonAncestor`] if any pairwise reduction yields
///   no shared prefix; this aborts the export before any archive I/O.
///
/// # Examples
///
/// ```
/// use prozip_core::export::ancestor::resolve_common_ancestor;
/// use std::path::PathBuf;
///
/// let roots = vec![
///     PathBuf::from("/ws/moduleA"),
///     PathBuf::from("/ws/moduleB/nested"),
/// ];
/// let ancestor = resolve_common_ancestor(&roots)?;
/// assert_eq!(ancestor, PathBuf::from("/ws"));
/// # Ok::<(), prozip_core::ExportError>(())
/// ```
pub fn resolve_common_ancestor(roots: &[PathBuf]) -> Result<PathBuf> {
    let mut iter = roots.iter();
    let Some(first) = iter.next() else {
        return Err(ExportError::InvalidConfiguration {
            reason: "no content roots provided".to_string(),
        });
    };

    let mut ancestor = first.clone();
    for root in iter {
        match common_ancestor(&ancestor, root) {
            Some(shared) => ancestor = shared,
            None => {
                return Err(ExportError::NoCommonAncestor {
                    first: ancestor,
                    second: root.clone(),
                });
            }
        }
    }

    Ok(ancestor)
}
