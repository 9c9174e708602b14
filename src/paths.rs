//! Pure path arithmetic: join/normalize typed input, classify directory
//! intent, produce quick-pick labels and test containment.
//!
//! No I/O happens here. Paths are cleaned up lexically, so `..` is collapsed
//! without consulting the filesystem (symlinks are a caller concern).

use std::path::{Component, Path, PathBuf};

/// Resolve typed input against a root directory.
///
/// Relative input is joined onto `root`; absolute input is used verbatim.
/// Either way the result is normalized: no `.`/`..` segments, no redundant
/// separators, Windows UNC noise stripped via `dunce`.
pub fn resolve(root: &Path, typed: &str) -> PathBuf {
    let typed_path = Path::new(typed);
    let joined = if typed_path.is_absolute() {
        typed_path.to_path_buf()
    } else {
        root.join(typed_path)
    };
    normalize(dunce::simplified(&joined))
}

/// Lexically collapse `.` and `..` components and redundant separators.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(
                    out.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    out.pop();
                } else if !matches!(
                    out.components().next_back(),
                    Some(Component::RootDir | Component::Prefix(_))
                ) {
                    // Relative path escaping upwards; keep the `..`.
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// True iff the typed string ends with a path separator.
///
/// This is the sole signal for "create a directory" vs "create a file" when
/// nothing exists at the path yet; filesystem state is never consulted.
pub fn is_directory_intent(typed: &str) -> bool {
    if typed.ends_with(std::path::MAIN_SEPARATOR) {
        return true;
    }
    // Forward slashes are separators on Windows too.
    cfg!(windows) && typed.ends_with('/')
}

/// Display label for a quick-pick entry: `/sub/dir` relative to `root`, or
/// `/` for the root itself. Paths outside `root` fall back to their full form.
pub fn relative_label(root: &Path, absolute: &Path) -> String {
    let root = normalize(root);
    let absolute = normalize(absolute);
    match absolute.strip_prefix(&root) {
        Ok(rel) if rel.as_os_str().is_empty() => "/".to_string(),
        Ok(rel) => {
            let mut label = String::new();
            for comp in rel.components() {
                label.push('/');
                label.push_str(&comp.as_os_str().to_string_lossy());
            }
            label
        }
        Err(_) => absolute.display().to_string(),
    }
}

/// True iff `candidate` is `root` itself or nested anywhere below it.
pub fn is_contained_in(root: &Path, candidate: &Path) -> bool {
    normalize(candidate).starts_with(normalize(root))
}
