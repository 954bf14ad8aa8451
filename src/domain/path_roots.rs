// Stack root / source root computation
//
// Given a stack-trace path and the in-repo path of the same file, work out
// the prefix to strip from the stack path and the prefix to add in its place.

/// Prefixes that align a stack-trace path with its source-control path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRoots {
    pub stack_root: String,
    pub source_root: String,
}

impl PathRoots {
    fn new(stack_root: impl Into<String>, source_root: impl Into<String>) -> Self {
        Self {
            stack_root: stack_root.into(),
            source_root: source_root.into(),
        }
    }
}

/// Last path segment, accepting either separator.
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Compute the roots for two paths naming the same file.
///
/// Returns `None` when the file names differ.
///
/// When one path fully contains the other, the extra prefix keeps its
/// trailing separator (`src/`). When both carry extra segments, each root is
/// the unmatched segments joined without a trailing separator (`src`).
pub fn find_roots(stack_path: &str, source_path: &str) -> Option<PathRoots> {
    let delimiter = if !stack_path.contains('/') && stack_path.contains('\\') {
        '\\'
    } else {
        '/'
    };
    let stack_path = stack_path.trim_start_matches("./");
    let source_path = source_path.trim_start_matches('/');

    let stack: Vec<&str> = stack_path.split(delimiter).collect();
    let source: Vec<&str> = source_path.split('/').collect();

    let common = stack
        .iter()
        .rev()
        .zip(source.iter().rev())
        .take_while(|(a, b)| a == b)
        .count();
    if common == 0 || stack.last().is_some_and(|name| name.is_empty()) {
        return None;
    }

    let stack_prefix = &stack[..stack.len() - common];
    let source_prefix = &source[..source.len() - common];

    let roots = match (stack_prefix.is_empty(), source_prefix.is_empty()) {
        (true, true) => PathRoots::new("", ""),
        (true, false) => PathRoots::new("", with_trailing(source_prefix, '/')),
        (false, true) => PathRoots::new(with_trailing(stack_prefix, delimiter), ""),
        (false, false) => PathRoots::new(
            stack_prefix.join(delimiter.to_string().as_str()),
            source_prefix.join("/"),
        ),
    };
    Some(roots)
}

fn with_trailing(segments: &[&str], delimiter: char) -> String {
    let mut root = segments.join(delimiter.to_string().as_str());
    root.push(delimiter);
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roots(stack_root: &str, source_root: &str) -> Option<PathRoots> {
        Some(PathRoots::new(stack_root, source_root))
    }

    #[test]
    fn test_source_has_extra_prefix() {
        assert_eq!(
            find_roots(
                "sentry/api/endpoints/project_stacktrace_link.py",
                "src/sentry/api/endpoints/project_stacktrace_link.py",
            ),
            roots("", "src/")
        );
    }

    #[test]
    fn test_stack_has_extra_prefix() {
        assert_eq!(
            find_roots("sentry/project_stacktrace_link.py", "project_stacktrace_link.py"),
            roots("sentry/", "")
        );
    }

    #[test]
    fn test_both_have_extra_prefix() {
        assert_eq!(
            find_roots(
                "stuff/hey/here/sentry/api/endpoints/project_stacktrace_link.py",
                "src/sentry/api/endpoints/project_stacktrace_link.py",
            ),
            roots("stuff/hey/here", "src")
        );
    }

    #[test]
    fn test_identical_paths() {
        assert_eq!(find_roots("src/app.py", "src/app.py"), roots("", ""));
        assert_eq!(find_roots("./src/app.py", "src/app.py"), roots("", ""));
        assert_eq!(find_roots("././app.py", "app.py"), roots("", ""));
    }

    #[test]
    fn test_matches_whole_segments_only() {
        // "mypy" must not be split into "my" + "py".
        assert_eq!(
            find_roots("py/app.py", "src/mypy/app.py"),
            roots("py", "src/mypy")
        );
    }

    #[test]
    fn test_different_file() {
        assert_eq!(
            find_roots(
                "sentry/api/endpoints/project_stacktrace_link.py",
                "src/sentry/api/endpoints/project_releases.py",
            ),
            None
        );
    }

    #[test]
    fn test_directory_paths_never_match() {
        assert_eq!(find_roots("src/", "src/"), None);
        assert_eq!(find_roots("", "src/app.py"), None);
    }

    #[test]
    fn test_windows_stack_path() {
        assert_eq!(
            find_roots("C:\\build\\sentry\\utils.py", "src/sentry/utils.py"),
            roots("C:\\build", "src")
        );
        assert_eq!(
            find_roots("sentry\\utils.py", "sentry/utils.py"),
            roots("", "")
        );
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("src/sentry/utils.py"), "utils.py");
        assert_eq!(file_name("sentry\\utils.py"), "utils.py");
        assert_eq!(file_name("utils.py"), "utils.py");
    }
}
