use std::path::Path;

/// Returns true when `name` is a hidden base name: it starts with `.` and is
/// not one of the special names `.` or `..`.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.') && name != "." && name != ".."
}

/// Hidden check for the last component of `path`.
///
/// Paths without a final normal component (`/`, `.`, `..`, `foo/..`) are never
/// hidden.
pub fn is_hidden_path(path: &Path) -> bool {
    path.file_name().is_some_and(|name| is_hidden(&name.to_string_lossy()))
}
