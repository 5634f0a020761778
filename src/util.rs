use std::path::{Component, Path};

/// Lexically normalized path components: `.` dropped, `..` folded where
/// possible. Root and prefix components are kept as written.
fn normalized(path: &Path) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match parts.last().cloned().as_deref() {
                Some("..") | None => parts.push("..".to_string()),
                Some(last) if is_root(last) => {}
                Some(_) => {
                    parts.pop();
                }
            },
            Component::Prefix(p) => parts.push(p.as_os_str().to_string_lossy().into_owned()),
            Component::RootDir => parts.push("/".to_string()),
            Component::Normal(s) => parts.push(s.to_string_lossy().into_owned()),
        }
    }
    parts
}

fn is_root(part: &str) -> bool {
    part == "/" || part.ends_with(':')
}

/// Relative path from directory `from` to `to`, `/`-separated.
///
/// Purely lexical; both paths must share a root (both absolute or both
/// relative to the same directory). Returns `""` when they are equal.
pub fn relative_to(from: &Path, to: &Path) -> String {
    let from = normalized(from);
    let to = normalized(to);

    let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();
    let mut parts: Vec<&str> = vec![".."; from.len() - common];
    parts.extend(to[common..].iter().map(String::as_str));
    parts.join("/")
}

/// Join two `/`-separated module paths, folding `.` and `..` segments.
pub fn join_slash(base: &str, rest: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for seg in base.split('/').chain(rest.split('/')) {
        match seg {
            "" | "." => {}
            ".." => match parts.last().copied() {
                Some("..") | None => parts.push(".."),
                Some(_) => {
                    parts.pop();
                }
            },
            _ => parts.push(seg),
        }
    }
    parts.join("/")
}

/// Display a path relative to `root` when it lives under it.
pub fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
