//! Solution file parsing
//!
//! Only `Project(...)` entries matter here. A typical entry:
//!
//! ```text
//! Project("{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}") = "Acme.Blog.Domain", "src\Acme.Blog.Domain\Acme.Blog.Domain.csproj", "{3A1B...}"
//! ```
//!
//! Solution folders use the same syntax with a path that is not a project file.

/// Extensions of project files a solution may reference
pub const PROJECT_EXTENSIONS: &[&str] = &["csproj", "fsproj", "vbproj"];

/// Relative project paths in declaration order, solution folders excluded
pub fn project_paths(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(parse_project_line)
        .filter(|path| is_project_file(path))
        .collect()
}

fn parse_project_line(line: &str) -> Option<String> {
    let line = line.trim_start();
    if !line.starts_with("Project(") {
        return None;
    }

    let (_, declaration) = line.split_once('=')?;
    let mut fields = declaration.split(',').map(|f| f.trim().trim_matches('"'));
    let _name = fields.next()?;
    let path = fields.next()?;

    (!path.is_empty()).then(|| path.to_string())
}

fn is_project_file(path: &str) -> bool {
    path.rsplit_once('.').is_some_and(|(_, ext)| {
        PROJECT_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known))
    })
}
