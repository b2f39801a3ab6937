//! Test fixtures and utilities for reducing test setup duplication.
//!
//! Helpers create common test environments (temp directories, solutions with
//! projects on disk, a one-shot registry stub) with a single function call.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, write_solution, serve_once};
//!
//! #[test]
//! fn my_test() {
//!     let temp = create_temp_dir();
//!     let sln = write_solution(temp.path(), "Acme.Blog", &["Acme.Blog.Domain"]);
//!     let (url, server) = serve_once("200 OK", "{\"name\":\"Acme.Blogging\"}");
//! }
//! ```

#![allow(clippy::expect_used)]

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::thread::JoinHandle;

use tempfile::TempDir;
use walkdir::WalkDir;

const CSHARP_PROJECT_TYPE: &str = "{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}";

/// Minimal SDK-style project used for generated solutions
pub const EMPTY_PROJECT: &str = "<Project Sdk=\"Microsoft.NET.Sdk\">\n\n  <PropertyGroup>\n    <TargetFramework>net8.0</TargetFramework>\n  </PropertyGroup>\n\n</Project>\n";

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write `<dir>/<solution_name>.sln` listing one C# project per name.
///
/// Each project lands at `src/<Name>/<Name>.csproj` and is referenced from
/// the solution with a backslash-separated relative path.
///
/// # Panics
///
/// Panics if any file cannot be written.
pub fn write_solution(dir: &Path, solution_name: &str, projects: &[&str]) -> PathBuf {
    let mut sln = String::from(
        "\r\nMicrosoft Visual Studio Solution File, Format Version 12.00\r\n# Visual Studio Version 17\r\n",
    );

    for (index, name) in projects.iter().enumerate() {
        let project_dir = dir.join("src").join(name);
        std::fs::create_dir_all(&project_dir).expect("Failed to create project directory");
        std::fs::write(project_dir.join(format!("{name}.csproj")), EMPTY_PROJECT)
            .expect("Failed to write project file");

        write!(
            sln,
            "Project(\"{CSHARP_PROJECT_TYPE}\") = \"{name}\", \"src\\{name}\\{name}.csproj\", \"{{00000000-0000-0000-0000-{index:012}}}\"\r\nEndProject\r\n"
        )
        .expect("String formatting cannot fail");
    }
    sln.push_str("Global\r\nEndGlobal\r\n");

    let path = dir.join(format!("{solution_name}.sln"));
    std::fs::write(&path, sln).expect("Failed to write solution file");
    path
}

/// Read every file under `dir` keyed by its relative path.
///
/// # Panics
///
/// Panics if a file cannot be read.
#[must_use]
pub fn snapshot_dir(dir: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|entry| {
            let relative = entry
                .path()
                .strip_prefix(dir)
                .expect("Entry is under root")
                .to_path_buf();
            (relative, std::fs::read(entry.path()).expect("Failed to read file"))
        })
        .collect()
}

/// Answer exactly one HTTP request with `status_line` and `body`.
///
/// Returns the registry URL to point a resolver at and a handle that yields
/// the raw request head once the response is sent.
///
/// # Panics
///
/// Panics if the listener cannot bind.
#[must_use]
pub fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub registry");
    let port = listener
        .local_addr()
        .expect("Listener has an address")
        .port();

    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("Failed to accept request");
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let read = stream.read(&mut buf).expect("Failed to read request");
            if read == 0 {
                break;
            }
            head.extend_from_slice(&buf[..read]);
        }
        stream
            .write_all(response.as_bytes())
            .expect("Failed to write response");
        stream.flush().expect("Failed to flush response");
        String::from_utf8_lossy(&head).into_owned()
    });

    (
        format!("http://127.0.0.1:{port}/api/app/module/byName/"),
        handle,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
    }

    #[test]
    fn test_write_solution_creates_projects() {
        let temp = create_temp_dir();
        let sln = write_solution(temp.path(), "Acme.Blog", &["Acme.Blog.Domain", "Acme.Blog.Web"]);

        assert!(sln.ends_with("Acme.Blog.sln"));
        let content = std::fs::read_to_string(&sln).expect("Failed to read");
        assert_eq!(content.lines().filter(|l| l.starts_with("Project(")).count(), 2);
        assert!(
            temp.path()
                .join("src/Acme.Blog.Web/Acme.Blog.Web.csproj")
                .exists()
        );
    }

    #[test]
    fn test_snapshot_dir_sees_nested_files() {
        let temp = create_temp_dir();
        write_solution(temp.path(), "Acme.Blog", &["Acme.Blog.Domain"]);
        let snapshot = snapshot_dir(temp.path());
        assert_eq!(snapshot.len(), 2);
    }
}
