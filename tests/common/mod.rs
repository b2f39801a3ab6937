//! Common test utilities for Solmod integration tests

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread::JoinHandle;

use assert_cmd::Command;
use tempfile::TempDir;
use walkdir::WalkDir;

/// Registry payload for the module used across the integration tests
pub const BLOGGING_MODULE: &str = r#"{
  "name": "Acme.Blogging",
  "nativePackages": [
    { "name": "Acme.Blogging.Domain", "target": "Domain" },
    { "name": "Acme.Blogging.Application", "target": "Application", "version": "2.1.0" },
    { "name": "Acme.Blogging.MongoDB", "target": "MongoDB" }
  ],
  "webPackages": [
    { "name": "@acme/blogging", "applicationType": 1 },
    { "name": "@acme/blogging-ng", "applicationType": 2 }
  ]
}"#;

const EMPTY_PROJECT: &str = "<Project Sdk=\"Microsoft.NET.Sdk\">\n\n  <PropertyGroup>\n    <TargetFramework>net8.0</TargetFramework>\n  </PropertyGroup>\n\n</Project>\n";

/// A solution directory for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the solution directory
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new, empty test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create the `Acme.Blog` solution: domain, application and web projects
    pub fn with_blog_solution() -> Self {
        let workspace = Self::new();
        workspace.write_solution(
            "Acme.Blog",
            &["Acme.Blog.Domain", "Acme.Blog.Application", "Acme.Blog.Web"],
        );
        workspace.write_file(
            "src/Acme.Blog.Web/package.json",
            "{\n  \"name\": \"acme-blog-web\",\n  \"private\": true,\n  \"dependencies\": {\n    \"@abp/aspnetcore.mvc.ui.theme.basic\": \"^8.0.0\"\n  }\n}\n",
        );
        workspace
    }

    /// Write `<name>.sln` and one SDK-style project per entry under `src/`
    pub fn write_solution(&self, name: &str, projects: &[&str]) -> PathBuf {
        let mut sln = String::from(
            "\r\nMicrosoft Visual Studio Solution File, Format Version 12.00\r\n",
        );
        for (index, project) in projects.iter().enumerate() {
            self.write_file(&format!("src/{project}/{project}.csproj"), EMPTY_PROJECT);
            sln.push_str(&format!(
                "Project(\"{{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}}\") = \"{project}\", \"src\\{project}\\{project}.csproj\", \"{{00000000-0000-0000-0000-{index:012}}}\"\r\nEndProject\r\n"
            ));
        }
        sln.push_str("Global\r\nEndGlobal\r\n");

        let path = self.path.join(format!("{name}.sln"));
        std::fs::write(&path, sln).expect("Failed to write solution file");
        path
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Every file in the workspace, keyed by relative path
    pub fn snapshot(&self) -> BTreeMap<PathBuf, Vec<u8>> {
        WalkDir::new(&self.path)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|entry| {
                let relative = entry
                    .path()
                    .strip_prefix(&self.path)
                    .expect("Under root")
                    .to_path_buf();
                (relative, std::fs::read(entry.path()).expect("Failed to read file"))
            })
            .collect()
    }

    /// A solmod command running inside this workspace
    pub fn solmod(&self) -> Command {
        let mut cmd = solmod_cmd();
        cmd.current_dir(&self.path)
            .env("SOLMOD_CONFIG", self.path.join("no-such-config.yaml"));
        cmd
    }
}

/// The real solmod binary with the caller's solmod environment cleared
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn solmod_cmd() -> Command {
    let mut cmd = Command::cargo_bin("solmod").expect("solmod binary is built");
    cmd.env_remove("SOLMOD_REGISTRY_URL")
        .env_remove("SOLMOD_TIMEOUT_SECS")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Local stand-in for the module registry.
///
/// Answers one request per scripted response, in order, then stops listening.
pub struct RegistryStub {
    pub url: String,
    handle: JoinHandle<Vec<String>>,
}

impl RegistryStub {
    pub fn serve(responses: Vec<(&'static str, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub registry");
        let port = listener.local_addr().expect("Listener has an address").port();

        let handle = std::thread::spawn(move || {
            let mut requests = Vec::new();
            for (status_line, body) in responses {
                let (mut stream, _) = listener.accept().expect("Failed to accept request");
                requests.push(read_request_head(&mut stream));
                let response = format!(
                    "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                stream
                    .write_all(response.as_bytes())
                    .expect("Failed to write response");
            }
            requests
        });

        Self {
            url: format!("http://127.0.0.1:{port}/api/app/module/byName/"),
            handle,
        }
    }

    /// Serve the `Acme.Blogging` module `times` times
    pub fn blogging(times: usize) -> Self {
        Self::serve(vec![("200 OK", BLOGGING_MODULE.to_string()); times])
    }

    /// Wait for every scripted response and return the request heads received
    pub fn requests(self) -> Vec<String> {
        self.handle.join().expect("Stub registry panicked")
    }
}

fn read_request_head(stream: &mut impl Read) -> String {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        let read = stream.read(&mut buf).expect("Failed to read request");
        if read == 0 {
            break;
        }
        head.extend_from_slice(&buf[..read]);
    }
    String::from_utf8_lossy(&head).into_owned()
}
