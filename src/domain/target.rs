//! Target classification of native package dependencies
//!
//! A classification names the layer of a layered solution that should receive a
//! dependency. Projects are classified by naming convention: the classification
//! maps to a project name suffix such as `.Application` or `.Domain.Shared`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which kind of project should receive a native package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "TargetRepr", into = "String")]
pub enum TargetClassification {
    #[default]
    Undefined,
    Domain,
    DomainShared,
    Application,
    ApplicationContracts,
    HttpApi,
    HttpApiClient,
    Web,
    EntityFrameworkCore,
    MongoDB,
}

impl TargetClassification {
    /// Project name suffix identifying projects of this classification
    pub fn project_suffix(self) -> Option<&'static str> {
        match self {
            TargetClassification::Undefined => None,
            TargetClassification::Domain => Some(".Domain"),
            TargetClassification::DomainShared => Some(".Domain.Shared"),
            TargetClassification::Application => Some(".Application"),
            TargetClassification::ApplicationContracts => Some(".Application.Contracts"),
            TargetClassification::HttpApi => Some(".HttpApi"),
            TargetClassification::HttpApiClient => Some(".HttpApi.Client"),
            TargetClassification::Web => Some(".Web"),
            TargetClassification::EntityFrameworkCore => Some(".EntityFrameworkCore"),
            TargetClassification::MongoDB => Some(".MongoDB"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TargetClassification::Undefined => "Undefined",
            TargetClassification::Domain => "Domain",
            TargetClassification::DomainShared => "DomainShared",
            TargetClassification::Application => "Application",
            TargetClassification::ApplicationContracts => "ApplicationContracts",
            TargetClassification::HttpApi => "HttpApi",
            TargetClassification::HttpApiClient => "HttpApiClient",
            TargetClassification::Web => "Web",
            TargetClassification::EntityFrameworkCore => "EntityFrameworkCore",
            TargetClassification::MongoDB => "MongoDB",
        }
    }

    fn from_code(code: u64) -> Self {
        match code {
            1 => TargetClassification::Domain,
            2 => TargetClassification::DomainShared,
            3 => TargetClassification::Application,
            4 => TargetClassification::ApplicationContracts,
            5 => TargetClassification::HttpApi,
            6 => TargetClassification::HttpApiClient,
            7 => TargetClassification::Web,
            8 => TargetClassification::EntityFrameworkCore,
            9 => TargetClassification::MongoDB,
            _ => TargetClassification::Undefined,
        }
    }

    /// Parse a classification name, ignoring case and `-`, `_`, `.` and space separators.
    /// Unknown names map to [`TargetClassification::Undefined`].
    pub fn from_name(name: &str) -> Self {
        let normalized: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | '.' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "domain" => TargetClassification::Domain,
            "domainshared" => TargetClassification::DomainShared,
            "application" => TargetClassification::Application,
            "applicationcontracts" => TargetClassification::ApplicationContracts,
            "httpapi" => TargetClassification::HttpApi,
            "httpapiclient" => TargetClassification::HttpApiClient,
            "web" | "webhost" => TargetClassification::Web,
            "entityframeworkcore" | "efcore" => TargetClassification::EntityFrameworkCore,
            "mongodb" => TargetClassification::MongoDB,
            _ => TargetClassification::Undefined,
        }
    }
}

impl fmt::Display for TargetClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TargetClassification> for String {
    fn from(target: TargetClassification) -> Self {
        target.as_str().to_string()
    }
}

/// Wire form: registries send either the numeric code or the name
#[derive(Deserialize)]
#[serde(untagged)]
enum TargetRepr {
    Code(u64),
    Name(String),
}

impl From<TargetRepr> for TargetClassification {
    fn from(repr: TargetRepr) -> Self {
        match repr {
            TargetRepr::Code(code) => TargetClassification::from_code(code),
            TargetRepr::Name(name) => TargetClassification::from_name(&name),
        }
    }
}
