//! Host application kinds a web package applies to

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Set of host application kinds; a web package may apply to several at once
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ApplicationType: u32 {
        /// Server-rendered web host (MVC / Razor Pages)
        const MVC = 1;
        const ANGULAR = 1 << 1;
    }
}

impl ApplicationType {
    /// Whether a package with these flags belongs in a web-host project's manifest
    pub fn targets_web_host(self) -> bool {
        self.contains(ApplicationType::MVC)
    }

    fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        names
            .into_iter()
            .map(str::trim)
            .filter_map(|name| match name.to_ascii_lowercase().as_str() {
                "mvc" | "web" | "webhost" | "web-host" => Some(ApplicationType::MVC),
                "angular" => Some(ApplicationType::ANGULAR),
                _ => None,
            })
            .fold(ApplicationType::empty(), |acc, flag| acc | flag)
    }
}

impl Serialize for ApplicationType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ApplicationTypeRepr {
    Bits(u32),
    Names(Vec<String>),
    Joined(String),
}

impl<'de> Deserialize<'de> for ApplicationType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let flags = match ApplicationTypeRepr::deserialize(deserializer)? {
            // Unknown bits are kept so newer host kinds survive a round trip
            ApplicationTypeRepr::Bits(bits) => ApplicationType::from_bits_retain(bits),
            ApplicationTypeRepr::Names(names) => {
                ApplicationType::from_names(names.iter().map(String::as_str))
            }
            ApplicationTypeRepr::Joined(joined) => {
                ApplicationType::from_names(joined.split([',', '|']))
            }
        };
        Ok(flags)
    }
}
