use serde::{Deserialize, Serialize};

/// Local display profile. Everything here lives on the user's machine and
/// is editable without an account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Avatar image as a data URL, stored verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl Profile {
    /// Normalizes a save from the profile form: blank names become absent.
    pub fn new(name: Option<String>, photo: Option<String>) -> Self {
        let name = name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());
        Self { name, photo }
    }

    /// Name shown in the header, with the generic fallback label.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Pengguna")
    }

    pub fn clear_photo(&mut self) {
        self.photo = None;
    }
}
