use crate::CONFY_APP_NAME;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which entity-numbering convention to use for a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaChoice {
    /// Follow the stream marker, explicit ids when there is none.
    #[default]
    Auto,
    Explicit,
    Implicit,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderSettings {
    pub schema: SchemaChoice,
}

impl DecoderSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "decoder").unwrap_or_default()
    }

    pub fn load_from(path: impl AsRef<Path>) -> Self {
        confy::load_path(path).unwrap_or_default()
    }

    pub fn save(&self) -> Result<(), confy::ConfyError> {
        confy::store(CONFY_APP_NAME, "decoder", self)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), confy::ConfyError> {
        confy::store_path(path, self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectSettings {
    pub show_values: bool,
    pub max_values: usize,
    pub json: bool,
}

impl Default for InspectSettings {
    fn default() -> Self {
        Self {
            show_values: true,
            max_values: 64,
            json: false,
        }
    }
}

impl InspectSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "inspect").unwrap_or_default()
    }

    pub fn load_from(path: impl AsRef<Path>) -> Self {
        confy::load_path(path).unwrap_or_default()
    }

    pub fn save(&self) -> Result<(), confy::ConfyError> {
        confy::store(CONFY_APP_NAME, "inspect", self)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), confy::ConfyError> {
        confy::store_path(path, self)
    }
}

/// Everything the inspector reads at startup.
pub struct Settings {
    pub decoder: DecoderSettings,
    pub inspect: InspectSettings,
}

impl Settings {
    pub fn load() -> Self {
        Self {
            decoder: DecoderSettings::load(),
            inspect: InspectSettings::load(),
        }
    }

    /// Persist both sections so later runs start from them.
    pub fn save(&self) -> Result<(), confy::ConfyError> {
        self.decoder.save()?;
        self.inspect.save()
    }
}
