//! Export configuration.

use std::path::PathBuf;

pub const DEFAULT_FILE_PREFIX: &str = "estate-inventory";

const EXPORT_DIR_VAR: &str = "ESTATE_EXPORT_DIR";
const EXPORT_PREFIX_VAR: &str = "ESTATE_EXPORT_PREFIX";

/// Where exported files go and how they are named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub file_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }
}

impl ExportConfig {
    /// Read `ESTATE_EXPORT_DIR` / `ESTATE_EXPORT_PREFIX`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let output_dir = lookup(EXPORT_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                tracing::warn!(
                    "{EXPORT_DIR_VAR} not set; exporting to {}",
                    defaults.output_dir.display()
                );
                defaults.output_dir.clone()
            });

        let file_prefix = lookup(EXPORT_PREFIX_VAR)
            .filter(|prefix| !prefix.trim().is_empty())
            .filter(|prefix| {
                let plain = is_plain_file_prefix(prefix);
                if !plain {
                    tracing::warn!("{EXPORT_PREFIX_VAR} {prefix:?} contains a path separator; ignored");
                }
                plain
            })
            .unwrap_or(defaults.file_prefix);

        Self {
            output_dir,
            file_prefix,
        }
    }
}

/// A prefix must name a file inside `output_dir`, never a path.
pub fn is_plain_file_prefix(prefix: &str) -> bool {
    !prefix.contains(['/', '\\'])
}
