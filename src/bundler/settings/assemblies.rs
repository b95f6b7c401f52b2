//! Assembly lists for AOT metadata and hot-update copies.

use crate::bundler::Result;

/// Which assemblies get staged as `.bytes` files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblySettings {
    /// AOT metadata assemblies, taken from the stripped player output.
    pub aot: Vec<String>,

    /// Hot-update assemblies, taken from the hot-update compile output.
    pub hot_update: Vec<String>,

    /// Glob patterns of hot-update assemblies that ship inside the player
    /// and are therefore not staged.
    pub preserved: Vec<String>,
}

impl Default for AssemblySettings {
    fn default() -> Self {
        Self {
            aot: vec![
                "mscorlib.dll".to_string(),
                "System.dll".to_string(),
                "System.Core.dll".to_string(),
            ],
            hot_update: vec!["HotUpdate.dll".to_string()],
            preserved: Vec::new(),
        }
    }
}

impl AssemblySettings {
    /// Hot-update assemblies minus those matching a preserved pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if a preserved pattern is not a valid glob.
    pub fn hot_update_excluding_preserved(&self) -> Result<Vec<String>> {
        let patterns = self
            .preserved
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(self
            .hot_update
            .iter()
            .filter(|name| !patterns.iter().any(|p| p.matches(name)))
            .cloned()
            .collect())
    }
}
