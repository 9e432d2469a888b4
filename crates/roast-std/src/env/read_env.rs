use std::env;

/// Source of configuration variables.
///
/// Config loaders take `&impl ReadEnv` so tests never touch the process
/// environment.
pub trait ReadEnv {
    fn var(&self, key: &str) -> Result<String, env::VarError>;

    /// Like [`var`](Self::var) but treats blank values as absent.
    fn non_empty_var(&self, key: &str) -> Option<String> {
        self.var(key)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
