use std::{env, path::PathBuf};

pub(crate) const CONFIG_FILE: &str = ".note-lander.toml";

/// Load config file content from CWD first, then home directory
///
/// Searches for `.note-lander.toml` in:
/// 1. Current working directory
/// 2. Home directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    candidates.extend(get_home_config_path());
    read_first(&candidates)
}

/// Content of the first readable file in `candidates`
pub(crate) fn read_first(candidates: &[PathBuf]) -> Option<String> {
    candidates.iter().find_map(|path| {
        let content = std::fs::read_to_string(path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some(content)
    })
}

/// Get the path to the config file in the home directory
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_existing_file_wins() {
        let cwd = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        let local = cwd.path().join(CONFIG_FILE);
        let global = home.path().join(CONFIG_FILE);
        std::fs::write(&global, "autosave = false").unwrap();

        let candidates = vec![local.clone(), global];
        assert_eq!(read_first(&candidates).as_deref(), Some("autosave = false"));

        std::fs::write(&local, "locale = \"de\"").unwrap();
        assert_eq!(read_first(&candidates).as_deref(), Some("locale = \"de\""));
    }

    #[test]
    fn test_no_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_first(&[dir.path().join(CONFIG_FILE)]), None);
    }
}
