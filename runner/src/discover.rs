//! Script discovery.

use std::path::PathBuf;

use anyhow::Result;
use walkdir::WalkDir;

use crate::config::RunnerConfig;

/// Collects the scripts under `config.root` whose extension matches
/// `config.extension`, in file-name order, depth first.
///
/// Collection stops once `config.max_files` scripts have been found,
/// whatever directory they live in.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn discover(config: &RunnerConfig) -> Result<Vec<PathBuf>> {
    config.validate()?;
    let wanted = config.extension.trim_start_matches('.');

    let mut scripts = Vec::new();
    if config.max_files == 0 {
        return Ok(scripts);
    }
    for entry in WalkDir::new(&config.root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                tracing::warn!(%err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .map(|x| x == wanted)
            .unwrap_or(false);
        if matches {
            scripts.push(entry.into_path());
            if scripts.len() >= config.max_files {
                break;
            }
        }
    }
    tracing::debug!(root = %config.root.display(), found = scripts.len(), "discovered scripts");
    Ok(scripts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, "")?;
        Ok(())
    }

    #[test]
    fn filters_by_extension_and_sorts() -> Result<()> {
        let dir = tempfile::tempdir()?;
        touch(&dir.path().join("b.py"))?;
        touch(&dir.path().join("a.py"))?;
        touch(&dir.path().join("notes.txt"))?;
        touch(&dir.path().join("sub").join("c.py"))?;

        let cfg = RunnerConfig {
            root: dir.path().to_path_buf(),
            ..RunnerConfig::default()
        };
        let found: Vec<_> = discover(&cfg)?
            .into_iter()
            .filter_map(|p| p.strip_prefix(dir.path()).ok().map(|p| p.to_path_buf()))
            .collect();
        assert_eq!(
            found,
            vec![
                PathBuf::from("a.py"),
                PathBuf::from("b.py"),
                PathBuf::from("sub").join("c.py")
            ]
        );
        Ok(())
    }

    #[test]
    fn limit_applies_across_directories() -> Result<()> {
        let dir = tempfile::tempdir()?;
        for d in ["one", "two", "three"] {
            for f in ["x.py", "y.py"] {
                touch(&dir.path().join(d).join(f))?;
            }
        }
        let cfg = RunnerConfig {
            root: dir.path().to_path_buf(),
            max_files: 3,
            ..RunnerConfig::default()
        };
        assert_eq!(discover(&cfg)?.len(), 3);

        let cfg = RunnerConfig { max_files: 0, ..cfg };
        assert!(discover(&cfg)?.is_empty());
        Ok(())
    }

    #[test]
    fn leading_dot_in_extension_is_ignored() -> Result<()> {
        let dir = tempfile::tempdir()?;
        touch(&dir.path().join("run.sh"))?;
        let cfg = RunnerConfig {
            root: dir.path().to_path_buf(),
            extension: ".sh".into(),
            ..RunnerConfig::default()
        };
        assert_eq!(discover(&cfg)?.len(), 1);
        Ok(())
    }
}
