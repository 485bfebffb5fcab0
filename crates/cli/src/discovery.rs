//! Source discovery
//!
//! Turns command-line inputs into the ordered list of [`Source`]s fed to the
//! runner. Files named explicitly are always formatted; directories are
//! walked for the included extensions and their matches checked against the
//! exclude patterns.

use std::collections::BTreeSet;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use br_core::{Result, Source};
use glob::Pattern;
use tracing::{debug, warn};

/// Reason recorded for excluded files
pub const EXCLUDED_MESSAGE: &str = "matches an --exclude pattern";

/// Discovery settings
#[derive(Debug, Clone)]
pub struct Discovery {
    include: Vec<String>,
    exclude: Vec<Pattern>,
}

impl Discovery {
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self> {
        let exclude = exclude
            .iter()
            .map(|p| Pattern::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let include = include
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect();
        Ok(Self { include, exclude })
    }

    /// Expand the inputs into sources, in input order, without duplicates
    pub fn collect(&self, inputs: &[PathBuf]) -> Result<Vec<Source>> {
        let mut seen = HashSet::new();
        let mut sources = Vec::new();

        for input in inputs {
            if input.is_file() {
                if seen.insert(input.clone()) {
                    sources.push(Source::File(input.clone()));
                }
            } else if input.is_dir() {
                for file in self.walk(input)? {
                    if !seen.insert(file.clone()) {
                        continue;
                    }
                    if self.is_excluded(input, &file) {
                        sources.push(Source::Ignored(file, EXCLUDED_MESSAGE.to_string()));
                    } else {
                        sources.push(Source::File(file));
                    }
                }
            } else {
                sources.push(Source::Missing(input.clone()));
            }
        }

        debug!(count = sources.len(), "sources discovered");
        Ok(sources)
    }

    fn walk(&self, dir: &Path) -> Result<BTreeSet<PathBuf>> {
        let root = Pattern::escape(&dir.to_string_lossy());
        let mut files = BTreeSet::new();
        for ext in &self.include {
            for entry in glob::glob(&format!("{root}/**/*.{ext}"))? {
                match entry {
                    Ok(path) if path.is_file() => {
                        files.insert(path);
                    }
                    Ok(_) => {}
                    Err(e) => warn!("skipping unreadable path: {e}"),
                }
            }
        }
        Ok(files)
    }

    fn is_excluded(&self, root: &Path, file: &Path) -> bool {
        let relative = file.strip_prefix(root).unwrap_or(file);
        self.exclude
            .iter()
            .any(|pattern| pattern.matches_path(relative) || pattern.matches_path(file))
    }
}
