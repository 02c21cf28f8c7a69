//! Project opt-out rules.
//!
//! Patterns come from `rank.exclude_projects` in `~/.modu/rank/config.yaml`.
//! A pattern matches a project path exactly, as a parent directory, or as a
//! glob where `*` spans any run of characters (including `/`).

use regex::Regex;

use crate::models::RankSettings;

pub trait ExclusionPolicy {
    fn is_excluded(&self, project_path: Option<&str>) -> bool;
}

#[derive(Debug, Clone)]
pub struct ProjectExclusions {
    enabled: bool,
    prefixes: Vec<String>,
    globs: Vec<Regex>,
}

impl ProjectExclusions {
    pub fn new<S: AsRef<str>>(enabled: bool, patterns: &[S]) -> Self {
        let mut prefixes = Vec::new();
        let mut globs = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref().trim();
            if pattern.is_empty() {
                continue;
            }
            if pattern.contains('*') {
                match glob_to_regex(pattern) {
                    Ok(re) => globs.push(re),
                    Err(err) => tracing::debug!(%pattern, error = %err, "skipping bad pattern"),
                }
            } else {
                prefixes.push(normalize_path(pattern).to_string());
            }
        }
        Self {
            enabled,
            prefixes,
            globs,
        }
    }

    pub fn from_settings(settings: &RankSettings) -> Self {
        Self::new(settings.enabled, &settings.exclude_projects)
    }
}

impl Default for ProjectExclusions {
    fn default() -> Self {
        Self::from_settings(&RankSettings::default())
    }
}

impl ExclusionPolicy for ProjectExclusions {
    fn is_excluded(&self, project_path: Option<&str>) -> bool {
        if !self.enabled {
            return true;
        }
        let Some(path) = project_path.map(normalize_path).filter(|p| !p.is_empty()) else {
            return false;
        };
        self.prefixes.iter().any(|prefix| {
            path == prefix
                || (prefix == "/" && path.starts_with('/'))
                || path
                    .strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
        }) || self.globs.iter().any(|re| re.is_match(path))
    }
}

fn normalize_path(p: &str) -> &str {
    let trimmed = p.trim_end_matches('/');
    if trimmed.is_empty() && p.starts_with('/') {
        "/"
    } else {
        trimmed
    }
}

fn glob_to_regex(pattern: &str) -> Result<Regex, regex::Error> {
    let body = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    Regex::new(&format!("^{body}$"))
}
