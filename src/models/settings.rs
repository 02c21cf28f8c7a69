/// The `rank:` section of `~/.modu/rank/config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankSettings {
    /// `false` opts out of submission for every project.
    pub enabled: bool,
    pub exclude_projects: Vec<String>,
}

impl Default for RankSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            exclude_projects: Vec::new(),
        }
    }
}
