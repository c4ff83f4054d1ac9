//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StageError, StageResult};

use super::types::Config;

/// Non-fatal configuration warning (e.g. an unknown key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> StageResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| StageError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `path` when given and readable, falling back to defaults.
///
/// Environment overrides are applied in both cases.
pub fn load_or_default(path: Option<&Path>) -> Config {
    let config = match path {
        Some(path) if path.exists() => match load_with_warnings(path) {
            Ok((config, warnings)) => {
                for warning in &warnings {
                    tracing::warn!(
                        key = %warning.key,
                        file = %warning.file.display(),
                        line = ?warning.line,
                        suggestion = ?warning.suggestion,
                        "Unknown configuration key"
                    );
                }
                config
            }
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "Ignoring invalid configuration");
                Config::default()
            }
        },
        _ => Config::default(),
    };

    with_env_overrides(config)
}

/// Apply environment variable overrides (JOBSTAGE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `lookup` instead of the process environment.
pub(crate) fn with_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("JOBSTAGE_CAPTURE_STDERR") {
        config.runner.capture_stderr = parse_flag(&val);
    }

    if let Some(val) = lookup("JOBSTAGE_INHERIT_STDOUT") {
        config.runner.inherit_stdout = parse_flag(&val);
    }

    if let Some(val) = lookup("JOBSTAGE_STDERR_LIMIT") {
        match val.trim().parse::<usize>() {
            Ok(limit) => config.runner.stderr_limit = limit,
            Err(_) => warn_invalid("JOBSTAGE_STDERR_LIMIT", &val),
        }
    }

    // empty or "0" clears the timeout
    if let Some(val) = lookup("JOBSTAGE_TIMEOUT_SECS") {
        match val.trim() {
            "" | "0" => config.runner.timeout_secs = None,
            trimmed => match trimmed.parse::<u64>() {
                Ok(secs) => config.runner.timeout_secs = Some(secs),
                Err(_) => warn_invalid("JOBSTAGE_TIMEOUT_SECS", &val),
            },
        }
    }

    config
}

fn parse_flag(val: &str) -> bool {
    let val = val.trim().to_lowercase();
    val != "false" && val != "0" && val != "no"
}

fn warn_invalid(var: &str, value: &str) {
    tracing::warn!(var, value, "Ignoring invalid environment override");
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "runner",
        "capture_stderr",
        "stderr_limit",
        "inherit_stdout",
        "timeout_secs",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
