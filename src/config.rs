//! Credentials file loading and validation
//!
//! The diagnostic reads its configuration from `envVarsExtended.txt`, a
//! shell-sourceable file of `export NAME='VALUE'` lines handed out with
//! the training environment. The file is looked up in the working
//! directory first, then in its parent. Parsing is strict: a line that is
//! neither blank, a `#` comment, nor a well-formed assignment aborts the
//! load with its 1-indexed line number.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed credentials file name
pub const ENV_FILE: &str = "envVarsExtended.txt";

/// Required keys, in the order they are checked
pub const REQUIRED_VARS: [&str; 4] = [
    "CAMUNDA_CLUSTER_ID",
    "CAMUNDA_CLIENT_ID",
    "CAMUNDA_CLIENT_SECRET",
    "CAMUNDA_CLUSTER_REGION",
];

/// Optional override for the OAuth token endpoint
pub const OAUTH_URL_VAR: &str = "CAMUNDA_OAUTH_URL";

/// Optional override for the Zeebe REST base address
pub const REST_ADDRESS_VAR: &str = "CAMUNDA_REST_ADDRESS";

static ASSIGNMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^export\s+(\w+)='(.+)'$").expect("assignment pattern is valid"));

/// Validated connection coordinates for a Camunda 8 SaaS cluster
///
/// Built once per run, never mutated. The four required fields are
/// guaranteed non-empty; the endpoint overrides are only present when the
/// credentials file sets them.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Cluster identifier
    pub cluster_id: String,
    /// OAuth client identifier
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: String,
    /// Cluster region, e.g. "bru-2"
    pub cluster_region: String,
    /// OAuth token endpoint override
    pub oauth_url: Option<String>,
    /// Zeebe REST base address override
    pub rest_address: Option<String>,
}

impl Credentials {
    /// Load credentials from `envVarsExtended.txt` in the working
    /// directory, falling back to the parent directory.
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let path = locate_env_file(&cwd)?;
        Self::from_file(&path)
    }

    /// Load credentials from an explicit file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::EnvFileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = fs::read_to_string(path)?;
        let vars = parse_env_lines(&content, &path.display().to_string())?;
        Self::from_vars(vars)
    }

    fn from_vars(mut vars: HashMap<String, String>) -> Result<Self> {
        let mut take = |name: &str| {
            vars.remove(name)
                .ok_or_else(|| Error::missing_variable(name))
        };

        // Checked in REQUIRED_VARS order so the first missing one is the
        // one reported.
        let cluster_id = take(REQUIRED_VARS[0])?;
        let client_id = take(REQUIRED_VARS[1])?;
        let client_secret = take(REQUIRED_VARS[2])?;
        let cluster_region = take(REQUIRED_VARS[3])?;

        let oauth_url = vars.remove(OAUTH_URL_VAR);
        let rest_address = vars.remove(REST_ADDRESS_VAR);

        Ok(Self {
            cluster_id,
            client_id,
            client_secret,
            cluster_region,
            oauth_url,
            rest_address,
        })
    }
}

/// Find the credentials file relative to `dir`: `dir` itself first, then
/// its parent.
pub(crate) fn locate_env_file(dir: &Path) -> Result<PathBuf> {
    let candidate = dir.join(ENV_FILE);
    if candidate.is_file() {
        return Ok(candidate);
    }
    if let Some(parent) = dir.parent() {
        let candidate = parent.join(ENV_FILE);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }
    Err(Error::EnvFileNotFound {
        path: ENV_FILE.to_string(),
    })
}

/// Parse the file content into a name/value map.
///
/// Lines are trimmed and 1-indexed. Blank lines and `#` comments are
/// skipped; everything else must match `export NAME='VALUE'` exactly.
/// Repeated names keep the last value.
fn parse_env_lines(content: &str, path: &str) -> Result<HashMap<String, String>> {
    let mut vars = HashMap::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some(captures) = ASSIGNMENT.captures(line) else {
            return Err(Error::MalformedLine {
                path: path.to_string(),
                line: index + 1,
                text: line.to_string(),
            });
        };
        vars.insert(captures[1].to_string(), captures[2].to_string());
    }

    Ok(vars)
}
