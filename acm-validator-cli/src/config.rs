//! Run configuration: credentials and region
//!
//! Credentials come from `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY` / `AWS_SESSION_TOKEN`
//! when no profile is named, otherwise from the profile's section of the shared
//! credentials file. Region resolution order:
//!
//! 1. `--region` / `AWS_REGION`
//! 2. `AWS_DEFAULT_REGION`
//! 3. `region` of the profile in the shared config file
//! 4. `us-east-1`

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use acm_validator_provider::AwsCredentials;
use anyhow::{Context, Result, anyhow, bail};

use crate::cli::GlobalArgs;

const DEFAULT_PROFILE: &str = "default";
const DEFAULT_REGION: &str = "us-east-1";

/// Resolved settings of one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub credentials: AwsCredentials,
    pub region: String,
    /// Profile the credentials were read from; `None` for environment credentials.
    pub profile: Option<String>,
    pub dry_run: bool,
    pub assume_yes: bool,
}

impl RunConfig {
    /// Resolve against the process environment and the home directory.
    pub fn load(args: &GlobalArgs) -> Result<Self> {
        Self::resolve(args, |key| std::env::var(key).ok(), dirs::home_dir().as_deref())
    }

    fn resolve<F>(args: &GlobalArgs, env: F, home: Option<&Path>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).filter(|v| !v.trim().is_empty());
        let files = SharedFiles::locate(&lookup, home);

        let (credentials, profile) = match args.profile.as_deref() {
            Some(profile) => (files.profile_credentials(profile)?, Some(profile.to_string())),
            None => match credentials_from_env(&lookup) {
                Some(credentials) => {
                    log::debug!("Using credentials from environment variables");
                    (credentials, None)
                }
                None => (
                    files.profile_credentials(DEFAULT_PROFILE)?,
                    Some(DEFAULT_PROFILE.to_string()),
                ),
            },
        };

        let region = args
            .region
            .clone()
            .filter(|r| !r.trim().is_empty())
            .or_else(|| lookup("AWS_DEFAULT_REGION"))
            .or_else(|| files.profile_region(profile.as_deref().unwrap_or(DEFAULT_PROFILE)))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        log::debug!(
            "Profile: {}, region: {region}",
            profile.as_deref().unwrap_or("<environment>")
        );

        Ok(Self {
            credentials,
            region,
            profile,
            dry_run: args.dry_run,
            assume_yes: args.assume_yes,
        })
    }
}

fn credentials_from_env(env: &impl Fn(&str) -> Option<String>) -> Option<AwsCredentials> {
    let credentials = AwsCredentials::new(env("AWS_ACCESS_KEY_ID")?, env("AWS_SECRET_ACCESS_KEY")?);
    Some(match env("AWS_SESSION_TOKEN") {
        Some(token) => credentials.with_session_token(token),
        None => credentials,
    })
}

/// Locations of `~/.aws/credentials` and `~/.aws/config`.
struct SharedFiles {
    credentials: Option<PathBuf>,
    config: Option<PathBuf>,
}

impl SharedFiles {
    fn locate(env: &impl Fn(&str) -> Option<String>, home: Option<&Path>) -> Self {
        let aws_dir = home.map(|h| h.join(".aws"));
        Self {
            credentials: env("AWS_SHARED_CREDENTIALS_FILE")
                .map(PathBuf::from)
                .or_else(|| aws_dir.as_ref().map(|d| d.join("credentials"))),
            config: env("AWS_CONFIG_FILE")
                .map(PathBuf::from)
                .or_else(|| aws_dir.as_ref().map(|d| d.join("config"))),
        }
    }

    fn profile_credentials(&self, profile: &str) -> Result<AwsCredentials> {
        let path = self
            .credentials
            .as_deref()
            .ok_or_else(|| anyhow!("No credentials in the environment and no home directory"))?;
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read credentials file {}", path.display()))?;

        let sections = parse_ini(&text);
        let section = sections.get(profile).ok_or_else(|| {
            anyhow!("Profile '{profile}' not found in {}", path.display())
        })?;

        let (Some(key_id), Some(secret)) = (
            section.get("aws_access_key_id"),
            section.get("aws_secret_access_key"),
        ) else {
            bail!(
                "Profile '{profile}' in {} lacks aws_access_key_id or aws_secret_access_key",
                path.display()
            );
        };

        let credentials = AwsCredentials::new(key_id.clone(), secret.clone());
        Ok(match section.get("aws_session_token") {
            Some(token) => credentials.with_session_token(token.clone()),
            None => credentials,
        })
    }

    /// A missing or unreadable config file just means "no region configured".
    fn profile_region(&self, profile: &str) -> Option<String> {
        let path = self.config.as_deref()?;
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                log::debug!("Config file {} not read: {e}", path.display());
                return None;
            }
        };

        // Non-default profiles in the config file are written `[profile name]`
        let section_name = if profile == DEFAULT_PROFILE {
            DEFAULT_PROFILE.to_string()
        } else {
            format!("profile {profile}")
        };

        parse_ini(&text)
            .get(&section_name)
            .and_then(|s| s.get("region"))
            .cloned()
    }
}

/// Minimal INI reader for the AWS shared files.
///
/// `#` / `;` comment lines are skipped, keys are lower-cased, entries before the first
/// section header are ignored and a repeated key keeps its last value.
fn parse_ini(text: &str) -> HashMap<String, HashMap<String, String>> {
    let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            let name = name.split_whitespace().collect::<Vec<_>>().join(" ");
            sections.entry(name.clone()).or_default();
            current = Some(name);
            continue;
        }

        let (Some(section), Some((key, value))) = (current.as_ref(), line.split_once('=')) else {
            continue;
        };
        if let Some(entries) = sections.get_mut(section) {
            entries.insert(key.trim().to_ascii_lowercase(), value.trim().to_string());
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CREDENTIALS: &str = "\
# shared credentials
[default]
aws_access_key_id = AKIADEFAULT
aws_secret_access_key = default-secret

[ci]
AWS_ACCESS_KEY_ID=AKIACI
aws_secret_access_key=ci-secret
aws_session_token = ci-token

[broken]
aws_access_key_id = AKIABROKEN
";

    const CONFIG: &str = "\
[default]
region = eu-central-1

[profile  ci]
region = ap-northeast-1
output = json
";

    /// Write `.aws/credentials` and `.aws/config` under a temporary home.
    fn temp_home(config: Option<&str>) -> PathBuf {
        let home = std::env::temp_dir().join(format!(
            "acm-validator-config-{}-{:?}",
            std::process::id(),
            std::thread::current().id()
        ));
        let aws = home.join(".aws");
        fs::create_dir_all(&aws).unwrap();
        fs::write(aws.join("credentials"), CREDENTIALS).unwrap();
        match config {
            Some(text) => fs::write(aws.join("config"), text).unwrap(),
            None => {
                let _ = fs::remove_file(aws.join("config"));
            }
        }
        home
    }

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn args(profile: Option<&str>, region: Option<&str>) -> GlobalArgs {
        GlobalArgs {
            profile: profile.map(str::to_string),
            region: region.map(str::to_string),
            ..GlobalArgs::default()
        }
    }

    #[test]
    fn parse_ini_sections_and_comments() {
        let sections = parse_ini(CREDENTIALS);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections["ci"]["aws_access_key_id"], "AKIACI");
        assert_eq!(sections["ci"]["aws_session_token"], "ci-token");
        assert!(!sections["broken"].contains_key("aws_secret_access_key"));

        let config = parse_ini(CONFIG);
        assert_eq!(config["profile ci"]["region"], "ap-northeast-1");
    }

    #[test]
    fn parse_ini_ignores_orphan_entries() {
        let sections = parse_ini("region = x\n; note\n[a]\nk = v = w\n");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections["a"]["k"], "v = w");
    }

    #[test]
    fn environment_credentials_without_profile() {
        let home = temp_home(Some(CONFIG));
        let env = env_of(&[
            ("AWS_ACCESS_KEY_ID", "AKIAENV"),
            ("AWS_SECRET_ACCESS_KEY", "env-secret"),
            ("AWS_SESSION_TOKEN", "env-token"),
        ]);

        let config = RunConfig::resolve(&args(None, None), env, Some(&home)).unwrap();

        assert_eq!(config.credentials.access_key_id, "AKIAENV");
        assert_eq!(config.credentials.session_token.as_deref(), Some("env-token"));
        assert_eq!(config.profile, None);
        assert_eq!(config.region, "eu-central-1");
    }

    #[test]
    fn default_profile_when_environment_is_empty() {
        let home = temp_home(None);

        let config = RunConfig::resolve(&args(None, None), env_of(&[]), Some(&home)).unwrap();

        assert_eq!(config.credentials.access_key_id, "AKIADEFAULT");
        assert_eq!(config.profile.as_deref(), Some("default"));
        assert_eq!(config.region, "us-east-1");
    }

    #[test]
    fn named_profile_wins_over_environment() {
        let home = temp_home(Some(CONFIG));
        let env = env_of(&[
            ("AWS_ACCESS_KEY_ID", "AKIAENV"),
            ("AWS_SECRET_ACCESS_KEY", "env-secret"),
        ]);

        let config = RunConfig::resolve(&args(Some("ci"), None), env, Some(&home)).unwrap();

        assert_eq!(config.credentials.access_key_id, "AKIACI");
        assert_eq!(config.credentials.session_token.as_deref(), Some("ci-token"));
        assert_eq!(config.region, "ap-northeast-1");
    }

    #[test]
    fn region_precedence() {
        let home = temp_home(Some(CONFIG));
        let env = env_of(&[("AWS_DEFAULT_REGION", "sa-east-1")]);

        let explicit =
            RunConfig::resolve(&args(Some("ci"), Some("us-west-2")), &env, Some(&home)).unwrap();
        assert_eq!(explicit.region, "us-west-2");

        let from_env = RunConfig::resolve(&args(Some("ci"), None), &env, Some(&home)).unwrap();
        assert_eq!(from_env.region, "sa-east-1");
    }

    #[test]
    fn missing_or_incomplete_profile_is_an_error() {
        let home = temp_home(None);

        let missing = RunConfig::resolve(&args(Some("nope"), None), env_of(&[]), Some(&home));
        assert!(missing.unwrap_err().to_string().contains("'nope' not found"));

        let broken = RunConfig::resolve(&args(Some("broken"), None), env_of(&[]), Some(&home));
        assert!(broken.unwrap_err().to_string().contains("lacks"));
    }

    #[test]
    fn explicit_credentials_file_location() {
        let home = temp_home(None);
        let path = home.join(".aws").join("credentials");
        let env = env_of(&[("AWS_SHARED_CREDENTIALS_FILE", path.to_str().unwrap())]);

        let config = RunConfig::resolve(&args(Some("ci"), None), env, None).unwrap();
        assert_eq!(config.credentials.access_key_id, "AKIACI");
        assert_eq!(config.region, "us-east-1");
    }
}
