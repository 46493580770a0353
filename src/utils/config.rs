use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = ".githooks.json";

/// Hook name to script body, in the order the user wrote them.
///
/// Names are kept as raw strings here; they are checked against the known
/// hook set by `HooksDirManager::check_hook_names` before anything is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookScripts(Vec<(String, String)>);

impl HookScripts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a hook, replacing the script of an earlier entry with the same name.
    pub fn insert(&mut self, name: impl Into<String>, script: impl Into<String>) {
        let name = name.into();
        let script = script.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = script,
            None => self.0.push((name, script)),
        }
    }

    /// Adds a hook, failing if the name is already present.
    pub fn push_unique(&mut self, name: String, script: String) -> Result<(), String> {
        if self.0.iter().any(|(n, _)| *n == name) {
            return Err(format!("duplicate hook `{}`", name));
        }
        self.0.push((name, script));
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, s)| (n.as_str(), s.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>, S: Into<String>> FromIterator<(N, S)> for HookScripts {
    fn from_iter<I: IntoIterator<Item = (N, S)>>(iter: I) -> Self {
        let mut scripts = HookScripts::new();
        for (name, script) in iter {
            scripts.insert(name, script);
        }
        scripts
    }
}

impl Serialize for HookScripts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for HookScripts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScriptsVisitor;

        impl<'de> Visitor<'de> for ScriptsVisitor {
            type Value = HookScripts;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of hook names to script contents")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<HookScripts, A::Error> {
                let mut scripts = HookScripts::new();
                while let Some((name, script)) = map.next_entry::<String, String>()? {
                    scripts
                        .push_unique(name, script)
                        .map_err(<A::Error as de::Error>::custom)?;
                }
                Ok(scripts)
            }
        }

        deserializer.deserialize_map(ScriptsVisitor)
    }
}

/// Whether the user supplied hooks at all. `Absent` selects removal mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HookConfiguration {
    #[default]
    Absent,
    Present(HookScripts),
}

impl Serialize for HookConfiguration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            HookConfiguration::Absent => serializer.serialize_none(),
            HookConfiguration::Present(scripts) => serializer.serialize_some(scripts),
        }
    }
}

impl<'de> Deserialize<'de> for HookConfiguration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<HookScripts>::deserialize(deserializer)? {
            Some(scripts) => HookConfiguration::Present(scripts),
            None => HookConfiguration::Absent,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub hooks: HookConfiguration,
    pub always_override: bool,
}

impl Config {
    /// Path of the config file for a repository whose working tree is `repo_root`.
    pub fn default_path(repo_root: &Path) -> PathBuf {
        repo_root.join(DEFAULT_CONFIG_FILE)
    }

    /// Reads `config_path`, falling back to the default (no hooks) when the file is missing.
    pub fn load(config_path: &Path) -> anyhow::Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            log::debug!("No config at {}, using defaults", config_path.display());
            Ok(Config::default())
        }
    }

    /// Applies command-line overrides on top of the file contents.
    ///
    /// Hooks given on the command line replace the file's hook map entirely;
    /// naming the same hook twice is an error.
    pub fn apply_overrides(
        &mut self,
        hooks: Vec<(String, String)>,
        always_override: bool,
    ) -> anyhow::Result<()> {
        if !hooks.is_empty() {
            let mut scripts = HookScripts::new();
            for (name, script) in hooks {
                scripts.push_unique(name, script).map_err(anyhow::Error::msg)?;
            }
            self.hooks = HookConfiguration::Present(scripts);
        }
        if always_override {
            self.always_override = true;
        }
        Ok(())
    }
}

/// Parses a `NAME=SCRIPT` command-line argument.
pub fn parse_hook_arg(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, script)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), script.to_string()))
        }
        _ => Err(format!("expected NAME=SCRIPT, got `{}`", arg)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn hooks_keep_document_order() {
        let config: Config = serde_json::from_str(
            r#"{"always_override": true, "hooks": {"pre-push": "b", "commit-msg": "c", "pre-commit": "a"}}"#,
        )
        .unwrap();

        assert!(config.always_override);
        let HookConfiguration::Present(scripts) = config.hooks else {
            panic!("expected hooks to be present");
        };
        let names: Vec<&str> = scripts.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["pre-push", "commit-msg", "pre-commit"]);
    }

    #[test]
    fn missing_or_null_hooks_mean_absent() {
        let missing: Config = serde_json::from_str(r#"{"always_override": true}"#).unwrap();
        assert_eq!(missing.hooks, HookConfiguration::Absent);

        let null: Config = serde_json::from_str(r#"{"hooks": null}"#).unwrap();
        assert_eq!(null.hooks, HookConfiguration::Absent);
        assert!(!null.always_override);
    }

    #[test]
    fn empty_hook_map_is_present() {
        let config: Config = serde_json::from_str(r#"{"hooks": {}}"#).unwrap();
        assert_eq!(config.hooks, HookConfiguration::Present(HookScripts::new()));
    }

    #[test]
    fn duplicate_hook_names_are_rejected() {
        let err = serde_json::from_str::<Config>(r#"{"hooks": {"pre-commit": "a", "pre-commit": "b"}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("duplicate hook `pre-commit`"));
    }

    #[test]
    fn non_string_script_is_rejected() {
        assert!(serde_json::from_str::<Config>(r#"{"hooks": {"pre-commit": 1}}"#).is_err());
    }

    #[test]
    fn load_falls_back_to_default_when_file_missing() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load(&Config::default_path(tmp.path())).unwrap();
        assert_eq!(config.hooks, HookConfiguration::Absent);
        assert!(!config.always_override);
    }

    #[test]
    fn load_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = Config::default_path(tmp.path());
        std::fs::write(&path, r#"{"always_override": true, "hooks": {"pre-commit": "echo hi"}}"#)
            .unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.always_override);
        assert_eq!(
            config.hooks,
            HookConfiguration::Present([("pre-commit", "echo hi")].into_iter().collect())
        );
    }

    #[test]
    fn load_reports_malformed_json() {
        let tmp = TempDir::new().unwrap();
        let path = Config::default_path(tmp.path());
        std::fs::write(&path, "{ not json").unwrap();
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn cli_hooks_replace_file_hooks() {
        let mut config = Config {
            hooks: HookConfiguration::Present([("pre-push", "x")].into_iter().collect()),
            always_override: false,
        };
        config
            .apply_overrides(vec![("pre-commit".into(), "echo hi".into())], true)
            .unwrap();

        assert!(config.always_override);
        assert_eq!(
            config.hooks,
            HookConfiguration::Present([("pre-commit", "echo hi")].into_iter().collect())
        );
    }

    #[test]
    fn cli_rejects_repeated_hook_name() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(
                vec![
                    ("pre-commit".into(), "a".into()),
                    ("pre-commit".into(), "b".into()),
                ],
                true,
            )
            .unwrap_err();

        assert!(err.to_string().contains("duplicate hook `pre-commit`"));
        assert_eq!(config.hooks, HookConfiguration::Absent);
    }

    #[test]
    fn no_cli_overrides_leave_config_alone() {
        let mut config = Config::default();
        config.apply_overrides(Vec::new(), false).unwrap();
        assert_eq!(config.hooks, HookConfiguration::Absent);
        assert!(!config.always_override);
    }

    #[test]
    fn parse_hook_arg_splits_on_first_equals() {
        assert_eq!(
            parse_hook_arg("pre-commit=FOO=1 cargo test").unwrap(),
            ("pre-commit".to_string(), "FOO=1 cargo test".to_string())
        );
        assert!(parse_hook_arg("pre-commit").is_err());
        assert!(parse_hook_arg("=echo").is_err());
    }

    #[test]
    fn serializes_back_in_order() {
        let config = Config {
            hooks: HookConfiguration::Present([("pre-push", "b"), ("pre-commit", "a")].into_iter().collect()),
            always_override: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"hooks":{"pre-push":"b","pre-commit":"a"},"always_override":true}"#
        );
    }
}
