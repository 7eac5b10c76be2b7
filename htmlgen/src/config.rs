use crate::fs::{read_string, to_mpath, walk_for_file};
use crate::{MPath, MResult, Options};
use anyhow::Context as _;
use camino::Utf8Path;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: Options,
    pub build: BuildConfig,
    /// Directory holding the config file. Build paths are relative to it.
    #[serde(skip)]
    pub root: MPath,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub main_dir: MPath,
    pub output_dir: MPath,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig { main_dir: MPath::from("pages"), output_dir: MPath::from("dist") }
    }
}

impl Config {
    pub const FILE_NAME: &'static str = "htmlgen.toml";

    /// Looks for the config file in `cwd` and its parents, falling back to defaults.
    pub fn find_recursively(cwd: PathBuf) -> MResult<Self> {
        let Some(file) = walk_for_file(cwd.clone(), Self::FILE_NAME) else {
            debug!("no {} found above {}, using defaults", Self::FILE_NAME, cwd.display());
            return Ok(Config::fill_defaults(Config::default(), to_mpath(cwd)?));
        };

        let file = to_mpath(file)?;
        debug!("using config {file}");

        let content = read_string(&file)?;
        let root = file.parent().map(Utf8Path::to_path_buf).unwrap_or_default();
        Config::parse(&content, root).with_context(|| format!("invalid config {file}"))
    }

    pub fn parse(content: &str, root: MPath) -> MResult<Self> {
        let config = toml::from_str::<Config>(content)?;
        Ok(Config::fill_defaults(config, root))
    }

    fn fill_defaults(mut config: Config, root: MPath) -> Self {
        config.build.main_dir = root.join(&config.build.main_dir);
        config.build.output_dir = root.join(&config.build.output_dir);
        config.root = root;
        config
    }
}
