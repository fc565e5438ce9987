use log::debug;

const PROJBOARD_DEFAULT_CONFIG_NAME: &str = ".projboard.json";
const PROJBOARD_CONFIG_ENV: &str = "PROJBOARD_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("config io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("config parse error: {0}")]
  Json(#[from] serde_json::Error),
  #[error("can't locate config: HOME is not set and PROJBOARD_CONFIG is empty")]
  NoHome,
}

/// Bounds the input form applies before a project reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct FormLimits {
  pub description_min_length: usize,
  pub people_min: i64,
  pub people_max: i64,
}

impl Default for FormLimits {
  fn default() -> Self {
    Self {
      description_min_length: 5,
      people_min: 1,
      people_max: 5,
    }
  }
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
  pub color: bool,
  pub limits: FormLimits,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      color: true,
      limits: FormLimits::default(),
    }
  }
}

impl Config {
  /// `--config` wins over `PROJBOARD_CONFIG`, which wins over `$HOME/.projboard.json`.
  pub fn config_path(explicit: Option<&str>) -> Result<std::path::PathBuf, ConfigError> {
    if let Some(path) = explicit {
      return Ok(std::path::PathBuf::from(path));
    }

    match std::env::var(PROJBOARD_CONFIG_ENV) {
      Ok(file_path) if !file_path.is_empty() => Ok(std::path::PathBuf::from(file_path)),
      _ => {
        let home = std::env::var("HOME").map_err(|_| ConfigError::NoHome)?;
        Ok(std::path::Path::new(&home).join(PROJBOARD_DEFAULT_CONFIG_NAME))
      }
    }
  }

  pub fn load(explicit: Option<&str>) -> Result<Self, ConfigError> {
    let path = Self::config_path(explicit)?;
    Self::load_from(&path)
  }

  /// Reads the config at `path`, writing the defaults there first if it is missing.
  pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
    if !path.exists() {
      let config = Self::default();
      debug!("config not found, writing defaults to: {}", path.display());
      let file = std::fs::File::create(path)?;
      serde_json::to_writer_pretty(file, &config)?;
      return Ok(config);
    }

    debug!("reading config from: {}", path.display());
    let file = std::fs::File::open(path)?;
    let config = serde_json::from_reader(std::io::BufReader::new(file))?;
    return Ok(config);
  }
}
