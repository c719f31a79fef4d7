//! Configuration Loader
//!
//! 默认值 → config.toml / config.local.toml → `ADMIN_CONSOLE_*` 环境变量，
//! 后者覆盖前者

use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 未指定路径时依次尝试的配置文件（不含扩展名）
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

const ENV_PREFIX: &str = "ADMIN_CONSOLE";

/// 加载应用配置
///
/// 环境变量使用 `__` 分隔层级，例如：
/// - `ADMIN_CONSOLE_API__BASE_URL=http://127.0.0.1:8080/api`
/// - `ADMIN_CONSOLE_MOCK__REQUIRE_AUTH=false`
/// - `ADMIN_CONSOLE_STORAGE__DIR=/tmp/admin`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定文件加载配置；`None` 时搜索工作目录下的默认文件
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = with_defaults(Config::builder())?;

    builder = match config_path {
        Some(path) => builder.add_source(File::from(path).required(true)),
        None => CONFIG_FILE_NAMES.iter().fold(builder, |b, name| {
            b.add_source(File::with_name(name).required(false))
        }),
    };

    let settings = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = settings
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    validate_config(&app_config)?;
    Ok(app_config)
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder
        .set_default("api.base_url", "http://localhost:5060/api")?
        .set_default("api.timeout_ms", 5000)?
        .set_default("mock.host", "0.0.0.0")?
        .set_default("mock.port", 5060)?
        .set_default("mock.latency_min_ms", 300)?
        .set_default("mock.latency_max_ms", 600)?
        .set_default("mock.require_auth", true)?
        .set_default("storage.dir", "data")?
        .set_default("log.level", "info")?)
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let invalid = |msg: String| -> Result<(), ConfigError> {
        Err(ConfigError::ValidationError(msg))
    };

    if config.api.base_url.trim().is_empty() {
        return invalid("api.base_url cannot be empty".to_string());
    }
    if config.api.timeout_ms == 0 {
        return invalid("api.timeout_ms must be greater than 0".to_string());
    }
    if config.mock.port == 0 {
        return invalid("mock.port cannot be 0".to_string());
    }
    if config.mock.latency_min_ms > config.mock.latency_max_ms {
        return invalid(format!(
            "mock latency range is inverted: {} > {}",
            config.mock.latency_min_ms, config.mock.latency_max_ms
        ));
    }

    Ok(())
}

/// 启动时输出生效的配置
pub fn print_config(config: &AppConfig) {
    tracing::info!(
        base_url = %config.api.base_url,
        timeout_ms = config.api.timeout_ms,
        "API client"
    );
    tracing::info!(
        addr = %config.mock.server_config().addr(),
        latency_min_ms = config.mock.latency_min_ms,
        latency_max_ms = config.mock.latency_max_ms,
        require_auth = config.mock.require_auth,
        "Mock backend"
    );
    tracing::info!(
        storage_dir = %config.storage.dir.display(),
        log_level = %config.log.level,
        "Runtime"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn toml_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut zero_port = AppConfig::default();
        zero_port.mock.port = 0;

        let mut blank_url = AppConfig::default();
        blank_url.api.base_url = "  ".to_string();

        let mut zero_timeout = AppConfig::default();
        zero_timeout.api.timeout_ms = 0;

        let mut inverted = AppConfig::default();
        inverted.mock.latency_min_ms = 700;

        for config in [zero_port, blank_url, zero_timeout, inverted] {
            assert!(matches!(
                validate_config(&config),
                Err(ConfigError::ValidationError(_))
            ));
        }
    }

    #[test]
    fn test_load_from_file() {
        let file = toml_file("[api]\ntimeout_ms = 1500\n\n[mock]\nport = 9090\nseed_orders = 4\n");

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.api.timeout_ms, 1500);
        assert_eq!(config.api.base_url, "http://localhost:5060/api");
        assert_eq!(config.mock.port, 9090);
        assert_eq!(config.mock.seed_orders, Some(4));
        assert!(config.mock.seed_products.is_none());
    }

    #[test]
    fn test_invalid_file_rejected() {
        let file = toml_file("[mock]\nport = 0\n");

        let err = load_config_from_path(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let err = load_config_from_path(Some(Path::new("/nonexistent/admin.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }
}
