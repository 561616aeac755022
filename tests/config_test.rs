use anyhow::Result;
use carscope::config::AppConfig;
use carscope::domain::ports::ConfigProvider;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_load_config_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("carscope.toml");
    std::fs::write(
        &path,
        r#"
[backend]
endpoint = "http://192.168.1.20:5000"
per_page = 25
timeout_seconds = 15

[price]
floor = 3000
ceiling = 80000
"#,
    )?;

    let config = AppConfig::from_file(&path)?;
    assert_eq!(config.api_endpoint(), "http://192.168.1.20:5000");
    assert_eq!(config.per_page(), 25);
    assert_eq!(config.price_bounds(), (3000, 80_000));
    assert_eq!(config.timeout(), Duration::from_secs(15));
    Ok(())
}

#[test]
fn test_load_config_rejects_bad_endpoint() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("carscope.toml");
    std::fs::write(
        &path,
        r#"
[backend]
endpoint = "ftp://not-http"
"#,
    )?;

    assert!(AppConfig::from_file(&path).is_err());
    Ok(())
}

#[test]
fn test_load_config_missing_file_is_an_io_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("does-not-exist.toml");
    let err = AppConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, carscope::CarscopeError::IoError(_)));
    Ok(())
}

#[test]
fn test_load_config_rejects_malformed_toml() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("carscope.toml");
    std::fs::write(&path, "backend = ")?;
    assert!(matches!(
        AppConfig::from_file(&path),
        Err(carscope::CarscopeError::ConfigError { .. })
    ));
    Ok(())
}
