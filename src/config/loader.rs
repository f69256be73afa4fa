//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::BackupConfig;
use crate::domain::errors::BackupError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from an optional TOML file and the environment
///
/// This function:
/// 1. Reads the TOML file, if one is given
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`BackupConfig`]
/// 4. Applies environment variable overrides (`DYNAMODB_TABLE`,
///    `DYNAMODB_REGION`, `BACKUP_BUCKET`, `MAX_CAPACITY`, `BACKUP_*`)
/// 5. Validates the configuration
///
/// Without a file the configuration comes from the environment alone.
///
/// # Errors
///
/// Returns an I/O error if the file exists but cannot be read, and a
/// configuration error if:
/// - The file cannot be parsed
/// - A referenced environment variable is not set
/// - A numeric override cannot be parsed
/// - A required setting is missing after all sources are applied
///
/// # Examples
///
/// ```no_run
/// use ddb_backup::config::loader::load_config;
///
/// let config = load_config(None).expect("Failed to load config");
/// println!("Exporting {}", config.table.name);
/// ```
pub fn load_config(path: Option<&Path>) -> Result<BackupConfig> {
    let mut config = match path {
        Some(path) => read_config_file(path)?,
        None => BackupConfig::default(),
    };

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        BackupError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

fn read_config_file(path: &Path) -> Result<BackupConfig> {
    if !path.exists() {
        return Err(BackupError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path)?;
    let contents = substitute_env_vars(&contents)?;

    Ok(toml::from_str(&contents)?)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| BackupError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&format!("${{{var_name}}}"), &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(BackupError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

/// Reads an environment variable, treating an empty value as unset
fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Applies environment variable overrides
///
/// The four required settings use the names the job has always been
/// deployed with; optional settings use a `BACKUP_` prefix.
fn apply_env_overrides(config: &mut BackupConfig) -> Result<()> {
    if let Some(val) = env_value("DYNAMODB_TABLE") {
        config.table.name = val;
    }
    if let Some(val) = env_value("DYNAMODB_REGION") {
        config.table.region = val;
    }
    if let Some(val) = env_value("BACKUP_ENDPOINT_URL") {
        config.table.endpoint_url = Some(val);
    }
    if let Some(val) = env_value("BACKUP_BUCKET") {
        config.output.bucket = val;
    }
    if let Some(val) = env_value("MAX_CAPACITY") {
        config.export.max_consumed_capacity = val.trim().parse().map_err(|e| {
            BackupError::Configuration(format!(
                "Unable to convert MAX_CAPACITY '{val}' to a number: {e}"
            ))
        })?;
    }
    if let Some(val) = env_value("BACKUP_SCAN_INTERVAL_MS") {
        config.export.scan_interval_ms = val.trim().parse().map_err(|e| {
            BackupError::Configuration(format!(
                "Unable to convert BACKUP_SCAN_INTERVAL_MS '{val}' to milliseconds: {e}"
            ))
        })?;
    }
    if let Some(val) = env_value("BACKUP_DRY_RUN") {
        config.export.dry_run = val.parse().unwrap_or(false);
    }

    Ok(())
}
