use super::schema::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.input.as_os_str().is_empty() {
        errors.push("input: must not be empty".to_string());
    }

    if config.report.top_n == 0 {
        errors.push("report.top_n: must be at least 1".to_string());
    }

    if let Some(ref export) = config.export {
        if export.as_os_str().is_empty() {
            errors.push("export: must not be empty when set".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
