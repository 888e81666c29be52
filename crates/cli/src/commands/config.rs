use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use brewguide_core::config::{AppConfig, LoadOptions, DEFAULT_CONFIG_FILE};
use toml::Value;

struct Field {
    key_path: &'static str,
    env_keys: &'static [&'static str],
    value: String,
}

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = detect_config_path();
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let fields = [
        Field {
            key_path: "catalog.path",
            env_keys: &["BREWGUIDE_CATALOG_PATH"],
            value: config
                .catalog
                .path
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "<builtin>".to_string()),
        },
        Field {
            key_path: "recommendations.result_limit",
            env_keys: &["BREWGUIDE_RECOMMENDATIONS_RESULT_LIMIT"],
            value: config.recommendations.result_limit.to_string(),
        },
        Field {
            key_path: "recommendations.tip_limit",
            env_keys: &["BREWGUIDE_RECOMMENDATIONS_TIP_LIMIT"],
            value: config.recommendations.tip_limit.to_string(),
        },
        Field {
            key_path: "storage.data_dir",
            env_keys: &["BREWGUIDE_STORAGE_DATA_DIR"],
            value: config.storage.data_dir.display().to_string(),
        },
        Field {
            key_path: "logging.level",
            env_keys: &["BREWGUIDE_LOGGING_LEVEL", "BREWGUIDE_LOG_LEVEL"],
            value: config.logging.level.clone(),
        },
        Field {
            key_path: "logging.format",
            env_keys: &["BREWGUIDE_LOGGING_FORMAT", "BREWGUIDE_LOG_FORMAT"],
            value: config.logging.format.as_str().to_string(),
        },
    ];

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];
    for field in &fields {
        lines.push(render_line(
            field.key_path,
            &field.value,
            field_source(
                field.key_path,
                field.env_keys,
                config_file_doc.as_ref(),
                config_file_path.as_deref(),
            ),
        ));
    }

    lines.join("\n")
}

fn detect_config_path() -> Option<PathBuf> {
    let root = PathBuf::from(DEFAULT_CONFIG_FILE);
    if root.exists() {
        return Some(root);
    }

    let nested = PathBuf::from("config").join(DEFAULT_CONFIG_FILE);
    if nested.exists() {
        return Some(nested);
    }

    None
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_keys.iter().find(|key| is_set(key)) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

// Blank values are ignored by the loader, so they are not a source either.
fn is_set(key: &str) -> bool {
    env::var(key).is_ok_and(|value| !value.trim().is_empty())
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}

#[cfg(test)]
mod tests {
    use super::contains_path;
    use toml::Value;

    #[test]
    fn nested_key_paths_are_resolved() {
        let doc: Value = "[recommendations]\nresult_limit = 4\n".parse().expect("valid toml");
        assert!(contains_path(&doc, "recommendations.result_limit"));
        assert!(!contains_path(&doc, "recommendations.tip_limit"));
        assert!(!contains_path(&doc, "storage.data_dir"));
    }
}
