use std::path::PathBuf;

/// 程序运行配置（进程级，不持久化）
#[derive(Clone, Debug)]
pub struct Config {
    /// vault 根目录
    pub vault_root: PathBuf,
    /// 设置文件路径，为空时使用 vault 内的默认位置
    pub settings_file: Option<PathBuf>,
    /// 失败记录文件
    pub failure_log_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

/// vault 内存放设置文件的目录
pub const SETTINGS_DIR: &str = ".bench_dispatch";
/// 设置文件名
pub const SETTINGS_FILE_NAME: &str = "data.json";

impl Default for Config {
    fn default() -> Self {
        Self {
            vault_root: PathBuf::from("."),
            settings_file: None,
            failure_log_file: "failed_runs.txt".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            vault_root: std::env::var("BENCH_VAULT_ROOT").map(PathBuf::from).unwrap_or(default.vault_root),
            settings_file: std::env::var("BENCH_SETTINGS_FILE").ok().map(PathBuf::from).or(default.settings_file),
            failure_log_file: std::env::var("BENCH_FAILURE_LOG").unwrap_or(default.failure_log_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 实际使用的设置文件路径
    pub fn settings_path(&self) -> PathBuf {
        match &self.settings_file {
            Some(path) => path.clone(),
            None => self.vault_root.join(SETTINGS_DIR).join(SETTINGS_FILE_NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_path_defaults_into_vault() {
        let config = Config {
            vault_root: PathBuf::from("/vault"),
            ..Default::default()
        };
        assert_eq!(
            config.settings_path(),
            PathBuf::from("/vault/.bench_dispatch/data.json")
        );
    }

    #[test]
    fn test_settings_path_override() {
        let config = Config {
            settings_file: Some(PathBuf::from("custom.json")),
            ..Default::default()
        };
        assert_eq!(config.settings_path(), PathBuf::from("custom.json"));
    }
}
