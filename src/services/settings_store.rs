//! 设置存储 - 业务能力层
//!
//! 以 JSON 文件持久化 `Settings`，加载时对缺失字段补默认值

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{AppError, AppResult, SettingsError};
use crate::models::Settings;

/// 设置存储
pub trait SettingsStore {
    /// 加载设置，缺失字段使用默认值
    fn load(&self) -> AppResult<Settings>;

    /// 保存完整设置
    fn save(&self, settings: &Settings) -> AppResult<()>;
}

/// JSON 文件设置存储
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> AppResult<Settings> {
        if !self.path.exists() {
            info!("设置文件不存在，使用默认设置: {}", self.path.display());
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| AppError::io(self.path.display().to_string(), e))?;

        if content.trim().is_empty() {
            return Ok(Settings::default());
        }

        let settings = serde_json::from_str(&content).map_err(|e| SettingsError::ParseFailed {
            path: self.path.display().to_string(),
            source: e,
        })?;

        debug!("已加载设置: {}", self.path.display());
        Ok(settings)
    }

    fn save(&self, settings: &Settings) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| AppError::io(parent.display().to_string(), e))?;
            }
        }

        let json = serde_json::to_string_pretty(settings).map_err(|e| {
            AppError::Settings(SettingsError::ParseFailed {
                path: self.path.display().to_string(),
                source: e,
            })
        })?;

        fs::write(&self.path, json)
            .map_err(|e| AppError::io(self.path.display().to_string(), e))?;

        debug!("已保存设置: {}", self.path.display());
        Ok(())
    }
}
