use serde::{Deserialize, Serialize};

use crate::error::{AppResult, SettingsError};

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/ycsb";
pub const DEFAULT_RUN_PROPERTY: &str = "is_run";
pub const DEFAULT_VARIABLES_PROPERTY: &str = "[>] variables";
pub const DEFAULT_NAME_TEMPLATE: &str = "{Operation}_{filename}";

/// 持久化的用户设置
///
/// 每个字段都有默认值，旧版本或不完整的设置文件加载时会自动补齐
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// 执行服务地址
    pub api_url: String,
    /// 已启用的集合
    pub enabled_base_paths: Vec<String>,
    /// 判定是否运行的属性名
    pub run_property_name: String,
    /// 变量属性名
    pub variables_property_name: String,
    /// 运行名称模板
    pub running_name_template: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            enabled_base_paths: Vec::new(),
            run_property_name: DEFAULT_RUN_PROPERTY.to_string(),
            variables_property_name: DEFAULT_VARIABLES_PROPERTY.to_string(),
            running_name_template: DEFAULT_NAME_TEMPLATE.to_string(),
        }
    }
}

impl Settings {
    pub fn is_enabled(&self, collection_id: &str) -> bool {
        self.enabled_base_paths.iter().any(|p| p == collection_id)
    }

    /// 启用集合，已启用时返回 false
    pub fn enable_collection(&mut self, collection_id: &str) -> bool {
        if self.is_enabled(collection_id) {
            return false;
        }
        self.enabled_base_paths.push(collection_id.to_string());
        true
    }

    /// 停用集合，未启用时返回 false
    pub fn disable_collection(&mut self, collection_id: &str) -> bool {
        let before = self.enabled_base_paths.len();
        self.enabled_base_paths.retain(|p| p != collection_id);
        before != self.enabled_base_paths.len()
    }

    /// 按键名修改单个字符串设置项（键名与设置文件一致）
    pub fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let slot = match key {
            "apiUrl" => &mut self.api_url,
            "runPropertyName" => &mut self.run_property_name,
            "variablesPropertyName" => &mut self.variables_property_name,
            "runningNameTemplate" => &mut self.running_name_template,
            _ => {
                return Err(SettingsError::UnknownKey {
                    key: key.to_string(),
                }
                .into())
            }
        };
        *slot = value.to_string();
        Ok(())
    }
}
