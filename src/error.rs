use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 集合相关错误
    #[error("集合错误: {0}")]
    Collection(#[from] CollectionError),
    /// 提交到执行服务的错误
    #[error("提交错误: {0}")]
    Submission(#[from] SubmissionError),
    /// 设置读写错误
    #[error("设置错误: {0}")]
    Settings(#[from] SettingsError),
    /// 文件操作错误
    #[error("文件错误 ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 其他错误
    #[error("错误: {0}")]
    Other(String),
}

/// 集合相关错误
#[derive(Debug, Error)]
pub enum CollectionError {
    /// 当前文档不属于任何已启用的集合
    #[error("文档 {document} 不属于任何已启用的集合")]
    NoEnabledCollection { document: String },
    /// vault 根目录不存在
    #[error("vault 目录不存在: {path}")]
    VaultNotFound { path: String },
}

/// 提交错误
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// 网络请求失败（连接、超时等传输层错误）
    #[error("请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

/// 设置错误
#[derive(Debug, Error)]
pub enum SettingsError {
    /// 设置文件解析失败
    #[error("设置文件解析失败 ({path}): {source}")]
    ParseFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// 未知的设置项
    #[error("未知的设置项: {key}")]
    UnknownKey { key: String },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读写错误
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }

    /// 创建请求失败错误
    pub fn request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Submission(SubmissionError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        })
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
