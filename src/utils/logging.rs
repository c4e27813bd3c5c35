/// 日志工具模块
///
/// 提供日志初始化和运行过程的格式化输出
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::models::RunReport;

/// 初始化日志
///
/// `RUST_LOG` 优先；否则默认 info，详细模式为 debug。重复调用不会出错
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录运行开始信息
///
/// # 参数
/// - `service_url`: 执行服务地址
/// - `total`: 待提交的条目总数
pub fn log_run_start(service_url: &str, total: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 开始运行基准测试 - 逐个顺序提交");
    info!("🌐 执行服务: {}", service_url);
    info!("📋 待提交条目: {}", total);
    info!("{}", "=".repeat(60));
}

/// 记录集合收集信息
pub fn log_collection_start(collection_id: &str) {
    info!("\n{}", "─".repeat(60));
    info!("📁 正在收集集合: {}", collection_id);
}

/// 打印最终统计信息
pub fn print_final_stats(report: &RunReport) {
    info!("\n{}", "=".repeat(60));
    info!("📊 运行统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    match report {
        RunReport::NothingToRun => info!("💡 {}", report),
        RunReport::Completed(summary) => {
            info!("✅ 成功: {}/{}", summary.success_count, summary.total());
            info!("❌ 失败: {}", summary.fail_count);
        }
    }
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("短文本", 10), "短文本");
        assert_eq!(truncate_text("基准测试负载", 4), "基准测试...");
    }
}
