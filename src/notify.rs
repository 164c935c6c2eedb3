//! Host notification seam / 宿主通知层接口
//!
//! The toast surface itself belongs to the host and is out of scope; the
//! controller only needs somewhere to report non-cancellation failures.
//! 提示界面由宿主提供，控制器只负责上报非取消类失败。

/// Failure notification surface of the host / 宿主的失败提示界面
pub trait Notifier: Send + Sync {
    /// Show a failure-styled notification / 展示一条失败样式的通知
    fn failure(&self, title: &str, message: &str);
}

/// Default notifier that records failures to the log / 默认实现：仅写入日志
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn failure(&self, title: &str, message: &str) {
        tracing::warn!("{}: {}", title, message);
    }
}
