//! Search controller / 搜索控制器
//!
//! Owns the single authoritative "latest results for latest query" view.
//! Each query-text change cancels the previous in-flight request before
//! issuing its own, so a superseded response can never be applied to state.
//! 每次查询变更先取消上一个在途请求再发起新的，过期响应不会落入状态。

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::client::SearchClient;
use crate::error::SearchError;
use crate::models::SearchState;
use crate::notify::{LogNotifier, Notifier};

/// Fixed failure toast title / 固定的失败提示标题
const FAILURE_TITLE: &str = "Could not perform search";

struct Inner {
    client: SearchClient,
    notifier: Arc<dyn Notifier>,
    state_tx: watch::Sender<SearchState>,
    /// Cancellation handle of the current request. All state commits happen
    /// under this lock, after re-checking the handle was not superseded.
    /// 当前请求的取消句柄，所有状态提交都在该锁内完成并复查是否已被取代。
    current: Mutex<CancellationToken>,
}

impl Inner {
    /// Apply a state transition unless the issuing request was superseded.
    /// Returns whether the commit happened. 请求未被取代时才提交状态。
    fn commit<F>(&self, token: &CancellationToken, update: F) -> bool
    where
        F: FnOnce(&mut SearchState),
    {
        let _guard = self.current.lock();
        if token.is_cancelled() {
            return false;
        }
        self.state_tx.send_modify(update);
        true
    }
}

pub struct SearchController {
    inner: Arc<Inner>,
}

impl SearchController {
    /// Create a controller and immediately load the empty-query default view.
    /// 创建控制器并立刻以空查询加载默认内容。
    ///
    /// Must be called inside a tokio runtime. 需要在tokio运行时内调用。
    pub fn new(client: SearchClient) -> Self {
        Self::with_notifier(client, Arc::new(LogNotifier))
    }

    pub fn with_notifier(client: SearchClient, notifier: Arc<dyn Notifier>) -> Self {
        let (state_tx, _state_rx) = watch::channel(SearchState::default());
        let controller = Self {
            inner: Arc::new(Inner {
                client,
                notifier,
                state_tx,
                current: Mutex::new(CancellationToken::new()),
            }),
        };
        controller.search("");
        controller
    }

    /// Current view state snapshot / 当前视图状态快照
    pub fn state(&self) -> SearchState {
        self.inner.state_tx.borrow().clone()
    }

    /// Receiver for the rendering layer; every lifecycle event publishes a
    /// wholesale replacement. 渲染层订阅端，每次生命周期事件整体替换。
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.inner.state_tx.subscribe()
    }

    /// Handle a query-text change. Re-entrant; rapid calls are ordered by
    /// cancel-before-replace, so the latest call always wins.
    /// 处理查询文本变更，先取消后替换，保证最后一次调用生效。
    pub fn search(&self, text: impl Into<String>) {
        let text = text.into();

        let token = {
            let mut current = self.inner.current.lock();
            current.cancel();
            let fresh = CancellationToken::new();
            *current = fresh.clone();
            // 进入加载态，保留已有结果避免闪空
            self.inner.state_tx.send_modify(|state| state.is_loading = true);
            fresh
        };

        let inner = self.inner.clone();
        tokio::spawn(async move {
            match inner.client.search(&text, &token).await {
                Ok(results) => {
                    inner.commit(&token, |state| {
                        state.results = results;
                        state.is_loading = false;
                    });
                }
                Err(SearchError::Cancelled) => {
                    // 被新请求取代，静默丢弃，不动任何状态
                    tracing::debug!("search superseded, dropping response (query: {})", text);
                }
                Err(err) => {
                    // 失败：结束加载态但保留旧结果，通知一次
                    if inner.commit(&token, |state| state.is_loading = false) {
                        tracing::error!("search failed: {} (query: {})", err, text);
                        inner.notifier.failure(FAILURE_TITLE, &err.to_string());
                    }
                }
            }
        });
    }

    /// Cancel the in-flight request, if any / 取消在途请求
    pub fn teardown(&self) {
        self.inner.current.lock().cancel();
    }
}

impl Drop for SearchController {
    /// A dropped controller must not leak a background request
    /// 控制器销毁时不得遗留后台请求
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::time::Duration;
    use tokio::sync::watch::Receiver;

    #[derive(Default)]
    struct RecordingNotifier {
        calls: parking_lot::Mutex<Vec<(String, String)>>,
    }

    impl Notifier for RecordingNotifier {
        fn failure(&self, title: &str, message: &str) {
            self.calls.lock().push((title.to_string(), message.to_string()));
        }
    }

    /// Mock search service: per-query delay and failure control
    /// mock搜索服务：按查询内容控制延迟与失败
    async fn demo_handler(Json(body): Json<Value>) -> axum::response::Response {
        let q = body["q"].as_str().unwrap_or("").to_string();
        match q.as_str() {
            "bad" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            "slow" => {
                tokio::time::sleep(Duration::from_secs(5)).await;
                hits_for(&q).into_response()
            }
            "a" => {
                // 让旧查询的响应晚于新查询到达
                tokio::time::sleep(Duration::from_millis(300)).await;
                hits_for(&q).into_response()
            }
            _ => {
                tokio::time::sleep(Duration::from_millis(10)).await;
                hits_for(&q).into_response()
            }
        }
    }

    fn hits_for(q: &str) -> Json<Value> {
        Json(json!({
            "hits": [{
                "title": q,
                "description": "desc",
                "path": "docs/view",
                "type": "Structure",
                "score": "1"
            }],
            "status": "ok"
        }))
    }

    async fn spawn_controller() -> (SearchController, Arc<RecordingNotifier>) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().route("/search", post(demo_handler));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = SearchClient::new(ApiConfig {
            search_endpoint: format!("http://{}/search", addr),
            ..ApiConfig::default()
        })
        .unwrap();
        let notifier = Arc::new(RecordingNotifier::default());
        let controller = SearchController::with_notifier(client, notifier.clone());
        (controller, notifier)
    }

    /// Wait until loading settles, return the settled state / 等待加载结束
    async fn settled(rx: &mut Receiver<SearchState>) -> SearchState {
        loop {
            {
                let state = rx.borrow_and_update();
                if !state.is_loading {
                    return state.clone();
                }
            }
            rx.changed().await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_initialize_loads_empty_query() {
        let (controller, notifier) = spawn_controller().await;
        let mut rx = controller.subscribe();

        let state = settled(&mut rx).await;
        // 初始请求体为 {"q": ""}，mock按原文回显标题
        assert_eq!(state.results.len(), 1);
        assert_eq!(state.results[0].title, "");
        assert!(notifier.calls.lock().is_empty());
    }

    #[tokio::test]
    async fn test_latest_call_wins() {
        let (controller, _notifier) = spawn_controller().await;
        let mut rx = controller.subscribe();
        settled(&mut rx).await;

        // "a"的响应会在"ab"之后到达，但绝不能覆盖"ab"的结果
        controller.search("a");
        controller.search("ab");

        let state = settled(&mut rx).await;
        assert_eq!(state.results[0].title, "ab");

        // 等过了"a"原本的到达时间，状态必须保持不变
        tokio::time::sleep(Duration::from_millis(400)).await;
        let state = controller.state();
        assert_eq!(state.results[0].title, "ab");
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_cancellation_leaves_state_untouched() {
        let (controller, notifier) = spawn_controller().await;
        let mut rx = controller.subscribe();
        let before = settled(&mut rx).await;

        controller.search("slow");
        assert!(controller.state().is_loading);

        controller.teardown();
        tokio::time::sleep(Duration::from_millis(200)).await;

        // 中止不翻转is_loading，也不清空结果，更不通知
        let state = controller.state();
        assert_eq!(state.results, before.results);
        assert!(state.is_loading);
        assert!(notifier.calls.lock().is_empty());
    }

    #[tokio::test]
    async fn test_failure_retains_prior_results_and_notifies_once() {
        let (controller, notifier) = spawn_controller().await;
        let mut rx = controller.subscribe();
        settled(&mut rx).await;

        controller.search("good");
        let state = settled(&mut rx).await;
        assert_eq!(state.results[0].title, "good");

        controller.search("bad");
        let state = settled(&mut rx).await;
        assert!(!state.is_loading);
        assert_eq!(state.results[0].title, "good");

        tokio::time::sleep(Duration::from_millis(100)).await;
        {
            let calls = notifier.calls.lock();
            assert_eq!(calls.len(), 1);
            assert_eq!(calls[0].0, "Could not perform search");
            assert_eq!(calls[0].1, "Internal Server Error");
        }

        // 失败后控制器仍然可用
        controller.search("again");
        let state = settled(&mut rx).await;
        assert_eq!(state.results[0].title, "again");
        assert_eq!(notifier.calls.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_loading_preserves_existing_results() {
        let (controller, _notifier) = spawn_controller().await;
        let mut rx = controller.subscribe();
        settled(&mut rx).await;

        controller.search("first");
        let before = settled(&mut rx).await;

        // 新查询进入加载态时，旧结果仍然可见
        controller.search("slow");
        let state = controller.state();
        assert!(state.is_loading);
        assert_eq!(state.results, before.results);
    }
}
