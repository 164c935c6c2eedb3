//! SwiftOnTap documentation search client / SwiftOnTap 文档搜索客户端
//!
//! Provides a cancellable, race-free [`controller::SearchController`] over the
//! remote search API, publishing a render-ready `{ results, is_loading }` view
//! state to any front-end.
//! 对远端搜索接口提供可取消、无竞态的搜索控制器，向前端发布可直接渲染的视图状态。

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod icons;
pub mod models;
pub mod notify;

pub use client::SearchClient;
pub use config::ApiConfig;
pub use controller::SearchController;
pub use error::SearchError;
pub use models::{SearchResult, SearchState};
