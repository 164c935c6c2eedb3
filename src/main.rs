//! Terminal front-end / 终端前端
//!
//! Drives the search controller from line input: each line is a query-text
//! change, `:open <n>` opens a result in the system browser.
//! 每输入一行视为一次查询变更，`:open <n>` 在浏览器中打开对应结果。

use std::io::Write as _;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swiftontap_search::client::SearchClient;
use swiftontap_search::config::ApiConfig;
use swiftontap_search::controller::SearchController;
use swiftontap_search::icons;
use swiftontap_search::models::{SearchResult, SearchState};
use swiftontap_search::notify::Notifier;

/// Failure toasts surface on stderr in the terminal front-end
/// 终端前端的失败提示输出到stderr
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn failure(&self, title: &str, message: &str) {
        eprintln!("[!] {}: {}", title, message);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swiftontap_search=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(
        "swiftontap-search {} (built {})",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_TIME")
    );

    let config = ApiConfig::default();
    let client = SearchClient::new(config.clone())?;
    let controller = SearchController::with_notifier(client, Arc::new(StderrNotifier));
    let mut state_rx = controller.subscribe();

    println!("Search SwiftUI views... (:open <n> opens in browser, :quit exits)");

    // 初始为空查询的默认内容
    let mut visible = wait_and_render(&mut state_rx, &config).await;
    prompt();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();

        if line == ":quit" {
            break;
        }

        if let Some(arg) = line.strip_prefix(":open ") {
            open_result(arg, &visible, &config);
            prompt();
            continue;
        }

        controller.search(line);
        visible = wait_and_render(&mut state_rx, &config).await;
        prompt();
    }

    controller.teardown();
    Ok(())
}

/// Wait until loading settles, then render the list / 等待加载结束后渲染列表
async fn wait_and_render(
    state_rx: &mut watch::Receiver<SearchState>,
    config: &ApiConfig,
) -> Vec<SearchResult> {
    let state = loop {
        {
            let state = state_rx.borrow_and_update();
            if !state.is_loading {
                break state.clone();
            }
        }
        if state_rx.changed().await.is_err() {
            return Vec::new();
        }
    };

    println!("Results ({})", state.results.len());
    for (index, result) in state.results.iter().enumerate() {
        println!(
            "{:>3}. [{}] {} - {}",
            index + 1,
            result.entry_type,
            result.title,
            result.description
        );
        println!(
            "     {}  {}",
            config.entry_url(&result.path),
            icons::icon_url(&config.icon_base, &result.entry_type)
        );
    }
    state.results
}

/// Open result n in the system browser / 在系统浏览器中打开第n条结果
fn open_result(arg: &str, visible: &[SearchResult], config: &ApiConfig) {
    match arg.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= visible.len() => {
            let url = config.entry_url(&visible[n - 1].path);
            if let Err(err) = open::that(&url) {
                eprintln!("[!] Could not open browser: {}", err);
            }
        }
        _ => eprintln!("[!] No such result: {}", arg.trim()),
    }
}

fn prompt() {
    print!("> ");
    std::io::stdout().flush().ok();
}
