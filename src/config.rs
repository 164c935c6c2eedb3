//! Endpoint configuration / 接口配置
//!
//! Fixed production hosts by default; no config file, no environment
//! variables. The struct exists so tests can point the client at a local
//! mock service. 默认指向生产环境，测试时可替换为本地mock服务。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Search endpoint / 搜索接口地址
    pub search_endpoint: String,
    /// Documentation site base for open-in-browser links / 文档站点根地址
    pub site_base: String,
    /// Symbol icon asset base / 符号图标资源根地址
    pub icon_base: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            search_endpoint: "https://api.swiftontap.com/search".to_string(),
            site_base: "https://swiftontap.com/".to_string(),
            icon_base: "https://swiftontap.com/assets/images/symbol-icons/".to_string(),
        }
    }
}

impl ApiConfig {
    /// Browser URL for a documentation entry path / 文档条目对应的浏览器链接
    pub fn entry_url(&self, path: &str) -> String {
        format!("{}{}", self.site_base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_url() {
        let config = ApiConfig::default();
        assert_eq!(config.entry_url("docs/view"), "https://swiftontap.com/docs/view");
    }
}
