use chrono::Utc;

fn main() {
    // Embed build time for the startup log / 嵌入构建时间用于启动日志
    let build_time = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    println!("cargo:rerun-if-changed=build.rs");
}
