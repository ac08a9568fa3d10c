use std::path::PathBuf;
use std::sync::OnceLock;

static ROOT_DIR: OnceLock<PathBuf> = OnceLock::new();

/// # Summary
/// 设置基础数据库文件的根目录，进程内只生效一次。
///
/// # Logic
/// 首次调用写入全局静态变量；之后的调用不改变既有配置。
///
/// # Arguments
/// * `path` - `refdata.db` 所在的目录。
pub fn set_root_dir(path: PathBuf) {
    if ROOT_DIR.set(path).is_err() {
        tracing::debug!("Root dir already configured, keeping existing value");
    }
}

/// # Summary
/// 读取当前数据根目录，未配置时回退到相对目录 "data"。
pub(crate) fn get_root_dir() -> PathBuf {
    ROOT_DIR
        .get()
        .cloned()
        .unwrap_or_else(|| PathBuf::from("data"))
}
