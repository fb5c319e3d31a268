use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use anyhow::{Context, Result};

/// グローバルな詳細ログフラグ
pub static VERBOSE_LOGGING: AtomicBool = AtomicBool::new(false);

/// ログ出力先（None なら標準エラー）
static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

/// 経過時間の基準点
static LOG_EPOCH: OnceLock<Instant> = OnceLock::new();

/// ログファイルを開き、以降の出力先にする
pub fn init_log_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("ログファイルを開けません: {}", path.display()))?;

    if let Ok(mut log_file) = LOG_FILE.lock() {
        *log_file = Some(file);
    }
    Ok(())
}

/// ログファイルを閉じて標準エラーに戻す
pub fn close_log_file() {
    if let Ok(mut log_file) = LOG_FILE.lock() {
        if let Some(mut file) = log_file.take() {
            let _ = file.flush();
        }
    }
}

/// 経過ミリ秒を付けて1行書き込む
pub fn write_log(message: String) {
    let elapsed = LOG_EPOCH.get_or_init(Instant::now).elapsed();
    let line = format!("[{:>8.3}s] {}", elapsed.as_secs_f64(), message);
    if let Ok(mut log_file) = LOG_FILE.lock() {
        match log_file.as_mut() {
            Some(file) => {
                let _ = writeln!(file, "{}", line);
                let _ = file.flush();
            }
            None => eprintln!("{}", line),
        }
    }
}

/// 詳細ログを有効にする
pub fn enable_verbose_logging() {
    LOG_EPOCH.get_or_init(Instant::now);
    VERBOSE_LOGGING.store(true, Ordering::Relaxed);
}

/// 詳細ログを無効にする
pub fn disable_verbose_logging() {
    VERBOSE_LOGGING.store(false, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE_LOGGING.load(Ordering::Relaxed)
}

/// 詳細ログ出力マクロ
#[macro_export]
macro_rules! vlog {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            let message = format!($($arg)*);
            $crate::logging::write_log(message);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    // グローバル状態を触るので1テストにまとめる
    #[test]
    fn verbose_log_goes_to_file() {
        let path = std::env::temp_dir().join(format!("fibogrid-log-{}.txt", std::process::id()));
        init_log_file(&path).unwrap();

        crate::vlog!("出力されない");
        enable_verbose_logging();
        assert!(is_verbose());
        crate::vlog!("手を適用: version={}", 3);
        disable_verbose_logging();
        assert!(!is_verbose());
        close_log_file();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("手を適用: version=3"));
        assert!(!text.contains("出力されない"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn init_fails_for_missing_directory() {
        let path = std::env::temp_dir().join("fibogrid-no-such-dir").join("log.txt");
        assert!(init_log_file(path).is_err());
    }
}
