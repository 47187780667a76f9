//! Вспомогательные функции логирования
//!
//! Инициализация подписчика tracing и форматированные сообщения о ходе работы

use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::models::OrderInfo;

/// Инициализирует вывод логов
///
/// `RUST_LOG` имеет приоритет; иначе уровень `info`, при `verbose` уровень `debug`.
/// Повторный вызов ничего не делает.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Записывает информацию о запуске
pub fn log_startup(order_number: &str, label_type: &str, packages: u32) {
    info!("{}", "=".repeat(60));
    info!("🚀 Печать этикеток - заказ № {}", order_number);
    info!("🏷️ Тип этикетки: {} | упаковок: {}", label_type, packages);
    info!("{}", "=".repeat(60));
}

/// Выводит извлечённую информацию о заказе построчно
pub fn log_order_summary(info: &OrderInfo) {
    for line in info.format_output().lines() {
        info!("{}", line);
    }
}

/// Сообщает, куда сохранён лист
pub fn log_labels_saved(count: u32, path: &Path) {
    info!("{}", "─".repeat(60));
    info!(
        "💾 Сохранено этикеток: {} -> {} ({})",
        count,
        path.display(),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "─".repeat(60));
}

/// Обрезает длинный текст для вывода в лог
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
