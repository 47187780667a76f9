use anyhow::Result;
use order_labels::utils::logging;
use order_labels::{App, Config, LabelJob};

fn main() -> Result<()> {
    // Загрузка конфигурации
    let config = Config::load()?;

    // Инициализация логов
    logging::init(config.verbose_logging);

    let job = LabelJob::from_args(std::env::args().skip(1))?;

    // Печать этикеток
    if App::new(config).run(&job)?.is_none() {
        std::process::exit(1);
    }

    Ok(())
}
