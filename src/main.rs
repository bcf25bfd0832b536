use anyhow::Result;
use taskdeck::config::Config;
use taskdeck::logger::Logger;
use taskdeck::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let mut start_path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--generate-config" => {
                let path = Config::get_default_config_path()?;
                Config::generate_default_config(&path)?;
                return Ok(());
            }
            "-h" | "--help" => {
                println!("Usage: taskdeck [--generate-config] [PATH]");
                return Ok(());
            }
            path => start_path = Some(path.to_string()),
        }
    }

    let config = Config::load()?;
    config.validate()?;

    let logger = Logger::new();
    logger.install(&config.logging)?;
    log::info!("Starting taskdeck");

    ui::run_app(config, logger, start_path).await
}
