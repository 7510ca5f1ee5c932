use helpdesk_bot::{
    bot::{run_dispatcher, setup, teardown, TextStore},
    config::Config,
};

#[tokio::main]
pub async fn main() {
    dotenv::dotenv().ok();
    pretty_env_logger::init();
    log::info!("Starting helpdesk bot...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    let bot = teloxide::Bot::new(&config.bot_token);

    if let Err(err) = setup(&bot, config.dev_id, &config.languages).await {
        log::error!("Failed to set bot commands: {err}");
        std::process::exit(1);
    }

    log::info!("Helpdesk bot started successfully!");

    let texts = TextStore::new(config.languages.clone());
    run_dispatcher(bot.clone(), texts, config.dev_id).await;

    if let Err(err) = teardown(&bot, config.dev_id, &config.languages).await {
        log::error!("Failed to delete bot commands: {err}");
    }
    log::info!("Helpdesk bot stopped.");
}
