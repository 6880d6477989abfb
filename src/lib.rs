pub mod catalogue;
mod cmd;
pub mod config;
pub mod handler;
mod util;

use std::sync::Arc;

use cmd::Command;
use spdlog::prelude::*;
use teloxide::{
    dispatching::UpdateHandler,
    prelude::*,
    types::{Me, Update, UserId},
    utils::command::BotCommands,
    RequestError,
};

use crate::{catalogue::Catalogues, config::Config, handler::Responder};

pub struct InstanceState {
    pub responder: Responder,
    pub admin_id: UserId,
}

impl InstanceState {
    fn new(config: &Config) -> anyhow::Result<Arc<Self>> {
        let catalogues = match &config.catalogue_path {
            None => Catalogues::builtin()?,
            Some(path) => {
                info!("loading catalogue from '{}'", path.display());
                Catalogues::from_json_file(path).map_err(|err| {
                    anyhow::anyhow!("failed to load catalogue '{}': {err}", path.display())
                })?
            }
        };

        info!(
            "catalogue loaded. {} lectures, {} labs",
            catalogues.lectures.len(),
            catalogues.labs.len()
        );

        Ok(Arc::new(Self {
            responder: Responder::new(catalogues),
            admin_id: config.admin_id,
        }))
    }
}

pub async fn run(config: Config) -> anyhow::Result<()> {
    let inst_state = InstanceState::new(&config)?;
    info!("admin id '{}' accepted", inst_state.admin_id);

    let bot = Bot::new(config.bot_token);
    bot.set_my_commands(Command::bot_commands()).await?;

    let mut dispatcher = Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![inst_state])
        .default_handler(|upd: Arc<Update>| async move {
            debug!("ignored update '{:?}'", upd.id);
        })
        .error_handler(Arc::new(|err: RequestError| async move {
            error!("failed to deliver reply: {err}");
        }))
        .enable_ctrlc_handler()
        .build();

    info!("polling for updates");
    dispatcher.dispatch().await;
    info!("polling stopped");

    Ok(())
}

fn schema() -> UpdateHandler<RequestError> {
    Update::filter_message().endpoint(on_message)
}

async fn on_message(
    state: Arc<InstanceState>,
    bot: Bot,
    me: Me,
    msg: Message,
) -> Result<(), RequestError> {
    handler::handle(handler::Request::new(state, bot, me, msg)).await
}
