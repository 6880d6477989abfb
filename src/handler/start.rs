use const_format::concatcp;
use teloxide::{types::KeyboardMarkup, utils::command::BotCommands};

use crate::{
    cmd::Command,
    handler::Response,
    util::text::{COURSE_TITLE, INSTITUTE},
};

pub const WELCOME: &str = concatcp!(
    "👋 Добро пожаловать в Telegram-бот курса '",
    COURSE_TITLE,
    "' (ТРПО) ",
    INSTITUTE,
    "! 🎓\n\n",
    "Этот курс разработан специально для студентов, чтобы освоить современные технологии \
     командной разработки ПО, контроль версий, тестирование, CI/CD и другие важные аспекты \
     программной инженерии.\n\n",
    "Выберите нужную опцию в меню ниже. 👇"
);

/// `/start` or `/start@<bot_username>`, with no arguments.
pub fn is_start(text: &str, bot_username: &str) -> bool {
    let no_args = text.split_whitespace().count() == 1;
    no_args && matches!(Command::parse(text, bot_username), Ok(Command::Start))
}

pub fn handle(menu: &KeyboardMarkup) -> Response<'_> {
    Response::new_msg(WELCOME).with_keyboard(menu)
}
