mod about;
mod labs;
mod lectures;
mod start;

use std::{borrow::Cow, sync::Arc};

use spdlog::prelude::*;
use teloxide::{
    prelude::*,
    types::{KeyboardMarkup, Me},
};

use crate::{
    catalogue::Catalogues,
    util::{keyboard, text::is_number},
    InstanceState,
};

pub struct Request {
    state: Arc<InstanceState>,
    bot: Bot,
    me: Me,
    msg: Message,
}

impl Request {
    pub fn new(state: Arc<InstanceState>, bot: Bot, me: Me, msg: Message) -> Self {
        Self {
            state,
            bot,
            me,
            msg,
        }
    }
}

pub enum ResponseKind<'a> {
    Nothing,
    NewMsg(Cow<'a, str>),
}

pub struct Response<'a> {
    kind: ResponseKind<'a>,
    keyboard: Option<&'a KeyboardMarkup>,
}

impl<'a> Response<'a> {
    pub fn nothing() -> Self {
        Self {
            kind: ResponseKind::Nothing,
            keyboard: None,
        }
    }

    pub fn new_msg(text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            kind: ResponseKind::NewMsg(text.into()),
            keyboard: None,
        }
    }

    pub fn with_keyboard(mut self, keyboard: &'a KeyboardMarkup) -> Self {
        self.keyboard = Some(keyboard);
        self
    }

    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            ResponseKind::Nothing => None,
            ResponseKind::NewMsg(text) => Some(&**text),
        }
    }

    pub fn keyboard(&self) -> Option<&KeyboardMarkup> {
        self.keyboard
    }
}

/// Maps the text of one incoming message to at most one reply.
///
/// Holds nothing but read-only data, so a single instance is shared by every chat.
pub struct Responder {
    catalogues: Catalogues,
    menu: KeyboardMarkup,
}

impl Responder {
    pub fn new(catalogues: Catalogues) -> Self {
        Self {
            catalogues,
            menu: keyboard::main_menu(),
        }
    }

    #[cfg(test)]
    fn catalogues(&self) -> &Catalogues {
        &self.catalogues
    }

    // First match wins, the order of the arms matters.
    pub fn handle(&self, text: &str, bot_username: &str) -> Response<'_> {
        if start::is_start(text, bot_username) {
            return start::handle(&self.menu);
        }

        match text {
            keyboard::LECTURES => lectures::list(&self.catalogues.lectures),
            keyboard::LABS => labs::list(&self.catalogues.labs),
            _ if is_number(text) => lectures::lookup(&self.catalogues.lectures, text),
            keyboard::ABOUT => about::handle(),
            _ => Response::nothing(),
        }
    }
}

pub async fn handle(req: Request) -> Result<(), teloxide::RequestError> {
    let msg = &req.msg;

    trace!(
        "new message. chat id '{}', msg id '{}'",
        msg.chat.id,
        msg.id
    );

    let Some(text) = msg.text() else {
        return Ok(());
    };

    let resp = req.state.responder.handle(text, req.me.username());
    let text = match resp.kind {
        ResponseKind::Nothing => return Ok(()),
        ResponseKind::NewMsg(text) => text,
    };

    let mut send = req.bot.send_message(msg.chat.id, text);
    if let Some(keyboard) = resp.keyboard {
        send = send.reply_markup(keyboard.clone());
    }
    send.await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Catalogue;

    const BOT_NAME: &str = "trpo_course_bot";

    fn responder() -> Responder {
        Responder::new(Catalogues::builtin().unwrap())
    }

    #[test]
    fn start() {
        let responder = responder();

        for input in ["/start", "/start@trpo_course_bot"] {
            let resp = responder.handle(input, BOT_NAME);
            assert_eq!(resp.text(), Some(start::WELCOME));
            assert_eq!(resp.keyboard(), Some(&keyboard::main_menu()));
        }

        for input in ["/start now", "/start@other_bot", "start", "/stop"] {
            assert!(responder.handle(input, BOT_NAME).text().is_none(), "{input}");
        }
    }

    #[test]
    fn start_ignores_history() {
        let responder = responder();
        let first = responder.handle("/start", BOT_NAME).text().map(str::to_owned);

        responder.handle(keyboard::LECTURES, BOT_NAME);
        responder.handle("3", BOT_NAME);
        responder.handle("99", BOT_NAME);

        assert_eq!(
            responder.handle("/start", BOT_NAME).text().map(str::to_owned),
            first
        );
    }

    #[test]
    fn lecture_listing() {
        let responder = responder();
        let resp = responder.handle(keyboard::LECTURES, BOT_NAME);
        assert!(resp.keyboard().is_none());

        let text = resp.text().unwrap();
        assert!(text.starts_with("Вот список доступных лекций:\n\n"));
        assert!(text.ends_with("\n\nВведите номер лекции для получения ссылки."));

        let lines: Vec<_> = text.lines().filter(|l| l.starts_with("🎓 ")).collect();
        let expected: Vec<_> = responder
            .catalogues()
            .lectures
            .iter()
            .map(|e| format!("🎓 Лекция {}: {} - {}", e.id, e.title, e.url))
            .collect();
        assert_eq!(lines, expected);
        assert_eq!(lines[0], "🎓 Лекция 1: Введение в технологии программирования - https://example.com/lecture1.pdf");
    }

    #[test]
    fn lecture_lookup() {
        let responder = responder();

        for entry in responder.catalogues().lectures.iter() {
            let resp = responder.handle(&entry.id, BOT_NAME);
            assert_eq!(
                resp.text().unwrap(),
                format!("📖 Лекция {}: {} - {}", entry.id, entry.title, entry.url)
            );
            assert!(resp.keyboard().is_none());
        }
    }

    #[test]
    fn lecture_miss() {
        let responder = responder();

        for input in ["99", "0", "01", "9"] {
            assert_eq!(
                responder.handle(input, BOT_NAME).text(),
                Some(lectures::NOT_FOUND),
                "{input}"
            );
        }
    }

    #[test]
    fn lecture_miss_message_is_fixed() {
        let catalogues = Catalogues {
            lectures: Catalogue::new([("1", "Единственная", "https://example.com/1")]).unwrap(),
            labs: Catalogue::labs().unwrap(),
        };
        let responder = Responder::new(catalogues);

        assert_eq!(
            responder.handle("2", BOT_NAME).text(),
            Some("⚠️ Такой лекции нет. Попробуйте ввести номер от 1 до 8.")
        );
        assert_eq!(
            responder.handle("1", BOT_NAME).text(),
            Some("📖 Лекция 1: Единственная - https://example.com/1")
        );
    }

    #[test]
    fn links_are_sent_as_written() {
        let catalogues = Catalogues {
            lectures: Catalogue::new([("1", "T", "https://Example.com")]).unwrap(),
            labs: Catalogue::new([("1", "L", "https://Example.com/Lab One")]).unwrap(),
        };
        let responder = Responder::new(catalogues);

        assert_eq!(
            responder.handle("1", BOT_NAME).text(),
            Some("📖 Лекция 1: T - https://Example.com")
        );
        assert!(responder
            .handle(keyboard::LECTURES, BOT_NAME)
            .text()
            .unwrap()
            .contains("🎓 Лекция 1: T - https://Example.com\n"));
        assert!(responder
            .handle(keyboard::LABS, BOT_NAME)
            .text()
            .unwrap()
            .ends_with("🔬 Лабораторная 1: L - https://Example.com/Lab One"));
    }

    #[test]
    fn digits_never_reach_labs() {
        let catalogues = Catalogues {
            lectures: Catalogue::new([("1", "Лекция", "https://example.com/l1")]).unwrap(),
            labs: Catalogue::new([("2", "Лаба", "https://example.com/lab2")]).unwrap(),
        };
        let responder = Responder::new(catalogues);

        assert_eq!(
            responder.handle("2", BOT_NAME).text(),
            Some(lectures::NOT_FOUND)
        );
    }

    #[test]
    fn lab_listing() {
        let responder = responder();
        let text = responder
            .handle(keyboard::LABS, BOT_NAME)
            .text()
            .unwrap()
            .to_owned();

        let lines: Vec<_> = text.lines().filter(|l| l.starts_with("🔬 ")).collect();
        assert_eq!(lines.len(), responder.catalogues().labs.len());
        assert_eq!(
            lines[0],
            "🔬 Лабораторная 1: Основы работы с Git и GitHub - https://drive.google.com/file/d/xxx/view"
        );
    }

    #[test]
    fn about() {
        let responder = responder();
        let first = responder.handle(keyboard::ABOUT, BOT_NAME);
        assert_eq!(first.text(), Some(about::ABOUT));
        assert!(first.keyboard().is_none());

        responder.handle("/start", BOT_NAME);
        assert_eq!(
            responder.handle(keyboard::ABOUT, BOT_NAME).text(),
            Some(about::ABOUT)
        );
    }

    #[test]
    fn unmatched() {
        let responder = responder();

        for input in [
            "hello",
            "",
            "12a",
            " 1",
            "1 ",
            "١٢",
            "📖 лекции",
            keyboard::ASK_TEACHER,
        ] {
            assert!(responder.handle(input, BOT_NAME).text().is_none(), "{input:?}");
        }
    }

    #[test]
    fn idempotent() {
        let responder = responder();

        for input in [
            "/start",
            keyboard::LECTURES,
            keyboard::LABS,
            keyboard::ABOUT,
            "4",
            "42",
            "hello",
        ] {
            let first = responder.handle(input, BOT_NAME);
            let second = responder.handle(input, BOT_NAME);
            assert_eq!(first.text(), second.text());
            assert_eq!(first.keyboard(), second.keyboard());
        }
    }
}
