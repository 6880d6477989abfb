use teloxide::types::{KeyboardButton, KeyboardMarkup};

pub const LABS: &str = "📚 Лабораторные работы";
pub const LECTURES: &str = "📖 Лекции";
pub const ABOUT: &str = "ℹ️ О курсе";
// Shown in the menu, but no handler answers it.
pub const ASK_TEACHER: &str = "❓ Задать вопрос преподавателю";

pub fn main_menu() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        vec![
            KeyboardButton::new(LABS),
            KeyboardButton::new(LECTURES),
            KeyboardButton::new(ABOUT),
        ],
        vec![KeyboardButton::new(ASK_TEACHER)],
    ])
    .resize_keyboard(true)
    .one_time_keyboard(false)
}
