use const_format::concatcp;

use crate::{
    handler::Response,
    util::text::{COURSE_TITLE, INSTITUTE},
};

// Sent as plain text, the asterisks are shown literally.
pub const ABOUT: &str = concatcp!(
    "📌 *Курс: ",
    COURSE_TITLE,
    "*\n\n",
    "Этот курс создан специально для студентов ",
    INSTITUTE,
    ".\n\n",
    "📖 *Автор курса*: к.т.н., доцент кафедры ИСТ Мозохин Александр Евгеньевич.\n\n",
    "📚 В рамках курса студенты изучат методы разработки ПО, командную работу, тестирование, \
     CI/CD, а также научатся разрабатывать и отлаживать программные продукты с использованием \
     современных инструментов."
);

pub fn handle<'a>() -> Response<'a> {
    Response::new_msg(ABOUT)
}
