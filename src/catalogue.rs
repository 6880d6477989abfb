use std::{collections::HashSet, fs, path::Path};

use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

use crate::util::text::is_number;

const LECTURES: &[(&str, &str, &str)] = &[
    (
        "1",
        "Введение в технологии программирования",
        "https://example.com/lecture1.pdf",
    ),
    (
        "2",
        "Жизненный цикл разработки ПО",
        "https://example.com/lecture2.pdf",
    ),
    (
        "3",
        "Парадигмы программирования",
        "https://example.com/lecture3.pdf",
    ),
    (
        "4",
        "Основы командной разработки",
        "https://example.com/lecture4.pdf",
    ),
    (
        "5",
        "Инструменты командной работы",
        "https://example.com/lecture5.pdf",
    ),
    (
        "6",
        "Обеспечение качества ПО",
        "https://example.com/lecture6.pdf",
    ),
    ("7", "Тестирование ПО", "https://example.com/lecture7.pdf"),
    (
        "8",
        "Отладка и автоматизация тестирования",
        "https://example.com/lecture8.pdf",
    ),
];

const LABS: &[(&str, &str, &str)] = &[
    (
        "1",
        "Основы работы с Git и GitHub",
        "https://drive.google.com/file/d/xxx/view",
    ),
    (
        "2",
        "Совместная работа в GitHub (форки, pull request)",
        "https://drive.google.com/file/d/yyy/view",
    ),
    (
        "3",
        "Гибкие методологии Scrum и Kanban",
        "https://github.com/example/lab3.pdf",
    ),
    (
        "4",
        "Код-стиль и оформление кода",
        "https://example.com/lab4.pdf",
    ),
    (
        "5",
        "Тестирование программного кода",
        "https://example.com/lab5.pdf",
    ),
    ("6", "CI/CD в разработке", "https://example.com/lab6.pdf"),
    ("7", "Отладка кода", "https://example.com/lab7.pdf"),
    (
        "8",
        "Финальный проект и презентация",
        "https://example.com/lab8.pdf",
    ),
];

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("entry id '{0}' is not a number")]
    InvalidId(String),
    #[error("duplicate entry id '{0}'")]
    DuplicateId(String),
    #[error("entry '{id}' has an invalid url '{url}': {reason}")]
    InvalidUrl {
        id: String,
        url: String,
        reason: String,
    },
    #[error("failed to read catalogue file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalogue file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueEntry {
    pub id: String,
    pub title: String,
    // Kept as written, `Url` normalises host case and trailing slashes.
    pub url: String,
}

/// Read-only mapping from a short numeric id to a titled link.
///
/// Entries keep their declaration order, which is the order listings use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    entries: Vec<CatalogueEntry>,
}

impl Catalogue {
    pub fn new<I, S>(entries: I) -> Result<Self, CatalogueError>
    where
        I: IntoIterator<Item = (S, S, S)>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let entries = entries
            .into_iter()
            .map(|(id, title, url)| {
                let (id, title, url): (String, String, String) =
                    (id.into(), title.into(), url.into());

                if !is_number(&id) {
                    return Err(CatalogueError::InvalidId(id));
                }
                if !seen.insert(id.clone()) {
                    return Err(CatalogueError::DuplicateId(id));
                }
                if let Err(err) = Url::parse(&url) {
                    return Err(CatalogueError::InvalidUrl {
                        id,
                        url,
                        reason: err.to_string(),
                    });
                }

                Ok(CatalogueEntry { id, title, url })
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { entries })
    }

    pub fn lectures() -> Result<Self, CatalogueError> {
        Self::new(LECTURES.iter().copied())
    }

    pub fn labs() -> Result<Self, CatalogueError> {
        Self::new(LABS.iter().copied())
    }

    pub fn get(&self, id: impl AsRef<str>) -> Option<&CatalogueEntry> {
        let id = id.as_ref();
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogueEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Deserialize)]
struct RawEntry {
    id: String,
    title: String,
    url: String,
}

#[derive(Deserialize)]
struct RawCatalogues {
    lectures: Vec<RawEntry>,
    #[serde(default)]
    labs: Vec<RawEntry>,
}

#[derive(Debug, Clone)]
pub struct Catalogues {
    pub lectures: Catalogue,
    pub labs: Catalogue,
}

impl Catalogues {
    pub fn builtin() -> Result<Self, CatalogueError> {
        Ok(Self {
            lectures: Catalogue::lectures()?,
            labs: Catalogue::labs()?,
        })
    }

    pub fn from_json(data: impl AsRef<str>) -> Result<Self, CatalogueError> {
        let raw: RawCatalogues = serde_json::from_str(data.as_ref())?;
        let convert = |entries: Vec<RawEntry>| {
            Catalogue::new(entries.into_iter().map(|e| (e.id, e.title, e.url)))
        };

        Ok(Self {
            lectures: convert(raw.lectures)?,
            labs: convert(raw.labs)?,
        })
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogueError> {
        Self::from_json(fs::read_to_string(path)?)
    }
}
