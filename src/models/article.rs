use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub date: Option<NaiveDate>,
    pub category: String,
    pub image: String,
    pub body: String,
}

impl Article {
    pub fn date_display(&self) -> String {
        self.date
            .map(|d| d.format("%B %-d, %Y").to_string())
            .unwrap_or_default()
    }

    /// Body split on blank lines.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.body
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// First paragraph of the body, used on listing pages.
    pub fn excerpt(&self) -> &str {
        self.paragraphs().first().copied().unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleDraft {
    pub title: Option<String>,
    pub author: Option<String>,
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub body: Option<String>,
}

impl ArticleDraft {
    pub fn into_article(self, id: u64) -> Article {
        Article {
            id,
            title: self.title.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
            date: self.date,
            category: self.category.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
            body: self.body.unwrap_or_default(),
        }
    }
}
