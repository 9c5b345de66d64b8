use crate::common::StoreError;
use crate::models::{Article, ArticleDraft};

use super::json_store::{next_id, JsonStore};

pub type ArticleStore = JsonStore<Article>;

pub async fn list_articles(store: &ArticleStore) -> Result<Vec<Article>, StoreError> {
    store.load().await
}

/// Articles ordered newest first; undated ones go last, by id descending.
pub async fn list_articles_newest_first(store: &ArticleStore) -> Result<Vec<Article>, StoreError> {
    let mut articles = store.load().await?;
    articles.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    Ok(articles)
}

pub async fn get_article_by_id(store: &ArticleStore, id: u64) -> Result<Option<Article>, StoreError> {
    let articles = store.load().await?;
    Ok(articles.into_iter().find(|a| a.id == id))
}

pub async fn create_article(store: &ArticleStore, draft: ArticleDraft) -> Result<Article, StoreError> {
    store
        .mutate(move |articles| {
            let id = next_id(articles.iter().map(|a| a.id))?;
            let article = draft.into_article(id);
            articles.push(article.clone());
            Ok(article)
        })
        .await
}
