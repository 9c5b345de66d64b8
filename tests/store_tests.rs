mod common;

#[cfg(test)]
pub mod store_tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;
    use tokio::task::JoinSet;

    use super::common::*;

    use coursepress::common::*;
    use coursepress::db::*;
    use coursepress::models::*;
    use coursepress::services::{load_course, CourseCache};

    #[tokio::test]
    async fn test_list_courses_empty_store_success() {
        let scratch = Scratch::new();
        scratch.write_courses("[]");

        let courses = list_courses(&scratch.course_store())
            .await
            .expect("Failed to list courses");

        assert!(courses.is_empty());
    }

    #[tokio::test]
    async fn test_ensure_exists_creates_empty_array() {
        let scratch = Scratch::new();
        let store = CourseStore::new(scratch.dir.path().join("nested/dir/courses.json"));

        store.ensure_exists().await.expect("Failed to create store");

        let raw = std::fs::read_to_string(store.path()).expect("Store file missing");
        assert_eq!(raw.trim(), "[]");
        assert!(list_courses(&store).await.expect("Failed to list").is_empty());
    }

    #[tokio::test]
    async fn test_ensure_exists_keeps_existing_file() {
        let scratch = Scratch::new();
        scratch.seed_courses(&[get_seed_course_intro()]);

        let store = scratch.course_store();
        store.ensure_exists().await.expect("Failed to check store");

        let courses = list_courses(&store).await.expect("Failed to list");
        assert_eq!(courses.len(), 1);
    }

    #[tokio::test]
    async fn test_create_course_on_empty_store_success() {
        let scratch = Scratch::new();
        scratch.write_courses("[]");
        let store = scratch.course_store();

        let course = create_course(&store, draft_titled("Foo"))
            .await
            .expect("Failed to create course");

        assert_eq!(course.id, 1);
        assert_eq!(course.slug, "foo");
        assert_eq!(course.title, "Foo");
        assert_eq!(course.description, "");
        assert_eq!(course.estimated_hours, 0.0);
        assert!(course.lessons.is_empty());
        assert!(!course.featured);
        assert_eq!(course.media, None);

        let courses = list_courses(&store).await.expect("Failed to list");
        assert_eq!(courses, vec![course]);
    }

    #[tokio::test]
    async fn test_create_course_id_is_one_past_max() {
        let scratch = Scratch::new();
        scratch.seed_courses(&[get_seed_course_data(), get_seed_course_intro()]);

        let course = create_course(&scratch.course_store(), draft_titled("Next"))
            .await
            .expect("Failed to create course");

        assert_eq!(course.id, 8);
    }

    #[tokio::test]
    async fn test_create_course_slug_collision_appends_id() {
        let scratch = Scratch::new();
        scratch.seed_courses(&[get_seed_course_intro()]);

        let course = create_course(&scratch.course_store(), draft_titled("Intro"))
            .await
            .expect("Failed to create course");

        assert_eq!(course.id, 4);
        assert_eq!(course.slug, "intro-4");
    }

    #[tokio::test]
    async fn test_create_course_uses_supplied_slug() {
        let scratch = Scratch::new();
        scratch.write_courses("[]");

        let draft = CourseDraft {
            title: Some("Anything".to_string()),
            slug: Some("My Custom Slug".to_string()),
            ..CourseDraft::default()
        };
        let course = create_course(&scratch.course_store(), draft)
            .await
            .expect("Failed to create course");

        assert_eq!(course.slug, "my-custom-slug");
    }

    #[tokio::test]
    async fn test_create_course_without_title_gets_fallback_slug() {
        let scratch = Scratch::new();
        scratch.write_courses("[]");

        let course = create_course(&scratch.course_store(), CourseDraft::default())
            .await
            .expect("Failed to create course");

        assert_eq!(course.id, 1);
        assert_eq!(course.slug, "course-1");
    }

    #[tokio::test]
    async fn test_create_course_twice_gets_distinct_records() {
        let scratch = Scratch::new();
        scratch.write_courses("[]");
        let store = scratch.course_store();

        let first = create_course(&store, draft_titled("Same"))
            .await
            .expect("Failed to create first course");
        let second = create_course(&store, draft_titled("Same"))
            .await
            .expect("Failed to create second course");

        assert_ne!(first.id, second.id);
        assert_ne!(first.slug, second.slug);
        assert_eq!(second.slug, "same-2");
    }

    #[tokio::test]
    async fn test_store_file_is_two_space_indented() {
        let scratch = Scratch::new();
        scratch.write_courses("[]");

        create_course(&scratch.course_store(), draft_titled("Foo"))
            .await
            .expect("Failed to create course");

        let raw = scratch.read_courses_raw();
        assert!(
            raw.starts_with("[\n  {\n    \"id\": 1,"),
            "Unexpected layout:\n{raw}"
        );
    }

    #[tokio::test]
    async fn test_list_courses_fails_on_corrupt_file() {
        let scratch = Scratch::new();
        scratch.write_courses("{ not json");

        let result = list_courses(&scratch.course_store()).await;

        assert!(matches!(result, Err(StoreError::Json(_))));
    }

    #[tokio::test]
    async fn test_create_course_fails_on_corrupt_file_and_leaves_it() {
        let scratch = Scratch::new();
        scratch.write_courses("{ not json");

        let result = create_course(&scratch.course_store(), draft_titled("Foo")).await;

        assert!(matches!(result, Err(StoreError::Json(_))));
        assert_eq!(scratch.read_courses_raw(), "{ not json");
    }

    #[tokio::test]
    async fn test_list_courses_fails_on_missing_file() {
        let scratch = Scratch::new();

        let result = list_courses(&scratch.course_store()).await;

        assert!(matches!(result, Err(StoreError::Io(_))));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_lose_nothing() {
        const WRITERS: usize = 16;

        let scratch = Scratch::new();
        scratch.write_courses("[]");
        let store = Arc::new(scratch.course_store());

        let mut tasks = JoinSet::new();
        for i in 0..WRITERS {
            let store = Arc::clone(&store);
            tasks.spawn(async move { create_course(&store, draft_titled(&format!("Course {i}"))).await });
        }

        let mut ids = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            let course = joined
                .expect("Writer task panicked")
                .expect("Failed to create course");
            ids.push(course.id);
        }

        ids.sort_unstable();
        let expected: Vec<u64> = (1..=WRITERS as u64).collect();
        assert_eq!(ids, expected);

        let stored = list_courses(&store).await.expect("Failed to list");
        assert_eq!(stored.len(), WRITERS);

        let leftovers = std::fs::read_dir(scratch.dir.path())
            .expect("Failed to read dir")
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .count();
        assert_eq!(leftovers, 0, "Temp files left behind");
    }

    #[tokio::test]
    async fn test_get_course_by_slug_sorts_lessons() {
        let scratch = Scratch::new();
        scratch.seed_courses(&[get_seed_course_intro(), get_seed_course_data()]);

        let course = get_course_by_slug(&scratch.course_store(), "intro")
            .await
            .expect("Failed to read course")
            .expect("Course should exist");

        let order: Vec<u32> = course.lessons.iter().map(|l| l.step_order).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_get_course_by_slug_unknown_is_none() {
        let scratch = Scratch::new();
        scratch.seed_courses(&[get_seed_course_intro()]);

        let course = get_course_by_slug(&scratch.course_store(), "missing")
            .await
            .expect("Failed to read course");

        assert_eq!(course, None);
    }

    #[tokio::test]
    async fn test_get_course_by_id_success() {
        let scratch = Scratch::new();
        scratch.seed_courses(&[get_seed_course_intro(), get_seed_course_data()]);

        let course = get_course_by_id(&scratch.course_store(), 7)
            .await
            .expect("Failed to read course");

        assert_eq!(course.map(|c| c.slug), Some("spreadsheet-analysis".to_string()));
    }

    #[tokio::test]
    async fn test_replace_course_success() {
        let scratch = Scratch::new();
        scratch.seed_courses(&[get_seed_course_intro(), get_seed_course_data()]);
        let store = scratch.course_store();

        let replacement = Course {
            id: 999,
            title: "Intro, revised".to_string(),
            slug: "intro-revised".to_string(),
            ..get_seed_course_intro()
        };
        let course = replace_course(&store, 3, replacement)
            .await
            .expect("Failed to replace course");

        assert_eq!(course.id, 3);
        assert_eq!(course.slug, "intro-revised");

        let courses = list_courses(&store).await.expect("Failed to list");
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].title, "Intro, revised");
    }

    #[tokio::test]
    async fn test_replace_course_keeps_own_slug() {
        let scratch = Scratch::new();
        scratch.seed_courses(&[get_seed_course_intro()]);

        let replacement = Course {
            rating: 4.9,
            ..get_seed_course_intro()
        };
        let course = replace_course(&scratch.course_store(), 3, replacement)
            .await
            .expect("Failed to replace course");

        assert_eq!(course.rating, 4.9);
    }

    #[tokio::test]
    async fn test_replace_course_fails_on_unknown_id() {
        let scratch = Scratch::new();
        scratch.seed_courses(&[get_seed_course_intro()]);
        let before = scratch.read_courses_raw();

        let result = replace_course(&scratch.course_store(), 42, get_seed_course_data()).await;

        assert!(matches!(result, Err(StoreError::NotFound(42))));
        assert_eq!(scratch.read_courses_raw(), before);
    }

    #[tokio::test]
    async fn test_replace_course_fails_on_taken_slug() {
        let scratch = Scratch::new();
        scratch.seed_courses(&[get_seed_course_intro(), get_seed_course_data()]);

        let replacement = Course {
            slug: "intro".to_string(),
            ..get_seed_course_data()
        };
        let result = replace_course(&scratch.course_store(), 7, replacement).await;

        assert!(matches!(result, Err(StoreError::SlugTaken(slug)) if slug == "intro"));
    }

    #[tokio::test]
    async fn test_create_article_success() {
        let scratch = Scratch::new();
        scratch.seed_articles(&[get_seed_article(5, "Old", Some((2023, 1, 2)))]);
        let store = scratch.article_store();

        let draft = ArticleDraft {
            title: Some("New".to_string()),
            body: Some("Hello".to_string()),
            ..ArticleDraft::default()
        };
        let article = create_article(&store, draft)
            .await
            .expect("Failed to create article");

        assert_eq!(article.id, 6);
        assert_eq!(article.title, "New");
        assert_eq!(article.date, None);
        assert_eq!(list_articles(&store).await.expect("Failed to list").len(), 2);
    }

    #[tokio::test]
    async fn test_list_articles_newest_first() {
        let scratch = Scratch::new();
        scratch.seed_articles(&[
            get_seed_article(1, "Oldest", Some((2022, 5, 1))),
            get_seed_article(2, "Undated", None),
            get_seed_article(3, "Newest", Some((2024, 3, 18))),
            get_seed_article(4, "Middle", Some((2023, 7, 9))),
        ]);

        let articles = list_articles_newest_first(&scratch.article_store())
            .await
            .expect("Failed to list articles");

        let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Newest", "Middle", "Oldest", "Undated"]);
    }

    #[tokio::test]
    async fn test_get_article_by_id_success() {
        let scratch = Scratch::new();
        scratch.seed_articles(&[get_seed_article(1, "Only", None)]);
        let store = scratch.article_store();

        let found = get_article_by_id(&store, 1).await.expect("Failed to read");
        let missing = get_article_by_id(&store, 2).await.expect("Failed to read");

        assert_eq!(found.map(|a| a.title), Some("Only".to_string()));
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn test_load_course_fills_cache() {
        let scratch = Scratch::new();
        scratch.seed_courses(&[get_seed_course_intro()]);
        let store = scratch.course_store();
        let cache = CourseCache::new();

        let course = load_course(&store, &cache, "intro")
            .await
            .expect("Failed to load course")
            .expect("Course should exist");

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("intro"), Some(course));
    }

    #[tokio::test]
    async fn test_load_course_serves_cached_entry() {
        let scratch = Scratch::new();
        scratch.seed_courses(&[get_seed_course_intro()]);
        let store = scratch.course_store();
        let cache = CourseCache::new();

        load_course(&store, &cache, "intro")
            .await
            .expect("Failed to load course");

        // The cache answers even after the file is gone.
        std::fs::remove_file(scratch.courses_path()).expect("Failed to remove file");
        let course = load_course(&store, &cache, "intro")
            .await
            .expect("Cached read should not touch the store");

        assert_eq!(course.map(|c| c.id), Some(3));
    }

    #[tokio::test]
    async fn test_load_course_unknown_slug_not_cached() {
        let scratch = Scratch::new();
        scratch.seed_courses(&[get_seed_course_intro()]);
        let cache = CourseCache::new();

        let course = load_course(&scratch.course_store(), &cache, "missing")
            .await
            .expect("Failed to load course");

        assert_eq!(course, None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_fill_after_invalidate_is_dropped() {
        let cache = CourseCache::new();
        let seen = cache.generation();

        cache.invalidate_all();

        assert!(!cache.fill(&get_seed_course_intro(), seen));
        assert!(cache.get("intro").is_none());

        assert!(cache.fill(&get_seed_course_intro(), cache.generation()));
        assert!(cache.get("intro").is_some());
    }

    #[test]
    fn test_next_id_success() {
        assert_eq!(next_id([]).expect("Empty collection has ids"), 1);
        assert_eq!(next_id([4, 9, 2]).expect("Ids left"), 10);
    }

    #[test]
    fn test_next_id_fails_at_max() {
        assert!(matches!(next_id([3, u64::MAX]), Err(StoreError::IdsExhausted)));
    }

    #[tokio::test]
    async fn test_create_course_fails_when_ids_exhausted() {
        let scratch = Scratch::new();
        scratch.seed_courses(&[Course {
            id: u64::MAX,
            ..get_seed_course_intro()
        }]);
        let before = scratch.read_courses_raw();

        let result = create_course(&scratch.course_store(), draft_titled("Next")).await;

        assert!(matches!(result, Err(StoreError::IdsExhausted)));
        assert_eq!(scratch.read_courses_raw(), before);
    }

    #[tokio::test]
    async fn test_create_article_fails_when_ids_exhausted() {
        let scratch = Scratch::new();
        scratch.seed_articles(&[get_seed_article(u64::MAX, "Last", None)]);

        let result = create_article(&scratch.article_store(), ArticleDraft::default()).await;

        assert!(matches!(result, Err(StoreError::IdsExhausted)));
    }
}
