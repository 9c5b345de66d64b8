use crate::models::{Course, Creator, CreatorFallback};

/// In-memory creator records with an explicit course -> creator lookup.
#[derive(Debug, Clone)]
pub struct CreatorDirectory {
    creators: Vec<Creator>,
    fallback: CreatorFallback,
}

impl CreatorDirectory {
    pub fn new(creators: Vec<Creator>, fallback: CreatorFallback) -> Self {
        Self { creators, fallback }
    }

    /// The directory the site ships with.
    pub fn builtin(fallback: CreatorFallback) -> Self {
        Self::new(vec![builtin_creator()], fallback)
    }

    pub fn fallback(&self) -> CreatorFallback {
        self.fallback
    }

    pub fn all(&self) -> &[Creator] {
        &self.creators
    }

    pub fn by_id(&self, id: u64) -> Option<&Creator> {
        self.creators.iter().find(|c| c.id == id)
    }

    pub fn by_slug(&self, slug: &str) -> Option<&Creator> {
        self.creators.iter().find(|c| c.slug == slug)
    }

    /// Resolves `course.creator_id`. A course without one gets whatever the
    /// fallback policy says; a course naming an unknown creator gets nothing.
    pub fn creator_for(&self, course: &Course) -> Option<&Creator> {
        match course.creator_id {
            Some(id) => self.by_id(id),
            None => match self.fallback {
                CreatorFallback::First => self.creators.first(),
                CreatorFallback::None => None,
            },
        }
    }
}

fn builtin_creator() -> Creator {
    Creator {
        id: 1,
        slug: "ada-park".to_string(),
        name: "Ada Park".to_string(),
        avatar: "/static/img/creators/ada-park.jpg".to_string(),
        bio: "Software engineer and instructor. Ten years of building web platforms, \
              five of teaching people to build their own."
            .to_string(),
        niche: "Web development".to_string(),
        followers: 12_400,
        total_students: 38_900,
        rating: 4.8,
    }
}
