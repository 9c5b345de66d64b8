use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Creator {
    pub id: u64,
    pub slug: String,
    pub name: String,
    pub avatar: String,
    pub bio: String,
    pub niche: String,
    pub followers: u64,
    #[serde(rename = "totalStudents")]
    pub total_students: u64,
    pub rating: f64,
}

/// What to attach to a course that does not name its creator.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreatorFallback {
    /// Attach the first creator in the directory.
    First,
    /// Attach nothing.
    None,
}

impl CreatorFallback {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::None => "none",
        }
    }
}

impl Default for CreatorFallback {
    fn default() -> Self {
        Self::First
    }
}

impl std::fmt::Display for CreatorFallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CreatorFallback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first" => Ok(Self::First),
            "none" => Ok(Self::None),
            _ => Err(format!("invalid creator fallback: {}", s)),
        }
    }
}
