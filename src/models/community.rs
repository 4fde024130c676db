//! Community posts, comments and the category filter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostCategory {
    #[default]
    General,
    Anxiety,
    Depression,
    Support,
    Success,
    Mindfulness,
}

impl PostCategory {
    pub const ALL: [PostCategory; 6] = [
        PostCategory::General,
        PostCategory::Anxiety,
        PostCategory::Depression,
        PostCategory::Support,
        PostCategory::Success,
        PostCategory::Mindfulness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostCategory::General => "general",
            PostCategory::Anxiety => "anxiety",
            PostCategory::Depression => "depression",
            PostCategory::Support => "support",
            PostCategory::Success => "success",
            PostCategory::Mindfulness => "mindfulness",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PostCategory::General => "General",
            PostCategory::Anxiety => "Anxiety",
            PostCategory::Depression => "Depression",
            PostCategory::Support => "Support",
            PostCategory::Success => "Success stories",
            PostCategory::Mindfulness => "Mindfulness",
        }
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub author_name: Option<String>,
    pub content: String,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPost {
    pub id: String,
    #[serde(default)]
    pub author_name: Option<String>,
    pub content: String,
    #[serde(default)]
    pub category: PostCategory,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl CommunityPost {
    /// Author shown in the feed.
    pub fn author(&self) -> &str {
        if self.is_anonymous {
            "Anonymous"
        } else {
            self.author_name.as_deref().unwrap_or("Member")
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub content: String,
    pub category: PostCategory,
    pub is_anonymous: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub content: String,
    pub is_anonymous: bool,
}

/// Which posts the feed shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(PostCategory),
}

impl CategoryFilter {
    pub fn matches(&self, post: &CommunityPost) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => post.category == *category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// All → first category → … → last category → All.
    pub fn next(&self) -> Self {
        match self {
            CategoryFilter::All => CategoryFilter::Only(PostCategory::ALL[0]),
            CategoryFilter::Only(category) => {
                let idx = PostCategory::ALL
                    .iter()
                    .position(|c| c == category)
                    .unwrap_or(0);
                PostCategory::ALL
                    .get(idx + 1)
                    .map(|c| CategoryFilter::Only(*c))
                    .unwrap_or(CategoryFilter::All)
            }
        }
    }

    /// Query value for `GET /community/posts`.
    pub fn as_query(&self) -> Option<&'static str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(category) => Some(category.as_str()),
        }
    }
}

/// Posts visible under `filter`, in their original order.
pub fn filter_posts<'a>(posts: &'a [CommunityPost], filter: CategoryFilter) -> Vec<&'a CommunityPost> {
    posts.iter().filter(|p| filter.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, category: PostCategory) -> CommunityPost {
        CommunityPost {
            id: id.to_string(),
            author_name: Some("Lee".to_string()),
            content: "hello".to_string(),
            category,
            is_anonymous: false,
            likes: 0,
            comments: vec![],
            created_at: None,
        }
    }

    #[test]
    fn test_filter_iff_all_or_same_category() {
        let posts: Vec<CommunityPost> = PostCategory::ALL
            .iter()
            .enumerate()
            .map(|(i, c)| post(&format!("p{i}"), *c))
            .collect();

        assert_eq!(filter_posts(&posts, CategoryFilter::All).len(), posts.len());

        for category in PostCategory::ALL {
            let filter = CategoryFilter::Only(category);
            let visible = filter_posts(&posts, filter);
            for p in &posts {
                let shown = visible.iter().any(|v| v.id == p.id);
                assert_eq!(shown, p.category == category);
            }
        }
    }

    #[test]
    fn test_filter_cycle_visits_every_category() {
        let mut filter = CategoryFilter::All;
        let mut seen = Vec::new();
        loop {
            filter = filter.next();
            if filter == CategoryFilter::All {
                break;
            }
            seen.push(filter);
        }
        assert_eq!(seen.len(), PostCategory::ALL.len());
    }

    #[test]
    fn test_anonymous_author() {
        let mut p = post("p1", PostCategory::Support);
        assert_eq!(p.author(), "Lee");
        p.is_anonymous = true;
        assert_eq!(p.author(), "Anonymous");
    }
}
