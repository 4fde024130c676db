use super::{encode_component, ApiClient};
use crate::error::ApiResult;
use crate::models::{CategoryFilter, Comment, CommunityPost, NewComment, NewPost};

impl ApiClient {
    /// `GET /community/posts[?category=c]`
    pub async fn community_posts(&self, filter: CategoryFilter) -> ApiResult<Vec<CommunityPost>> {
        let path = match filter.as_query() {
            Some(category) => format!("/community/posts?category={}", encode_component(category)),
            None => "/community/posts".to_string(),
        };
        self.get_json(&path).await
    }

    /// `POST /community/posts`
    pub async fn create_post(&self, post: &NewPost) -> ApiResult<CommunityPost> {
        self.post_json("/community/posts", post).await
    }

    /// `POST /community/posts/{id}/like`
    ///
    /// The response body is ignored; callers bump their local count.
    pub async fn like_post(&self, post_id: &str) -> ApiResult<()> {
        let path = format!("/community/posts/{}/like", encode_component(post_id));
        self.post_unit(&path, &serde_json::json!({})).await
    }

    /// `POST /community/posts/{id}/comments`
    pub async fn add_comment(&self, post_id: &str, comment: &NewComment) -> ApiResult<Comment> {
        let path = format!("/community/posts/{}/comments", encode_component(post_id));
        self.post_json(&path, comment).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryTokenStore, MockHttpClient, MockResponse};
    use crate::models::PostCategory;
    use std::sync::Arc;

    fn api(http: &MockHttpClient) -> ApiClient {
        ApiClient::new(
            "http://api.test",
            Arc::new(http.clone()),
            Arc::new(InMemoryTokenStore::new()),
        )
    }

    #[tokio::test]
    async fn test_category_query_only_when_filtered() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::json(serde_json::json!([])));
        let api = api(&http);

        api.community_posts(CategoryFilter::All).await.unwrap();
        api.community_posts(CategoryFilter::Only(PostCategory::Anxiety))
            .await
            .unwrap();

        let urls: Vec<String> = http.get_requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                "http://api.test/community/posts".to_string(),
                "http://api.test/community/posts?category=anxiety".to_string(),
            ]
        );
    }
}
