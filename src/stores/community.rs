use super::{LoadingFlag, Shared};
use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::models::{filter_posts, CategoryFilter, Comment, CommunityPost, NewComment, NewPost};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommunityState {
    /// Newest first.
    pub posts: Vec<CommunityPost>,
    /// Filter of the last fetch.
    pub filter: CategoryFilter,
}

impl CommunityState {
    /// Posts matching the current filter.
    pub fn visible_posts(&self) -> Vec<&CommunityPost> {
        filter_posts(&self.posts, self.filter)
    }
}

#[derive(Debug, Clone)]
pub struct CommunityStore {
    api: ApiClient,
    state: Shared<CommunityState>,
    loading: LoadingFlag,
}

impl CommunityStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: Shared::new(CommunityState::default()),
            loading: LoadingFlag::new(),
        }
    }

    pub fn snapshot(&self) -> CommunityState {
        self.state.snapshot()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub async fn fetch_posts(&self, filter: CategoryFilter) -> ApiResult<Vec<CommunityPost>> {
        let _loading = self.loading.begin();
        let posts = self.api.community_posts(filter).await?;
        let mut state = self.state.lock();
        state.posts = posts.clone();
        state.filter = filter;
        Ok(posts)
    }

    pub async fn create_post(&self, post: &NewPost) -> ApiResult<CommunityPost> {
        let _loading = self.loading.begin();
        let created = self.api.create_post(post).await?;
        self.state.lock().posts.insert(0, created.clone());
        Ok(created)
    }

    /// Like a post. Each successful call adds exactly one like locally;
    /// repeated likes are not de-duplicated.
    pub async fn like_post(&self, post_id: &str) -> ApiResult<u32> {
        let _loading = self.loading.begin();
        self.api.like_post(post_id).await?;
        let mut state = self.state.lock();
        let likes = match state.posts.iter_mut().find(|p| p.id == post_id) {
            Some(post) => {
                post.likes += 1;
                post.likes
            }
            None => 0,
        };
        Ok(likes)
    }

    pub async fn add_comment(&self, post_id: &str, comment: &NewComment) -> ApiResult<Comment> {
        let _loading = self.loading.begin();
        let saved = self.api.add_comment(post_id, comment).await?;
        if let Some(post) = self.state.lock().posts.iter_mut().find(|p| p.id == post_id) {
            post.comments.push(saved.clone());
        }
        Ok(saved)
    }
}
