use super::{upsert_by_id, LoadingFlag, Shared};
use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::models::{NewGoal, WellnessGoal};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalState {
    pub goals: Vec<WellnessGoal>,
}

impl GoalState {
    pub fn completed_count(&self) -> usize {
        self.goals.iter().filter(|g| g.completed).count()
    }
}

#[derive(Debug, Clone)]
pub struct GoalStore {
    api: ApiClient,
    state: Shared<GoalState>,
    loading: LoadingFlag,
}

impl GoalStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: Shared::new(GoalState::default()),
            loading: LoadingFlag::new(),
        }
    }

    pub fn snapshot(&self) -> GoalState {
        self.state.snapshot()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub async fn fetch_goals(&self) -> ApiResult<Vec<WellnessGoal>> {
        let _loading = self.loading.begin();
        let goals = self.api.goals().await?;
        self.state.lock().goals = goals.clone();
        Ok(goals)
    }

    pub async fn create_goal(&self, goal: &NewGoal) -> ApiResult<WellnessGoal> {
        let _loading = self.loading.begin();
        let created = self.api.create_goal(goal).await?;
        self.state.lock().goals.push(created.clone());
        Ok(created)
    }

    /// Set a goal's progress. Reaching 100 marks the goal completed.
    pub async fn update_progress(&self, goal_id: &str, progress: i32) -> ApiResult<WellnessGoal> {
        let _loading = self.loading.begin();
        let mut goal = self.api.update_goal_progress(goal_id, progress).await?;
        if goal.progress >= crate::models::goals::MAX_PROGRESS {
            goal.completed = true;
        }
        upsert_by_id(&mut self.state.lock().goals, goal.clone(), |g| g.id.as_str());
        Ok(goal)
    }

    /// Mark a goal done; the server's record replaces the local one.
    pub async fn complete_goal(&self, goal_id: &str) -> ApiResult<WellnessGoal> {
        let _loading = self.loading.begin();
        let goal = self.api.complete_goal(goal_id).await?;
        upsert_by_id(&mut self.state.lock().goals, goal.clone(), |g| g.id.as_str());
        Ok(goal)
    }
}
