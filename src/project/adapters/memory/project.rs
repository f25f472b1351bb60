//! In-memory repository for project boards.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;

use crate::auth::domain::UserId;
use crate::project::{
    domain::{NewProject, Project, ProjectId},
    ports::{ProjectChange, ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};

const DEFAULT_CHANGE_CAPACITY: usize = 64;

/// Thread-safe in-memory project repository with a change feed.
///
/// Creation timestamps come from the injected clock.
pub struct InMemoryProjectRepository<C = DefaultClock> {
    state: Arc<RwLock<HashMap<ProjectId, Project>>>,
    changes: broadcast::Sender<ProjectChange>,
    clock: Arc<C>,
}

impl InMemoryProjectRepository {
    /// Creates an empty repository stamped by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryProjectRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for InMemoryProjectRepository<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            changes: self.changes.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> InMemoryProjectRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty repository stamped by `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self::with_clock_and_capacity(clock, DEFAULT_CHANGE_CAPACITY)
    }

    /// Creates an empty repository whose change feed buffers `capacity`
    /// notices per subscriber.
    #[must_use]
    pub fn with_clock_and_capacity(clock: Arc<C>, capacity: usize) -> Self {
        let (changes, _) = broadcast::channel(capacity.max(1));
        Self {
            state: Arc::default(),
            changes,
            clock,
        }
    }
}

fn poisoned(err: &impl ToString) -> ProjectRepositoryError {
    ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl<C> ProjectRepository for InMemoryProjectRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn store(
        &self,
        draft: NewProject,
        owner_id: UserId,
    ) -> ProjectRepositoryResult<Project> {
        let project = Project::from_draft(ProjectId::new(), draft, owner_id, self.clock.utc());
        {
            let mut state = self.state.write().map_err(|err| poisoned(&err))?;
            if state.contains_key(&project.id()) {
                return Err(ProjectRepositoryError::DuplicateProject(project.id()));
            }
            state.insert(project.id(), project.clone());
        }
        // Nobody listening is not an error.
        let _receivers = self.changes.send(ProjectChange {
            project_id: project.id(),
        });
        Ok(project)
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state.get(&id).cloned())
    }

    async fn list_for_member(&self, user_id: UserId) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        let mut projects: Vec<Project> = state
            .values()
            .filter(|project| project.is_member(user_id))
            .cloned()
            .collect();
        projects.sort_by(|left, right| {
            right
                .created_at()
                .cmp(&left.created_at())
                .then_with(|| left.id().cmp(&right.id()))
        });
        Ok(projects)
    }

    fn subscribe(&self) -> broadcast::Receiver<ProjectChange> {
        self.changes.subscribe()
    }
}
