//! Live project list of one member.

use crate::auth::domain::UserId;
use crate::mirror::{MirrorFeed, MirrorFeedError};
use crate::project::{
    domain::Project,
    ports::{ProjectChange, ProjectRepository},
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Projects listing a user as a member, newest first.
pub struct ProjectFeed<R> {
    repository: Arc<R>,
    user_id: UserId,
}

impl<R> ProjectFeed<R>
where
    R: ProjectRepository,
{
    /// Creates a feed over `user_id`'s projects.
    #[must_use]
    pub const fn new(repository: Arc<R>, user_id: UserId) -> Self {
        Self {
            repository,
            user_id,
        }
    }
}

#[async_trait]
impl<R> MirrorFeed for ProjectFeed<R>
where
    R: ProjectRepository + 'static,
{
    type Item = Project;
    type Notice = ProjectChange;

    fn subscribe(&self) -> broadcast::Receiver<ProjectChange> {
        self.repository.subscribe()
    }

    // Membership can change with any write, so every notice reloads.
    fn is_relevant(&self, _notice: &ProjectChange) -> bool {
        true
    }

    async fn load(&self) -> Result<Vec<Project>, MirrorFeedError> {
        self.repository
            .list_for_member(self.user_id)
            .await
            .map_err(MirrorFeedError::load)
    }
}
