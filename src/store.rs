use log::{debug, info};

use crate::{
  project::{Project, ProjectId, ProjectStatus},
  traits::Indexable,
};

pub type Subscriber = Box<dyn FnMut(Vec<Project>)>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
  #[error("project with id: {0} not found")]
  ProjectNotFound(ProjectId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
  Moved,
  Unchanged,
}

/// Owns the projects of a board and fans every change out to subscribers.
///
/// Subscribers get an owned copy of the whole list, in insertion order, and
/// are called in the order they subscribed. There is no unsubscribe.
pub struct ProjectStore {
  projects: Vec<Project>,
  subscribers: Vec<Subscriber>,
}

impl Default for ProjectStore {
  fn default() -> Self {
    Self::new()
  }
}

impl ProjectStore {
  pub fn new() -> Self {
    Self {
      projects: Vec::new(),
      subscribers: Vec::new(),
    }
  }

  pub fn subscribe<F>(&mut self, subscriber: F)
  where
    F: FnMut(Vec<Project>) + 'static,
  {
    self.subscribers.push(Box::new(subscriber));
    debug!("subscriber added, total: {}", self.subscribers.len());
  }

  /// Adds an active project. Input is expected to be validated by the caller.
  pub fn add_project(&mut self, title: &str, description: &str, people: u32) -> ProjectId {
    let project = Project::new(title, description, people);
    let id = project.id();
    info!(
      "new project created, title: {} id: {} people: {}",
      project.title(),
      id,
      project.people()
    );
    self.projects.push(project);
    self.notify();
    return id;
  }

  pub fn move_project(
    &mut self,
    project_id: ProjectId,
    new_status: ProjectStatus,
  ) -> Result<MoveOutcome, StoreError> {
    let project = self
      .projects
      .iter_mut()
      .find(|p| p.id() == project_id)
      .ok_or(StoreError::ProjectNotFound(project_id))?;

    if project.status() == new_status {
      debug!("project {} is already {}", project_id, new_status);
      return Ok(MoveOutcome::Unchanged);
    }

    project.set_status(new_status);
    info!("moved project with id: {} to {}", project_id, new_status);
    self.notify();
    Ok(MoveOutcome::Moved)
  }

  pub fn projects(&self) -> Vec<Project> {
    self.projects.clone()
  }

  pub fn projects_with_status(&self, status: ProjectStatus) -> Vec<Project> {
    self
      .projects
      .iter()
      .filter(|p| p.status() == status)
      .cloned()
      .collect()
  }

  pub fn project_by_id(&self, project_id: ProjectId) -> Option<Project> {
    self
      .projects
      .iter()
      .find(|p| p.id() == project_id)
      .cloned()
  }

  pub fn len(&self) -> usize {
    self.projects.len()
  }

  pub fn is_empty(&self) -> bool {
    self.projects.is_empty()
  }

  pub fn subscriber_count(&self) -> usize {
    self.subscribers.len()
  }

  pub fn shorten_id(&self, id: ProjectId) -> String {
    shorten_id(id)
  }

  /// Accepts a full uuid or its `xxxx..yyyy` short form.
  pub fn resolve_id(&self, id: &str) -> Option<ProjectId> {
    let id = id.trim();
    if let Ok(full_id) = uuid::Uuid::parse_str(id) {
      return self.project_by_id(full_id).map(|p| p.id());
    }

    self
      .projects
      .iter()
      .map(|p| p.id())
      .find(|project_id| shorten_id(*project_id) == id)
  }

  fn notify(&mut self) {
    debug!(
      "notifying {} subscribers about {} projects",
      self.subscribers.len(),
      self.projects.len()
    );
    for subscriber in self.subscribers.iter_mut() {
      subscriber(self.projects.clone());
    }
  }
}

pub fn shorten_id(id: ProjectId) -> String {
  let id_string = id.as_simple().to_string();
  format!(
    "{}..{}",
    &id_string[0..4],
    &id_string[id_string.len() - 4..id_string.len()]
  )
}
