use std::{cell::RefCell, rc::Rc};

use log::debug;

use crate::{
  config::FormLimits,
  form::ProjectForm,
  project::{Project, ProjectId, ProjectStatus},
  store::{MoveOutcome, ProjectStore, StoreError},
};

/// One column of the board. Keeps the projects of its status from the
/// latest store snapshot.
pub struct ProjectList {
  kind: ProjectStatus,
  assigned: Vec<Project>,
}

impl ProjectList {
  pub fn attach(kind: ProjectStatus, store: &mut ProjectStore) -> Rc<RefCell<Self>> {
    let list = Rc::new(RefCell::new(Self {
      kind,
      assigned: Vec::new(),
    }));

    let subscribed = Rc::clone(&list);
    store.subscribe(move |projects| subscribed.borrow_mut().assign(projects));
    debug!("{} list attached", kind);

    return list;
  }

  pub fn kind(&self) -> ProjectStatus {
    self.kind
  }

  pub fn assigned(&self) -> &[Project] {
    &self.assigned
  }

  /// Moves the dropped project into the list's status. The list must not be
  /// borrowed while the store notifies it.
  pub fn drop_project(
    list: &Rc<RefCell<Self>>,
    store: &mut ProjectStore,
    project_id: ProjectId,
  ) -> Result<MoveOutcome, StoreError> {
    let kind = list.borrow().kind;
    debug!("dropped project with id: {} on {} list", project_id, kind);
    store.move_project(project_id, kind)
  }

  pub fn render(&self, out: &mut dyn std::io::Write) -> std::io::Result<()> {
    writeln!(out, "{}", crate::fmt::format_list(self.kind, &self.assigned))
  }

  fn assign(&mut self, projects: Vec<Project>) {
    self.assigned = projects
      .into_iter()
      .filter(|p| p.status() == self.kind)
      .collect();
  }
}

/// Store, input form and both lists wired together.
pub struct Board {
  store: ProjectStore,
  form: ProjectForm,
  active: Rc<RefCell<ProjectList>>,
  finished: Rc<RefCell<ProjectList>>,
}

impl Board {
  pub fn new(limits: FormLimits) -> Self {
    let mut store = ProjectStore::new();
    let active = ProjectList::attach(ProjectStatus::Active, &mut store);
    let finished = ProjectList::attach(ProjectStatus::Finished, &mut store);

    Self {
      store,
      form: ProjectForm::new(limits),
      active,
      finished,
    }
  }

  pub fn store(&self) -> &ProjectStore {
    &self.store
  }

  pub fn form(&self) -> &ProjectForm {
    &self.form
  }

  pub fn list(&self, kind: ProjectStatus) -> Rc<RefCell<ProjectList>> {
    match kind {
      ProjectStatus::Active => Rc::clone(&self.active),
      ProjectStatus::Finished => Rc::clone(&self.finished),
    }
  }

  pub fn submit(
    &mut self,
    title: &str,
    description: &str,
    people: &str,
  ) -> Result<ProjectId, crate::form::ValidationError> {
    self.form.submit(&mut self.store, title, description, people)
  }

  pub fn move_project(
    &mut self,
    project_id: ProjectId,
    target: ProjectStatus,
  ) -> Result<MoveOutcome, StoreError> {
    ProjectList::drop_project(&self.list(target), &mut self.store, project_id)
  }

  pub fn render(&self, out: &mut dyn std::io::Write) -> std::io::Result<()> {
    self.active.borrow().render(out)?;
    writeln!(out)?;
    self.finished.borrow().render(out)
  }
}

#[cfg(test)]
mod tests {
  use super::{Board, ProjectList};
  use crate::{
    config::FormLimits,
    project::ProjectStatus,
    store::{MoveOutcome, ProjectStore},
    traits::Indexable,
  };

  #[test]
  fn lists_filter_by_status() {
    let mut store = ProjectStore::new();
    let active = ProjectList::attach(ProjectStatus::Active, &mut store);
    let finished = ProjectList::attach(ProjectStatus::Finished, &mut store);

    let first = store.add_project("One", "first project", 1);
    let second = store.add_project("Two", "second project", 2);
    assert_eq!(active.borrow().assigned().len(), 2);
    assert!(finished.borrow().assigned().is_empty());

    ProjectList::drop_project(&finished, &mut store, first).unwrap();

    let active_ids: Vec<_> = active.borrow().assigned().iter().map(|p| p.id()).collect();
    let finished_ids: Vec<_> = finished.borrow().assigned().iter().map(|p| p.id()).collect();
    assert_eq!(active_ids, vec![second]);
    assert_eq!(finished_ids, vec![first]);
  }

  #[test]
  fn drop_on_own_list_is_unchanged() {
    let mut board = Board::new(FormLimits::default());
    let id = board.submit("Title", "description", "2").unwrap();

    assert_eq!(
      board.move_project(id, ProjectStatus::Active),
      Ok(MoveOutcome::Unchanged)
    );
    assert_eq!(
      board.move_project(id, ProjectStatus::Finished),
      Ok(MoveOutcome::Moved)
    );
  }

  #[test]
  fn move_unknown_project_fails() {
    let mut board = Board::new(FormLimits::default());
    assert!(board
      .move_project(uuid::Uuid::new_v4(), ProjectStatus::Finished)
      .is_err());
  }

  #[test]
  fn board_renders_both_lists() {
    let mut board = Board::new(FormLimits::default());
    board.submit("Website", "Launch the new site", "3").unwrap();

    let mut out = Vec::new();
    board.render(&mut out).unwrap();
    let rendered = String::from_utf8(out).unwrap();

    assert!(rendered.contains("ACTIVE PROJECTS"));
    assert!(rendered.contains("FINISHED PROJECTS"));
    assert!(rendered.contains("3 people assigned."));
  }

  #[test]
  fn invalid_submit_leaves_lists_empty() {
    let mut board = Board::new(FormLimits::default());
    assert!(board.submit("Title", "abc", "2").is_err());
    assert!(board.store().is_empty());
    assert!(board.list(ProjectStatus::Active).borrow().assigned().is_empty());
  }
}
