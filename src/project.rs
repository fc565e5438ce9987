use crate::traits::Indexable;

pub type ProjectId = uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ProjectStatus {
  Active,
  Finished,
}

impl ProjectStatus {
  pub fn label(&self) -> &'static str {
    match self {
      ProjectStatus::Active => "active",
      ProjectStatus::Finished => "finished",
    }
  }
}

impl std::fmt::Display for ProjectStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.label())
  }
}

impl std::str::FromStr for ProjectStatus {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "active" => Ok(ProjectStatus::Active),
      "finished" => Ok(ProjectStatus::Finished),
      other => Err(format!("unknown project status: {}", other)),
    }
  }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Project {
  id: ProjectId,
  title: String,
  description: String,
  people: u32,
  status: ProjectStatus,
  created_at: chrono::DateTime<chrono::Local>,
}

impl Indexable for Project {
  fn id(&self) -> uuid::Uuid {
    self.id
  }
}

impl Project {
  pub fn new(title: &str, description: &str, people: u32) -> Self {
    Self {
      id: uuid::Uuid::new_v4(),
      title: title.to_owned(),
      description: description.to_owned(),
      people,
      status: ProjectStatus::Active,
      created_at: chrono::Local::now(),
    }
  }

  pub fn title(&self) -> &str {
    self.title.as_str()
  }

  pub fn description(&self) -> &str {
    self.description.as_str()
  }

  pub fn people(&self) -> u32 {
    self.people
  }

  pub fn status(&self) -> ProjectStatus {
    self.status
  }

  pub fn created_at(&self) -> chrono::DateTime<chrono::Local> {
    self.created_at
  }

  /// `1 person` or `N people`.
  pub fn persons(&self) -> String {
    if self.people == 1 {
      return "1 person".to_owned();
    }
    format!("{} people", self.people)
  }

  pub(crate) fn set_status(&mut self, status: ProjectStatus) {
    self.status = status;
  }
}
