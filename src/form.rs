use log::debug;

use crate::{
  config::FormLimits,
  project::ProjectId,
  store::ProjectStore,
  validation::{validate, Validatable},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
  #[error("Invalid input, please try again!")]
  InvalidInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
  pub title: String,
  pub description: String,
  pub people: u32,
}

/// Collects the three fields of a new project and hands valid input to the store.
pub struct ProjectForm {
  limits: FormLimits,
}

impl ProjectForm {
  pub fn new(limits: FormLimits) -> Self {
    Self { limits }
  }

  pub fn limits(&self) -> FormLimits {
    self.limits
  }

  /// `people` must be a whole integer; input like `3 people` or `2.5` is rejected.
  pub fn gather(
    &self,
    title: &str,
    description: &str,
    people: &str,
  ) -> Result<ProjectDraft, ValidationError> {
    let people = people
      .trim()
      .parse::<i64>()
      .map_err(|_| ValidationError::InvalidInput)?;

    let title_rule = Validatable::text(title).required();
    let description_rule = Validatable::text(description)
      .required()
      .min_length(self.limits.description_min_length);
    let people_rule = Validatable::number(people)
      .required()
      .min(self.limits.people_min)
      .max(self.limits.people_max);

    if !validate(&title_rule) || !validate(&description_rule) || !validate(&people_rule) {
      debug!(
        "rejected input, title: {:?} description: {:?} people: {}",
        title, description, people
      );
      return Err(ValidationError::InvalidInput);
    }

    let people = u32::try_from(people).map_err(|_| ValidationError::InvalidInput)?;
    Ok(ProjectDraft {
      title: title.to_owned(),
      description: description.to_owned(),
      people,
    })
  }

  pub fn submit(
    &self,
    store: &mut ProjectStore,
    title: &str,
    description: &str,
    people: &str,
  ) -> Result<ProjectId, ValidationError> {
    let draft = self.gather(title, description, people)?;
    Ok(store.add_project(&draft.title, &draft.description, draft.people))
  }
}
