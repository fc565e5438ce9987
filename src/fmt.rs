use colored::Colorize;

use crate::{
  project::{Project, ProjectStatus},
  store::shorten_id,
  traits::Indexable,
};

pub fn list_header(kind: ProjectStatus) -> String {
  format!("{} PROJECTS", kind.label().to_uppercase())
}

pub fn format_card(project: &Project) -> String {
  format!(
    "  {} {}\n  {}\n  {}",
    shorten_id(project.id()).as_str().bright_black(),
    project.title().bold(),
    format!("{} assigned.", project.persons()).as_str().bright_yellow(),
    project.description()
  )
}

pub fn format_list(kind: ProjectStatus, projects: &[Project]) -> String {
  let header = list_header(kind);
  let header = match kind {
    ProjectStatus::Active => header.as_str().bold().cyan(),
    ProjectStatus::Finished => header.as_str().bold().green(),
  };

  let mut lines = vec![header.to_string()];
  if projects.is_empty() {
    lines.push(format!("  {}", "no projects".italic()));
  }
  for project in projects {
    lines.push(format_card(project));
  }
  lines.join("\n")
}

pub fn format_details(project: &Project) -> String {
  format!(
    "{}: {}\n  status: {}\n  people: {}\n  created: {}\n  {}",
    project.id(),
    project.title().bold(),
    project.status(),
    project.people(),
    project.created_at().format("%Y-%m-%d %H:%M:%S"),
    project.description()
  )
}

#[cfg(test)]
mod tests {
  use super::{format_card, format_list, list_header};
  use crate::project::{Project, ProjectStatus};

  #[test]
  fn header_names_the_list() {
    assert_eq!(list_header(ProjectStatus::Active), "ACTIVE PROJECTS");
    assert_eq!(list_header(ProjectStatus::Finished), "FINISHED PROJECTS");
  }

  #[test]
  fn card_mentions_people() {
    let card = format_card(&Project::new("Website", "Launch the new site", 1));
    assert!(card.contains("Website"));
    assert!(card.contains("1 person assigned."));
    assert!(card.contains("Launch the new site"));
  }

  #[test]
  fn empty_list_says_so() {
    let list = format_list(ProjectStatus::Finished, &[]);
    assert!(list.contains("FINISHED PROJECTS"));
    assert!(list.contains("no projects"));
  }
}
