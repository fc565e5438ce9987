use std::io::{BufRead, Write};

use log::debug;

use crate::{
  board::Board,
  fmt::{format_details, format_list},
  project::ProjectStatus,
  store::MoveOutcome,
};

const PROMPT: &str = "projboard> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
  Continue,
  Quit,
}

pub fn command() -> clap::Command<'static> {
  clap::Command::new("projboard")
    .no_binary_name(true)
    .subcommand_required(true)
    .subcommand(clap::Command::new("add").about("create a project, fields are asked one by one"))
    .subcommand(
      clap::Command::new("move")
        .about("move a project to another list")
        .args(&[
          clap::Arg::new("id").required(true).index(1),
          clap::Arg::new("status")
            .required(true)
            .index(2)
            .possible_values(["active", "finished"]),
        ]),
    )
    .subcommand(
      clap::Command::new("list")
        .about("show the lists")
        .arg(
          clap::Arg::new("status")
            .index(1)
            .possible_values(["active", "finished"]),
        ),
    )
    .subcommand(
      clap::Command::new("show")
        .about("show a single project")
        .arg(clap::Arg::new("id").required(true).index(1)),
    )
    .subcommand(clap::Command::new("export").about("print all projects as json"))
    .subcommand(
      clap::Command::new("quit")
        .about("leave the board")
        .visible_alias("exit"),
    )
}

/// Reads commands line by line and applies them to the board.
pub struct Shell<R: BufRead, W: Write> {
  board: Board,
  input: R,
  output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
  pub fn new(board: Board, input: R, output: W) -> Self {
    Self {
      board,
      input,
      output,
    }
  }

  pub fn board(&self) -> &Board {
    &self.board
  }

  pub fn run(&mut self) -> std::io::Result<()> {
    loop {
      write!(self.output, "{}", PROMPT)?;
      self.output.flush()?;

      let line = match self.read_line()? {
        Some(line) => line,
        None => return Ok(()),
      };

      if self.execute(&line)? == Flow::Quit {
        return Ok(());
      }
    }
  }

  pub fn execute(&mut self, line: &str) -> std::io::Result<Flow> {
    let line = line.trim();
    if line.is_empty() {
      return Ok(Flow::Continue);
    }

    debug!("shell command: {}", line);
    let matches = match command().try_get_matches_from(line.split_whitespace()) {
      Ok(matches) => matches,
      Err(err) => {
        write!(self.output, "{}", err)?;
        return Ok(Flow::Continue);
      }
    };

    match matches.subcommand() {
      Some(("add", _)) => self.add()?,

      Some(("move", command_matches)) => {
        let id = command_matches.value_of("id").unwrap_or_default();
        match command_matches.value_of_t::<ProjectStatus>("status") {
          Ok(status) => self.move_project(id, status)?,
          Err(err) => write!(self.output, "{}", err)?,
        }
      }

      Some(("list", command_matches)) => {
        match command_matches.value_of_t::<ProjectStatus>("status").ok() {
          Some(status) => {
            let list = self.board.list(status);
            let list = list.borrow();
            list.render(&mut self.output)?;
          }
          None => self.board.render(&mut self.output)?,
        }
      }

      Some(("show", command_matches)) => {
        let id = command_matches.value_of("id").unwrap_or_default();
        if let Some(project_id) = self.resolve(id)? {
          if let Some(project) = self.board.store().project_by_id(project_id) {
            writeln!(self.output, "{}", format_details(&project))?;
          }
        }
      }

      Some(("export", _)) => {
        let projects = self.board.store().projects();
        match serde_json::to_string_pretty(&projects) {
          Ok(json) => writeln!(self.output, "{}", json)?,
          Err(err) => writeln!(self.output, "export err: {}", err)?,
        }
      }

      Some(("quit", _)) => return Ok(Flow::Quit),

      Some((subcmd, _)) => writeln!(self.output, "unknown command {}", subcmd)?,
      None => writeln!(self.output, "command not found")?,
    };

    Ok(Flow::Continue)
  }

  fn add(&mut self) -> std::io::Result<()> {
    let title = self.ask("title")?;
    let description = self.ask("description")?;
    let people = self.ask("people")?;

    match self.board.submit(&title, &description, &people) {
      Ok(project_id) => {
        writeln!(
          self.output,
          "project added: {}",
          self.board.store().shorten_id(project_id)
        )?;
        let list = self.board.list(ProjectStatus::Active);
        let list = list.borrow();
        writeln!(self.output, "{}", format_list(list.kind(), list.assigned()))?;
      }
      Err(err) => writeln!(self.output, "{}", err)?,
    };
    Ok(())
  }

  fn move_project(&mut self, id: &str, status: ProjectStatus) -> std::io::Result<()> {
    let project_id = match self.resolve(id)? {
      Some(project_id) => project_id,
      None => return Ok(()),
    };

    match self.board.move_project(project_id, status) {
      Ok(MoveOutcome::Moved) => {
        writeln!(self.output, "project moved to {}", status)?;
        self.board.render(&mut self.output)?;
      }
      Ok(MoveOutcome::Unchanged) => writeln!(self.output, "project is already {}", status)?,
      Err(err) => writeln!(self.output, "couldn't move: {}", err)?,
    };
    Ok(())
  }

  fn resolve(&mut self, id: &str) -> std::io::Result<Option<crate::project::ProjectId>> {
    let resolved = self.board.store().resolve_id(id);
    if resolved.is_none() {
      writeln!(self.output, "project with id: {} not found", id)?;
    }
    Ok(resolved)
  }

  fn ask(&mut self, field: &str) -> std::io::Result<String> {
    write!(self.output, "{}: ", field)?;
    self.output.flush()?;
    Ok(self.read_line()?.unwrap_or_default())
  }

  /// Invalid utf-8 is replaced rather than ending the session.
  fn read_line(&mut self) -> std::io::Result<Option<String>> {
    let mut buffer = Vec::new();
    if self.input.read_until(b'\n', &mut buffer)? == 0 {
      return Ok(None);
    }
    let line = String::from_utf8_lossy(&buffer);
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_owned()))
  }
}

#[cfg(test)]
mod tests {
  use std::io::Cursor;

  use super::{Flow, Shell};
  use crate::{board::Board, config::FormLimits, project::ProjectStatus, traits::Indexable};

  fn run_script(script: &str) -> (Shell<Cursor<Vec<u8>>, Vec<u8>>, String) {
    let mut shell = Shell::new(
      Board::new(FormLimits::default()),
      Cursor::new(script.as_bytes().to_vec()),
      Vec::new(),
    );
    shell.run().unwrap();
    let output = String::from_utf8(shell.output.clone()).unwrap();
    (shell, output)
  }

  #[test]
  fn add_prompts_for_fields() {
    let (shell, output) = run_script("add\nWebsite\nLaunch the new site\n2\nquit\n");

    assert_eq!(shell.board().store().len(), 1);
    assert!(output.contains("project added: "));
    assert!(output.contains("2 people assigned."));
  }

  #[test]
  fn add_rejects_invalid_input() {
    let (shell, output) = run_script("add\nWebsite\nshort\n9\n");

    assert!(shell.board().store().is_empty());
    assert!(output.contains("Invalid input, please try again!"));
  }

  #[test]
  fn move_by_short_id() {
    let mut shell = Shell::new(
      Board::new(FormLimits::default()),
      Cursor::new(b"Website\nLaunch the new site\n1\n".to_vec()),
      Vec::new(),
    );
    shell.execute("add").unwrap();
    let project = shell.board().store().projects()[0].clone();
    let short_id = shell.board().store().shorten_id(project.id());

    shell.execute(&format!("move {} finished", short_id)).unwrap();
    shell.execute(&format!("move {} finished", short_id)).unwrap();

    let output = String::from_utf8(shell.output.clone()).unwrap();
    assert!(output.contains("project moved to finished"));
    assert!(output.contains("project is already finished"));
    assert_eq!(
      shell.board().store().project_by_id(project.id()).unwrap().status(),
      ProjectStatus::Finished
    );
  }

  #[test]
  fn move_unknown_id_reports_not_found() {
    let (_, output) = run_script("move abcd..ef01 finished\n");
    assert!(output.contains("project with id: abcd..ef01 not found"));
  }

  #[test]
  fn bad_command_keeps_running() {
    let mut shell = Shell::new(
      Board::new(FormLimits::default()),
      Cursor::new(Vec::new()),
      Vec::new(),
    );
    assert_eq!(shell.execute("fly away").unwrap(), Flow::Continue);
    assert_eq!(shell.execute("move x sideways").unwrap(), Flow::Continue);
    assert_eq!(shell.execute("exit").unwrap(), Flow::Quit);
  }

  #[test]
  fn export_prints_json() {
    let (_, output) = run_script("add\nWebsite\nLaunch the new site\n3\nexport\n");
    assert!(output.contains("\"title\": \"Website\""));
    assert!(output.contains("\"status\": \"Active\""));
  }

  #[test]
  fn invalid_utf8_line_keeps_session() {
    let mut script = b"add\nWebsite\nLaunch the new site\n2\nlist \xff\n".to_vec();
    script.extend_from_slice(b"list\nquit\n");
    let mut shell = Shell::new(
      Board::new(FormLimits::default()),
      Cursor::new(script),
      Vec::new(),
    );

    shell.run().unwrap();

    let output = String::from_utf8(shell.output.clone()).unwrap();
    assert_eq!(shell.board().store().len(), 1);
    assert!(output.contains("FINISHED PROJECTS"));
  }

  #[test]
  fn help_lists_commands() {
    let mut shell = Shell::new(
      Board::new(FormLimits::default()),
      Cursor::new(Vec::new()),
      Vec::new(),
    );

    assert_eq!(shell.execute("help").unwrap(), Flow::Continue);

    let output = String::from_utf8(shell.output.clone()).unwrap();
    assert!(output.contains("add"));
    assert!(output.contains("move"));
  }
}
