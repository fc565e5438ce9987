use log::debug;

use projboard::{board::Board, shell::Shell, Config};

fn cli() -> clap::Command<'static> {
  clap::Command::new("projboard")
    .about("Active and finished projects board")
    .args(&[
      clap::Arg::new("config")
        .long("config")
        .takes_value(true)
        .help("path to the json config file"),
      clap::Arg::new("no-color").long("no-color"),
    ])
    .subcommand(
      clap::Command::new("completions").arg(
        clap::Arg::new("shell")
          .required(true)
          .index(1)
          .possible_values(["bash", "zsh", "fish", "powershell", "elvish"]),
      ),
    )
}

fn main() {
  env_logger::init();

  let matches = cli().get_matches();

  if let Some(("completions", command_matches)) = matches.subcommand() {
    match command_matches.value_of_t::<clap_complete::Shell>("shell") {
      Ok(shell) => {
        clap_complete::generate(shell, &mut cli(), "projboard", &mut std::io::stdout());
      }
      Err(err) => err.exit(),
    }
    return;
  }

  let config = match Config::load(matches.value_of("config")) {
    Ok(config) => config,
    Err(err) => {
      eprintln!("couldn't load config: {}", err);
      std::process::exit(1);
    }
  };
  debug!("config: {:?}", config);

  if matches.is_present("no-color") || !config.color {
    colored::control::set_override(false);
  }

  let stdin = std::io::stdin();
  let mut shell = Shell::new(
    Board::new(config.limits),
    stdin.lock(),
    std::io::stdout(),
  );
  if let Err(err) = shell.run() {
    eprintln!("shell err: {}", err);
    std::process::exit(1);
  }
}
