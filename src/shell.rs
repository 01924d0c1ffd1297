use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::Editor;

use crate::builtins;
use crate::exec;
use crate::parser;
use crate::scripting;
use crate::utils;

pub fn run_line(line: &str) {
    let argv = match parser::lexer::tokenize(line) {
        Ok(m) => m,
        Err(err) => {
            utils::shell_error(err);
            return;
        }
    };
    let (command, args) = match argv.split_first() {
        Some(m) => m,
        None => return,
    };

    match command.as_str() {
        // Builtins, dispatched without touching PATH
        "cd" => builtins::cd::cd(args),
        "echo" => builtins::echo::echo(args),
        "exit" => builtins::exit::exit(args),
        "pwd" => builtins::pwd::pwd(args),
        "type" => builtins::type_::type_(args),

        command => exec::run(command, args),
    }
}

pub fn shell() {
    let homedir = utils::get_home_dir();
    let mut rl = Editor::<()>::new();

    scripting::load_rc(&homedir);
    let hispath = format!("{}/.rush_history", homedir);
    if rl.load_history(&hispath).is_err() {
        utils::shell_error("No previous history");
    }

    loop {
        let mut current_dir = match std::env::current_dir() {
            Ok(m) => m.display().to_string(),
            Err(_) => String::new(),
        };
        if current_dir.starts_with(&homedir) {
            current_dir = current_dir.replacen(&homedir, "~", 1);
        }

        let prompt = format!(
            "{}@{} {} $ ",
            whoami::username().blue(),
            whoami::hostname().blue(),
            current_dir.cyan()
        );

        match rl.readline(&prompt) {
            Ok(line) => {
                rl.add_history_entry(line.as_str());
                run_line(&line);
            }
            Err(ReadlineError::Interrupted) => {
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("exit");
                break;
            }
            Err(err) => {
                utils::shell_error(format!("couldn't read input: {}", err));
                utils::exit(1);
            }
        }
        if let Err(err) = rl.save_history(&hispath) {
            utils::shell_error(err);
        }
    }
}
