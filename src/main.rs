use signal_hook::{consts, iterator::Signals};
use structopt::StructOpt;

mod builtins;
mod exec;
mod opts;
mod parser;
mod scripting;
mod shell;
mod utils;

fn signal_name(signal: i32) -> &'static str {
    match signal {
        consts::SIGINT => "SIGINT",
        consts::SIGTERM => "SIGTERM",
        _ => "signal",
    }
}

// The listener runs beside the read loop and never waits on it; a signal
// arriving while a child is running ends the shell without reaping it.
fn spawn_signal_listener() {
    let mut signals = match Signals::new(&[consts::SIGINT, consts::SIGTERM]) {
        Ok(m) => m,
        Err(err) => {
            utils::shell_error(err);
            return;
        }
    };
    std::thread::spawn(move || {
        for signal in signals.forever() {
            println!("\nreceived {}, exiting", signal_name(signal));
            utils::exit(0);
        }
    });
}

fn main() {
    spawn_signal_listener();

    let opts = opts::Opts::from_args();
    if let Some(command) = opts.command {
        shell::run_line(&command);
        return;
    }
    if let Some(script_file) = opts.script_file {
        if let Err(err) = scripting::run_file(&script_file) {
            utils::shell_error(format!("{}: {}", script_file, err));
            utils::exit(1);
        }
        return;
    }

    shell::shell();
}
