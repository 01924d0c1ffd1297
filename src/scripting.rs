use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::shell;
use crate::utils;

fn read_lines<P>(filename: P) -> io::Result<io::Lines<io::BufReader<File>>>
where
    P: AsRef<Path>,
{
    Ok(io::BufReader::new(File::open(filename)?).lines())
}

pub fn run_file(filename: &str) -> io::Result<()> {
    for line in read_lines(filename)?.flatten() {
        shell::run_line(&line);
    }
    Ok(())
}

pub fn load_rc(homedir: &str) {
    let rcpath = format!("{}/.rushrc", homedir);
    if !Path::new(&rcpath).exists() {
        let welcometext = "Welcome to rush";
        println!("{}", welcometext);
        let mut file = match OpenOptions::new().create_new(true).write(true).open(&rcpath) {
            Ok(m) => m,
            Err(err) => {
                utils::shell_error(err);
                return;
            }
        };
        if let Err(err) = writeln!(file, "echo {}", welcometext) {
            utils::shell_error(err);
        }
    } else if let Err(err) = run_file(&rcpath) {
        utils::shell_error(format!("{}: {}", rcpath, err));
    }
}
