use std::fs;
use std::path::Path;

use crate::utils;

pub fn cd(args: &[String]) {
    if args.len() > 1 {
        utils::shell_error("cd takes at most one argument");
        return;
    }
    let arg = match args.first() {
        Some(m) => m,
        None => return,
    };

    let dir = expand_tilde(arg, &utils::get_home_dir());
    let root = Path::new(&dir);
    match fs::metadata(root) {
        Err(_) => {
            utils::shell_error(format!("cd: {}: No such file or directory", dir));
        }
        Ok(meta) if !meta.is_dir() => {
            utils::shell_error(format!("cd: {}: Not a directory", dir));
        }
        Ok(_) => {
            if let Err(err) = std::env::set_current_dir(root) {
                utils::shell_error(format!("cd: {}: {}", dir, err));
            }
        }
    }
}

// Leading ~ only, replaced once; ~user lookup is not supported
fn expand_tilde(arg: &str, home: &str) -> String {
    match arg.strip_prefix('~') {
        Some(rest) => format!("{}{}", home, rest),
        None => arg.to_string(),
    }
}
