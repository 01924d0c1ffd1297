use crate::utils;

pub fn pwd(args: &[String]) {
    if !args.is_empty() {
        utils::shell_error("pwd takes no arguments");
        return;
    }
    match std::env::current_dir() {
        Ok(dir) => println!("{}", dir.display()),
        Err(err) => utils::shell_error(format!("pwd: {}", err)),
    }
}
