use crate::builtins;
use crate::exec;
use crate::utils;

pub fn type_(args: &[String]) {
    let name = match args {
        [name] => name,
        _ => {
            utils::shell_error("type takes one argument");
            return;
        }
    };

    if builtins::is_builtin(name) {
        println!("{} is a shell builtin", name);
    } else if let Some(bin) = exec::find_bin(name) {
        println!("{} is {}", name, bin.display());
    } else {
        println!("{}: not found", name);
    }
}
