use crate::utils;

// Only the literal statuses 0 and 1 are accepted; anything else is an
// argument error and the shell keeps running.
pub fn exit(args: &[String]) {
    match args {
        [] => utils::exit(0),
        [status] => match status.as_str() {
            "0" => utils::exit(0),
            "1" => utils::exit(1),
            _ => utils::shell_error("exit: invalid argument"),
        },
        _ => utils::shell_error("exit takes at most one argument"),
    }
}
