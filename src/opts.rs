use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "rush")]
pub struct Opts {
    // Accepted so login managers and terminals that pass them don't error out
    #[structopt(short, long)]
    pub interactive: bool,

    #[structopt(short, long)]
    pub login: bool,

    #[structopt(short, long)]
    pub command: Option<String>,

    #[structopt(max_values = 1)]
    pub script_file: Option<String>,
}
