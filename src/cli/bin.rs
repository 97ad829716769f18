#![deny(warnings)]

use std::{
    error::Error,
    io::{self, Write},
};

use gitstart::{logging, Git};

mod app;
pub(crate) use app::App;

pub(crate) type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() {
    // Keep this function as small as possible. Everything that can be
    // tested lives in `App`.

    let arg_matches = app::clap_app().get_matches();
    logging::init_cli_logger(arg_matches.occurrences_of("verbose"));

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    let mut app = App {
        arg_matches,
        git: Git::default(),
        stdout: &mut stdout,
    };

    let r = app.run();

    // Nothing useful can be done if this flush fails.
    let _ = app.flush();

    if let Err(err) = &r {
        // The missing-git guidance has already gone to stdout.
        if !app::is_git_not_found(err.as_ref()) {
            eprintln!("ERROR: {}", err);
        }
    }

    std::process::exit(app::exit_code(&r));
}
