// SPDX-License-Identifier: MPL-2.0
use lens_pane::app::{self, Flags};
use std::path::PathBuf;

const USAGE: &str = "Usage: lens_pane [--fit] [--config-dir DIR] <IMAGE>";

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return Ok(());
    }

    let fit = args.contains("--fit");
    let config_dir = match args.opt_value_from_str::<_, String>("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("{err}\n{USAGE}");
            std::process::exit(2);
        }
    };

    let Some(file_path) = args.finish().into_iter().next().map(PathBuf::from) else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };

    app::run(Flags {
        file_path,
        fit,
        config_dir,
    })
}
