//! Demo viewer binary: a winit window driving the full camera rig.
//!
//! Takes one optional argument, the path to a TOML options preset.
//! Logging is configured through `RUST_LOG` (env_logger).

use std::path::Path;

use vantage::{Options, Viewer};

fn main() {
    env_logger::init();

    // Optional argument: path to a TOML options preset.
    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("failed to load options from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let viewer = Viewer::builder().with_options(options).build();
    if let Err(e) = viewer.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
