use std::path::Path;

use campus_view::{options::Options, Layout, Viewer};

const USAGE: &str = "usage: campus-view [campus|floors|boxes] [options.toml]";

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);

    let layout = match args.next().as_deref().map(str::parse::<Layout>) {
        None => Layout::default(),
        Some(Ok(layout)) => layout,
        Some(Err(e)) => {
            log::error!("{e}");
            log::error!("{USAGE}");
            std::process::exit(2);
        }
    };

    let options = match args.next() {
        None => Options::default(),
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = Viewer::builder()
        .with_layout(layout)
        .with_options(options)
        .build()
        .run()
    {
        log::error!("{e}");
        std::process::exit(1);
    }
}
