// SPDX-License-Identifier: MPL-2.0
use snowletter::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        photo_path: args.opt_value_from_str::<_, PathBuf>("--photo").unwrap(),
        config_dir: args.opt_value_from_str::<_, PathBuf>("--config-dir").unwrap(),
        letter_path: args.finish().into_iter().next().map(PathBuf::from),
    };

    app::run(flags)
}
