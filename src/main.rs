// SPDX-License-Identifier: MPL-2.0
use pixelweaver::app::{self, paths, Flags};

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: opt_string(&mut args, "--lang"),
        data_dir: opt_string(&mut args, "--data-dir"),
        config_dir: opt_string(&mut args, "--config-dir"),
        demo_result: opt_string(&mut args, "--demo-result"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}

fn opt_string(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|error| {
        log::warn!("invalid value for {key}: {error}");
        None
    })
}
