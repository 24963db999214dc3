// SPDX-License-Identifier: MPL-2.0
use cloudlift::app::{self, paths, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Cloudlift: drag-and-drop uploads to Cloudinary

USAGE:
  cloudlift [OPTIONS] [FILE]...

OPTIONS:
  -h, --help                 Print this help and exit
      --lang <LOCALE>        UI language (e.g. en-US, fr)
      --config-dir <DIR>     Directory holding settings.toml
      --cloud-name <NAME>    Cloud name (overrides CLOUDINARY_CLOUD_NAME)
      --upload-preset <NAME> Unsigned upload preset (overrides CLOUDINARY_UPLOAD_PRESET)
      --folder <FOLDER>      Target folder (overrides CLOUDINARY_UPLOAD_FOLDER)

ARGS:
  [FILE]...                  Files uploaded as soon as the window opens
";

fn main() -> iced::Result {
    // A missing .env file is the common case.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    tracing::info!(files = flags.files.len(), "starting cloudlift");

    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let cloud_name = args.opt_value_from_str("--cloud-name")?;
    let upload_preset = args.opt_value_from_str("--upload-preset")?;
    let folder = args.opt_value_from_str("--folder")?;

    let files = args
        .finish()
        .into_iter()
        .map(PathBuf::from)
        .collect();

    Ok(Flags {
        lang,
        config_dir,
        cloud_name,
        upload_preset,
        folder,
        files,
    })
}
