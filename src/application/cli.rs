use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ResponderName;
use crate::domain::services::completions::help_text;
use crate::domain::services::Themes;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if !config_file_path.parent().unwrap().exists() {
        fs::create_dir_all(config_file_path.parent().unwrap()).await?;
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    let config_path_display = config_file_path.as_os_str().to_str().unwrap();
    println!("Created default config file at {config_path_display}");
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn arg_model() -> Arg {
    return Arg::new(ConfigKey::Model.to_string())
        .short('m')
        .long(ConfigKey::Model.to_string())
        .env("MOCKINGBIRD_MODEL")
        .num_args(1)
        .help(format!(
            "Display name used for the assistant's chat bubbles. [default: {}]",
            Config::default(ConfigKey::Model)
        ));
}

fn arg_responder() -> Arg {
    return Arg::new(ConfigKey::Responder.to_string())
        .short('r')
        .long(ConfigKey::Responder.to_string())
        .env("MOCKINGBIRD_RESPONDER")
        .num_args(1)
        .help(format!(
            "Reply engine used to produce assistant messages. [default: {}]",
            Config::default(ConfigKey::Responder)
        ))
        .value_parser(PossibleValuesParser::new(ResponderName::VARIANTS));
}

fn arg_response_delay() -> Arg {
    return Arg::new(ConfigKey::ResponseDelay.to_string())
        .long(ConfigKey::ResponseDelay.to_string())
        .env("MOCKINGBIRD_RESPONSE_DELAY")
        .num_args(1)
        .help(format!(
            "Simulated latency in milliseconds before the assistant replies. [default: {}]",
            Config::default(ConfigKey::ResponseDelay)
        ));
}

fn subcommand_chat() -> Command {
    return Command::new("chat")
        .about("Start chatting with the simulated assistant.")
        .arg(arg_model())
        .arg(arg_responder())
        .arg(arg_response_delay());
}

pub fn build() -> Command {
    let commands_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("COMMANDS:") || line.starts_with("HOTKEYS:") {
                return Paint::new(format!("CHAT {line}"))
                    .underline()
                    .bold()
                    .to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("mockingbird")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_chat())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .arg(arg_model())
        .arg(arg_responder())
        .arg(arg_response_delay())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("MOCKINGBIRD_CONFIG_FILE")
                .num_args(1)
                .help(format!(
                    "Path to configuration file [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Theme.to_string())
                .short('t')
                .long(ConfigKey::Theme.to_string())
                .env("MOCKINGBIRD_THEME")
                .num_args(1)
                .help(format!(
                    "Color palette for the chat surface. [default: {}]",
                    Config::default(ConfigKey::Theme)
                ))
                .value_parser(PossibleValuesParser::new(Themes::list()))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Username.to_string())
                .short('u')
                .long(ConfigKey::Username.to_string())
                .env("MOCKINGBIRD_USERNAME")
                .num_args(1)
                .help("Your name, shown on your chat bubbles.")
                .global(true),
        );
}

pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("chat", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
