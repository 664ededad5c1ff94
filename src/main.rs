//! cmdline - interactive command line entry point.

use std::io;
use std::process::exit;

use anyhow::Context as _;
use clap::Parser;

use cmdline::config::{Config, ConfigOverrides};
use cmdline::fs::HostFs;
use cmdline::shell::{Console, Context, Registry, Shell};

#[macro_use]
extern crate log;

#[derive(Parser, Debug)]
#[command(name = "cmdline", version, about = "Interactive command line with dir, cd, pwd and cat")]
struct Cli {
    /// Console encoding label, e.g. utf-8 or windows-1251
    #[arg(long)]
    encoding: Option<String>,

    /// Encoding of files printed by cat
    #[arg(long)]
    file_encoding: Option<String>,

    /// Prompt printed before each input line
    #[arg(long)]
    prompt: Option<String>,

    /// Do not print the welcome lines
    #[arg(long)]
    no_banner: bool,

    /// Default log filter (RUST_LOG takes precedence)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            encoding: self.encoding.clone(),
            file_encoding: self.file_encoding.clone(),
            prompt: self.prompt.clone(),
            banner: self.no_banner.then_some(false),
            log_level: self.log_level.clone(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load(&cli.overrides());

    let log_level = match &config {
        Ok(config) => config.log_level.clone(),
        Err(_) => Config::default().log_level,
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let result = config
        .context("Failed to load configuration")
        .and_then(try_main);
    if let Err(e) = result {
        error!("{:#}", e);
        exit(1);
    }
}

fn try_main(config: Config) -> anyhow::Result<()> {
    let encoding = config.console_encoding()?;
    let file_encoding = config.file_encoding()?;
    let registry = Registry::builtin();
    let fs = HostFs;
    let context = Context::from_process(&fs).context("Cannot resolve working directory")?;

    let console = Console::new(io::stdin().lock(), io::stdout().lock(), encoding);
    let mut shell = Shell::new(&registry, &fs, console, context, config.prompt)
        .with_file_encoding(file_encoding);
    if config.banner {
        shell.greet()?;
    }
    shell.run().context("Console failure")?;
    Ok(())
}
