use clap::Subcommand;
use ringdown_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print a config value
    Get {
        /// Dot-separated key, e.g. timer.duration_secs
        key: String,
    },
    /// Set a config value
    Set {
        key: String,
        value: String,
    },
    /// Print the whole configuration as TOML
    List,
    /// Print the config file path
    Path,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let cfg = Config::load()?;
            match cfg.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown config key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut cfg = Config::load()?;
            cfg.set(&key, &value)?;
            cfg.save()?;
            println!("{key} = {value}");
        }
        ConfigAction::List => {
            let cfg = Config::load()?;
            print!("{}", toml::to_string_pretty(&cfg)?);
        }
        ConfigAction::Path => {
            println!("{}", Config::config_path()?.display());
        }
    }
    Ok(())
}
