use clap::Subcommand;
use dayboard_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print a single value by dot-separated key
    Get { key: String },
    /// Set a value by dot-separated key and persist
    Set { key: String, value: String },
    /// Print the whole configuration as TOML
    List,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load_or_default();
    match action {
        ConfigAction::Get { key } => match config.get(&key) {
            Some(value) => println!("{value}"),
            None => {
                eprintln!("unknown config key: {key}");
                std::process::exit(1);
            }
        },
        ConfigAction::Set { key, value } => {
            config.set(&key, &value)?;
            println!("{key} = {value}");
        }
        ConfigAction::List => {
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
