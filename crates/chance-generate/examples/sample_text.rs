use std::env;
use std::path::PathBuf;

use chance_generate::{Chance, ChanceConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut config_path: Option<PathBuf> = None;
    let mut seed: Option<u64> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config_path = args.next().map(PathBuf::from),
            "--seed" => seed = args.next().map(|value| value.parse()).transpose()?,
            _ => return Err(format!("unexpected argument: {arg}").into()),
        }
    }

    let mut config = match config_path {
        Some(path) => ChanceConfig::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => ChanceConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }

    let mut chance = Chance::new(config);
    println!("seed={}", chance.seed());
    println!("boolean={}", chance.boolean(70)?);
    println!("character={}", chance.character()?);
    println!("randstring={}", chance.randstring(16)?);
    println!("word={}", chance.word(0, 0)?);
    println!("sentence={}", chance.sentence(0, 0)?);
    Ok(())
}
