use std::{path::PathBuf, process::exit};

use clap::Parser;
use typed712_bind::{mapping::TypeRegistry, rustgen::generate};

#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "Generates rust EIP-712 typed data bindings from a json type schema"
)]
struct Generator {
    /// Name of the package to generate.
    #[arg(long, default_value = "eip712_types")]
    package: String,

    /// Output file name of the generated rust source.
    #[arg(long, default_value = "eip712_types.rs")]
    out: PathBuf,

    /// Output directory of the generated rust source.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Path to the eip-712 types json file.
    #[arg(long, default_value = "types/eip712_types.json")]
    filepath: PathBuf,

    /// Custom type mapping json file, replaces the builtin type registry.
    #[arg(long)]
    mapping: Option<PathBuf>,

    /// Use verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() {
    let config = Generator::parse();

    let level = if config.verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };

    pretty_env_logger::formatted_timed_builder()
        .filter_level(level)
        .init();

    if let Err(err) = run(config) {
        log::error!("eip712-types-generator exit with error: {:#}", err);
        exit(1);
    }
}

fn run(config: Generator) -> anyhow::Result<()> {
    let custom;

    let registry = match &config.mapping {
        Some(path) => {
            custom = TypeRegistry::load(path)?;
            &custom
        }
        None => TypeRegistry::builtin(),
    };

    let target = config.out_dir.join(&config.out);

    log::debug!(
        "generate package={}, schema={}, target={}",
        config.package,
        config.filepath.display(),
        target.display()
    );

    generate(&config.filepath, registry, &config.package, target)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Generator::parse_from(["eip712-types-generator"]);

        assert_eq!(config.package, "eip712_types");
        assert_eq!(config.out_dir.join(&config.out), PathBuf::from("./eip712_types.rs"));
        assert_eq!(config.filepath, PathBuf::from("types/eip712_types.json"));
        assert!(config.mapping.is_none());
        assert!(!config.verbose);
    }

    #[test]
    fn test_flags() {
        let config = Generator::parse_from([
            "eip712-types-generator",
            "--package",
            "registry",
            "--out",
            "registry.rs",
            "--out-dir",
            "src",
            "--filepath",
            "schema.json",
            "--mapping",
            "mapping.json",
            "-v",
        ]);

        assert_eq!(config.package, "registry");
        assert_eq!(config.out_dir.join(&config.out), PathBuf::from("src/registry.rs"));
        assert_eq!(config.filepath, PathBuf::from("schema.json"));
        assert_eq!(config.mapping, Some(PathBuf::from("mapping.json")));
        assert!(config.verbose);
    }

    #[test]
    fn test_run_missing_schema() {
        let config = Generator::parse_from([
            "eip712-types-generator",
            "--filepath",
            "not/exists/eip712_types.json",
            "--out-dir",
            "not/exists",
        ]);

        assert!(run(config).is_err());
        assert!(!PathBuf::from("not/exists/eip712_types.rs").exists());
    }
}
