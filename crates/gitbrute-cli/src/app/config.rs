use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use gitbrute::HexPrefix;

/// Command line for the `gitbrute` binary.
///
/// Every flag except `--verbose` can also come from an environment variable,
/// and a `.env` file is loaded before parsing.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "gitbrute",
    version,
    about = "Amend HEAD so its commit hash starts with a chosen hex prefix"
)]
pub struct CliArgs {
    /// Hex prefix the new commit hash must start with.
    ///
    /// Environment variable: `GITBRUTE_PREFIX`
    #[arg(long, env = "GITBRUTE_PREFIX", default_value_t = String::from("bf"))]
    pub prefix: String,

    /// Search even if the current HEAD hash already has the prefix.
    ///
    /// Environment variable: `GITBRUTE_FORCE`
    #[arg(long, env = "GITBRUTE_FORCE", default_value_t = false)]
    pub force: bool,

    /// Number of worker threads. Defaults to the number of logical CPUs.
    ///
    /// Environment variable: `GITBRUTE_CPUS`
    #[arg(long, env = "GITBRUTE_CPUS", default_value_t = num_cpus::get())]
    pub cpus: usize,

    /// Find a solution and report it without amending the commit.
    ///
    /// Environment variable: `GITBRUTE_DRYRUN`
    #[arg(long, env = "GITBRUTE_DRYRUN", default_value_t = false)]
    pub dryrun: bool,

    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Repository whose HEAD is amended.
    ///
    /// Environment variable: `GITBRUTE_REPO`
    #[arg(long, env = "GITBRUTE_REPO", default_value = ".")]
    pub repo: PathBuf,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub prefix: HexPrefix,
    pub force: bool,
    pub workers: usize,
    pub dryrun: bool,
    pub verbose: bool,
    pub repo: PathBuf,
}

impl TryFrom<CliArgs> for AppConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.cpus == 0 {
            bail!("GITBRUTE_CPUS must be greater than 0");
        }

        let prefix = HexPrefix::new(&args.prefix).context("GITBRUTE_PREFIX is not usable")?;

        Ok(Self {
            prefix,
            force: args.force,
            workers: args.cpus,
            dryrun: args.dryrun,
            verbose: args.verbose,
            repo: args.repo,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<AppConfig> {
        let args = CliArgs::try_parse_from(core::iter::once("gitbrute").chain(args.iter().copied()))?;
        AppConfig::try_from(args)
    }

    #[test]
    fn defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.prefix.as_str(), "bf");
        assert!(!config.force);
        assert!(!config.dryrun);
        assert!(!config.verbose);
        assert_eq!(config.workers, num_cpus::get());
        assert_eq!(config.repo, PathBuf::from("."));
    }

    #[test]
    fn all_flags() {
        let config = parse(&[
            "--prefix", "C0FFEE", "--force", "--cpus", "3", "--dryrun", "-v", "--repo", "/tmp/r",
        ])
        .unwrap();
        assert_eq!(config.prefix.as_str(), "c0ffee");
        assert!(config.force);
        assert!(config.dryrun);
        assert!(config.verbose);
        assert_eq!(config.workers, 3);
        assert_eq!(config.repo, PathBuf::from("/tmp/r"));
    }

    #[test]
    fn rejects_non_hex_prefix() {
        let err = parse(&["--prefix", "xyz"]).unwrap_err();
        assert!(err.to_string().contains("GITBRUTE_PREFIX"), "{err:#}");
        assert!(format!("{err:#}").contains("isn't hex"), "{err:#}");
    }

    #[test]
    fn rejects_overlong_prefix() {
        let prefix = "a".repeat(41);
        let err = parse(&["--prefix", &prefix]).unwrap_err();
        assert!(format!("{err:#}").contains("41"), "{err:#}");
    }

    #[test]
    fn rejects_zero_cpus() {
        let err = parse(&["--cpus", "0"]).unwrap_err();
        assert!(err.to_string().contains("GITBRUTE_CPUS"), "{err:#}");
    }

    #[test]
    fn empty_prefix_is_allowed() {
        let config = parse(&["--prefix", ""]).unwrap();
        assert!(config.prefix.is_empty());
    }
}
