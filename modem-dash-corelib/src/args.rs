//! Helpers to read one configuration value from command-line arguments, falling back to an
//! environment variable.
//!
//! The argument must be registered to the [`clap::Command`] before calling these functions.

use std::{env, str::FromStr};

use clap::ArgMatches;

/// Reads a string argument or the environment variable `env_key`.
pub fn read_string(args: &ArgMatches, id: &str, env_key: &str) -> Option<String> {
    match args.get_one::<String>(id) {
        None => env::var(env_key).ok(),
        Some(v) => Some(v.clone()),
    }
}

/// Reads a `u64` argument or parses the environment variable `env_key`.
///
/// An environment value that cannot be parsed is treated as missing.
pub fn read_number<T>(args: &ArgMatches, id: &str, env_key: &str) -> Option<T>
where
    T: FromStr + TryFrom<u64>,
{
    match args.get_one::<u64>(id) {
        None => match env::var(env_key) {
            Err(_) => None,
            Ok(v) => v.trim().parse::<T>().ok(),
        },
        Some(v) => T::try_from(*v).ok(),
    }
}

/// Reads a boolean argument or the environment variable `env_key`.
///
/// `true`/`1`/`yes` and `false`/`0`/`no` are accepted for the environment variable.
pub fn read_bool(args: &ArgMatches, id: &str, env_key: &str) -> Option<bool> {
    match args.get_one::<bool>(id) {
        None => match env::var(env_key) {
            Err(_) => None,
            Ok(v) => match v.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => Some(true),
                "false" | "0" | "no" => Some(false),
                _ => None,
            },
        },
        Some(v) => Some(*v),
    }
}
