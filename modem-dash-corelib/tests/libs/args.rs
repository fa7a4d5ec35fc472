use clap::{Arg, ArgAction, Command, builder::RangedU64ValueParser};
use laboratory::{SpecContext, expect};

use modem_dash_corelib::args;

use super::{remove_env_var, set_env_var};
use crate::TestState;

fn new_cmd() -> Command {
    Command::new("test")
        .arg(Arg::new("test.string").long("test.string").num_args(1))
        .arg(
            Arg::new("test.number")
                .long("test.number")
                .num_args(1)
                .value_parser(RangedU64ValueParser::<u64>::new()),
        )
        .arg(
            Arg::new("test.bool")
                .long("test.bool")
                .num_args(1)
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(bool)),
        )
}

/// Test [`args::read_string`].
pub fn read_string(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    remove_env_var("TEST_ARGS_STRING");
    let matches = new_cmd().get_matches_from(vec!["test"]);
    expect(args::read_string(&matches, "test.string", "TEST_ARGS_STRING")).to_equal(None)?;

    set_env_var("TEST_ARGS_STRING", "env");
    expect(args::read_string(&matches, "test.string", "TEST_ARGS_STRING"))
        .to_equal(Some("env".to_string()))?;

    let matches = new_cmd().get_matches_from(vec!["test", "--test.string", "arg"]);
    expect(args::read_string(&matches, "test.string", "TEST_ARGS_STRING"))
        .to_equal(Some("arg".to_string()))
}

/// Test [`args::read_number`].
pub fn read_number(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    remove_env_var("TEST_ARGS_NUMBER");
    let matches = new_cmd().get_matches_from(vec!["test"]);
    expect(args::read_number::<u16>(&matches, "test.number", "TEST_ARGS_NUMBER"))
        .to_equal(None)?;

    set_env_var("TEST_ARGS_NUMBER", " 1081 ");
    expect(args::read_number::<u16>(&matches, "test.number", "TEST_ARGS_NUMBER"))
        .to_equal(Some(1081))?;

    set_env_var("TEST_ARGS_NUMBER", "port");
    expect(args::read_number::<u16>(&matches, "test.number", "TEST_ARGS_NUMBER"))
        .to_equal(None)?;

    set_env_var("TEST_ARGS_NUMBER", "70000");
    expect(args::read_number::<u16>(&matches, "test.number", "TEST_ARGS_NUMBER"))
        .to_equal(None)?;

    let matches = new_cmd().get_matches_from(vec!["test", "--test.number", "15"]);
    expect(args::read_number::<u64>(&matches, "test.number", "TEST_ARGS_NUMBER"))
        .to_equal(Some(15))?;

    let matches = new_cmd().get_matches_from(vec!["test", "--test.number", "70000"]);
    expect(args::read_number::<u16>(&matches, "test.number", "TEST_ARGS_NUMBER")).to_equal(None)
}

/// Test [`args::read_bool`].
pub fn read_bool(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    remove_env_var("TEST_ARGS_BOOL");
    let matches = new_cmd().get_matches_from(vec!["test"]);
    expect(args::read_bool(&matches, "test.bool", "TEST_ARGS_BOOL")).to_equal(None)?;

    for value in ["true", "1", "YES"] {
        set_env_var("TEST_ARGS_BOOL", value);
        expect(args::read_bool(&matches, "test.bool", "TEST_ARGS_BOOL")).to_equal(Some(true))?;
    }
    for value in ["false", "0", "no"] {
        set_env_var("TEST_ARGS_BOOL", value);
        expect(args::read_bool(&matches, "test.bool", "TEST_ARGS_BOOL")).to_equal(Some(false))?;
    }
    set_env_var("TEST_ARGS_BOOL", "maybe");
    expect(args::read_bool(&matches, "test.bool", "TEST_ARGS_BOOL")).to_equal(None)?;

    let matches = new_cmd().get_matches_from(vec!["test", "--test.bool", "true"]);
    expect(args::read_bool(&matches, "test.bool", "TEST_ARGS_BOOL")).to_equal(Some(true))
}
