//! Integration tests for tokenizing and resolving command-line arguments

use elz::args::{Args, Token};
use elz::error::{ArgError, InvalidArgs, SyntaxError};

#[test]
fn test_help_with_other_flags() {
    let mut args = Args::parse(["--locale=fr", "-h"]);

    assert!(args.help_flag());
    assert_eq!(args.command(), None);
    assert!(args.is_claimed(1));
    assert!(!args.is_claimed(0));
}

#[test]
fn test_command_then_flag() {
    let mut args = Args::parse(["init", "--debug"]);

    assert_eq!(args.command(), Some("init".to_string()));
    assert_eq!(args.bool_flag("debug", None, true), Ok(true));
    assert_eq!(args.done(), Ok(()));
}

#[test]
fn test_short_group_with_value() {
    let args = Args::parse(["-xy=5"]);
    let tokens = args.tokens();

    assert_eq!(tokens.len(), 2);
    let x = tokens[0].argument();
    let y = tokens[1].argument();
    assert_eq!((x.name.as_str(), x.has_value), ("x", false));
    assert_eq!((y.name.as_str(), y.has_value, y.value.as_str()), ("y", true, "5"));
}

#[test]
fn test_short_group_value_rejected_by_boolean() {
    let mut args = Args::parse(["-xy=5"]);

    assert_eq!(args.bool_flag("x-ray", Some("x"), true), Ok(true));
    assert_eq!(
        args.bool_flag("yes", Some("y"), true),
        Err(ArgError::UnexpectedValue("\"-y\" or \"--yes\"".to_string()))
    );
    assert_eq!(args.done(), Ok(()));
}

#[test]
fn test_double_dash_makes_flags_literal() {
    let mut args = Args::parse(["--", "--foo"]);

    match &args.tokens()[0] {
        Token::Valid(arg) => {
            assert!(!arg.is_flag);
            assert!(!arg.may_be_command);
            assert_eq!(arg.value, "--foo");
        }
        other => panic!("expected a valid positional, got {:?}", other),
    }

    assert_eq!(args.bool_flag("foo", None, true), Ok(false));
    assert_eq!(args.command(), None);
    assert_eq!(
        args.done(),
        Err(InvalidArgs(vec![ArgError::UnexpectedArgument(
            "--foo".to_string()
        )]))
    );
}

#[test]
fn test_unclaimed_command_is_reported_once() {
    let args = Args::parse(["locale"]);
    let InvalidArgs(errs) = args.done().unwrap_err();

    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].to_string(), "Unexpected argument \"locale\"");
}

#[test]
fn test_repeated_flag_is_not_reported_as_unexpected() {
    let mut args = Args::parse(["--debug", "init", "--debug"]);

    assert!(matches!(
        args.bool_flag("debug", None, true),
        Err(ArgError::UsedMoreThanOnce(_))
    ));
    assert_eq!(args.command(), Some("init".to_string()));
    assert_eq!(args.done(), Ok(()));
}

#[test]
fn test_malformed_flag_claimed_then_reported() {
    let mut args = Args::parse(["--debug:", "init"]);

    assert_eq!(args.command(), Some("init".to_string()));
    let _ = args.bool_flag("debug", None, true);

    let InvalidArgs(errs) = args.done().unwrap_err();
    assert_eq!(
        errs,
        vec![ArgError::Syntax(SyntaxError::MissingSuffix(
            "--debug:".to_string()
        ))]
    );
}

#[test]
fn test_every_problem_is_reported() {
    let mut args = Args::parse(["release", "one", "-ab", "--x=", "--", "two"]);
    assert_eq!(args.command(), Some("release".to_string()));

    let InvalidArgs(errs) = args.done().unwrap_err();
    let messages: Vec<String> = errs.iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        vec![
            "Unexpected argument \"one\"",
            "Unexpected flag \"-a\"",
            "Unexpected flag \"-b\"",
            "Unexpected flag \"-x\"",
            "Unexpected argument \"two\"",
        ]
    );
}
