use crate::commands::CommandEnum;
use crate::Cli;
use crate::CommandResult;
use clap::Parser;
use std::process::ExitCode;
use tracing::Level;

fn quiet() -> Cli {
    Cli {
        cmd: None,
        verbose: false,
    }
}

#[test]
fn verbose_wins_over_env() {
    let cli = Cli {
        cmd: None,
        verbose: true,
    };

    assert_eq!(cli.log_level(Some("trace")), (Level::DEBUG, None));
}

#[test]
fn log_level_from_env() {
    assert_eq!(quiet().log_level(None), (Level::INFO, None));
    assert_eq!(quiet().log_level(Some("  ")), (Level::INFO, None));
    assert_eq!(quiet().log_level(Some("TRACE")), (Level::TRACE, None));
    assert_eq!(quiet().log_level(Some(" warn ")), (Level::WARN, None));
    assert_eq!(quiet().log_level(Some("Verbose")), (Level::DEBUG, None));
}

#[test]
fn unknown_log_level_warns() {
    let (level, warning) = quiet().log_level(Some("loud"));

    assert_eq!(level, Level::INFO);
    assert_eq!(
        warning.as_deref(),
        Some("Invalid `LOG_LEVEL` environment variable value: `loud`"),
    );
}

#[test]
fn parses_introspect_arguments() {
    let cli = Cli::try_parse_from([
        "gqlsel",
        "-v",
        "introspect",
        "http://localhost:4000/graphql",
        "-H",
        "Authorization: Bearer t",
        "--header",
        "x-trace: 1",
        "--no-variables",
    ]).unwrap();

    assert!(cli.verbose);
    let Some(CommandEnum::Introspect(cmd)) = cli.cmd else {
        panic!("Expected the introspect subcommand");
    };
    assert_eq!(cmd.endpoint, "http://localhost:4000/graphql");
    assert_eq!(cmd.headers, vec![
        ("Authorization".to_string(), "Bearer t".to_string()),
        ("x-trace".to_string(), "1".to_string()),
    ]);
    assert!(cmd.no_variables);
    assert!(!cmd.print_only);
}

#[test]
fn rejects_malformed_header() {
    let parsed = Cli::try_parse_from([
        "gqlsel",
        "introspect",
        "http://localhost:4000/graphql",
        "-H",
        "no-separator",
    ]);

    assert!(parsed.is_err());
}

#[test]
fn command_result_exit_codes() {
    let ok = CommandResult::success(format_args!("done"));
    assert_eq!(ok.stdout.as_deref(), Some("done"));
    assert_eq!(ok.print(), ExitCode::SUCCESS);

    let failed = CommandResult::failure(format_args!("broke: {}", 1));
    assert_eq!(failed.stderr.as_deref(), Some("broke: 1"));
    assert_eq!(failed.print(), ExitCode::FAILURE);
}
