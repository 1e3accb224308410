//! CLI parse tests.

use super::{ArticleAction, Cli, CliCommand, PrefsAction};
use clap::Parser;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_resolve() {
    match parse(&["urlalias", "resolve", "/blog/old-post?ref=x"]) {
        CliCommand::Resolve { request_uri } => {
            assert_eq!(request_uri, "/blog/old-post?ref=x");
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_list_defaults() {
    match parse(&["urlalias", "list"]) {
        CliCommand::List {
            sort,
            dir,
            filter,
            page,
            per_page,
        } => {
            assert!(sort.is_none());
            assert!(dir.is_none());
            assert!(filter.is_none());
            assert_eq!(page, 1);
            assert!(per_page.is_none());
        }
        _ => panic!("expected List"),
    }
}

#[test]
fn cli_parse_list_flags() {
    match parse(&[
        "urlalias", "list", "--sort", "title", "--dir", "asc", "--filter", "widget", "--page",
        "3", "--per-page", "10",
    ]) {
        CliCommand::List {
            sort,
            dir,
            filter,
            page,
            per_page,
        } => {
            assert_eq!(sort.as_deref(), Some("title"));
            assert_eq!(dir.as_deref(), Some("asc"));
            assert_eq!(filter.as_deref(), Some("widget"));
            assert_eq!(page, 3);
            assert_eq!(per_page, Some(10));
        }
        _ => panic!("expected List"),
    }
}

#[test]
fn cli_parse_clear_requires_selection() {
    assert!(Cli::try_parse_from(["urlalias", "clear"]).is_err());

    match parse(&["urlalias", "clear", "42:3", "7:1"]) {
        CliCommand::Clear { selected } => {
            assert_eq!(selected, vec!["42:3".to_string(), "7:1".to_string()]);
        }
        _ => panic!("expected Clear"),
    }
}

#[test]
fn cli_parse_prefs() {
    match parse(&["urlalias", "prefs", "show"]) {
        CliCommand::Prefs {
            action: PrefsAction::Show,
        } => {}
        _ => panic!("expected Prefs Show"),
    }

    match parse(&[
        "urlalias",
        "prefs",
        "set",
        "--fields",
        "2,5,7",
        "--permanent",
        "1",
    ]) {
        CliCommand::Prefs {
            action:
                PrefsAction::Set {
                    fields,
                    permanent,
                    validity_hint,
                },
        } => {
            assert_eq!(fields.as_deref(), Some("2,5,7"));
            assert_eq!(permanent.as_deref(), Some("1"));
            assert!(validity_hint.is_none());
        }
        _ => panic!("expected Prefs Set"),
    }
}

#[test]
fn cli_parse_article() {
    match parse(&[
        "urlalias",
        "article",
        "add",
        "Old post",
        "https://example.com/a/42",
    ]) {
        CliCommand::Article {
            action: ArticleAction::Add { title, url, status },
        } => {
            assert_eq!(title, "Old post");
            assert_eq!(url, "https://example.com/a/42");
            assert_eq!(status, "live");
        }
        _ => panic!("expected Article Add"),
    }

    match parse(&["urlalias", "article", "set-field", "42", "3", "blog/old-post"]) {
        CliCommand::Article {
            action: ArticleAction::SetField { id, field, value },
        } => {
            assert_eq!(id, 42);
            assert_eq!(field, 3);
            assert_eq!(value, "blog/old-post");
        }
        _ => panic!("expected Article SetField"),
    }
}

#[test]
fn cli_parse_lifecycle_and_diag() {
    assert!(matches!(parse(&["urlalias", "diag"]), CliCommand::Diag));
    assert!(matches!(parse(&["urlalias", "install"]), CliCommand::Install));
    assert!(matches!(
        parse(&["urlalias", "uninstall"]),
        CliCommand::Uninstall
    ));
}
