use super::*;

#[test]
fn parses_collect_with_repeated_flags() {
    let cli = Cli::try_parse_from([
        "osmon", "collect", "-k", "rust", "-k", "tokio", "-s", "twitter", "-m", "5",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Collect {
            keywords,
            sources,
            max_results,
        } => {
            assert_eq!(keywords, vec!["rust", "tokio"]);
            assert_eq!(sources, vec!["twitter"]);
            assert_eq!(max_results, Some(5));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn collect_without_flags_defers_to_config() {
    let cli = Cli::try_parse_from(["osmon", "collect"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Collect {
            ref keywords,
            ref sources,
            max_results: None,
        } if keywords.is_empty() && sources.is_empty()
    ));
}

#[test]
fn parses_mentions_filters() {
    let cli = Cli::try_parse_from([
        "osmon",
        "mentions",
        "--source",
        "reddit",
        "--sentiment",
        "negative",
        "--filter",
        "keyword=ai",
        "--limit",
        "3",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Mentions {
            limit: 3,
            source: Some(ref s),
            keyword: None,
            sentiment: Some(ref l),
            ref filters,
        } if s == "reddit" && l == "negative" && filters == &vec!["keyword=ai".to_string()]
    ));
}

#[test]
fn mentions_limit_defaults_to_twenty() {
    let cli = Cli::try_parse_from(["osmon", "mentions"]).unwrap();
    assert!(matches!(cli.command, Commands::Mentions { limit: 20, .. }));
}

#[test]
fn parses_report_json_to_file() {
    let cli = Cli::try_parse_from([
        "osmon", "report", "--format", "json", "--output", "out.json",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Report {
            format: ReportFormat::Json,
            output: Some(ref p),
            limit: None,
        } if p == &PathBuf::from("out.json")
    ));
}

#[test]
fn report_defaults_to_text_on_stdout() {
    let cli = Cli::try_parse_from(["osmon", "report"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Report {
            format: ReportFormat::Text,
            output: None,
            ..
        }
    ));
}

#[test]
fn rejects_unknown_report_format() {
    assert!(Cli::try_parse_from(["osmon", "report", "--format", "pdf"]).is_err());
}

#[test]
fn parses_clear_flags() {
    let cli = Cli::try_parse_from(["osmon", "clear", "--yes", "--mentions-only"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Clear {
            yes: true,
            mentions_only: true
        }
    ));

    let cli = Cli::try_parse_from(["osmon", "clear"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Clear {
            yes: false,
            mentions_only: false
        }
    ));
}

#[test]
fn parses_stats_and_config() {
    let cli = Cli::try_parse_from(["osmon", "stats"]).unwrap();
    assert!(matches!(cli.command, Commands::Stats));
    let cli = Cli::try_parse_from(["osmon", "config"]).unwrap();
    assert!(matches!(cli.command, Commands::Config));
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["osmon"]).is_err());
}
