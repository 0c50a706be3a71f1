use clap::Parser;

use super::{Cli, Commands};

#[test]
fn search_accepts_repeated_ingredients() {
    let cli = Cli::parse_from([
        "vaidya",
        "search",
        "--disease",
        "Cough",
        "--ingredient",
        "tulsi",
        "--ingredient",
        "ginger",
    ]);
    let Commands::Search(args) = cli.command else {
        panic!("expected search command");
    };
    assert_eq!(args.disease.as_deref(), Some("Cough"));
    assert_eq!(args.ingredients, vec!["tulsi", "ginger"]);
    assert!(!args.json);
    assert_eq!(args.detail, None);
}

#[test]
fn root_defaults_to_dot_vaidya() {
    let cli = Cli::parse_from(["vaidya", "filters"]);
    assert_eq!(cli.root, std::path::PathBuf::from(".vaidya"));
}

#[test]
fn chat_takes_a_free_form_question() {
    let cli = Cli::parse_from(["vaidya", "chat", "what helps a dry cough?"]);
    let Commands::Chat(args) = cli.command else {
        panic!("expected chat command");
    };
    assert_eq!(args.question, "what helps a dry cough?");
}

#[test]
fn web_has_default_bind_address() {
    let cli = Cli::parse_from(["vaidya", "web"]);
    let Commands::Web(args) = cli.command else {
        panic!("expected web command");
    };
    assert_eq!(args.host, "127.0.0.1");
    assert_eq!(args.port, 8787);
}
