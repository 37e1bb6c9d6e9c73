// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::{env, path::PathBuf};

use crate::core::locale::Locale;
use crate::infra::t;

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> String {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if let Some(lang) = args.get(pos + 1) {
            return lang.clone();
        }
    }
    // Fallback to system language detection
    sys_locale::get_locale().unwrap_or_else(|| "es".to_string())
}

fn build_cli(locale: &str) -> Command {
    let content_arg = |about: String| {
        Arg::new("content")
            .short('c')
            .long("content")
            .help(about)
            .value_name("CONTENT")
            .default_value("data/content.json")
            .value_parser(clap::value_parser!(PathBuf))
            .action(ArgAction::Set)
    };
    let locale_arg = |about: String| {
        Arg::new("locale")
            .short('l')
            .long("locale")
            .help(about)
            .value_name("LOCALE")
            .action(ArgAction::Set)
    };
    let prefs_arg = |about: String| {
        Arg::new("prefs")
            .long("prefs")
            .help(about)
            .value_name("PREFS")
            .default_value(crate::infra::prefs::DEFAULT_PREFS_FILE)
            .value_parser(clap::value_parser!(PathBuf))
            .action(ArgAction::Set)
    };

    Command::new("enlace")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("render")
                .about(t!("cmd_render_about", locale = locale).to_string())
                .arg(content_arg(t!("arg_content", locale = locale).to_string()))
                .arg(locale_arg(t!("arg_locale", locale = locale).to_string()))
                .arg(prefs_arg(t!("arg_prefs", locale = locale).to_string()))
                .arg(
                    Arg::new("out")
                        .short('o')
                        .long("out")
                        .help(t!("arg_out", locale = locale).to_string())
                        .value_name("OUT")
                        .default_value("page.html")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("countdown")
                .about(t!("cmd_countdown_about", locale = locale).to_string())
                .arg(content_arg(t!("arg_content", locale = locale).to_string()))
                .arg(locale_arg(t!("arg_locale", locale = locale).to_string()))
                .arg(prefs_arg(t!("arg_prefs", locale = locale).to_string())),
        )
        .subcommand(
            Command::new("rsvp")
                .about(t!("cmd_rsvp_about", locale = locale).to_string())
                .arg(content_arg(t!("arg_content", locale = locale).to_string()))
                .arg(locale_arg(t!("arg_locale", locale = locale).to_string()))
                .arg(prefs_arg(t!("arg_prefs", locale = locale).to_string()))
                .arg(
                    Arg::new("endpoint")
                        .short('e')
                        .long("endpoint")
                        .help(t!("arg_endpoint", locale = locale).to_string())
                        .value_name("ENDPOINT")
                        .required(true)
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("out")
                        .short('o')
                        .long("out")
                        .help(t!("arg_out", locale = locale).to_string())
                        .value_name("OUT")
                        .default_value("data/content.json")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help("Create a starter content document without launching the interactive wizard.")
                        .action(ArgAction::SetTrue),
                ),
        )
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first. The raw tag is matched
    // by two-letter prefix against the available catalogs.
    let language = Locale::from_tag(&pre_parse_language())
        .unwrap_or_default()
        .as_str()
        .to_string();
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();

    match matches.subcommand() {
        Some(("render", render_matches)) => {
            let content = render_matches
                .get_one::<PathBuf>("content")
                .unwrap() // Has default
                .clone();
            let out = render_matches
                .get_one::<PathBuf>("out")
                .unwrap() // Has default
                .clone();
            let locale = render_matches.get_one::<String>("locale").cloned();
            let prefs = render_matches
                .get_one::<PathBuf>("prefs")
                .unwrap() // Has default
                .clone();

            commands::render::execute(content, out, locale, prefs, &language)?;
        }
        Some(("countdown", countdown_matches)) => {
            let content = countdown_matches
                .get_one::<PathBuf>("content")
                .unwrap()
                .clone();
            let locale = countdown_matches.get_one::<String>("locale").cloned();
            let prefs = countdown_matches.get_one::<PathBuf>("prefs").unwrap().clone();

            commands::countdown::execute(content, locale, prefs, &language).await?;
        }
        Some(("rsvp", rsvp_matches)) => {
            let content = rsvp_matches.get_one::<PathBuf>("content").unwrap().clone();
            let endpoint = rsvp_matches
                .get_one::<String>("endpoint")
                .unwrap() // Required
                .clone();
            let locale = rsvp_matches.get_one::<String>("locale").cloned();
            let prefs = rsvp_matches.get_one::<PathBuf>("prefs").unwrap().clone();

            commands::rsvp::execute(content, endpoint, locale, prefs, &language).await?;
        }
        Some(("init", init_matches)) => {
            let out = init_matches.get_one::<PathBuf>("out").unwrap().clone();
            let non_interactive = init_matches.get_flag("non-interactive");

            // Show language detection message if it was auto-detected
            if env::args().all(|arg| arg != "--lang") {
                println!(
                    "🌍 {}",
                    t!("system_language_detected", locale = &language, lang = &language)
                );
            }
            commands::init::run_init_wizard(&out, &language, non_interactive)?;
        }
        _ => {
            // This case handles when no subcommand is given.
            // Clap will have already printed help info.
        }
    }
    Ok(())
}
