//! `kdict` command-line tool
//!
//! Create, inspect, edit and convert knowledge-dictionary documents.

mod commands;
mod config;

use std::path::{Path, PathBuf};

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use kdict_document::{Format, TemplateKind};
use tracing_subscriber::EnvFilter;

use crate::commands::{NewDocument, Session};
use crate::config::CliConfig;

/// Environment variable holding the log filter
const LOG_ENV: &str = "KDICT_LOG";

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_parser(value_parser!(Format))
        .help("Override the format inferred from the file extension (json, yaml)")
}

fn template_arg() -> Arg {
    Arg::new("template")
        .long("template")
        .value_parser(value_parser!(TemplateKind))
        .help("Load into this template instead of inferring one from the keys")
}

fn cli() -> Command {
    Command::new("kdict")
        .version(kdict_document::VERSION)
        .about("Template-seeded knowledge dictionaries for materials-science metadata")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML config file (defaults to $KDICT_CONFIG)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log at debug level"),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .global(true)
                .value_parser(value_parser!(usize))
                .conflicts_with("compact")
                .help("JSON indentation width"),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Write JSON on a single line"),
        )
        .subcommand(
            Command::new("templates")
                .about("List templates, or print one template's default shape")
                .arg(
                    Arg::new("name")
                        .value_parser(value_parser!(TemplateKind))
                        .help("Template to print"),
                ),
        )
        .subcommand(
            Command::new("new")
                .about("Create a document from a template")
                .arg(
                    Arg::new("template")
                        .value_parser(value_parser!(TemplateKind))
                        .help("Template name (defaults to the configured template)"),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_parser(value_parser!(PathBuf))
                        .help("Write to this file instead of stdout"),
                )
                .arg(format_arg())
                .arg(
                    Arg::new("data")
                        .long("data")
                        .value_parser(value_parser!(PathBuf))
                        .help("JSON or YAML mapping merged over the template"),
                )
                .arg(
                    Arg::new("set")
                        .long("set")
                        .action(ArgAction::Append)
                        .value_name("PATH=VALUE")
                        .help("Set a dotted path; VALUE is parsed as JSON when possible"),
                )
                .arg(
                    Arg::new("generate-id")
                        .long("generate-id")
                        .action(ArgAction::SetTrue)
                        .help("Store a random identifier under `id`"),
                ),
        )
        .subcommand(
            Command::new("get")
                .about("Print the value at a dotted path")
                .arg(Arg::new("file").required(true).value_parser(value_parser!(PathBuf)))
                .arg(Arg::new("path").required(true))
                .arg(format_arg())
                .arg(template_arg()),
        )
        .subcommand(
            Command::new("set")
                .about("Set the value at a dotted path and save in place")
                .arg(Arg::new("file").required(true).value_parser(value_parser!(PathBuf)))
                .arg(Arg::new("path").required(true))
                .arg(Arg::new("value").required(true))
                .arg(format_arg())
                .arg(template_arg()),
        )
        .subcommand(
            Command::new("merge")
                .about("Deep-merge a patch mapping into a document")
                .arg(Arg::new("file").required(true).value_parser(value_parser!(PathBuf)))
                .arg(Arg::new("patch").required(true).value_parser(value_parser!(PathBuf)))
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_parser(value_parser!(PathBuf))
                        .help("Write here instead of overwriting FILE"),
                )
                .arg(template_arg()),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a document between JSON and YAML")
                .arg(Arg::new("input").required(true).value_parser(value_parser!(PathBuf)))
                .arg(Arg::new("output").required(true).value_parser(value_parser!(PathBuf)))
                .arg(template_arg()),
        )
        .subcommand(
            Command::new("id")
                .about("Print a random alphanumeric identifier")
                .arg(
                    Arg::new("length")
                        .long("length")
                        .value_parser(value_parser!(usize))
                        .help("Identifier length (defaults to the configured length)"),
                ),
        )
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn path<'a>(args: &'a ArgMatches, id: &str) -> Option<&'a Path> {
    args.get_one::<PathBuf>(id).map(PathBuf::as_path)
}

/// Required positionals are enforced by clap before dispatch
fn required<'a>(args: &'a ArgMatches, id: &str) -> anyhow::Result<&'a Path> {
    path(args, id).ok_or_else(|| anyhow::anyhow!("missing <{id}>"))
}

fn text<'a>(args: &'a ArgMatches, id: &str) -> anyhow::Result<&'a str> {
    args.get_one::<String>(id)
        .map(String::as_str)
        .ok_or_else(|| anyhow::anyhow!("missing <{id}>"))
}

fn print(output: Option<String>) {
    if let Some(text) = output {
        println!("{}", text.trim_end());
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let mut config = CliConfig::load(path(matches, "config"))?;
    if matches.get_flag("compact") {
        config = config.with_indent(None);
    } else if let Some(&width) = matches.get_one::<usize>("indent") {
        config = config.with_indent(Some(width));
    }
    let session = Session::new(config);

    match matches.subcommand() {
        Some(("templates", args)) => {
            print(Some(session.templates(args.get_one::<TemplateKind>("name").copied())?));
        }
        Some(("new", args)) => {
            let document = session.create(NewDocument {
                template: args.get_one::<TemplateKind>("template").copied(),
                data: args.get_one::<PathBuf>("data").cloned(),
                assignments: args
                    .get_many::<String>("set")
                    .map(|values| values.cloned().collect())
                    .unwrap_or_default(),
                generate_id: args.get_flag("generate-id"),
            })?;
            let format = args.get_one::<Format>("format").copied();
            print(session.emit(&document, path(args, "output"), format)?);
        }
        Some(("get", args)) => {
            let (document, _) = session.open(
                required(args, "file")?,
                args.get_one::<Format>("format").copied(),
                args.get_one::<TemplateKind>("template").copied(),
            )?;
            print(Some(session.get(&document, text(args, "path")?)?));
        }
        Some(("set", args)) => {
            session.set(
                required(args, "file")?,
                args.get_one::<Format>("format").copied(),
                args.get_one::<TemplateKind>("template").copied(),
                text(args, "path")?,
                text(args, "value")?,
            )?;
        }
        Some(("merge", args)) => {
            session.merge(
                required(args, "file")?,
                required(args, "patch")?,
                path(args, "output"),
                args.get_one::<TemplateKind>("template").copied(),
            )?;
        }
        Some(("convert", args)) => {
            session.convert(
                required(args, "input")?,
                required(args, "output")?,
                args.get_one::<TemplateKind>("template").copied(),
            )?;
        }
        Some(("id", args)) => {
            print(Some(session.id(args.get_one::<usize>("length").copied())));
        }
        _ => unreachable!("subcommand_required is set"),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("verbose"));
    run(&matches)
}
