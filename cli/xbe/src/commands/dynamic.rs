//! Resource subcommands generated from the catalog.
//!
//! `xbe view <resource> <verb>` and `xbe do <resource> <verb>` are not derived:
//! each catalog entry becomes a clap `Command` whose flags come from its
//! filters and writable fields. Values are read back as strings and converted
//! by the handlers, so a malformed value surfaces as a validation error with
//! the flag name instead of a clap type error.

use std::marker::PhantomData;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command, FromArgMatches, Subcommand};

use crate::catalog::{
    self, FilterKind, ResourceSpec, ValueKind, Verb, RESOURCES,
};

/// `page[limit]` sent by `list` unless `--limit` says otherwise.
const DEFAULT_PAGE_SIZE: &str = "50";

/// Which verbs a command group exposes.
pub trait VerbSet {
    const VERBS: &'static [Verb];
}

#[derive(Debug, Clone, Copy)]
pub struct ReadVerbs;

impl VerbSet for ReadVerbs {
    const VERBS: &'static [Verb] = Verb::READ;
}

#[derive(Debug, Clone, Copy)]
pub struct WriteVerbs;

impl VerbSet for WriteVerbs {
    const VERBS: &'static [Verb] = Verb::WRITE;
}

/// A parsed `<resource> <verb> [flags]` invocation.
#[derive(Debug, Clone)]
pub struct ResourceInvocation<V> {
    pub spec: &'static ResourceSpec,
    pub verb: Verb,
    pub matches: ArgMatches,
    verbs: PhantomData<V>,
}

impl<V: VerbSet> FromArgMatches for ResourceInvocation<V> {
    fn from_arg_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        let (name, resource_matches) = matches
            .subcommand()
            .ok_or_else(|| clap::Error::raw(ErrorKind::MissingSubcommand, "a resource is required\n"))?;
        let spec = catalog::resource(name)
            .filter(|spec| spec.supports_any(V::VERBS))
            .ok_or_else(|| {
                clap::Error::raw(ErrorKind::InvalidSubcommand, format!("unknown resource '{name}'\n"))
            })?;

        let (verb_name, verb_matches) = resource_matches.subcommand().ok_or_else(|| {
            clap::Error::raw(ErrorKind::MissingSubcommand, format!("a command for {name} is required\n"))
        })?;
        let verb = Verb::from_name(verb_name)
            .filter(|verb| V::VERBS.contains(verb) && spec.supports(*verb))
            .ok_or_else(|| {
                clap::Error::raw(
                    ErrorKind::InvalidSubcommand,
                    format!("{name} does not support '{verb_name}'\n"),
                )
            })?;

        Ok(Self {
            spec,
            verb,
            matches: verb_matches.clone(),
            verbs: PhantomData,
        })
    }

    fn update_from_arg_matches(&mut self, matches: &ArgMatches) -> Result<(), clap::Error> {
        *self = Self::from_arg_matches(matches)?;
        Ok(())
    }
}

impl<V: VerbSet> Subcommand for ResourceInvocation<V> {
    fn augment_subcommands(cmd: Command) -> Command {
        RESOURCES
            .iter()
            .filter(|spec| spec.supports_any(V::VERBS))
            .fold(cmd, |cmd, spec| cmd.subcommand(resource_command(spec, V::VERBS)))
            .subcommand_required(true)
            .arg_required_else_help(true)
    }

    fn augment_subcommands_for_update(cmd: Command) -> Command {
        Self::augment_subcommands(cmd)
    }

    fn has_subcommand(name: &str) -> bool {
        catalog::resource(name).is_some_and(|spec| spec.supports_any(V::VERBS))
    }
}

fn resource_command(spec: &'static ResourceSpec, verbs: &[Verb]) -> Command {
    spec.verbs
        .iter()
        .filter(|verb| verbs.contains(verb))
        .fold(Command::new(spec.name).about(spec.about), |cmd, verb| {
            cmd.subcommand(verb_command(spec, *verb))
        })
        .subcommand_required(true)
        .arg_required_else_help(true)
}

fn verb_command(spec: &'static ResourceSpec, verb: Verb) -> Command {
    match verb {
        Verb::List => list_command(spec),
        Verb::Show => Command::new("show")
            .about(format!("Show a {}", spec.singular))
            .arg(id_arg())
            .arg(
                Arg::new("omit-null")
                    .long("omit-null")
                    .action(ArgAction::SetTrue)
                    .help("Drop null attributes from JSON output"),
            ),
        Verb::Create => write_args(
            Command::new("create").about(format!("Create a {}", spec.singular)),
            spec,
            true,
        ),
        Verb::Update => write_args(
            Command::new("update")
                .about(format!("Update a {}", spec.singular))
                .arg(id_arg()),
            spec,
            false,
        ),
        Verb::Delete => Command::new("delete")
            .about(format!("Delete a {}", spec.singular))
            .arg(id_arg())
            .arg(
                Arg::new("confirm")
                    .long("confirm")
                    .action(ArgAction::SetTrue)
                    .help("Confirm the deletion"),
            ),
    }
}

fn id_arg() -> Arg {
    Arg::new("id").value_name("ID").required(true).help("Resource ID")
}

fn list_command(spec: &'static ResourceSpec) -> Command {
    let mut cmd = Command::new("list")
        .about(format!("List {}", spec.name))
        .arg(
            Arg::new("limit")
                .long("limit")
                .value_name("N")
                .value_parser(clap::value_parser!(u32))
                .default_value(DEFAULT_PAGE_SIZE)
                .help("Page size (0 for the server default)"),
        )
        .arg(
            Arg::new("offset")
                .long("offset")
                .value_name("N")
                .value_parser(clap::value_parser!(u32))
                .help("Page offset"),
        )
        .arg(
            Arg::new("sort")
                .long("sort")
                .value_name("FIELDS")
                .allow_hyphen_values(true)
                .help(match spec.default_sort {
                    Some(sort) => format!("Sort order (default: {sort})"),
                    None => "Sort order".to_string(),
                }),
        )
        .arg(
            Arg::new("filter")
                .long("filter")
                .value_name("KEY=VALUE")
                .action(ArgAction::Append)
                .allow_hyphen_values(true)
                .help("Raw filter[KEY]=VALUE (repeatable)"),
        );

    if spec.timestamps {
        for (flag, help) in [
            ("created-at-min", "Created on or after (ISO 8601)"),
            ("created-at-max", "Created on or before (ISO 8601)"),
            ("updated-at-min", "Updated on or after (ISO 8601)"),
            ("updated-at-max", "Updated on or before (ISO 8601)"),
        ] {
            cmd = cmd.arg(Arg::new(flag).long(flag).value_name("TIME").help(help));
        }
    }

    for filter in spec.filters {
        let arg = Arg::new(filter.flag).long(filter.flag).help(filter.help);
        cmd = cmd.arg(match filter.kind {
            FilterKind::Text => arg.value_name("VALUE").allow_hyphen_values(true),
            FilterKind::Switch => arg.action(ArgAction::SetTrue),
        });
    }
    cmd
}

fn write_args(mut cmd: Command, spec: &'static ResourceSpec, creating: bool) -> Command {
    for attr in spec.attributes {
        let help = if creating && attr.required {
            format!("{} (required)", attr.help)
        } else {
            attr.help.to_string()
        };
        cmd = cmd.arg(
            Arg::new(attr.flag)
                .long(attr.flag)
                .value_name(value_name(attr.kind))
                .allow_hyphen_values(true)
                .help(help),
        );
    }
    for rel in spec.relationships {
        let mut help = rel.help.to_string();
        if creating && rel.required {
            help.push_str(" (required)");
        } else if !creating && !rel.many {
            help.push_str("; empty to unlink");
        }
        cmd = cmd.arg(
            Arg::new(rel.flag)
                .long(rel.flag)
                .value_name(if rel.many { "IDS" } else { "ID" })
                .help(help),
        );
    }
    cmd
}

fn value_name(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::Text => "TEXT",
        ValueKind::Integer => "INT",
        ValueKind::Decimal => "NUMBER",
        ValueKind::Bool => "true|false",
        ValueKind::List => "A,B",
        ValueKind::Json => "JSON",
    }
}

/// String value of a flag, if given.
pub fn text(matches: &ArgMatches, id: &str) -> Option<String> {
    matches.get_one::<String>(id).cloned()
}

/// Every value of a repeatable flag.
pub fn texts(matches: &ArgMatches, id: &str) -> Vec<String> {
    matches
        .get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

/// Whether a switch was set.
pub fn switch(matches: &ArgMatches, id: &str) -> bool {
    matches.get_flag(id)
}

/// Numeric flag value, zero when absent.
pub fn number(matches: &ArgMatches, id: &str) -> u32 {
    matches.get_one::<u32>(id).copied().unwrap_or(0)
}
