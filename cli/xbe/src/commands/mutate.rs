//! Write commands: `xbe do <resource> create|update|delete`.

use anyhow::Result;
use clap::{ArgMatches, Args};
use serde_json::{json, Value};
use tracing::{debug, info};
use xbe_jsonapi::{Document, NewResource};

use crate::catalog::{ResourceSpec, ValueKind, Verb};
use crate::client::ApiClient;
use crate::error::CliError;
use crate::output::{print_json, print_success};
use crate::query::split_list;
use crate::rows;

use super::dynamic::{self, ResourceInvocation, WriteVerbs};
use super::view::required_id;
use super::CommandContext;

/// Write commands.
#[derive(Debug, Args)]
pub struct DoCommand {
    #[command(subcommand)]
    resource: ResourceInvocation<WriteVerbs>,
}

impl DoCommand {
    pub fn invocation(&self) -> &ResourceInvocation<WriteVerbs> {
        &self.resource
    }

    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        let ResourceInvocation {
            spec, verb, matches, ..
        } = self.resource;
        match verb {
            Verb::Create => create(&ctx, spec, &matches).await,
            Verb::Update => update(&ctx, spec, &matches).await,
            Verb::Delete => delete(&ctx, spec, &matches).await,
            other => Err(CliError::validation(format!(
                "'{}' is not a write command",
                other.as_str()
            ))
            .into()),
        }
    }
}

/// Convert a raw flag value to the JSON value sent for `kind`.
pub fn parse_value(flag: &str, kind: ValueKind, raw: &str) -> Result<Value, CliError> {
    let trimmed = raw.trim();
    let invalid = |expected: &str| {
        CliError::validation(format!("--{flag} expects {expected}, got '{raw}'"))
    };

    match kind {
        ValueKind::Text => Ok(Value::String(raw.to_string())),
        ValueKind::Integer => trimmed
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| invalid("an integer")),
        ValueKind::Decimal => trimmed
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Value::from)
            .ok_or_else(|| invalid("a number")),
        ValueKind::Bool => match trimmed.to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(Value::Bool(true)),
            "false" | "no" | "0" => Ok(Value::Bool(false)),
            _ => Err(invalid("true or false")),
        },
        ValueKind::List => Ok(json!(split_list(raw))),
        ValueKind::Json => serde_json::from_str(trimmed).map_err(|_| invalid("valid JSON")),
    }
}

/// Build the resource object from the write flags.
///
/// On create, required attributes and relationships must be present. On
/// update, an empty to-one value unlinks the relationship.
pub fn build_resource(
    spec: &ResourceSpec,
    matches: &ArgMatches,
    creating: bool,
) -> Result<NewResource, CliError> {
    let mut resource = NewResource::new(spec.resource_type());

    for attr in spec.attributes {
        let raw = dynamic::text(matches, attr.flag);
        let blank = raw.as_deref().is_none_or(|raw| raw.trim().is_empty());
        if creating && attr.required && blank {
            return Err(CliError::missing_flag(attr.flag));
        }
        let Some(raw) = raw else {
            continue;
        };

        // Blank non-text values clear the attribute on update.
        if blank && attr.kind != ValueKind::Text {
            if !creating {
                resource.set_attribute(attr.attr, Value::Null);
            }
            continue;
        }
        resource.set_attribute(attr.attr, parse_value(attr.flag, attr.kind, &raw)?);
    }

    for rel in spec.relationships {
        let Some(raw) = dynamic::text(matches, rel.flag) else {
            if creating && rel.required {
                return Err(CliError::missing_flag(rel.flag));
            }
            continue;
        };

        if rel.many {
            let ids = split_list(&raw);
            if creating && rel.required && ids.is_empty() {
                return Err(CliError::missing_flag(rel.flag));
            }
            resource.set_to_many(rel.rel, rel.target_type, &ids);
            continue;
        }

        match raw.trim() {
            "" if creating && rel.required => return Err(CliError::missing_flag(rel.flag)),
            "" if creating => {}
            "" => resource.clear_to_one(rel.rel),
            id => resource.set_to_one(rel.rel, rel.target_type, id),
        }
    }

    Ok(resource)
}

/// `{singular} {id}`, plus the record's label when it has one.
fn describe(spec: &ResourceSpec, doc: &Document, fallback_id: &str) -> String {
    match doc.single() {
        Ok(resource) => match rows::label_of(resource, spec.label) {
            Some(label) => format!("{} {} ({})", spec.singular, resource.id, label),
            None => format!("{} {}", spec.singular, resource.id),
        },
        Err(_) => format!("{} {}", spec.singular, fallback_id)
            .trim_end()
            .to_string(),
    }
}

/// Send a create request and return the server's document.
pub async fn send_create(
    client: &ApiClient,
    spec: &ResourceSpec,
    resource: NewResource,
) -> Result<Document, CliError> {
    info!(resource = spec.name, "creating");
    client
        .post(&spec.collection_path(), &resource.into_document())
        .await
}

/// Send an update request and return the server's document.
pub async fn send_update(
    client: &ApiClient,
    spec: &ResourceSpec,
    id: &str,
    resource: NewResource,
) -> Result<Document, CliError> {
    info!(resource = spec.name, id, "updating");
    client
        .patch(&spec.member_path(id), &resource.id(id).into_document())
        .await
        .map_err(|err| err.or_not_found(|| format!("{} {}", spec.singular, id)))
}

async fn create(ctx: &CommandContext, spec: &ResourceSpec, matches: &ArgMatches) -> Result<()> {
    let resource = build_resource(spec, matches, true)?;
    let client = ctx.authed_client()?;
    let doc = send_create(&client, spec, resource).await?;

    if ctx.is_json() {
        print_written(&doc)?;
    } else {
        print_success(&format!("Created {}", describe(spec, &doc, "")));
    }
    Ok(())
}

async fn update(ctx: &CommandContext, spec: &ResourceSpec, matches: &ArgMatches) -> Result<()> {
    let id = required_id(matches)?;
    let resource = build_resource(spec, matches, false)?;
    if resource.is_empty() {
        return Err(CliError::validation("no fields to update").into());
    }
    let client = ctx.authed_client()?;
    let doc = send_update(&client, spec, &id, resource).await?;

    if ctx.is_json() {
        print_written(&doc)?;
    } else {
        print_success(&format!("Updated {}", describe(spec, &doc, &id)));
    }
    Ok(())
}

async fn delete(ctx: &CommandContext, spec: &ResourceSpec, matches: &ArgMatches) -> Result<()> {
    let id = required_id(matches)?;
    if !dynamic::switch(matches, "confirm") {
        return Err(CliError::validation(format!(
            "--confirm is required to delete {} {}",
            spec.singular, id
        ))
        .into());
    }
    let client = ctx.authed_client()?;
    debug!(resource = spec.name, %id, "deleting");
    client
        .delete(&spec.member_path(&id))
        .await
        .map_err(|err| err.or_not_found(|| format!("{} {}", spec.singular, id)))?;

    if ctx.is_json() {
        print_json(&json!({ "id": id, "deleted": true }))?;
    } else {
        print_success(&format!("Deleted {} {}", spec.singular, id));
    }
    Ok(())
}

fn print_written(doc: &Document) -> Result<()> {
    match doc.single() {
        Ok(resource) => print_json(&rows::resource_json(resource, false)),
        Err(_) => print_json(&Value::Null),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::Parser;
    use rstest::rstest;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::super::{Cli, Commands};
    use super::*;
    use crate::catalog;

    fn do_matches(args: &[&str]) -> (&'static ResourceSpec, ArgMatches) {
        let mut argv = vec!["xbe", "do"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        let Commands::Do(cmd) = cli.command else {
            panic!("expected do");
        };
        (cmd.resource.spec, cmd.resource.matches)
    }

    #[rstest]
    #[case(ValueKind::Integer, " 42 ", json!(42))]
    #[case(ValueKind::Decimal, "2.5", json!(2.5))]
    #[case(ValueKind::Bool, "Yes", json!(true))]
    #[case(ValueKind::Bool, "0", json!(false))]
    #[case(ValueKind::List, "a, b,,c", json!(["a", "b", "c"]))]
    #[case(ValueKind::Json, r#"{"k": [1, 2]}"#, json!({ "k": [1, 2] }))]
    #[case(ValueKind::Text, " keep spaces ", json!(" keep spaces "))]
    fn values_parse_by_kind(#[case] kind: ValueKind, #[case] raw: &str, #[case] expected: Value) {
        assert_eq!(parse_value("x", kind, raw).unwrap(), expected);
    }

    #[rstest]
    #[case(ValueKind::Integer, "4.2")]
    #[case(ValueKind::Decimal, "NaN")]
    #[case(ValueKind::Bool, "maybe")]
    #[case(ValueKind::Json, "{oops")]
    fn bad_values_name_the_flag(#[case] kind: ValueKind, #[case] raw: &str) {
        let err = parse_value("axle-count", kind, raw).unwrap_err();
        assert!(err.to_string().contains("--axle-count"), "{err}");
    }

    #[test]
    fn create_requires_required_fields() {
        let (spec, matches) = do_matches(&["tractors", "create", "--number", "T1"]);
        let err = build_resource(spec, &matches, true).unwrap_err();
        assert_eq!(err.to_string(), "--trucker is required");

        let (spec, matches) = do_matches(&["tractors", "create", "--trucker", "5"]);
        let err = build_resource(spec, &matches, true).unwrap_err();
        assert_eq!(err.to_string(), "--number is required");
    }

    #[test]
    fn create_document_carries_attributes_and_links() {
        let (spec, matches) = do_matches(&[
            "tractors",
            "create",
            "--number",
            "T1",
            "--model-year",
            "2023",
            "--in-service",
            "true",
            "--trucker",
            "5",
            "--drivers",
            "8,9",
        ]);
        let document = build_resource(spec, &matches, true).unwrap().into_document();
        assert_eq!(
            document,
            json!({
                "data": {
                    "type": "tractors",
                    "attributes": { "number": "T1", "model-year": 2023, "in-service": true },
                    "relationships": {
                        "trucker": { "data": { "type": "truckers", "id": "5" } },
                        "drivers": { "data": [
                            { "type": "users", "id": "8" },
                            { "type": "users", "id": "9" }
                        ] }
                    }
                }
            })
        );
    }

    #[test]
    fn update_can_unlink_and_must_change_something() {
        let (spec, matches) = do_matches(&["tractors", "update", "3", "--trucker", ""]);
        let document = build_resource(spec, &matches, false).unwrap().into_document();
        assert_eq!(
            document["data"]["relationships"]["trucker"],
            json!({ "data": null })
        );

        let (spec, matches) = do_matches(&["tractors", "update", "3"]);
        assert!(build_resource(spec, &matches, false).unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_and_update_hit_the_right_paths() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/tractors"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "data": { "id": "77", "type": "tractors", "attributes": { "number": "T1" } }
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/v1/tractors/77"))
            .and(body_json(json!({
                "data": { "type": "tractors", "id": "77", "attributes": { "status": "retired" } }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "id": "77", "type": "tractors", "attributes": { "number": "T1", "status": "retired" } }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri(), Some("tok"), Duration::from_secs(5)).unwrap();
        let spec = catalog::resource("tractors").unwrap();

        let (_, matches) = do_matches(&["tractors", "create", "--number", "T1", "--trucker", "5"]);
        let created = send_create(&client, spec, build_resource(spec, &matches, true).unwrap())
            .await
            .unwrap();
        assert_eq!(describe(spec, &created, ""), "tractor 77 (T1)");

        let (_, matches) = do_matches(&["tractors", "update", "77", "--status", "retired"]);
        let updated = send_update(&client, spec, "77", build_resource(spec, &matches, false).unwrap())
            .await
            .unwrap();
        assert_eq!(updated.single().unwrap().attr_text("status").as_deref(), Some("retired"));
    }
}
