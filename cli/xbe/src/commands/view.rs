//! Read commands: `xbe view <resource> list|show`.

use anyhow::Result;
use clap::{ArgMatches, Args};
use tracing::debug;
use xbe_jsonapi::Document;

use crate::catalog::{FilterKind, ResourceSpec, Verb};
use crate::client::ApiClient;
use crate::error::CliError;
use crate::output::{print_details, print_json, print_table};
use crate::query::{parse_key_value, Query};
use crate::rows;

use super::dynamic::{self, ReadVerbs, ResourceInvocation};
use super::CommandContext;

/// Read commands.
#[derive(Debug, Args)]
pub struct ViewCommand {
    #[command(subcommand)]
    resource: ResourceInvocation<ReadVerbs>,
}

impl ViewCommand {
    pub fn invocation(&self) -> &ResourceInvocation<ReadVerbs> {
        &self.resource
    }

    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        let ResourceInvocation {
            spec, verb, matches, ..
        } = self.resource;
        match verb {
            Verb::List => list(&ctx, spec, &matches).await,
            Verb::Show => show(&ctx, spec, &matches).await,
            other => Err(CliError::validation(format!(
                "'{}' is not a read command",
                other.as_str()
            ))
            .into()),
        }
    }
}

/// Build the list query from catalog defaults and the parsed flags.
pub fn list_query(spec: &ResourceSpec, matches: &ArgMatches) -> Result<Query, CliError> {
    let mut query = Query::for_list(spec);

    query.page(
        dynamic::number(matches, "limit"),
        dynamic::number(matches, "offset"),
    );

    let sort = dynamic::text(matches, "sort").filter(|sort| !sort.trim().is_empty());
    query.set_if_present("sort", sort.as_deref().or(spec.default_sort));

    for (param, value) in spec.default_filters {
        query.set(*param, *value);
    }

    if spec.timestamps {
        for flag in ["created-at-min", "created-at-max", "updated-at-min", "updated-at-max"] {
            query.filter(flag, dynamic::text(matches, flag).as_deref());
        }
    }

    for filter in spec.filters {
        match filter.kind {
            FilterKind::Text => {
                query.set_if_present(filter.param, dynamic::text(matches, filter.flag).as_deref());
            }
            FilterKind::Switch => {
                if dynamic::switch(matches, filter.flag) {
                    query.set(filter.param, "true");
                }
            }
        }
    }

    for raw in dynamic::texts(matches, "filter") {
        let (key, value) = parse_key_value(&raw).ok_or_else(|| {
            CliError::validation(format!("--filter expects KEY=VALUE, got '{raw}'"))
        })?;
        query.set(format!("filter[{key}]"), value);
    }

    Ok(query)
}

/// Fetch one page of `spec`.
pub async fn fetch_list(
    client: &ApiClient,
    spec: &ResourceSpec,
    query: &Query,
) -> Result<Document, CliError> {
    debug!(resource = spec.name, params = query.pairs().len(), "listing");
    client.get(&spec.collection_path(), query.pairs()).await
}

/// Fetch one record of `spec` by id.
pub async fn fetch_one(
    client: &ApiClient,
    spec: &ResourceSpec,
    id: &str,
) -> Result<Document, CliError> {
    let query = Query::for_show(spec);
    client
        .get(&spec.member_path(id), query.pairs())
        .await
        .map_err(|err| err.or_not_found(|| format!("{} {}", spec.singular, id)))
}

async fn list(ctx: &CommandContext, spec: &ResourceSpec, matches: &ArgMatches) -> Result<()> {
    let query = list_query(spec, matches)?;
    let client = ctx.read_client()?;
    let doc = fetch_list(&client, spec, &query).await?;

    if ctx.is_json() {
        print_json(&rows::json_rows(spec, &doc))?;
    } else {
        print_table(
            &rows::table_headers(spec),
            rows::table_rows(spec, &doc),
            &format!("No {} found.", spec.name),
        );
    }
    Ok(())
}

async fn show(ctx: &CommandContext, spec: &ResourceSpec, matches: &ArgMatches) -> Result<()> {
    let id = required_id(matches)?;
    let client = ctx.read_client()?;
    let doc = fetch_one(&client, spec, &id).await?;
    let resource = doc.single()?;

    if ctx.is_json() {
        print_json(&rows::resource_json(
            resource,
            dynamic::switch(matches, "omit-null"),
        ))?;
    } else {
        print_details(&rows::detail_pairs(resource, &doc.included_index()));
    }
    Ok(())
}

/// The positional id, trimmed; blank is a validation error.
pub fn required_id(matches: &ArgMatches) -> Result<String, CliError> {
    dynamic::text(matches, "id")
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| CliError::validation("id is required"))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::Parser;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::super::{Cli, Commands};
    use super::*;
    use crate::catalog;

    fn list_matches(args: &[&str]) -> (&'static ResourceSpec, ArgMatches) {
        let mut argv = vec!["xbe", "view"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        let Commands::View(view) = cli.command else {
            panic!("expected view");
        };
        (view.resource.spec, view.resource.matches)
    }

    #[test]
    fn list_query_applies_defaults_and_flags() {
        let (spec, matches) = list_matches(&[
            "truckers",
            "list",
            "--broker",
            " 7 ",
            "--company-name",
            "  ",
            "--active",
            "--limit",
            "25",
            "--filter",
            "trailer-classifications=3",
            "--created-at-min",
            "2025-01-01",
        ]);
        let query = list_query(spec, &matches).unwrap();

        assert_eq!(query.get("fields[truckers]"), Some("company-name,is-active,broker"));
        assert_eq!(query.get("include"), Some("broker"));
        assert_eq!(query.get("sort"), Some("company-name"));
        assert_eq!(query.get("filter[broker]"), Some("7"));
        assert_eq!(query.get("filter[company-name]"), None);
        assert_eq!(query.get("filter[is-active]"), Some("true"));
        assert_eq!(query.get("filter[trailer-classifications]"), Some("3"));
        assert_eq!(query.get("filter[created-at-min]"), Some("2025-01-01"));
        assert_eq!(query.get("page[limit]"), Some("25"));
        assert_eq!(query.get("page[offset]"), None);
    }

    #[test]
    fn page_size_defaults_to_fifty() {
        let (spec, matches) = list_matches(&["tractors", "list"]);
        assert_eq!(list_query(spec, &matches).unwrap().get("page[limit]"), Some("50"));

        let (spec, matches) = list_matches(&["tractors", "list", "--limit", "0"]);
        assert_eq!(list_query(spec, &matches).unwrap().get("page[limit]"), None);
    }

    #[test]
    fn explicit_sort_and_bad_filter() {
        let (spec, matches) = list_matches(&["tractors", "list", "--sort", "-number"]);
        assert_eq!(list_query(spec, &matches).unwrap().get("sort"), Some("-number"));

        let (spec, matches) = list_matches(&[
            "tractors",
            "list",
            "--sort",
            "-model-year,number",
            "--q",
            "-T1",
            "--filter",
            "-x=1",
        ]);
        let query = list_query(spec, &matches).unwrap();
        assert_eq!(query.get("sort"), Some("-model-year,number"));
        assert_eq!(query.get("filter[q]"), Some("-T1"));
        assert_eq!(query.get("filter[-x]"), Some("1"));

        let (spec, matches) = list_matches(&["tractors", "list", "--filter", "oops"]);
        assert!(matches!(
            list_query(spec, &matches),
            Err(CliError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn list_and_show_round_trip_through_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/tractors"))
            .and(query_param("filter[trucker]", "5"))
            .and(query_param("include", "trucker"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{
                    "id": "1",
                    "type": "tractors",
                    "attributes": { "number": "T100", "status": "active" },
                    "relationships": { "trucker": { "data": { "type": "truckers", "id": "5" } } }
                }],
                "included": [
                    { "id": "5", "type": "truckers", "attributes": { "company-name": "Acme Hauling" } }
                ]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/tractors/404"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "errors": [{ "status": "404", "title": "Record not found" }]
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri(), None, Duration::from_secs(5)).unwrap();
        let spec = catalog::resource("tractors").unwrap();

        let (_, matches) = list_matches(&["tractors", "list", "--trucker", "5"]);
        let query = list_query(spec, &matches).unwrap();
        let doc = fetch_list(&client, spec, &query).await.unwrap();
        let table = rows::table_rows(spec, &doc);
        assert_eq!(table.len(), 1);
        assert!(table[0].contains(&"Acme Hauling".to_string()));

        let err = fetch_one(&client, spec, "404").await.unwrap_err();
        assert!(matches!(err, CliError::NotFound(ref subject) if subject == "tractor 404"));
    }

    #[tokio::test]
    async fn show_requests_every_attribute() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/tractors/9"))
            .and(query_param("include", "trucker"))
            .and(query_param_is_missing("fields[tractors]"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "id": "9",
                    "type": "tractors",
                    "attributes": { "number": "T9", "plate-number": "ABC123", "notes": "spare" }
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri(), None, Duration::from_secs(5)).unwrap();
        let spec = catalog::resource("tractors").unwrap();
        let doc = fetch_one(&client, spec, "9").await.unwrap();
        let details = rows::detail_pairs(doc.single().unwrap(), &doc.included_index());
        assert!(details.contains(&("plate-number".to_string(), "ABC123".to_string())));
    }

    #[test]
    fn blank_id_is_rejected() {
        let (_, matches) = list_matches(&["tractors", "show", "  "]);
        assert!(matches!(required_id(&matches), Err(CliError::Validation(_))));
        let (_, matches) = list_matches(&["tractors", "show", " 12 "]);
        assert_eq!(required_id(&matches).unwrap(), "12");
    }
}
