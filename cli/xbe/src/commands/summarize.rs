//! Server-side summaries: `xbe summarize <summary> create`.
//!
//! Most summaries are created with a POST whose response carries a `headers`
//! row and a `values` matrix. The CLI narrows the matrix to the group-by
//! display columns plus the requested metrics and formats each cell by its
//! header. Status summaries return counts for one entity type instead.

use std::collections::HashSet;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Args, Command, FromArgMatches, Subcommand};
use serde_json::{json, Map, Value};
use tracing::debug;
use xbe_jsonapi::{display_value, Document};

use crate::catalog::{self, CellStyle, StatusEntity, SummaryShape, SummarySpec, SUMMARIES};
use crate::client::ApiClient;
use crate::error::CliError;
use crate::output::{print_json, print_table, truncate};
use crate::query::{parse_key_value, split_list, Query};

use super::dynamic;
use super::CommandContext;

/// Longest `_name` cell shown in a summary table.
const NAME_WIDTH: usize = 35;

/// Lane tables are wider, so names are cut shorter.
const LANE_ORGANIZATION_WIDTH: usize = 32;
const LANE_NAME_WIDTH: usize = 28;
const LANE_TYPE_WIDTH: usize = 14;

/// Run a server-side summary.
#[derive(Debug, Args)]
pub struct SummarizeCommand {
    #[command(subcommand)]
    summary: SummaryInvocation,
}

/// Flags shared by every matrix summary.
#[derive(Debug, Clone, Default, Args)]
pub struct SummaryArgs {
    /// Group-by keys, comma-separated. Pass "" for a single total row.
    #[arg(long)]
    pub group_by: Option<String>,

    /// Sort fields, comma-separated (e.g. tons_sum:desc).
    #[arg(long)]
    pub sort: Option<String>,

    /// Maximum number of rows.
    #[arg(long)]
    pub limit: Option<u32>,

    /// Metric columns, comma-separated.
    #[arg(long)]
    pub metrics: Option<String>,

    /// Metric column (repeatable).
    #[arg(long)]
    pub metric: Vec<String>,

    /// Keep every metric the server returns.
    #[arg(long)]
    pub all_metrics: bool,

    /// Filters as a JSON object.
    #[arg(long, value_name = "JSON")]
    pub filters: Option<String>,

    /// Filter as KEY=VALUE (repeatable, overrides --filters keys).
    #[arg(long, value_name = "KEY=VALUE", allow_hyphen_values = true)]
    pub filter: Vec<String>,
}

/// Date range of summaries that require one.
#[derive(Debug, Clone, Default, Args)]
pub struct DateArgs {
    /// Start date (YYYY-MM-DD).
    #[arg(long)]
    pub start_on: Option<String>,

    /// End date (YYYY-MM-DD).
    #[arg(long)]
    pub end_on: Option<String>,
}

/// Flags of a status summary.
#[derive(Debug, Clone, Args)]
pub struct StatusArgs {
    /// Entity type to count.
    #[arg(long)]
    pub entity_type: String,

    /// Filters as a JSON object.
    #[arg(long, value_name = "JSON")]
    pub filters: Option<String>,

    /// Filter as KEY=VALUE (repeatable, overrides --filters keys).
    #[arg(long, value_name = "KEY=VALUE", allow_hyphen_values = true)]
    pub filter: Vec<String>,
}

/// Parsed flags of a matrix summary.
#[derive(Debug, Clone, Default)]
pub struct MatrixFlags {
    pub dates: DateArgs,
    pub args: SummaryArgs,
    /// Value of the summary's minimum flag; zero when not given.
    pub minimum: u32,
    /// Optional features switched on.
    pub features: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum SummaryFlags {
    Matrix(MatrixFlags),
    Status(StatusArgs),
}

impl SummaryFlags {
    fn from_create_matches(spec: &SummarySpec, matches: &ArgMatches) -> Result<Self, clap::Error> {
        if spec.shape == SummaryShape::Status {
            return Ok(Self::Status(StatusArgs::from_arg_matches(matches)?));
        }

        let dates = if spec.requires_dates {
            DateArgs::from_arg_matches(matches)?
        } else {
            DateArgs::default()
        };
        let minimum = spec
            .minimum
            .and_then(|min| matches.get_one::<u32>(min.flag).copied())
            .unwrap_or(0);
        let mut features = Vec::new();
        if !spec.features.is_empty() {
            features.extend(dynamic::texts(matches, "optional-feature"));
            features.extend(
                spec.features
                    .iter()
                    .filter(|feature| dynamic::switch(matches, feature.flag))
                    .map(|feature| feature.feature.to_string()),
            );
        }

        Ok(Self::Matrix(MatrixFlags {
            dates,
            args: SummaryArgs::from_arg_matches(matches)?,
            minimum,
            features,
        }))
    }
}

#[derive(Debug, Clone)]
struct SummaryInvocation {
    spec: &'static SummarySpec,
    flags: SummaryFlags,
}

impl FromArgMatches for SummaryInvocation {
    fn from_arg_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        let (name, summary_matches) = matches.subcommand().ok_or_else(|| {
            clap::Error::raw(ErrorKind::MissingSubcommand, "a summary is required\n")
        })?;
        let spec = catalog::summary(name).ok_or_else(|| {
            clap::Error::raw(ErrorKind::InvalidSubcommand, format!("unknown summary '{name}'\n"))
        })?;
        match summary_matches.subcommand() {
            Some(("create", create_matches)) => Ok(Self {
                spec,
                flags: SummaryFlags::from_create_matches(spec, create_matches)?,
            }),
            _ => Err(clap::Error::raw(
                ErrorKind::MissingSubcommand,
                format!("usage: xbe summarize {name} create [flags]\n"),
            )),
        }
    }

    fn update_from_arg_matches(&mut self, matches: &ArgMatches) -> Result<(), clap::Error> {
        *self = Self::from_arg_matches(matches)?;
        Ok(())
    }
}

impl Subcommand for SummaryInvocation {
    fn augment_subcommands(cmd: Command) -> Command {
        SUMMARIES
            .iter()
            .fold(cmd, |cmd, spec| {
                cmd.subcommand(
                    Command::new(spec.name)
                        .about(spec.about)
                        .subcommand(create_command(spec))
                        .subcommand_required(true)
                        .arg_required_else_help(true),
                )
            })
            .subcommand_required(true)
            .arg_required_else_help(true)
    }

    fn augment_subcommands_for_update(cmd: Command) -> Command {
        Self::augment_subcommands(cmd)
    }

    fn has_subcommand(name: &str) -> bool {
        catalog::summary(name).is_some()
    }
}

fn create_command(spec: &'static SummarySpec) -> Command {
    let create = Command::new("create").about(format!("Create a {}", spec.name.replace('-', " ")));
    if spec.shape == SummaryShape::Status {
        let names: Vec<&str> = spec.entity_types.iter().map(|entity| entity.name).collect();
        return StatusArgs::augment_args(create)
            .after_help(format!("Entity types: {}", names.join(", ")));
    }

    let mut create = if spec.requires_dates {
        DateArgs::augment_args(create)
    } else {
        create
    };
    create = SummaryArgs::augment_args(create);

    if let Some(min) = spec.minimum {
        create = create.arg(
            Arg::new(min.flag)
                .long(min.flag)
                .value_name("N")
                .value_parser(clap::value_parser!(u32))
                .help(min.help),
        );
    }
    if !spec.features.is_empty() {
        for feature in spec.features {
            create = create.arg(
                Arg::new(feature.flag)
                    .long(feature.flag)
                    .action(ArgAction::SetTrue)
                    .help(format!("{} ({})", feature.help, feature.feature)),
            );
        }
        create = create.arg(
            Arg::new("optional-feature")
                .long("optional-feature")
                .value_name("NAME")
                .action(ArgAction::Append)
                .help("Additional optional feature (repeatable)"),
        );
    }
    create
}

/// A summary request ready to send, with the selections used to narrow the
/// response.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRequest {
    pub group_by: Vec<String>,
    pub metrics: Vec<String>,
    pub all_metrics: bool,
    pub query: Query,
    pub document: Value,
}

/// Headers and values after column selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryTable {
    pub headers: Vec<String>,
    pub values: Vec<Vec<Value>>,
}

impl SummarizeCommand {
    pub fn target(&self) -> (&'static SummarySpec, &SummaryFlags) {
        (self.summary.spec, &self.summary.flags)
    }

    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        let SummaryInvocation { spec, flags } = self.summary;
        match flags {
            SummaryFlags::Matrix(flags) => run_matrix(&ctx, spec, &flags).await,
            SummaryFlags::Status(args) => run_status(&ctx, spec, &args).await,
        }
    }
}

async fn run_matrix(ctx: &CommandContext, spec: &SummarySpec, flags: &MatrixFlags) -> Result<()> {
    let request = build_request(spec, flags)?;
    let client = ctx.authed_client()?;
    let table = fetch(&client, spec, &request).await?;

    if ctx.is_json() {
        print_json(&json!({
            "headers": table.headers,
            "values": table.values,
            "rows": table.rows_json(),
        }))?;
        return Ok(());
    }

    if table.headers.is_empty() {
        println!("No headers returned.");
        return Ok(());
    }
    print_table(
        &table.headers,
        table.formatted_rows(spec.cells),
        &format!("No {} data found.", spec.name.replace('-', " ")),
    );
    Ok(())
}

async fn run_status(ctx: &CommandContext, spec: &SummarySpec, args: &StatusArgs) -> Result<()> {
    let (entity, document) = build_status_request(spec, args)?;
    let client = ctx.authed_client()?;
    debug!(summary = spec.name, entity_type = entity.name, "creating status summary");
    let doc = client.post(&spec.path(), &document).await?;
    let attributes = doc.single()?.attributes.clone();

    if ctx.is_json() {
        return print_json(&attributes);
    }
    if attributes.is_empty() {
        println!("No {} data found.", spec.name.replace('-', " "));
        return Ok(());
    }
    for line in status_lines(spec, entity, &attributes) {
        println!("{line}");
    }
    Ok(())
}

/// Validate the flags and build the request document.
pub fn build_request(spec: &SummarySpec, flags: &MatrixFlags) -> Result<SummaryRequest, CliError> {
    let args = &flags.args;
    let mut attributes = Map::new();
    if spec.requires_dates {
        let start_on = non_blank(flags.dates.start_on.as_deref())
            .ok_or_else(|| CliError::missing_flag("start-on"))?;
        let end_on = non_blank(flags.dates.end_on.as_deref())
            .ok_or_else(|| CliError::missing_flag("end-on"))?;
        attributes.insert("start-on".to_string(), json!(start_on));
        attributes.insert("end-on".to_string(), json!(end_on));
    }

    let mut filters = parse_filters(args.filters.as_deref(), &args.filter)?;
    if let Some(min) = spec.minimum.filter(|_| flags.minimum > 0) {
        filters.insert(min.filter.to_string(), json!(flags.minimum));
    }
    let group_by = match &args.group_by {
        Some(raw) => split_list(raw),
        None => owned(spec.default_group_by),
    };
    let sort = match &args.sort {
        Some(raw) => split_list(raw),
        None => owned(spec.default_sort),
    };
    let metrics = resolve_metrics(spec, args);

    attributes.insert("filters".to_string(), Value::Object(filters));
    if args.group_by.is_some() || !group_by.is_empty() {
        attributes.insert("group-by".to_string(), json!(group_by));
    }
    if args.sort.is_some() || !sort.is_empty() {
        attributes.insert("sort".to_string(), json!(sort));
    }
    if let Some(limit) = args.limit.filter(|limit| *limit > 0) {
        attributes.insert("limit".to_string(), json!(limit));
    }
    if spec.sends_metrics && !metrics.is_empty() {
        attributes.insert("included-metrics".to_string(), json!(metrics));
    }

    let mut query = Query::new();
    let features = unique(flags.features.iter().map(String::as_str));
    if !features.is_empty() {
        query.set("meta[optional-features]", features.join(","));
    }

    Ok(SummaryRequest {
        group_by,
        metrics,
        all_metrics: args.all_metrics,
        query,
        document: json!({
            "data": {
                "type": spec.resource_type,
                "attributes": attributes,
            }
        }),
    })
}

/// Validate a status summary's entity type and build its request document.
pub fn build_status_request(
    spec: &SummarySpec,
    args: &StatusArgs,
) -> Result<(&'static StatusEntity, Value), CliError> {
    let name = non_blank(Some(args.entity_type.as_str())).ok_or_else(|| CliError::missing_flag("entity-type"))?;
    let entity = spec.entity_type(name).ok_or_else(|| {
        let known: Vec<&str> = spec.entity_types.iter().map(|entity| entity.name).collect();
        CliError::validation(format!(
            "invalid --entity-type '{name}' (must be one of {})",
            known.join(", ")
        ))
    })?;

    let mut filters = parse_filters(args.filters.as_deref(), &args.filter)?;
    filters.insert("entity_type".to_string(), json!(entity.name));
    Ok((
        entity,
        json!({
            "data": {
                "type": spec.resource_type,
                "attributes": { "filters": filters },
            }
        }),
    ))
}

/// Text lines for a status summary: title, status breakdown, then counts.
pub fn status_lines(
    spec: &SummarySpec,
    entity: &StatusEntity,
    attributes: &Map<String, Value>,
) -> Vec<String> {
    let mut lines = vec![
        format!("{} ({})", title(spec.name), entity.name),
        "-".repeat(40),
    ];
    if let Some(Value::Object(statuses)) = entity.breakdown.and_then(|key| attributes.get(key)) {
        lines.push(String::new());
        lines.push("Status Breakdown:".to_string());
        for (status, count) in statuses {
            lines.push(format!("  {:<25} {}", format!("{status}:"), display_value(count)));
        }
    }
    for (key, label) in entity.fields {
        if let Some(value) = attributes.get(*key) {
            lines.push(format!("{:<30} {}", format!("{label}:"), display_value(value)));
        }
    }
    lines
}

fn title(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Trimmed, non-blank items in first-seen order.
fn unique<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .map(str::trim)
        .filter(|item| !item.is_empty() && seen.insert(*item))
        .map(str::to_string)
        .collect()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// `--filters` JSON merged with `--filter k=v` pairs; pairs win.
pub fn parse_filters(raw_json: Option<&str>, pairs: &[String]) -> Result<Map<String, Value>, CliError> {
    let mut filters = match non_blank(raw_json) {
        Some(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => map,
            Ok(_) => return Err(CliError::validation("--filters must be a JSON object")),
            Err(err) => return Err(CliError::validation(format!("invalid --filters JSON: {err}"))),
        },
        None => Map::new(),
    };

    for pair in pairs.iter().map(|pair| pair.trim()).filter(|pair| !pair.is_empty()) {
        let (key, value) = parse_key_value(pair).ok_or_else(|| {
            CliError::validation(format!("invalid --filter '{pair}' (expected key=value)"))
        })?;
        filters.insert(key, Value::String(value));
    }
    Ok(filters)
}

/// Metrics to request. Empty with `--all-metrics`; the summary defaults when
/// none are named.
fn resolve_metrics(spec: &SummarySpec, args: &SummaryArgs) -> Vec<String> {
    if args.all_metrics {
        return Vec::new();
    }
    if args.metrics.is_none() && args.metric.is_empty() {
        return owned(spec.default_metrics);
    }

    let mut seen = HashSet::new();
    args.metrics
        .as_deref()
        .map(split_list)
        .unwrap_or_default()
        .into_iter()
        .chain(args.metric.iter().map(|metric| metric.trim().to_string()))
        .filter(|metric| !metric.is_empty() && seen.insert(metric.clone()))
        .collect()
}

/// POST the request and narrow the response to the selected columns.
pub async fn fetch(
    client: &ApiClient,
    spec: &SummarySpec,
    request: &SummaryRequest,
) -> Result<SummaryTable, CliError> {
    debug!(summary = spec.name, group_by = ?request.group_by, "creating summary");
    let doc = client
        .post_with_query(&spec.path(), request.query.pairs(), &request.document)
        .await?;
    let table = response_table(&doc)?;
    Ok(select_columns(
        spec,
        table,
        &request.group_by,
        &request.metrics,
        request.all_metrics,
    ))
}

fn response_table(doc: &Document) -> Result<SummaryTable, CliError> {
    let resource = doc.single()?;
    let headers = resource
        .attr("headers")
        .and_then(Value::as_array)
        .map(|headers| {
            headers
                .iter()
                .map(|header| header.as_str().unwrap_or_default().to_string())
                .collect()
        })
        .unwrap_or_default();
    let values = resource
        .attr("values")
        .and_then(Value::as_array)
        .map(|rows| {
            rows.iter()
                .map(|row| row.as_array().cloned().unwrap_or_default())
                .collect()
        })
        .unwrap_or_default();
    Ok(SummaryTable { headers, values })
}

/// Keep the group-by display columns, then metric columns in server order.
/// Falls back to every column when nothing matches.
pub fn select_columns(
    spec: &SummarySpec,
    table: SummaryTable,
    group_by: &[String],
    metrics: &[String],
    all_metrics: bool,
) -> SummaryTable {
    if table.headers.is_empty() {
        return table;
    }

    let group_columns: HashSet<String> = group_by
        .iter()
        .flat_map(|group| spec.all_columns(group))
        .collect();
    let display: Vec<String> = group_by
        .iter()
        .flat_map(|group| spec.display_columns(group))
        .collect();

    let mut selected: Vec<usize> = Vec::new();
    let mut add = |header: &str| {
        if let Some(at) = table.headers.iter().position(|h| h == header) {
            if !selected.contains(&at) {
                selected.push(at);
            }
        }
    };

    for column in &display {
        add(column.as_str());
    }
    for header in &table.headers {
        if group_columns.contains(header) {
            continue;
        }
        if all_metrics || metrics.contains(header) {
            add(header.as_str());
        }
    }

    if selected.is_empty() {
        return table;
    }

    SummaryTable {
        headers: selected.iter().map(|at| table.headers[*at].clone()).collect(),
        values: table
            .values
            .iter()
            .map(|row| {
                selected
                    .iter()
                    .map(|at| row.get(*at).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect(),
    }
}

impl SummaryTable {
    /// One object per row keyed by header.
    pub fn rows_json(&self) -> Vec<Value> {
        self.values
            .iter()
            .map(|row| {
                let record: Map<String, Value> = self
                    .headers
                    .iter()
                    .enumerate()
                    .map(|(at, header)| (header.clone(), row.get(at).cloned().unwrap_or(Value::Null)))
                    .collect();
                Value::Object(record)
            })
            .collect()
    }

    pub fn formatted_rows(&self, style: CellStyle) -> Vec<Vec<String>> {
        self.values
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .enumerate()
                    .map(|(at, header)| {
                        row.get(at)
                            .map(|value| format_value(style, header, value))
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect()
    }
}

/// Format a cell according to its header name.
pub fn format_value(style: CellStyle, header: &str, value: &Value) -> String {
    let header = header.to_ascii_lowercase();
    match value {
        Value::Null => String::new(),
        Value::String(text) => {
            let text = text.trim();
            match text_width(style, &header) {
                Some(width) => truncate(text, width),
                None => text.to_string(),
            }
        }
        Value::Number(number) => match (number.as_f64(), style) {
            (Some(number), CellStyle::Standard) => standard_number(&header, number),
            (Some(number), CellStyle::Lane) => lane_number(&header, number),
            (None, _) => number.to_string(),
        },
        Value::Bool(flag) => flag.to_string(),
        other => other.to_string(),
    }
}

fn text_width(style: CellStyle, header: &str) -> Option<usize> {
    match style {
        CellStyle::Standard => header.ends_with("_name").then_some(NAME_WIDTH),
        CellStyle::Lane if header.contains("organization_name") => Some(LANE_ORGANIZATION_WIDTH),
        CellStyle::Lane if header.ends_with("_name") => Some(LANE_NAME_WIDTH),
        CellStyle::Lane if header.ends_with("_type") => Some(LANE_TYPE_WIDTH),
        CellStyle::Lane => None,
    }
}

fn standard_number(header: &str, value: f64) -> String {
    if header.ends_with("_pct") {
        return percent(value);
    }
    if header.ends_with("_count") || (header.ends_with("_sum") && header.contains("trip")) {
        return rounded(value);
    }
    if ["revenue", "cost", "margin"].iter().any(|word| header.contains(word)) {
        return format!("${value:.2}");
    }
    if header.contains("tons") {
        return format!("{value:.2}");
    }
    if ["hours", "miles", "minutes"].iter().any(|word| header.contains(word)) {
        return format!("{value:.1}");
    }
    plain(value)
}

fn lane_number(header: &str, value: f64) -> String {
    if header.contains("latitude") || header.contains("longitude") {
        return format!("{value:.5}");
    }
    if header.ends_with("_pct") {
        return percent(value);
    }
    if header.ends_with("_count") {
        return rounded(value);
    }
    if header.contains("cost_per") {
        return format!("${value:.2}");
    }
    if header.contains("tons") {
        return format!("{value:.2}");
    }
    if header.contains("miles") || header.contains("minutes") {
        return format!("{value:.1}");
    }
    plain(value)
}

/// Ratios up to 1.5 are scaled to percent.
fn percent(value: f64) -> String {
    let percent = if value <= 1.5 { value * 100.0 } else { value };
    format!("{percent:.1}%")
}

fn rounded(value: f64) -> String {
    ((value + 0.5) as i64).to_string()
}

fn plain(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        (value as i64).to_string()
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rstest::rstest;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn dated() -> MatrixFlags {
        MatrixFlags {
            dates: DateArgs {
                start_on: Some("2025-01-01".to_string()),
                end_on: Some("2025-01-31".to_string()),
            },
            ..MatrixFlags::default()
        }
    }

    fn shifts() -> &'static SummarySpec {
        catalog::summary("shift-summary").unwrap()
    }

    fn lanes() -> &'static SummarySpec {
        catalog::summary("lane-summary").unwrap()
    }

    fn transport() -> &'static SummarySpec {
        catalog::summary("transport-summary").unwrap()
    }

    fn table(headers: &[&str], values: Value) -> SummaryTable {
        SummaryTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            values: serde_json::from_value(values).unwrap(),
        }
    }

    fn status_args(entity_type: &str, filter: &[&str]) -> StatusArgs {
        StatusArgs {
            entity_type: entity_type.to_string(),
            filters: None,
            filter: filter.iter().map(|pair| pair.to_string()).collect(),
        }
    }

    #[test]
    fn defaults_fill_the_request() {
        let request = build_request(shifts(), &dated()).unwrap();
        assert_eq!(
            request.document,
            json!({
                "data": {
                    "type": "shift-summaries",
                    "attributes": {
                        "start-on": "2025-01-01",
                        "end-on": "2025-01-31",
                        "filters": {},
                        "group-by": ["driver"],
                        "sort": ["shift_count:desc"],
                        "included-metrics": ["shift_count", "hours_sum", "tons_sum", "trip_sum"]
                    }
                }
            })
        );
        assert!(request.query.pairs().is_empty());
    }

    #[test]
    fn explicit_flags_override_defaults() {
        let mut flags = dated();
        flags.args.group_by = Some(String::new());
        flags.args.limit = Some(5);
        flags.args.metrics = Some("tons_sum, cost_sum".to_string());
        flags.args.metric = vec!["tons_sum".to_string(), "margin_pct".to_string()];
        flags.args.filters = Some(r#"{"broker": "1", "trucker": "2"}"#.to_string());
        flags.args.filter = vec!["broker=9".to_string()];

        let request = build_request(shifts(), &flags).unwrap();
        let attributes = &request.document["data"]["attributes"];
        assert_eq!(attributes["group-by"], json!([]));
        assert_eq!(attributes["limit"], json!(5));
        assert_eq!(attributes["filters"], json!({ "broker": "9", "trucker": "2" }));
        assert_eq!(request.metrics, vec!["tons_sum", "cost_sum", "margin_pct"]);
        assert!(request.group_by.is_empty());
    }

    #[test]
    fn all_metrics_sends_no_metric_list() {
        let mut flags = dated();
        flags.args.all_metrics = true;
        let request = build_request(shifts(), &flags).unwrap();
        assert!(request.document["data"]["attributes"].get("included-metrics").is_none());
    }

    #[test]
    fn lane_request_keeps_metrics_local() {
        let mut flags = MatrixFlags {
            minimum: 25,
            features: vec![
                "cycle_summary_include_dmd".to_string(),
                " ".to_string(),
                "cycle_summary_include_dmd".to_string(),
                "cycle_summary_use_driver_day_trip_lead_minutes".to_string(),
            ],
            ..MatrixFlags::default()
        };
        flags.args.filter = vec!["broker=123".to_string()];

        let request = build_request(lanes(), &flags).unwrap();
        assert_eq!(
            request.document["data"]["attributes"],
            json!({
                "filters": { "broker": "123", "material_transaction_count__min": 25 },
                "group-by": ["origin", "destination"],
                "sort": ["material_transaction_count:desc"]
            })
        );
        assert_eq!(request.metrics.len(), 5);
        assert_eq!(
            request.query.get("meta[optional-features]"),
            Some("cycle_summary_include_dmd,cycle_summary_use_driver_day_trip_lead_minutes")
        );

        flags.minimum = 0;
        let request = build_request(lanes(), &flags).unwrap();
        assert_eq!(
            request.document["data"]["attributes"]["filters"],
            json!({ "broker": "123" })
        );
    }

    #[test]
    fn dates_and_filters_are_validated() {
        let mut missing = dated();
        missing.dates.start_on = Some("  ".to_string());
        assert_eq!(
            build_request(shifts(), &missing).unwrap_err().to_string(),
            "--start-on is required"
        );

        let request = build_request(lanes(), &dated()).unwrap();
        assert!(request.document["data"]["attributes"].get("start-on").is_none());

        assert!(parse_filters(Some("[1]"), &[]).is_err());
        assert!(parse_filters(Some("{bad"), &[]).is_err());
        assert!(parse_filters(None, &["nokey".to_string()]).is_err());
    }

    #[test]
    fn status_request_carries_entity_type() {
        let (entity, document) =
            build_status_request(transport(), &status_args(" transport_order ", &["broker=123"])).unwrap();
        assert_eq!(entity.name, "transport_order");
        assert_eq!(
            document,
            json!({
                "data": {
                    "type": "transport-summaries",
                    "attributes": {
                        "filters": { "broker": "123", "entity_type": "transport_order" }
                    }
                }
            })
        );

        let err = build_status_request(transport(), &status_args("trucks", &[])).unwrap_err();
        assert!(err.to_string().contains("live_loads"));
        let err = build_status_request(transport(), &status_args("", &[])).unwrap_err();
        assert_eq!(err.to_string(), "--entity-type is required");
    }

    #[test]
    fn status_lines_follow_the_entity_layout() {
        let attributes = json!({
            "transport_orders": { "editing": 3, "approved": 5 },
            "overdue": 2,
            "ignored": 9
        });
        let Value::Object(attributes) = attributes else {
            panic!("expected object");
        };
        let entity = transport().entity_type("transport_order").unwrap();
        let lines = status_lines(transport(), entity, &attributes);
        assert_eq!(lines[0], "Transport Summary (transport_order)");
        assert_eq!(lines[1], "-".repeat(40));
        assert_eq!(lines[3], "Status Breakdown:");
        assert_eq!(lines[4], format!("  {:<25} 3", "editing:"));
        assert_eq!(lines[6], format!("{:<30} 2", "Overdue:"));
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn selection_puts_display_columns_first() {
        let raw = table(
            &["tons_sum", "driver_id", "driver_name", "shift_count", "hours_sum"],
            json!([[12.5, 7, "Ann", 3, 20.25]]),
        );
        let selected = select_columns(
            shifts(),
            raw.clone(),
            &["driver".to_string()],
            &["shift_count".to_string(), "tons_sum".to_string()],
            false,
        );
        assert_eq!(selected.headers, vec!["driver_name", "tons_sum", "shift_count"]);
        assert_eq!(selected.values, vec![vec![json!("Ann"), json!(12.5), json!(3)]]);

        let all = select_columns(shifts(), raw.clone(), &["driver".to_string()], &[], true);
        assert_eq!(
            all.headers,
            vec!["driver_name", "tons_sum", "shift_count", "hours_sum"]
        );

        let none = select_columns(shifts(), raw.clone(), &[], &["nope".to_string()], false);
        assert_eq!(none, raw);
    }

    #[rstest]
    #[case("on_time_pct", json!(0.953), "95.3%")]
    #[case("margin_pct", json!(0.25), "25.0%")]
    #[case("check_in_pct", json!(87.26), "87.3%")]
    #[case("shift_count", json!(12), "12")]
    #[case("trip_sum", json!(4.6), "5")]
    #[case("revenue_sum", json!(1234.5), "$1234.50")]
    #[case("cost_per_ton", json!(3), "$3.00")]
    #[case("tons_sum", json!(101.456), "101.46")]
    #[case("hours_sum", json!(7.26), "7.3")]
    #[case("cycle_minutes_median", json!(42.04), "42.0")]
    #[case("driver_days", json!(3.0), "3")]
    #[case("ratio", json!(2.5), "2.50")]
    #[case("driver_name", json!("  Ann  "), "Ann")]
    #[case("managed", json!(true), "true")]
    #[case("anything", Value::Null, "")]
    fn cells_format_by_header(#[case] header: &str, #[case] value: Value, #[case] expected: &str) {
        assert_eq!(format_value(CellStyle::Standard, header, &value), expected);
    }

    #[rstest]
    #[case("origin_latitude", json!(40.1234567), "40.12346")]
    #[case("destination_longitude", json!(-74.5), "-74.50000")]
    #[case("cycle_count", json!(7.4), "7")]
    #[case("effective_cost_per_hour", json!(88), "$88.00")]
    #[case("revenue_sum", json!(1234.5), "1234.50")]
    #[case("hours_sum", json!(7.26), "7.26")]
    #[case("tons_sum", json!(10), "10.00")]
    #[case("cycle_minutes_median", json!(42.04), "42.0")]
    #[case("origin_type", json!("MaterialSiteLocation"), "MaterialSit...")]
    fn lane_cells_format_by_header(#[case] header: &str, #[case] value: Value, #[case] expected: &str) {
        assert_eq!(format_value(CellStyle::Lane, header, &value), expected);
    }

    #[test]
    fn long_names_are_truncated() {
        let name = json!("N".repeat(40));
        let cell = format_value(CellStyle::Standard, "trucker_name", &name);
        assert_eq!(cell.chars().count(), NAME_WIDTH);
        assert!(cell.ends_with("..."));

        let lane = |header| format_value(CellStyle::Lane, header, &name).chars().count();
        assert_eq!(lane("origin_organization_name"), LANE_ORGANIZATION_WIDTH);
        assert_eq!(lane("origin_name"), LANE_NAME_WIDTH);
    }

    #[tokio::test]
    async fn fetch_posts_and_narrows() {
        let server = MockServer::start().await;
        let request = build_request(shifts(), &dated()).unwrap();
        Mock::given(method("POST"))
            .and(path("/v1/shift-summaries"))
            .and(body_json(&request.document))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "data": {
                    "id": "s1",
                    "type": "shift-summaries",
                    "attributes": {
                        "headers": ["driver_id", "driver_name", "shift_count", "hours_sum", "tons_sum", "trip_sum", "cost_sum"],
                        "values": [[1, "Ann", 4, 30.5, 120.0, 9, 500.0]]
                    }
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri(), Some("tok"), Duration::from_secs(5)).unwrap();
        let table = fetch(&client, shifts(), &request).await.unwrap();
        assert_eq!(
            table.headers,
            vec!["driver_name", "shift_count", "hours_sum", "tons_sum", "trip_sum"]
        );
        assert_eq!(
            table.formatted_rows(CellStyle::Standard),
            vec![vec!["Ann", "4", "30.5", "120.00", "9"]]
        );
        assert_eq!(table.rows_json()[0]["driver_name"], json!("Ann"));
    }

    #[tokio::test]
    async fn lane_fetch_sends_optional_features() {
        let server = MockServer::start().await;
        let flags = MatrixFlags {
            features: vec!["cycle_summary_include_dmd".to_string()],
            ..MatrixFlags::default()
        };
        let request = build_request(lanes(), &flags).unwrap();
        Mock::given(method("POST"))
            .and(path("/v1/cycle-summaries"))
            .and(query_param("meta[optional-features]", "cycle_summary_include_dmd"))
            .and(body_json(&request.document))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "data": {
                    "id": "c1",
                    "type": "cycle-summaries",
                    "attributes": {
                        "headers": ["origin_id", "origin_name", "origin_latitude", "destination_id", "destination_name", "cycle_count"],
                        "values": [[1, "Quarry", 40.0, 2, "Site", 12]]
                    }
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri(), Some("tok"), Duration::from_secs(5)).unwrap();
        let table = fetch(&client, lanes(), &request).await.unwrap();
        assert_eq!(table.headers, vec!["origin_name", "destination_name", "cycle_count"]);
    }
}
