//! Static catalog of platform resources and summary endpoints.
//!
//! Every resource command is generic; what differs between resources
//! (path, sparse fieldsets, includes, filter flags, writable fields, table
//! columns) lives here as data.

mod resources;
mod summaries;

use serde::Serialize;

pub use resources::RESOURCES;
pub use summaries::SUMMARIES;

/// Attribute names tried, in order, when labelling a related resource.
pub const LABEL_ATTRIBUTES: &[&str] = &[
    "name",
    "company-name",
    "display-name",
    "job-number",
    "number",
    "title",
    "headline",
    "ticket-number",
    "email-address",
];

/// Flags owned by the CLI itself; catalog flags must not reuse them.
pub const RESERVED_FLAGS: &[&str] = &[
    "json",
    "base-url",
    "token",
    "no-auth",
    "verbose",
    "help",
    "limit",
    "offset",
    "sort",
    "filter",
    "omit-null",
    "confirm",
    "created-at-min",
    "created-at-max",
    "updated-at-min",
    "updated-at-max",
];

/// Command verbs a resource may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    List,
    Show,
    Create,
    Update,
    Delete,
}

impl Verb {
    pub const READ: &'static [Verb] = &[Verb::List, Verb::Show];
    pub const WRITE: &'static [Verb] = &[Verb::Create, Verb::Update, Verb::Delete];
    pub const ALL: &'static [Verb] = &[
        Verb::List,
        Verb::Show,
        Verb::Create,
        Verb::Update,
        Verb::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Verb::List => "list",
            Verb::Show => "show",
            Verb::Create => "create",
            Verb::Update => "update",
            Verb::Delete => "delete",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|verb| verb.as_str() == name)
    }
}

/// Grouping used by `xbe resources`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Organizations,
    ProjectsJobs,
    Fleet,
    Materials,
    LaborTime,
    Financial,
    Safety,
    Content,
    Other,
}

impl Category {
    pub const ORDER: &'static [Category] = &[
        Category::Organizations,
        Category::ProjectsJobs,
        Category::Fleet,
        Category::Materials,
        Category::LaborTime,
        Category::Financial,
        Category::Safety,
        Category::Content,
        Category::Other,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Category::Organizations => "Organizations",
            Category::ProjectsJobs => "Projects & Jobs",
            Category::Fleet => "Fleet & Transport",
            Category::Materials => "Materials",
            Category::LaborTime => "Labor & Time",
            Category::Financial => "Financial",
            Category::Safety => "Safety",
            Category::Content => "Content",
            Category::Other => "Other",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Category::Organizations => "organizations",
            Category::ProjectsJobs => "projects-jobs",
            Category::Fleet => "fleet",
            Category::Materials => "materials",
            Category::LaborTime => "labor-time",
            Category::Financial => "financial",
            Category::Safety => "safety",
            Category::Content => "content",
            Category::Other => "other",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ORDER.iter().copied().find(|cat| cat.slug() == slug)
    }
}

/// How a list filter flag maps onto the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// `--flag <value>`; sent when non-blank.
    Text,
    /// `--flag`; sends `true` when present.
    Switch,
}

#[derive(Debug, Clone, Copy)]
pub struct FilterSpec {
    pub flag: &'static str,
    pub param: &'static str,
    pub kind: FilterKind,
    pub help: &'static str,
}

impl FilterSpec {
    pub const fn text(flag: &'static str, param: &'static str, help: &'static str) -> Self {
        Self {
            flag,
            param,
            kind: FilterKind::Text,
            help,
        }
    }

    pub const fn switch(flag: &'static str, param: &'static str, help: &'static str) -> Self {
        Self {
            flag,
            param,
            kind: FilterKind::Switch,
            help,
        }
    }
}

/// Where a table column takes its value from.
#[derive(Debug, Clone, Copy)]
pub enum Source {
    Id,
    Attr(&'static str),
    /// Label attribute(s) of an included resource reached by a dotted path.
    /// The first non-blank attribute wins.
    Related {
        path: &'static str,
        attrs: &'static [&'static str],
    },
    /// Id of a related resource, whether or not it was included.
    RelatedId(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    /// Key used in JSON output.
    pub key: &'static str,
    pub header: &'static str,
    pub source: Source,
    /// Truncation width for table output.
    pub width: Option<usize>,
}

impl Column {
    pub const fn id() -> Self {
        Self {
            key: "id",
            header: "ID",
            source: Source::Id,
            width: None,
        }
    }

    pub const fn attr(key: &'static str, header: &'static str, attr: &'static str) -> Self {
        Self {
            key,
            header,
            source: Source::Attr(attr),
            width: None,
        }
    }

    pub const fn related(
        key: &'static str,
        header: &'static str,
        path: &'static str,
        attrs: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            header,
            source: Source::Related { path, attrs },
            width: None,
        }
    }

    pub const fn related_id(key: &'static str, header: &'static str, rel: &'static str) -> Self {
        Self {
            key,
            header,
            source: Source::RelatedId(rel),
            width: None,
        }
    }

    pub const fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }
}

/// Value kinds accepted by writable attribute flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Text,
    Integer,
    Decimal,
    Bool,
    /// Comma-separated list sent as a JSON array of strings.
    List,
    /// Raw JSON value.
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct AttributeSpec {
    pub flag: &'static str,
    pub attr: &'static str,
    pub kind: ValueKind,
    pub required: bool,
    pub help: &'static str,
}

impl AttributeSpec {
    pub const fn new(flag: &'static str, kind: ValueKind, help: &'static str) -> Self {
        Self {
            flag,
            attr: flag,
            kind,
            required: false,
            help,
        }
    }

    pub const fn text(flag: &'static str, help: &'static str) -> Self {
        Self::new(flag, ValueKind::Text, help)
    }

    pub const fn integer(flag: &'static str, help: &'static str) -> Self {
        Self::new(flag, ValueKind::Integer, help)
    }

    pub const fn decimal(flag: &'static str, help: &'static str) -> Self {
        Self::new(flag, ValueKind::Decimal, help)
    }

    pub const fn boolean(flag: &'static str, help: &'static str) -> Self {
        Self::new(flag, ValueKind::Bool, help)
    }

    pub const fn list(flag: &'static str, help: &'static str) -> Self {
        Self::new(flag, ValueKind::List, help)
    }

    pub const fn json(flag: &'static str, help: &'static str) -> Self {
        Self::new(flag, ValueKind::Json, help)
    }

    /// Required on create.
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RelationshipSpec {
    pub flag: &'static str,
    pub rel: &'static str,
    pub target_type: &'static str,
    pub many: bool,
    pub required: bool,
    pub help: &'static str,
}

impl RelationshipSpec {
    pub const fn to_one(flag: &'static str, target_type: &'static str, help: &'static str) -> Self {
        Self {
            flag,
            rel: flag,
            target_type,
            many: false,
            required: false,
            help,
        }
    }

    pub const fn to_many(flag: &'static str, target_type: &'static str, help: &'static str) -> Self {
        Self {
            flag,
            rel: flag,
            target_type,
            many: true,
            required: false,
            help,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// A resource exposed under `xbe view` / `xbe do`.
#[derive(Debug, Clone, Copy)]
pub struct ResourceSpec {
    /// Command name and URL segment (`/v1/<name>`).
    pub name: &'static str,
    /// JSON:API type when it differs from `name`.
    pub type_override: Option<&'static str>,
    pub singular: &'static str,
    pub about: &'static str,
    pub category: Category,
    pub verbs: &'static [Verb],
    /// Sparse fieldset for the primary type.
    pub fields: &'static [&'static str],
    pub include: &'static [&'static str],
    /// Sparse fieldsets for included types: `(type, "a,b")`.
    pub included_fields: &'static [(&'static str, &'static str)],
    pub default_sort: Option<&'static str>,
    pub default_filters: &'static [(&'static str, &'static str)],
    pub filters: &'static [FilterSpec],
    pub timestamps: bool,
    pub columns: &'static [Column],
    /// Attributes used to describe a single record in messages.
    pub label: &'static [&'static str],
    pub attributes: &'static [AttributeSpec],
    pub relationships: &'static [RelationshipSpec],
}

impl ResourceSpec {
    pub const DEFAULT: ResourceSpec = ResourceSpec {
        name: "",
        type_override: None,
        singular: "",
        about: "",
        category: Category::Other,
        verbs: Verb::READ,
        fields: &[],
        include: &[],
        included_fields: &[],
        default_sort: None,
        default_filters: &[],
        filters: &[],
        timestamps: true,
        columns: &[],
        label: &[],
        attributes: &[],
        relationships: &[],
    };

    pub fn resource_type(&self) -> &'static str {
        self.type_override.unwrap_or(self.name)
    }

    pub fn collection_path(&self) -> String {
        format!("/v1/{}", self.name)
    }

    pub fn member_path(&self, id: &str) -> String {
        format!("/v1/{}/{}", self.name, id)
    }

    pub fn supports(&self, verb: Verb) -> bool {
        self.verbs.contains(&verb)
    }

    pub fn supports_any(&self, verbs: &[Verb]) -> bool {
        verbs.iter().any(|verb| self.supports(*verb))
    }
}

/// Find a resource by command name.
pub fn resource(name: &str) -> Option<&'static ResourceSpec> {
    RESOURCES.iter().find(|spec| spec.name == name)
}

/// Response layout of a summary endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryShape {
    /// `headers` + `values` matrix, narrowed by group-by and metrics.
    Matrix,
    /// Status counts for one `--entity-type`.
    Status,
}

/// Cell formatting rules of a matrix summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Standard,
    /// Coordinates, `$` only for cost rates, tighter name widths.
    Lane,
}

/// Switch that turns on a server-side optional feature.
#[derive(Debug, Clone, Copy)]
pub struct FeatureFlag {
    pub flag: &'static str,
    pub feature: &'static str,
    pub help: &'static str,
}

/// Integer flag copied into `filters` when positive.
#[derive(Debug, Clone, Copy)]
pub struct MinimumFlag {
    pub flag: &'static str,
    pub filter: &'static str,
    pub help: &'static str,
}

/// Entity type of a status summary and what to print for it.
#[derive(Debug, Clone, Copy)]
pub struct StatusEntity {
    pub name: &'static str,
    /// Attribute holding a `{status: count}` object.
    pub breakdown: Option<&'static str>,
    /// `(attribute, label)` pairs printed after the breakdown.
    pub fields: &'static [(&'static str, &'static str)],
}

/// A server-side aggregation endpoint exposed under `xbe summarize`.
#[derive(Debug, Clone, Copy)]
pub struct SummarySpec {
    pub name: &'static str,
    pub resource_type: &'static str,
    pub about: &'static str,
    pub shape: SummaryShape,
    /// `--start-on`/`--end-on` exist and are required.
    pub requires_dates: bool,
    /// Send `included-metrics`; otherwise metrics only narrow the output.
    pub sends_metrics: bool,
    pub cells: CellStyle,
    pub default_group_by: &'static [&'static str],
    pub default_sort: &'static [&'static str],
    pub default_metrics: &'static [&'static str],
    /// Groups that expand to `<group>_id` + `<group>_name`, displayed by name.
    pub entity_groups: &'static [&'static str],
    /// Groups with non-standard columns: `(group, display, all)`.
    pub group_columns: &'static [(&'static str, &'static [&'static str], &'static [&'static str])],
    pub minimum: Option<MinimumFlag>,
    /// Sent as `meta[optional-features]`.
    pub features: &'static [FeatureFlag],
    pub entity_types: &'static [StatusEntity],
}

impl SummarySpec {
    pub const DEFAULT: SummarySpec = SummarySpec {
        name: "",
        resource_type: "",
        about: "",
        shape: SummaryShape::Matrix,
        requires_dates: false,
        sends_metrics: true,
        cells: CellStyle::Standard,
        default_group_by: &[],
        default_sort: &[],
        default_metrics: &[],
        entity_groups: &[],
        group_columns: &[],
        minimum: None,
        features: &[],
        entity_types: &[],
    };

    pub fn entity_type(&self, name: &str) -> Option<&'static StatusEntity> {
        self.entity_types.iter().find(|entity| entity.name == name)
    }

    pub fn path(&self) -> String {
        format!("/v1/{}", self.resource_type)
    }

    /// Columns shown for a group-by key.
    pub fn display_columns(&self, group: &str) -> Vec<String> {
        if let Some((_, display, _)) = self.group_columns.iter().find(|(g, _, _)| *g == group) {
            return display.iter().map(|col| col.to_string()).collect();
        }
        if self.entity_groups.contains(&group) {
            return vec![format!("{group}_name")];
        }
        vec![group.to_string()]
    }

    /// Every column a group-by key contributes to the response.
    pub fn all_columns(&self, group: &str) -> Vec<String> {
        if let Some((_, _, all)) = self.group_columns.iter().find(|(g, _, _)| *g == group) {
            return all.iter().map(|col| col.to_string()).collect();
        }
        if self.entity_groups.contains(&group) {
            return vec![format!("{group}_id"), format!("{group}_name")];
        }
        vec![group.to_string()]
    }
}

pub fn summary(name: &str) -> Option<&'static SummarySpec> {
    SUMMARIES.iter().find(|spec| spec.name == name)
}
