use super::{
    AttributeSpec as A, Category, Column as C, FilterSpec as F, RelationshipSpec as R,
    ResourceSpec, Verb,
};

const LIST_SHOW_CREATE_UPDATE: &[Verb] = &[Verb::List, Verb::Show, Verb::Create, Verb::Update];
const LIST_SHOW_UPDATE_DELETE: &[Verb] = &[Verb::List, Verb::Show, Verb::Update, Verb::Delete];

const COMPANY: &[&str] = &["company-name"];
const NAME: &[&str] = &["name"];
const ORG: &[&str] = &["company-name", "name"];

pub static RESOURCES: &[ResourceSpec] = &[
    // Organizations
    ResourceSpec {
        name: "brokers",
        singular: "broker",
        about: "Broker organizations",
        category: Category::Organizations,
        verbs: LIST_SHOW_CREATE_UPDATE,
        fields: &["company-name", "abbreviation", "is-active"],
        default_sort: Some("company-name"),
        filters: &[
            F::text("company-name", "filter[company-name]", "Filter by company name"),
            F::text("is-active", "filter[is-active]", "Filter by active status (true/false)"),
            F::text("sub-domain", "filter[sub-domain]", "Filter by sub-domain"),
            F::switch("quickbooks-enabled", "filter[quickbooks-enabled]", "Only brokers with QuickBooks enabled"),
        ],
        columns: &[
            C::id(),
            C::attr("company_name", "COMPANY", "company-name").width(40),
            C::attr("abbreviation", "ABBR", "abbreviation"),
            C::attr("is_active", "ACTIVE", "is-active"),
        ],
        label: COMPANY,
        attributes: &[
            A::text("company-name", "Company name").required(),
            A::text("abbreviation", "Short abbreviation"),
            A::boolean("is-active", "Whether the broker is active"),
            A::text("help-text", "Help text shown to users"),
            A::boolean("quickbooks-enabled", "Enable QuickBooks integration"),
            A::text("remit-to-address", "Remit-to address"),
            A::boolean("is-transport-only", "Transport-only broker"),
        ],
        relationships: &[
            R::to_one("default-dispatch-contact", "users", "Default dispatch contact user ID"),
            R::to_one("default-financial-contact", "users", "Default financial contact user ID"),
        ],
        ..ResourceSpec::DEFAULT
    },
    ResourceSpec {
        name: "customers",
        singular: "customer",
        about: "Customer organizations",
        category: Category::Organizations,
        verbs: LIST_SHOW_CREATE_UPDATE,
        fields: &["company-name", "is-active", "broker"],
        include: &["broker"],
        included_fields: &[("brokers", "company-name")],
        default_sort: Some("company-name"),
        filters: &[
            F::text("company-name", "filter[company-name]", "Filter by company name"),
            F::text("broker", "filter[broker]", "Filter by broker ID"),
            F::text("is-active", "filter[is-active]", "Filter by active status (true/false)"),
            F::text("q", "filter[q]", "Full-text search"),
        ],
        columns: &[
            C::id(),
            C::attr("company_name", "COMPANY", "company-name").width(40),
            C::related("broker", "BROKER", "broker", COMPANY).width(25),
            C::attr("is_active", "ACTIVE", "is-active"),
        ],
        label: COMPANY,
        attributes: &[
            A::text("company-name", "Company name").required(),
            A::text("company-address", "Company address"),
            A::text("phone-number", "Phone number"),
            A::text("fax-number", "Fax number"),
            A::text("notes", "Notes"),
            A::boolean("is-active", "Whether the customer is active"),
            A::boolean("requires-union-drivers", "Requires union drivers"),
            A::decimal("credit-limit", "Credit limit"),
            A::integer("default-payment-terms", "Default payment terms in days"),
        ],
        relationships: &[
            R::to_one("broker", "brokers", "Broker ID").required(),
            R::to_one("developer", "developers", "Developer ID"),
        ],
        ..ResourceSpec::DEFAULT
    },
    ResourceSpec {
        name: "truckers",
        singular: "trucker",
        about: "Trucking companies",
        category: Category::Organizations,
        verbs: LIST_SHOW_CREATE_UPDATE,
        fields: &["company-name", "is-active", "broker"],
        include: &["broker"],
        included_fields: &[("brokers", "company-name")],
        default_sort: Some("company-name"),
        filters: &[
            F::text("company-name", "filter[company-name]", "Filter by company name"),
            F::switch("active", "filter[is-active]", "Only active truckers"),
            F::text("broker", "filter[broker]", "Filter by broker ID"),
            F::text("q", "filter[q]", "Full-text search"),
            F::text("phone-number", "filter[phone-number]", "Filter by phone number"),
            F::text("favorite", "filter[favorite]", "Filter by favorite flag (true/false)"),
            F::text("tax-identifier", "filter[tax-identifier]", "Filter by tax identifier"),
            F::text("last-shift-start-at-min", "filter[last-shift-start-at-min]", "Last shift started on or after"),
            F::text("last-shift-start-at-max", "filter[last-shift-start-at-max]", "Last shift started on or before"),
        ],
        columns: &[
            C::id(),
            C::attr("company_name", "COMPANY", "company-name").width(40),
            C::related("broker", "BROKER", "broker", COMPANY).width(25),
            C::attr("is_active", "ACTIVE", "is-active"),
        ],
        label: COMPANY,
        attributes: &[
            A::text("company-name", "Company name").required(),
            A::text("company-address", "Company address"),
            A::text("phone-number", "Phone number"),
            A::text("fax-number", "Fax number"),
            A::text("tax-identifier", "Tax identifier"),
            A::text("notes", "Notes"),
            A::boolean("is-active", "Whether the trucker is active"),
            A::boolean("favorite", "Mark as favorite"),
            A::boolean("has-union-drivers", "Has union drivers"),
            A::integer("default-payment-terms", "Default payment terms in days"),
            A::integer("estimated-trailer-capacity", "Estimated trailer capacity"),
            A::text("color-hex", "Display color (hex)"),
        ],
        relationships: &[R::to_one("broker", "brokers", "Broker ID").required()],
        ..ResourceSpec::DEFAULT
    },
    ResourceSpec {
        name: "material-suppliers",
        singular: "material supplier",
        about: "Material supplier organizations",
        category: Category::Organizations,
        fields: &["name", "is-active", "broker"],
        include: &["broker"],
        included_fields: &[("brokers", "company-name")],
        default_sort: Some("name"),
        filters: &[
            F::text("name", "filter[name]", "Filter by name"),
            F::text("broker", "filter[broker]", "Filter by broker ID"),
            F::text("q", "filter[q]", "Full-text search"),
        ],
        columns: &[
            C::id(),
            C::attr("name", "NAME", "name").width(40),
            C::related("broker", "BROKER", "broker", COMPANY).width(25),
            C::attr("is_active", "ACTIVE", "is-active"),
        ],
        label: NAME,
        ..ResourceSpec::DEFAULT
    },
    ResourceSpec {
        name: "developers",
        singular: "developer",
        about: "Developer organizations",
        category: Category::Organizations,
        fields: &["name", "broker"],
        include: &["broker"],
        included_fields: &[("brokers", "company-name")],
        default_sort: Some("name"),
        filters: &[
            F::text("name", "filter[name]", "Filter by name"),
            F::text("broker", "filter[broker]", "Filter by broker ID"),
        ],
        columns: &[
            C::id(),
            C::attr("name", "NAME", "name").width(40),
            C::related("broker", "BROKER", "broker", COMPANY).width(25),
        ],
        label: NAME,
        ..ResourceSpec::DEFAULT
    },
    ResourceSpec {
        name: "business-units",
        singular: "business unit",
        about: "Broker business units",
        category: Category::Organizations,
        fields: &["company-name", "broker"],
        include: &["broker"],
        included_fields: &[("brokers", "company-name")],
        filters: &[
            F::text("broker", "filter[broker]", "Filter by broker ID"),
            F::text("company-name", "filter[company-name]", "Filter by company name"),
        ],
        columns: &[
            C::id(),
            C::attr("company_name", "NAME", "company-name").width(40),
            C::related("broker", "BROKER", "broker", COMPANY).width(25),
        ],
        label: COMPANY,
        ..ResourceSpec::DEFAULT
    },
    ResourceSpec {
        name: "users",
        singular: "user",
        about: "Platform users",
        category: Category::Organizations,
        verbs: LIST_SHOW_CREATE_UPDATE,
        fields: &["name", "email-address", "mobile-number", "is-admin"],
        filters: &[
            F::text("q", "filter[q]", "Full-text search"),
            F::switch("admin", "filter[is-admin]", "Only admins"),
            F::text("email-address", "filter[email-address]", "Filter by email address"),
            F::text("email-address-like", "filter[email-address-like]", "Filter by partial email address"),
            F::text("mobile-number", "filter[mobile-number]", "Filter by mobile number"),
            F::text("is-driver", "filter[is-driver]", "Filter by driver flag (true/false)"),
            F::text("having-trucker-membership-with", "filter[having-trucker-membership-with]", "Users with a membership in this trucker"),
            F::text("having-customer-membership-with", "filter[having-customer-membership-with]", "Users with a membership in this customer"),
        ],
        columns: &[
            C::id(),
            C::attr("name", "NAME", "name").width(30),
            C::attr("email_address", "EMAIL", "email-address").width(35),
            C::attr("mobile_number", "MOBILE", "mobile-number"),
            C::attr("is_admin", "ADMIN", "is-admin"),
        ],
        label: &["name", "email-address"],
        attributes: &[
            A::text("name", "Full name").required(),
            A::text("email-address", "Email address"),
            A::text("mobile-number", "Mobile number"),
            A::text("slack-id", "Slack user ID"),
            A::boolean("is-admin", "Grant admin"),
            A::boolean("dark-mode", "Use dark mode"),
            A::text("explicit-time-zone-id", "Time zone (e.g. America/Chicago)"),
            A::text("default-contact-method", "Default contact method"),
            A::boolean("is-suspended-from-driving", "Suspend from driving"),
        ],
        ..ResourceSpec::DEFAULT
    },
    ResourceSpec {
        name: "memberships",
        singular: "membership",
        about: "User memberships in organizations",
        category: Category::Organizations,
        verbs: LIST_SHOW_UPDATE_DELETE,
        fields: &["kind", "title", "user", "organization"],
        include: &["user", "organization"],
        included_fields: &[
            ("users", "name"),
            ("brokers", "company-name"),
            ("customers", "company-name"),
            ("truckers", "company-name"),
            ("material-suppliers", "name"),
        ],
        filters: &[
            F::text("user", "filter[user]", "Filter by user ID"),
            F::text("organization", "filter[organization]", "Filter by organization (Type|ID)"),
            F::text("broker", "filter[broker]", "Filter by broker ID"),
            F::text("kind", "filter[kind]", "Filter by kind (manager/operations)"),
            F::text("q", "filter[q]", "Full-text search"),
        ],
        columns: &[
            C::id(),
            C::related("user", "USER", "user", NAME).width(25),
            C::related("organization", "ORGANIZATION", "organization", ORG).width(30),
            C::attr("kind", "KIND", "kind"),
            C::attr("title", "TITLE", "title").width(20),
        ],
        label: &["title", "kind"],
        attributes: &[
            A::text("kind", "Membership kind (manager/operations)"),
            A::text("title", "Title within the organization"),
            A::boolean("is-admin", "Organization admin"),
            A::text("external-employee-id", "External employee ID"),
            A::boolean("is-rate-editor", "Can edit rates"),
            A::boolean("is-time-card-auditor", "Audits time cards"),
        ],
        ..ResourceSpec::DEFAULT
    },
    // Projects & jobs
    ResourceSpec {
        name: "projects",
        singular: "project",
        about: "Projects",
        category: Category::ProjectsJobs,
        verbs: Verb::ALL,
        fields: &["name", "number", "status", "due-on", "customer"],
        include: &["customer"],
        included_fields: &[("customers", "company-name")],
        filters: &[
            F::text("name", "filter[name]", "Filter by name"),
            F::text("name-like", "filter[name-like]", "Filter by partial name"),
            F::text("number", "filter[number]", "Filter by project number"),
            F::text("status", "filter[status]", "Filter by status"),
            F::text("broker", "filter[broker]", "Filter by broker ID"),
            F::text("customer", "filter[customer]", "Filter by customer ID"),
            F::text("developer", "filter[developer]", "Filter by developer ID"),
            F::text("project-manager", "filter[project-manager]", "Filter by project manager user ID"),
            F::text("estimator", "filter[estimator]", "Filter by estimator user ID"),
            F::text("is-active", "filter[is-active]", "Filter by active status (true/false)"),
            F::text("due-on-min", "filter[due-on-min]", "Due on or after (YYYY-MM-DD)"),
            F::text("due-on-max", "filter[due-on-max]", "Due on or before (YYYY-MM-DD)"),
            F::text("q", "filter[q]", "Full-text search"),
        ],
        columns: &[
            C::id(),
            C::attr("number", "NUMBER", "number"),
            C::attr("name", "NAME", "name").width(40),
            C::attr("status", "STATUS", "status"),
            C::attr("due_on", "DUE", "due-on"),
            C::related("customer", "CUSTOMER", "customer", COMPANY).width(25),
        ],
        label: &["name", "number"],
        attributes: &[
            A::text("name", "Project name").required(),
            A::text("number", "Project number"),
            A::text("start-on", "Start date (YYYY-MM-DD)"),
            A::text("due-on", "Due date (YYYY-MM-DD)"),
            A::boolean("is-managed", "Managed project"),
            A::boolean("is-opportunity", "Sales opportunity"),
            A::boolean("is-transport-only", "Transport-only project"),
            A::boolean("enforce-number-uniqueness", "Enforce unique project numbers"),
        ],
        relationships: &[
            R::to_one("developer", "developers", "Developer ID").required(),
            R::to_one("customer", "customers", "Customer ID"),
            R::to_one("project-manager", "users", "Project manager user ID"),
            R::to_one("estimator", "users", "Estimator user ID"),
            R::to_one("project-office", "project-offices", "Project office ID"),
        ],
        ..ResourceSpec::DEFAULT
    },
    ResourceSpec {
        name: "job-sites",
        singular: "job site",
        about: "Job sites",
        category: Category::ProjectsJobs,
        fields: &["name", "is-active", "customer", "broker"],
        include: &["customer", "broker"],
        included_fields: &[("customers", "company-name"), ("brokers", "company-name")],
        default_sort: Some("name"),
        filters: &[
            F::text("name", "filter[name]", "Filter by name"),
            F::text("customer", "filter[customer]", "Filter by customer ID"),
            F::text("broker", "filter[broker]", "Filter by broker ID"),
            F::text("is-active", "filter[is-active]", "Filter by active status (true/false)"),
            F::text("q", "filter[q]", "Full-text search"),
        ],
        columns: &[
            C::id(),
            C::attr("name", "NAME", "name").width(40),
            C::related("customer", "CUSTOMER", "customer", COMPANY).width(25),
            C::related("broker", "BROKER", "broker", COMPANY).width(20),
            C::attr("is_active", "ACTIVE", "is-active"),
        ],
        label: NAME,
        ..ResourceSpec::DEFAULT
    },
    ResourceSpec {
        name: "jobs",
        singular: "job",
        about: "Jobs",
        category: Category::ProjectsJobs,
        verbs: LIST_SHOW_CREATE_UPDATE,
        fields: &["external-job-number", "customer", "job-site", "job-production-plan"],
        include: &["customer", "job-site", "job-production-plan"],
        included_fields: &[
            ("customers", "company-name"),
            ("job-sites", "name"),
            ("job-production-plans", "job-number,job-name"),
        ],
        filters: &[
            F::text("customer", "filter[customer]", "Filter by customer ID"),
            F::text("job-site", "filter[job-site]", "Filter by job site ID"),
            F::text("job-production-plan", "filter[job-production-plan]", "Filter by job production plan ID"),
            F::text("broker", "filter[broker]", "Filter by broker ID"),
            F::text("trucker", "filter[trucker]", "Filter by trucker ID"),
            F::text("external-job-number", "filter[external-job-number]", "Filter by external job number"),
            F::text("start-at-min", "filter[start-at-min]", "Starts on or after (ISO 8601)"),
            F::text("start-at-max", "filter[start-at-max]", "Starts on or before (ISO 8601)"),
        ],
        columns: &[
            C::id(),
            C::attr("external_job_number", "EXT JOB #", "external-job-number"),
            C::related("customer", "CUSTOMER", "customer", COMPANY).width(25),
            C::related("job_site", "JOB SITE", "job-site", NAME).width(25),
            C::related("job_production_plan", "PLAN", "job-production-plan", &["job-number", "job-name"]).width(20),
        ],
        label: &["external-job-number"],
        attributes: &[
            A::text("external-job-number", "External job number"),
            A::text("notes", "Notes"),
            A::text("dispatch-instructions", "Dispatch instructions"),
            A::decimal("loaded-miles", "Loaded miles"),
            A::boolean("is-prevailing-wage", "Prevailing wage job"),
            A::decimal("prevailing-wage-hourly-rate", "Prevailing wage hourly rate"),
            A::boolean("requires-certified-payroll", "Requires certified payroll"),
        ],
        relationships: &[
            R::to_one("customer", "customers", "Customer ID").required(),
            R::to_one("job-site", "job-sites", "Job site ID").required(),
            R::to_one("job-production-plan", "job-production-plans", "Job production plan ID"),
            R::to_one("foreman", "users", "Foreman user ID"),
            R::to_many("material-types", "material-types", "Material type IDs (comma-separated)"),
            R::to_many("trailer-classifications", "trailer-classifications", "Trailer classification IDs (comma-separated)"),
        ],
        ..ResourceSpec::DEFAULT
    },
    ResourceSpec {
        name: "job-production-plans",
        singular: "job production plan",
        about: "Job production plans",
        category: Category::ProjectsJobs,
        verbs: Verb::ALL,
        fields: &[
            "job-number",
            "job-name",
            "status",
            "start-on",
            "start-time",
            "goal-quantity",
            "customer",
            "planner",
            "job-site",
        ],
        include: &["customer", "planner", "job-site"],
        included_fields: &[
            ("customers", "company-name"),
            ("users", "name"),
            ("job-sites", "name"),
        ],
        default_sort: Some("-start-on"),
        filters: &[
            F::text("customer", "filter[customer]", "Filter by customer ID"),
            F::text("broker", "filter[broker]", "Filter by broker ID"),
            F::text("business-unit", "filter[business-unit]", "Filter by business unit ID"),
            F::text("planner", "filter[planner]", "Filter by planner user ID"),
            F::text("project", "filter[project]", "Filter by project ID"),
            F::text("status", "filter[status]", "Filter by status"),
            F::text("start-on", "filter[start-on]", "Filter by start date (YYYY-MM-DD)"),
            F::text("start-on-min", "filter[start-on-min]", "Starts on or after (YYYY-MM-DD)"),
            F::text("start-on-max", "filter[start-on-max]", "Starts on or before (YYYY-MM-DD)"),
            F::text("job-number", "filter[job-number]", "Filter by job number"),
            F::switch("templates", "filter[is-template]", "Only templates"),
            F::text("q", "filter[q]", "Full-text search"),
        ],
        columns: &[
            C::id(),
            C::attr("job_number", "JOB #", "job-number"),
            C::attr("job_name", "NAME", "job-name").width(35),
            C::attr("status", "STATUS", "status"),
            C::attr("start_on", "START", "start-on"),
            C::attr("goal_quantity", "GOAL", "goal-quantity"),
            C::related("customer", "CUSTOMER", "customer", COMPANY).width(25),
            C::related("job_site", "JOB SITE", "job-site", NAME).width(25),
        ],
        label: &["job-number", "job-name"],
        attributes: &[
            A::text("job-name", "Job name").required(),
            A::text("job-number", "Job number"),
            A::text("start-on", "Start date (YYYY-MM-DD)").required(),
            A::text("start-time", "Start time (HH:MM)"),
            A::text("end-time", "End time (HH:MM)"),
            A::decimal("goal-quantity", "Goal quantity"),
            A::decimal("goal-hours", "Goal hours"),
            A::text("notes", "Notes"),
            A::text("dispatch-instructions", "Dispatch instructions"),
            A::text("phase-name", "Phase name"),
            A::boolean("is-template", "Save as template"),
            A::text("template-name", "Template name"),
            A::boolean("is-on-hold", "Put on hold"),
            A::text("on-hold-comment", "On-hold comment"),
            A::boolean("is-schedule-locked", "Lock the schedule"),
            A::boolean("requires-trucking", "Requires trucking"),
            A::boolean("requires-materials", "Requires materials"),
            A::decimal("cost-per-truck-hour", "Cost per truck hour"),
            A::decimal("cost-per-crew-hour", "Cost per crew hour"),
            A::json("reference-data", "Reference data (JSON object)"),
        ],
        relationships: &[
            R::to_one("customer", "customers", "Customer ID").required(),
            R::to_one("job-site", "job-sites", "Job site ID"),
            R::to_one("planner", "users", "Planner user ID"),
            R::to_one("project-manager", "users", "Project manager user ID"),
            R::to_one("project", "projects", "Project ID"),
            R::to_one("business-unit", "business-units", "Business unit ID"),
            R::to_one("unit-of-measure", "unit-of-measures", "Unit of measure ID"),
            R::to_one("default-trucker", "truckers", "Default trucker ID"),
            R::to_many("trailer-classifications", "trailer-classifications", "Trailer classification IDs (comma-separated)"),
            R::to_many("cost-codes", "cost-codes", "Cost code IDs (comma-separated)"),
        ],
        ..ResourceSpec::DEFAULT
    },
    ResourceSpec {
        name: "job-schedule-shifts",
        singular: "job schedule shift",
        about: "Scheduled shifts on jobs",
        category: Category::ProjectsJobs,
        verbs: Verb::ALL,
        fields: &["start-at", "end-at", "is-managed", "cancelled-at", "job", "job-site", "customer", "broker"],
        include: &["job-site", "customer", "broker"],
        included_fields: &[
            ("job-sites", "name"),
            ("customers", "company-name"),
            ("brokers", "company-name"),
        ],
        default_sort: Some("start-at"),
        filters: &[
            F::text("job", "filter[job]", "Filter by job ID"),
            F::text("job-production-plan", "filter[job-production-plan]", "Filter by job production plan ID"),
            F::text("customer", "filter[customer]", "Filter by customer ID"),
            F::text("broker", "filter[broker]", "Filter by broker ID"),
            F::text("start-at-min", "filter[start-at-min]", "Starts on or after (ISO 8601)"),
            F::text("start-at-max", "filter[start-at-max]", "Starts on or before (ISO 8601)"),
            F::switch("cancelled", "filter[is-cancelled]", "Only cancelled shifts"),
        ],
        columns: &[
            C::id(),
            C::attr("start_at", "START", "start-at"),
            C::attr("end_at", "END", "end-at"),
            C::related_id("job_id", "JOB", "job"),
            C::related("job_site", "JOB SITE", "job-site", NAME).width(25),
            C::related("customer", "CUSTOMER", "customer", COMPANY).width(25),
            C::attr("cancelled_at", "CANCELLED", "cancelled-at"),
        ],
        label: &["start-at"],
        attributes: &[
            A::text("start-at", "Start time (ISO 8601)").required(),
            A::text("end-at", "End time (ISO 8601)").required(),
            A::text("dispatch-instructions", "Dispatch instructions"),
            A::integer("expected-material-transaction-count", "Expected material transaction count"),
            A::decimal("expected-material-transaction-tons", "Expected tons"),
            A::boolean("is-flexible", "Flexible start"),
            A::text("start-at-min", "Earliest flexible start (ISO 8601)"),
            A::text("start-at-max", "Latest flexible start (ISO 8601)"),
            A::text("cancelled-at", "Cancellation time (ISO 8601)"),
            A::boolean("suppress-automated-shift-feedback", "Suppress automated shift feedback"),
        ],
        relationships: &[
            R::to_one("job", "jobs", "Job ID").required(),
            R::to_one("trailer-classification", "trailer-classifications", "Trailer classification ID"),
            R::to_one("start-location", "job-production-plan-locations", "Start location ID"),
        ],
        ..ResourceSpec::DEFAULT
    },
    ResourceSpec {
        name: "objectives",
        singular: "objective",
        about: "Organization objectives",
        category: Category::ProjectsJobs,
        verbs: Verb::ALL,
        fields: &["name", "status", "start-on", "end-on", "is-template", "owner", "organization", "project"],
        include: &["owner", "organization", "project"],
        included_fields: &[
            ("users", "name"),
            ("projects", "name"),
            ("brokers", "company-name"),
            ("customers", "company-name"),
            ("truckers", "company-name"),
        ],
        filters: &[
            F::text("status", "filter[status]", "Filter by status"),
            F::text("owner", "filter[owner]", "Filter by owner user ID"),
            F::text("organization", "filter[organization]", "Filter by organization (Type|ID)"),
            F::text("project", "filter[project]", "Filter by project ID"),
            F::switch("templates", "filter[is-template]", "Only templates"),
        ],
        columns: &[
            C::id(),
            C::attr("name", "NAME", "name").width(35),
            C::attr("status", "STATUS", "status"),
            C::attr("start_on", "START", "start-on"),
            C::attr("end_on", "END", "end-on"),
            C::related("owner", "OWNER", "owner", NAME).width(20),
            C::related("organization", "ORGANIZATION", "organization", ORG).width(25),
        ],
        label: NAME,
        attributes: &[
            A::text("name", "Objective name").required(),
            A::text("description", "Description"),
            A::text("status", "Status"),
            A::text("start-on", "Start date (YYYY-MM-DD)"),
            A::text("end-on", "End date (YYYY-MM-DD)"),
            A::text("commitment", "Commitment level"),
            A::boolean("is-template", "Save as template"),
            A::text("template-scope", "Template scope"),
        ],
        relationships: &[
            R::to_one("owner", "users", "Owner user ID"),
            R::to_one("project", "projects", "Project ID"),
            R::to_one("parent", "objectives", "Parent objective ID"),
        ],
        ..ResourceSpec::DEFAULT
    },
    // Fleet & transport
    ResourceSpec {
        name: "tractors",
        singular: "tractor",
        about: "Tractors (power units)",
        category: Category::Fleet,
        verbs: Verb::ALL,
        fields: &["number", "status", "vin", "model-year", "trucker"],
        include: &["trucker"],
        included_fields: &[("truckers", "company-name")],
        default_sort: Some("number"),
        filters: &[
            F::text("trucker", "filter[trucker]", "Filter by trucker ID"),
            F::text("broker", "filter[broker]", "Filter by broker ID"),
            F::text("number", "filter[number]", "Filter by tractor number"),
            F::text("status", "filter[status]", "Filter by status"),
            F::text("q", "filter[q]", "Full-text search"),
        ],
        columns: &[
            C::id(),
            C::attr("number", "NUMBER", "number"),
            C::attr("status", "STATUS", "status"),
            C::attr("vin", "VIN", "vin"),
            C::attr("model_year", "YEAR", "model-year"),
            C::related("trucker", "TRUCKER", "trucker", COMPANY).width(30),
        ],
        label: &["number"],
        attributes: &[
            A::text("number", "Tractor number").required(),
            A::text("status", "Status"),
            A::text("vin", "Vehicle identification number"),
            A::text("plate-number", "License plate number"),
            A::text("plate-jurisdiction", "License plate state/province"),
            A::text("manufacturer-name", "Manufacturer"),
            A::text("model-name", "Model"),
            A::integer("model-year", "Model year"),
            A::integer("curb-weight-lbs", "Curb weight in pounds"),
            A::integer("axle-count", "Number of axles"),
            A::boolean("in-service", "In service"),
            A::text("notes", "Notes"),
        ],
        relationships: &[
            R::to_one("trucker", "truckers", "Trucker ID").required(),
            R::to_many("drivers", "users", "Driver user IDs (comma-separated)"),
        ],
        ..ResourceSpec::DEFAULT
    },
    ResourceSpec {
        name: "trailers",
        singular: "trailer",
        about: "Trailers",
        category: Category::Fleet,
        verbs: Verb::ALL,
        fields: &["number", "status", "capacity-lbs", "trucker", "trailer-classification"],
        include: &["trucker", "trailer-classification"],
        included_fields: &[("truckers", "company-name"), ("trailer-classifications", "name")],
        default_sort: Some("number"),
        filters: &[
            F::text("trucker", "filter[trucker]", "Filter by trucker ID"),
            F::text("broker", "filter[broker]", "Filter by broker ID"),
            F::text("trailer-classification", "filter[trailer-classification]", "Filter by trailer classification ID"),
            F::text("number", "filter[number]", "Filter by trailer number"),
            F::text("status", "filter[status]", "Filter by status"),
            F::text("q", "filter[q]", "Full-text search"),
        ],
        columns: &[
            C::id(),
            C::attr("number", "NUMBER", "number"),
            C::attr("status", "STATUS", "status"),
            C::related("classification", "CLASS", "trailer-classification", NAME).width(25),
            C::attr("capacity_lbs", "CAPACITY LBS", "capacity-lbs"),
            C::related("trucker", "TRUCKER", "trucker", COMPANY).width(30),
        ],
        label: &["number"],
        attributes: &[
            A::text("number", "Trailer number").required(),
            A::text("status", "Status"),
            A::text("vin", "Vehicle identification number"),
            A::text("plate-number", "License plate number"),
            A::text("manufacturer-name", "Manufacturer"),
            A::integer("model-year", "Model year"),
            A::integer("capacity-lbs", "Capacity in pounds"),
            A::decimal("capacity-cubic-yards", "Capacity in cubic yards"),
            A::integer("empty-weight-lbs", "Empty weight in pounds"),
            A::boolean("in-service", "In service"),
            A::text("notes", "Notes"),
        ],
        relationships: &[
            R::to_one("trucker", "truckers", "Trucker ID").required(),
            R::to_one("trailer-classification", "trailer-classifications", "Trailer classification ID").required(),
        ],
        ..ResourceSpec::DEFAULT
    },
    ResourceSpec {
        name: "trailer-classifications",
        singular: "trailer classification",
        about: "Trailer classifications",
        category: Category::Fleet,
        fields: &["name", "abbreviation", "capacity-lbs"],
        default_sort: Some("name"),
        filters: &[F::text("name", "filter[name]", "Filter by name")],
        columns: &[
            C::id(),
            C::attr("name", "NAME", "name").width(35),
            C::attr("abbreviation", "ABBR", "abbreviation"),
            C::attr("capacity_lbs", "CAPACITY LBS", "capacity-lbs"),
        ],
        label: NAME,
        ..ResourceSpec::DEFAULT
    },
    ResourceSpec {
        name: "equipment",
        singular: "equipment",
        about: "Equipment",
        category: Category::Fleet,
        verbs: Verb::ALL,
        fields: &["nickname", "serial-number", "is-active", "equipment-classification", "organization"],
        include: &["equipment-classification", "organization"],
        included_fields: &[
            ("equipment-classifications", "name"),
            ("brokers", "company-name"),
            ("customers", "company-name"),
            ("truckers", "company-name"),
        ],
        filters: &[
            F::text("organization", "filter[organization]", "Filter by organization (Type|ID)"),
            F::text("equipment-classification", "filter[equipment-classification]", "Filter by classification ID"),
            F::text("is-active", "filter[is-active]", "Filter by active status (true/false)"),
            F::text("q", "filter[q]", "Full-text search"),
        ],
        columns: &[
            C::id(),
            C::attr("nickname", "NICKNAME", "nickname").width(30),
            C::attr("serial_number", "SERIAL", "serial-number"),
            C::related("classification", "CLASS", "equipment-classification", NAME).width(25),
            C::related("organization", "ORGANIZATION", "organization", ORG).width(25),
            C::attr("is_active", "ACTIVE", "is-active"),
        ],
        label: &["nickname"],
        attributes: &[
            A::text("nickname", "Nickname").required(),
            A::text("serial-number", "Serial number"),
            A::text("description", "Description"),
            A::text("manufacturer-name", "Manufacturer"),
            A::text("model-description", "Model description"),
            A::integer("year", "Model year"),
            A::integer("weight-lbs", "Weight in pounds"),
            A::text("group-name", "Group name"),
            A::text("color-hex", "Display color (hex)"),
            A::boolean("is-available", "Available for assignment"),
            A::boolean("is-off-road", "Off-road equipment"),
            A::text("mobilization-method", "Mobilization method"),
        ],
        relationships: &[
            R::to_one("equipment-classification", "equipment-classifications", "Equipment classification ID").required(),
            R::to_one("tractor", "tractors", "Linked tractor ID"),
            R::to_one("trailer", "trailers", "Linked trailer ID"),
        ],
        ..ResourceSpec::DEFAULT
    },
    // Materials
    ResourceSpec {
        name: "material-types",
        singular: "material type",
        about: "Material types",
        category: Category::Materials,
        verbs: LIST_SHOW_CREATE_UPDATE,
        fields: &["name", "display-name", "is-archived", "material-supplier"],
        include: &["material-supplier"],
        included_fields: &[("material-suppliers", "name")],
        default_sort: Some("name"),
        filters: &[
            F::text("name", "filter[name]", "Filter by name"),
            F::text("material-supplier", "filter[material-supplier]", "Filter by material supplier ID"),
            F::text("material-sites", "filter[material-sites]", "Filter by material site IDs"),
            F::text("is-archived", "filter[is-archived]", "Filter by archived status (true/false)"),
            F::text("hierarchy-like", "filter[hierarchy-like]", "Filter by partial hierarchy name"),
            F::text("q", "filter[q]", "Full-text search"),
        ],
        columns: &[
            C::id(),
            C::attr("name", "NAME", "name").width(30),
            C::attr("display_name", "DISPLAY NAME", "display-name").width(35),
            C::related("material_supplier", "SUPPLIER", "material-supplier", NAME).width(25),
            C::attr("is_archived", "ARCHIVED", "is-archived"),
        ],
        label: &["display-name", "name"],
        attributes: &[
            A::text("name", "Material type name").required(),
            A::text("explicit-display-name", "Display name override"),
            A::text("aggregate-type", "Aggregate type"),
            A::decimal("lbs-per-cubic-yard", "Density in pounds per cubic yard"),
            A::boolean("is-archived", "Archive the material type"),
            A::text("mix-design-description", "Mix design description"),
        ],
        relationships: &[
            R::to_one("material-supplier", "material-suppliers", "Material supplier ID"),
            R::to_one("parent-material-type", "material-types", "Parent material type ID"),
        ],
        ..ResourceSpec::DEFAULT
    },
    ResourceSpec {
        name: "material-sites",
        singular: "material site",
        about: "Material sites (plants, quarries)",
        category: Category::Materials,
        verbs: LIST_SHOW_CREATE_UPDATE,
        fields: &["name", "is-active", "address", "material-supplier"],
        include: &["material-supplier"],
        included_fields: &[("material-suppliers", "name")],
        default_sort: Some("name"),
        filters: &[
            F::text("name", "filter[name]", "Filter by name"),
            F::text("material-supplier", "filter[material-supplier]", "Filter by material supplier ID"),
            F::text("broker", "filter[broker]", "Filter by broker ID"),
            F::text("is-active", "filter[is-active]", "Filter by active status (true/false)"),
            F::text("q", "filter[q]", "Full-text search"),
        ],
        columns: &[
            C::id(),
            C::attr("name", "NAME", "name").width(35),
            C::related("material_supplier", "SUPPLIER", "material-supplier", NAME).width(25),
            C::attr("address", "ADDRESS", "address").width(40),
            C::attr("is_active", "ACTIVE", "is-active"),
        ],
        label: NAME,
        attributes: &[
            A::text("name", "Site name").required(),
            A::text("address", "Street address"),
            A::decimal("address-latitude", "Latitude"),
            A::decimal("address-longitude", "Longitude"),
            A::text("phone-number", "Phone number"),
            A::text("notes", "Notes"),
            A::boolean("is-active", "Whether the site is active"),
            A::text("operating-hours", "Operating hours"),
        ],
        relationships: &[
            R::to_one("material-supplier", "material-suppliers", "Material supplier ID").required(),
        ],
        ..ResourceSpec::DEFAULT
    },
    ResourceSpec {
        name: "material-transactions",
        singular: "material transaction",
        about: "Material transactions (tickets)",
        category: Category::Materials,
        verbs: &[Verb::List, Verb::Show, Verb::Update],
        fields: &[
            "status",
            "transaction-at",
            "ticket-number",
            "net-weight-lbs",
            "is-voided",
            "material-type",
            "material-supplier",
            "trip",
        ],
        include: &[
            "material-type",
            "material-supplier",
            "trip.origin",
            "trip.destination",
            "trip.tender-job-schedule-shift.accepted-trucker",
        ],
        included_fields: &[
            ("material-types", "name,display-name"),
            ("material-suppliers", "name"),
            ("material-sites", "name"),
            ("job-sites", "name"),
            ("trips", "origin,destination,tender-job-schedule-shift"),
            ("tender-job-schedule-shifts", "accepted-trucker"),
            ("truckers", "company-name"),
        ],
        default_sort: Some("-transaction-at"),
        timestamps: false,
        filters: &[
            F::text("q", "filter[q]", "Full-text search"),
            F::text("ticket-number", "filter[ticket-number]", "Filter by ticket number"),
            F::text("material-type", "filter[material-type]", "Filter by material type ID"),
            F::text("material-site", "filter[material-site]", "Filter by material site ID"),
            F::text("material-supplier", "filter[material-supplier]", "Filter by material supplier ID"),
            F::text("job-production-plan", "filter[job-production-plan]", "Filter by job production plan ID"),
            F::text("trucker", "filter[trucker]", "Filter by trucker ID"),
            F::text("date", "filter[date]", "Filter by transaction date (YYYY-MM-DD)"),
            F::text("date-min", "filter[date-min]", "Transactions on or after (YYYY-MM-DD)"),
            F::text("date-max", "filter[date-max]", "Transactions on or before (YYYY-MM-DD)"),
            F::text("status", "filter[status]", "Filter by status"),
            F::switch("voided", "filter[is-voided]", "Only voided transactions"),
        ],
        columns: &[
            C::id(),
            C::attr("transaction_at", "AT", "transaction-at"),
            C::attr("ticket_number", "TICKET", "ticket-number"),
            C::related("material_type", "MATERIAL", "material-type", &["display-name", "name"]).width(25),
            C::attr("net_weight_lbs", "NET LBS", "net-weight-lbs"),
            C::related("origin", "ORIGIN", "trip.origin", NAME).width(20),
            C::related("destination", "DESTINATION", "trip.destination", NAME).width(20),
            C::related("trucker", "TRUCKER", "trip.tender-job-schedule-shift.accepted-trucker", COMPANY).width(20),
            C::attr("status", "STATUS", "status"),
        ],
        label: &["ticket-number"],
        attributes: &[
            A::text("status", "Status"),
            A::text("ticket-number", "Ticket number"),
            A::text("transaction-at", "Transaction time (ISO 8601)"),
            A::integer("net-weight-lbs", "Net weight in pounds"),
            A::integer("gross-weight-lbs", "Gross weight in pounds"),
            A::integer("tare-weight-lbs", "Tare weight in pounds"),
            A::boolean("is-voided", "Void the transaction"),
            A::text("notes", "Notes"),
        ],
        relationships: &[
            R::to_one("material-type", "material-types", "Material type ID"),
            R::to_one("material-site", "material-sites", "Material site ID"),
            R::to_one("job-production-plan", "job-production-plans", "Job production plan ID"),
        ],
        ..ResourceSpec::DEFAULT
    },
    ResourceSpec {
        name: "material-purchase-orders",
        singular: "material purchase order",
        about: "Material purchase orders",
        category: Category::Materials,
        verbs: Verb::ALL,
        fields: &[
            "status",
            "quantity",
            "external-purchase-order-id",
            "transaction-at-min",
            "transaction-at-max",
            "material-supplier",
            "customer",
            "material-type",
            "unit-of-measure",
        ],
        include: &["material-supplier", "customer", "material-type", "unit-of-measure"],
        included_fields: &[
            ("material-suppliers", "name"),
            ("customers", "company-name"),
            ("material-types", "name,display-name"),
            ("unit-of-measures", "name,abbreviation"),
        ],
        filters: &[
            F::text("status", "filter[status]", "Filter by status"),
            F::text("broker", "filter[broker]", "Filter by broker ID"),
            F::text("material-supplier", "filter[material-supplier]", "Filter by material supplier ID"),
            F::text("customer", "filter[customer]", "Filter by customer ID"),
            F::text("material-site", "filter[material-site]", "Filter by material site ID"),
            F::text("material-type", "filter[material-type]", "Filter by material type ID"),
            F::text("external-purchase-order-id", "filter[external-purchase-order-id]", "Filter by external PO number"),
        ],
        columns: &[
            C::id(),
            C::attr("status", "STATUS", "status"),
            C::attr("external_purchase_order_id", "PO #", "external-purchase-order-id"),
            C::related("material_supplier", "SUPPLIER", "material-supplier", NAME).width(20),
            C::related("customer", "CUSTOMER", "customer", COMPANY).width(20),
            C::related("material_type", "MATERIAL", "material-type", &["display-name", "name"]).width(20),
            C::attr("quantity", "QTY", "quantity"),
            C::related("unit_of_measure", "UOM", "unit-of-measure", &["abbreviation", "name"]),
        ],
        label: &["external-purchase-order-id"],
        attributes: &[
            A::text("status", "Status (editing/approved/closed)"),
            A::decimal("quantity", "Ordered quantity"),
            A::text("external-purchase-order-id", "External purchase order number"),
            A::text("external-sales-order-id", "External sales order number"),
            A::text("transaction-at-min", "Valid from (ISO 8601)"),
            A::text("transaction-at-max", "Valid until (ISO 8601)"),
            A::boolean("is-managing-redemption", "Track redemption against this order"),
        ],
        relationships: &[
            R::to_one("material-supplier", "material-suppliers", "Material supplier ID").required(),
            R::to_one("customer", "customers", "Customer ID"),
            R::to_one("material-site", "material-sites", "Material site ID"),
            R::to_one("material-type", "material-types", "Material type ID"),
            R::to_one("job-site", "job-sites", "Job site ID"),
            R::to_one("unit-of-measure", "unit-of-measures", "Unit of measure ID"),
        ],
        ..ResourceSpec::DEFAULT
    },
    ResourceSpec {
        name: "unit-of-measures",
        singular: "unit of measure",
        about: "Units of measure",
        category: Category::Materials,
        fields: &["name", "abbreviation", "measurement-type"],
        default_sort: Some("name"),
        timestamps: false,
        filters: &[F::text("name", "filter[name]", "Filter by name")],
        columns: &[
            C::id(),
            C::attr("name", "NAME", "name").width(30),
            C::attr("abbreviation", "ABBR", "abbreviation"),
            C::attr("measurement_type", "TYPE", "measurement-type"),
        ],
        label: &["abbreviation", "name"],
        ..ResourceSpec::DEFAULT
    },
    // Labor & time
    ResourceSpec {
        name: "time-cards",
        singular: "time card",
        about: "Driver time cards",
        category: Category::LaborTime,
        verbs: Verb::ALL,
        fields: &[
            "status",
            "ticket-number",
            "start-at",
            "end-at",
            "total-hours",
            "approval-count",
            "driver",
            "trucker",
            "job-production-plan",
        ],
        include: &["driver", "trucker", "job-production-plan"],
        included_fields: &[
            ("users", "name"),
            ("truckers", "company-name"),
            ("job-production-plans", "job-number,job-name"),
        ],
        default_sort: Some("-start-at"),
        filters: &[
            F::text("status", "filter[status]", "Filter by status"),
            F::text("broker", "filter[broker]", "Filter by broker ID"),
            F::text("customer", "filter[customer]", "Filter by customer ID"),
            F::text("trucker", "filter[trucker]", "Filter by trucker ID"),
            F::text("driver", "filter[driver]", "Filter by driver user ID"),
            F::text("trailer", "filter[trailer]", "Filter by trailer ID"),
            F::text("job-number", "filter[job-number]", "Filter by job number"),
            F::text("ticket-number", "filter[ticket-number]", "Filter by ticket number"),
            F::text("invoice", "filter[invoice]", "Filter by invoice ID"),
            F::text("shift-date", "filter[shift-date]", "Filter by shift date (YYYY-MM-DD)"),
            F::text("shift-date-min", "filter[shift-date-min]", "Shift date on or after (YYYY-MM-DD)"),
            F::text("shift-date-max", "filter[shift-date-max]", "Shift date on or before (YYYY-MM-DD)"),
            F::text("start-at-min", "filter[start-at-min]", "Starts on or after (ISO 8601)"),
            F::text("start-at-max", "filter[start-at-max]", "Starts on or before (ISO 8601)"),
            F::switch("audited", "filter[is-audited]", "Only audited time cards"),
            F::switch("not-trucker-invoiced", "filter[not-trucker-invoiced]", "Only time cards not yet on a trucker invoice"),
        ],
        columns: &[
            C::id(),
            C::attr("status", "STATUS", "status"),
            C::attr("ticket_number", "TICKET", "ticket-number"),
            C::attr("start_at", "START", "start-at"),
            C::attr("total_hours", "HOURS", "total-hours"),
            C::related("driver", "DRIVER", "driver", NAME).width(20),
            C::related("trucker", "TRUCKER", "trucker", COMPANY).width(20),
            C::related("job_production_plan", "JOB", "job-production-plan", &["job-number", "job-name"]).width(15),
        ],
        label: &["ticket-number"],
        attributes: &[
            A::text("ticket-number", "Ticket number"),
            A::text("start-at", "Start time (ISO 8601)"),
            A::text("end-at", "End time (ISO 8601)"),
            A::integer("down-minutes", "Down time in minutes"),
            A::decimal("explicit-quantity", "Explicit quantity"),
            A::boolean("skip-quantity-validation", "Skip quantity validation"),
            A::boolean("generate-broker-invoice", "Include on broker invoice"),
            A::boolean("generate-trucker-invoice", "Include on trucker invoice"),
            A::text("notes", "Notes"),
        ],
        relationships: &[
            R::to_one("tender-job-schedule-shift", "tender-job-schedule-shifts", "Tender job schedule shift ID").required(),
            R::to_one("trailer", "trailers", "Trailer ID"),
            R::to_one("tractor", "tractors", "Tractor ID"),
        ],
        ..ResourceSpec::DEFAULT
    },
    ResourceSpec {
        name: "time-sheets",
        singular: "time sheet",
        about: "Labor time sheets",
        category: Category::LaborTime,
        fields: &["status", "start-at", "end-at", "duration-minutes", "driver"],
        include: &["driver"],
        included_fields: &[("users", "name")],
        default_sort: Some("-start-at"),
        filters: &[
            F::text("status", "filter[status]", "Filter by status"),
            F::text("driver", "filter[driver]", "Filter by driver user ID"),
            F::text("broker", "filter[broker]", "Filter by broker ID"),
            F::text("start-at-min", "filter[start-at-min]", "Starts on or after (ISO 8601)"),
            F::text("start-at-max", "filter[start-at-max]", "Starts on or before (ISO 8601)"),
        ],
        columns: &[
            C::id(),
            C::attr("status", "STATUS", "status"),
            C::attr("start_at", "START", "start-at"),
            C::attr("end_at", "END", "end-at"),
            C::attr("duration_minutes", "MINUTES", "duration-minutes"),
            C::related("driver", "DRIVER", "driver", NAME).width(25),
        ],
        label: &["start-at"],
        ..ResourceSpec::DEFAULT
    },
    ResourceSpec {
        name: "labor-requirements",
        singular: "labor requirement",
        about: "Labor requirements on job production plans",
        category: Category::LaborTime,
        verbs: Verb::ALL,
        fields: &["start-at", "end-at", "note", "job-production-plan", "laborer"],
        include: &["job-production-plan", "laborer.user"],
        included_fields: &[
            ("job-production-plans", "job-number,job-name"),
            ("laborers", "user"),
            ("users", "name"),
        ],
        default_sort: Some("start-at"),
        filters: &[
            F::text("job-production-plan", "filter[job-production-plan]", "Filter by job production plan ID"),
            F::text("laborer", "filter[laborer]", "Filter by laborer ID"),
            F::text("start-at-min", "filter[start-at-min]", "Starts on or after (ISO 8601)"),
            F::text("start-at-max", "filter[start-at-max]", "Starts on or before (ISO 8601)"),
        ],
        columns: &[
            C::id(),
            C::attr("start_at", "START", "start-at"),
            C::attr("end_at", "END", "end-at"),
            C::related("job_production_plan", "JOB", "job-production-plan", &["job-number", "job-name"]).width(20),
            C::related("laborer", "LABORER", "laborer.user", NAME).width(25),
            C::attr("note", "NOTE", "note").width(30),
        ],
        label: &["start-at"],
        attributes: &[
            A::text("start-at", "Start time (ISO 8601)"),
            A::text("end-at", "End time (ISO 8601)"),
            A::text("note", "Note"),
            A::text("mobilization-method", "Mobilization method"),
            A::boolean("requires-inbound-movement", "Requires inbound movement"),
            A::boolean("requires-outbound-movement", "Requires outbound movement"),
        ],
        relationships: &[
            R::to_one("job-production-plan", "job-production-plans", "Job production plan ID").required(),
            R::to_one("laborer", "laborers", "Laborer ID"),
            R::to_one("craft-class", "craft-classes", "Craft class ID"),
        ],
        ..ResourceSpec::DEFAULT
    },
    ResourceSpec {
        name: "crew-rates",
        singular: "crew rate",
        about: "Crew rates",
        category: Category::LaborTime,
        verbs: Verb::ALL,
        fields: &["description", "price-per-unit", "start-on", "end-on", "is-active", "broker"],
        include: &["broker"],
        included_fields: &[("brokers", "company-name")],
        filters: &[
            F::text("broker", "filter[broker]", "Filter by broker ID"),
            F::text("is-active", "filter[is-active]", "Filter by active status (true/false)"),
            F::text("craft-class", "filter[craft-class]", "Filter by craft class ID"),
        ],
        columns: &[
            C::id(),
            C::attr("description", "DESCRIPTION", "description").width(35),
            C::attr("price_per_unit", "PRICE", "price-per-unit"),
            C::attr("start_on", "START", "start-on"),
            C::attr("end_on", "END", "end-on"),
            C::attr("is_active", "ACTIVE", "is-active"),
            C::related("broker", "BROKER", "broker", COMPANY).width(20),
        ],
        label: &["description"],
        attributes: &[
            A::text("description", "Description"),
            A::decimal("price-per-unit", "Price per unit").required(),
            A::text("start-on", "Effective from (YYYY-MM-DD)"),
            A::text("end-on", "Effective until (YYYY-MM-DD)"),
            A::boolean("is-active", "Whether the rate is active"),
        ],
        relationships: &[
            R::to_one("broker", "brokers", "Broker ID").required(),
            R::to_one("craft-class", "craft-classes", "Craft class ID"),
        ],
        ..ResourceSpec::DEFAULT
    },
    // Financial
    ResourceSpec {
        name: "invoices",
        singular: "invoice",
        about: "Invoices",
        category: Category::Financial,
        fields: &["invoice-date", "due-on", "status", "total-amount", "currency-code", "buyer", "seller"],
        include: &["buyer", "seller"],
        included_fields: &[
            ("brokers", "company-name"),
            ("customers", "company-name"),
            ("truckers", "company-name"),
        ],
        default_sort: Some("-invoice-date"),
        filters: &[
            F::text("status", "filter[status]", "Filter by status"),
            F::text("buyer", "filter[buyer]", "Filter by buyer (Type|ID)"),
            F::text("seller", "filter[seller]", "Filter by seller (Type|ID)"),
            F::text("invoice-date-min", "filter[invoice-date-min]", "Invoiced on or after (YYYY-MM-DD)"),
            F::text("invoice-date-max", "filter[invoice-date-max]", "Invoiced on or before (YYYY-MM-DD)"),
        ],
        columns: &[
            C::id(),
            C::attr("invoice_date", "DATE", "invoice-date"),
            C::attr("due_on", "DUE", "due-on"),
            C::attr("status", "STATUS", "status"),
            C::attr("total_amount", "TOTAL", "total-amount"),
            C::attr("currency_code", "CUR", "currency-code"),
            C::related("buyer", "BUYER", "buyer", COMPANY).width(25),
            C::related("seller", "SELLER", "seller", COMPANY).width(25),
        ],
        label: &["invoice-date"],
        ..ResourceSpec::DEFAULT
    },
    ResourceSpec {
        name: "profit-improvements",
        singular: "profit improvement",
        about: "Profit improvement initiatives",
        category: Category::Financial,
        verbs: Verb::ALL,
        fields: &["title", "status", "amount-estimated", "amount-validated", "organization", "owned-by"],
        include: &["organization", "owned-by"],
        included_fields: &[
            ("users", "name"),
            ("brokers", "company-name"),
            ("customers", "company-name"),
            ("truckers", "company-name"),
        ],
        filters: &[
            F::text("status", "filter[status]", "Filter by status"),
            F::text("organization", "filter[organization]", "Filter by organization (Type|ID)"),
            F::text("owned-by", "filter[owned-by]", "Filter by owner user ID"),
        ],
        columns: &[
            C::id(),
            C::attr("title", "TITLE", "title").width(35),
            C::attr("status", "STATUS", "status"),
            C::attr("amount_estimated", "ESTIMATED", "amount-estimated"),
            C::attr("amount_validated", "VALIDATED", "amount-validated"),
            C::related("organization", "ORGANIZATION", "organization", ORG).width(25),
            C::related("owned_by", "OWNER", "owned-by", NAME).width(20),
        ],
        label: &["title"],
        attributes: &[
            A::text("title", "Title").required(),
            A::text("description", "Description"),
            A::text("status", "Status"),
            A::decimal("amount-estimated", "Estimated amount"),
            A::decimal("amount-validated", "Validated amount"),
            A::text("impact-frequency-estimated", "Estimated impact frequency"),
            A::text("impact-start-on-estimated", "Estimated impact start (YYYY-MM-DD)"),
            A::text("impact-end-on-estimated", "Estimated impact end (YYYY-MM-DD)"),
            A::decimal("gain-share-fee-percentage", "Gain share fee percentage"),
        ],
        relationships: &[
            R::to_one("profit-improvement-category", "profit-improvement-categories", "Category ID").required(),
            R::to_one("owned-by", "users", "Owner user ID"),
            R::to_one("validated-by", "users", "Validator user ID"),
        ],
        ..ResourceSpec::DEFAULT
    },
    // Safety
    ResourceSpec {
        name: "production-incidents",
        singular: "production incident",
        about: "Production incidents",
        category: Category::Safety,
        verbs: Verb::ALL,
        fields: &["status", "kind", "severity", "start-at", "net-impact-minutes", "net-impact-dollars", "is-down-time", "job-production-plan"],
        include: &["job-production-plan"],
        included_fields: &[("job-production-plans", "job-number,job-name")],
        default_sort: Some("-start-at"),
        filters: &[
            F::text("status", "filter[status]", "Filter by status"),
            F::text("kind", "filter[kind]", "Filter by kind"),
            F::text("severity", "filter[severity]", "Filter by severity"),
            F::text("job-production-plan", "filter[job-production-plan]", "Filter by job production plan ID"),
            F::text("broker", "filter[broker]", "Filter by broker ID"),
            F::switch("down-time", "filter[is-down-time]", "Only incidents that caused down time"),
        ],
        columns: &[
            C::id(),
            C::attr("start_at", "START", "start-at"),
            C::attr("status", "STATUS", "status"),
            C::attr("kind", "KIND", "kind"),
            C::attr("severity", "SEVERITY", "severity"),
            C::attr("net_impact_minutes", "MINUTES", "net-impact-minutes"),
            C::attr("net_impact_dollars", "DOLLARS", "net-impact-dollars"),
            C::related("job_production_plan", "JOB", "job-production-plan", &["job-number", "job-name"]).width(20),
        ],
        label: &["headline", "kind"],
        attributes: &[
            A::text("start-at", "Start time (ISO 8601)").required(),
            A::text("end-at", "End time (ISO 8601)"),
            A::text("status", "Status").required(),
            A::text("kind", "Kind"),
            A::text("severity", "Severity"),
            A::text("headline", "Headline"),
            A::text("description", "Description"),
            A::list("natures", "Natures (comma-separated)"),
            A::boolean("is-down-time", "Caused down time"),
            A::boolean("did-stop-work", "Stopped work"),
            A::integer("net-impact-minutes", "Net impact in minutes"),
            A::decimal("net-impact-dollars", "Net impact in dollars"),
        ],
        relationships: &[
            R::to_one("job-production-plan", "job-production-plans", "Job production plan ID"),
            R::to_one("tender-job-schedule-shift", "tender-job-schedule-shifts", "Tender job schedule shift ID"),
            R::to_one("equipment", "equipment", "Equipment ID"),
            R::to_one("assignee", "users", "Assignee user ID"),
        ],
        ..ResourceSpec::DEFAULT
    },
    ResourceSpec {
        name: "safety-incidents",
        singular: "safety incident",
        about: "Safety incidents",
        category: Category::Safety,
        verbs: LIST_SHOW_CREATE_UPDATE,
        fields: &["status", "kind", "severity", "start-at", "headline", "job-production-plan"],
        include: &["job-production-plan"],
        included_fields: &[("job-production-plans", "job-number,job-name")],
        default_sort: Some("-start-at"),
        filters: &[
            F::text("status", "filter[status]", "Filter by status"),
            F::text("kind", "filter[kind]", "Filter by kind"),
            F::text("severity", "filter[severity]", "Filter by severity"),
            F::text("broker", "filter[broker]", "Filter by broker ID"),
            F::text("job-production-plan", "filter[job-production-plan]", "Filter by job production plan ID"),
        ],
        columns: &[
            C::id(),
            C::attr("start_at", "START", "start-at"),
            C::attr("status", "STATUS", "status"),
            C::attr("kind", "KIND", "kind"),
            C::attr("severity", "SEVERITY", "severity"),
            C::attr("headline", "HEADLINE", "headline").width(35),
            C::related("job_production_plan", "JOB", "job-production-plan", &["job-number", "job-name"]).width(20),
        ],
        label: &["headline", "kind"],
        attributes: &[
            A::text("start-at", "Start time (ISO 8601)").required(),
            A::text("end-at", "End time (ISO 8601)"),
            A::text("status", "Status").required(),
            A::text("kind", "Kind"),
            A::text("severity", "Severity"),
            A::text("headline", "Headline"),
            A::text("description", "Description"),
            A::list("natures", "Natures (comma-separated)"),
            A::boolean("did-stop-work", "Stopped work"),
        ],
        relationships: &[
            R::to_one("job-production-plan", "job-production-plans", "Job production plan ID"),
            R::to_one("assignee", "users", "Assignee user ID"),
        ],
        ..ResourceSpec::DEFAULT
    },
    // Content
    ResourceSpec {
        name: "posts",
        singular: "post",
        about: "Feed posts",
        category: Category::Content,
        fields: &["post-type", "published-at", "short-text-content", "status", "creator"],
        include: &["creator"],
        included_fields: &[("users", "name")],
        default_sort: Some("-published-at"),
        filters: &[
            F::text("post-type", "filter[post-type]", "Filter by post type"),
            F::text("creator", "filter[creator]", "Filter by creator user ID"),
            F::text("status", "filter[status]", "Filter by status"),
        ],
        columns: &[
            C::id(),
            C::attr("published_at", "PUBLISHED", "published-at"),
            C::attr("post_type", "TYPE", "post-type"),
            C::related("creator", "CREATOR", "creator", NAME).width(20),
            C::attr("short_text_content", "CONTENT", "short-text-content").width(50),
        ],
        label: &["post-type"],
        ..ResourceSpec::DEFAULT
    },
    ResourceSpec {
        name: "newsletters",
        singular: "newsletter",
        about: "Newsletters",
        category: Category::Content,
        fields: &["summary", "published-on", "organization"],
        include: &["organization"],
        included_fields: &[("brokers", "company-name")],
        default_sort: Some("-published-on"),
        filters: &[
            F::text("organization", "filter[organization]", "Filter by organization (Type|ID)"),
            F::text("published-on-min", "filter[published-on-min]", "Published on or after (YYYY-MM-DD)"),
            F::text("published-on-max", "filter[published-on-max]", "Published on or before (YYYY-MM-DD)"),
        ],
        columns: &[
            C::id(),
            C::attr("published_on", "PUBLISHED", "published-on"),
            C::related("organization", "ORGANIZATION", "organization", ORG).width(25),
            C::attr("summary", "SUMMARY", "summary").width(60),
        ],
        label: &["published-on"],
        ..ResourceSpec::DEFAULT
    },
];
