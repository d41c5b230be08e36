//! `xbe resources`: what this CLI can reach.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::catalog::{Category, Verb, RESOURCES, SUMMARIES};
use crate::error::CliError;
use crate::output::{print_json, render_table};

use super::CommandContext;

/// List known resources and summaries.
#[derive(Debug, Args)]
pub struct ResourcesCommand {
    /// Only this category (e.g. fleet, materials).
    #[arg(long)]
    category: Option<String>,
}

#[derive(Debug, Serialize)]
struct ResourceEntry {
    name: &'static str,
    category: Category,
    description: &'static str,
    verbs: Vec<Verb>,
}

#[derive(Debug, Serialize)]
struct SummaryEntry {
    name: &'static str,
    description: &'static str,
    requires_dates: bool,
}

#[derive(Debug, Serialize)]
struct Listing {
    resources: Vec<ResourceEntry>,
    summaries: Vec<SummaryEntry>,
}

impl ResourcesCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let filter = match self.category.as_deref() {
            Some(slug) => Some(Category::from_slug(slug.trim()).ok_or_else(|| {
                let known: Vec<&str> = Category::ORDER.iter().map(|cat| cat.slug()).collect();
                CliError::validation(format!(
                    "unknown category '{slug}' (expected one of: {})",
                    known.join(", ")
                ))
            })?),
            None => None,
        };
        let listing = listing(filter);

        if ctx.is_json() {
            return print_json(&listing);
        }

        for category in Category::ORDER {
            let rows: Vec<Vec<String>> = listing
                .resources
                .iter()
                .filter(|entry| entry.category == *category)
                .map(|entry| {
                    vec![
                        entry.name.to_string(),
                        verbs_text(&entry.verbs),
                        entry.description.to_string(),
                    ]
                })
                .collect();
            if rows.is_empty() {
                continue;
            }
            println!("{}", category.title().bold());
            println!("{}\n", render_table(&["RESOURCE", "COMMANDS", "DESCRIPTION"], rows));
        }

        if !listing.summaries.is_empty() {
            println!("{}", "Summaries".bold());
            let rows = listing
                .summaries
                .iter()
                .map(|entry| {
                    vec![
                        entry.name.to_string(),
                        if entry.requires_dates { "yes" } else { "" }.to_string(),
                        entry.description.to_string(),
                    ]
                })
                .collect::<Vec<_>>();
            println!("{}", render_table(&["SUMMARY", "DATES", "DESCRIPTION"], rows));
        }
        Ok(())
    }
}

/// Catalog entries, optionally narrowed to one category. Summaries are only
/// listed when no category is given.
fn listing(category: Option<Category>) -> Listing {
    let resources = RESOURCES
        .iter()
        .filter(|spec| category.is_none_or(|category| spec.category == category))
        .map(|spec| ResourceEntry {
            name: spec.name,
            category: spec.category,
            description: spec.about,
            verbs: spec.verbs.to_vec(),
        })
        .collect();
    let summaries = if category.is_some() {
        Vec::new()
    } else {
        SUMMARIES
            .iter()
            .map(|spec| SummaryEntry {
                name: spec.name,
                description: spec.about,
                requires_dates: spec.requires_dates,
            })
            .collect()
    };
    Listing {
        resources,
        summaries,
    }
}

/// `view: list, show; do: create, update`
fn verbs_text(verbs: &[Verb]) -> String {
    let names = |group: &[Verb]| {
        verbs
            .iter()
            .filter(|verb| group.contains(verb))
            .map(|verb| verb.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let read = names(Verb::READ);
    let write = names(Verb::WRITE);
    match (read.is_empty(), write.is_empty()) {
        (false, false) => format!("view: {read}; do: {write}"),
        (false, true) => format!("view: {read}"),
        (true, false) => format!("do: {write}"),
        (true, true) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_filter_narrows_resources() {
        let fleet = listing(Some(Category::Fleet));
        assert!(fleet.resources.iter().any(|entry| entry.name == "tractors"));
        assert!(fleet
            .resources
            .iter()
            .all(|entry| entry.category == Category::Fleet));
        assert!(fleet.summaries.is_empty());

        let all = listing(None);
        assert_eq!(all.resources.len(), RESOURCES.len());
        assert_eq!(all.summaries.len(), SUMMARIES.len());
    }

    #[test]
    fn verbs_are_grouped_by_command() {
        assert_eq!(verbs_text(Verb::ALL), "view: list, show; do: create, update, delete");
        assert_eq!(verbs_text(Verb::READ), "view: list, show");
    }

    #[test]
    fn json_listing_uses_slugs() {
        let value = serde_json::to_value(listing(Some(Category::ProjectsJobs))).unwrap();
        assert_eq!(value["resources"][0]["category"], "projects-jobs");
        assert!(value["resources"][0]["verbs"].as_array().unwrap().contains(&"list".into()));
    }
}
