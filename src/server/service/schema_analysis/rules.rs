//! Heuristic rule tables used by schema analysis.
//!
//! Every heuristic is an ordered table so the first matching entry decides the outcome.
//! Matching is case-insensitive substring matching on table and column names.

use std::collections::BTreeSet;

use crate::server::model::analysis::{
    ColumnDescriptor, FrameworkGuess, IdentifierColumn, SchemaSummary,
};

/// Keywords in a table name that mark the table as player-related.
pub const TABLE_KEYWORDS: &[&str] = &[
    "user",
    "player",
    "character",
    "job",
    "money",
    "vehicle",
    "property",
    "inventory",
];

/// Keywords in a column name that mark the column as a player identifier.
pub const IDENTIFIER_KEYWORDS: &[&str] = &[
    "identifier",
    "steam",
    "license",
    "discord",
    "player",
    "user",
    "character",
];

/// Which part of a table a classification rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleTarget {
    TableName,
    ColumnName,
}

/// One entry of the player-relation rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationRule {
    pub target: RuleTarget,
    pub keyword: &'static str,
}

impl RelationRule {
    /// Returns a description of the match, if this rule matches the table.
    fn describe_match(&self, table: &str, columns: &[ColumnDescriptor]) -> Option<String> {
        match self.target {
            RuleTarget::TableName => contains(table, self.keyword)
                .then(|| format!("table name contains '{}'", self.keyword)),
            RuleTarget::ColumnName => columns
                .iter()
                .find(|column| contains(&column.name, self.keyword))
                .map(|column| {
                    format!("column '{}' contains '{}'", column.name, self.keyword)
                }),
        }
    }
}

/// The player-relation rule table: table-name keywords first, then column keywords.
pub fn relation_rules() -> impl Iterator<Item = RelationRule> {
    let table_rules = TABLE_KEYWORDS.iter().map(|&keyword| RelationRule {
        target: RuleTarget::TableName,
        keyword,
    });
    let column_rules = IDENTIFIER_KEYWORDS.iter().map(|&keyword| RelationRule {
        target: RuleTarget::ColumnName,
        keyword,
    });

    table_rules.chain(column_rules)
}

/// Classifies a table as player-related.
///
/// # Returns
/// - `Some(description)` - Description of the first rule that matched
/// - `None` - No rule matched; the table is not player-related
pub fn classify_table(table: &str, columns: &[ColumnDescriptor]) -> Option<String> {
    relation_rules().find_map(|rule| rule.describe_match(table, columns))
}

/// Ordered framework rules; the first predicate that holds decides the guess.
const FRAMEWORK_RULES: &[(FrameworkGuess, fn(&BTreeSet<String>) -> bool)] = &[
    (FrameworkGuess::QbCore, is_qbcore),
    (FrameworkGuess::Esx, is_esx),
    (FrameworkGuess::QbCoreLike, has_players_table),
];

fn is_qbcore(tables: &BTreeSet<String>) -> bool {
    tables
        .iter()
        .any(|t| t.starts_with("qb_") || t.starts_with("qb-"))
        || (tables.contains("players") && tables.contains("player_vehicles"))
}

fn is_esx(tables: &BTreeSet<String>) -> bool {
    tables.iter().any(|t| t.starts_with("esx_"))
        || (tables.contains("users") && tables.contains("owned_vehicles"))
}

fn has_players_table(tables: &BTreeSet<String>) -> bool {
    tables.contains("players")
}

/// Guesses the framework from the full set of table names.
///
/// The guess depends only on the set, never on discovery order.
pub fn guess_framework<'a>(tables: impl IntoIterator<Item = &'a str>) -> FrameworkGuess {
    let tables: BTreeSet<String> = tables.into_iter().map(str::to_lowercase).collect();

    FRAMEWORK_RULES
        .iter()
        .find(|(_, matches)| matches(&tables))
        .map(|(guess, _)| *guess)
        .unwrap_or(FrameworkGuess::Unknown)
}

/// Summary flags and the table-name keywords that raise each of them.
const SUMMARY_FLAGS: &[(SummaryFlag, &[&str])] = &[
    (SummaryFlag::Users, &["user", "player"]),
    (SummaryFlag::Jobs, &["job"]),
    (SummaryFlag::Vehicles, &["vehicle"]),
    (SummaryFlag::Properties, &["propert", "house", "apartment"]),
    (SummaryFlag::Inventory, &["inventor", "stash"]),
    (SummaryFlag::Money, &["money", "bank", "account"]),
];

#[derive(Debug, Clone, Copy)]
enum SummaryFlag {
    Users,
    Jobs,
    Vehicles,
    Properties,
    Inventory,
    Money,
}

impl SummaryFlag {
    fn set(self, summary: &mut SchemaSummary) {
        match self {
            Self::Users => summary.has_users = true,
            Self::Jobs => summary.has_jobs = true,
            Self::Vehicles => summary.has_vehicles = true,
            Self::Properties => summary.has_properties = true,
            Self::Inventory => summary.has_inventory = true,
            Self::Money => summary.has_money = true,
        }
    }
}

/// Builds the schema summary from each table's name and declared columns.
pub fn summarize<'a>(
    tables: impl IntoIterator<Item = (&'a str, &'a [ColumnDescriptor])>,
) -> SchemaSummary {
    let mut summary = SchemaSummary::default();

    for (table, columns) in tables {
        for (flag, keywords) in SUMMARY_FLAGS {
            if keywords.iter().any(|keyword| contains(table, keyword)) {
                flag.set(&mut summary);
            }
        }

        summary.identifier_columns.extend(
            columns
                .iter()
                .filter(|column| is_identifier_column(&column.name))
                .map(|column| IdentifierColumn {
                    table: table.to_string(),
                    column: column.name.clone(),
                    declared_type: column.declared_type.clone(),
                }),
        );
    }

    summary
}

fn is_identifier_column(name: &str) -> bool {
    IDENTIFIER_KEYWORDS
        .iter()
        .any(|keyword| contains(name, keyword))
}

fn contains(name: &str, keyword: &str) -> bool {
    name.to_lowercase().contains(keyword)
}
