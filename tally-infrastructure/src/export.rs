use std::{fs, path::Path};

use fxhash::FxHashMap;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tally_domain::{Group, Member, Transaction};

use crate::error::ImportError;

/// Top-level document of an export file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExportData {
    #[serde(default)]
    pub users: Vec<ExportUser>,
    #[serde(default)]
    pub groups: Vec<ExportGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportGroup {
    pub id: String,
    pub title: String,
    /// Member emails, in display order
    #[serde(default)]
    pub users: Vec<String>,
    #[serde(default)]
    pub transactions: Vec<ExportTransaction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportTransaction {
    pub id: String,
    /// email -> amount, positive for who paid
    pub expenses: IndexMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub fn parse_export(json: &str) -> Result<ExportData, ImportError> {
    Ok(serde_json::from_str(json)?)
}

pub fn read_export(path: impl AsRef<Path>) -> Result<ExportData, ImportError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let data = parse_export(&json)?;
    tracing::debug!(
        path = %path.display(),
        user_count = data.users.len(),
        group_count = data.groups.len(),
        "Export file loaded"
    );
    Ok(data)
}

/// Resolves every exported group into a domain [`Group`].
///
/// Group emails without a user record become members named after their
/// email.
pub fn into_groups(data: ExportData) -> Result<Vec<Group>, ImportError> {
    let names: FxHashMap<&str, &str> = data
        .users
        .iter()
        .map(|user| (user.email.as_str(), user.name.as_str()))
        .collect();

    data.groups
        .iter()
        .map(|group| -> Result<Group, ImportError> {
            let members = group
                .users
                .iter()
                .map(|email| match names.get(email.as_str()) {
                    Some(name) => Member::new(*name, email.as_str()),
                    None => {
                        tracing::warn!(
                            group_id = %group.id,
                            email = %email,
                            "Group member has no user record; using email as name"
                        );
                        Member::new(email.as_str(), email.as_str())
                    }
                })
                .collect();

            let transactions = group
                .transactions
                .iter()
                .map(|transaction| {
                    let converted = Transaction::new(&transaction.id, transaction.expenses.clone());
                    match &transaction.description {
                        Some(description) => converted.with_description(description),
                        None => converted,
                    }
                })
                .collect();

            let built = Group::try_new(&group.id, &group.title, members, transactions).map_err(
                |source| ImportError::Group {
                    id: group.id.clone(),
                    source,
                },
            )?;

            Ok(match &group.currency_code {
                Some(code) => built.with_currency_code(code),
                None => built,
            })
        })
        .collect()
}

impl ExportData {
    /// Builds an export document holding `groups` and their members.
    pub fn from_groups(groups: &[Group]) -> Self {
        let mut users: IndexMap<&str, &str> = IndexMap::new();
        for member in groups.iter().flat_map(Group::members) {
            users
                .entry(member.email.as_str())
                .or_insert(member.name.as_str());
        }

        Self {
            users: users
                .into_iter()
                .map(|(email, name)| ExportUser {
                    name: name.to_string(),
                    email: email.to_string(),
                })
                .collect(),
            groups: groups.iter().map(ExportGroup::from).collect(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, ImportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<&Group> for ExportGroup {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id().to_string(),
            title: group.title().to_string(),
            users: group
                .members()
                .iter()
                .map(|member| member.email.clone())
                .collect(),
            transactions: group
                .transactions()
                .iter()
                .map(|transaction| ExportTransaction {
                    id: transaction.id.clone(),
                    expenses: transaction.expenses.clone(),
                    description: transaction.description.clone(),
                })
                .collect(),
            currency_code: group.currency_code().map(str::to_string),
        }
    }
}
