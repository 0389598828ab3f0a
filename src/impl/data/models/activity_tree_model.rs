use std::collections::BTreeMap;

use serde::{Deserialize as _, Deserializer};
use serde_json::Value;
use tracing::debug;

use crate::entities::{Activity, ActivityMetadata, ActivityTree, Section, SubCategory};

// Activity trees come from the execution API in camelCase JSON. Every key is
// optional: missing keys mean "nothing here", not an error.

/// Ids arrive as numbers or numeric strings (metadata is free-form). Anything
/// else reads as no id.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Malformed items are dropped one by one, keeping the rest of the list.
fn lenient_items<'de, D>(deserializer: D) -> Result<Option<Vec<ActivityModel>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(items) = Option::<Vec<Value>>::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(Some(
        items
            .into_iter()
            .filter_map(|item| match serde_json::from_value(item) {
                Ok(item) => Some(item),
                Err(e) => {
                    debug!(error = %e, "skipping malformed activity");
                    None
                }
            })
            .collect(),
    ))
}

#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ActivityMetadataModel {
    #[serde(deserialize_with = "lenient_id")]
    payable_activity_id: Option<i64>,
    payable_name: Option<String>,
    payable_activity_code: Option<String>,
    payable_activity_name: Option<String>,
}

#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ActivityModel {
    #[serde(deserialize_with = "lenient_id")]
    id: Option<i64>,
    code: Option<String>,
    name: Option<String>,
    is_total_row: Option<bool>,
    is_computed: Option<bool>,
    metadata: Option<ActivityMetadataModel>,
}

#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default)]
pub(crate) struct SubCategoryModel {
    #[serde(deserialize_with = "lenient_items")]
    items: Option<Vec<ActivityModel>>,
}

#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct SectionModel {
    sub_categories: Option<BTreeMap<String, Option<SubCategoryModel>>>,
    #[serde(deserialize_with = "lenient_items")]
    items: Option<Vec<ActivityModel>>,
}

/// Whole tree, keyed by section letter. Built from a raw JSON value so that
/// `null` and unexpected top-level shapes degrade to an empty tree.
#[derive(Debug, Default)]
pub(crate) struct ActivityTreeModel(BTreeMap<String, SectionModel>);

impl From<Value> for ActivityTreeModel {
    fn from(value: Value) -> Self {
        let Value::Object(sections) = value else {
            debug!("activity tree is not an object, treating as empty");
            return Self::default();
        };
        ActivityTreeModel(
            sections
                .into_iter()
                .filter_map(|(key, section)| match serde_json::from_value(section) {
                    Ok(section) => Some((key, section)),
                    Err(e) => {
                        debug!(section = %key, error = %e, "skipping malformed section");
                        None
                    }
                })
                .collect(),
        )
    }
}

impl From<ActivityMetadataModel> for ActivityMetadata {
    fn from(m: ActivityMetadataModel) -> Self {
        ActivityMetadata {
            payable_activity_id: m.payable_activity_id,
            payable_name: m.payable_name,
            payable_activity_code: m.payable_activity_code,
            payable_activity_name: m.payable_activity_name,
        }
    }
}

impl From<ActivityModel> for Activity {
    fn from(m: ActivityModel) -> Self {
        Activity {
            id: m.id,
            code: m.code.unwrap_or_default(),
            name: m.name.unwrap_or_default(),
            is_total_row: m.is_total_row.unwrap_or(false),
            is_computed: m.is_computed.unwrap_or(false),
            metadata: m.metadata.map(Into::into).unwrap_or_default(),
        }
    }
}

fn activities(items: Vec<ActivityModel>) -> Vec<Activity> {
    items.into_iter().map(Into::into).collect()
}

impl From<SectionModel> for Section {
    fn from(m: SectionModel) -> Self {
        Section {
            sub_categories: m.sub_categories.map(|sub_categories| {
                sub_categories
                    .into_iter()
                    .map(|(code, sub)| {
                        let items = activities(sub.and_then(|s| s.items).unwrap_or_default());
                        (code, SubCategory { items })
                    })
                    .collect()
            }),
            items: m.items.map(activities),
        }
    }
}

impl From<ActivityTreeModel> for ActivityTree {
    fn from(m: ActivityTreeModel) -> Self {
        ActivityTree {
            sections: m.0.into_iter().map(|(k, s)| (k, s.into())).collect(),
        }
    }
}
