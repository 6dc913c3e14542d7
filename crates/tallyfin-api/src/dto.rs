//! Wire types for the media server's JSON API.
//!
//! Collection endpoints answer with an envelope of shape
//! `{"Items": [...], "TotalRecordCount": N}`; single-record endpoints answer
//! with a flat object. Field names are PascalCase on the wire, and unknown
//! fields are ignored rather than rejected, so these types stay loose on
//! purpose: only the fields the report engine consumes are modeled.

use serde::{Deserialize, Serialize};

/// Envelope returned by every collection endpoint.
///
/// The server annotates each response with the collection size; the count is
/// taken at face value and never checked against `items.len()`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Collection<T> {
    #[serde(default)]
    pub items: Vec<T>,
    #[serde(default)]
    pub total_record_count: u32,
}

/// One record from an entity collection (`Persons`, `Studios`, `Genres`,
/// `Tags`, `Years`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntitySummary {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// One record from the `Library/MediaFolders` collection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FolderSummary {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Library type hint ("tvshows", "movies", ...), when the server sends one.
    pub collection_type: Option<String>,
}

/// A media node fetched as a folder's direct child.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemSummary {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "Type")]
    pub item_type: Option<String>,
    pub parent_id: Option<String>,
}

/// An `(id, name)` reference inside [`ItemMetadata`] lists.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NameIdPair {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A person credit inside [`ItemMetadata::people`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonRef {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub role: Option<String>,
    #[serde(rename = "Type")]
    pub person_type: Option<String>,
}

/// Extended detail for a single item or entity id.
///
/// This is the join table of the whole engine: correlation decides whether
/// an item belongs to an entity by scanning these reference lists.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemMetadata {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Parent series name, present on episode records.
    pub series_name: Option<String>,
    pub production_year: Option<i32>,
    #[serde(default)]
    pub studios: Vec<NameIdPair>,
    #[serde(default)]
    pub genre_items: Vec<NameIdPair>,
    #[serde(default)]
    pub tag_items: Vec<NameIdPair>,
    #[serde(default)]
    pub people: Vec<PersonRef>,
}

/// An account on the server, as returned by the `Users` endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub policy: UserPolicy,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserPolicy {
    #[serde(default)]
    pub is_administrator: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_envelope_decodes_pascal_case() {
        let page: Collection<EntitySummary> = serde_json::from_str(
            r#"{"Items":[{"Id":"a","Name":"Alpha"}],"TotalRecordCount":1,"StartIndex":0}"#,
        )
        .unwrap();
        assert_eq!(page.total_record_count, 1);
        assert_eq!(page.items[0].id, "a");
        assert_eq!(page.items[0].name, "Alpha");
    }

    #[test]
    fn envelope_fields_default_when_missing() {
        let page: Collection<EntitySummary> = serde_json::from_str("{}").unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_record_count, 0);
    }

    #[test]
    fn item_metadata_reads_reference_lists() {
        let meta: ItemMetadata = serde_json::from_str(
            r#"{
                "Id": "ep1",
                "Name": "Pilot",
                "SeriesName": "Show X",
                "ProductionYear": 2019,
                "Studios": [{"Id": "s1", "Name": "Alpha"}],
                "GenreItems": [{"Id": "g1", "Name": "Drama"}],
                "TagItems": [],
                "People": [{"Id": "p1", "Name": "Jo", "Role": "Director", "Type": "Director"}]
            }"#,
        )
        .unwrap();
        assert_eq!(meta.series_name.as_deref(), Some("Show X"));
        assert_eq!(meta.production_year, Some(2019));
        assert_eq!(meta.studios[0].id, "s1");
        assert_eq!(meta.genre_items[0].name, "Drama");
        assert!(meta.tag_items.is_empty());
        assert_eq!(meta.people[0].person_type.as_deref(), Some("Director"));
    }

    #[test]
    fn metadata_lists_default_to_empty() {
        let meta: ItemMetadata = serde_json::from_str(r#"{"Id":"x","Name":"y"}"#).unwrap();
        assert!(meta.studios.is_empty());
        assert!(meta.people.is_empty());
        assert_eq!(meta.production_year, None);
        assert_eq!(meta.series_name, None);
    }

    #[test]
    fn user_policy_defaults_to_non_admin() {
        let user: User = serde_json::from_str(r#"{"Id":"u1","Name":"guest"}"#).unwrap();
        assert!(!user.policy.is_administrator);

        let admin: User = serde_json::from_str(
            r#"{"Id":"u2","Name":"root","Policy":{"IsAdministrator":true}}"#,
        )
        .unwrap();
        assert!(admin.policy.is_administrator);
    }
}
