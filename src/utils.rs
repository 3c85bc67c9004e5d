use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::header::{HeaderValue, InvalidHeaderValue};
use serde_json::Value;

use crate::types::{SearchTableRow, SearchType};

/// `Basic base64(client_id:client_secret)`, the confidential-client header
/// sent to the token endpoint.
pub fn basic_auth_value(
    client_id: &str,
    client_secret: &str,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let encoded = STANDARD.encode(format!("{client_id}:{client_secret}"));
    let mut value = HeaderValue::from_str(&format!("Basic {encoded}"))?;
    value.set_sensitive(true);
    Ok(value)
}

pub fn bearer_auth_value(access_token: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut value = HeaderValue::from_str(&format!("Bearer {access_token}"))?;
    value.set_sensitive(true);
    Ok(value)
}

pub fn parse_search_type(s: &str) -> Result<SearchType, String> {
    match s.trim().to_lowercase().as_str() {
        "album" => Ok(SearchType::Album),
        "artist" => Ok(SearchType::Artist),
        "playlist" => Ok(SearchType::Playlist),
        "track" => Ok(SearchType::Track),
        other => Err(format!(
            "unknown search type '{other}', expected one of: album, artist, playlist, track"
        )),
    }
}

/// Comma-joined `type` parameter, duplicates dropped, order kept.
pub fn join_search_types(types: &[SearchType]) -> String {
    let mut seen: Vec<SearchType> = Vec::with_capacity(types.len());
    for t in types {
        if !seen.contains(t) {
            seen.push(*t);
        }
    }
    seen.iter()
        .map(SearchType::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

/// Flattens the result pages of a search response into table rows.
pub fn search_rows(response: &Value, types: &[SearchType]) -> Vec<SearchTableRow> {
    let mut rows = Vec::new();
    for t in types {
        let Some(items) = response[t.result_key()]["items"].as_array() else {
            continue;
        };
        rows.extend(items.iter().filter(|item| !item.is_null()).map(|item| {
            SearchTableRow {
                kind: t.as_str().to_string(),
                name: item["name"].as_str().unwrap_or_default().to_string(),
                id: item["id"].as_str().unwrap_or_default().to_string(),
            }
        }));
    }
    rows
}
