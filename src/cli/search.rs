use tabled::Table;

use crate::{
    cli::{
        auth::authenticated_client,
        output::{fail, print_json},
    },
    types::SearchType,
    utils, warning,
};

pub async fn search(
    code: Option<String>,
    query: String,
    types: Vec<SearchType>,
    market: Option<String>,
    limit: Option<u32>,
    offset: Option<u32>,
    json: bool,
) {
    let mut client = authenticated_client(code).await;
    let response = match client
        .search(&query, &types, market.as_deref(), limit, offset)
        .await
    {
        Ok(r) => r,
        Err(e) => fail(e),
    };

    if json {
        print_json(&response);
        return;
    }

    let rows = utils::search_rows(&response, &types);
    if rows.is_empty() {
        warning!("No results for '{}'", query);
        return;
    }
    println!("{}", Table::new(rows));
}
