use crate::cli::{auth::authenticated_client, output::report};

pub async fn album(code: Option<String>, id: String, market: Option<String>) {
    let mut client = authenticated_client(code).await;
    report(client.get_album(&id, market.as_deref()).await);
}

pub async fn album_tracks(
    code: Option<String>,
    id: String,
    limit: Option<u32>,
    offset: Option<u32>,
) {
    let mut client = authenticated_client(code).await;
    report(client.get_album_tracks(&id, limit, offset, None).await);
}

pub async fn artist(code: Option<String>, id: String) {
    let mut client = authenticated_client(code).await;
    report(client.get_artist(&id).await);
}

pub async fn top_tracks(code: Option<String>, id: String, country: String) {
    let mut client = authenticated_client(code).await;
    report(client.artist_top_tracks(&id, &country).await);
}
