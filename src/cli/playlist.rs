use crate::{
    cli::{
        auth::authenticated_client,
        output::{fail, report},
    },
    info,
    spotify::playlists::MAX_TRACKS_PER_REQUEST,
    success,
};

pub async fn playlists(code: Option<String>, user: String) {
    let mut client = authenticated_client(code).await;
    report(client.get_user_playlists(&user, None, None).await);
}

pub async fn create_playlist(code: Option<String>, user: String, name: String, private: bool) {
    let mut client = authenticated_client(code).await;
    report(client.create_playlist(&user, &name, !private).await);
}

pub async fn add_tracks(code: Option<String>, user: String, playlist: String, uris: Vec<String>) {
    let mut client = authenticated_client(code).await;

    for chunk in uris.chunks(MAX_TRACKS_PER_REQUEST) {
        match client.add_tracks_to_playlist(&user, &playlist, chunk).await {
            Ok(_) => info!("Added {} tracks", chunk.len()),
            Err(e) => fail(e),
        }
    }
    success!("Tracks added to playlist {}", playlist);
}
