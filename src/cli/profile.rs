use crate::cli::{auth::authenticated_client, output::report};

pub async fn me(code: Option<String>) {
    let mut client = authenticated_client(code).await;
    report(client.me().await);
}

pub async fn user(code: Option<String>, user: String) {
    let mut client = authenticated_client(code).await;
    report(client.get_user_profile(&user).await);
}
