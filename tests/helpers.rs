/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Deserialize, Debug)]
struct CachedToken {
    access_token: String,
}

fn read_token_cache(path: PathBuf) -> anyhow::Result<CachedToken> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

#[allow(dead_code)]
pub(crate) fn get_app_client() -> anyhow::Result<imgur::v3::Client> {
    // RUST_LOG=debug surfaces the request lines from the live tests.
    let _ = env_logger::builder().is_test(true).try_init();

    let client_id = std::env::var("IMGUR_CLIENT_ID")?;
    let client_secret = std::env::var("IMGUR_CLIENT_SECRET")?;

    Ok(imgur::v3::Client::new(&client_id, &client_secret)?)
}

#[allow(dead_code)]
pub(crate) fn get_user_client() -> anyhow::Result<imgur::v3::Client> {
    let client = get_app_client()?;
    let token_cache = std::env::var("IMGUR_AUTH_CACHE")?;
    let token = read_token_cache(token_cache.into())?;
    client.set_access_token(&token.access_token);

    Ok(client)
}
