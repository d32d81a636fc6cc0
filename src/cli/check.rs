use std::time::Duration;

use ckan_dataset::{
    CatalogConfig, CkanDataset, HttpCatalog, Provider, ResourceData, ResourcePlugin,
};

pub(crate) fn run(
    link: &str,
    username: String,
    token: String,
    timeout: Option<u64>,
    format: super::Format,
) {
    let mut config = CatalogConfig::from_env();
    if let Some(secs) = timeout.filter(|s| *s > 0) {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    let plugin = CkanDataset::new(HttpCatalog::new(config));
    let provider = Provider::new(username, token);

    let result = plugin.on_pre_create_validation(&provider, ResourceData::with_link(link), None);

    match format {
        super::Format::Text => match &result {
            Ok(_) => eprintln!("ok"),
            Err(e) => eprintln!("error[{}]: {e}", e.kind().code()),
        },
        super::Format::Json => {
            let json = match &result {
                Ok(_) => serde_json::json!({
                    "ok": true,
                    "link": link,
                    "username": provider.username,
                }),
                Err(e) => serde_json::json!({
                    "ok": false,
                    "link": link,
                    "username": provider.username,
                    "code": e.kind().code(),
                    "kind": e.kind(),
                    "message": e.to_string(),
                }),
            };
            println!("{}", serde_json::to_string_pretty(&json).unwrap());
        }
    }

    if result.is_err() {
        std::process::exit(1);
    }
}
