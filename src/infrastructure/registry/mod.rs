//! Registry Sources
//!
//! Implementations of the `RegistrySource` port: a remote registry served
//! over HTTP and a registry checked out on disk.

mod http;
mod local;

use std::path::Path;

use url::Url;

use crate::domain::ports::RegistrySource;

pub use http::HttpRegistry;
pub use local::LocalRegistry;

/// Pick a source for `location`: `http(s)://` URLs go over the network,
/// `file://` URLs and anything else are directories relative to `cwd`.
pub fn open_source(location: &str, cwd: &Path) -> Box<dyn RegistrySource> {
    if let Ok(url) = Url::parse(location) {
        match url.scheme() {
            "http" | "https" => return Box::new(HttpRegistry::new(location)),
            "file" => {
                if let Ok(path) = url.to_file_path() {
                    return Box::new(LocalRegistry::new(path));
                }
            }
            _ => {}
        }
    }
    Box::new(LocalRegistry::new(cwd.join(location)))
}

/// `{base}/styles/{style}/{name}.json`
pub(crate) fn entry_document(style: &str, name: &str) -> String {
    format!("styles/{}/{}.json", style, name)
}

pub(crate) const INDEX_DOCUMENT: &str = "index.json";
