//! Read-only catalog views
//!
//! `list` prints every entry the way the catalog site's index does (name and
//! short description). `show` looks one entry up by `name` and prints the
//! app page: developer, descriptions, features, links and metadata.

use crate::cli::style::{BULLET, Stream, Stylize, hyperlink_url};
use anstream::println;
use anyhow::{Result, bail};
use app_catalog_bot::catalog::{Catalog, CatalogLoad, CatalogStore, entry_name};
use serde_json::Value;
use std::path::Path;

/// Sidebar fields, in display order
const META_FIELDS: [(&str, &str); 4] = [
    ("version", "Version"),
    ("releaseDate", "Release Date"),
    ("size", "Size"),
    ("requirements", "System Requirements"),
];

fn load(path: &Path) -> Result<Catalog> {
    match CatalogStore::new(path).load() {
        CatalogLoad::Loaded(catalog) => Ok(catalog),
        CatalogLoad::Empty => Ok(Catalog::new()),
        CatalogLoad::Corrupt(reason) => bail!("cannot read {}: {reason}", path.display()),
    }
}

/// Run the list command
pub fn run_list(path: &Path) -> Result<()> {
    let catalog = load(path)?;

    if catalog.is_empty() {
        println!("{}", "No apps available.".muted());
        return Ok(());
    }

    println!(
        "{} {}",
        "Apps".emphasis(),
        format!("({} in {})", catalog.len(), path.display()).muted()
    );
    println!();

    for entry in catalog.entries() {
        let name = entry_name(entry).unwrap_or("(unnamed entry)");
        match shown(entry, "version") {
            Some(version) => println!("{BULLET} {} {}", name.accent(), version.muted()),
            None => println!("{BULLET} {}", name.accent()),
        }
        if let Some(description) = shown(entry, "description") {
            println!("  {description}");
        }
    }

    Ok(())
}

/// Run the show command
pub fn run_show(path: &Path, name: &str) -> Result<()> {
    let catalog = load(path)?;
    let Some(app) = catalog.find_by_name(name) else {
        bail!("App not found: {name}");
    };

    println!("{}", name.emphasis());

    if let Some(developer) = app.get("developer").filter(|d| d.is_object()) {
        let dev_name = shown(developer, "name").unwrap_or_default();
        match shown(developer, "url") {
            Some(url) => println!(
                "Developer: {} {}",
                dev_name.accent(),
                hyperlink_url(Stream::Stdout, &url).muted()
            ),
            None => println!("Developer: {}", dev_name.accent()),
        }
        if let Some(avatar) = shown(developer, "avatar") {
            println!("Avatar: {}", hyperlink_url(Stream::Stdout, &avatar).muted());
        }
    }

    if let Some(description) = shown(app, "description") {
        println!("{description}");
    }

    if let Some(about) = shown(app, "longDescription") {
        println!();
        println!("{}", "About".emphasis());
        println!("  {about}");
    }

    if let Some(features) = app.get("features").and_then(Value::as_array) {
        println!();
        println!("{}", "Features".emphasis());
        for feature in features {
            println!("  {BULLET} {}", display_value(feature));
        }
    }

    println!();
    if let Some(download) = shown(app, "downloadUrl") {
        println!("Download: {}", hyperlink_url(Stream::Stdout, &download));
    }
    if let Some(source) = shown(app, "sourceUrl") {
        println!("Source Code: {}", hyperlink_url(Stream::Stdout, &source));
    }
    for (key, label) in META_FIELDS {
        if let Some(value) = shown(app, key) {
            println!("{}: {value}", label.muted());
        }
    }

    Ok(())
}

/// Field text, or `None` when absent, null, false, or an empty string
fn shown(entry: &Value, key: &str) -> Option<String> {
    match entry.get(key)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        value => Some(display_value(value)),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
