fn main() {
    println!("cargo:rerun-if-changed=src/default_settings.toml");
    check_default_settings(include_str!("src/default_settings.toml"));
}

/// The embedded defaults must parse and carry both sections `settings()` reads.
fn check_default_settings(content: &str) {
    let table: toml::Table = match content.parse() {
        Ok(table) => table,
        Err(e) => panic!("src/default_settings.toml contains invalid TOML: {e}"),
    };
    for section in ["suggest", "server"] {
        if !table.get(section).is_some_and(toml::Value::is_table) {
            panic!("src/default_settings.toml is missing the [{section}] table");
        }
    }
}
