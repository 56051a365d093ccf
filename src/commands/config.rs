use crate::display;
use orgrepos::config::{config_path, load_config, save_config};
use orgrepos::Result;

pub fn run(url: &Option<String>, org: &Option<String>) -> Result<()> {
    let mut config = load_config()?;

    if url.is_none() && org.is_none() {
        display::section_header("Configuration");
        let path = config_path()?.display().to_string();
        let mut table = display::new_table(&["Setting", "Value"]);
        table.add_row(vec!["File", path.as_str()]);
        table.add_row(vec!["API URL", config.api_url()]);
        table.add_row(vec!["Default org", config.defaults.org.as_deref().unwrap_or("-")]);
        println!("{table}");
        return Ok(());
    }

    if let Some(url) = url {
        config.api.url = Some(url.trim_end_matches('/').to_string());
    }
    if let Some(org) = org {
        config.defaults.org = Some(org.clone());
    }
    save_config(&config)?;

    display::success(&format!("Saved configuration to {}", config_path()?.display()));

    Ok(())
}
