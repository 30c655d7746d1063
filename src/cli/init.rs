//! Init command - write the example user config

use anyhow::Result;
use console::style;
use repograde::config::GraderConfig;

pub fn run() -> Result<()> {
    let existed = GraderConfig::user_config_path().is_some_and(|p| p.exists());
    let path = GraderConfig::init_user_config()?;

    if existed {
        println!(
            "{} Config already exists at {}",
            style("✓").green(),
            style(path.display()).cyan()
        );
    } else {
        println!(
            "{} Created {}",
            style("✓").green(),
            style(path.display()).cyan()
        );
    }
    println!("  Set API_KEY (or the backend's own key variable) before running `repograde score`.");
    Ok(())
}
