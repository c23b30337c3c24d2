//! Builds a small tree of company names, queries it, removes one and prints the
//! tree before and after. Set `RUST_LOG=trace` to see the tree's own diagnostics.

use bstree::Tree;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    SimpleLogger::new().with_level(level).init()?;

    let mut tree = Tree::new();
    for name in ["Telerik", "Google", "Microsoft"] {
        tree.try_insert(Some(name.to_string()))?;
    }
    info!("built tree of {} companies", tree.len());

    println!("{}", tree); // Google Microsoft Telerik
    println!("{}", tree.contains("Telerik")); // true
    println!("{}", tree.contains("IBM")); // false

    tree.remove("Telerik");
    println!("{}", tree.contains("Telerik")); // false
    println!("{}", tree); // Google Microsoft

    Ok(())
}
