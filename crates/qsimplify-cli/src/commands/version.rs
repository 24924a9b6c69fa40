//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - quantum circuit simplification by rewrite rules",
        style("qsimplify").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qsimplify-ir       Moment-timeline circuit representation");
    println!("  qsimplify-gen      Random template circuit generator");
    println!("  qsimplify-compile  Rewrite passes and randomized optimizer");
    println!("  qsimplify-cli      Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
