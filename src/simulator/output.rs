use std::path::Path;

use crate::error::Result;
use crate::simulator::runner::SimulationResults;

/// Write one row per simulated round to a CSV file.
pub fn write_csv(results: &SimulationResults, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "round",
        "ingredients",
        "score",
        "final_score",
        "status",
        "recipes",
        "new_achievements",
    ])?;

    for record in &results.records {
        let achievements: Vec<&str> = record.new_achievements.iter().map(|a| a.id()).collect();
        wtr.write_record([
            record.round.to_string(),
            record.ingredients.join(";"),
            record.score.to_string(),
            record.final_score.to_string(),
            record.status.to_string(),
            record.recipes.join(";"),
            achievements.join(";"),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Print a summary of the run to stdout.
pub fn print_summary(results: &SimulationResults) {
    println!("\n=== Simulation Summary ({} rounds) ===\n", results.records.len());
    println!("Mean base score: {:.2}", results.mean_score());
    println!("Recipes discovered: {}", results.recipes_discovered);

    println!("\nPlanet status:");
    let total = results.records.len().max(1) as f64;
    for (status, count) in results.status_counts() {
        println!(
            "  {:<9} {:>5} ({:.1}%)",
            status.as_str(),
            count,
            count as f64 / total * 100.0
        );
    }

    println!("\nFirst unlocks:");
    if results.first_unlocks.is_empty() {
        println!("  (none)");
    }
    let mut unlocks: Vec<_> = results.first_unlocks.iter().collect();
    unlocks.sort_by_key(|(_, round)| **round);
    for (achievement, round) in unlocks {
        println!("  round {:>4}: {}", round, achievement.title());
    }
    println!();
}
