use crate::engine::{ImpactSummary, MatchResult, PlanetStatus};
use crate::models::Catalog;
use crate::state::{Achievement, GameStats, PlanetHistoryEntry, Progress, RoundReport};

/// Display the ingredient and recipe catalog.
pub fn display_catalog(catalog: &Catalog) {
    println!();
    println!("=== Ingredients ({} items) ===", catalog.len());
    println!();

    let width = catalog
        .ingredients()
        .iter()
        .map(|i| i.name.len())
        .max()
        .unwrap_or(10);

    for i in catalog.ingredients() {
        println!(
            "  {:<width$}  {:<9}  C:{:.2} W:{:.2} L:{:.2} H:{:.2}  ({})",
            i.name,
            i.category.as_str(),
            i.carbon_footprint,
            i.water_usage,
            i.land_usage,
            i.health_score,
            i.id,
            width = width
        );
    }

    println!();
    println!("=== Recipes ({} items) ===", catalog.recipes().len());
    println!();

    for r in catalog.recipes() {
        println!("  {} (+{:.0}): {}", r.name, r.bonus_score, r.ingredients.join(" + "));
    }
    println!();
}

/// Display an impact summary with its planet status.
pub fn display_impact(impact: &ImpactSummary) {
    let status = PlanetStatus::from_score(impact.total_score);
    println!("--- Impact ---");
    println!("Carbon footprint: {:.2}", impact.carbon_footprint);
    println!("Water usage:      {:.2}", impact.water_usage);
    println!("Land usage:       {:.2}", impact.land_usage);
    println!("Health:           {:.2}", impact.health_score);
    println!("Score:            {}/100 ({})", impact.total_score, status);
}

/// Display matched recipes and leftover ingredients.
pub fn display_matches(matches: &MatchResult) {
    println!("--- Recipes ---");
    if matches.found_recipes.is_empty() {
        println!("No recipes recognised.");
    }
    for m in &matches.found_recipes {
        let names: Vec<&str> = m.ingredients.iter().map(|i| i.name.as_str()).collect();
        println!("  {} (+{:.0}): {}", m.recipe.name, m.recipe.bonus_score, names.join(", "));
    }

    if !matches.unmatched_foods.is_empty() {
        let names: Vec<&str> = matches
            .unmatched_foods
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        println!("Leftovers: {}", names.join(", "));
    }
}

/// Display a finished round.
pub fn display_round(report: &RoundReport) {
    println!();
    println!("=== Meal Result ===");
    println!();

    display_impact(&report.impact);
    println!();
    display_matches(&report.matches);

    println!();
    println!(
        "Final score: {} (base {} + recipe bonus {:.0})",
        report.final_score(),
        report.impact.total_score,
        report.recipe_bonus
    );
    println!("Planet: {}", report.status.narrative());

    if !report.tips.is_empty() {
        println!();
        println!("--- Tips ---");
        for tip in &report.tips {
            println!("  * {}", tip);
        }
    }

    if !report.new_recipes.is_empty() {
        println!();
        println!("New recipes unlocked: {}", report.new_recipes.join(", "));
    }

    display_new_achievements(&report.new_achievements);
    println!();
}

pub fn display_new_achievements(achievements: &[Achievement]) {
    for a in achievements {
        println!("Achievement unlocked: {} - {}", a.title(), a.description());
    }
}

pub fn display_stats(stats: &GameStats) {
    println!(
        "Meals: {} | eco streak: {} | healthy streak: {} | vegetarian streak: {}",
        stats.total_meals, stats.eco_streak, stats.healthy_streak, stats.vegetarian_streak
    );
}

/// Display the planet history of a session.
pub fn display_history(history: &[PlanetHistoryEntry]) {
    if history.is_empty() {
        println!("Planet history: (none)");
        return;
    }

    println!();
    println!("=== Planet History ===");
    println!();
    for (n, entry) in history.iter().enumerate() {
        let foods: Vec<&str> = entry.foods.iter().map(|i| i.name.as_str()).collect();
        println!(
            "{:>3}. {} {:>3} {:<9} {}",
            n + 1,
            entry.timestamp.format("%H:%M:%S"),
            entry.score,
            entry.status.as_str(),
            foods.join(", ")
        );
    }
    println!();
}

/// Display persisted progress against the catalog.
pub fn display_progress(progress: &Progress, catalog: &Catalog) {
    println!();
    println!(
        "=== Recipes ({}/{}) ===",
        progress.unlocked_recipe_ids.len(),
        catalog.recipes().len()
    );
    for r in catalog.recipes() {
        let mark = if progress.unlocked_recipe_ids.contains(&r.id) { "x" } else { " " };
        println!("  [{}] {}", mark, r.name);
    }

    println!();
    println!(
        "=== Achievements ({}/{}) ===",
        progress.achievements.len(),
        Achievement::ALL.len()
    );
    for a in Achievement::ALL {
        match progress.achievements.get(a.id()) {
            Some(record) => println!(
                "  [x] {} - unlocked {}",
                a.title(),
                record.unlocked_at.format("%Y-%m-%d")
            ),
            None => println!("  [ ] {} - {}", a.title(), a.description()),
        }
    }
    println!();
}
