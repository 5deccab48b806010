mod achievements;
mod history;
mod persistence;
mod session;
mod stats;

pub use achievements::{evaluate_achievements, Achievement};
pub use history::{PlanetHistoryEntry, RoundReport};
pub use persistence::{
    load_progress, save_progress, AchievementRecord, JsonFileStore, MemoryStore, Progress,
    ProgressStore,
};
pub use session::{GameEvent, GamePhase, GameSession, Transition};
pub use stats::GameStats;
