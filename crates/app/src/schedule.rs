use std::path::Path;

use aula_core::model::{ActivityGroup, ActivityItem};
use aula_core::schedule::Schedule;
use tracing::info;

/// Load the schedule document at `path`, or the built-in day when no path is set.
pub fn load_schedule(path: Option<&Path>) -> Result<Schedule, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(default_schedule());
    };
    let raw = std::fs::read_to_string(path)?;
    let schedule = Schedule::from_json(&raw)?;
    info!(
        path = %path.display(),
        activities = schedule.activity_count(),
        "schedule loaded"
    );
    Ok(schedule)
}

/// A study day, deliberately authored out of order in places.
pub fn default_schedule() -> Schedule {
    Schedule::new(vec![
        ActivityGroup::new(
            "Mañana",
            vec![
                ActivityItem::new("Repasar vocabulario", "8:00 - 8:30", "fas fa-language"),
                ActivityItem::new("Desayuno con podcast", "7:30 - 8:00", "fas fa-headphones"),
                ActivityItem::new("Lectura en voz alta", "9:00 - 9:45", "fas fa-book-open"),
            ],
        ),
        ActivityGroup::new(
            "Tarde",
            vec![
                ActivityItem::new("Ejercicios de gramática", "16:00 - 16:45", "fas fa-pen"),
                ActivityItem::new("Serie con subtítulos", "14:30 - 15:15", "fas fa-tv"),
            ],
        ),
        ActivityGroup::new(
            "Noche",
            vec![
                ActivityItem::new("Diario en turco", "21:00 - 21:20", "fas fa-feather"),
                ActivityItem::new("Conversación", "19:00 - 19:30", "fas fa-comments"),
            ],
        ),
    ])
}
