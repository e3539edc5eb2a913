use aula_core::model::{LessonId, LessonRecord, Level};
use chrono::{DateTime, Duration, Utc};
use services::LocalContributionService;
use tracing::info;

/// Publish the demo lessons. Ids are fixed, so seeding twice replaces them.
pub async fn seed_lessons(
    service: &LocalContributionService,
    now: DateTime<Utc>,
) -> Result<usize, Box<dyn std::error::Error>> {
    let lessons = demo_lessons(now);
    for lesson in &lessons {
        service.publish(lesson).await?;
    }
    info!(count = lessons.len(), "demo lessons published");
    Ok(lessons.len())
}

fn demo_lessons(now: DateTime<Utc>) -> Vec<LessonRecord> {
    vec![
        lesson(
            "demo-a1-saludos",
            Level::A1,
            "Saludos básicos",
            "Cómo saludar y despedirse en turco.",
            "# Saludos\n\n- **Merhaba**: hola\n- **Günaydın**: buenos días\n- **Hoşça kal**: adiós",
            now,
        ),
        lesson(
            "demo-a1-numeros",
            Level::A1,
            "Los números del 1 al 10",
            "Contar en turco.",
            "# Números\n\nbir, iki, üç, dört, beş, altı, yedi, sekiz, dokuz, on",
            now - Duration::days(1),
        ),
        lesson(
            "demo-a2-pasado",
            Level::A2,
            "El pasado con -di",
            "Pasado definido y armonía vocálica.",
            "# Pasado\n\n*Geldim*, *gittin*, *yaptı*: el sufijo cambia con la última vocal.",
            now - Duration::days(4),
        ),
        lesson(
            "demo-b1-condicional",
            Level::B1,
            "Oraciones condicionales",
            "El sufijo -se/-sa en contexto.",
            "# Condicional\n\n> Zamanım olursa gelirim.",
            now - Duration::days(12),
        ),
    ]
}

fn lesson(
    id: &str,
    level: Level,
    title: &str,
    description: &str,
    content: &str,
    published_at: DateTime<Utc>,
) -> LessonRecord {
    LessonRecord {
        id: LessonId::new(id),
        title: title.to_owned(),
        description: description.to_owned(),
        level,
        author: "Equipo Aula".to_owned(),
        content: content.to_owned(),
        published_at,
    }
}
