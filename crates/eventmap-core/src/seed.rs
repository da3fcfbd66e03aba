//! Demo catalog seeded at startup.
//!
//! Five events in central Moscow, one per category: sport, music,
//! technology, art and food.

use chrono::NaiveDate;
use eventmap_types::{Event, EventCategory, EventId, EventLocation, UserId};

use crate::error::CoreError;

/// Helper to build a calendar date, rejecting impossible ones.
fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, CoreError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(CoreError::InvalidSeedDate {
        year,
        month,
        day,
    })
}

/// Helper to build an [`EventLocation`].
fn at(lat: f64, lng: f64, address: &str) -> EventLocation {
    EventLocation {
        lat,
        lng,
        address: address.to_owned(),
    }
}

/// Organizer-side fields of a seed event.
struct SeedOrganizer<'a> {
    id: &'a str,
    name: &'a str,
}

/// Helper to build a seed [`Event`].
#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    title: &str,
    description: &str,
    location: EventLocation,
    date: NaiveDate,
    time: &str,
    category: EventCategory,
    organizer: &SeedOrganizer<'_>,
    image_url: &str,
    is_premium: bool,
    attendees: u32,
) -> Event {
    Event {
        id: EventId::from(id),
        title: title.to_owned(),
        description: description.to_owned(),
        location,
        date,
        time: time.to_owned(),
        category,
        organizer_id: UserId::from(organizer.id),
        organizer: organizer.name.to_owned(),
        image_url: Some(image_url.to_owned()),
        is_premium,
        attendees,
    }
}

/// Build the demo catalog.
///
/// # Errors
///
/// Returns [`CoreError::InvalidSeedDate`] if a hardcoded date is invalid.
pub fn demo_events() -> Result<Vec<Event>, CoreError> {
    Ok(vec![
        event(
            "event-1",
            "Турнир по шахматам",
            "Присоединяйтесь к нашему любительскому шахматному турниру, открытому для всех уровней квалификации. Призы для лучших игроков гарантированы!",
            at(55.7558, 37.6176, "Московский центральный шахматный клуб"),
            date(2025, 6, 15)?,
            "12:00",
            EventCategory::Sport,
            &SeedOrganizer { id: "user-1", name: "Chess Lover" },
            "https://images.unsplash.com/photo-1580541832626-2a7131ee809f",
            false,
            42,
        ),
        event(
            "event-2",
            "Ежегодный джазовый фестиваль",
            "Познакомьтесь с лучшими джазовыми музыкантами на нашем ежегодном фестивале. Еда и напитки доступны.",
            at(55.7539, 37.6208, "Московский концертный зал"),
            date(2025, 7, 10)?,
            "18:00",
            EventCategory::Music,
            &SeedOrganizer { id: "org-1", name: "Московская музыкальная ассоциация" },
            "https://images.unsplash.com/photo-1511192336575-5a79af67a629",
            true,
            156,
        ),
        event(
            "event-3",
            "Технологическая стартап встреча",
            "Знакомьтесь с IT-предпринимателями и инвесторами. Представляйте свои проекты!",
            at(55.7516, 37.6145, "Московский инновационный центр"),
            date(2025, 6, 22)?,
            "19:30",
            EventCategory::Technology,
            &SeedOrganizer { id: "org-2", name: "StartupRussia" },
            "https://images.unsplash.com/photo-1530133532239-eda6f53fcf0f",
            true,
            89,
        ),
        event(
            "event-4",
            "Современная художественная выставка",
            "Стрит-арт meets contemporary: новые герои городской культуры",
            at(55.7602, 37.6178, "Современная художественная галерея"),
            date(2025, 6, 18)?,
            "10:00",
            EventCategory::Art,
            &SeedOrganizer { id: "org-3", name: "Московский художественный коллектив" },
            "https://n1s1.hsmedia.ru/ca/f2/5c/caf25cf1d3af10d784db4f0c27e2e54d/727x485_1_ee1c8f9de17e2dcf890a3e22fa12bbb5@4000x2667_0xac120003_2132176911640873891.jpeg.webp",
            false,
            67,
        ),
        event(
            "event-5",
            "Фестиваль уличной еды",
            "Разбуди свои вкусовые рецепторы на фестивале мировой street food!",
            at(55.7522, 37.6256, "Парк Горького"),
            date(2025, 7, 5)?,
            "12:00",
            EventCategory::Food,
            &SeedOrganizer { id: "org-4", name: "FoodLovers Moscow" },
            "https://images.unsplash.com/photo-1580984969071-a8da5656c2fb",
            false,
            211,
        ),
    ])
}
