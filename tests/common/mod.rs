//! Shared fixtures for the integration and unit test suites.
//! Fixtures compartidos para las suites de tests.

use serde_json::{Value, json};

use enlace::core::content::ContentStore;

/// A representative content document: localized leaves in all three
/// locales, plain values, two timeline entries, and two hotels exercising
/// every conditional inclusion rule (one fully authored, one with `TODO:`
/// sentinels and notes missing the Hungarian locale).
pub fn sample_content() -> Value {
    json!({
        "meta": {
            "title": { "es": "Nuestra boda", "en": "Our wedding", "hu": "Az esküvőnk" },
            "description": { "es": "Celebra con nosotros", "en": "Celebrate with us", "hu": "Ünnepelj velünk" }
        },
        "hero": {
            "names": "Ana & Bence",
            "date": "20.06.2026",
            "tagline": { "es": "¡Nos casamos!", "en": "We're getting married!", "hu": "Összeházasodunk!" }
        },
        "countdown": {
            "targetDateTime": "2030-06-20T17:00:00",
            "title": { "es": "Cuenta atrás", "en": "Countdown", "hu": "Visszaszámlálás" },
            "labels": {
                "days": { "es": "días", "en": "days", "hu": "nap" },
                "hours": { "es": "horas", "en": "hours", "hu": "óra" },
                "minutes": { "es": "minutos", "en": "minutes", "hu": "perc" },
                "seconds": { "es": "segundos", "en": "seconds", "hu": "másodperc" },
                "today": { "es": "¡Hoy es el día!", "en": "Today is the day!", "hu": "Ma van a nagy nap!" },
                "passed": { "es": "El evento ya ha pasado", "en": "The event has passed", "hu": "Az esemény már elmúlt" }
            }
        },
        "sections": {
            "theDay": {
                "title": { "es": "El gran día", "en": "The big day", "hu": "A nagy nap" },
                "timeline": [
                    {
                        "time": "17:00",
                        "event": { "es": "Ceremonia", "en": "Ceremony", "hu": "Szertartás" },
                        "location": { "es": "Jardín", "en": "Garden", "hu": "Kert" }
                    },
                    {
                        "time": "19:00",
                        "event": { "es": "Cena", "en": "Dinner", "hu": "Vacsora" },
                        "location": { "es": "Salón", "en": "Hall", "hu": "Terem" }
                    }
                ]
            },
            "venue": {
                "title": { "es": "El lugar", "en": "The venue", "hu": "A helyszín" },
                "name": { "es": "Finca El Roble", "en": "Finca El Roble", "hu": "Finca El Roble" },
                "address": { "es": "Camino Viejo 12", "en": "Camino Viejo 12", "hu": "Camino Viejo 12" },
                "mapUrl": "https://maps.example.com/embed/finca-el-roble"
            },
            "accommodation": {
                "title": { "es": "Alojamiento", "en": "Accommodation", "hu": "Szállás" },
                "hotels": [
                    {
                        "name": { "es": "Hotel Centro", "en": "Hotel Centro", "hu": "Hotel Centro" },
                        "url": "https://hotel-centro.example.com",
                        "distance": { "es": "5 km de la finca", "en": "5 km from the venue", "hu": "5 km a helyszíntől" },
                        "notes": { "es": "Menciona la boda", "en": "Mention the wedding", "hu": "Említsd az esküvőt" }
                    },
                    {
                        "name": { "es": "Hostal Sol", "en": "Hostal Sol", "hu": "Hostal Sol" },
                        "url": "TODO: añadir URL del hotel",
                        "distance": "TODO: distancia desde la finca",
                        "notes": { "es": "Solo efectivo", "en": "Cash only" }
                    }
                ]
            }
        },
        "rsvp": {
            "title": { "es": "Confirma", "en": "RSVP", "hu": "Visszajelzés" },
            "intro": { "es": "Antes del 1 de mayo", "en": "Before May 1st", "hu": "Május 1-ig" },
            "form": {
                "nameLabel": { "es": "Nombre", "en": "Name", "hu": "Név" },
                "namePlaceholder": { "es": "Tu nombre", "en": "Your name", "hu": "A neved" },
                "emailLabel": { "es": "Email", "en": "Email", "hu": "E-mail" },
                "emailPlaceholder": { "es": "tu@email.com", "en": "you@email.com", "hu": "te@email.hu" },
                "attendanceLabel": { "es": "¿Vendrás?", "en": "Will you attend?", "hu": "Eljössz?" },
                "attendanceYes": { "es": "Sí", "en": "Yes", "hu": "Igen" },
                "attendanceNo": { "es": "No", "en": "No", "hu": "Nem" },
                "mainCourseLabel": { "es": "Plato principal", "en": "Main course", "hu": "Főétel" },
                "courses": {
                    "meat": { "es": "Carne", "en": "Meat", "hu": "Hús" },
                    "fish": { "es": "Pescado", "en": "Fish", "hu": "Hal" },
                    "veggie": { "es": "Vegetariano", "en": "Vegetarian", "hu": "Vegetáriánus" }
                },
                "allergiesLabel": { "es": "Alergias", "en": "Allergies", "hu": "Allergiák" },
                "allergiesPlaceholder": { "es": "Alergias o dieta", "en": "Allergies or diet", "hu": "Allergia vagy diéta" }
            },
            "submit": { "es": "Enviar confirmación", "en": "Send RSVP", "hu": "Visszajelzés küldése" },
            "sending": { "es": "Enviando...", "en": "Sending...", "hu": "Küldés..." },
            "success": { "es": "¡Gracias!", "en": "Thank you!", "hu": "Köszönjük!" },
            "error": { "es": "Hubo un error al enviar", "en": "Something went wrong", "hu": "Hiba történt" },
            "validation": {
                "required": { "es": "Este campo es obligatorio", "en": "This field is required", "hu": "Ez a mező kötelező" },
                "email": { "es": "Email no válido", "en": "Invalid email", "hu": "Érvénytelen e-mail" }
            }
        }
    })
}

/// The sample document as a loaded store.
pub fn sample_store() -> ContentStore {
    ContentStore::from_value(sample_content())
}
