//! # Content Initialization Module / Módulo de Inicialización de Contenido
//!
//! This module scaffolds a starter content document through an interactive
//! command-line wizard: couple names, target date, venue. Everything else
//! is generated with localized defaults and `TODO:` sentinels the dynamic
//! section renderer knows to skip until they are authored.
//!
//! Este módulo genera un documento de contenido inicial mediante un
//! asistente interactivo de línea de comandos.

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use serde_json::{Value, json};
use std::fs;
use std::path::Path;

use crate::core::countdown;
use crate::infra::t;

/// Runs the interactive wizard to generate a starter content document.
///
/// With `non_interactive`, the default document is written as-is; otherwise
/// the wizard asks for the handful of values that make the page yours and
/// leaves the rest as authored defaults.
pub fn run_init_wizard(out: &Path, language: &str, non_interactive: bool) -> Result<()> {
    let theme = ColorfulTheme::default();

    if !non_interactive {
        println!("\n{}", t!("init_wizard_welcome", locale = language).cyan().bold());
        println!("{}", t!("init_wizard_description", locale = language));
    }

    if out.exists() && !non_interactive {
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!(
                "init_overwrite_prompt",
                locale = language,
                path = out.display().to_string()
            ))
            .default(false)
            .interact()
            .context(t!("prompt_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init_aborted", locale = language));
            return Ok(());
        }
    }

    let mut content = default_content();

    if !non_interactive {
        let names: String = Input::with_theme(&theme)
            .with_prompt(t!("init_prompt_names", locale = language))
            .default("Ana & Bence".to_string())
            .interact_text()?;

        let target: String = Input::with_theme(&theme)
            .with_prompt(t!("init_prompt_target", locale = language))
            .default("2026-06-20T17:00:00".to_string())
            .validate_with(|raw: &String| {
                if countdown::parse_target(raw).is_some() {
                    Ok(())
                } else {
                    Err(t!("init_invalid_target", locale = language).to_string())
                }
            })
            .interact_text()?;

        let venue: String = Input::with_theme(&theme)
            .with_prompt(t!("init_prompt_venue_name", locale = language))
            .default("TODO: nombre de la finca".to_string())
            .interact_text()?;

        content["hero"]["names"] = json!(names);
        content["countdown"]["targetDateTime"] = json!(target);
        content["sections"]["venue"]["name"] =
            json!({ "es": venue, "en": venue, "hu": venue });
    }

    write_content(out, &content, language)
}

/// The starter document: every localized leaf carries all three locales,
/// and values the author still has to provide are `TODO:` sentinels that
/// the renderer skips.
fn default_content() -> Value {
    json!({
        "meta": {
            "title": { "es": "Nuestra boda", "en": "Our wedding", "hu": "Az esküvőnk" },
            "description": {
                "es": "Nos casamos y queremos celebrarlo contigo.",
                "en": "We are getting married and want to celebrate with you.",
                "hu": "Összeházasodunk, és veled szeretnénk ünnepelni."
            }
        },
        "hero": {
            "names": "Ana & Bence",
            "date": "20.06.2026",
            "tagline": { "es": "¡Nos casamos!", "en": "We're getting married!", "hu": "Összeházasodunk!" }
        },
        "countdown": {
            "targetDateTime": "2026-06-20T17:00:00",
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
                "name": { "es": "TODO: nombre de la finca", "en": "TODO: venue name", "hu": "TODO: helyszín neve" },
                "address": { "es": "TODO: dirección", "en": "TODO: address", "hu": "TODO: cím" },
                "mapUrl": "TODO: añadir URL de Google Maps embebido o coordenadas"
            },
            "accommodation": {
                "title": { "es": "Alojamiento", "en": "Accommodation", "hu": "Szállás" },
                "hotels": [
                    {
                        "name": { "es": "Hotel Ejemplo", "en": "Hotel Ejemplo", "hu": "Hotel Ejemplo" },
                        "url": "TODO: añadir URL del hotel",
                        "distance": "TODO: distancia desde la finca",
                        "notes": {
                            "es": "Menciona la boda al reservar.",
                            "en": "Mention the wedding when booking.",
                            "hu": "Foglaláskor említsd meg az esküvőt."
                        }
                    }
                ]
            }
        },
        "rsvp": {
            "title": { "es": "Confirma tu asistencia", "en": "RSVP", "hu": "Visszajelzés" },
            "intro": {
                "es": "Por favor, confirma antes del 1 de mayo.",
                "en": "Please confirm before May 1st.",
                "hu": "Kérjük, jelezz vissza május 1-ig."
            },
            "form": {
                "nameLabel": { "es": "Nombre", "en": "Name", "hu": "Név" },
                "namePlaceholder": { "es": "Tu nombre completo", "en": "Your full name", "hu": "Teljes neved" },
                "emailLabel": { "es": "Email", "en": "Email", "hu": "E-mail" },
                "emailPlaceholder": { "es": "tu@email.com", "en": "you@email.com", "hu": "te@email.hu" },
                "attendanceLabel": { "es": "¿Vendrás?", "en": "Will you attend?", "hu": "Eljössz?" },
                "attendanceYes": { "es": "Sí, allí estaré", "en": "Yes, I'll be there", "hu": "Igen, ott leszek" },
                "attendanceNo": { "es": "No podré ir", "en": "I can't make it", "hu": "Nem tudok menni" },
                "mainCourseLabel": { "es": "Plato principal", "en": "Main course", "hu": "Főétel" },
                "courses": {
                    "meat": { "es": "Carne", "en": "Meat", "hu": "Hús" },
                    "fish": { "es": "Pescado", "en": "Fish", "hu": "Hal" },
                    "veggie": { "es": "Vegetariano", "en": "Vegetarian", "hu": "Vegetáriánus" }
                },
                "allergiesLabel": { "es": "Alergias", "en": "Allergies", "hu": "Allergiák" },
                "allergiesPlaceholder": {
                    "es": "Cuéntanos cualquier alergia o dieta",
                    "en": "Tell us about any allergy or diet",
                    "hu": "Írj bármilyen allergiáról vagy diétáról"
                }
            },
            "submit": { "es": "Enviar confirmación", "en": "Send RSVP", "hu": "Visszajelzés küldése" },
            "sending": { "es": "Enviando...", "en": "Sending...", "hu": "Küldés..." },
            "success": {
                "es": "¡Gracias! Hemos recibido tu confirmación.",
                "en": "Thank you! We received your RSVP.",
                "hu": "Köszönjük! Megkaptuk a visszajelzésed."
            },
            "error": {
                "es": "Hubo un error al enviar. Por favor, inténtalo de nuevo.",
                "en": "Something went wrong. Please try again.",
                "hu": "Hiba történt a küldés során. Kérjük, próbáld újra."
            },
            "validation": {
                "required": { "es": "Este campo es obligatorio", "en": "This field is required", "hu": "Ez a mező kötelező" },
                "email": {
                    "es": "Por favor, introduce un email válido",
                    "en": "Please enter a valid email",
                    "hu": "Kérjük, adj meg egy érvényes e-mail címet"
                }
            }
        }
    })
}

fn write_content(path: &Path, content: &Value, language: &str) -> Result<()> {
    let serialized = serde_json::to_string_pretty(content)
        .context(t!("init_serialize_failed", locale = language).to_string())?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| t!("init_write_failed", locale = language, path = parent.display().to_string()))?;
    }
    fs::write(path, serialized)
        .with_context(|| t!("init_write_failed", locale = language, path = path.display().to_string()))?;

    println!(
        "\n{} {}",
        "✔".green(),
        t!("init_success_created", locale = language, path = path.display().to_string()).bold()
    );
    println!("{}", t!("init_usage_hint", locale = language));

    Ok(())
}
