use chrono::{DateTime, Utc};

/// Topic selected for a chat message. Variants are listed in match priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Portfolio,
    Cv,
    Projects,
    Contact,
    Date,
    Help,
    Unknown,
}

/// Picks the intent for a message. The first matching rule wins.
pub fn detect_intent(msg: &str) -> Intent {
    let msg = msg.trim().to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| msg.contains(w));

    if has(&["hola", "hello"]) {
        Intent::Greeting
    } else if has(&["portfolio"]) {
        Intent::Portfolio
    } else if has(&["cv", "curriculum"]) {
        Intent::Cv
    } else if has(&["proyectos", "projects"]) {
        Intent::Projects
    } else if has(&["contacto", "contact"]) {
        Intent::Contact
    } else if msg == "date" || msg == "fecha" {
        // exact match only, "what's the date" falls through
        Intent::Date
    } else if has(&["ayuda", "help"]) {
        Intent::Help
    } else {
        Intent::Unknown
    }
}

/// Renders the canned reply for `intent`.
///
/// `raw_msg` is echoed back verbatim for [`Intent::Unknown`]; `now` is only
/// read for [`Intent::Date`].
pub fn generate_reply(intent: Intent, raw_msg: &str, now: DateTime<Utc>) -> String {
    use Intent::*;

    match intent {
        Greeting => "¡Hola! 👋 Soy tu asistente virtual. ¿En qué puedo ayudarte?".to_string(),
        Portfolio => "Este es mi portfolio estilo VS Code. 💻 ¿Quieres ver mis proyectos?".to_string(),
        Cv => "Puedes descargar mi CV desde la barra lateral del portfolio. 📄".to_string(),
        Projects => "Tengo varios proyectos interesantes. ¡Échales un vistazo! 🚀".to_string(),
        Contact => "Puedes contactarme a través de mi portfolio o redes sociales. 📧".to_string(),
        Date => format!(
            "📅 La fecha actual es: {} UTC",
            now.format("%Y-%m-%d %H:%M:%S")
        ),
        Help => "Puedes preguntarme sobre: portfolio, cv, proyectos, contacto o fecha. 💡".to_string(),
        Unknown => format!(
            "Recibí tu mensaje: '{}' 🤔 ¿Podrías ser más específico? Escribe 'ayuda' para ver qué puedo hacer.",
            raw_msg
        ),
    }
}

/// Classifies `msg` against the wall clock.
pub fn classify(msg: &str) -> String {
    classify_at(msg, Utc::now())
}

/// Same as [`classify`] with a fixed clock reading.
pub fn classify_at(msg: &str, now: DateTime<Utc>) -> String {
    generate_reply(detect_intent(msg), msg, now)
}
