//! Fixed German prompt texts.

use lexis_core::models::Relevance;

/// Opening line of the simple prompt; the question follows.
pub const SIMPLE_QUESTION_PREFIX: &str = "Frage: ";

pub const SIMPLE_INSTRUCTION: &str = "Nachfolgend findest Du fünf Gesetzesartikel. \
Prüfe ob die Artikel relevant sind und beantworte die Frage basierend auf den relevanten Artikel. \
Wenn kein einziger Artikel relevant ist, sag, dass kein relevanter Artikel gefunden wurde. \
Hier die Artikel:";

pub const SIMPLE_CLOSING: &str = "Erwähne nur die relevanten Artikel und verzichte auf den \
Hinweis, dass man einen Anwalt beiziehen sollte.";

pub const ARTICLES_HEADER: &str = "Hier die Gesetzesartikel, die der Frage am ähnlichsten sind:";

pub const APPLICABILITY_LABEL: &str = "Anwendbarkeit: ";

pub const NOTE_DIRECT: &str =
    "Dieser Artikel ist direkt auf den genannten Anwendungsbereich anwendbar.";

pub const NOTE_NOT_DIRECT: &str = "Dieser Artikel ist nicht als direkt anwendbar gekennzeichnet. \
Prüfe, ob er sinngemäss anwendbar ist.";

pub const NOTE_NEUTRAL: &str = "Keine Prüfung der Anwendbarkeit erforderlich.";

pub const CLOSING: &str = "Beantworte die Frage ausschliesslich gestützt auf die \
obigen Informationen. \
Erwähne nur die relevanten Artikel.";

pub fn framing(query: &str) -> String {
    format!("Beantworte die folgende Frage: \"{query}\"")
}

/// One sentence describing the selected category.
pub fn relevance_context(relevance: Relevance) -> &'static str {
    match relevance {
        Relevance::Assembly => {
            "Die Frage betrifft Versammlungen. Artikel, die direkt auf Versammlungen \
anwendbar sind, haben Vorrang."
        }
        Relevance::MailVoting => {
            "Die Frage betrifft die briefliche Stimmabgabe. Artikel, die direkt auf die \
briefliche Stimmabgabe anwendbar sind, haben Vorrang."
        }
        Relevance::General => {
            "Die Frage ist keinem besonderen Anwendungsbereich zugeordnet. Alle Artikel \
sind gleichermassen zu berücksichtigen."
        }
    }
}
