// Prompt constants for the institution contact lookup.

pub const CONTACT_SYSTEM_ROLE: &str =
    "Tu es un assistant qui vérifie les coordonnées d'établissements d'enseignement au Bénin. \
    Réponds en français, en texte brut, sans inventer d'information.";

/// Replace `{name}` and `{location}` before sending.
pub const CONTACT_PROMPT_TEMPLATE: &str = "Fournis uniquement l'adresse physique exacte, \
    le numéro de téléphone officiel et l'adresse email de contact de l'établissement \
    {name} ({location}) au Bénin.";

pub fn build_contact_prompt(name: &str, location: &str) -> String {
    CONTACT_PROMPT_TEMPLATE
        .replace("{name}", name)
        .replace("{location}", location)
}
