// Prompt constants for quiz generation.

/// Role description for the quiz-writing model; combined with
/// `llm_client::prompts::JSON_ONLY_SYSTEM`.
pub const QUIZ_SYSTEM_ROLE: &str =
    "Tu es un conseiller d'orientation spécialisé dans les métiers du numérique au Bénin. \
    Tu rédiges des questionnaires d'aptitude en français.";

/// Replace `{count}`, `{persona}` and `{mode}` before sending.
pub const QUIZ_PROMPT_TEMPLATE: &str = r#"Génère un quiz de diagnostic d'aptitude technologique de {count} questions pour un profil : {persona}.
Le mode est "{mode}".
Chaque question doit être une mise en situation professionnelle réaliste ancrée dans le contexte du Bénin.
Propose 4 options (A, B, C, D) par question attribuant des points aux forces : Com, Tech, Créa, Struct, Lead, Ana, Rel, Vision.
Les points sont des entiers positifs ou nuls. N'utilise aucune autre clé de force.

Retourne UNIQUEMENT un objet JSON avec ce schéma EXACT :
{
  "questions": [
    {
      "id": 1,
      "title": "Une mise en situation...",
      "category": "Travail d'équipe",
      "options": [
        {"id": "A", "text": "...", "points": {"Tech": 3, "Ana": 1}},
        {"id": "B", "text": "...", "points": {"Com": 3}},
        {"id": "C", "text": "...", "points": {"Créa": 2, "Vision": 1}},
        {"id": "D", "text": "...", "points": {"Struct": 3}}
      ]
    }
  ]
}"#;

pub fn build_quiz_prompt(count: usize, persona_context: &str, mode: &str) -> String {
    QUIZ_PROMPT_TEMPLATE
        .replace("{count}", &count.to_string())
        .replace("{persona}", persona_context)
        .replace("{mode}", mode)
}

pub fn quiz_system_prompt() -> String {
    format!(
        "{QUIZ_SYSTEM_ROLE} {}",
        crate::llm_client::prompts::JSON_ONLY_SYSTEM
    )
}
