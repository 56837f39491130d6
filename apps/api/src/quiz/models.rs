use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::PartialScoreSet;

/// A single answer choice. `id` is unique within its question only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub points: PartialScoreSet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub title: String,
    /// Descriptive only; never used in scoring.
    #[serde(default)]
    pub category: String,
    pub options: Vec<QuizOption>,
}

/// Who is taking the quiz. Shapes the generation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    College,
    Lycee,
    Etudiant,
    Reconversion,
}

#[derive(Debug, Serialize)]
pub struct PersonaInfo {
    pub id: Persona,
    pub title: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    #[serde(skip)]
    pub prompt_context: &'static str,
}

pub const PERSONAS: &[PersonaInfo] = &[
    PersonaInfo {
        id: Persona::College,
        title: "Collégien·ne",
        description: "Je suis au collège et je découvre les métiers",
        emoji: "🎒",
        prompt_context: "collégien (découverte)",
    },
    PersonaInfo {
        id: Persona::Lycee,
        title: "Lycéen·ne",
        description: "Je suis au lycée et je prépare mon orientation",
        emoji: "📚",
        prompt_context: "lycéen (orientation BAC)",
    },
    PersonaInfo {
        id: Persona::Etudiant,
        title: "Étudiant·e",
        description: "Je suis dans le supérieur et je cherche ma voie",
        emoji: "🎓",
        prompt_context: "étudiant (spécialisation)",
    },
    PersonaInfo {
        id: Persona::Reconversion,
        title: "En reconversion",
        description: "Je veux changer de carrière vers la tech",
        emoji: "💼",
        prompt_context: "adulte en reconversion (recherche d'emploi)",
    },
];

impl Persona {
    pub fn info(self) -> &'static PersonaInfo {
        match self {
            Persona::College => &PERSONAS[0],
            Persona::Lycee => &PERSONAS[1],
            Persona::Etudiant => &PERSONAS[2],
            Persona::Reconversion => &PERSONAS[3],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizMode {
    Rapido,
    Pro,
}

#[derive(Debug, Serialize)]
pub struct QuizModeInfo {
    pub id: QuizMode,
    pub title: &'static str,
    pub questions_count: usize,
    pub duration: &'static str,
    pub description: &'static str,
}

pub const QUIZ_MODES: &[QuizModeInfo] = &[
    QuizModeInfo {
        id: QuizMode::Rapido,
        title: "Mode Rapido",
        questions_count: 15,
        duration: "~2 min",
        description: "Une première idée de ton profil avec un quiz rapide et fun.",
    },
    QuizModeInfo {
        id: QuizMode::Pro,
        title: "Mode Pro",
        questions_count: 55,
        duration: "~8 min",
        description: "Le diagnostic complet pour savoir quel métier est fait pour toi.",
    },
];

impl QuizMode {
    pub fn info(self) -> &'static QuizModeInfo {
        match self {
            QuizMode::Rapido => &QUIZ_MODES[0],
            QuizMode::Pro => &QUIZ_MODES[1],
        }
    }

    pub fn question_count(self) -> usize {
        self.info().questions_count
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QuizMode::Rapido => "rapido",
            QuizMode::Pro => "pro",
        }
    }
}

/// A generated quiz handed back to the client. Nothing is retained server-side.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedQuiz {
    pub quiz_id: Uuid,
    pub persona: Persona,
    pub mode: QuizMode,
    pub generated_at: DateTime<Utc>,
    pub source_backend: String, // "llm" | "static"
    pub questions: Vec<Question>,
}
