//! Diagnosis report value objects

use serde::{Deserialize, Serialize};

/// One section of the four-part response contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseSection {
    Diagnostico,
    Equacao,
    Recomendacao,
    Acao,
}

impl ResponseSection {
    /// Sections in the order the model is asked to produce them
    pub const ALL: [ResponseSection; 4] = [
        ResponseSection::Diagnostico,
        ResponseSection::Equacao,
        ResponseSection::Recomendacao,
        ResponseSection::Acao,
    ];

    /// Bracketed marker the model uses as the section heading
    pub fn marker(&self) -> &'static str {
        match self {
            ResponseSection::Diagnostico => "[DIAGNÓSTICO]",
            ResponseSection::Equacao => "[EQUAÇÃO]",
            ResponseSection::Recomendacao => "[RECOMENDAÇÃO]",
            ResponseSection::Acao => "[AÇÃO]",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ResponseSection::Diagnostico => "Diagnóstico",
            ResponseSection::Equacao => "Equação",
            ResponseSection::Recomendacao => "Recomendação",
            ResponseSection::Acao => "Ação",
        }
    }

    /// What the step contributes, as explained on the landing page
    pub fn summary(&self) -> &'static str {
        match self {
            ResponseSection::Diagnostico => {
                "Respondemos perguntas específicas sobre seu contexto e tarefa."
            }
            ResponseSection::Equacao => "Analisamos suas respostas através da fórmula científica.",
            ResponseSection::Recomendacao => {
                "Identificamos qual variável intervir para máximo impacto."
            }
            ResponseSection::Acao => {
                "Recebe passos concretos e mensuráveis para executar agora."
            }
        }
    }
}

/// The model's answer to a submitted questionnaire (Value Object)
///
/// `html` is always the renderer's output for exactly `markdown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    markdown: String,
    html: String,
}

impl Diagnosis {
    pub fn new(markdown: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            markdown: markdown.into(),
            html: html.into(),
        }
    }

    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    /// Sections of the response contract the model left out
    pub fn missing_sections(&self) -> Vec<ResponseSection> {
        ResponseSection::ALL
            .into_iter()
            .filter(|s| !self.markdown.contains(s.marker()))
            .collect()
    }
}
