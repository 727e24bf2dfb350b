//! Question descriptors
//!
//! The questionnaire is static configuration: five questions in a fixed
//! order, each mapped to one term of the procrastination equation (except
//! the first, which names the task itself).

use crate::equation::EquationVariable;
use serde::{Deserialize, Serialize};

/// Identifying key of a question (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKey {
    Tarefa,
    Expectativa,
    Valor,
    Tempo,
    Impulsividade,
}

impl QuestionKey {
    /// All keys in questionnaire order
    pub const ALL: [QuestionKey; 5] = [
        QuestionKey::Tarefa,
        QuestionKey::Expectativa,
        QuestionKey::Valor,
        QuestionKey::Tempo,
        QuestionKey::Impulsividade,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKey::Tarefa => "tarefa",
            QuestionKey::Expectativa => "expectativa",
            QuestionKey::Valor => "valor",
            QuestionKey::Tempo => "tempo",
            QuestionKey::Impulsividade => "impulsividade",
        }
    }

    /// Label used for this answer when composing the diagnostic prompt
    pub fn prompt_label(&self) -> &'static str {
        match self {
            QuestionKey::Tarefa => "Tarefa",
            QuestionKey::Expectativa => "Expectativa (Confiança)",
            QuestionKey::Valor => "Valor (Recompensa)",
            QuestionKey::Tempo => "Tempo (Prazo)",
            QuestionKey::Impulsividade => "Impulsividade (Distrações)",
        }
    }

    /// The equation variable this question measures, if any
    pub fn variable(&self) -> Option<EquationVariable> {
        match self {
            QuestionKey::Tarefa => None,
            QuestionKey::Expectativa => Some(EquationVariable::Expectativa),
            QuestionKey::Valor => Some(EquationVariable::Valor),
            QuestionKey::Tempo => Some(EquationVariable::Tempo),
            QuestionKey::Impulsividade => Some(EquationVariable::Impulsividade),
        }
    }
}

impl std::fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static descriptor of one questionnaire step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub key: QuestionKey,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub placeholder: &'static str,
}

/// The questionnaire, in the order it is presented
pub const QUESTIONS: [Question; 5] = [
    Question {
        key: QuestionKey::Tarefa,
        title: "Qual tarefa você está procrastinando?",
        subtitle: "Seja específico. Exemplo: \"Criar apresentação de vendas para cliente X\"",
        placeholder: "Descreva a tarefa em detalhes...",
    },
    Question {
        key: QuestionKey::Expectativa,
        title: "Qual sua confiança de conseguir completar?",
        subtitle: "De 0 a 10, quão capaz você se sente para fazer isso? Por quê?",
        placeholder: "Exemplo: \"6/10 - Tenho conhecimento, mas falta prática com a ferramenta...\"",
    },
    Question {
        key: QuestionKey::Valor,
        title: "Qual o valor/recompensa desta tarefa?",
        subtitle: "O que você ganha completando? Como isso ajuda seus objetivos?",
        placeholder: "Exemplo: \"Fechar contrato de R$50k, avançar na carreira, reduzir ansiedade...\"",
    },
    Question {
        key: QuestionKey::Tempo,
        title: "Quando é o prazo? Qual sua relação com ele?",
        subtitle: "Data limite e como você se sente sobre esse prazo.",
        placeholder: "Exemplo: \"Sexta-feira próxima. Parece distante, mas sei que é pouco tempo...\"",
    },
    Question {
        key: QuestionKey::Impulsividade,
        title: "O que te distrai desta tarefa?",
        subtitle: "Liste suas principais fontes de distração e por que são atraentes.",
        placeholder: "Exemplo: \"Redes sociais, notificações, vídeos no YouTube. São fáceis e dão prazer imediato...\"",
    },
];

/// Index of the last questionnaire step
pub const LAST_STEP: usize = QUESTIONS.len() - 1;
