//! The procrastination equation (Piers Steel)
//!
//! Procrastinação = Impulsividade ÷ [Expectativa × Valor × (1 ÷ Tempo)]

use serde::{Deserialize, Serialize};

/// Human-readable form of the equation
pub const EQUATION_FORMULA: &str =
    "Procrastinação = Impulsividade ÷ [Expectativa × Valor × (1 ÷ Tempo)]";

/// Which way a variable pushes procrastination when it grows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Increases,
    Reduces,
}

impl Effect {
    pub fn label(&self) -> &'static str {
        match self {
            Effect::Increases => "↑ Aumenta procrastinação",
            Effect::Reduces => "↓ Reduz procrastinação",
        }
    }
}

/// A term of the equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationVariable {
    Impulsividade,
    Expectativa,
    Valor,
    Tempo,
}

impl EquationVariable {
    /// Variables in the order they are explained on the landing page
    pub const ALL: [EquationVariable; 4] = [
        EquationVariable::Impulsividade,
        EquationVariable::Expectativa,
        EquationVariable::Valor,
        EquationVariable::Tempo,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EquationVariable::Impulsividade => "Impulsividade",
            EquationVariable::Expectativa => "Expectativa",
            EquationVariable::Valor => "Valor",
            EquationVariable::Tempo => "Tempo",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EquationVariable::Impulsividade => {
                "Sua tendência a distrações e gratificação imediata."
            }
            EquationVariable::Expectativa => {
                "Sua confiança de que conseguirá completar a tarefa."
            }
            EquationVariable::Valor => "Quão recompensadora é a tarefa para você.",
            EquationVariable::Tempo => "Quanto tempo até o prazo final.",
        }
    }

    /// Impulsividade sits in the numerator and Tempo in a nested
    /// denominator, so both grow procrastination; the others shrink it.
    pub fn effect(&self) -> Effect {
        match self {
            EquationVariable::Impulsividade | EquationVariable::Tempo => Effect::Increases,
            EquationVariable::Expectativa | EquationVariable::Valor => Effect::Reduces,
        }
    }
}

impl std::fmt::Display for EquationVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
