//! Optimization model catalog
//!
//! Identifiers accepted by the model-selection widget and the solver set-up
//! the backend uses for each of them.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Models preselected on the overview step.
pub const DEFAULT_MODELS: [ModelId; 2] = [ModelId::Osqp, ModelId::Qio];

/// Optimization model identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelId {
    /// Classical mean-variance via PyPortfolioOpt
    Pypo,
    /// Classical quadratic program via OSQP
    Osqp,
    /// Azure quantum-inspired optimization
    Qio,
    /// QAOA on the Qiskit simulator
    Qiskit,
    /// QAOA on the IonQ simulator through Azure
    Ionq,
}

impl ModelId {
    pub const ALL: [ModelId; 5] = [
        ModelId::Pypo,
        ModelId::Osqp,
        ModelId::Qio,
        ModelId::Qiskit,
        ModelId::Ionq,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::Pypo => "pypo",
            ModelId::Osqp => "osqp",
            ModelId::Qio => "qio",
            ModelId::Qiskit => "qiskit",
            ModelId::Ionq => "ionq",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModelId::Pypo => "PyPortfolioOpt",
            ModelId::Osqp => "OSQP",
            ModelId::Qio => "Azure QIO",
            ModelId::Qiskit => "Qiskit QAOA",
            ModelId::Ionq => "IonQ QAOA",
        }
    }

    pub fn provider(&self) -> Provider {
        match self {
            ModelId::Pypo => Provider::Pypfopt,
            ModelId::Osqp => Provider::Osqp,
            ModelId::Qio => Provider::AzureQuantumQio,
            ModelId::Qiskit => Provider::QiskitIbm,
            ModelId::Ionq => Provider::AzureIonq,
        }
    }

    pub fn solver_config(&self) -> SolverConfig {
        match self {
            ModelId::Qio => SolverConfig {
                algorithm: "PA".to_string(),
                timeout_secs: Some(1),
                hardware: Some("FPGA".to_string()),
                resolution: Some(1),
            },
            ModelId::Qiskit | ModelId::Ionq => SolverConfig {
                algorithm: "QAOA".to_string(),
                timeout_secs: None,
                hardware: None,
                resolution: Some(1),
            },
            ModelId::Pypo | ModelId::Osqp => SolverConfig {
                algorithm: self.as_str().to_string(),
                ..Default::default()
            },
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelId::ALL
            .into_iter()
            .find(|m| m.as_str() == s.trim())
            .ok_or_else(|| Error::UnknownModel(s.to_string()))
    }
}

/// Service that executes a model's job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    Pypfopt,
    Osqp,
    AzureQuantumQio,
    QiskitIbm,
    AzureIonq,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Pypfopt => "pypfopt",
            Provider::Osqp => "osqp",
            Provider::AzureQuantumQio => "azure_quantum_qio",
            Provider::QiskitIbm => "qiskit_ibm",
            Provider::AzureIonq => "azure_ionq",
        }
    }
}

/// Solver set-up for one model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    pub algorithm: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware: Option<String>,
    /// Discretization of the QUBO encoding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<u32>,
}
