use serde::Deserialize;

use crate::{
    core::{Process, Ticks},
    error::SimError,
};

/// Raw process descriptor as it comes from input files.
///
/// Arrival and burst stay signed so out-of-range values can be reported
/// instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProcessSpec {
    #[serde(alias = "Name", alias = "NAME", alias = "nome", alias = "Nome", alias = "NOME")]
    pub name: String,
    #[serde(
        alias = "Arrival",
        alias = "ARRIVAL",
        alias = "chegada",
        alias = "Chegada",
        alias = "CHEGADA"
    )]
    pub arrival: i64,
    #[serde(
        alias = "Burst",
        alias = "BURST",
        alias = "execucao",
        alias = "Execucao",
        alias = "EXECUCAO"
    )]
    pub burst: i64,
}

impl ProcessSpec {
    pub fn new(name: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            name: name.into(),
            arrival,
            burst,
        }
    }

    pub fn validate(&self) -> Result<Process, SimError> {
        if self.arrival < 0 {
            return Err(SimError::InvalidArrival {
                name: self.name.clone(),
                arrival: self.arrival,
            });
        }
        if self.burst <= 0 {
            return Err(SimError::InvalidBurst {
                name: self.name.clone(),
                burst: self.burst,
            });
        }
        Process::new(self.name.clone(), self.arrival as Ticks, self.burst as Ticks)
    }
}

impl TryFrom<&ProcessSpec> for Process {
    type Error = SimError;

    fn try_from(spec: &ProcessSpec) -> Result<Self, Self::Error> {
        spec.validate()
    }
}

/// The three-process workload used when no input is given.
pub fn default_example() -> Vec<ProcessSpec> {
    vec![
        ProcessSpec::new("P1", 0, 5),
        ProcessSpec::new("P2", 1, 3),
        ProcessSpec::new("P3", 2, 6),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_arrival_is_rejected() {
        let err = ProcessSpec::new("P1", -1, 3).validate().unwrap_err();
        assert_eq!(
            err,
            SimError::InvalidArrival {
                name: "P1".into(),
                arrival: -1
            }
        );
    }

    #[test]
    fn non_positive_burst_is_rejected() {
        for burst in [0, -4] {
            let err = ProcessSpec::new("P1", 0, burst).validate().unwrap_err();
            assert_eq!(
                err,
                SimError::InvalidBurst {
                    name: "P1".into(),
                    burst
                }
            );
        }
    }

    #[test]
    fn valid_spec_becomes_pending_process() {
        let p = Process::try_from(&ProcessSpec::new("P7", 4, 9)).unwrap();
        assert_eq!(p.name, "P7");
        assert_eq!((p.arrival, p.burst, p.remaining), (4, 9, 9));
        assert_eq!(p.start, None);
    }

    #[test]
    fn accepts_portuguese_and_upper_case_field_names() {
        let spec: ProcessSpec =
            serde_json::from_str(r#"{"Nome": "P1", "CHEGADA": 2, "execucao": 3}"#).unwrap();
        assert_eq!(spec, ProcessSpec::new("P1", 2, 3));
    }
}
