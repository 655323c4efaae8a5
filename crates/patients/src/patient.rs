use chrono::NaiveDate;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use medius_core::{DomainError, Entity, PatientId};

/// Oldest admissible age. Registrations above this are treated as data-entry
/// errors rather than accepted uncritically.
pub const MAX_PATIENT_AGE: u8 = 130;

/// Patient gender as captured on the admission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Patient care status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    Inpatient,
    Outpatient,
    Discharged,
}

impl FromStr for PatientStatus {
    type Err = DomainError;

    /// Closed set: unrecognized status strings are rejected instead of
    /// silently accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inpatient" => Ok(Self::Inpatient),
            "outpatient" => Ok(Self::Outpatient),
            "discharged" => Ok(Self::Discharged),
            other => Err(DomainError::validation(format!(
                "unknown patient status: {other:?}"
            ))),
        }
    }
}

impl core::fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Inpatient => write!(f, "Inpatient"),
            Self::Outpatient => write!(f, "Outpatient"),
            Self::Discharged => write!(f, "Discharged"),
        }
    }
}

/// Command: RegisterPatient.
///
/// The admission date is supplied by the caller (the UI passes "today");
/// commands carry their own timestamps so tests stay deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterPatient {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub status: PatientStatus,
    pub insurance_provider: String,
    pub admission_date: NaiveDate,
}

/// Patient record.
///
/// Created through [`Patient::register`] and never mutated or deleted
/// afterwards; status changes are out of scope for this module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    id: PatientId,
    name: String,
    age: u8,
    gender: Gender,
    status: PatientStatus,
    insurance_provider: String,
    admission_date: NaiveDate,
}

impl Patient {
    /// Validate a registration command and build the record.
    ///
    /// Rejections: blank name, age above [`MAX_PATIENT_AGE`].
    pub fn register(id: PatientId, cmd: RegisterPatient) -> Result<Self, DomainError> {
        let name = cmd.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("patient name cannot be empty"));
        }
        if cmd.age > MAX_PATIENT_AGE {
            return Err(DomainError::validation(format!(
                "patient age {} exceeds maximum {}",
                cmd.age, MAX_PATIENT_AGE
            )));
        }

        Ok(Self {
            id,
            name: name.to_string(),
            age: cmd.age,
            gender: cmd.gender,
            status: cmd.status,
            insurance_provider: cmd.insurance_provider.trim().to_string(),
            admission_date: cmd.admission_date,
        })
    }

    pub fn id_typed(&self) -> PatientId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn status(&self) -> PatientStatus {
        self.status
    }

    pub fn insurance_provider(&self) -> &str {
        &self.insurance_provider
    }

    pub fn admission_date(&self) -> NaiveDate {
        self.admission_date
    }

    /// Patients still under care (anyone not discharged).
    pub fn is_active(&self) -> bool {
        self.status != PatientStatus::Discharged
    }
}

impl Entity for Patient {
    type Id = PatientId;

    fn id(&self) -> PatientId {
        self.id
    }
}
