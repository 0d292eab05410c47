use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Alignment {
    Static,
    Dynamic,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SuspensionSystem {
    Suction,
    VacuumAssisted,
    PinLock,
    Straps,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FootType {
    /// Solid ankle cushion heel.
    #[serde(rename = "SACH")]
    Sach,
    DynamicResponse,
    Multiaxial,
    EnergyStoring,
    Microprocessor,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum KneeType {
    Mechanical,
    Hydraulic,
    Pneumatic,
    MicroprocessorControlled,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MaterialType {
    CarbonFiber,
    Titanium,
    PlasticComposite,
    Aluminum,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ControlSystem {
    Mechanical,
    Hybrid,
    MicroprocessorControlled,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
    Athletic,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PelvicSocket {
    Rigid,
    Flexible,
    Adjustable,
    VacuumAssisted,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SocketFit {
    Perfect,
    SlightDiscomfort,
    Loose,
    Painful,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum UserAdaptation {
    Poor,
    Moderate,
    Good,
    Excellent,
    Unknown,
}

/// A type-conditional clinical attribute. Which of these apply to a device
/// is declared by the relevance table in [`crate::relevance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum ClinicalField {
    ResidualLimbLength,
    FootType,
    KneeType,
    PelvicSocket,
    SuspensionSystem,
    ControlSystem,
    Alignment,
    SocketFit,
    Stiffness,
    GripStrength,
    RangeOfMotionMin,
    RangeOfMotionMax,
    ShockAbsorptionEnergy,
}

impl ClinicalField {
    pub const ALL: [ClinicalField; 13] = [
        ClinicalField::ResidualLimbLength,
        ClinicalField::FootType,
        ClinicalField::KneeType,
        ClinicalField::PelvicSocket,
        ClinicalField::SuspensionSystem,
        ClinicalField::ControlSystem,
        ClinicalField::Alignment,
        ClinicalField::SocketFit,
        ClinicalField::Stiffness,
        ClinicalField::GripStrength,
        ClinicalField::RangeOfMotionMin,
        ClinicalField::RangeOfMotionMax,
        ClinicalField::ShockAbsorptionEnergy,
    ];

    /// Wire name of the field, as used in field-level error paths.
    pub fn name(self) -> &'static str {
        match self {
            ClinicalField::ResidualLimbLength => "residualLimbLength",
            ClinicalField::FootType => "footType",
            ClinicalField::KneeType => "kneeType",
            ClinicalField::PelvicSocket => "pelvicSocket",
            ClinicalField::SuspensionSystem => "suspensionSystem",
            ClinicalField::ControlSystem => "controlSystem",
            ClinicalField::Alignment => "alignment",
            ClinicalField::SocketFit => "socketFit",
            ClinicalField::Stiffness => "stiffness",
            ClinicalField::GripStrength => "gripStrength",
            ClinicalField::RangeOfMotionMin => "rangeOfMotionMin",
            ClinicalField::RangeOfMotionMax => "rangeOfMotionMax",
            ClinicalField::ShockAbsorptionEnergy => "shockAbsorptionEnergy",
        }
    }
}

/// Type-conditional attributes of a prosthetic. Enumerated values carry a
/// free-text `other_*` override that is only meaningful when the value is
/// `Other`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClinicalAttributes {
    /// Residual limb length in cm.
    pub residual_limb_length: Option<f64>,
    pub foot_type: Option<FootType>,
    pub other_foot_type: Option<String>,
    pub knee_type: Option<KneeType>,
    pub other_knee_type: Option<String>,
    pub pelvic_socket: Option<PelvicSocket>,
    pub other_pelvic_socket: Option<String>,
    pub suspension_system: Option<SuspensionSystem>,
    pub other_suspension_system: Option<String>,
    pub control_system: Option<ControlSystem>,
    pub other_control_system: Option<String>,
    pub alignment: Option<Alignment>,
    pub other_alignment: Option<String>,
    pub socket_fit: Option<SocketFit>,
    /// N/m for feet, Nm/° for knees and elbows.
    pub stiffness: Option<f64>,
    /// Grip strength in N.
    pub grip_strength: Option<f64>,
    /// Degrees.
    pub range_of_motion_min: Option<f64>,
    /// Degrees.
    pub range_of_motion_max: Option<f64>,
    pub shock_absorption_energy: Option<f64>,
}

impl ClinicalAttributes {
    pub fn is_set(&self, field: ClinicalField) -> bool {
        match field {
            ClinicalField::ResidualLimbLength => self.residual_limb_length.is_some(),
            ClinicalField::FootType => self.foot_type.is_some(),
            ClinicalField::KneeType => self.knee_type.is_some(),
            ClinicalField::PelvicSocket => self.pelvic_socket.is_some(),
            ClinicalField::SuspensionSystem => self.suspension_system.is_some(),
            ClinicalField::ControlSystem => self.control_system.is_some(),
            ClinicalField::Alignment => self.alignment.is_some(),
            ClinicalField::SocketFit => self.socket_fit.is_some(),
            ClinicalField::Stiffness => self.stiffness.is_some(),
            ClinicalField::GripStrength => self.grip_strength.is_some(),
            ClinicalField::RangeOfMotionMin => self.range_of_motion_min.is_some(),
            ClinicalField::RangeOfMotionMax => self.range_of_motion_max.is_some(),
            ClinicalField::ShockAbsorptionEnergy => self.shock_absorption_energy.is_some(),
        }
    }

    /// Null a field together with its `other_*` override, if it has one.
    pub fn clear(&mut self, field: ClinicalField) {
        match field {
            ClinicalField::ResidualLimbLength => self.residual_limb_length = None,
            ClinicalField::FootType => {
                self.foot_type = None;
                self.other_foot_type = None;
            }
            ClinicalField::KneeType => {
                self.knee_type = None;
                self.other_knee_type = None;
            }
            ClinicalField::PelvicSocket => {
                self.pelvic_socket = None;
                self.other_pelvic_socket = None;
            }
            ClinicalField::SuspensionSystem => {
                self.suspension_system = None;
                self.other_suspension_system = None;
            }
            ClinicalField::ControlSystem => {
                self.control_system = None;
                self.other_control_system = None;
            }
            ClinicalField::Alignment => {
                self.alignment = None;
                self.other_alignment = None;
            }
            ClinicalField::SocketFit => self.socket_fit = None,
            ClinicalField::Stiffness => self.stiffness = None,
            ClinicalField::GripStrength => self.grip_strength = None,
            ClinicalField::RangeOfMotionMin => self.range_of_motion_min = None,
            ClinicalField::RangeOfMotionMax => self.range_of_motion_max = None,
            ClinicalField::ShockAbsorptionEnergy => self.shock_absorption_energy = None,
        }
    }

    /// Drop every `other_*` override whose enumerated value is not `Other`.
    pub fn clear_stale_overrides(&mut self) {
        if self.foot_type != Some(FootType::Other) {
            self.other_foot_type = None;
        }
        if self.knee_type != Some(KneeType::Other) {
            self.other_knee_type = None;
        }
        if self.pelvic_socket != Some(PelvicSocket::Other) {
            self.other_pelvic_socket = None;
        }
        if self.suspension_system != Some(SuspensionSystem::Other) {
            self.other_suspension_system = None;
        }
        if self.control_system != Some(ControlSystem::Other) {
            self.other_control_system = None;
        }
        if self.alignment != Some(Alignment::Other) {
            self.other_alignment = None;
        }
    }
}
