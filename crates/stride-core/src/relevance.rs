//! Device-type relevance table.
//!
//! Declares which type-conditional clinical attributes are meaningful for
//! each [`DeviceType`]. The editor hides irrelevant inputs with it and
//! nulls them out before a record is persisted. Adding a device type means
//! adding a row here, not a new branch in the editor.

use crate::models::{
    ActivityLevel, ClinicalAttributes, ClinicalField, DeviceType, MaterialType,
    ProstheticDetails, ProstheticRecord,
};

use ClinicalField::*;

/// The set of clinical fields a device type cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relevance {
    /// Every clinical field may apply.
    All,
    Only(&'static [ClinicalField]),
}

impl Relevance {
    pub fn contains(self, field: ClinicalField) -> bool {
        match self {
            Relevance::All => true,
            Relevance::Only(fields) => fields.contains(&field),
        }
    }
}

const LOWER_LIMB_BELOW_KNEE: &[ClinicalField] = &[
    ResidualLimbLength,
    FootType,
    SuspensionSystem,
    Alignment,
    SocketFit,
    RangeOfMotionMin,
    RangeOfMotionMax,
    Stiffness,
    ShockAbsorptionEnergy,
];

const LOWER_LIMB_WITH_KNEE: &[ClinicalField] = &[
    ResidualLimbLength,
    KneeType,
    FootType,
    SuspensionSystem,
    ControlSystem,
    Alignment,
    SocketFit,
    RangeOfMotionMin,
    RangeOfMotionMax,
    Stiffness,
    ShockAbsorptionEnergy,
];

/// One row per device type.
pub static RELEVANCE_MAP: &[(DeviceType, Relevance)] = &[
    (DeviceType::Transtibial, Relevance::Only(LOWER_LIMB_BELOW_KNEE)),
    (DeviceType::Transfemoral, Relevance::Only(LOWER_LIMB_WITH_KNEE)),
    (
        DeviceType::PartialFoot,
        Relevance::Only(&[
            FootType,
            SuspensionSystem,
            Alignment,
            SocketFit,
            RangeOfMotionMin,
            RangeOfMotionMax,
            Stiffness,
        ]),
    ),
    (DeviceType::Syme, Relevance::Only(LOWER_LIMB_BELOW_KNEE)),
    (DeviceType::KneeDisarticulation, Relevance::Only(LOWER_LIMB_WITH_KNEE)),
    (
        DeviceType::HipDisarticulation,
        Relevance::Only(&[
            PelvicSocket,
            KneeType,
            FootType,
            SuspensionSystem,
            ControlSystem,
            Alignment,
            SocketFit,
            RangeOfMotionMin,
            RangeOfMotionMax,
            Stiffness,
            ShockAbsorptionEnergy,
        ]),
    ),
    (
        DeviceType::Transhumeral,
        Relevance::Only(&[
            ResidualLimbLength,
            ControlSystem,
            SuspensionSystem,
            Alignment,
            SocketFit,
            RangeOfMotionMin,
            RangeOfMotionMax,
            Stiffness,
        ]),
    ),
    (
        DeviceType::Transradial,
        Relevance::Only(&[
            ResidualLimbLength,
            ControlSystem,
            SuspensionSystem,
            Alignment,
            SocketFit,
            GripStrength,
        ]),
    ),
    (
        DeviceType::Hand,
        Relevance::Only(&[ControlSystem, SuspensionSystem, Alignment, SocketFit, GripStrength]),
    ),
    (
        DeviceType::ShoulderDisarticulation,
        Relevance::Only(&[
            ControlSystem,
            SuspensionSystem,
            Alignment,
            SocketFit,
            RangeOfMotionMin,
            RangeOfMotionMax,
            Stiffness,
        ]),
    ),
    (
        DeviceType::Finger,
        Relevance::Only(&[
            ResidualLimbLength,
            Alignment,
            GripStrength,
            RangeOfMotionMin,
            RangeOfMotionMax,
        ]),
    ),
    (DeviceType::Toe, Relevance::Only(&[ResidualLimbLength, Alignment])),
    (DeviceType::Other, Relevance::All),
];

/// Look up a device type's row. A type without a row has no relevant fields.
pub fn relevance(device_type: DeviceType) -> Relevance {
    RELEVANCE_MAP
        .iter()
        .find(|(t, _)| *t == device_type)
        .map(|(_, r)| *r)
        .unwrap_or(Relevance::Only(&[]))
}

pub fn is_relevant(field: ClinicalField, device_type: DeviceType) -> bool {
    relevance(device_type).contains(field)
}

/// Relevant fields in declaration order.
pub fn relevant_fields(device_type: DeviceType) -> Vec<ClinicalField> {
    let relevance = relevance(device_type);
    ClinicalField::ALL
        .into_iter()
        .filter(|f| relevance.contains(*f))
        .collect()
}

impl ClinicalAttributes {
    /// Null every attribute the device type does not use, and every
    /// `other_*` override whose value is not `Other`.
    pub fn prune_for(&mut self, device_type: DeviceType) {
        let relevance = relevance(device_type);
        for field in ClinicalField::ALL {
            if !relevance.contains(field) {
                self.clear(field);
            }
        }
        self.clear_stale_overrides();
    }
}

impl ProstheticDetails {
    pub fn prune_for(&mut self, device_type: DeviceType) {
        if device_type != DeviceType::Other {
            self.other_type = None;
        }
        if self.material != Some(MaterialType::Other) {
            self.other_material = None;
        }
        if self.activity_level != Some(ActivityLevel::Other) {
            self.other_activity_level = None;
        }
        self.attributes.prune_for(device_type);
    }
}

impl ProstheticRecord {
    /// Relevance pruning for the record's own type, including the digit
    /// position fields. Idempotent.
    pub fn prune(&mut self) {
        let position = self.position();
        self.set_position(position);
        self.details.prune_for(self.device_type);
    }

    pub fn pruned(mut self) -> Self {
        self.prune();
        self
    }
}
