pub mod clinical;
pub mod device;
pub mod prosthetic;
pub mod roster;

pub use clinical::{
    ActivityLevel, Alignment, ClinicalAttributes, ClinicalField, ControlSystem, FootType,
    KneeType, MaterialType, PelvicSocket, SocketFit, SuspensionSystem, UserAdaptation,
};
pub use device::{DeviceType, FingerPosition, Position, PositionKind, Side, ToePosition};
pub use prosthetic::{PatientId, ProstheticDetails, ProstheticRecord, RecordId};
pub use roster::Roster;
