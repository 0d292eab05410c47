use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Prosthetic device category. Serialized as the variant name, which is
/// also what the records backend stores.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum DeviceType {
    /// Below-knee.
    Transtibial,
    /// Above-knee.
    Transfemoral,
    PartialFoot,
    /// Ankle disarticulation.
    Syme,
    KneeDisarticulation,
    HipDisarticulation,
    /// Above-elbow.
    Transhumeral,
    /// Below-elbow.
    Transradial,
    Hand,
    ShoulderDisarticulation,
    Finger,
    Toe,
    /// Escape hatch for devices the taxonomy does not model.
    Other,
}

impl DeviceType {
    pub const ALL: [DeviceType; 13] = [
        DeviceType::Transtibial,
        DeviceType::Transfemoral,
        DeviceType::PartialFoot,
        DeviceType::Syme,
        DeviceType::KneeDisarticulation,
        DeviceType::HipDisarticulation,
        DeviceType::Transhumeral,
        DeviceType::Transradial,
        DeviceType::Hand,
        DeviceType::ShoulderDisarticulation,
        DeviceType::Finger,
        DeviceType::Toe,
        DeviceType::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DeviceType::Transtibial => "Transtibial",
            DeviceType::Transfemoral => "Transfemoral",
            DeviceType::PartialFoot => "Partial Foot",
            DeviceType::Syme => "Syme",
            DeviceType::KneeDisarticulation => "Knee Disarticulation",
            DeviceType::HipDisarticulation => "Hip Disarticulation",
            DeviceType::Transhumeral => "Transhumeral",
            DeviceType::Transradial => "Transradial",
            DeviceType::Hand => "Hand",
            DeviceType::ShoulderDisarticulation => "Shoulder Disarticulation",
            DeviceType::Finger => "Finger",
            DeviceType::Toe => "Toe",
            DeviceType::Other => "Other",
        }
    }

    /// The sub-position family for digit types, if any.
    pub fn position_kind(self) -> Option<PositionKind> {
        match self {
            DeviceType::Finger => Some(PositionKind::Finger),
            DeviceType::Toe => Some(PositionKind::Toe),
            _ => None,
        }
    }
}

/// Side of the body a device is fitted to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum Side {
    Left,
    Right,
    /// Covers both `Left` and `Right`.
    Bilateral,
    Unknown,
}

impl Side {
    /// Sides a user can pick, in the order they are offered.
    pub const SELECTABLE: [Side; 3] = [Side::Left, Side::Right, Side::Bilateral];

    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
            Side::Bilateral => "Bilateral",
            Side::Unknown => "Unknown",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum FingerPosition {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl FingerPosition {
    pub const ALL: [FingerPosition; 5] = [
        FingerPosition::Thumb,
        FingerPosition::Index,
        FingerPosition::Middle,
        FingerPosition::Ring,
        FingerPosition::Pinky,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FingerPosition::Thumb => "Thumb",
            FingerPosition::Index => "Index",
            FingerPosition::Middle => "Middle",
            FingerPosition::Ring => "Ring",
            FingerPosition::Pinky => "Pinky",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum ToePosition {
    BigToe,
    SecondToe,
    MiddleToe,
    FourthToe,
    LittleToe,
}

impl ToePosition {
    pub const ALL: [ToePosition; 5] = [
        ToePosition::BigToe,
        ToePosition::SecondToe,
        ToePosition::MiddleToe,
        ToePosition::FourthToe,
        ToePosition::LittleToe,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ToePosition::BigToe => "Big Toe",
            ToePosition::SecondToe => "Second Toe",
            ToePosition::MiddleToe => "Middle Toe",
            ToePosition::FourthToe => "Fourth Toe",
            ToePosition::LittleToe => "Little Toe",
        }
    }
}

/// Which enumeration subdivides a digit device type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PositionKind {
    Finger,
    Toe,
}

impl PositionKind {
    /// Every position of this family, in display order.
    pub fn positions(self) -> Vec<Position> {
        match self {
            PositionKind::Finger => FingerPosition::ALL.into_iter().map(Position::Finger).collect(),
            PositionKind::Toe => ToePosition::ALL.into_iter().map(Position::Toe).collect(),
        }
    }
}

/// A digit sub-slot. Only meaningful for `Finger` and `Toe` devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Position {
    Finger(FingerPosition),
    Toe(ToePosition),
}

impl Position {
    pub fn kind(self) -> PositionKind {
        match self {
            Position::Finger(_) => PositionKind::Finger,
            Position::Toe(_) => PositionKind::Toe,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Position::Finger(p) => p.label(),
            Position::Toe(p) => p.label(),
        }
    }
}
