use crate::{
    field::poses::NamedPose,
    geometry::offset::{Axial, Lateral},
};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Near,
    Far,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Near => "near",
            Self::Far => "far",
        }
    }

    pub fn launch_pose(self) -> NamedPose {
        match self {
            Self::Near => NamedPose::LaunchNear,
            Self::Far => NamedPose::LaunchFar,
        }
    }
}

/// Intake source selected by the intake block's index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Spike {
    Human,
    Near,
    Middle,
    Far,
}

impl Spike {
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::Human),
            1 => Some(Self::Near),
            2 => Some(Self::Middle),
            3 => Some(Self::Far),
            _ => None,
        }
    }

    pub fn pose(self) -> NamedPose {
        match self {
            Self::Human => NamedPose::LoadingZone,
            Self::Near => NamedPose::SpikeNear,
            Self::Middle => NamedPose::SpikeMiddle,
            Self::Far => NamedPose::SpikeFar,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "Human Intake",
            Self::Near => "Intake Near",
            Self::Middle => "Intake Mid",
            Self::Far => "Intake Far",
        }
    }
}

/// One route step as built in the editor.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Command {
    Drive {
        tx: f64, // tiles
        ty: f64, // tiles
        heading_deg: f64,
        #[serde(default)]
        axial: Axial,
        #[serde(default)]
        lateral: Lateral,
    },
    IntakeRow {
        spike: i64, // 0 = human loading zone, 1..=3 = spike marks
    },
    IntakeHuman,
    Deposit {
        locale: Locale,
        #[serde(default)]
        sorted: bool,
        #[serde(default)]
        txo: f64, // tiles
        #[serde(default)]
        tyo: f64, // tiles
    },
    Delay {
        seconds: f64,
    },
    ReleaseGate,
    /// A block kind this crate has no resolver for. Kept so positions stay stable.
    Unrecognized {
        block: String,
    },
}

impl Command {
    pub fn drive(tx: f64, ty: f64, heading_deg: f64) -> Self {
        Self::Drive {
            tx,
            ty,
            heading_deg,
            axial: Axial::Center,
            lateral: Lateral::Center,
        }
    }

    pub fn deposit(locale: Locale, txo: f64, tyo: f64) -> Self {
        Self::Deposit {
            locale,
            sorted: false,
            txo,
            tyo,
        }
    }

    /// Editor block kind this command comes from.
    pub fn block_kind(&self) -> &str {
        match self {
            Self::Drive { .. } => "drive_to",
            Self::IntakeRow { .. } => "intake_row",
            Self::IntakeHuman => "intake_human",
            Self::Deposit { .. } => "deposit",
            Self::Delay { .. } => "delay_s",
            Self::ReleaseGate => "release_gate",
            Self::Unrecognized { block } => block,
        }
    }
}
