use crate::{field::poses::start_position, foundation::core::Pose};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Alliance {
    #[default]
    Red,
    Blue,
}

impl Alliance {
    /// Mirror factor applied to canonical y coordinates and headings.
    pub fn sign(self) -> f64 {
        match self {
            Self::Red => -1.0,
            Self::Blue => 1.0,
        }
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    #[default]
    North,
    South,
}

/// Per-robot field context. Each robot owns one; nothing reads another robot's.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct AllianceContext {
    pub alliance: Alliance,
    pub side: Side,
}

impl AllianceContext {
    pub fn new(alliance: Alliance, side: Side) -> Self {
        Self { alliance, side }
    }

    pub fn sign(self) -> f64 {
        self.alliance.sign()
    }

    pub fn start_pose(self) -> Pose {
        start_position(self.alliance, self.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signs_mirror_red_against_blue() {
        assert_eq!(Alliance::Red.sign(), -1.0);
        assert_eq!(Alliance::Blue.sign(), 1.0);
    }

    #[test]
    fn context_uses_uppercase_names() {
        let ctx: AllianceContext =
            serde_json::from_str(r#"{"alliance":"BLUE","side":"SOUTH"}"#).unwrap();
        assert_eq!(ctx, AllianceContext::new(Alliance::Blue, Side::South));
    }
}
