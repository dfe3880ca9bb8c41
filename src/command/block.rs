use std::collections::BTreeMap;

use crate::{
    command::model::{Command, Locale},
    foundation::math::{coerce_number, exact_index},
    geometry::offset::{Axial, Lateral},
};

/// Read access to one block of the editor's statement chain.
pub trait BlockRecord {
    fn kind(&self) -> &str;
    fn field(&self, name: &str) -> Option<&str>;
}

/// Owned block record, used when the editor state arrives as JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Block {
    pub kind: String,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl Block {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }
}

impl BlockRecord for Block {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RobotRole {
    Primary,
    Partner,
}

impl RobotRole {
    /// Kind of the block that heads this robot's chain.
    pub fn start_marker(self) -> &'static str {
        match self {
            Self::Primary => "start",
            Self::Partner => "partner_start",
        }
    }
}

fn number<B: BlockRecord + ?Sized>(block: &B, name: &str) -> f64 {
    block.field(name).map(coerce_number).unwrap_or(0.0)
}

fn axial<B: BlockRecord + ?Sized>(block: &B) -> Axial {
    match block.field("Axial").map(str::trim) {
        Some("front") => Axial::Front,
        Some("back") => Axial::Back,
        _ => Axial::Center,
    }
}

fn lateral<B: BlockRecord + ?Sized>(block: &B) -> Lateral {
    match block.field("Lateral").map(str::trim) {
        Some("left") => Lateral::Left,
        Some("right") => Lateral::Right,
        _ => Lateral::Center,
    }
}

impl Command {
    /// Converts an editor block. Missing or non-numeric fields read as 0; block kinds
    /// without a command become [`Command::Unrecognized`].
    pub fn from_block<B: BlockRecord + ?Sized>(block: &B) -> Self {
        match block.kind() {
            "drive_to" => Self::Drive {
                tx: number(block, "tx"),
                ty: number(block, "ty"),
                heading_deg: number(block, "h"),
                axial: axial(block),
                lateral: lateral(block),
            },
            "intake_row" => Self::IntakeRow {
                spike: exact_index(number(block, "spike")),
            },
            "intake_human" => Self::IntakeHuman,
            "deposit" => Self::Deposit {
                locale: match block.field("locale").map(str::trim) {
                    Some("near") => Locale::Near,
                    _ => Locale::Far,
                },
                sorted: block.field("sorted").map(str::trim) == Some("true"),
                txo: number(block, "txo"),
                tyo: number(block, "tyo"),
            },
            "delay_s" => Self::Delay {
                seconds: number(block, "s"),
            },
            "release_gate" => Self::ReleaseGate,
            other => Self::Unrecognized {
                block: other.to_string(),
            },
        }
    }
}

/// Commands following `role`'s start marker. Each inner slice is one top-level stack
/// in program order; a missing marker yields no commands.
pub fn read_chain<B: BlockRecord>(role: RobotRole, stacks: &[Vec<B>]) -> Vec<Command> {
    let marker = role.start_marker();
    let Some(stack) = stacks
        .iter()
        .find(|s| s.first().is_some_and(|b| b.kind() == marker))
    else {
        return Vec::new();
    };

    stack.iter().skip(1).map(Command::from_block).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drive_block_coerces_fields() {
        let b = Block::new("drive_to")
            .with_field("tx", "1.5")
            .with_field("ty", "oops")
            .with_field("h", "90")
            .with_field("Axial", "back");
        assert_eq!(
            Command::from_block(&b),
            Command::Drive {
                tx: 1.5,
                ty: 0.0,
                heading_deg: 90.0,
                axial: Axial::Back,
                lateral: Lateral::Center,
            }
        );
    }

    #[test]
    fn deposit_block_reads_locale_and_sorted() {
        let b = Block::new("deposit")
            .with_field("locale", "near")
            .with_field("sorted", "true")
            .with_field("txo", "-1");
        assert_eq!(
            Command::from_block(&b),
            Command::Deposit {
                locale: Locale::Near,
                sorted: true,
                txo: -1.0,
                tyo: 0.0,
            }
        );
    }

    #[test]
    fn unknown_block_kind_is_kept_as_unrecognized() {
        let b = Block::new("spin_in_place");
        assert_eq!(
            Command::from_block(&b),
            Command::Unrecognized {
                block: "spin_in_place".to_string()
            }
        );
    }

    #[test]
    fn chains_are_selected_by_start_marker() {
        let stacks = vec![
            vec![
                Block::new("partner_start"),
                Block::new("release_gate"),
            ],
            vec![
                Block::new("start"),
                Block::new("intake_human"),
                Block::new("delay_s").with_field("s", "2"),
            ],
        ];
        assert_eq!(
            read_chain(RobotRole::Primary, &stacks),
            vec![Command::IntakeHuman, Command::Delay { seconds: 2.0 }]
        );
        assert_eq!(
            read_chain(RobotRole::Partner, &stacks),
            vec![Command::ReleaseGate]
        );
        assert!(read_chain::<Block>(RobotRole::Primary, &[]).is_empty());
    }

    #[test]
    fn fractional_spike_selects_nothing() {
        let b = Block::new("intake_row").with_field("spike", "1.5");
        let cmd = Command::from_block(&b);
        assert_eq!(cmd, Command::IntakeRow { spike: -1 });
        assert_eq!(
            Command::from_block(&Block::new("intake_row").with_field("spike", "2")),
            Command::IntakeRow { spike: 2 }
        );
    }
}
