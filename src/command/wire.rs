use crate::{
    command::model::{Command, Locale},
    foundation::{
        error::PlanResult,
        math::{coerce_number, exact_index, finite_or_zero, round_half_up},
    },
    geometry::offset::{Axial, Lateral},
};

/// Error tag carried by placeholders for entries that could not be decoded.
pub const PARSE_FAILED: &str = "parse_failed";

/// A command in the controller's wire schema, tagged by `cmd`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "cmd", rename_all = "lowercase")]
pub enum WireCommand {
    Drive {
        #[serde(default, deserialize_with = "lenient_number", serialize_with = "compact_number")]
        tx: f64,
        #[serde(default, deserialize_with = "lenient_number", serialize_with = "compact_number")]
        ty: f64,
        #[serde(default, deserialize_with = "lenient_number", serialize_with = "compact_number")]
        h: f64,
        #[serde(default)]
        axial: Axial,
        #[serde(default)]
        lateral: Lateral,
    },
    Intake {
        #[serde(default, deserialize_with = "lenient_index")]
        spike: i64,
    },
    Deposit {
        locale: Locale,
        #[serde(default)]
        sorted: bool,
        #[serde(default, deserialize_with = "lenient_number", serialize_with = "compact_number")]
        txo: f64,
        #[serde(default, deserialize_with = "lenient_number", serialize_with = "compact_number")]
        tyo: f64,
    },
    Delay {
        #[serde(default, deserialize_with = "lenient_seconds")]
        seconds: i64,
    },
    Release,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FailedEntry {
    pub cmd: String,
    pub error: String,
}

/// One slot of an exported plan. Failed slots keep their position so consumers can
/// report and skip them.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum PlanEntry {
    Command(WireCommand),
    Failed(FailedEntry),
}

impl PlanEntry {
    pub fn failed(cmd: impl Into<String>) -> Self {
        Self::Failed(FailedEntry {
            cmd: cmd.into(),
            error: PARSE_FAILED.to_string(),
        })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Decodes one JSON element. Never fails: undecodable elements become placeholders.
    pub fn from_value(value: serde_json::Value) -> Self {
        let cmd = value
            .get("cmd")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("unknown")
            .to_string();

        if let Some(error) = value.get("error") {
            return Self::Failed(FailedEntry {
                cmd,
                error: error.as_str().unwrap_or(PARSE_FAILED).to_string(),
            });
        }

        match serde_json::from_value::<WireCommand>(value) {
            Ok(c) => Self::Command(c),
            Err(e) => {
                tracing::warn!(cmd = %cmd, error = %e, "malformed plan entry");
                Self::failed(cmd)
            }
        }
    }
}

impl<'de> serde::Deserialize<'de> for PlanEntry {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from_value(value))
    }
}

fn compact_number<S: serde::Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    let v = finite_or_zero(*v);
    if v.fract() == 0.0 && v.abs() < 9.0e15 {
        s.serialize_i64(v as i64)
    } else {
        s.serialize_f64(v)
    }
}

// Number fields read like editor fields: strings are coerced, anything else is 0.
fn lenient_number<'de, D: serde::Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    let value = <serde_json::Value as serde::Deserialize>::deserialize(d)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().map_or(0.0, finite_or_zero),
        serde_json::Value::String(s) => coerce_number(&s),
        _ => 0.0,
    })
}

fn lenient_index<'de, D: serde::Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    lenient_number(d).map(exact_index)
}

fn lenient_seconds<'de, D: serde::Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    lenient_number(d).map(round_half_up)
}

/// Static command-to-wire mapping.
pub fn encode_command(cmd: &Command) -> PlanEntry {
    let wire = match cmd {
        Command::Drive {
            tx,
            ty,
            heading_deg,
            axial,
            lateral,
        } => WireCommand::Drive {
            tx: finite_or_zero(*tx),
            ty: finite_or_zero(*ty),
            h: finite_or_zero(*heading_deg),
            axial: *axial,
            lateral: *lateral,
        },
        Command::IntakeRow { spike } => WireCommand::Intake { spike: *spike },
        Command::IntakeHuman => WireCommand::Intake { spike: 0 },
        Command::Deposit {
            locale,
            sorted,
            txo,
            tyo,
        } => WireCommand::Deposit {
            locale: *locale,
            sorted: *sorted,
            txo: finite_or_zero(*txo),
            tyo: finite_or_zero(*tyo),
        },
        Command::Delay { seconds } => WireCommand::Delay {
            seconds: round_half_up(*seconds),
        },
        Command::ReleaseGate => WireCommand::Release,
        Command::Unrecognized { block } => return PlanEntry::failed(block.as_str()),
    };
    PlanEntry::Command(wire)
}

pub fn encode_plan(commands: &[Command]) -> Vec<PlanEntry> {
    commands.iter().map(encode_command).collect()
}

/// Parses a JSON array of plan entries. Only a non-array document is an error.
pub fn parse_plan(json: &str) -> PlanResult<Vec<PlanEntry>> {
    Ok(serde_json::from_str(json)?)
}

pub fn plan_to_json(entries: &[PlanEntry]) -> PlanResult<String> {
    Ok(serde_json::to_string(entries)?)
}

impl From<&WireCommand> for Command {
    fn from(w: &WireCommand) -> Self {
        match w {
            WireCommand::Drive {
                tx,
                ty,
                h,
                axial,
                lateral,
            } => Command::Drive {
                tx: *tx,
                ty: *ty,
                heading_deg: *h,
                axial: *axial,
                lateral: *lateral,
            },
            WireCommand::Intake { spike } => Command::IntakeRow { spike: *spike },
            WireCommand::Deposit {
                locale,
                sorted,
                txo,
                tyo,
            } => Command::Deposit {
                locale: *locale,
                sorted: *sorted,
                txo: *txo,
                tyo: *tyo,
            },
            WireCommand::Delay { seconds } => Command::Delay {
                seconds: *seconds as f64,
            },
            WireCommand::Release => Command::ReleaseGate,
        }
    }
}

/// Commands of the decodable entries, in order. Failed slots are reported and skipped.
pub fn commands_from_plan(entries: &[PlanEntry]) -> Vec<Command> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(i, e)| match e {
            PlanEntry::Command(w) => Some(Command::from(w)),
            PlanEntry::Failed(f) => {
                tracing::warn!(index = i, cmd = %f.cmd, error = %f.error, "skipping failed entry");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn drive_emits_integral_numbers_as_integers() {
        let entry = encode_command(&Command::drive(2.0, -1.0, 90.0));
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({"cmd":"drive","tx":2,"ty":-1,"h":90,"axial":"center","lateral":"center"})
        );
        let entry = encode_command(&Command::drive(0.5, f64::NAN, 0.0));
        let s = serde_json::to_string(&entry).unwrap();
        assert!(s.contains(r#""tx":0.5"#), "{s}");
        assert!(s.contains(r#""ty":0"#), "{s}");
    }

    #[test]
    fn intake_human_and_delay_follow_wire_conventions() {
        assert_eq!(
            serde_json::to_value(encode_command(&Command::IntakeHuman)).unwrap(),
            json!({"cmd":"intake","spike":0})
        );
        assert_eq!(
            serde_json::to_value(encode_command(&Command::Delay { seconds: 2.5 })).unwrap(),
            json!({"cmd":"delay","seconds":3})
        );
        assert_eq!(
            serde_json::to_value(encode_command(&Command::ReleaseGate)).unwrap(),
            json!({"cmd":"release"})
        );
    }

    #[test]
    fn unrecognized_commands_hold_their_slot() {
        let plan = encode_plan(&[
            Command::IntakeHuman,
            Command::Unrecognized {
                block: "wiggle".to_string(),
            },
            Command::ReleaseGate,
        ]);
        assert_eq!(plan.len(), 3);
        assert_eq!(
            serde_json::to_value(&plan[1]).unwrap(),
            json!({"cmd":"wiggle","error":"parse_failed"})
        );
    }

    #[test]
    fn parse_keeps_positions_of_malformed_entries() {
        let plan = parse_plan(
            r#"[{"cmd":"intake","spike":2},{"cmd":"deposit","locale":"sideways"},{"cmd":"teleport"},{"cmd":"release"}]"#,
        )
        .unwrap();
        assert_eq!(plan.len(), 4);
        assert_eq!(plan[0], PlanEntry::Command(WireCommand::Intake { spike: 2 }));
        assert_eq!(plan[1], PlanEntry::failed("deposit"));
        assert_eq!(plan[2], PlanEntry::failed("teleport"));
        assert_eq!(plan[3], PlanEntry::Command(WireCommand::Release));
    }

    #[test]
    fn error_tagged_entries_stay_failed() {
        let plan = parse_plan(r#"[{"cmd":"release","error":"generator_failed"}]"#).unwrap();
        assert_eq!(
            plan[0],
            PlanEntry::Failed(FailedEntry {
                cmd: "release".to_string(),
                error: "generator_failed".to_string(),
            })
        );
    }

    #[test]
    fn parse_rejects_non_array_documents() {
        assert!(parse_plan(r#"{"cmd":"release"}"#).is_err());
        assert!(parse_plan("not json").is_err());
    }

    #[test]
    fn commands_from_plan_skips_failed_slots() {
        let plan = vec![
            PlanEntry::Command(WireCommand::Intake { spike: 0 }),
            PlanEntry::failed("bogus"),
            PlanEntry::Command(WireCommand::Delay { seconds: 2 }),
        ];
        assert_eq!(
            commands_from_plan(&plan),
            vec![
                Command::IntakeRow { spike: 0 },
                Command::Delay { seconds: 2.0 }
            ]
        );
    }

    #[test]
    fn missing_or_loose_numbers_read_as_defaults() {
        let plan = parse_plan(
            r#"[{"cmd":"drive","tx":1,"ty":2},{"cmd":"delay"},{"cmd":"intake"},
                {"cmd":"deposit","locale":"near"},{"cmd":"intake","spike":1.0},
                {"cmd":"intake","spike":1.5},{"cmd":"delay","seconds":"soon"},
                {"cmd":"drive","tx":"0.5","ty":null,"h":"90"}]"#,
        )
        .unwrap();
        assert!(plan.iter().all(|e| !e.is_failed()), "{plan:?}");
        assert_eq!(
            commands_from_plan(&plan),
            vec![
                Command::drive(1.0, 2.0, 0.0),
                Command::Delay { seconds: 0.0 },
                Command::IntakeRow { spike: 0 },
                Command::deposit(Locale::Near, 0.0, 0.0),
                Command::IntakeRow { spike: 1 },
                Command::IntakeRow { spike: -1 },
                Command::Delay { seconds: 0.0 },
                Command::drive(0.5, 0.0, 90.0),
            ]
        );
    }

    #[test]
    fn fractional_delay_seconds_round_half_up() {
        let plan = parse_plan(r#"[{"cmd":"delay","seconds":2.5}]"#).unwrap();
        assert_eq!(plan[0], PlanEntry::Command(WireCommand::Delay { seconds: 3 }));
    }
}
