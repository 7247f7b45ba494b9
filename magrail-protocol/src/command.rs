//! Command grammar
//!
//! A line is split on `_` into at most three fields; the first field picks
//! an entry in [`GRAMMAR`], which validates the remaining fields. The last
//! field keeps any further underscores, so `MAG_1_ON_X` fails as a bad
//! state rather than being silently shortened.

use core::fmt;

use heapless::Vec;

/// Maximum number of `_`-separated fields in a command
const MAX_FIELDS: usize = 3;

/// Carriage travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Away from home (DIR line low)
    #[default]
    Forward,
    /// Toward home (DIR line high)
    Reverse,
}

/// Which magnet(s) a `MAG_` command addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MagnetTarget {
    /// A single magnet, 1-based
    Single(u8),
    /// Every magnet in the bank
    All,
}

/// A validated instruction
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Energize or release magnet(s)
    SetMagnet { target: MagnetTarget, on: bool },
    /// Set the direction used by subsequent moves
    SetMotorDirection(Direction),
    /// Move the carriage by a positive distance in mm
    MoveLinear(f32),
    /// Rotate the drive shaft by a positive angle in degrees
    MoveAngular(f32),
    /// Run the scripted demo
    RunDemo,
    /// Print the language reference
    ShowHelp,
}

/// Reasons a line is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Unknown keyword, wrong field count or misplaced separator
    InvalidMessage,
    /// `<num>` is neither a digit string nor `ALL`
    InvalidMagnetNumber { magnet_count: u8 },
    /// `<num>` parsed but lies outside `1..=N`
    MagnetOutOfRange(u32),
    /// `<state>` is not `ON` or `OFF`
    InvalidMagnetState,
    /// `<disp>` is non-numeric, non-positive or not finite
    InvalidDisplacement,
    /// `<type>` is not `LIN` or `ANG`
    UnknownMotionType,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidMessage => f.write_str("Invalid Message"),
            CommandError::InvalidMagnetNumber { magnet_count } => write!(
                f,
                "Invalid magnet number supplied (must be integer between 1->{}, or \"ALL\")",
                magnet_count
            ),
            CommandError::MagnetOutOfRange(_) => f.write_str("Invalid magnet number"),
            CommandError::InvalidMagnetState => {
                f.write_str("Invalid magnet state (must be \"ON\" or \"OFF\")")
            }
            CommandError::InvalidDisplacement => f.write_str("Invalid <disp> supplied"),
            CommandError::UnknownMotionType => {
                f.write_str("Invalid motion type (must be \"LIN\" or \"ANG\")")
            }
        }
    }
}

/// Fields of a tokenized line, indexed from the keyword
type Fields<'a> = Vec<&'a str, MAX_FIELDS>;

/// Validates the fields that follow a keyword
type FieldParser = fn(&Fields<'_>, u8) -> Result<Command, CommandError>;

/// Keyword table: first field → parser for the full field list
const GRAMMAR: &[(&str, FieldParser)] = &[
    ("DEMO", parse_demo),
    ("HELP", parse_help),
    ("MAG", parse_magnet),
    ("MOT", parse_motor),
];

impl Command {
    /// Parse a line (without terminator) into a command
    ///
    /// `magnet_count` is the number of magnets in the bank, used to
    /// range-check `MAG_<n>_...`. Trailing whitespace is ignored; leading
    /// whitespace is not.
    pub fn parse(line: &str, magnet_count: u8) -> Result<Self, CommandError> {
        let fields = tokenize(line.trim_end());
        let keyword = fields.first().ok_or(CommandError::InvalidMessage)?;

        GRAMMAR
            .iter()
            .find(|(name, _)| name == keyword)
            .ok_or(CommandError::InvalidMessage)
            .and_then(|(_, parser)| parser(&fields, magnet_count))
    }

    /// Parse raw line bytes
    ///
    /// Returns `Ok(None)` for blank lines, which are ignored rather than
    /// rejected. Bytes that are not UTF-8 are an invalid message.
    pub fn parse_bytes(line: &[u8], magnet_count: u8) -> Result<Option<Self>, CommandError> {
        let text = core::str::from_utf8(line).map_err(|_| CommandError::InvalidMessage)?;
        if text.trim_end().is_empty() {
            return Ok(None);
        }
        Self::parse(text, magnet_count).map(Some)
    }
}

/// Split into at most [`MAX_FIELDS`] fields on `_`
fn tokenize(line: &str) -> Fields<'_> {
    let mut fields = Vec::new();
    for field in line.splitn(MAX_FIELDS, '_') {
        // splitn never yields more than MAX_FIELDS items
        let _ = fields.push(field);
    }
    fields
}

fn parse_demo(fields: &Fields<'_>, _magnet_count: u8) -> Result<Command, CommandError> {
    match fields.len() {
        1 => Ok(Command::RunDemo),
        _ => Err(CommandError::InvalidMessage),
    }
}

fn parse_help(fields: &Fields<'_>, _magnet_count: u8) -> Result<Command, CommandError> {
    match fields.len() {
        1 => Ok(Command::ShowHelp),
        _ => Err(CommandError::InvalidMessage),
    }
}

/// `MAG_<num>_<state>`
fn parse_magnet(fields: &Fields<'_>, magnet_count: u8) -> Result<Command, CommandError> {
    let [_, num, state] = fields.as_slice() else {
        return Err(CommandError::InvalidMessage);
    };

    let target = if num.starts_with(|c: char| c.is_ascii_digit()) {
        Some(leading_uint(num))
    } else if *num == "ALL" {
        None
    } else {
        return Err(CommandError::InvalidMagnetNumber { magnet_count });
    };

    let on = match *state {
        "ON" => true,
        "OFF" => false,
        _ => return Err(CommandError::InvalidMagnetState),
    };

    let target = match target {
        None => MagnetTarget::All,
        Some(index) if index >= 1 && index <= u32::from(magnet_count) => {
            MagnetTarget::Single(index as u8)
        }
        Some(index) => return Err(CommandError::MagnetOutOfRange(index)),
    };

    Ok(Command::SetMagnet { target, on })
}

/// `MOT_FWD`, `MOT_REV` and `MOT_<type>_<disp>`
fn parse_motor(fields: &Fields<'_>, _magnet_count: u8) -> Result<Command, CommandError> {
    match fields.as_slice() {
        [_, "FWD"] => Ok(Command::SetMotorDirection(Direction::Forward)),
        [_, "REV"] => Ok(Command::SetMotorDirection(Direction::Reverse)),
        [_, kind, disp] if kind.len() == 3 => {
            let disp = leading_float(disp);
            if !(disp > 0.0 && disp.is_finite()) {
                return Err(CommandError::InvalidDisplacement);
            }

            match *kind {
                "LIN" => Ok(Command::MoveLinear(disp)),
                "ANG" => Ok(Command::MoveAngular(disp)),
                _ => Err(CommandError::UnknownMotionType),
            }
        }
        _ => Err(CommandError::InvalidMessage),
    }
}

/// Decimal value of the leading digit run, saturating on overflow
fn leading_uint(s: &str) -> u32 {
    s.bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u32, |acc, d| {
            acc.saturating_mul(10).saturating_add(u32::from(d - b'0'))
        })
}

/// Value of the leading `[sign]digits[.digits]` run, or 0.0 if there is none
fn leading_float(s: &str) -> f32 {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: u8 = 6;

    #[test]
    fn test_zero_argument_commands() {
        assert_eq!(Command::parse("DEMO", N), Ok(Command::RunDemo));
        assert_eq!(Command::parse("HELP", N), Ok(Command::ShowHelp));
        assert_eq!(Command::parse("HELP \t", N), Ok(Command::ShowHelp));
        assert_eq!(Command::parse("DEMO ", N), Ok(Command::RunDemo));
    }

    #[test]
    fn test_keywords_are_exact() {
        assert_eq!(Command::parse("demo", N), Err(CommandError::InvalidMessage));
        assert_eq!(Command::parse(" HELP", N), Err(CommandError::InvalidMessage));
        assert_eq!(Command::parse("DEMO_1", N), Err(CommandError::InvalidMessage));
        assert_eq!(Command::parse("HELPME", N), Err(CommandError::InvalidMessage));
        assert_eq!(Command::parse("", N), Err(CommandError::InvalidMessage));
    }

    #[test]
    fn test_magnet_single() {
        assert_eq!(
            Command::parse("MAG_3_ON", N),
            Ok(Command::SetMagnet {
                target: MagnetTarget::Single(3),
                on: true
            })
        );
        assert_eq!(
            Command::parse("MAG_6_OFF", N),
            Ok(Command::SetMagnet {
                target: MagnetTarget::Single(6),
                on: false
            })
        );
    }

    #[test]
    fn test_magnet_all() {
        assert_eq!(
            Command::parse("MAG_ALL_OFF", N),
            Ok(Command::SetMagnet {
                target: MagnetTarget::All,
                on: false
            })
        );
    }

    #[test]
    fn test_magnet_out_of_range() {
        assert_eq!(
            Command::parse("MAG_7_ON", N),
            Err(CommandError::MagnetOutOfRange(7))
        );
        assert_eq!(
            Command::parse("MAG_0_ON", N),
            Err(CommandError::MagnetOutOfRange(0))
        );
        assert_eq!(
            Command::parse("MAG_99999999999_ON", N),
            Err(CommandError::MagnetOutOfRange(u32::MAX))
        );
    }

    #[test]
    fn test_magnet_number_stops_at_first_non_digit() {
        assert_eq!(
            Command::parse("MAG_2x_ON", N),
            Ok(Command::SetMagnet {
                target: MagnetTarget::Single(2),
                on: true
            })
        );
    }

    #[test]
    fn test_magnet_bad_number() {
        let err = Err(CommandError::InvalidMagnetNumber { magnet_count: N });
        assert_eq!(Command::parse("MAG_x_ON", N), err);
        assert_eq!(Command::parse("MAG__ON", N), err);
        assert_eq!(Command::parse("MAG_all_ON", N), err);
    }

    #[test]
    fn test_magnet_bad_state() {
        assert_eq!(
            Command::parse("MAG_1_on", N),
            Err(CommandError::InvalidMagnetState)
        );
        assert_eq!(
            Command::parse("MAG_1_ON_X", N),
            Err(CommandError::InvalidMagnetState)
        );
        // State is checked before range
        assert_eq!(
            Command::parse("MAG_9_MAYBE", N),
            Err(CommandError::InvalidMagnetState)
        );
    }

    #[test]
    fn test_magnet_missing_separator() {
        assert_eq!(Command::parse("MAG_3", N), Err(CommandError::InvalidMessage));
        assert_eq!(Command::parse("MAG", N), Err(CommandError::InvalidMessage));
        assert_eq!(Command::parse("MAG3_ON", N), Err(CommandError::InvalidMessage));
    }

    #[test]
    fn test_motor_direction() {
        assert_eq!(
            Command::parse("MOT_FWD", N),
            Ok(Command::SetMotorDirection(Direction::Forward))
        );
        assert_eq!(
            Command::parse("MOT_REV", N),
            Ok(Command::SetMotorDirection(Direction::Reverse))
        );
        assert_eq!(Command::parse("MOT_UP", N), Err(CommandError::InvalidMessage));
    }

    #[test]
    fn test_motor_moves() {
        assert_eq!(Command::parse("MOT_LIN_10.5", N), Ok(Command::MoveLinear(10.5)));
        assert_eq!(Command::parse("MOT_ANG_120", N), Ok(Command::MoveAngular(120.0)));
        assert_eq!(Command::parse("MOT_LIN_.5", N), Ok(Command::MoveLinear(0.5)));
        assert_eq!(Command::parse("MOT_LIN_2mm", N), Ok(Command::MoveLinear(2.0)));
    }

    #[test]
    fn test_motor_bad_displacement() {
        let err = Err(CommandError::InvalidDisplacement);
        assert_eq!(Command::parse("MOT_LIN_-5", N), err);
        assert_eq!(Command::parse("MOT_LIN_0", N), err);
        assert_eq!(Command::parse("MOT_ANG_abc", N), err);
        assert_eq!(Command::parse("MOT_ANG_", N), err);
        assert_eq!(Command::parse("MOT_XYZ_abc", N), err);
    }

    #[test]
    fn test_motor_unknown_type() {
        assert_eq!(
            Command::parse("MOT_XYZ_5", N),
            Err(CommandError::UnknownMotionType)
        );
    }

    #[test]
    fn test_motor_separator_position() {
        assert_eq!(Command::parse("MOT_LINE_5", N), Err(CommandError::InvalidMessage));
        assert_eq!(Command::parse("MOT_LIN", N), Err(CommandError::InvalidMessage));
        assert_eq!(Command::parse("MOT", N), Err(CommandError::InvalidMessage));
    }

    #[test]
    fn test_parse_bytes() {
        assert_eq!(Command::parse_bytes(b"", N), Ok(None));
        assert_eq!(Command::parse_bytes(b"  ", N), Ok(None));
        assert_eq!(Command::parse_bytes(b"HELP", N), Ok(Some(Command::ShowHelp)));
        assert_eq!(
            Command::parse_bytes(&[0xFF, b'A'], N),
            Err(CommandError::InvalidMessage)
        );
    }

    #[test]
    fn test_leading_float() {
        assert_eq!(leading_float("10.5"), 10.5);
        assert_eq!(leading_float("-3"), -3.0);
        assert_eq!(leading_float("7."), 7.0);
        assert_eq!(leading_float("."), 0.0);
        assert_eq!(leading_float("1e5"), 1.0);
        assert_eq!(leading_float(""), 0.0);
    }

    #[test]
    fn test_error_messages() {
        use core::fmt::Write;

        let mut s: heapless::String<96> = heapless::String::new();
        write!(s, "{}", CommandError::InvalidMagnetNumber { magnet_count: 6 }).unwrap();
        assert_eq!(
            s.as_str(),
            "Invalid magnet number supplied (must be integer between 1->6, or \"ALL\")"
        );

        s.clear();
        write!(s, "{}", CommandError::InvalidMessage).unwrap();
        assert_eq!(s.as_str(), "Invalid Message");
    }

    #[test]
    fn test_direction_defaults_forward() {
        assert_eq!(Direction::default(), Direction::Forward);
    }
}
