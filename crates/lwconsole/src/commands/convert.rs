//! `convert`: number-base and ASCII conversions.

use crate::command::{Command, CommandResult};
use crate::error::CommandError;

const CONTROL_NAMES: &[(u32, &str)] = &[
    (0, "[NUL]"),
    (1, "[SOH]"),
    (2, "[STX]"),
    (3, "[ETX]"),
    (4, "[EOT]"),
    (5, "[ENQ]"),
    (6, "[ACK]"),
    (7, "[BEL]"),
    (8, "[BS]"),
    (9, "[HT]"),
    (10, "[LF]"),
    (11, "[VT]"),
    (12, "[FF]"),
    (13, "[CR]"),
    (14, "[SO]"),
    (15, "[SI]"),
    (16, "[DLE]"),
    (17, "[DC1]"),
    (18, "[DC2]"),
    (19, "[DC3]"),
    (20, "[DC4]"),
    (21, "[NAK]"),
    (22, "[SYN]"),
    (23, "[ETB]"),
    (24, "[CAN]"),
    (25, "[EM]"),
    (26, "[SUB]"),
    (27, "[ESC]"),
    (28, "[FS]"),
    (29, "[GS]"),
    (30, "[RS]"),
    (31, "[US]"),
    (32, "[SP]"),
    (127, "[DEL]"),
];

pub struct ConvertCommand;

impl Command for ConvertCommand {
    fn name(&self) -> &str {
        "convert"
    }

    fn description(&self) -> &str {
        "Converts from/to different units/bases. Currently supported: base, ascii"
    }

    fn usage(&self) -> Option<&str> {
        Some("<base|ascii> <Parameters>")
    }

    fn author(&self) -> Option<&str> {
        Some("Trikolon, TheBiochemic")
    }

    fn run(&self, args: &[&str]) -> CommandResult {
        let Some((mode, params)) = args.split_first() else {
            return Err(CommandError::usage());
        };
        match mode.to_lowercase().as_str() {
            "base" => convert_base(params),
            "ascii" => convert_ascii(params),
            _ => Err(CommandError::usage()),
        }
    }
}

fn convert_base(params: &[&str]) -> CommandResult {
    let [from, to, number] = params else {
        return Err(CommandError::usage_with(
            "Parameters: <FromBase> <ToBase> <Number>",
        ));
    };
    let from: u32 = from.parse()?;
    let to: u32 = to.parse()?;
    if !(2..=36).contains(&from) || !(2..=36).contains(&to) {
        return Err(CommandError::usage_with("Bases must be between 2 and 36"));
    }
    let value = u64::from_str_radix(number, from)?;
    Ok(Some(to_radix(value, to)))
}

fn to_radix(mut value: u64, base: u32) -> String {
    const DIGITS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % base as u64) as usize] as char);
        value /= base as u64;
    }
    out.iter().rev().collect()
}

fn convert_ascii(params: &[&str]) -> CommandResult {
    if params.is_empty() {
        return Ok(Some(ascii_table()));
    }
    let mut lines = Vec::new();
    for param in params {
        match param.parse::<u32>() {
            Ok(code) if code >= 128 => {
                return Err(CommandError::usage_with(
                    "Number is too large (not included in ASCII range)",
                ));
            }
            Ok(code) => lines.push(format!("{code}={}", ascii_repr(code))),
            // Reverse lookup of a control-code mnemonic, e.g. "ESC".
            Err(_) => {
                let wanted = format!("[{}]", param.to_uppercase());
                if let Some((code, name)) =
                    CONTROL_NAMES.iter().find(|(_, name)| *name == wanted)
                {
                    lines.push(format!("{name}={code}"));
                }
            }
        }
    }
    Ok(Some(lines.join("\n")))
}

fn ascii_repr(code: u32) -> String {
    CONTROL_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| {
            char::from_u32(code)
                .map(|c| c.to_string())
                .unwrap_or_default()
        })
}

fn ascii_table() -> String {
    let mut out = String::new();
    for code in 0u32..128 {
        out.push_str(&format!("{code}={}", ascii_repr(code)));
        if code % 8 == 7 {
            out.push('\n');
        } else {
            out.push('\t');
        }
    }
    out.trim_end().to_string()
}
