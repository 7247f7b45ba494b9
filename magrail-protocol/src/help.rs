//! Command language reference printed on `HELP` and at boot

use core::fmt;

const RULE: &str = "================";
const SEPARATOR: &str = "---";

/// Write the reference, one `\r\n`-terminated line at a time
pub fn write_help<W: fmt::Write>(w: &mut W, magnet_count: u8) -> fmt::Result {
    let mut line = |text: fmt::Arguments<'_>| -> fmt::Result {
        w.write_fmt(text)?;
        w.write_str("\r\n")
    };

    line(format_args!("CONTROL LANGUAGE"))?;
    line(format_args!("{}", RULE))?;

    line(format_args!("MAG_<num>_<state>"))?;
    line(format_args!("  desc:     Turn electromagnet(s) ON/OFF"))?;
    line(format_args!("  example:  \"MAG_3_ON\", \"MAG_ALL_OFF\""))?;
    line(format_args!("  args:"))?;
    line(format_args!(
        "    - num:    must be an integer between 1->{} or \"ALL\"",
        magnet_count
    ))?;
    line(format_args!("    - state:  must be either \"ON\" or \"OFF\""))?;
    line(format_args!("{}", SEPARATOR))?;

    line(format_args!("MOT_<dir>"))?;
    line(format_args!(
        "  desc:     Set carriage travel direction for subsequent MOT_ commands"
    ))?;
    line(format_args!("  example:  \"MOT_FWD\", \"MOT_REV\""))?;
    line(format_args!("  args:"))?;
    line(format_args!("    - dir:  must be either \"FWD\" or \"REV\""))?;
    line(format_args!("{}", SEPARATOR))?;

    line(format_args!("MOT_<type>_<disp>"))?;
    line(format_args!(
        "  desc:     Move the carriage a linear distance or rotate the drive shaft by an angle"
    ))?;
    line(format_args!(
        "            The direction assumes the most recent call of the \"MOT_<dir>\" command"
    ))?;
    line(format_args!("            (or \"FWD\" after reset)"))?;
    line(format_args!("  example:  \"MOT_LIN_10\", \"MOT_ANG_120\""))?;
    line(format_args!("  args:"))?;
    line(format_args!(
        "    - type: type of motion. must be either \"LIN\" (linear; mm) or \"ANG\" (angular; degrees)"
    ))?;
    line(format_args!(
        "    - disp: amount of displacement to apply as a floating-point number (units described in <type>)"
    ))?;
    line(format_args!("{}", SEPARATOR))?;

    line(format_args!("DEMO"))?;
    line(format_args!(
        "  desc:     Run demo procedure. Cycles each cage into then out of the irradiation field, with delay"
    ))?;
    line(format_args!("{}", SEPARATOR))?;

    line(format_args!("HELP"))?;
    line(format_args!("  desc:     Show this help message"))?;
    line(format_args!("{}", RULE))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts lines and keeps the one mentioning `num:`
    #[derive(Default)]
    struct Collector {
        lines: usize,
        num_line: heapless::String<96>,
        current: heapless::String<128>,
    }

    impl fmt::Write for Collector {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            for c in s.chars() {
                if c == '\n' {
                    self.lines += 1;
                    if self.current.contains("- num:") {
                        self.num_line.clear();
                        self.num_line
                            .push_str(self.current.trim_end())
                            .map_err(|_| fmt::Error)?;
                    }
                    self.current.clear();
                } else {
                    self.current.push(c).map_err(|_| fmt::Error)?;
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_help_substitutes_magnet_count() {
        let mut out = Collector::default();
        write_help(&mut out, 6).unwrap();

        assert_eq!(
            out.num_line.as_str(),
            "    - num:    must be an integer between 1->6 or \"ALL\""
        );
        assert_eq!(out.lines, 30);
        assert!(out.current.is_empty());
    }
}
