use std::ffi::OsString;

/// Rewrite single-dash long flags (`-api-key`, `-action=STOP`) into the
/// double-dash form clap expects. Short flags, values, and everything after a
/// bare `--` pass through unchanged.
///
/// Rewriting is positional only: a value spelled exactly like a known flag
/// (`--api-secret -rig-id`) is rewritten too, where Go's `flag` package
/// would have taken it as the value.
pub fn normalize<I>(argv: I, command: &clap::Command) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut longs: Vec<&str> = command.get_arguments().filter_map(|a| a.get_long()).collect();
    longs.extend(["help", "version"]);

    let mut out = Vec::new();
    let mut passthrough = false;
    for (i, arg) in argv.into_iter().enumerate() {
        if i == 0 || passthrough {
            out.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let rewritten = arg.to_str().and_then(|s| {
            let rest = s.strip_prefix('-')?;
            if rest.starts_with('-') {
                return None;
            }
            let name = rest.split('=').next().unwrap_or(rest);
            longs.contains(&name).then(|| OsString::from(format!("-{s}")))
        });
        out.push(rewritten.unwrap_or(arg));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{Arg, ArgAction, Command};

    fn command() -> Command {
        Command::new("t")
            .arg(Arg::new("api-key").long("api-key"))
            .arg(Arg::new("action").long("action"))
            .arg(Arg::new("json").long("json").short('j').action(ArgAction::SetTrue))
    }

    fn run(args: &[&str]) -> Vec<String> {
        normalize(args.iter().map(OsString::from), &command())
            .into_iter()
            .map(|a| a.into_string().unwrap())
            .collect()
    }

    #[test]
    fn single_dash_long_flags_are_doubled() {
        assert_eq!(
            run(&["rigctl", "-api-key", "k", "-action=STOP"]),
            ["rigctl", "--api-key", "k", "--action=STOP"]
        );
    }

    #[test]
    fn double_dash_and_short_flags_untouched() {
        assert_eq!(
            run(&["rigctl", "--api-key", "k", "-j"]),
            ["rigctl", "--api-key", "k", "-j"]
        );
    }

    #[test]
    fn values_that_look_like_flags_are_kept() {
        // A secret starting with a dash is not a known flag name.
        assert_eq!(
            run(&["rigctl", "--api-key", "-abc"]),
            ["rigctl", "--api-key", "-abc"]
        );
    }

    #[test]
    fn value_spelled_like_a_flag_is_rewritten() {
        assert_eq!(
            run(&["rigctl", "--api-key", "-action"]),
            ["rigctl", "--api-key", "--action"]
        );
    }

    #[test]
    fn help_is_recognised() {
        assert_eq!(run(&["rigctl", "-help"]), ["rigctl", "--help"]);
    }

    #[test]
    fn nothing_rewritten_after_separator() {
        assert_eq!(
            run(&["rigctl", "--", "-action"]),
            ["rigctl", "--", "-action"]
        );
    }

    #[test]
    fn program_name_untouched() {
        assert_eq!(run(&["-action"]), ["-action"]);
    }
}
