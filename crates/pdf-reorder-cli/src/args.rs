use std::ffi::OsString;

/// Long options that may also be spelled with a single dash (`-in file.pdf`)
const SINGLE_DASH_LONG: &[&str] = &[
    "in",
    "out",
    "work",
    "keep",
    "backdesc",
    "rotateback",
    "blankpad",
    "plan",
    "config",
    "help",
    "version",
];

/// Rewrite `-name` / `-name=value` to `--name` / `--name=value` for the known
/// long options. Everything after a bare `--` is passed through untouched.
pub fn normalize_args<I, S>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 || passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            normalize_one(arg)
        })
        .collect()
}

fn normalize_one(arg: OsString) -> OsString {
    let Some(text) = arg.to_str() else {
        return arg;
    };
    let Some(rest) = text.strip_prefix('-') else {
        return arg;
    };
    if rest.starts_with('-') {
        return arg;
    }

    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    if SINGLE_DASH_LONG.contains(&name) {
        format!("-{}", text).into()
    } else {
        arg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(args: &[&str]) -> Vec<String> {
        normalize_args(args.iter().copied())
            .into_iter()
            .map(|arg| arg.into_string().unwrap())
            .collect()
    }

    #[test]
    fn test_single_dash_long_options() {
        assert_eq!(
            normalized(&["pdfreorder", "-in", "a.pdf", "-out", "b.pdf", "-backdesc"]),
            vec!["pdfreorder", "--in", "a.pdf", "--out", "b.pdf", "--backdesc"]
        );
    }

    #[test]
    fn test_equals_form() {
        assert_eq!(
            normalized(&["pdfreorder", "-in=a.pdf", "-work=/tmp/w"]),
            vec!["pdfreorder", "--in=a.pdf", "--work=/tmp/w"]
        );
    }

    #[test]
    fn test_double_dash_untouched() {
        assert_eq!(
            normalized(&["pdfreorder", "--in", "a.pdf", "--keep"]),
            vec!["pdfreorder", "--in", "a.pdf", "--keep"]
        );
    }

    #[test]
    fn test_unknown_and_short_untouched() {
        assert_eq!(
            normalized(&["pdfreorder", "-h", "-x", "-input", "-"]),
            vec!["pdfreorder", "-h", "-x", "-input", "-"]
        );
    }

    #[test]
    fn test_values_that_look_like_flags() {
        // A file literally named "-keep" after a bare "--" stays as is
        assert_eq!(
            normalized(&["pdfreorder", "-rotateback", "--", "-keep"]),
            vec!["pdfreorder", "--rotateback", "--", "-keep"]
        );
    }
}
