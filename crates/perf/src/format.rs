//! Message template rendering

use std::fmt::Write;

use crate::sink::Arg;

/// Substitute `{Placeholder}` tokens in `template` with `args`, in order
///
/// `{{` and `}}` render as literal braces. Placeholders left over once `args`
/// runs out are kept verbatim. Argument text is never re-parsed, so braces in
/// a step name cannot disturb the template.
pub fn render(template: &str, args: &[Arg]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut args = args.iter();
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }

        if tail.starts_with('{') {
            if let Some(end) = tail.find('}') {
                match args.next() {
                    Some(arg) => {
                        let _ = write!(out, "{arg}");
                    }
                    None => out.push_str(&tail[..=end]),
                }
                rest = &tail[end + 1..];
                continue;
            }
        }

        // unmatched brace
        out.push_str(&tail[..1]);
        rest = &tail[1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_positional_substitution() {
        let args = [Arg::from("db"), Arg::Millis(12.5)];
        assert_eq!(
            render("Step {Name}: {Elapsed} ms", &args),
            "Step db: 12.5 ms"
        );
    }

    #[test]
    fn test_missing_args_keep_placeholder() {
        assert_eq!(
            render("{A} and {B}", &[Arg::from("x")]),
            "x and {B}"
        );
    }

    #[test]
    fn test_escaped_braces() {
        assert_eq!(
            render("{{literal}} {Value}", &[Arg::Millis(1.0)]),
            "{literal} 1"
        );
    }

    #[test]
    fn test_braces_in_arguments_are_not_parsed() {
        assert_eq!(
            render("{A} {B}", &[Arg::from("{weird}"), Arg::from("ok")]),
            "{weird} ok"
        );
    }

    #[test]
    fn test_unmatched_brace() {
        assert_eq!(render("open { only", &[]), "open { only");
        assert_eq!(render("close } only", &[]), "close } only");
    }
}
