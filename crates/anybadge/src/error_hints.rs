use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("either a label or a value") {
        push_hint(&mut out, "Pass `--label`, `--value`, or both.");
    }

    if haystack.contains("invalid color code") {
        push_hint(
            &mut out,
            "Color names are case-insensitive (`green`, `light_grey`); hex codes like `#4c1` also work.",
        );
    }

    if haystack.contains("font name") || haystack.contains("font size") {
        push_hint(
            &mut out,
            "Pick one of the listed fonts with `--font` and a listed size with `--font-size`.",
        );
    }

    if haystack.contains("already exists") {
        push_hint(&mut out, "Pass `--overwrite` to replace the existing file.");
    }

    if haystack.contains("may not be a directory") {
        push_hint(
            &mut out,
            "Give `--file` a file name, e.g. `--file coverage.svg`.",
        );
    }

    if haystack.contains("invalid threshold") {
        push_hint(
            &mut out,
            "Thresholds look like `2=red 4=orange 8=yellow 10=green`, or name a style such as `pylint` or `coverage`.",
        );
    }

    if haystack.contains("cannot be compared") {
        push_hint(
            &mut out,
            "Numeric values need numeric threshold keys; use `--semver` for version thresholds.",
        );
    }

    if haystack.contains("invalid semantic version") {
        push_hint(
            &mut out,
            "Semantic versions look like `1.2.3`; drop `--semver` for plain numbers.",
        );
    }

    if haystack.contains("invalid value format") {
        push_hint(
            &mut out,
            "Value formats take exactly one conversion, e.g. `%.2f` or `%d%%`.",
        );
    }

    if haystack.contains("padding") && haystack.contains("must be a finite number") {
        push_hint(
            &mut out,
            "Padding is counted in characters per side, e.g. `--padding 1` or `--value-padding 0.5`.",
        );
    }

    if haystack.contains("neither a built-in template") {
        push_hint(
            &mut out,
            "Use `default`, `gitlab_scoped`, or the path of a readable .svg template.",
        );
    }

    if haystack.contains("config file not found") {
        push_hint(&mut out, "Check the path given to `--config`.");
    }

    if haystack.contains("toml") && (haystack.contains("parse") || haystack.contains("invalid")) {
        push_hint(
            &mut out,
            "Check `anybadge.toml` syntax: `[defaults]` for flag defaults, `[styles.<name>]` for named thresholds.",
        );
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}
